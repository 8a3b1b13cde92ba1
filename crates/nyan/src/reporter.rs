use crate::color::{ColorLabel, colorize};
use crate::config::RenderConfig;
use crate::cursor::Cursor;
use crate::epilogue::{epilogue, print_failure_messages};
use crate::rainbow::Rainbow;
use crate::results::AggregatedResult;
use crate::trajectory::{ROWS, Trajectory};
use std::io::{self, Write};

/// Columns reserved on the left for the scoreboard numbers.
const SCOREBOARD_WIDTH: usize = 5;

/// Test-lifecycle hooks driven by a host-framework adapter.
///
/// The host invokes these sequentially for a given reporter instance, so
/// implementations hold their mutable render state without synchronization.
/// All work is synchronous; nothing here blocks or spawns.
pub trait Reporter {
    fn on_run_start(&mut self, results: &AggregatedResult, w: &mut dyn Write) -> io::Result<()>;
    fn on_test_result(&mut self, results: &AggregatedResult, w: &mut dyn Write) -> io::Result<()>;
    fn on_run_complete(&mut self, results: &AggregatedResult, w: &mut dyn Write) -> io::Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NyanOptions {
    /// Skip the failure-message dump at run end.
    pub suppress_error_reporter: bool,
    /// Skip intermediate draws and animate once, at completion.
    pub render_on_run_completely: bool,
}

/// The cat. Redraws a four-line scoreboard, rainbow trail, and cat in place
/// on every lifecycle event, then prints the epilogue at run end.
pub struct NyanReporter {
    config: RenderConfig,
    options: NyanOptions,
    cursor: Cursor,
    rainbow: Rainbow,
    trajectory: Trajectory,
    tick: bool,
}

impl NyanReporter {
    pub fn new(config: RenderConfig, options: NyanOptions) -> Self {
        Self {
            cursor: Cursor::new(&config),
            rainbow: Rainbow::new(config.supports_color),
            trajectory: Trajectory::new(config.width),
            tick: false,
            config,
            options,
        }
    }

    /// Which of the two walk-cycle frames the next draw will use.
    pub fn tick(&self) -> bool {
        self.tick
    }

    /// One animation frame: scroll the trail, then redraw the scoreboard,
    /// rainbow, and cat over the previous frame.
    fn draw(&mut self, results: &AggregatedResult, w: &mut dyn Write) -> io::Result<()> {
        self.append_rainbow();
        self.draw_scoreboard(results, w)?;
        self.draw_rainbow(w)?;
        self.draw_cat(results, w)?;
        self.tick = !self.tick;
        Ok(())
    }

    fn append_rainbow(&mut self) {
        let segment = if self.tick { "_" } else { "-" };
        let colored = self.rainbow.rainbowify(segment);
        self.trajectory.append(&colored);
    }

    fn draw_scoreboard(&self, results: &AggregatedResult, w: &mut dyn Write) -> io::Result<()> {
        self.draw_stat(ColorLabel::TotalTests, results.num_total_tests, w)?;
        self.draw_stat(ColorLabel::Green, results.num_passed_tests, w)?;
        self.draw_stat(ColorLabel::Fail, results.num_failed_tests, w)?;
        self.draw_stat(ColorLabel::Pending, results.num_pending_tests, w)?;
        self.cursor.up(ROWS, w)
    }

    fn draw_stat(&self, label: ColorLabel, n: usize, w: &mut dyn Write) -> io::Result<()> {
        writeln!(w, " {}", colorize(&self.config, label, n))
    }

    fn draw_rainbow(&self, w: &mut dyn Write) -> io::Result<()> {
        for row in self.trajectory.rows() {
            write!(w, "\x1b[{SCOREBOARD_WIDTH}C")?;
            for segment in row {
                w.write_all(segment.as_bytes())?;
            }
            writeln!(w)?;
        }
        self.cursor.up(ROWS, w)
    }

    fn draw_cat(&self, results: &AggregatedResult, w: &mut dyn Write) -> io::Result<()> {
        let indent = SCOREBOARD_WIDTH + self.trajectory.len();
        let dist = format!("\x1b[{indent}C");

        writeln!(w, "{dist}_,------,")?;

        let padding = if self.tick { "  " } else { "   " };
        writeln!(w, "{dist}_|{padding}/\\_/\\ ")?;

        let (tail, padding) = if self.tick { ("~", "_") } else { ("^", "__") };
        writeln!(w, "{dist}{tail}|{padding}{} ", self.face(results))?;

        let padding = if self.tick { " " } else { "  " };
        writeln!(w, "{dist}{padding}\"\"  \"\" ")?;

        self.cursor.up(ROWS, w)
    }

    /// Expression priority: any failure wins, then pending, then passing,
    /// then the idle face before anything has run.
    fn face(&self, results: &AggregatedResult) -> &'static str {
        if results.num_failed_tests > 0 {
            "( x .x)"
        } else if results.num_pending_tests > 0 {
            "( o .o)"
        } else if results.num_passed_tests > 0 {
            "( ^ .^)"
        } else {
            "( - .-)"
        }
    }
}

impl Reporter for NyanReporter {
    fn on_run_start(&mut self, results: &AggregatedResult, w: &mut dyn Write) -> io::Result<()> {
        self.cursor.cr(w)?;
        self.cursor.hide(w)?;
        if !self.options.render_on_run_completely {
            self.draw(results, w)?;
        }
        Ok(())
    }

    fn on_test_result(&mut self, results: &AggregatedResult, w: &mut dyn Write) -> io::Result<()> {
        if !self.options.render_on_run_completely {
            self.draw(results, w)?;
        }
        Ok(())
    }

    fn on_run_complete(&mut self, results: &AggregatedResult, w: &mut dyn Write) -> io::Result<()> {
        self.draw(results, w)?;
        self.cursor.show(w)?;
        for _ in 0..ROWS {
            writeln!(w)?;
        }

        epilogue(&self.config, results, results.elapsed(), w)?;

        if !self.options.suppress_error_reporter {
            print_failure_messages(&self.config, results, w)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_config() -> RenderConfig {
        RenderConfig {
            is_interactive: false,
            supports_color: false,
            width: 80,
            ascii_glyphs: false,
        }
    }

    fn reporter() -> NyanReporter {
        NyanReporter::new(plain_config(), NyanOptions::default())
    }

    fn counts(passed: usize, failed: usize, pending: usize) -> AggregatedResult {
        AggregatedResult {
            num_total_tests: passed + failed + pending,
            num_passed_tests: passed,
            num_failed_tests: failed,
            num_pending_tests: pending,
            ..Default::default()
        }
    }

    #[test]
    fn face_priority_failure_beats_everything() {
        let reporter = reporter();
        assert_eq!(reporter.face(&counts(5, 1, 2)), "( x .x)");
        assert_eq!(reporter.face(&counts(0, 1, 0)), "( x .x)");
    }

    #[test]
    fn face_priority_pending_beats_passing() {
        let reporter = reporter();
        assert_eq!(reporter.face(&counts(5, 0, 2)), "( o .o)");
    }

    #[test]
    fn face_priority_passing_then_idle() {
        let reporter = reporter();
        assert_eq!(reporter.face(&counts(5, 0, 0)), "( ^ .^)");
        assert_eq!(reporter.face(&counts(0, 0, 0)), "( - .-)");
    }

    #[test]
    fn tick_flips_once_per_draw() {
        let mut reporter = reporter();
        let results = counts(1, 0, 0);
        let mut out = Vec::new();

        assert!(!reporter.tick());
        for expected_after in [true, false, true, false] {
            reporter.draw(&results, &mut out).unwrap();
            assert_eq!(reporter.tick(), expected_after);
        }
    }

    #[test]
    fn draw_emits_scoreboard_trail_and_cat() {
        let mut reporter = reporter();
        let mut out = Vec::new();
        reporter.draw(&counts(3, 1, 0), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains(" 4\n"), "total line");
        assert!(out.contains(" 3\n"), "passing line");
        assert!(out.contains(" 1\n"), "failing line");
        assert!(out.contains("_,------,"), "cat ears");
        assert!(out.contains("( x .x)"), "distressed face");
        // One trail segment drawn after the scoreboard indent.
        assert!(out.contains("\x1b[5C-\n"));
        // Cat sits one column past the single trail segment.
        assert!(out.contains("\x1b[6C_,------,"));
    }

    #[test]
    fn render_on_run_completely_suppresses_intermediate_draws() {
        let config = plain_config();
        let options = NyanOptions {
            render_on_run_completely: true,
            ..Default::default()
        };
        let mut reporter = NyanReporter::new(config, options);
        let results = counts(2, 0, 0);

        let mut out = Vec::new();
        reporter.on_run_start(&results, &mut out).unwrap();
        reporter.on_test_result(&results, &mut out).unwrap();
        assert_eq!(out, b"\r", "only the piped carriage return, no frames");

        let mut out = Vec::new();
        reporter.on_run_complete(&results, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("( ^ .^)"), "the one frame renders at the end");
    }
}
