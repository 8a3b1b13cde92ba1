use crate::color::{ColorLabel, Symbols, colorize};
use crate::config::RenderConfig;
use crate::results::AggregatedResult;
use std::io::{self, Write};
use std::time::Duration;

/// Final summary block: totals with elapsed time, a passing line, failing
/// and pending lines only when non-zero, and a celebration when everything
/// passed. `elapsed` is supplied by the caller so tests can fix it.
pub fn epilogue(
    config: &RenderConfig,
    results: &AggregatedResult,
    elapsed: Duration,
    w: &mut dyn Write,
) -> io::Result<()> {
    let symbols = Symbols::select(config.ascii_glyphs);

    writeln!(w)?;

    let total = colorize(
        config,
        ColorLabel::TotalTests,
        format!("   {} total", results.num_total_tests),
    );
    let time = colorize(
        config,
        ColorLabel::Light,
        format!(" ({}) ", fmt_duration(elapsed)),
    );
    writeln!(w, "{total}{time}")?;

    let check = colorize(config, ColorLabel::BrightPass, format!("   {}", symbols.ok));
    let passing = colorize(
        config,
        ColorLabel::Green,
        format!(" {} passing", results.num_passed_tests),
    );
    writeln!(w, "{check}{passing}")?;

    if results.num_failed_tests > 0 {
        let failing = colorize(
            config,
            ColorLabel::Fail,
            format!("   {} {} failing ", symbols.err, results.num_failed_tests),
        );
        writeln!(w, "{failing}")?;
    }

    if results.num_pending_tests > 0 {
        let bang = colorize(config, ColorLabel::Pending, format!("   {}", symbols.bang));
        let pending = colorize(
            config,
            ColorLabel::Pending,
            format!(" {} pending", results.num_pending_tests),
        );
        writeln!(w, "{bang}{pending}")?;
    }

    writeln!(w)?;

    if results.num_total_tests > 0 && results.num_total_tests == results.num_passed_tests {
        let all_passed = colorize(
            config,
            ColorLabel::BrightPass,
            format!("   {}  All Tests Passed", symbols.ok),
        );
        writeln!(w, "{all_passed}")?;
    }

    Ok(())
}

/// Dump every captured failure message. No output at all when the run had
/// zero tests or zero failures.
pub fn print_failure_messages(
    config: &RenderConfig,
    results: &AggregatedResult,
    w: &mut dyn Write,
) -> io::Result<()> {
    if results.num_total_tests == 0 || results.num_failed_tests == 0 {
        return Ok(());
    }

    let symbols = Symbols::select(config.ascii_glyphs);
    let header = colorize(
        config,
        ColorLabel::BrightFail,
        format!("  {} Failed Tests:", symbols.err),
    );
    writeln!(w, "{header}")?;
    writeln!(w)?;

    for result in &results.test_results {
        if let Some(ref message) = result.failure_message {
            writeln!(w, "{message}")?;
            writeln!(w)?;
        }
    }

    Ok(())
}

/// Compact human duration: "450ms", "1.5s", "2m", "1.2h".
pub fn fmt_duration(elapsed: Duration) -> String {
    let ms = elapsed.as_millis();
    if ms < 1_000 {
        return format!("{ms}ms");
    }
    let secs = elapsed.as_secs_f64();
    if secs < 60.0 {
        return fmt_unit(secs, "s");
    }
    let mins = secs / 60.0;
    if mins < 60.0 {
        return fmt_unit(mins, "m");
    }
    fmt_unit(mins / 60.0, "h")
}

/// One decimal place, with a trailing ".0" dropped.
fn fmt_unit(value: f64, unit: &str) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}{unit}")
    } else {
        format!("{rounded:.1}{unit}")
    }
}
