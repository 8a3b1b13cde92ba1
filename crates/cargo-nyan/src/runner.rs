use crate::event::{Event, SuiteEvent, TestEvent};
use nyan::reporter::Reporter;
use nyan::results::{AggregatedResult, TestFileResult};
use std::io::{self, BufRead, BufReader, Write};
use std::process::{Command, ExitCode, Stdio};
use std::time::Instant;

pub struct RunConfig {
    pub manifest_path: Option<String>,
    pub package: Option<String>,
    pub lib_only: bool,
    pub all: bool,
    pub extra_args: Vec<String>,
}

/// Spawn `cargo test`, fold its JSON event stream into an
/// [`AggregatedResult`], and drive the reporter lifecycle. `on_run_start`
/// fires at the first suite header, `on_test_result` per completed test,
/// and `on_run_complete` once the stream ends.
pub fn run(
    config: &RunConfig,
    reporter: &mut dyn Reporter,
    w: &mut dyn Write,
) -> io::Result<ExitCode> {
    let mut cmd = Command::new("cargo");
    cmd.arg("test");

    if let Some(ref path) = config.manifest_path {
        cmd.args(["--manifest-path", path]);
    }
    if let Some(ref pkg) = config.package {
        cmd.args(["--package", pkg]);
    }
    if config.lib_only {
        cmd.arg("--lib");
    }
    if config.all {
        cmd.arg("--all");
    }

    cmd.arg("--");
    cmd.args(["--format", "json", "-Z", "unstable-options"]);
    cmd.args(&config.extra_args);

    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::inherit());

    let mut child = cmd
        .spawn()
        .map_err(|e| io::Error::new(e.kind(), format!("Failed to spawn cargo test: {e}")))?;

    let stdout = child.stdout.take().expect("stdout was piped");
    let reader = BufReader::new(stdout);

    let mut results = AggregatedResult::default();
    let mut started = false;

    for line in reader.lines() {
        let line = line?;

        let event: Event = match serde_json::from_str(&line) {
            Ok(e) => e,
            Err(_) => continue, // skip non-JSON lines (e.g. compile output leaking through)
        };

        match event {
            Event::Suite(suite) => match suite {
                SuiteEvent::Started { test_count } => {
                    // A workspace run emits one suite per test binary; the
                    // animation starts at the first and totals accumulate.
                    results.num_total_tests += test_count;
                    if !started {
                        started = true;
                        results.start_time = Some(Instant::now());
                        reporter.on_run_start(&results, w)?;
                    }
                }
                SuiteEvent::Ok {} | SuiteEvent::Failed {} => {
                    // Closing totals are redundant with our own counts.
                }
            },
            Event::Test(test) => match test {
                TestEvent::Started { .. } => {}
                TestEvent::Ok { .. } => {
                    results.num_passed_tests += 1;
                    reporter.on_test_result(&results, w)?;
                }
                TestEvent::Failed {
                    name,
                    stdout,
                    message,
                } => {
                    results.num_failed_tests += 1;
                    results.test_results.push(TestFileResult {
                        failure_message: Some(failure_message(
                            &name,
                            message.as_deref(),
                            stdout.as_deref(),
                        )),
                    });
                    reporter.on_test_result(&results, w)?;
                }
                TestEvent::Ignored { .. } => {
                    results.num_pending_tests += 1;
                    reporter.on_test_result(&results, w)?;
                }
            },
        }
    }

    reporter.on_run_complete(&results, w)?;

    let status = child.wait()?;

    if results.num_failed_tests > 0 || !status.success() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Compose a readable failure block from whatever libtest gave us.
fn failure_message(name: &str, message: Option<&str>, stdout: Option<&str>) -> String {
    let mut out = format!("  {name}");
    if let Some(message) = message {
        for line in message.lines() {
            out.push_str("\n     ");
            out.push_str(line);
        }
    }
    if let Some(stdout) = stdout {
        let trimmed = stdout.trim();
        if !trimmed.is_empty() {
            out.push_str("\n     --- stdout ---");
            for line in trimmed.lines() {
                out.push_str("\n     ");
                out.push_str(line);
            }
        }
    }
    out
}
