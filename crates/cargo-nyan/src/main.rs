mod event;
mod runner;

use nyan::{NyanOptions, NyanReporter, RenderConfig};
use runner::RunConfig;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    let mut options = NyanOptions::default();
    let mut manifest_path: Option<String> = None;
    let mut package: Option<String> = None;
    let mut lib_only = false;
    let mut all = false;
    let mut extra_args: Vec<String> = Vec::new();

    let iter = args.iter().skip(1); // skip binary name
    // Skip "nyan" if invoked as `cargo nyan`
    let mut args_to_parse: Vec<&String> = Vec::new();
    let mut skipped_subcommand = false;
    for arg in iter {
        if !skipped_subcommand && arg == "nyan" {
            skipped_subcommand = true;
            continue;
        }
        args_to_parse.push(arg);
    }

    let mut i = 0;
    let mut after_separator = false;
    while i < args_to_parse.len() {
        let arg = args_to_parse[i].as_str();

        if after_separator {
            extra_args.push(arg.to_string());
            i += 1;
            continue;
        }

        match arg {
            "--" => {
                after_separator = true;
            }
            "--suppress-error-reporter" => {
                options.suppress_error_reporter = true;
            }
            "--render-on-run-completely" => {
                options.render_on_run_completely = true;
            }
            "--manifest-path" => {
                i += 1;
                if i < args_to_parse.len() {
                    manifest_path = Some(args_to_parse[i].clone());
                } else {
                    eprintln!("Error: --manifest-path requires a value");
                    return ExitCode::FAILURE;
                }
            }
            "--package" | "-p" => {
                i += 1;
                if i < args_to_parse.len() {
                    package = Some(args_to_parse[i].clone());
                } else {
                    eprintln!("Error: --package requires a value");
                    return ExitCode::FAILURE;
                }
            }
            "--lib" => {
                lib_only = true;
            }
            "--all" => {
                all = true;
            }
            "--help" | "-h" => {
                print_help();
                return ExitCode::SUCCESS;
            }
            other => {
                // Treat unknown args as extra test args
                extra_args.push(other.to_string());
            }
        }
        i += 1;
    }

    let config = RenderConfig::detect();

    // Piped output gets a single frame at the end instead of an animation.
    if !config.is_interactive {
        options.render_on_run_completely = true;
    }

    let mut reporter = NyanReporter::new(config, options);
    let mut stdout = std::io::stdout().lock();

    let run_config = RunConfig {
        manifest_path,
        package,
        lib_only,
        all,
        extra_args,
    };

    match runner::run(&run_config, &mut reporter, &mut stdout) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    println!(
        "\
cargo-nyan — run tests behind an animated Nyan Cat reporter

USAGE:
    cargo nyan [OPTIONS] [-- <TEST_ARGS>...]

OPTIONS:
    --suppress-error-reporter    Skip printing failure messages at run end
    --render-on-run-completely   Draw the animation once, at completion
    --manifest-path <PATH>       Path to Cargo.toml
    --package, -p <PKG>          Run tests for a specific package
    --lib                        Test only the library
    --all                        Test all packages in the workspace
    -h, --help                   Print this help message

ARGS:
    <TEST_ARGS>...               Extra arguments passed to the test binary

NOTE:
    This tool requires nightly Rust. The --format json flag used internally
    is unstable and requires -Z unstable-options.

    When stdout is not a terminal, the animation collapses to a single
    frame and all color is stripped.

EXAMPLES:
    cargo nyan                            # animated run
    cargo nyan --render-on-run-completely # one frame at the end
    cargo nyan -- test_name               # filter tests
    cargo nyan --package my-crate         # specific package"
    );
}
