//! Animated Nyan Cat test reporter.
//!
//! Renders a scrolling rainbow trail, a live scoreboard of test counts, and
//! a cat whose expression tracks the run's pass/fail/pending state, then
//! prints a summary epilogue and any captured failure messages.
//!
//! The library is I/O-agnostic: every rendering operation writes to a
//! `&mut dyn Write` and terminal capabilities come from an injected
//! [`RenderConfig`], so a host adapter (see the `cargo-nyan` binary) decides
//! where bytes go and tests can render into a `Vec<u8>`.

pub mod color;
pub mod config;
pub mod cursor;
pub mod epilogue;
pub mod rainbow;
pub mod reporter;
pub mod results;
pub mod trajectory;

pub use config::RenderConfig;
pub use reporter::{NyanOptions, NyanReporter, Reporter};
pub use results::{AggregatedResult, TestFileResult};
