use std::time::{Duration, Instant};

/// Aggregated counts and captured failures for a run in progress.
///
/// Built incrementally by the host-framework adapter and consumed read-only
/// by the reporter. Counts only grow during a run; absent information
/// defaults to zero.
#[derive(Debug, Default, Clone)]
pub struct AggregatedResult {
    pub num_total_tests: usize,
    pub num_passed_tests: usize,
    pub num_failed_tests: usize,
    pub num_pending_tests: usize,
    /// Wall-clock start of the run, unset until the adapter sees it begin.
    pub start_time: Option<Instant>,
    pub test_results: Vec<TestFileResult>,
}

/// Per-test-file outcome detail. Only failures carry a message.
#[derive(Debug, Default, Clone)]
pub struct TestFileResult {
    pub failure_message: Option<String>,
}

impl AggregatedResult {
    /// Time since the run began, zero if it never started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }
}
