use std::fmt;
use std::time::Instant;

use gb_kernel::Shape;

/// Throughput in GFLOPS for `num_iter` calls of `shape` taking `elapsed_us`.
///
/// `2 * M * N * K * num_iter / seconds / 1e9`. An elapsed time of 0 us is
/// treated as 1 us so the result stays finite.
pub fn gflops(shape: &Shape, num_iter: u64, elapsed_us: u64) -> f64 {
    let seconds = elapsed_us.max(1) as f64 / 1e6;
    shape.flops_per_call() as f64 * num_iter as f64 / seconds / 1e9
}

/// Measurement context for one shape.
///
/// Owns a copy of the shape and the planned iteration count. Created right
/// before the timed loop and consumed by [`finish`](TimingScope::finish).
#[derive(Debug)]
pub struct TimingScope {
    shape: Shape,
    num_iter: u64,
    start: Instant,
}

impl TimingScope {
    /// Start the monotonic clock.
    pub fn start(shape: Shape, num_iter: u64) -> Self {
        TimingScope {
            shape,
            num_iter,
            start: Instant::now(),
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn num_iter(&self) -> u64 {
        self.num_iter
    }

    /// Stop the clock and compute throughput.
    pub fn finish(self) -> TimingResult {
        let end = Instant::now();
        TimingResult::new(self.shape, self.num_iter, self.start, end)
    }
}

/// Outcome of one shape's timed loop.
///
/// `Display` renders the report line, e.g. `128x128x128 12.34`.
#[derive(Debug, Clone)]
pub struct TimingResult {
    pub shape: Shape,
    pub num_iter: u64,
    pub start: Instant,
    pub end: Instant,
    pub elapsed_us: u64,
    pub gflops: f64,
}

impl TimingResult {
    pub fn new(shape: Shape, num_iter: u64, start: Instant, end: Instant) -> Self {
        let elapsed_us = end.saturating_duration_since(start).as_micros() as u64;
        TimingResult {
            shape,
            num_iter,
            start,
            end,
            elapsed_us,
            gflops: gflops(&shape, num_iter, elapsed_us),
        }
    }
}

impl fmt::Display for TimingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}", self.shape, self.gflops)
    }
}
