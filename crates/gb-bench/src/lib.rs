//! `gb-bench` - GEMM throughput harness for gemm-bench.
//!
//! This crate provides:
//! - A `ProblemCatalog` of fixed benchmark shapes
//! - An `IterationPlanner` that equalizes total work per shape
//! - `GemmBuffers` seeded input setup
//! - A `TimingScope` / `TimingResult` pair for measurement and reporting
//! - A `BenchmarkRunner` that drives any `MatmulKernel` over the catalog

pub mod buffers;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod planner;
pub mod runner;
pub mod timing;

// Re-export primary types at the crate root for convenience.
pub use buffers::GemmBuffers;
pub use catalog::ProblemCatalog;
pub use config::BenchConfig;
pub use error::{BenchError, Result};
pub use planner::IterationPlanner;
pub use runner::BenchmarkRunner;
pub use timing::{TimingResult, TimingScope};

use gb_kernel::MatmulKernel;

/// Run the default configuration against `kernel`, writing results to stdout.
///
/// Each binary is a thin wrapper around this.
pub fn run_default(kernel: &dyn MatmulKernel) -> Result<()> {
    let runner = BenchmarkRunner::new(BenchConfig::default(), kernel)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    runner.run(&mut out)?;
    Ok(())
}
