use std::hint::black_box;
use std::io::Write;

use gb_kernel::{MatmulKernel, Shape};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::buffers::GemmBuffers;
use crate::catalog::ProblemCatalog;
use crate::config::BenchConfig;
use crate::error::Result;
use crate::planner::IterationPlanner;
use crate::timing::{TimingResult, TimingScope};

/// Drives one kernel over every shape of the catalog, sequentially.
///
/// Per shape: allocate and seed the buffers, plan the iteration count, time
/// `num_iter` back-to-back kernel calls on the same buffers, report, and
/// drop the buffers before moving on.
///
/// The same buffers are passed to every call of the timed loop and C is never
/// re-zeroed inside it. Accumulating kernels (the naive reference) therefore
/// build up `num_iter * A @ B` in C while overwriting kernels recompute the
/// same product each time. Only throughput is measured, so both are valid.
///
/// There is no timeout: a kernel call that never returns blocks the runner.
#[derive(Debug)]
pub struct BenchmarkRunner<'k> {
    catalog: ProblemCatalog,
    planner: IterationPlanner,
    seed: u64,
    kernel: &'k dyn MatmulKernel,
}

impl<'k> BenchmarkRunner<'k> {
    /// Validate `config` and bind it to `kernel`.
    ///
    /// # Errors
    /// Fails on a malformed shape or flop budget, before anything is timed.
    pub fn new(config: BenchConfig, kernel: &'k dyn MatmulKernel) -> Result<Self> {
        let catalog = ProblemCatalog::new(&config.shapes)?;
        let planner = IterationPlanner::new(config.flop_budget)?;
        Ok(BenchmarkRunner {
            catalog,
            planner,
            seed: config.seed,
            kernel,
        })
    }

    pub fn catalog(&self) -> &ProblemCatalog {
        &self.catalog
    }

    pub fn planner(&self) -> &IterationPlanner {
        &self.planner
    }

    /// Benchmark a single shape and return its measurement.
    pub fn run_shape(&self, shape: &Shape) -> TimingResult {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut buffers = GemmBuffers::random(shape, &mut rng);
        let num_iter = self.planner.plan(shape);
        debug!(
            kernel = self.kernel.name(),
            shape = %shape,
            num_iter,
            "starting timed loop"
        );

        let scope = TimingScope::start(*shape, num_iter);
        for _ in 0..num_iter {
            self.kernel.multiply(
                black_box(buffers.a.as_slice()),
                black_box(buffers.b.as_slice()),
                black_box(buffers.c.as_mut_slice()),
                shape,
            );
        }
        black_box(&buffers.c);
        let result = scope.finish();

        debug!(
            kernel = self.kernel.name(),
            shape = %shape,
            elapsed_us = result.elapsed_us,
            gflops = result.gflops,
            "finished timed loop"
        );
        result
    }

    /// Benchmark every catalog shape in order, writing one line per shape to `out`.
    ///
    /// # Errors
    /// Returns an error only if writing to `out` fails.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Vec<TimingResult>> {
        info!(
            kernel = self.kernel.name(),
            accumulates = self.kernel.accumulates(),
            shapes = self.catalog.len(),
            "benchmark started"
        );

        let mut results = Vec::with_capacity(self.catalog.len());
        for shape in &self.catalog {
            let result = self.run_shape(shape);
            writeln!(out, "{}", result)?;
            out.flush()?;
            results.push(result);
        }

        info!(kernel = self.kernel.name(), "benchmark finished");
        Ok(results)
    }
}
