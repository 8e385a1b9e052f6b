/// Fixed-seed constant shared by every shape and every backend.
pub const DEFAULT_SEED: u64 = 42;

/// Total floating-point operations to spend on each shape (100 GFLOP).
pub const DEFAULT_FLOP_BUDGET: f64 = 1e11;

/// Benchmark shapes as (M, N, K): small squares, then rectangular
/// transformer-style projections.
pub const DEFAULT_SHAPES: [(usize, usize, usize); 19] = [
    (128, 128, 128),
    (256, 256, 256),
    (256, 1024, 4096),
    (256, 4096, 1024),
    (256, 1024, 1024),
    (128, 1024, 4096),
    (128, 4096, 1024),
    (128, 1024, 1024),
    (256, 768, 768),
    (128, 768, 768),
    (128, 3072, 768),
    (128, 768, 3072),
    (256, 3072, 768),
    (256, 768, 3072),
    (128, 768, 2304),
    (1024, 2560, 1024),
    (1024, 1024, 512),
    (1024, 352, 512),
    (1024, 512, 256),
];

/// Configuration for one benchmark run.
///
/// There is no file, flag, or environment input: `Default` is the build-time
/// configuration, and tests override fields directly.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// Seed for the A/B input generator, reused for every shape.
    pub seed: u64,
    /// Target FLOPs per shape; see [`IterationPlanner`](crate::IterationPlanner).
    pub flop_budget: f64,
    /// Shapes to run, in order, as (M, N, K).
    pub shapes: Vec<(usize, usize, usize)>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            seed: DEFAULT_SEED,
            flop_budget: DEFAULT_FLOP_BUDGET,
            shapes: DEFAULT_SHAPES.to_vec(),
        }
    }
}
