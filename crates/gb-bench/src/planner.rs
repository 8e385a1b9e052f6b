use gb_kernel::Shape;

use crate::error::{BenchError, Result};

/// Decides how many times to repeat the multiply for a shape.
///
/// `num_iter = floor(flop_budget / (2 * M * N * K))`, clamped to at least 1,
/// so every shape performs roughly the same total work no matter how big a
/// single call is. Pure and deterministic: the result depends only on the
/// budget and the shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationPlanner {
    flop_budget: f64,
}

impl IterationPlanner {
    /// # Errors
    /// Returns `InvalidBudget` if `flop_budget` is not finite and positive.
    pub fn new(flop_budget: f64) -> Result<Self> {
        if !flop_budget.is_finite() || flop_budget <= 0.0 {
            return Err(BenchError::InvalidBudget(flop_budget));
        }
        Ok(IterationPlanner { flop_budget })
    }

    pub fn flop_budget(&self) -> f64 {
        self.flop_budget
    }

    /// Number of back-to-back kernel calls to time for `shape`. Never 0.
    pub fn plan(&self, shape: &Shape) -> u64 {
        let iters = (self.flop_budget / shape.flops_per_call() as f64) as u64;
        iters.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_FLOP_BUDGET, DEFAULT_SHAPES};

    fn planner() -> IterationPlanner {
        IterationPlanner::new(DEFAULT_FLOP_BUDGET).unwrap()
    }

    fn shape(m: usize, n: usize, k: usize) -> Shape {
        Shape::new(m, n, k).unwrap()
    }

    #[test]
    fn test_smallest_shape() {
        // 1e11 / (2 * 128^3) = 23841.86
        assert_eq!(planner().plan(&shape(128, 128, 128)), 23841);
    }

    #[test]
    fn test_largest_default_shape() {
        // 1e11 / (2 * 1024 * 2560 * 1024) = 18.63
        assert_eq!(planner().plan(&shape(1024, 2560, 1024)), 18);
    }

    #[test]
    fn test_always_at_least_one() {
        let p = planner();
        for &(m, n, k) in DEFAULT_SHAPES.iter() {
            assert!(p.plan(&shape(m, n, k)) >= 1);
        }
        assert_eq!(p.plan(&shape(1, 1, 1)), 50_000_000_000);
    }

    #[test]
    fn test_pathological_shape_clamps_to_one() {
        // 2 * 100_000^3 = 2e15 flops per call, far above the budget.
        assert_eq!(planner().plan(&shape(100_000, 100_000, 100_000)), 1);

        let tiny = IterationPlanner::new(1.0).unwrap();
        assert_eq!(tiny.plan(&shape(2, 2, 2)), 1);
    }

    #[test]
    fn test_non_increasing_in_volume() {
        let p = planner();
        let mut shapes: Vec<Shape> = DEFAULT_SHAPES
            .iter()
            .map(|&(m, n, k)| shape(m, n, k))
            .chain([shape(1, 1, 1), shape(3, 5, 7), shape(4096, 4096, 4096)])
            .collect();
        shapes.sort_by_key(|s| s.volume());

        for pair in shapes.windows(2) {
            assert!(
                p.plan(&pair[0]) >= p.plan(&pair[1]),
                "{} planned fewer iterations than {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_deterministic() {
        let s = shape(256, 768, 3072);
        assert_eq!(planner().plan(&s), planner().plan(&s));
    }

    #[test]
    fn test_invalid_budget() {
        assert!(IterationPlanner::new(0.0).is_err());
        assert!(IterationPlanner::new(-1.0).is_err());
        assert!(IterationPlanner::new(f64::NAN).is_err());
        assert!(IterationPlanner::new(f64::INFINITY).is_err());
    }
}
