use gb_kernel::Shape;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// The A, B and C buffers for one shape, row-major.
///
/// Owned by the runner for exactly one shape and dropped before the next
/// shape allocates, which bounds peak memory to a single shape's footprint.
#[derive(Debug, Clone, PartialEq)]
pub struct GemmBuffers {
    pub a: Vec<f32>,
    pub b: Vec<f32>,
    pub c: Vec<f32>,
}

impl GemmBuffers {
    /// Allocate buffers for `shape`: A then B drawn from `U[0, 1)` using
    /// `rng`, C zero-filled.
    pub fn random<R: Rng + ?Sized>(shape: &Shape, rng: &mut R) -> Self {
        let dist = Uniform::new(0.0f32, 1.0);
        let a = (0..shape.a_size()).map(|_| dist.sample(rng)).collect();
        let b = (0..shape.b_size()).map(|_| dist.sample(rng)).collect();
        let c = vec![0.0f32; shape.c_size()];
        GemmBuffers { a, b, c }
    }
}
