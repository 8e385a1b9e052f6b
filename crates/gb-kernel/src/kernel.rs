use std::fmt::Debug;

use crate::shape::Shape;

/// Trait for interchangeable GEMM backends (naive reference, packed, nalgebra, ...).
///
/// A kernel computes `C = A @ B` on caller-owned, row-major `f32` buffers.
/// The harness reuses the same buffers for every call of a timed loop, so a
/// kernel may either accumulate into `c` or overwrite it; [`accumulates`]
/// reports which.
///
/// [`accumulates`]: MatmulKernel::accumulates
pub trait MatmulKernel: Send + Sync + Debug {
    /// Returns the name of this kernel (e.g., "naive", "packed").
    fn name(&self) -> &str;

    /// True if `multiply` computes `C += A @ B`, false if it computes `C = A @ B`.
    fn accumulates(&self) -> bool;

    /// Matrix multiplication on raw buffers.
    ///
    /// - `a`: row-major data of shape [m, k]
    /// - `b`: row-major data of shape [k, n]
    /// - `c`: row-major data of shape [m, n]
    ///
    /// # Panics
    /// Panics if a buffer length does not match `shape`.
    fn multiply(&self, a: &[f32], b: &[f32], c: &mut [f32], shape: &Shape);
}

/// Asserts the buffer lengths a kernel is about to touch.
pub(crate) fn check_buffers(kernel: &str, a: &[f32], b: &[f32], c: &[f32], shape: &Shape) {
    assert_eq!(
        a.len(),
        shape.a_size(),
        "{kernel}: a.len() does not match m*k for {shape}"
    );
    assert_eq!(
        b.len(),
        shape.b_size(),
        "{kernel}: b.len() does not match k*n for {shape}"
    );
    assert_eq!(
        c.len(),
        shape.c_size(),
        "{kernel}: c.len() does not match m*n for {shape}"
    );
}
