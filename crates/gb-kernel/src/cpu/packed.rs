use crate::kernel::{check_buffers, MatmulKernel};
use crate::shape::Shape;

/// `matrixmultiply::sgemm` backend: packed, cache-blocked GEMM in pure Rust.
///
/// Runs with alpha = 1 and beta = 0, so every call overwrites C.
#[derive(Debug, Clone)]
pub struct PackedKernel;

impl PackedKernel {
    pub fn new() -> Self {
        PackedKernel
    }
}

impl Default for PackedKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl MatmulKernel for PackedKernel {
    fn name(&self) -> &str {
        "packed"
    }

    fn accumulates(&self) -> bool {
        false
    }

    fn multiply(&self, a: &[f32], b: &[f32], c: &mut [f32], shape: &Shape) {
        check_buffers(self.name(), a, b, c, shape);
        let (m, n, k) = (shape.m(), shape.n(), shape.k());

        // SAFETY: lengths were checked against the shape above, and the
        // row-major strides (k, 1), (n, 1), (n, 1) stay inside each buffer.
        unsafe {
            matrixmultiply::sgemm(
                m,
                k,
                n,
                1.0,
                a.as_ptr(),
                k as isize,
                1,
                b.as_ptr(),
                n as isize,
                1,
                0.0,
                c.as_mut_ptr(),
                n as isize,
                1,
            );
        }
    }
}
