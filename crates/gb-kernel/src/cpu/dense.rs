use nalgebra::{DMatrixView, DMatrixViewMut};

use crate::kernel::{check_buffers, MatmulKernel};
use crate::shape::Shape;

/// `nalgebra` dense-matrix backend.
///
/// nalgebra is column-major, so a row-major [r, c] buffer reads as its
/// transpose. The kernel therefore computes `C^T = B^T @ A^T` on zero-copy
/// views, which leaves row-major `A @ B` in `c`. Overwrites C on every call.
#[derive(Debug, Clone)]
pub struct NalgebraKernel;

impl NalgebraKernel {
    pub fn new() -> Self {
        NalgebraKernel
    }
}

impl Default for NalgebraKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl MatmulKernel for NalgebraKernel {
    fn name(&self) -> &str {
        "nalgebra"
    }

    fn accumulates(&self) -> bool {
        false
    }

    fn multiply(&self, a: &[f32], b: &[f32], c: &mut [f32], shape: &Shape) {
        check_buffers(self.name(), a, b, c, shape);
        let (m, n, k) = (shape.m(), shape.n(), shape.k());

        let a_t = DMatrixView::from_slice(a, k, m);
        let b_t = DMatrixView::from_slice(b, n, k);
        let mut c_t = DMatrixViewMut::from_slice(c, n, m);
        c_t.gemm(1.0, &b_t, &a_t, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let shape = Shape::new(2, 2, 2).unwrap();
        let a = vec![1.0, 0.0, 0.0, 1.0];
        let b = vec![1.0, 2.0, 3.0, 4.0];
        let mut c = vec![0.0; 4];
        NalgebraKernel::new().multiply(&a, &b, &mut c, &shape);
        assert_eq!(c, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_rectangular_layout() {
        // [1,2,3;4,5,6] (2x3) @ [1,0;0,1;1,1] (3x2) = [4,5;10,11]
        let shape = Shape::new(2, 2, 3).unwrap();
        let a = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let b = vec![1.0, 0.0, 0.0, 1.0, 1.0, 1.0];
        let mut c = vec![0.0; 4];
        NalgebraKernel::new().multiply(&a, &b, &mut c, &shape);
        assert_eq!(c, vec![4.0, 5.0, 10.0, 11.0]);
    }
}
