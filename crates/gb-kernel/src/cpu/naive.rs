use crate::kernel::{check_buffers, MatmulKernel};
use crate::shape::Shape;

/// Triple-loop reference kernel computing `C += A @ B`.
///
/// Loops run m, k, n so the innermost loop walks C and B with stride 1.
/// No blocking, no vectorization hints, plain `f32` accumulation. Serves as
/// the performance floor the other backends are compared against.
#[derive(Debug, Clone)]
pub struct NaiveKernel;

impl NaiveKernel {
    pub fn new() -> Self {
        NaiveKernel
    }
}

impl Default for NaiveKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl MatmulKernel for NaiveKernel {
    fn name(&self) -> &str {
        "naive"
    }

    fn accumulates(&self) -> bool {
        true
    }

    fn multiply(&self, a: &[f32], b: &[f32], c: &mut [f32], shape: &Shape) {
        check_buffers(self.name(), a, b, c, shape);
        let (m, n, k) = (shape.m(), shape.n(), shape.k());

        for i in 0..m {
            for p in 0..k {
                let a_ip = a[i * k + p];
                for j in 0..n {
                    c[i * n + j] += a_ip * b[p * n + j];
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(m: usize, n: usize, k: usize) -> Shape {
        Shape::new(m, n, k).unwrap()
    }

    #[test]
    fn test_identity() {
        // 2x2 identity @ [1,2;3,4]
        let a = vec![1.0, 0.0, 0.0, 1.0];
        let b = vec![1.0, 2.0, 3.0, 4.0];
        let mut c = vec![0.0; 4];
        NaiveKernel::new().multiply(&a, &b, &mut c, &shape(2, 2, 2));
        assert_eq!(c, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_accumulates_across_calls() {
        let a = vec![1.0, 0.0, 0.0, 1.0];
        let b = vec![1.0, 2.0, 3.0, 4.0];
        let mut c = vec![0.0; 4];
        let kernel = NaiveKernel::new();
        kernel.multiply(&a, &b, &mut c, &shape(2, 2, 2));
        kernel.multiply(&a, &b, &mut c, &shape(2, 2, 2));
        assert_eq!(c, vec![2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn test_basic() {
        // [1,2;3,4] @ [5,6;7,8] = [19,22;43,50]
        let a = vec![1.0, 2.0, 3.0, 4.0];
        let b = vec![5.0, 6.0, 7.0, 8.0];
        let mut c = vec![0.0; 4];
        NaiveKernel::new().multiply(&a, &b, &mut c, &shape(2, 2, 2));
        assert_eq!(c, vec![19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn test_rectangular() {
        // [1,2,3] (1x3) @ [1,0;0,1;1,1] (3x2) = [4,5]
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![1.0, 0.0, 0.0, 1.0, 1.0, 1.0];
        let mut c = vec![0.0; 2];
        NaiveKernel::new().multiply(&a, &b, &mut c, &shape(1, 2, 3));
        assert_eq!(c, vec![4.0, 5.0]);
    }

    #[test]
    #[should_panic(expected = "c.len()")]
    fn test_wrong_output_length_panics() {
        let a = vec![1.0; 4];
        let b = vec![1.0; 4];
        let mut c = vec![0.0; 3];
        NaiveKernel::new().multiply(&a, &b, &mut c, &shape(2, 2, 2));
    }
}
