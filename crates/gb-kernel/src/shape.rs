use crate::error::{KernelError, Result};
use std::fmt;

/// Dimensions of one GEMM problem: `C[M,N] = A[M,K] @ B[K,N]`.
///
/// All three buffers are row-major. A `Shape` can only be built through
/// [`Shape::new`], so every live value has non-zero dimensions and buffer
/// sizes that fit in `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    m: usize,
    n: usize,
    k: usize,
}

impl Shape {
    /// Create a shape, rejecting zero dimensions and sizes that overflow.
    pub fn new(m: usize, n: usize, k: usize) -> Result<Self> {
        if m == 0 || n == 0 || k == 0 {
            return Err(KernelError::ZeroDimension { m, n, k });
        }

        let overflow = || KernelError::Overflow { m, n, k };
        m.checked_mul(k).ok_or_else(overflow)?;
        k.checked_mul(n).ok_or_else(overflow)?;
        let volume = m
            .checked_mul(n)
            .and_then(|mn| mn.checked_mul(k))
            .ok_or_else(overflow)?;
        (volume as u64).checked_mul(2).ok_or_else(overflow)?;

        Ok(Shape { m, n, k })
    }

    pub fn m(&self) -> usize {
        self.m
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Element count of A (M x K).
    pub fn a_size(&self) -> usize {
        self.m * self.k
    }

    /// Element count of B (K x N).
    pub fn b_size(&self) -> usize {
        self.k * self.n
    }

    /// Element count of C (M x N).
    pub fn c_size(&self) -> usize {
        self.m * self.n
    }

    /// M * N * K, the number of multiply-add terms in one product.
    pub fn volume(&self) -> u64 {
        self.m as u64 * self.n as u64 * self.k as u64
    }

    /// Floating-point operations in one `A @ B`: one multiply and one add per term.
    pub fn flops_per_call(&self) -> u64 {
        2 * self.volume()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.m, self.n, self.k)
    }
}

impl TryFrom<(usize, usize, usize)> for Shape {
    type Error = KernelError;

    fn try_from((m, n, k): (usize, usize, usize)) -> Result<Self> {
        Shape::new(m, n, k)
    }
}
