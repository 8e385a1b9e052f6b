//! `gb-kernel` - GEMM kernels for gemm-bench.
//!
//! This crate provides:
//! - A `Shape` type describing one `C[M,N] = A[M,K] @ B[K,N]` problem
//! - A `MatmulKernel` trait every backend implements
//! - A naive reference kernel plus library-backed kernels
//! - `KernelKind` for naming and selecting a backend

pub mod cpu;
pub mod error;
pub mod kernel;
pub mod kind;
pub mod shape;

// Re-export primary types at the crate root for convenience.
pub use cpu::{NaiveKernel, NalgebraKernel, PackedKernel};
pub use error::{KernelError, Result};
pub use kernel::MatmulKernel;
pub use kind::KernelKind;
pub use shape::Shape;
