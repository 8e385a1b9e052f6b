//! CPU kernels.
//!
//! `NaiveKernel` is the triple-loop reference; the others delegate to
//! third-party GEMM implementations.

pub mod dense;
pub mod naive;
pub mod packed;

pub use dense::NalgebraKernel;
pub use naive::NaiveKernel;
pub use packed::PackedKernel;
