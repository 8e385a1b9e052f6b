use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("invalid shape: {0}")]
    InvalidShape(#[from] gb_kernel::KernelError),
    #[error("invalid flop budget {0}: must be finite and > 0")]
    InvalidBudget(f64),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BenchError>;
