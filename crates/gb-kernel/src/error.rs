use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    #[error("invalid shape {m}x{n}x{k}: every dimension must be > 0")]
    ZeroDimension { m: usize, n: usize, k: usize },
    #[error("shape {m}x{n}x{k} overflows buffer or flop arithmetic")]
    Overflow { m: usize, n: usize, k: usize },
    #[error("unknown kernel: {0}")]
    UnknownKernel(String),
}

pub type Result<T> = std::result::Result<T, KernelError>;
