use std::fmt;
use std::str::FromStr;

use crate::cpu::{NaiveKernel, NalgebraKernel, PackedKernel};
use crate::error::KernelError;
use crate::kernel::MatmulKernel;

/// Names the available kernel backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelKind {
    Naive,
    Packed,
    Nalgebra,
}

impl KernelKind {
    /// Every backend, reference kernel first.
    pub const ALL: [KernelKind; 3] = [
        KernelKind::Naive,
        KernelKind::Packed,
        KernelKind::Nalgebra,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            KernelKind::Naive => "naive",
            KernelKind::Packed => "packed",
            KernelKind::Nalgebra => "nalgebra",
        }
    }

    /// Instantiate the kernel this kind names.
    pub fn build(&self) -> Box<dyn MatmulKernel> {
        match self {
            KernelKind::Naive => Box::new(NaiveKernel::new()),
            KernelKind::Packed => Box::new(PackedKernel::new()),
            KernelKind::Nalgebra => Box::new(NalgebraKernel::new()),
        }
    }
}

impl fmt::Display for KernelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KernelKind {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "naive" => Ok(KernelKind::Naive),
            "packed" | "matrixmultiply" => Ok(KernelKind::Packed),
            "nalgebra" => Ok(KernelKind::Nalgebra),
            other => Err(KernelError::UnknownKernel(other.to_string())),
        }
    }
}
