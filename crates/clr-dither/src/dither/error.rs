use std::fmt;

/// Error returned when a dither kernel cannot be resolved or built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// No built-in kernel has this name
    Unknown(String),

    /// Weights would be divided by zero
    ZeroDivisor,

    /// Entry points at a pixel the raster walk has already passed
    VisitedOffset { dx: i32, dy: i32 },

    /// Weights add up to more than the divisor
    ExcessWeight { sum: u32, divisor: u8 },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::Unknown(name) => write!(f, "unknown dither algorithm '{}'", name),
            KernelError::ZeroDivisor => write!(f, "kernel divisor must be positive"),
            KernelError::VisitedOffset { dx, dy } => {
                write!(f, "kernel offset ({}, {}) points at an already visited pixel", dx, dy)
            }
            KernelError::ExcessWeight { sum, divisor } => {
                write!(f, "kernel weights sum to {} but divisor is {}", sum, divisor)
            }
        }
    }
}

impl std::error::Error for KernelError {}
