use std::fmt;

/// A priority that cannot be ordered against other priorities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriorityError {
   /// NaN or ±∞ handed to `FloatPriority::new`.
   NotFinite(f64),
}

impl fmt::Display for PriorityError {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      match self {
         PriorityError::NotFinite(v) => write!(f, "priority must be a finite number, got {v}"),
      }
   }
}

impl std::error::Error for PriorityError {}

/// Rejected workload parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
   NoItems,
   EmptyPriorityRange { min: u32, max: u32 },
   UnknownDesign(String),
}

impl fmt::Display for ConfigError {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      match self {
         ConfigError::NoItems => f.write_str("workload must contain at least one item"),
         ConfigError::EmptyPriorityRange { min, max } => {
            write!(f, "priority range {min}..={max} is empty")
         }
         ConfigError::UnknownDesign(name) => write!(f, "unknown queue design `{name}`"),
      }
   }
}

impl std::error::Error for ConfigError {}
