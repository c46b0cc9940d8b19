//! Error types for cloth construction and state restoration.

use core::fmt;

/// Errors that can occur when building a cloth or restoring its state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClothError {
    /// Grid dimensions must be at least 2x2.
    InvalidGridDimensions,
    /// Particle mass must be positive and finite.
    InvalidMass,
    /// Spring stiffness must be positive and finite.
    InvalidStiffness,
    /// Bend factor must be in (0, 1).
    InvalidBendFactor,
    /// A snapshot was taken from a cloth with a different particle count.
    StateSizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for ClothError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClothError::InvalidGridDimensions => write!(f, "grid must be at least 2x2"),
            ClothError::InvalidMass => write!(f, "particle mass must be positive and finite"),
            ClothError::InvalidStiffness => write!(f, "stiffness must be positive and finite"),
            ClothError::InvalidBendFactor => write!(f, "bend factor must be in (0, 1)"),
            ClothError::StateSizeMismatch { expected, actual } => {
                write!(f, "state holds {} particles, cloth has {}", actual, expected)
            }
        }
    }
}
