// error.rs - Error types for the Game of Life engine

use thiserror::Error;

/// Errors raised while building a universe or reading its configuration.
///
/// Once a `Universe` exists none of its operations can fail: toggles wrap,
/// pointer coordinates clamp.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LifeError {
    /// A dimension was zero, or the cell count does not fit in memory.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// A color literal could not be parsed.
    #[error("invalid color literal: {0:?}")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, LifeError>;
