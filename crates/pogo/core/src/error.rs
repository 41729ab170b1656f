//! Error infrastructure for pogo-core.
//!
//! The search and filter engines never fail: missing data produces empty
//! results. Errors only arise when building the lookup tables those engines
//! consume, so content problems surface at load time instead of as silently
//! truncated searches.

/// Severity level of an error, used for categorization and logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input that should be rejected without retry.
    ///
    /// Examples: mismatched table lengths, empty level table
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
        }
    }
}

/// Common trait for all pogo-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait EngineError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised while assembling a [`LevelTable`](crate::LevelTable).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TableError {
    /// The multiplier table has no levels.
    #[error("level table has no cp multipliers")]
    Empty,

    /// Stardust costs must be indexed exactly like the multipliers.
    #[error("{multipliers} cp multipliers but {stardust} stardust costs")]
    LengthMismatch { multipliers: usize, stardust: usize },

    /// A multiplier is zero, negative or not a number.
    #[error("cp multiplier for level {level} is not positive: {value}")]
    InvalidMultiplier { level: usize, value: f64 },
}

impl EngineError for TableError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "TABLE_EMPTY",
            Self::LengthMismatch { .. } => "TABLE_LENGTH_MISMATCH",
            Self::InvalidMultiplier { .. } => "TABLE_INVALID_MULTIPLIER",
        }
    }
}
