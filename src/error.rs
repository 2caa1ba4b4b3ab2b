//! Error type shared by every fallible month-grid operation.

/// Broad classification of a [`GridError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A caller-supplied month, year, weekday or date string was rejected.
    InvalidArgument,
    /// The configured formatter could not render a date.
    Formatter,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("month must be between 1 and 12, got {month}")]
    InvalidMonth { month: u32 },

    /// The month, or the filler days around it, fall outside chrono's range.
    #[error("year {year} is outside the supported calendar range")]
    YearOutOfRange { year: i32 },

    #[error("week start must be between 0 (Sunday) and 6 (Saturday), got {day}")]
    InvalidWeekStart { day: u32 },

    #[error("could not parse {input:?} as a date")]
    UnparseableDate { input: String },

    #[error("invalid date pattern {pattern:?}: {reason}")]
    InvalidPattern {
        pattern: String,
        reason:  &'static str,
    },
}

impl GridError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GridError::InvalidMonth { .. }
            | GridError::YearOutOfRange { .. }
            | GridError::InvalidWeekStart { .. }
            | GridError::UnparseableDate { .. } => ErrorKind::InvalidArgument,
            GridError::InvalidPattern { .. } => ErrorKind::Formatter,
        }
    }
}
