use thiserror::Error;

/// Top-level error type for the unistroke kernel.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StrokeError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("operation requires at least {required} points, stroke has {actual}")]
    InsufficientPoints { required: usize, actual: usize },

    #[error("resample target count must be at least 2, got {0}")]
    InvalidTargetCount(usize),

    #[error("degenerate stroke: {0}")]
    DegenerateStroke(String),
}

/// Convenience type alias for results using [`StrokeError`].
pub type Result<T> = std::result::Result<T, StrokeError>;
