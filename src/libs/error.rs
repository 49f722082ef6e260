use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentError {
    /// The sequence has no symbols
    EmptySequence,
    /// A configuration bound that makes forward progress impossible
    InvalidParameter(String),
    /// The iteration cap was reached before the circle closed
    LoopGuardExceeded {
        /// Number of optimizer calls performed
        iterations: usize,
    },
}

impl fmt::Display for SegmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentError::EmptySequence => write!(f, "Empty sequence"),
            SegmentError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            SegmentError::LoopGuardExceeded { iterations } => write!(
                f,
                "Loop guard exceeded after {} iterations before the circle closed",
                iterations
            ),
        }
    }
}

impl std::error::Error for SegmentError {}

pub type Result<T> = std::result::Result<T, SegmentError>;
