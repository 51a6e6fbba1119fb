/// Errors raised by the encoders, decoders and the context radius setter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HexError {
    /// The text is not valid hexadecimal: an odd digit count, a character outside the
    /// alphabet, or a length that does not fit the delimiter.
    #[error("At index {index} in '{excerpt}'")]
    Malformed {
        /// Absolute fault position in the input.
        position: usize,
        /// Fault position within `excerpt`.
        index: usize,
        /// Text surrounding the fault.
        excerpt: String,
    },
    /// The requested window does not lie inside the input.
    #[error("window of {length} bytes at offset {offset} exceeds input of {available} bytes")]
    OutOfBounds {
        /// Requested start of the window.
        offset: usize,
        /// Requested number of bytes.
        length: usize,
        /// Length of the input.
        available: usize,
    },
    /// A negative contextual radius was rejected; the previous radius stays in effect.
    #[error("contextual radius must not be negative, got {0}")]
    NegativeRadius(isize),
}

impl HexError {
    /// Absolute position of a malformed-input fault.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            HexError::Malformed { position, .. } => Some(*position),
            _ => None,
        }
    }
}

pub type Result<T, E = HexError> = std::result::Result<T, E>;
