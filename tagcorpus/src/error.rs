use std::io;

use thiserror::Error;

/// Broad classification of dataset errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Malformed input: misaligned sentences, duplicate keys, bad ratios.
    Validation,

    /// A key that is not in the corpus was requested.
    KeyNotFound,

    /// The corpus source could not provide sentences.
    Source,

    /// The configuration could not be read.
    Configuration,
}

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Subset contains key {0} more than once")]
    DuplicateKey(usize),

    #[error("Train ratio must be in [0, 1], was: {0}")]
    InvalidRatio(f64),

    #[error(transparent)]
    IoError(#[from] io::Error),

    #[error("Unknown sentence key: {0}")]
    KeyNotFound(usize),

    #[error("Sentence has {words} words, but {tags} tags")]
    LengthMismatch { words: usize, tags: usize },

    #[error("Cannot read tagged sentences from corpus: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error(transparent)]
    TomlDeserializationError(#[from] toml::de::Error),
}

impl DatasetError {
    /// Get the kind of the error.
    pub fn kind(&self) -> ErrorKind {
        use DatasetError::*;

        match self {
            DuplicateKey(_) | InvalidRatio(_) | LengthMismatch { .. } => ErrorKind::Validation,
            KeyNotFound(_) => ErrorKind::KeyNotFound,
            Source(_) => ErrorKind::Source,
            IoError(_) | TomlDeserializationError(_) => ErrorKind::Configuration,
        }
    }

    /// Check whether this is a validation error.
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }
}

#[cfg(test)]
mod tests {
    use super::{DatasetError, ErrorKind};

    #[test]
    fn error_kinds() {
        assert_eq!(DatasetError::DuplicateKey(1).kind(), ErrorKind::Validation);
        assert_eq!(DatasetError::InvalidRatio(2.0).kind(), ErrorKind::Validation);
        assert_eq!(DatasetError::KeyNotFound(3).kind(), ErrorKind::KeyNotFound);
        assert!(DatasetError::LengthMismatch { words: 2, tags: 1 }.is_validation());
        assert!(!DatasetError::KeyNotFound(3).is_validation());
    }
}
