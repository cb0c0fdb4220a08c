//! Error types.
//!
//! Loading is the only fallible step. Draws against an empty deck are
//! not errors; they simply yield no cards.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to load a deck or table configuration.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("card {index} has an empty `{field}` field")]
    EmptyField { index: usize, field: &'static str },
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Unknown spread name passed where a `SpreadKind` was expected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown spread `{0}` (expected one, three, celtic or fan)")]
pub struct ParseSpreadError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_field_message() {
        let err = LoadError::EmptyField {
            index: 4,
            field: "reversedMeaning",
        };
        assert_eq!(err.to_string(), "card 4 has an empty `reversedMeaning` field");
    }

    #[test]
    fn test_io_message_names_path() {
        let err = LoadError::io(
            "missing/deck.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.to_string().contains("missing/deck.json"));
    }

    #[test]
    fn test_parse_from_serde() {
        let source = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: LoadError = source.into();
        assert!(matches!(err, LoadError::Parse(_)));
    }
}
