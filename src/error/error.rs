use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("Invalid format for value {value:?} (expected to match `{pattern}`)")]
    InvalidFormat { value: String, pattern: String },

    #[error("Failed to {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl HistoryError {
    pub(crate) fn io(action: &str, path: &Path, source: io::Error) -> Self {
        Self::Io {
            context: format!("{action} {}", path.display()),
            source,
        }
    }

    pub(crate) fn output(source: io::Error) -> Self {
        Self::Io {
            context: "write values to output".to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, HistoryError>;
