use thiserror::Error;

pub type Result<T> = std::result::Result<T, JournalError>;

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("io error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed json in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown time zone '{0}'")]
    InvalidTimezone(String),

    #[error("invalid reference date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

impl JournalError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        JournalError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<String>, source: serde_json::Error) -> Self {
        JournalError::Json {
            path: path.into(),
            source,
        }
    }
}
