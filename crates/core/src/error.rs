use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("source URL cannot be empty")]
    EmptySourceUrl,

    #[error("invalid source URL {raw:?}: {reason}")]
    InvalidSourceUrl { raw: String, reason: String },

    #[error("unsupported source URL scheme {scheme:?} (expected http or https)")]
    UnsupportedScheme { scheme: String },
}
