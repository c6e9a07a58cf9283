use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Raised only for malformed caller configuration. Bad name content never
/// produces an `Error`; it is reported through [`crate::Warning`] instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String,
    },
}

impl Error {
    pub(crate) fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Error {
        Error::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }
}
