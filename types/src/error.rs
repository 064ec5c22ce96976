use dioxus::prelude::ServerFnError;
use serde::{Deserialize, Serialize};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A serializable error for client rendering.
///
/// Anything convertible into an [`anyhow::Error`] converts into this type, so
/// `?` works on library errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Error {
    pub message: String,
}

impl Error {
    /// Turn this error into a server function error with the given status code.
    pub fn status(self, code: u16) -> ServerFnError {
        ServerFnError::ServerError {
            message: self.message,
            code,
            details: None,
        }
    }
}

/// Attach an HTTP status while crossing the server function boundary.
pub trait ResultExt<T> {
    fn with_status(self, code: u16) -> Result<T, ServerFnError>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_status(self, code: u16) -> Result<T, ServerFnError> {
        self.map_err(|error| error.status(code))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl<E> From<E> for Error
where
    E: Into<anyhow::Error>,
{
    fn from(error: E) -> Self {
        let report: anyhow::Error = error.into();
        // The alternate representation includes the whole error chain
        Self {
            message: format!("{report:#}"),
        }
    }
}

/// Build an [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from($crate::internal_anyhow_dont_use!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn err_macro_formats_message() {
        let key = "pages";
        let error = crate::err!("duplicate menu key `{key}`");
        assert_eq!(error.message, "duplicate menu key `pages`");
    }

    #[test]
    fn status_is_carried_into_server_errors() {
        let result: Result<()> = Err(crate::err!("session cookie not found"));

        match result.with_status(401) {
            Err(ServerFnError::ServerError { message, code, .. }) => {
                assert_eq!(code, 401);
                assert_eq!(message, "session cookie not found");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn library_errors_convert() {
        fn parse(s: &str) -> Result<u32> {
            Ok(s.parse::<u32>()?)
        }

        let error = parse("nope").unwrap_err();
        assert!(error.message.contains("invalid digit"));
    }
}
