use std::error::Error;
use std::fmt;

use crate::config::Credential;

/// Errors raised by credential consumers
///
/// Loading never fails; these only come out of the lookup helpers
/// that callers opt into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredError {
    /// A credential the caller requires is not set
    MissingCredential(Credential),
    /// A name that is not one of the known credentials
    UnknownCredential(String),
}

impl fmt::Display for CredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredError::MissingCredential(cred) => write!(
                f,
                "Missing credential: {}\n  → Set it with: export {}=\"your-key\" or add it to .env",
                cred.env_key(),
                cred.env_key()
            ),
            CredError::UnknownCredential(name) => write!(f, "Unknown credential: {}", name),
        }
    }
}

impl Error for CredError {}

/// Result type alias for credential lookups
pub type CredResult<T> = Result<T, CredError>;
