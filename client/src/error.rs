use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// Failure classes surfaced by client operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A contract, RPC, or mirror call failed outright.
    BackendUnreachable,
    /// The wallet is on a different chain than writes require.
    ChainMismatch,
    /// A backend answered with a shape the client cannot use.
    MalformedResponse,
    /// No backend can serve the operation in the current mode.
    NoBackend,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BackendUnreachable => "backend unreachable",
            Self::ChainMismatch => "chain mismatch",
            Self::MalformedResponse => "malformed response",
            Self::NoBackend => "no backend available",
        })
    }
}

/// Structured client error: a kind callers can branch on, a human-readable
/// message, and the underlying failure when one exists.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct ClientError {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl ClientError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn backend_unreachable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BackendUnreachable, message)
    }

    pub fn chain_mismatch(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ChainMismatch, message)
    }

    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedResponse, message)
    }

    pub fn no_backend(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoBackend, message)
    }

    /// Attach the failure this error wraps.
    pub fn with_source(mut self, source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Render the full cause chain, outermost first. Used when absorbing a
/// failure into the log so no nested detail is lost.
pub fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut rendered = err.to_string();
    let mut current = err.source();
    while let Some(cause) = current {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        current = cause.source();
    }
    rendered
}
