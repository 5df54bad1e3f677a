//! Lookahead Engine error type.

use std::error;
use std::fmt::{self, Display};
use std::result;

/// Lookahead Engine generic result type.
pub type Result<T> = result::Result<T, Error>;

/// A list specifying general errors for the Lookahead engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A decision was requested for a non-terminal state with no actions.
    NoActions,
    /// A decision was requested for a state where play is already over.
    TerminalState,
    /// An action was given to a game that cannot be applied to the state.
    IllegalAction,
    /// The search was told to stop by an external signal.
    SearchStopped,
    /// The depth limit primitive did not increase the depth limit.
    DepthLimitNotIncreased,
    /// Utility bounds are not finite or not ordered.
    InvalidBounds,

    /// Square parse string malformed.
    ParseSquareMalformed,
    /// Color parse string malformed.
    ParseColorMalformed,
    /// Move parse string malformed.
    ParseMoveMalformed,
    /// Position parse string malformed.
    ParsePositionMalformed,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NoActions => "no actions",
            ErrorKind::TerminalState => "terminal state",
            ErrorKind::IllegalAction => "illegal action",
            ErrorKind::SearchStopped => "search stopped",
            ErrorKind::DepthLimitNotIncreased => "depth limit not increased",
            ErrorKind::InvalidBounds => "invalid utility bounds",

            ErrorKind::ParseSquareMalformed => "parse square malformed",
            ErrorKind::ParseColorMalformed => "parse color malformed",
            ErrorKind::ParseMoveMalformed => "parse move malformed",
            ErrorKind::ParsePositionMalformed => "parse position malformed",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The primary and general error type for the Lookahead engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Simple(ErrorKind),
    #[error("{0}: {1}")]
    Message(ErrorKind, String),
    #[error("{0}, error: {1}")]
    Custom(ErrorKind, #[source] Box<dyn error::Error + Send + Sync>),
}

impl Error {
    pub fn new<E>(error_kind: ErrorKind, inner_error: E) -> Self
    where
        E: Into<Box<dyn error::Error + Send + Sync>>,
    {
        Self::Custom(error_kind, inner_error.into())
    }

    /// Returns the kind of this error, regardless of attached context.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Simple(error_kind)
            | Error::Message(error_kind, _)
            | Error::Custom(error_kind, _) => *error_kind,
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(error_kind: ErrorKind) -> Self {
        Self::Simple(error_kind)
    }
}

impl<S: ToString> From<(ErrorKind, S)> for Error {
    fn from((error_kind, stringable): (ErrorKind, S)) -> Self {
        Self::Message(error_kind, stringable.to_string())
    }
}
