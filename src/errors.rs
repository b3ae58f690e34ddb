//! Definition of errors.

use std::error::Error;
use std::fmt;

/// A specialized Result type for Griddle.
pub type Result<T, E = GriddleError> = std::result::Result<T, E>;

/// The error type for Griddle.
#[derive(Debug)]
pub enum GriddleError {
    /// The error variant for [`FormatError`].
    Format(FormatError),

    /// The error variant for [`CorruptError`].
    Corrupt(CorruptError),

    /// The error variant for [`BuildError`].
    Build(BuildError),

    /// The error variant for [`NotTerminalError`].
    NotTerminal(NotTerminalError),

    /// The error variant for [`std::io::Error`].
    StdIo(std::io::Error),
}

impl GriddleError {
    pub(crate) fn format<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::Format(FormatError { msg: msg.into() })
    }

    pub(crate) fn corrupt<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::Corrupt(CorruptError { msg: msg.into() })
    }

    /// Creates a [`BuildError`] variant reporting a failed compiler run.
    ///
    /// Provided publicly so that [`Compile`](crate::compiler::Compile)
    /// implementations can report their own failures.
    pub fn build<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::Build(BuildError { msg: msg.into() })
    }

    pub(crate) fn not_terminal<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::NotTerminal(NotTerminalError { msg: msg.into() })
    }
}

impl fmt::Display for GriddleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Format(e) => e.fmt(f),
            Self::Corrupt(e) => e.fmt(f),
            Self::Build(e) => e.fmt(f),
            Self::NotTerminal(e) => e.fmt(f),
            Self::StdIo(e) => e.fmt(f),
        }
    }
}

impl Error for GriddleError {}

/// Error used when a file is not a dictionary cache at all.
#[derive(Debug)]
pub struct FormatError {
    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "FormatError: {}", self.msg)
    }
}

impl Error for FormatError {}

/// Error used when a cache file claims the right format but is
/// structurally inconsistent.
#[derive(Debug)]
pub struct CorruptError {
    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for CorruptError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CorruptError: {}", self.msg)
    }
}

impl Error for CorruptError {}

/// Error used when the compiler collaborator fails to produce a usable
/// cache file.
#[derive(Debug)]
pub struct BuildError {
    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BuildError: {}", self.msg)
    }
}

impl Error for BuildError {}

/// Error used when a bound string is requested at a node that does not
/// terminate an entry.
#[derive(Debug)]
pub struct NotTerminalError {
    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for NotTerminalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NotTerminalError: {}", self.msg)
    }
}

impl Error for NotTerminalError {}

impl From<std::io::Error> for GriddleError {
    fn from(error: std::io::Error) -> Self {
        Self::StdIo(error)
    }
}
