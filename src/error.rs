//! Error types.

use std::fmt;

/// Detailed cause of a [`ParseError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The scheme does not match `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
    ///
    /// The error index points to the start of the scheme.
    InvalidScheme,
    /// The authority does not match `[ userinfo "@" ] host [ ":" port ]`.
    ///
    /// The error index points to the start of the authority.
    InvalidAuthority,
    /// The port is out of the range `0..=65535`.
    ///
    /// The error index points to the first digit of the port.
    InvalidPort,
    /// A userinfo is present while the host is empty.
    ///
    /// The error index points to the start of the authority.
    UserinfoWithoutHost,
    /// A port is present while the host is empty.
    ///
    /// The error index points to the start of the authority.
    PortWithoutHost,
    /// A password is present without a user.
    ///
    /// The error index points to the start of the authority.
    PasswordWithoutUser,
}

/// An error occurred when parsing a URI reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub(crate) index: u32,
    pub(crate) kind: ParseErrorKind,
}

impl ParseError {
    /// Returns the index where the error occurred in the input string.
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index as usize
    }

    /// Returns the detailed cause of the error.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            ParseErrorKind::InvalidScheme => "invalid scheme at index ",
            ParseErrorKind::InvalidAuthority => "invalid authority at index ",
            ParseErrorKind::InvalidPort => "port out of range at index ",
            ParseErrorKind::UserinfoWithoutHost => "userinfo without host at index ",
            ParseErrorKind::PortWithoutHost => "port without host at index ",
            ParseErrorKind::PasswordWithoutUser => "password without user at index ",
        };
        write!(f, "{}{}", msg, self.index)
    }
}

impl std::error::Error for ParseError {}

/// Broad category of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input text does not match the required grammar.
    Structural,
    /// A well-typed value is out of range.
    ValueRange,
    /// A value of the wrong kind was supplied.
    TypeConstraint,
    /// An unrecognized component name was supplied.
    UnknownField,
}

/// An error occurred when building a [`Uri`](crate::Uri).
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The scheme does not match the scheme grammar.
    InvalidScheme(String),
    /// The port is out of the range `0..=65535`.
    PortOutOfRange(i64),
    /// A component received a value of the wrong kind.
    TypeMismatch {
        /// Name of the component.
        component: &'static str,
        /// Kind of value the component accepts.
        expected: &'static str,
    },
    /// An unrecognized component name was supplied.
    UnknownComponent(String),
}

impl Error {
    /// Returns the category of the error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidScheme(_) => ErrorKind::Structural,
            Self::PortOutOfRange(_) => ErrorKind::ValueRange,
            Self::TypeMismatch { .. } => ErrorKind::TypeConstraint,
            Self::UnknownComponent(_) => ErrorKind::UnknownField,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScheme(s) => write!(f, "invalid scheme '{s}'"),
            Self::PortOutOfRange(port) => write!(f, "invalid port '{port}'"),
            Self::TypeMismatch {
                component,
                expected,
            } => write!(f, "invalid '{component}': should be {expected}"),
            Self::UnknownComponent(name) => write!(f, "invalid URI component: '{name}'"),
        }
    }
}

impl std::error::Error for Error {}
