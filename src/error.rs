//! Unified error type.

use std::fmt;

/// The error type returned by canopy's fallible operations.
///
/// Composition itself cannot fail. This type surfaces host-side failures:
/// asking the router for a location it has no route for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No registered route matches the location.
    NoMatch(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMatch(path) => write!(f, "no route matches `{path}`"),
        }
    }
}

impl std::error::Error for Error {}
