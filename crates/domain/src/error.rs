//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`HomeError`]
//! via `#[from]` or the boxed bridge variants. Programmatic failure cases
//! get their own variant; no `String` catch-alls.

/// Boxed error used to carry lower-layer failures across port boundaries.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Top-level error for domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum HomeError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A referenced object does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// Loading or parsing a configuration document failed.
    #[error("configuration error")]
    Config(#[source] BoxError),

    /// A device link or observer adapter failed.
    #[error("adapter error")]
    Adapter(#[source] BoxError),
}

impl HomeError {
    /// Wrap a configuration-layer error for propagation.
    #[must_use]
    pub fn config(err: impl Into<BoxError>) -> Self {
        Self::Config(err.into())
    }

    /// Wrap an adapter-layer error for propagation.
    #[must_use]
    pub fn adapter(err: impl Into<BoxError>) -> Self {
        Self::Adapter(err.into())
    }
}

/// Violations of domain invariants.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A name field was empty.
    #[error("name must not be empty")]
    EmptyName,

    /// A device type tag did not name a known kind.
    #[error("unknown device kind: {0}")]
    UnknownDeviceKind(String),

    /// A role name did not name a known role.
    #[error("unknown role: {0}")]
    UnknownRole(String),

    /// An automation mode name did not name a known mode.
    #[error("unknown automation mode: {0}")]
    UnknownMode(String),
}

/// A lookup failed because the object does not exist.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of object that was looked up (e.g. `"Device"`).
    pub entity: &'static str,
    /// The identifier that was looked up.
    pub id: String,
}
