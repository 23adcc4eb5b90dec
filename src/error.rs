// src/error.rs
//! Errors raised when an icon name crosses an untyped boundary.

/// A string did not name any icon in the registry.
///
/// Only reachable when the name comes from outside the type system, e.g. a
/// config file, a CLI argument or a serialized payload. Typed [`IconId`]
/// lookups cannot fail.
///
/// [`IconId`]: crate::icons::IconId
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown icon identifier '{id}'")]
pub struct UnknownIconId {
    id: String,
}

impl UnknownIconId {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// The rejected identifier, exactly as supplied.
    pub fn id(&self) -> &str {
        &self.id
    }
}
