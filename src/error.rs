//! Error types for spider_impersonate.

use crate::configs::{AgentOs, BrowserFamily};

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned while resolving or composing an identity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No catalog entry and no family default exists for the pair.
    /// `family` is `None` when the identity never picked a browser.
    #[error("unsupported identity: {family:?} on {os}")]
    UnsupportedIdentity {
        family: Option<BrowserFamily>,
        os: AgentOs,
    },

    /// A composed artifact broke one of its own invariants.
    #[error("inconsistent artifact: {0}")]
    InconsistentArtifact(String),
}

impl Error {
    /// Build an `UnsupportedIdentity` error.
    pub fn unsupported(family: Option<BrowserFamily>, os: AgentOs) -> Self {
        Error::UnsupportedIdentity { family, os }
    }

    /// Is this a rejected (family, os) pair rather than an internal defect?
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::UnsupportedIdentity { .. })
    }
}
