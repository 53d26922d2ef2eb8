//! Strongly typed agent identifier.
//!
//! Bodies are keyed by the name they carry in the world registry, so the ID
//! wraps an owned string rather than a dense integer index.  `Ord + Hash`
//! lets it serve as a `BTreeMap` key, which in turn gives every per-tick
//! iteration a deterministic ascending order.

use std::borrow::Borrow;
use std::fmt;

/// Registry name of one controllable rigid body.
///
/// An `AgentId` is only eligible for coordination once it also appears in
/// the goal offset table; snapshot entries with unconfigured ids are
/// skipped, never treated as errors.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(String);

impl AgentId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the underlying registry name.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AgentId {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for AgentId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Allows `BTreeMap<AgentId, _>` lookups by `&str` without allocating.
impl Borrow<str> for AgentId {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
