//! Profile lookup
//!
//! The seam between the request-handling workflow and the network: a
//! `ProfileLookup` returns a tagged outcome instead of raising, so the
//! handler matches every case exhaustively. The live implementation
//! scrapes Instagram's web profile endpoint.

mod instagram;

pub use instagram::InstagramLookup;

use async_trait::async_trait;

use crate::data::ProfileRecord;

/// Outcome of a single profile lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// Profile exists and is readable.
    Found(ProfileRecord),
    /// No profile with that username.
    NotFound,
    /// Profile exists but is private and not followed by the viewer.
    Private,
    /// Transport, decode, or unexpected upstream failure.
    Failed(String),
}

/// Network-backed profile lookup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileLookup: Send + Sync {
    /// Look up the public profile for `username`.
    async fn lookup(&self, username: &str) -> LookupOutcome;
}
