//! Artifact storage on local disk
//!
//! Every successful fetch leaves three artifacts behind: a JSON dump and an
//! HTML report under the per-user directory, and one appended row in the
//! process-wide CSV log. The profile picture lands next to them when its
//! download succeeds.

mod artifacts;
mod csv_log;
mod report;

pub use artifacts::ArtifactStore;
pub use csv_log::FetchLog;
pub use report::render_report;
