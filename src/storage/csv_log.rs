//! Append-only CSV fetch log
//!
//! One row per successful fetch, never rewritten or deduplicated. There is
//! no file locking; concurrent appenders can interleave rows.

use std::path::{Path, PathBuf};

use chrono::Local;
use tokio::io::AsyncWriteExt;

use crate::data::ProfileRecord;
use crate::error::AppError;
use crate::metrics::ARTIFACT_WRITES_TOTAL;

/// Fixed column set of the log
pub const LOG_HEADER: [&str; 8] = [
    "Timestamp",
    "Username",
    "Full Name",
    "Bio",
    "Followers",
    "Following",
    "Posts",
    "Profile Picture URL",
];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Process-wide append-only fetch log
pub struct FetchLog {
    path: PathBuf,
}

impl FetchLog {
    /// Create a log handle for `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Write the header row if the file does not exist yet.
    ///
    /// Runs once before the server accepts traffic. Idempotent: an
    /// existing log is left untouched.
    pub async fn init(&self) -> Result<(), AppError> {
        if tokio::fs::try_exists(&self.path).await? {
            return Ok(());
        }

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(LOG_HEADER)?;
        let bytes = writer.into_inner().map_err(csv::IntoInnerError::into_error)?;

        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }

    /// Append one row for a successful fetch, stamped with the current
    /// local time.
    pub async fn append(&self, record: &ProfileRecord) -> Result<(), AppError> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let followers = record.followers.to_string();
        let following = record.following.to_string();
        let posts = record.posts.to_string();

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record([
            timestamp.as_str(),
            record.username.as_str(),
            record.full_name.as_str(),
            record.biography.as_str(),
            followers.as_str(),
            following.as_str(),
            posts.as_str(),
            record.profile_pic_url.as_str(),
        ])?;
        let bytes = writer.into_inner().map_err(csv::IntoInnerError::into_error)?;

        let mut file = tokio::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .await?;
        file.write_all(&bytes).await?;

        ARTIFACT_WRITES_TOTAL.with_label_values(&["csv"]).inc();
        Ok(())
    }

    /// Path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
