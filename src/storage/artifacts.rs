//! Per-user artifact directories
//!
//! Layout under the data directory:
//!
//! ```text
//! <data_dir>/<username>/profile_data.json
//! <data_dir>/<username>/report.html
//! <data_dir>/<username>/media/profile_pic.jpg
//! ```

use std::path::{Path, PathBuf};

use crate::data::ProfileRecord;
use crate::error::AppError;
use crate::metrics::ARTIFACT_WRITES_TOTAL;
use crate::storage::render_report;

const PROFILE_JSON_FILE: &str = "profile_data.json";
const REPORT_FILE: &str = "report.html";
const MEDIA_DIR: &str = "media";
const PROFILE_PIC_FILE: &str = "profile_pic.jpg";

/// Local-disk artifact store
///
/// Repeated fetches for the same username overwrite the JSON and HTML
/// artifacts in place; they are snapshots, not history.
pub struct ArtifactStore {
    /// Root directory for per-user folders
    data_dir: PathBuf,
}

impl ArtifactStore {
    /// Create a store rooted at `data_dir`
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Create the data directory if it does not exist yet.
    ///
    /// Runs once before the server accepts traffic. Idempotent.
    pub async fn init(&self) -> Result<(), AppError> {
        tokio::fs::create_dir_all(&self.data_dir).await?;
        Ok(())
    }

    /// Directory holding one user's artifacts
    pub fn user_dir(&self, username: &str) -> PathBuf {
        self.data_dir.join(username)
    }

    /// Path of the JSON dump for `username`
    pub fn profile_json_path(&self, username: &str) -> PathBuf {
        self.user_dir(username).join(PROFILE_JSON_FILE)
    }

    /// Path of the HTML report for `username`
    pub fn report_path(&self, username: &str) -> PathBuf {
        self.user_dir(username).join(REPORT_FILE)
    }

    /// Path of the downloaded profile picture for `username`
    pub fn profile_pic_path(&self, username: &str) -> PathBuf {
        self.user_dir(username).join(MEDIA_DIR).join(PROFILE_PIC_FILE)
    }

    /// Create the user directory and its media subdirectory
    pub async fn ensure_user_layout(&self, username: &str) -> Result<(), AppError> {
        tokio::fs::create_dir_all(self.user_dir(username).join(MEDIA_DIR)).await?;
        Ok(())
    }

    /// Write the pretty-printed JSON dump, replacing any previous one
    pub async fn write_profile_json(&self, record: &ProfileRecord) -> Result<PathBuf, AppError> {
        let path = self.profile_json_path(&record.username);
        let body = serde_json::to_vec_pretty(record)
            .map_err(|e| AppError::Internal(e.into()))?;
        tokio::fs::write(&path, body).await?;

        ARTIFACT_WRITES_TOTAL.with_label_values(&["json"]).inc();
        Ok(path)
    }

    /// Render and write the HTML report, replacing any previous one
    pub async fn write_report(&self, record: &ProfileRecord) -> Result<PathBuf, AppError> {
        let path = self.report_path(&record.username);
        tokio::fs::write(&path, render_report(record)).await?;

        ARTIFACT_WRITES_TOTAL.with_label_values(&["html"]).inc();
        Ok(path)
    }

    /// Store the downloaded profile picture bytes
    pub async fn save_profile_pic(
        &self,
        username: &str,
        bytes: &[u8],
    ) -> Result<PathBuf, AppError> {
        let path = self.profile_pic_path(username);
        tokio::fs::write(&path, bytes).await?;
        Ok(path)
    }

    /// Root data directory
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
