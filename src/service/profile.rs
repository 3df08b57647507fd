//! Profile fetch service
//!
//! One linear workflow per request: look the profile up, persist the
//! artifacts, hand the record back. No retries, no intermediate states.

use std::sync::Arc;

use url::Url;

use crate::AppState;
use crate::data::ProfileRecord;
use crate::error::AppError;
use crate::metrics::{MEDIA_DOWNLOADS_TOTAL, PROFILE_FETCHES_TOTAL};
use crate::scraper::{LookupOutcome, ProfileLookup};
use crate::storage::{ArtifactStore, FetchLog};

/// Profile fetch service
pub struct ProfileService {
    lookup: Arc<dyn ProfileLookup>,
    artifacts: Arc<ArtifactStore>,
    fetch_log: Arc<FetchLog>,
    http_client: Arc<reqwest::Client>,
}

impl ProfileService {
    /// Create a new profile service
    pub fn new(
        lookup: Arc<dyn ProfileLookup>,
        artifacts: Arc<ArtifactStore>,
        fetch_log: Arc<FetchLog>,
        http_client: Arc<reqwest::Client>,
    ) -> Self {
        Self {
            lookup,
            artifacts,
            fetch_log,
            http_client,
        }
    }

    /// Build a service from shared application state
    pub fn from_state(state: &AppState) -> Self {
        Self::new(
            state.lookup.clone(),
            state.artifacts.clone(),
            state.fetch_log.clone(),
            state.http_client.clone(),
        )
    }

    /// Fetch one profile and persist its artifacts.
    ///
    /// Lookup outcomes map one-to-one onto the error taxonomy; only a
    /// found profile triggers the side effects. Artifact-write failures
    /// propagate, a failed picture download does not.
    pub async fn fetch(&self, username: &str) -> Result<ProfileRecord, AppError> {
        tracing::info!(username, "Fetching profile");

        match self.lookup.lookup(username).await {
            LookupOutcome::Found(record) => {
                PROFILE_FETCHES_TOTAL.with_label_values(&["found"]).inc();
                self.persist(&record).await?;
                tracing::info!(
                    username = %record.username,
                    followers = record.followers,
                    "Profile snapshot written"
                );
                Ok(record)
            }
            LookupOutcome::NotFound => {
                PROFILE_FETCHES_TOTAL.with_label_values(&["not_found"]).inc();
                Err(AppError::ProfileNotFound)
            }
            LookupOutcome::Private => {
                PROFILE_FETCHES_TOTAL.with_label_values(&["private"]).inc();
                Err(AppError::PrivateProfile)
            }
            LookupOutcome::Failed(message) => {
                PROFILE_FETCHES_TOTAL.with_label_values(&["failed"]).inc();
                tracing::error!(username, error = %message, "Profile lookup failed");
                Err(AppError::Upstream(message))
            }
        }
    }

    /// Write all artifacts for a fetched record.
    ///
    /// Order matches the response contract: picture first (best effort),
    /// then JSON dump, HTML report, and the CSV log row.
    async fn persist(&self, record: &ProfileRecord) -> Result<(), AppError> {
        self.artifacts.ensure_user_layout(&record.username).await?;

        self.download_profile_pic(record).await;

        self.artifacts.write_profile_json(record).await?;
        self.artifacts.write_report(record).await?;
        self.fetch_log.append(record).await?;

        Ok(())
    }

    /// Best-effort profile picture download.
    ///
    /// Failures are logged and counted, never surfaced to the caller.
    async fn download_profile_pic(&self, record: &ProfileRecord) {
        match self.fetch_and_store_pic(record).await {
            Ok(()) => {
                MEDIA_DOWNLOADS_TOTAL.with_label_values(&["ok"]).inc();
            }
            Err(error) => {
                MEDIA_DOWNLOADS_TOTAL.with_label_values(&["failed"]).inc();
                tracing::warn!(
                    username = %record.username,
                    %error,
                    "Failed to download profile picture"
                );
            }
        }
    }

    async fn fetch_and_store_pic(&self, record: &ProfileRecord) -> Result<(), AppError> {
        let url = Url::parse(&record.profile_pic_url)
            .map_err(|e| AppError::Upstream(format!("Invalid profile picture URL: {e}")))?;

        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Upstream(format!(
                "Profile picture fetch returned status {status}"
            )));
        }

        let bytes = response.bytes().await?;
        self.artifacts
            .save_profile_pic(&record.username, &bytes)
            .await?;
        Ok(())
    }
}
