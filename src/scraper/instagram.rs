//! Instagram web profile lookup
//!
//! Talks to the same unauthenticated endpoint the Instagram web client
//! uses. A browser-looking user agent and the web app id header are
//! required or the endpoint answers with a login redirect.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use super::{LookupOutcome, ProfileLookup};
use crate::data::ProfileRecord;

const WEB_PROFILE_INFO_URL: &str = "https://www.instagram.com/api/v1/users/web_profile_info/";

/// App id of the public Instagram web client.
const IG_APP_ID: &str = "936619743392459";

/// Live profile lookup against Instagram
pub struct InstagramLookup {
    client: Arc<reqwest::Client>,
}

impl InstagramLookup {
    /// Create a lookup backed by the shared HTTP client
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProfileLookup for InstagramLookup {
    async fn lookup(&self, username: &str) -> LookupOutcome {
        let response = match self
            .client
            .get(WEB_PROFILE_INFO_URL)
            .query(&[("username", username)])
            .header("x-ig-app-id", IG_APP_ID)
            .send()
            .await
        {
            Ok(response) => response,
            Err(error) => {
                return LookupOutcome::Failed(format!("Profile lookup request failed: {error}"));
            }
        };

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return LookupOutcome::NotFound;
        }
        if !status.is_success() {
            return LookupOutcome::Failed(format!(
                "Profile lookup returned unexpected status {status}"
            ));
        }

        let payload: WebProfileResponse = match response.json().await {
            Ok(payload) => payload,
            Err(error) => {
                return LookupOutcome::Failed(format!(
                    "Failed to decode profile payload: {error}"
                ));
            }
        };

        match payload.data.user {
            Some(user) => outcome_from_user(user),
            None => LookupOutcome::NotFound,
        }
    }
}

fn outcome_from_user(user: UserNode) -> LookupOutcome {
    if user.is_private && !user.followed_by_viewer {
        return LookupOutcome::Private;
    }

    let profile_pic_url = user
        .profile_pic_url_hd
        .or(user.profile_pic_url)
        .unwrap_or_default();

    LookupOutcome::Found(ProfileRecord {
        username: user.username,
        full_name: user.full_name.unwrap_or_default(),
        biography: user.biography.unwrap_or_default(),
        followers: user.edge_followed_by.count,
        following: user.edge_follow.count,
        posts: user.edge_owner_to_timeline_media.count,
        profile_pic_url,
        external_url: user.external_url,
        is_business_account: user.is_business_account,
        is_verified: user.is_verified,
    })
}

/// Top-level `web_profile_info` payload
#[derive(Debug, Deserialize)]
struct WebProfileResponse {
    data: ProfileData,
}

#[derive(Debug, Deserialize)]
struct ProfileData {
    /// Null when the username does not exist
    user: Option<UserNode>,
}

#[derive(Debug, Deserialize)]
struct UserNode {
    username: String,
    full_name: Option<String>,
    biography: Option<String>,
    edge_followed_by: EdgeCount,
    edge_follow: EdgeCount,
    edge_owner_to_timeline_media: EdgeCount,
    profile_pic_url: Option<String>,
    profile_pic_url_hd: Option<String>,
    external_url: Option<String>,
    #[serde(default)]
    is_business_account: bool,
    #[serde(default)]
    is_verified: bool,
    #[serde(default)]
    is_private: bool,
    #[serde(default)]
    followed_by_viewer: bool,
}

#[derive(Debug, Deserialize)]
struct EdgeCount {
    count: u64,
}
