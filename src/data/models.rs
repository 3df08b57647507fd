//! Data models

use serde::{Deserialize, Serialize};

/// Snapshot of one public profile at fetch time.
///
/// Serialized with the historical wire keys so the JSON response and the
/// on-disk `profile_data.json` artifact stay compatible with existing
/// consumers of the log. Produced fresh per request and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(rename = "Username")]
    pub username: String,

    #[serde(rename = "Full Name")]
    pub full_name: String,

    #[serde(rename = "Bio")]
    pub biography: String,

    #[serde(rename = "Followers")]
    pub followers: u64,

    #[serde(rename = "Following")]
    pub following: u64,

    #[serde(rename = "Posts")]
    pub posts: u64,

    #[serde(rename = "Profile Picture URL")]
    pub profile_pic_url: String,

    #[serde(rename = "External URL")]
    pub external_url: Option<String>,

    #[serde(rename = "Is Business Account")]
    pub is_business_account: bool,

    #[serde(rename = "Is Verified")]
    pub is_verified: bool,
}
