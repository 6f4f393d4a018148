use serde::{Deserialize, Serialize};

/// Off-chain user profile stored by the mirror, keyed by wallet address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub address: String,
    pub username: String,
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_links: Option<Vec<String>>,
    /// Unix seconds; set by the mirror on first save.
    pub created_at: i64,
    /// Unix seconds; refreshed by the mirror on every save.
    pub updated_at: i64,
}
