//! Off-chain profile storage.

use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::RwLock;

use corkboard_common::profile::Profile;

/// Address-keyed profile rows.
#[derive(Default)]
pub struct ProfileStore {
    inner: RwLock<HashMap<String, Profile>>,
}

impl ProfileStore {
    pub async fn get(&self, address: &str) -> Option<Profile> {
        self.inner.read().await.get(address).cloned()
    }

    /// Create or update. The creation stamp survives updates; the update
    /// stamp is always refreshed. Returns the stored row.
    pub async fn upsert(&self, mut profile: Profile) -> Profile {
        let now = Utc::now().timestamp();
        let mut rows = self.inner.write().await;
        profile.updated_at = now;
        profile.created_at = rows
            .get(&profile.address)
            .map_or(now, |existing| existing.created_at);
        rows.insert(profile.address.clone(), profile.clone());
        profile
    }
}
