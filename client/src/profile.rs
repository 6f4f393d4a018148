//! Profile CRUD against the mirror.
//!
//! Independent of the feed core: profiles are plain mirror rows, never
//! synchronized with the chain.

use reqwest::StatusCode;

use corkboard_common::profile::Profile;

use crate::error::ClientError;

/// HTTP client for the mirror's profile endpoints.
#[derive(Debug, Clone)]
pub struct ProfileClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProfileClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Look a profile up by wallet address; `None` when no profile exists.
    pub async fn fetch(&self, address: &str) -> Result<Option<Profile>, ClientError> {
        let url = format!("{}/api/profiles/{address}", self.base_url);
        let response = self.http.get(&url).send().await.map_err(|err| {
            ClientError::backend_unreachable("profile request failed").with_source(err)
        })?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(ClientError::backend_unreachable(format!(
                "profile endpoint answered {}",
                response.status()
            )));
        }
        let profile = response.json().await.map_err(|err| {
            ClientError::malformed_response("profile payload has an unexpected shape")
                .with_source(err)
        })?;
        Ok(Some(profile))
    }

    /// Create or update a profile; the mirror echoes the stored row back.
    pub async fn save(&self, profile: &Profile) -> Result<Profile, ClientError> {
        let url = format!("{}/api/profiles", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(profile)
            .send()
            .await
            .map_err(|err| {
                ClientError::backend_unreachable("profile save failed").with_source(err)
            })?;
        if !response.status().is_success() {
            return Err(ClientError::backend_unreachable(format!(
                "profile endpoint answered {}",
                response.status()
            )));
        }
        response.json().await.map_err(|err| {
            ClientError::malformed_response("saved profile echo has an unexpected shape")
                .with_source(err)
        })
    }
}
