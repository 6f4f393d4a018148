//! REST mirror access: the read-only fallback between the contract and
//! canned data.

use corkboard_common::message::Message;

use crate::error::ClientError;

/// Read view of the feed as replicated by the REST mirror.
#[allow(async_fn_in_trait)]
pub trait MirrorApi {
    async fn messages(&self) -> Result<Vec<Message>, ClientError>;
}

/// HTTP client for a mirror deployment.
#[derive(Debug, Clone)]
pub struct HttpMirror {
    http: reqwest::Client,
    base_url: String,
}

impl HttpMirror {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }
}

impl MirrorApi for HttpMirror {
    async fn messages(&self) -> Result<Vec<Message>, ClientError> {
        let url = format!("{}/api/messages", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|err| {
                ClientError::backend_unreachable("mirror request failed").with_source(err)
            })?;
        if !response.status().is_success() {
            return Err(ClientError::backend_unreachable(format!(
                "mirror answered {}",
                response.status()
            )));
        }
        response.json().await.map_err(|err| {
            ClientError::malformed_response("mirror payload is not a message array")
                .with_source(err)
        })
    }
}
