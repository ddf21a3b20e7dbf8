use reqwest::Client;

use crate::{api::types::*, config};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    /// Posts credentials to the authentication service.
    ///
    /// A non-2xx status becomes [`ApiError::Rejected`] only when its body
    /// parses; an unreadable body on either branch is a transport failure.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let url = config::login_endpoint(&base_url);
        log::debug!("POST {}", url);

        let response = self
            .http_client()
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::transport(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<LoginResponse>()
                .await
                .map_err(|e| ApiError::transport(format!("Failed to parse response: {}", e)))
        } else {
            let body: ErrorBody = response
                .json()
                .await
                .map_err(|e| ApiError::transport(format!("Failed to parse error: {}", e)))?;
            Err(ApiError::rejected(status.as_u16(), body.display_message()))
        }
    }
}
