//! Shared HTTP plumbing for HuggingFace Inference API calls.

use crate::huggingface::dto::HubErrorBody;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use storybook_error::{HuggingFaceErrorKind, ModelsError, ModelsResult};
use tracing::{debug, error, instrument, warn};

/// Default Inference API endpoint; the model id is appended as a path.
pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co/models";

/// Default per-request timeout. Cold diffusion models can take minutes.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Environment variable holding the hub access token.
pub const TOKEN_ENV_VAR: &str = "HUGGINGFACE_TOKEN";

/// Authenticated HTTP client for the hub, shared by both drivers.
///
/// A missing token is not an error here: requests go out unauthenticated
/// and the hub answers with an authorization failure for gated models.
#[derive(Clone)]
pub struct HubClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HubClient {
    /// Creates a client for the default endpoint, reading the token from
    /// `HUGGINGFACE_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be initialized.
    pub fn from_env() -> ModelsResult<Self> {
        Self::new(
            DEFAULT_BASE_URL,
            std::env::var(TOKEN_ENV_VAR).ok(),
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Creates a client with explicit endpoint, token and timeout.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be initialized.
    #[instrument(skip(token), fields(base_url = %base_url.as_ref(), has_token = token.is_some()))]
    pub fn new(
        base_url: impl AsRef<str>,
        token: Option<String>,
        timeout: Duration,
    ) -> ModelsResult<Self> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            ModelsError::from(HuggingFaceErrorKind::InvalidConfiguration(format!(
                "Failed to build HTTP client: {}",
                e
            )))
        })?;

        let token = token.filter(|t| !t.trim().is_empty());
        if token.is_none() {
            warn!("{} not set; hub requests will be unauthenticated", TOKEN_ENV_VAR);
        }

        Ok(Self {
            client,
            base_url: base_url.as_ref().trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Endpoint the model ids are appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether an access token will be sent.
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Full URL for a model.
    pub fn model_url(&self, model: &str) -> String {
        format!("{}/{}", self.base_url, model.trim_start_matches('/'))
    }

    /// POST a JSON body to a model endpoint and return the successful response.
    ///
    /// # Errors
    ///
    /// Transport failures, timeouts, and non-success statuses.
    pub(crate) async fn post_json<T: Serialize + ?Sized>(
        &self,
        model: &str,
        body: &T,
    ) -> ModelsResult<Response> {
        let url = self.model_url(model);
        debug!(url = %url, "Sending request to HuggingFace");

        let mut request = self.client.post(&url).json(body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            error!(error = ?e, url = %url, "HTTP request failed");
            let kind = if e.is_timeout() {
                HuggingFaceErrorKind::Timeout(e.to_string())
            } else {
                HuggingFaceErrorKind::Request(e.to_string())
            };
            ModelsError::from(kind)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<HubErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or(body);
        error!(status = %status, error = %message, "API error");

        Err(status_error(status, message))
    }
}

#[track_caller]
fn status_error(status: StatusCode, message: String) -> ModelsError {
    let kind = match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => HuggingFaceErrorKind::Unauthorized {
            status: status.as_u16(),
            message,
        },
        _ => HuggingFaceErrorKind::Api {
            status: status.as_u16(),
            message,
        },
    };
    ModelsError::from(kind)
}

impl fmt::Debug for HubClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HubClient")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
