//! HTTP implementation of the backend session endpoint.

use std::{sync::Arc, time::Duration};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use crate::log_error;
use crate::models::{GameSession, StoredSession};

use super::{CredentialProvider, SessionBackend};

const ENABLE_LOGS: bool = true;

/// The backend enforces its own limits; the client only guards against a
/// hung connection.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Error payload shape returned by the backend on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

pub struct HttpSessionBackend {
    client: reqwest::Client,
    base_url: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl HttpSessionBackend {
    pub fn new(base_url: impl Into<String>, credentials: Arc<dyn CredentialProvider>) -> Result<Self> {
        Self::with_timeout(base_url, credentials, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        credentials: Arc<dyn CredentialProvider>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
        })
    }

    fn sessions_url(&self) -> String {
        format!("{}/sessions", self.base_url)
    }
}

impl SessionBackend for HttpSessionBackend {
    async fn create_session(&self, session: &GameSession) -> Result<StoredSession> {
        let mut request = self.client.post(self.sessions_url()).json(session);
        if let Some(token) = self.credentials.bearer_token() {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to submit session for game '{}'", session.game_id))?;

        let status = response.status();
        if !status.is_success() {
            // Prefer the backend's human-readable message when one exists.
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.message,
                Err(_) => format!("session endpoint returned {status}"),
            };
            log_error!("Session submission rejected: {message}");
            return Err(anyhow!(message));
        }

        response
            .json::<StoredSession>()
            .await
            .context("Failed to decode stored session from backend")
    }
}
