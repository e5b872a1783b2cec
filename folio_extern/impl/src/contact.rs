use std::{sync::Arc, time::Duration};

use anyhow::{anyhow, Context};
use folio_extern_contracts::contact::{ContactApiError, ContactApiService};
use folio_models::contact::ContactMessage;
use serde::Deserialize;
use tracing::{debug, instrument};
use url::Url;

use crate::http::HttpClient;

pub const DEFAULT_SIMULATED_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct ContactApiServiceImpl {
    config: ContactApiServiceConfig,
    http: HttpClient,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactApiServiceConfig {
    /// Post messages as JSON to a contact endpoint.
    Http { endpoint: Arc<Url> },
    /// Accept every message after a fixed delay without sending anything.
    Simulated { delay: Duration },
}

impl Default for ContactApiServiceConfig {
    fn default() -> Self {
        Self::Simulated {
            delay: DEFAULT_SIMULATED_DELAY,
        }
    }
}

impl ContactApiServiceConfig {
    pub fn new(endpoint: Option<Url>, simulated_delay: Duration) -> Self {
        match endpoint {
            Some(endpoint) => Self::Http {
                endpoint: endpoint.into(),
            },
            None => Self::Simulated {
                delay: simulated_delay,
            },
        }
    }
}

impl ContactApiServiceImpl {
    pub fn new(config: ContactApiServiceConfig) -> anyhow::Result<Self> {
        Ok(Self {
            config,
            http: HttpClient::new()?,
        })
    }
}

impl ContactApiService for ContactApiServiceImpl {
    #[instrument(skip_all, fields(email = %message.email))]
    async fn send_message(&self, message: ContactMessage) -> Result<(), ContactApiError> {
        match &self.config {
            ContactApiServiceConfig::Http { endpoint } => {
                self.post_message(endpoint, &message).await
            }
            ContactApiServiceConfig::Simulated { delay } => {
                debug!(?delay, "simulating contact message delivery");
                tokio::time::sleep(*delay).await;
                Ok(())
            }
        }
    }
}

impl ContactApiServiceImpl {
    async fn post_message(
        &self,
        endpoint: &Url,
        message: &ContactMessage,
    ) -> Result<(), ContactApiError> {
        let response = self
            .http
            .post(endpoint.as_str())
            .json(message)
            .send()
            .await
            .with_context(|| format!("Failed to reach contact endpoint at {endpoint}"))?;

        let status = response.status();
        if status.is_success() {
            if let Ok(ConfirmationResponse { message }) = response.json().await {
                debug!(%status, %message, "contact endpoint accepted message");
            }
            return Ok(());
        }

        if status.is_client_error() {
            let error = match response.json::<ErrorResponse>().await {
                Ok(ErrorResponse { error }) => error,
                Err(_) => status.canonical_reason().unwrap_or_default().into(),
            };
            return Err(ContactApiError::Rejected {
                status: status.as_u16(),
                error,
            });
        }

        Err(anyhow!("Contact endpoint responded with {status}").into())
    }
}

#[derive(Deserialize)]
struct ConfirmationResponse {
    message: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}
