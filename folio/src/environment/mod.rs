use anyhow::Context;
use axum::http::HeaderValue;
use folio_api_rest::RestServerConfig;
use folio_config::Config;
use folio_core_contact_impl::ContactServiceImpl;
use folio_extern_impl::contact::ContactApiServiceConfig;
use types::{ContactApi, ContactForm, Notification, RestServer};
use url::Url;

pub mod types;

/// Service configurations derived from the loaded [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigProvider {
    // API
    pub rest_server_config: RestServerConfig,

    // Extern
    pub contact_api_service_config: ContactApiServiceConfig,
}

impl ConfigProvider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        // API
        let rest_server_config = RestServerConfig {
            allowed_origins: config
                .http
                .allowed_origins
                .iter()
                .map(|origin| {
                    HeaderValue::from_str(origin)
                        .with_context(|| format!("Invalid allowed origin {origin:?}"))
                })
                .collect::<anyhow::Result<_>>()?,
        };

        // Extern
        let contact_api_service_config = ContactApiServiceConfig::new(
            config.contact.endpoint.clone(),
            config.contact.simulated_delay.into(),
        );

        Ok(Self {
            rest_server_config,
            contact_api_service_config,
        })
    }

    /// Sends contact messages to `endpoint` regardless of the config file.
    pub fn with_contact_endpoint(self, endpoint: Url) -> Self {
        Self {
            contact_api_service_config: ContactApiServiceConfig::Http {
                endpoint: endpoint.into(),
            },
            ..self
        }
    }
}

/// Builds the services used by the commands.
#[derive(Debug, Clone)]
pub struct Provider {
    config: ConfigProvider,
}

impl Provider {
    pub fn new(config: ConfigProvider) -> Self {
        Self { config }
    }

    pub fn rest_server(&self) -> RestServer {
        RestServer::new(ContactServiceImpl, self.config.rest_server_config.clone())
    }

    pub fn contact_form(&self) -> anyhow::Result<ContactForm> {
        let contact_api = ContactApi::new(self.config.contact_api_service_config.clone())?;
        Ok(ContactForm::new(contact_api, Notification::default()))
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use folio_config::DEFAULT_CONFIG_PATH;
    use folio_core_contact_form_contracts::{ContactFormService, ContactFormView};

    use super::*;

    fn load(overrides: &[&str]) -> anyhow::Result<ConfigProvider> {
        let config = folio_config::load_with_overrides(&[Path::new(DEFAULT_CONFIG_PATH)], overrides)?;
        ConfigProvider::new(&config)
    }

    #[tokio::test]
    async fn provide_services() {
        let provider = Provider::new(load(&[]).unwrap());

        let _: RestServer = provider.rest_server();
        let form = provider.contact_form().unwrap();

        assert_eq!(form.view(), ContactFormView::default());
    }

    #[test]
    fn simulated_without_endpoint() {
        let config = load(&["contact.simulated_delay = \"2s\""]).unwrap();

        assert_eq!(
            config.contact_api_service_config,
            ContactApiServiceConfig::Simulated {
                delay: std::time::Duration::from_secs(2)
            }
        );
    }

    #[test]
    fn endpoint_override() {
        let endpoint: Url = "http://127.0.0.1:8000/api/contact".parse().unwrap();

        let config = load(&[]).unwrap().with_contact_endpoint(endpoint.clone());

        assert_eq!(
            config.contact_api_service_config,
            ContactApiServiceConfig::Http {
                endpoint: endpoint.into()
            }
        );
    }

    #[test]
    fn invalid_origin() {
        let result = load(&["http.allowed_origins = [\"http://localhost\\n\"]"]);

        assert!(result.is_err());
    }
}
