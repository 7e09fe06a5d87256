//! Async REST client and state holder for cadastro records.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `{base}/cliente` | [`CadastroClient::list`] |
//! | POST   | `{base}/cliente` | [`CadastroClient::create`] |
//! | PUT    | `{base}/cliente/{id}` | [`CadastroClient::update`] |
//! | DELETE | `{base}/cliente/{id}` | [`CadastroClient::delete`] |
//!
//! Requests are sent once; there is no retry.
//!
//! # Example
//!
//! ```ignore
//! use cadastro::client::*;
//!
//! let client = CadastroClient::new(&ClientConfig::from_env()?)?;
//! let mut store = CadastroStore::new(client);
//! store.fetch_clientes().await;
//! for c in store.clientes() {
//!     println!("{} {}", c.nome, cadastro::mask_documento(&c.documento));
//! }
//! ```

mod config;
mod error;
mod store;

pub use config::{ClientConfig, ConfigError, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
pub use error::ClientError;
pub use store::CadastroStore;

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::core::{Cadastro, CadastroForm, ClienteList};
use error::api_error_message;

const RESOURCE: &str = "cliente";

/// Typed client for the `cliente` resource.
#[derive(Debug, Clone)]
pub struct CadastroClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CadastroClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch every record. Accepts both the paged and the bare-array body.
    pub async fn list(&self) -> Result<Vec<Cadastro>, ClientError> {
        let endpoint = "GET /cliente";
        let url = self.resource_url(None)?;
        let list: ClienteList = self.send_json(endpoint, self.http.get(url)).await?;
        Ok(list.into_clientes())
    }

    /// Create a record; the backend assigns the id.
    pub async fn create(&self, form: &CadastroForm) -> Result<Cadastro, ClientError> {
        let endpoint = "POST /cliente";
        let url = self.resource_url(None)?;
        self.send_json(endpoint, self.http.post(url).json(form)).await
    }

    /// Replace the record `id` with `form`.
    pub async fn update(&self, id: &str, form: &CadastroForm) -> Result<Cadastro, ClientError> {
        let endpoint = format!("PUT /cliente/{id}");
        let url = self.resource_url(Some(id))?;
        self.send_json(&endpoint, self.http.put(url).json(form)).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let endpoint = format!("DELETE /cliente/{id}");
        let url = self.resource_url(Some(id))?;
        self.send(&endpoint, self.http.delete(url)).await?;
        Ok(())
    }

    /// `{base}/cliente[/{id}]`, with the id percent-encoded as a path segment.
    fn resource_url(&self, id: Option<&str>) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                ClientError::Config(ConfigError::InvalidUrl(
                    "base_url".into(),
                    format!("'{}' cannot be a base", self.base_url),
                ))
            })?;
            segments.pop_if_empty().push(RESOURCE);
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    async fn send(
        &self,
        endpoint: &str,
        req: reqwest::RequestBuilder,
    ) -> Result<String, ClientError> {
        tracing::debug!(endpoint, "sending request");

        let resp = req.send().await.map_err(|e| ClientError::Http {
            endpoint: endpoint.into(),
            source: e,
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| ClientError::Http {
            endpoint: endpoint.into(),
            source: e,
        })?;

        if !status.is_success() {
            tracing::warn!(endpoint, status = status.as_u16(), "request rejected");
            return Err(ClientError::Api {
                endpoint: endpoint.into(),
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        Ok(body)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        req: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let body = self.send(endpoint, req).await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Deserialization {
            endpoint: endpoint.into(),
            source: e,
        })
    }
}
