//! HTTP Gateway
//!
//! `RemoteGateway` over a JSON REST API:
//! `GET/POST {collection}`, `PUT/PATCH/DELETE {collection}/{id}`.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::traits::RemoteGateway;
use crate::config::GatewayConfig;
use crate::domain::{CompletionPatch, Draft, Item, ItemId};
use crate::error::{ConfigError, GatewayError, SyncResult};

#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    config: GatewayConfig,
}

impl HttpGateway {
    pub fn new(config: GatewayConfig) -> Result<Self, ConfigError> {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: GatewayConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Send the request and reject any non-2xx status
    async fn execute(
        &self,
        method: &'static str,
        url: &str,
        request: RequestBuilder,
    ) -> SyncResult<Response> {
        log::debug!("[gateway] {} {}", method, url);
        let response = request.send().await.map_err(|e| GatewayError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status {
                method,
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        method: &'static str,
        url: &str,
        request: RequestBuilder,
    ) -> SyncResult<T> {
        let response = self.execute(method, url, request).await?;
        response.json::<T>().await.map_err(|e| GatewayError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait(?Send)]
impl RemoteGateway for HttpGateway {
    async fn list(&self) -> SyncResult<Vec<Item>> {
        let url = self.config.collection_url();
        let items: Vec<Item> = self.fetch_json("GET", &url, self.client.get(&url)).await?;
        log::debug!("[gateway] received {} items", items.len());
        Ok(items)
    }

    async fn create(&self, draft: &Draft) -> SyncResult<Item> {
        let url = self.config.collection_url();
        self.fetch_json("POST", &url, self.client.post(&url).json(draft)).await
    }

    async fn replace(&self, id: ItemId, draft: &Draft) -> SyncResult<Item> {
        let url = self.config.item_url(id);
        self.fetch_json("PUT", &url, self.client.put(&url).json(draft)).await
    }

    async fn patch(&self, id: ItemId, patch: CompletionPatch) -> SyncResult<Item> {
        let url = self.config.item_url(id);
        self.fetch_json("PATCH", &url, self.client.patch(&url).json(&patch)).await
    }

    async fn delete(&self, id: ItemId) -> SyncResult<()> {
        let url = self.config.item_url(id);
        // Body (if any) is ignored
        self.execute("DELETE", &url, self.client.delete(&url)).await?;
        Ok(())
    }
}
