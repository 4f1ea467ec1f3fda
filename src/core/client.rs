use crate::config::{ClientConfig, ConfigProvider};
use crate::utils::error::{ClientError, Operation, Result};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const API_KEY_HEADER: &str = "x-api-key";

/// HTTP client for the farm API.
///
/// Each call is a single request/response exchange: no retries, no timeout,
/// no caching. Failures surface once, typed by [`Operation`].
#[derive(Debug, Clone)]
pub struct ApiClient<C: ConfigProvider = ClientConfig> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> ApiClient<C> {
    pub fn new(config: C) -> Self {
        Self::with_http_client(config, Client::new())
    }

    pub fn with_http_client(config: C, client: Client) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// 建立請求並附上 API 金鑰（有設定時）。Content-Type 由 `.json()` 負責。
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.config.api_root(), path);

        tracing::debug!(
            "📡 {} {} (api key: {})",
            method,
            url,
            if self.config.api_key().is_some() { "yes" } else { "no" }
        );

        let mut request = self.client.request(method, url);
        if let Some(key) = self.config.api_key() {
            request = request.header(API_KEY_HEADER, key);
        }
        request
    }

    pub(crate) async fn send(&self, operation: Operation, request: RequestBuilder) -> Result<Response> {
        request.send().await.map_err(|source| {
            if source.is_builder() {
                tracing::warn!("⚠️ {:?}: request could not be built: {}", operation, source);
                return ClientError::InvalidRequest { operation, source };
            }
            tracing::warn!("⚠️ {:?}: no response from server: {}", operation, source);
            ClientError::Network { operation, source }
        })
    }

    /// 非 2xx 一律視為該動作的失敗
    pub(crate) async fn read_json<T: DeserializeOwned>(
        &self,
        operation: Operation,
        request: RequestBuilder,
    ) -> Result<T> {
        let response = self.send(operation, request).await?;
        let status = response.status();
        tracing::debug!("📡 {:?}: response status {}", operation, status);

        if !status.is_success() {
            tracing::warn!("⚠️ {:?}: server answered {}", operation, status);
            return Err(ClientError::Status {
                operation,
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|source| {
            tracing::warn!("⚠️ {:?}: could not decode response body: {}", operation, source);
            ClientError::Decode { operation, source }
        })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        operation: Operation,
        path: &str,
    ) -> Result<T> {
        self.read_json(operation, self.request(Method::GET, path))
            .await
    }

    pub(crate) async fn send_json<B, T>(
        &self,
        operation: Operation,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(method, path).json(body);
        self.read_json(operation, request).await
    }
}

impl ApiClient<ClientConfig> {
    /// Resolves [`ClientConfig`] from the environment once.
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }
}
