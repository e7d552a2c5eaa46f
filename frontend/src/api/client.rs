use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{api::ApiError, config};

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
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => config::await_api_base_url().await,
        }
    }

    pub(crate) async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.resolved_base_url().await, path);
        self.client.request(method, url)
    }

    /// Outgoing hook. Every request passes through here before it is built;
    /// credentials would be attached at this point.
    fn prepare(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.timeout(config::REQUEST_TIMEOUT)
    }

    /// Sends a request and classifies the outcome. Non-2xx responses become
    /// [`ApiError::Server`]; every failure is logged once and returned as is.
    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let request = match self.prepare(builder).build() {
            Ok(request) => request,
            Err(err) => return Err(observe_failure(None, ApiError::from(err))),
        };
        let target = format!("{} {}", request.method(), request.url());

        let response = match self.execute(request).await {
            Ok(response) => response,
            Err(err) => return Err(observe_failure(Some(&target), err)),
        };
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .ok()
            .and_then(|text| serde_json::from_str::<Value>(&text).ok());
        Err(observe_failure(Some(&target), ApiError::server(status, body)))
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.send(builder).await?;
        response.json::<T>().await.map_err(|err| {
            observe_failure(
                None,
                ApiError::client(format!("Failed to parse response: {}", err)),
            )
        })
    }

    pub(crate) async fn send_empty(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        self.send(builder).await.map(|_| ())
    }

    async fn execute(&self, request: reqwest::Request) -> Result<Response, ApiError> {
        #[cfg(all(test, not(target_arch = "wasm32")))]
        if let Some(responder) = mock_registry::find_mock(request.url().as_str()) {
            return responder.respond(&request)?.into_response();
        }
        self.client.execute(request).await.map_err(ApiError::from)
    }
}

/// Incoming hook for failures: logs the shape of the error without altering it.
fn observe_failure(target: Option<&str>, error: ApiError) -> ApiError {
    match &error {
        ApiError::Server { status, body } => log::error!(
            "API responded {} for {}: {}",
            status,
            target.unwrap_or("request"),
            body.as_ref().map(Value::to_string).unwrap_or_default()
        ),
        ApiError::Network { message } => log::error!(
            "No response for {}: {}",
            target.unwrap_or("request"),
            message
        ),
        ApiError::Client { message } => log::error!("API client error: {}", message),
    }
    error
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) use mock_registry::*;
