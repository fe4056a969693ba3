use crate::{
    errors::GatewayError,
    logging::logger::{log_error, log_info},
};
use futures::TryFutureExt;
use reqwest::{Client, Method, Response, Url};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Thin JSON client rooted at the data service base URL
/// (for example `http://localhost:5000/api`).
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, GatewayError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| GatewayError::InvalidUrl(format!("'{}': {}", base_url, e)))?;
        if parsed.cannot_be_a_base() {
            return Err(GatewayError::InvalidUrl(format!(
                "'{}' cannot be used as a base url",
                base_url
            )));
        }
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: parsed,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends `segments` to the base path, percent-encoding each one.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, GatewayError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GatewayError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, GatewayError> {
        let url = self.endpoint(segments)?;
        let response = self.send(Method::GET, url, None::<&()>).await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<T, GatewayError> {
        let url = self.endpoint(segments)?;
        let response = self.send(Method::POST, url, Some(body)).await?;
        Ok(response.json::<T>().await?)
    }

    /// Sends a request whose successful response body is not inspected.
    pub async fn execute<B: Serialize + Sync>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<(), GatewayError> {
        let url = self.endpoint(segments)?;
        self.send(method, url, body).await.map(|_| ())
    }

    async fn send<B: Serialize + Sync>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<Response, GatewayError> {
        let description = format!("{} {}", method, url);
        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request
            .send()
            .map_err(|e| {
                log_error(&format!("{} failed: {}", description, e));
                GatewayError::Transport(e.to_string())
            })
            .await?;
        let status = response.status();
        if status.is_success() {
            log_info(&format!("{} -> {}", description, status));
            return Ok(response);
        }
        let text = response.text().await.unwrap_or_default();
        let message = error_message(&text).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unexpected status code")
                .to_string()
        });
        log_error(&format!("{} -> {}: {}", description, status, message));
        Err(GatewayError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error.or(b.message))
}
