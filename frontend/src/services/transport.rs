//! Request/response seam between the service clients and the network.
//!
//! Service clients describe a call as an `ApiRequest` and hand it to a
//! `Transport`. In the browser that is `HttpTransport` over `gloo-net`; tests
//! substitute a recording fake. Responses come back as status + raw body and are
//! decoded by the caller, so status handling stays in one place.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::ServiceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Path below the API base URL, starting with `/`.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    pub bearer_token: Option<String>,
}

impl ApiRequest {
    fn new(method: HttpMethod, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            query: Vec::new(),
            body: None,
            bearer_token: None,
        }
    }

    pub fn get(path: &str) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn delete(path: &str) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    pub fn post<B: Serialize>(path: &str, body: &B) -> Result<Self, ServiceError> {
        let body = serde_json::to_value(body).map_err(|e| ServiceError::Serialize(e.to_string()))?;
        let mut request = Self::new(HttpMethod::Post, path);
        request.body = Some(body);
        Ok(request)
    }

    pub fn with_query(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query = pairs;
        self
    }

    pub fn with_bearer(mut self, token: Option<&str>) -> Self {
        self.bearer_token = token.map(str::to_string);
        self
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turns a non-2xx response into `ServiceError::Status`.
    pub fn error_for_status(self) -> Result<Self, ServiceError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ServiceError::Status {
                status: self.status,
                body: self.body,
            })
        }
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ServiceError> {
        serde_json::from_str(&self.body).map_err(|e| ServiceError::Decode(e.to_string()))
    }
}

#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ServiceError>;
}

impl<T: Transport> Transport for &T {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ServiceError> {
        (**self).send(request).await
    }
}

/// `Transport` over the browser `fetch` API.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpTransport {
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ServiceError> {
        let url = self.url_for(&request.path);
        let mut builder = match request.method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Delete => Request::delete(&url),
        };
        if !request.query.is_empty() {
            builder = builder.query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        if let Some(token) = &request.bearer_token {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let response = match &request.body {
            Some(body) => {
                builder
                    .json(body)
                    .map_err(|e| ServiceError::Serialize(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        }
        .map_err(|e| ServiceError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ServiceError::Decode(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let transport = HttpTransport::new("https://kaart.example.ee/");
        assert_eq!(
            transport.url_for("/api/locations"),
            "https://kaart.example.ee/api/locations"
        );
    }

    #[test]
    fn non_success_status_becomes_error() {
        let response = ApiResponse {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(
            response.error_for_status(),
            Err(ServiceError::Status {
                status: 500,
                body: "boom".to_string()
            })
        );
    }
}
