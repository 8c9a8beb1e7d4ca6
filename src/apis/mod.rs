//! Clients for the various Paysafe APIs.

use crate::{client::Environment, Error};
use reqwest::{header::HeaderMap, Method};
use reqwest_middleware::ClientWithMiddleware;
use serde::de::DeserializeOwned;
use std::fmt::{Debug, Formatter};

pub mod merchant_accounts;

/// Shared request pipeline behind every API client.
pub(crate) struct PaysafeClientInner {
    pub(crate) client: ClientWithMiddleware,
    pub(crate) environment: Environment,
    pub(crate) account_number: Option<String>,
}

impl Debug for PaysafeClientInner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaysafeClientInner")
            .field("environment", &self.environment)
            .field("account_number", &self.account_number)
            .finish_non_exhaustive()
    }
}

impl PaysafeClientInner {
    /// Account number context for account-scoped operations.
    pub(crate) fn account_number(&self) -> Result<&str, Error> {
        self.account_number
            .as_deref()
            .filter(|a| !a.is_empty())
            .ok_or(Error::MissingAccountNumber)
    }

    /// Sends the request and decodes the JSON response body.
    pub(crate) async fn process_request<T: DeserializeOwned>(
        &self,
        request: &ApiRequest,
    ) -> Result<T, Error> {
        let res = self.send(request).await?.json().await?;

        Ok(res)
    }

    /// Sends the request and returns headers and body text without decoding them.
    pub(crate) async fn process_raw_request(
        &self,
        request: &ApiRequest,
    ) -> Result<RawResponse, Error> {
        let response = self.send(request).await?;
        let headers = response.headers().clone();
        let content = response.text().await?;

        Ok(RawResponse { headers, content })
    }

    async fn send(&self, request: &ApiRequest) -> Result<reqwest::Response, Error> {
        let url = self
            .environment
            .base_url()
            .join(&request.uri)
            .map_err(|e| Error::Other(e.into()))?;

        let mut builder = self.client.request(request.method.clone(), url);
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        Ok(builder.send().await?)
    }
}

/// Descriptor of a single API call.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ApiRequest {
    pub(crate) method: Method,
    /// Path relative to the environment base URL.
    pub(crate) uri: String,
    pub(crate) body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub(crate) fn get(uri: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            uri: uri.into(),
            body: None,
        }
    }

    pub(crate) fn post(uri: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: Method::POST,
            uri: uri.into(),
            body: Some(body),
        }
    }

    pub(crate) fn put(uri: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: Method::PUT,
            uri: uri.into(),
            body: Some(body),
        }
    }
}

/// Undecoded response, for endpoints that return plain text or carry data in headers.
#[derive(Debug, Clone)]
pub(crate) struct RawResponse {
    pub(crate) headers: HeaderMap,
    pub(crate) content: String,
}
