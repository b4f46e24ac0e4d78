//! HTTP transport contract
//!
//! A [`Transport`] performs exactly one network exchange per call. What the
//! exchange *means* is decided here, once, for every platform:
//!
//! - a non-empty body must be JSON, otherwise the exchange failed
//! - an empty body (e.g. `204 No Content`) is a successful null result
//! - a status in `[200, 400)` is success
//! - anything else is an application error carrying the body's `msg`
//!
//! The browser build plugs in a `gloo-net` transport; native builds get
//! [`ReqwestTransport`].

pub mod error;
#[cfg(not(target_arch = "wasm32"))]
pub mod native;

pub use error::{RequestError, RequestResult, FAILURE_MESSAGE};
#[cfg(not(target_arch = "wasm32"))]
pub use native::ReqwestTransport;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::model::ExpensePage;

/// HTTP methods the pages issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An outgoing request, independent of the HTTP stack that sends it
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl Request {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    /// Builder method: add a header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Builder method: attach a JSON payload and the matching content type
    pub fn json<T: Serialize + ?Sized>(self, payload: &T) -> RequestResult<Self> {
        let body = serde_json::to_string(payload)?;
        let mut request = self.header("Content-Type", "application/json");
        request.body = Some(body);
        Ok(request)
    }
}

/// What came back over the wire, before interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Sends a single request
///
/// Implementations report only failures of the exchange itself (network,
/// CORS, unreadable body) as errors; any status code is a successful
/// exchange and is returned as a [`RawResponse`].
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: &Request) -> RequestResult<RawResponse>;
}

/// Interpret a completed exchange
///
/// Returns `Ok(None)` for an empty successful body.
pub fn interpret(status: u16, body: &str) -> RequestResult<Option<Value>> {
    let data = if body.is_empty() {
        None
    } else {
        Some(serde_json::from_str::<Value>(body)?)
    };

    if (200..400).contains(&status) {
        return Ok(data);
    }

    let message = data
        .as_ref()
        .and_then(|value| value.get("msg"))
        .and_then(Value::as_str)
        .filter(|msg| !msg.is_empty())
        .unwrap_or(FAILURE_MESSAGE)
        .to_string();

    Err(RequestError::Status { status, message })
}

/// Send a request and decode a successful body into `T`
pub async fn request<T, X>(transport: &X, request: &Request) -> RequestResult<Option<T>>
where
    T: DeserializeOwned,
    X: Transport + ?Sized,
{
    tracing::debug!(method = %request.method, url = %request.url, "Sending request");

    let response = transport.send(request).await?;
    match interpret(response.status, &response.body)? {
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
        None => Ok(None),
    }
}

/// Fetch one page of expenses from a pagination link
pub async fn fetch_page<X>(transport: &X, url: &str) -> RequestResult<ExpensePage>
where
    X: Transport + ?Sized,
{
    request::<ExpensePage, X>(transport, &Request::get(url))
        .await?
        .ok_or_else(|| RequestError::InvalidBody("empty body where a page was expected".to_string()))
}
