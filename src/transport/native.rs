//! Native HTTP transport backed by `reqwest`

use async_trait::async_trait;
use reqwest::{Client, Url};

use super::{Method, RawResponse, Request, RequestError, RequestResult, Transport};

/// `reqwest`-backed transport for running a feed outside the browser
///
/// Pagination links may be relative (`/expenses?page=2`); they are resolved
/// against `base` when one is configured. No timeout is applied, matching
/// the browser behaviour.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    base: Option<Url>,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base: None,
        }
    }

    /// Create a transport that resolves relative links against `base`
    pub fn with_base(base: &str) -> RequestResult<Self> {
        let base =
            Url::parse(base).map_err(|e| RequestError::InvalidUrl(format!("{base:?}: {e}")))?;
        Ok(Self {
            client: Client::new(),
            base: Some(base),
        })
    }

    fn resolve(&self, url: &str) -> RequestResult<Url> {
        let resolved = match &self.base {
            Some(base) => base.join(url),
            None => Url::parse(url),
        };
        resolved.map_err(|e| RequestError::InvalidUrl(format!("{url:?}: {e}")))
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &Request) -> RequestResult<RawResponse> {
        let url = self.resolve(&request.url)?;

        let mut builder = self.client.request(to_reqwest(request.method), url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}
