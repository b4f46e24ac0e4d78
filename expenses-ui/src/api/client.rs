//! HTTP API Client
//!
//! `gloo-net` implementation of the feed transport, plus the initial page
//! the server injects into the document.

use async_trait::async_trait;
use expenses::{
    ExpensePage, Method, PageError, PageResult, RawResponse, Request, RequestError,
    RequestResult, Transport,
};
use gloo_net::http::Request as HttpRequest;
use wasm_bindgen::JsValue;

use crate::dom::js_error;

/// Global the server assigns the first page of expenses to
pub const INITIAL_DATA_GLOBAL: &str = "data";

/// Browser `fetch` transport
///
/// Relative links resolve against the page URL, as the browser does.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: &Request) -> RequestResult<RawResponse> {
        let mut builder = match request.method {
            Method::Get => HttpRequest::get(&request.url),
            Method::Post => HttpRequest::post(&request.url),
            Method::Put => HttpRequest::put(&request.url),
            Method::Delete => HttpRequest::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let outgoing = match &request.body {
            Some(body) => builder.body(body.clone()),
            None => builder.build(),
        }
        .map_err(|e| RequestError::Network(format!("Request build error: {}", e)))?;

        let response = outgoing
            .send()
            .await
            .map_err(|e| RequestError::Network(format!("Network error: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RequestError::Network(format!("Read error: {}", e)))?;

        Ok(RawResponse { status, body })
    }
}

/// Read the first page of expenses from the page's `data` global
pub fn read_initial_page(window: &web_sys::Window) -> PageResult<ExpensePage> {
    let value = js_sys::Reflect::get(window, &JsValue::from_str(INITIAL_DATA_GLOBAL))
        .map_err(js_error)?;
    if value.is_undefined() || value.is_null() {
        return Err(PageError::InvalidPayload(format!(
            "window.{} is not set",
            INITIAL_DATA_GLOBAL
        )));
    }

    let json: String = js_sys::JSON::stringify(&value).map_err(js_error)?.into();
    Ok(serde_json::from_str(&json)?)
}
