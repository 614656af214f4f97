//! Typed requests and the `window.fetch` transport.

use crate::error::RefreshError;
use ink_stats::{mode::RefreshRequest, stats::YtdStats, JSON_CONTENT_TYPE, REFRESH_PATH, STATS_PATH};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// A JSON POST to a same-origin path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRequest {
    pub path: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl PostRequest {
    pub const METHOD: &'static str = "POST";

    /// `POST /api/v1/refresh` with `{"mode":"dark"}`.
    pub fn refresh() -> Result<Self, RefreshError> {
        Ok(PostRequest {
            path: REFRESH_PATH,
            content_type: JSON_CONTENT_TYPE,
            body: RefreshRequest::dark().to_json()?,
        })
    }
}

/// Sends a [`PostRequest`] and reports the HTTP status it got back.
///
/// Any status counts as a settled request; only transport failures are errors.
#[allow(async_fn_in_trait)]
pub trait RefreshTransport {
    async fn send(&self, request: PostRequest) -> Result<u16, RefreshError>;
}

/// Transport backed by the browser's `fetch`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FetchTransport;

impl RefreshTransport for FetchTransport {
    async fn send(&self, request: PostRequest) -> Result<u16, RefreshError> {
        let headers = Headers::new()?;
        headers.set("Content-Type", request.content_type)?;

        let init = RequestInit::new();
        init.set_method(PostRequest::METHOD);
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&request.body));

        let request = Request::new_with_str_and_init(request.path, &init)?;
        let response = fetch(&request).await?;
        Ok(response.status())
    }
}

/// `GET /api/v1/stats`.
pub async fn fetch_stats() -> Result<YtdStats, RefreshError> {
    let init = RequestInit::new();
    init.set_method("GET");
    let request = Request::new_with_str_and_init(STATS_PATH, &init)?;

    let response = fetch(&request).await?;
    if !response.ok() {
        return Err(RefreshError::Status(response.status()));
    }
    let text = JsFuture::from(response.text()?).await?;
    let body = text.as_string().unwrap_or_default();
    Ok(serde_json::from_str(&body)?)
}

async fn fetch(request: &Request) -> Result<Response, RefreshError> {
    let window = web_sys::window().ok_or(RefreshError::NoWindow)?;
    let value = JsFuture::from(window.fetch_with_request(request)).await?;
    Ok(value.dyn_into::<Response>()?)
}
