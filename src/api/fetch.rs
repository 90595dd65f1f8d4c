//! Fetch Helpers
//!
//! Thin wrappers over `window.fetch` shared by both endpoints.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, Response};

use crate::error::ApiError;
use crate::models::ErrorBody;

/// Best-effort human readable text for a thrown JS value
pub(crate) fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Send a request and wait for the response headers.
/// Any HTTP status resolves to `Ok`; only transport failures are errors.
pub(crate) async fn send(method: &str, url: &str, json_body: Option<String>) -> Result<Response, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_credentials(RequestCredentials::SameOrigin);
    if let Some(body) = &json_body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| ApiError::Browser(js_error_message(&e)))?;
    let headers = request.headers();
    headers
        .set("Accept", "application/json")
        .map_err(|e| ApiError::Browser(js_error_message(&e)))?;
    if json_body.is_some() {
        headers
            .set("Content-Type", "application/json")
            .map_err(|e| ApiError::Browser(js_error_message(&e)))?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Browser("no window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Transport(js_error_message(&e)))?;
    resp_value
        .dyn_into::<Response>()
        .map_err(|e| ApiError::Browser(js_error_message(&e)))
}

/// Parse the body as JSON into a JS value
pub(crate) async fn read_json(resp: &Response) -> Result<JsValue, ApiError> {
    let promise = resp.json().map_err(|e| ApiError::Decode(js_error_message(&e)))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| ApiError::Decode(js_error_message(&e)))
}

/// `{ "erro": ... }` of a failed response, if the body is JSON at all
pub(crate) async fn read_error_body(resp: &Response) -> Option<ErrorBody> {
    let promise = resp.text().ok()?;
    let text = JsFuture::from(promise).await.ok()?.as_string()?;
    parse_error_body(&text)
}

pub(crate) fn parse_error_body(text: &str) -> Option<ErrorBody> {
    serde_json::from_str(text).ok()
}
