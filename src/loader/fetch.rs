//! Browser fetch of the puzzle document
//!
//! One POST, no body, no retry. The response text is handed to
//! `decode_document`, so everything past the network lives in pure code.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::config::LoaderConfig;
use super::decode::decode_document;
use super::errors::LoadFailure;
use crate::models::PuzzleDocument;

/// Request a freshly generated puzzle from the configured service
pub async fn fetch_document(config: &LoaderConfig) -> Result<PuzzleDocument, LoadFailure> {
    let window = web_sys::window()
        .ok_or_else(|| LoadFailure::Environment("no global window".to_string()))?;

    let category: String = js_sys::encode_uri_component(&config.category).into();
    let url = config.request_url(&category);
    log::debug!("Requesting crossword from {}", url);

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(&url, &init).map_err(network_failure)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(network_failure)?;

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network_failure)?;
    let response: Response = response_value
        .dyn_into()
        .map_err(|value| LoadFailure::Environment(describe_js(&value)))?;

    ensure_success(response.ok(), response.status(), response.status_text())?;

    let text = JsFuture::from(response.text().map_err(network_failure)?)
        .await
        .map_err(network_failure)?;
    let body = text
        .as_string()
        .ok_or_else(|| LoadFailure::Malformed("response body is not text".to_string()))?;

    decode_document(&body, config)
}

/// Map a non-2xx response to `LoadFailure::Status`
fn ensure_success(ok: bool, status: u16, status_text: String) -> Result<(), LoadFailure> {
    if ok {
        Ok(())
    } else {
        Err(LoadFailure::Status { status, status_text })
    }
}

fn network_failure(value: JsValue) -> LoadFailure {
    LoadFailure::Network(describe_js(&value))
}

/// Best-effort text for a thrown JS value
fn describe_js(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(error) => error.message().into(),
        None => format!("{:?}", value),
    }
}
