use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, AbortSignal, Request, RequestInit, Response};

use crate::error::{FetchError, Result};

fn describe(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{err:?}"))
}

fn network_error(err: JsValue, signal: Option<&AbortSignal>) -> FetchError {
    if signal.is_some_and(|s| s.aborted()) {
        FetchError::Aborted
    } else {
        FetchError::Network(describe(&err))
    }
}

async fn send(url: &str, signal: Option<&AbortSignal>) -> Result<Response> {
    let window = web_sys::window().ok_or_else(|| FetchError::Network("no window".into()))?;
    let init = RequestInit::new();
    init.set_signal(signal);
    let request = Request::new_with_str_and_init(url, &init)
        .map_err(|err| FetchError::Network(describe(&err)))?;

    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| network_error(err, signal))?;
    let response: Response = value
        .dyn_into()
        .map_err(|_| FetchError::Network(format!("{url}: fetch did not return a Response")))?;

    if !response.ok() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }
    Ok(response)
}

async fn read_text(url: &str, response: &Response, signal: Option<&AbortSignal>) -> Result<String> {
    let promise = response
        .text()
        .map_err(|err| FetchError::Network(describe(&err)))?;
    let text = JsFuture::from(promise)
        .await
        .map_err(|err| network_error(err, signal))?;
    text.as_string().ok_or_else(|| FetchError::Decode {
        url: url.to_string(),
        message: "body is not text".to_string(),
    })
}

// A 200 `text/html` answer is a host's index.html fallback, not the file.
pub async fn fetch_document(url: &str, signal: Option<&AbortSignal>) -> Result<String> {
    let response = send(url, signal).await?;
    let content_type = response
        .headers()
        .get("content-type")
        .ok()
        .flatten()
        .unwrap_or_default();
    if content_type.contains("text/html") {
        return Err(FetchError::UnexpectedHtml {
            url: url.to_string(),
        });
    }
    read_text(url, &response, signal).await
}

pub async fn fetch_json<T: DeserializeOwned>(url: &str, signal: Option<&AbortSignal>) -> Result<T> {
    let response = send(url, signal).await?;
    let text = read_text(url, &response, signal).await?;
    serde_json::from_str(&text).map_err(|err| FetchError::Decode {
        url: url.to_string(),
        message: err.to_string(),
    })
}

#[derive(Default)]
pub struct InFlight {
    controller: Option<AbortController>,
}

impl InFlight {
    pub fn restart(&mut self) -> Option<AbortSignal> {
        if let Some(previous) = self.controller.take() {
            previous.abort();
        }
        let controller = AbortController::new().ok()?;
        let signal = controller.signal();
        self.controller = Some(controller);
        Some(signal)
    }
}
