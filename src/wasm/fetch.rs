//! Catalog fetch through the browser's fetch API

use crate::catalog::FontCatalog;
use crate::error::{PreviewError, Result};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// GET the catalog document at `url` and parse it
pub async fn fetch_catalog(url: &str) -> Result<FontCatalog> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| PreviewError::CatalogFetch(format!("failed to create request: {:?}", e)))?;

    let window = web_sys::window().ok_or_else(|| PreviewError::Host("no window object".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| PreviewError::CatalogFetch(format!("fetch failed: {:?}", e)))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| PreviewError::CatalogFetch("response is not a Response object".into()))?;

    if !resp.ok() {
        return Err(PreviewError::CatalogFetch(format!(
            "{} returned status {}",
            url,
            resp.status()
        )));
    }

    let text_promise = resp
        .text()
        .map_err(|e| PreviewError::CatalogFetch(format!("failed to get text: {:?}", e)))?;
    let text_value = JsFuture::from(text_promise)
        .await
        .map_err(|e| PreviewError::CatalogFetch(format!("failed to read body: {:?}", e)))?;

    let text = text_value
        .as_string()
        .ok_or_else(|| PreviewError::CatalogFetch("response body is not a string".into()))?;

    FontCatalog::from_json(&text)
}
