use rain_core::{join_url, AssetSource, LoadError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Loads resource urls with `window.fetch`, relative to `root`.
pub struct FetchSource {
    root: String,
}

impl FetchSource {
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }
}

fn fetch_error(url: &str, e: &JsValue) -> LoadError {
    LoadError::Fetch {
        url: url.to_string(),
        reason: format!("{:?}", e),
    }
}

impl AssetSource for FetchSource {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, LoadError> {
        let full = join_url(&self.root, url);
        let window = web::window().ok_or_else(|| LoadError::Fetch {
            url: full.clone(),
            reason: "no window".to_string(),
        })?;
        let resp = JsFuture::from(window.fetch_with_str(&full))
            .await
            .map_err(|e| fetch_error(&full, &e))?;
        let resp: web::Response = resp.dyn_into().map_err(|e| fetch_error(&full, &e))?;
        if resp.status() == 404 {
            return Err(LoadError::NotFound { url: full });
        }
        if !resp.ok() {
            return Err(LoadError::Fetch {
                reason: format!("HTTP {}", resp.status()),
                url: full,
            });
        }
        let body = resp.array_buffer().map_err(|e| fetch_error(&full, &e))?;
        let buf = JsFuture::from(body)
            .await
            .map_err(|e| fetch_error(&full, &e))?;
        Ok(js_sys::Uint8Array::new(&buf).to_vec())
    }
}
