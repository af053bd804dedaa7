//! Content fetching and blog posting

use std::cell::RefCell;

use retro_desktop::content::{cache_busted_url, Content, ContentCache, NewPost};
use retro_desktop::{ContentConfig, DesktopError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response, UrlSearchParams};

use crate::console::{date_now, log, warn};

/// Fetches `content.json` and keeps it for the configured TTL
pub struct ContentLoader {
    config: ContentConfig,
    cache: RefCell<ContentCache>,
}

impl ContentLoader {
    pub fn new(config: ContentConfig) -> Self {
        let cache = ContentCache::new(config.cache_ttl_ms);
        Self {
            config,
            cache: RefCell::new(cache),
        }
    }

    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    /// Cached content, a fresh fetch, or the built-in defaults on failure
    pub async fn load(&self) -> Content {
        let cached = self.cache.borrow().get(date_now()).cloned();
        if let Some(content) = cached {
            log("[content] Using cached data");
            return content;
        }

        let url = cache_busted_url(&self.config.url, date_now());
        match fetch_content(&url).await {
            Ok(content) => {
                log(&format!("[content] Fetched {} ({} albums)", self.config.url, content.album_count()));
                self.cache.borrow_mut().store(content.clone(), date_now());
                content
            }
            Err(e) => {
                warn(&format!("[content] {}; falling back to default data", e));
                Content::default()
            }
        }
    }

    /// Force the next `load` to refetch
    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
    }
}

fn js_error(e: JsValue) -> DesktopError {
    DesktopError::Content(
        e.as_string()
            .or_else(|| js_sys::JSON::stringify(&e).ok().and_then(|s| s.as_string()))
            .unwrap_or_else(|| format!("{:?}", e)),
    )
}

async fn send(request: &Request) -> Result<String, DesktopError> {
    let window = web_sys::window().ok_or_else(|| DesktopError::Content("no window".into()))?;
    let value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(js_error)?;
    let response: Response = value.dyn_into().map_err(js_error)?;
    if !response.ok() {
        return Err(DesktopError::Content(format!("HTTP error! status: {}", response.status())));
    }
    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    text.as_string()
        .ok_or_else(|| DesktopError::Content("response body is not text".into()))
}

/// GET and parse a content document
pub async fn fetch_content(url: &str) -> Result<Content, DesktopError> {
    let init = RequestInit::new();
    init.set_method("GET");
    let request = Request::new_with_str_and_init(url, &init).map_err(js_error)?;
    let body = send(&request).await?;
    Content::from_json(&body)
}

/// POST a blog post as `application/x-www-form-urlencoded`; returns the
/// endpoint's response text
pub async fn submit_post(url: &str, post: &NewPost) -> Result<String, DesktopError> {
    let params = UrlSearchParams::new().map_err(js_error)?;
    for (name, value) in post.form_fields() {
        params.append(name, value);
    }

    let headers = Headers::new().map_err(js_error)?;
    headers
        .set("Content-Type", "application/x-www-form-urlencoded")
        .map_err(js_error)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from(params.to_string()));

    let request = Request::new_with_str_and_init(url, &init).map_err(js_error)?;
    send(&request).await
}
