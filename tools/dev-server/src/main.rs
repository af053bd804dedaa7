//! Development Server for the Retro Desktop
//!
//! Serves the `site/` directory (index page, `data/content.json` and the
//! wasm-pack output under `pkg/`) with correct MIME types and no caching of
//! the content document.
//!
//! Environment:
//! - `PORT` (default 8080)
//! - `SITE_DIR` (default `site`)

use axum::{
    body::Body,
    http::{header, HeaderValue, Request, StatusCode},
    response::Response,
    routing::get_service,
    Router,
};
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let site_dir = std::env::var("SITE_DIR").unwrap_or_else(|_| "site".to_string());

    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    let serve_dir = ServeDir::new(&site_dir).precompressed_gzip().precompressed_br();

    let app = Router::new()
        .fallback_service(get_service(serve_dir).handle_error(|_| async {
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }))
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(axum::middleware::from_fn(add_headers)),
        );

    println!("╔═══════════════════════════════════════════════════╗");
    println!("║          Retro Desktop Development Server         ║");
    println!("╠═══════════════════════════════════════════════════╣");
    println!("║  URL:  http://localhost:{:<26}║", port);
    println!("║  Site: {:<43}║", site_dir);
    println!("║  Press Ctrl+C to stop                             ║");
    println!("╚═══════════════════════════════════════════════════╝");
    println!();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

/// Fix MIME types and keep the content document uncached
async fn add_headers(request: Request<Body>, next: axum::middleware::Next) -> Response<Body> {
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    if let Some(content_type) = content_type(&path) {
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    }
    if path.starts_with("/data/") {
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    }

    response
}

fn content_type(path: &str) -> Option<&'static str> {
    let ext = path.rsplit_once('.').map(|(_, ext)| ext)?;
    match ext {
        "js" | "mjs" => Some("application/javascript; charset=utf-8"),
        "wasm" => Some("application/wasm"),
        "css" => Some("text/css; charset=utf-8"),
        "html" => Some("text/html; charset=utf-8"),
        "json" => Some("application/json; charset=utf-8"),
        "png" => Some("image/png"),
        "ttf" => Some("font/ttf"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_types() {
        assert_eq!(content_type("/pkg/retro_web_bg.wasm"), Some("application/wasm"));
        assert_eq!(content_type("/data/content.json"), Some("application/json; charset=utf-8"));
        assert_eq!(content_type("/icons/cd.png"), Some("image/png"));
        assert_eq!(content_type("/"), None);
    }
}
