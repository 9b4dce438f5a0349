use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

/// Trunk build output of the `uiform-ui` crate
#[derive(RustEmbed)]
#[folder = "ui/dist"]
struct Asset;

pub struct UIHandler;

impl UIHandler {
    pub async fn serve(uri: Uri) -> impl IntoResponse {
        let path = uri.path().trim_start_matches('/');

        let path = if path.is_empty() { "index.html" } else { path };

        match Self::asset(path) {
            Some(response) => response,
            // SPA fallback: unknown paths get the app shell
            None => Self::asset("index.html")
                .unwrap_or_else(|| (StatusCode::NOT_FOUND, "404 Not Found").into_response()),
        }
    }

    fn asset(path: &str) -> Option<Response> {
        let content = Asset::get(path)?;
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        Some(([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response())
    }
}
