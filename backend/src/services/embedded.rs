//! Serves the front-end bundle compiled into the binary.
//!
//! Unknown paths get `index.html` so the single-page app can load from any
//! URL, except under `/api/`, where a missing route is a plain 404.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir, File};
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";
const INDEX_MIME: &str = "text/html; charset=utf-8";

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    match resolve(&STATIC_DIR, req.path()) {
        Some((file, mime)) => HttpResponse::Ok()
            .content_type(mime)
            .body(file.contents().to_vec()),
        None => HttpResponse::NotFound().body("Not Found"),
    }
}

/// The bundle file for a request path and its content type.
pub fn resolve<'a>(dir: &'a Dir<'a>, request_path: &str) -> Option<(&'a File<'a>, String)> {
    let path = request_path.trim_start_matches('/');
    let path = if path.is_empty() { INDEX } else { path };

    if let Some(file) = dir.get_file(path) {
        let mime = if path == INDEX {
            INDEX_MIME.to_string()
        } else {
            from_path(path).first_or_octet_stream().to_string()
        };
        return Some((file, mime));
    }
    if path.starts_with("api/") {
        return None;
    }
    dir.get_file(INDEX).map(|index| (index, INDEX_MIME.to_string()))
}
