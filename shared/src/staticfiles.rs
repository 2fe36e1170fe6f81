//! Serving of the bundled frontend assets.

use std::path::Path;

use lambda_http::{Body, Response};

use crate::http::error_response;

/// Serve `<dir>/index.html` as the landing page.
pub async fn serve_index(dir: &str) -> Result<Response<Body>, lambda_http::Error> {
    serve_file(Path::new(dir).join("index.html"), "text/html; charset=utf-8").await
}

/// Serve one asset addressed relative to the frontend directory.
///
/// Rejects traversal outside the directory; missing files answer 404.
pub async fn serve_asset(dir: &str, rel_path: &str) -> Result<Response<Body>, lambda_http::Error> {
    if !is_safe_path(rel_path) {
        return error_response(404, "Not found");
    }

    let path = Path::new(dir).join(rel_path.trim_start_matches('/'));
    let content_type = content_type_for(rel_path);
    serve_file(path, content_type).await
}

async fn serve_file(
    path: std::path::PathBuf,
    content_type: &str,
) -> Result<Response<Body>, lambda_http::Error> {
    match tokio::fs::read(&path).await {
        Ok(contents) => Ok(Response::builder()
            .status(200)
            .header("content-type", content_type)
            .body(Body::from(contents))
            .expect("Failed to build response")),
        Err(e) => {
            tracing::warn!("Failed to read static asset {}: {}", path.display(), e);
            error_response(404, "Not found")
        }
    }
}

/// A relative asset path must stay inside the frontend directory: no empty
/// path, no absolute path, no `..` segments.
fn is_safe_path(rel_path: &str) -> bool {
    let trimmed = rel_path.trim_start_matches('/');
    !trimmed.is_empty()
        && !Path::new(trimmed).is_absolute()
        && !trimmed.split(['/', '\\']).any(|segment| segment == "..")
}

/// Content type from the file extension.
pub fn content_type_for(path: &str) -> &'static str {
    let extension = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    match extension {
        "html" | "htm" => "text/html; charset=utf-8",
        "css" => "text/css",
        "js" => "text/javascript",
        "json" => "application/json",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "txt" => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}
