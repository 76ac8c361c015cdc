//! HTTP boundary: a single-route hyper server around the assembler.
//!
//! Every request loads the reference data fresh, so edits to the files on
//! disk show up on the next request without a restart.

use crate::core::assembler::CountryAssembler;
use crate::core::store::ReferenceStore;
use crate::core::{CountryResult, IdGenerator, Storage};
use crate::utils::error::Result;
use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Everything a request needs: the store to load from and the assembler to
/// join with. Shared read-only across connections.
pub struct PreviewContext<S: Storage, G: IdGenerator> {
    store: ReferenceStore<S>,
    assembler: CountryAssembler<G>,
}

impl<S: Storage, G: IdGenerator> PreviewContext<S, G> {
    pub fn new(storage: S, ids: G) -> Self {
        Self {
            store: ReferenceStore::new(storage),
            assembler: CountryAssembler::new(ids),
        }
    }

    /// Loads fresh reference data and assembles the country list. A load
    /// failure aborts; an empty list is a valid result.
    pub async fn preview(&self) -> Result<Vec<CountryResult>> {
        let data = self.store.load().await?;
        Ok(self.assembler.assemble(&data))
    }
}

/// Accept loop. Connections are served concurrently; a failed accept or a
/// broken connection is logged and never takes the server down.
pub async fn serve<S, G>(listener: TcpListener, ctx: Arc<PreviewContext<S, G>>) -> Result<()>
where
    S: Storage + 'static,
    G: IdGenerator + 'static,
{
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                tracing::debug!("Accepted connection from {}", peer_addr);
                let ctx = Arc::clone(&ctx);
                tokio::spawn(async move {
                    let io = TokioIo::new(stream);
                    let service = service_fn(move |req| {
                        let ctx = Arc::clone(&ctx);
                        async move { handle_request(req, ctx).await }
                    });
                    if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                        tracing::warn!("Connection error: {}", e);
                    }
                });
            }
            Err(e) => {
                tracing::error!("Failed to accept connection: {}", e);
            }
        }
    }
}

async fn handle_request<S: Storage, G: IdGenerator>(
    req: Request<Incoming>,
    ctx: Arc<PreviewContext<S, G>>,
) -> std::result::Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let path = req.uri().path();
    tracing::debug!("{} {}", method, path);

    if *method != Method::GET {
        tracing::warn!("Method not allowed: {}", method);
        return Ok(message_response(
            StatusCode::NOT_FOUND,
            "Can't find method requested",
        ));
    }

    if is_preview_path(path) {
        return Ok(preview_response(&ctx).await);
    }

    Ok(message_response(
        StatusCode::NOT_FOUND,
        "Can't find path requested",
    ))
}

/// The route tolerates trailing slashes ("/preview", "/preview//", ...).
fn is_preview_path(path: &str) -> bool {
    path.trim_end_matches('/') == "/preview"
}

async fn preview_response<S: Storage, G: IdGenerator>(
    ctx: &PreviewContext<S, G>,
) -> Response<Full<Bytes>> {
    match ctx.preview().await {
        Ok(countries) => {
            tracing::info!("Assembled {} countries", countries.len());
            json_response(StatusCode::OK, &countries)
        }
        Err(e) => {
            tracing::error!("Assembly failed: {}", e);
            message_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string(body) {
        Ok(j) => j,
        Err(e) => {
            tracing::error!("Failed to serialize response: {}", e);
            return message_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to serialize response",
            );
        }
    };

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            tracing::error!("Failed to build response: {}", e);
            Response::new(Full::new(Bytes::new()))
        })
}

fn message_response(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    let body = serde_json::json!({ "message": message }).to_string();
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            tracing::error!("Failed to build response: {}", e);
            Response::new(Full::new(Bytes::new()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_path_matching() {
        assert!(is_preview_path("/preview"));
        assert!(is_preview_path("/preview/"));
        assert!(is_preview_path("/preview///"));
        assert!(!is_preview_path("/"));
        assert!(!is_preview_path("/previews"));
        assert!(!is_preview_path("/preview/extra"));
    }

    #[test]
    fn test_message_response_shape() {
        let resp = message_response(StatusCode::NOT_FOUND, "Can't find path requested");
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "application/json"
        );
    }
}
