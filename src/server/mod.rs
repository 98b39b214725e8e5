//! HTTP adapter: serves [`CreatureApi`] over `tiny_http`
//!
//! `tiny_http` owns connections and request framing on its own threads. A
//! blocking task drains its queue into a channel, and each request is then
//! handled on its own tokio task, so a request waiting on a reachability
//! probe does not hold up unrelated requests.

use anyhow::{Context, Result, anyhow};
use log::{debug, info, warn};
use reqwest::Method;
use std::future::Future;
use std::io::Read;
use std::net::SocketAddr;
use std::sync::Arc;
use tiny_http::{Header, Request, Response, Server};
use tokio::sync::mpsc;

use crate::api::{ApiRequest, ApiResponse, CreatureApi};
use crate::config::ServiceConfig;
use crate::errors::RegistryError;

/// Requests buffered between the accept thread and the dispatcher
const REQUEST_QUEUE_DEPTH: usize = 64;

pub fn bind(config: &ServiceConfig) -> Result<Server> {
    Server::http(config.bind_addr())
        .map_err(|e| anyhow!("Failed to bind {}: {e}", config.bind_addr()))
}

pub fn local_addr(server: &Server) -> Result<SocketAddr> {
    server
        .server_addr()
        .to_ip()
        .context("Server is not listening on an IP socket")
}

/// Dispatch requests until `shutdown` resolves
///
/// In-flight requests finish on their own tasks after dispatch stops.
pub async fn serve<F>(server: Server, api: CreatureApi, shutdown: F) -> Result<()>
where
    F: Future<Output = ()>,
{
    let server = Arc::new(server);
    let (tx, mut rx) = mpsc::channel::<Request>(REQUEST_QUEUE_DEPTH);

    let acceptor = {
        let server = Arc::clone(&server);
        tokio::task::spawn_blocking(move || {
            while let Ok(request) = server.recv() {
                if tx.blocking_send(request).is_err() {
                    break;
                }
            }
        })
    };

    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            () = &mut shutdown => {
                info!("Shutdown requested; no longer accepting requests");
                break;
            }
            received = rx.recv() => match received {
                Some(request) => {
                    let api = api.clone();
                    tokio::spawn(async move {
                        if let Err(e) = handle_request(request, &api).await {
                            debug!("Request ended with error: {e:#}");
                        }
                    });
                }
                None => {
                    warn!("Request queue closed unexpectedly");
                    break;
                }
            }
        }
    }

    server.unblock();
    drop(rx);
    acceptor.await.context("Accept thread panicked")?;
    Ok(())
}

async fn handle_request(request: Request, api: &CreatureApi) -> Result<()> {
    let limit = api.config().max_body_bytes();
    let (request, decoded) = tokio::task::spawn_blocking(move || {
        let mut request = request;
        let decoded = decode_request(&mut request, limit);
        (request, decoded)
    })
    .await
    .context("Request reader panicked")?;

    let response = match decoded {
        Ok(api_request) => api.handle(api_request).await,
        Err(rejection) => rejection,
    };
    respond(request, &response).await
}

/// Translate a `tiny_http` request, reading at most `limit` body bytes
fn decode_request(request: &mut Request, limit: usize) -> Result<ApiRequest, ApiResponse> {
    let method = request.method().to_string();
    let Ok(method) = Method::from_bytes(method.as_bytes()) else {
        return Err(ApiResponse::from_error(&RegistryError::BadRequest(format!(
            "unsupported method '{method}'"
        ))));
    };
    let target = request.url().to_string();

    let declared = request.body_length();
    match read_body_limited(request.as_reader(), declared, limit) {
        Ok(Some(body)) => Ok(ApiRequest::new(method, &target).with_body(body)),
        Ok(None) => Err(ApiResponse::payload_too_large(limit)),
        Err(e) => Err(ApiResponse::from_error(&RegistryError::BadRequest(format!(
            "failed to read request body: {e}"
        )))),
    }
}

/// Read a body of at most `limit` bytes; `None` when it is larger
///
/// A declared length over the limit is refused without reading.
fn read_body_limited<R: Read>(
    reader: R,
    declared: Option<usize>,
    limit: usize,
) -> std::io::Result<Option<Vec<u8>>> {
    if declared.is_some_and(|length| length > limit) {
        return Ok(None);
    }

    let mut body = Vec::with_capacity(declared.unwrap_or(0));
    reader.take(limit as u64 + 1).read_to_end(&mut body)?;
    if body.len() > limit {
        return Ok(None);
    }
    Ok(Some(body))
}

async fn respond(request: Request, response: &ApiResponse) -> Result<()> {
    let mut reply =
        Response::from_data(response.to_bytes()).with_status_code(response.status.as_u16());
    if let Ok(header) = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]) {
        reply.add_header(header);
    }
    if let Some(allow) = response.allow {
        if let Ok(header) = Header::from_bytes(&b"Allow"[..], allow.as_bytes()) {
            reply.add_header(header);
        }
    }

    tokio::task::spawn_blocking(move || request.respond(reply))
        .await
        .context("Response writer panicked")?
        .context("Failed to write response")
}
