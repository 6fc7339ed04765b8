// ============================================================================
// Service Client
// ============================================================================
//
// Forwards a request to one upstream and proxies the response back.
// - method / path / query / body forwarded as-is
// - hop-by-hop headers dropped in both directions
// - no retry, no circuit breaking
//
// ============================================================================

use std::time::Duration;

use anyhow::{Context, Result};
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, HeaderName, Request, Response, header};
use tracing::debug;
use url::Url;

pub const MAX_BODY_BYTES: usize = 1024 * 1024;

// RFC 9110 §7.6.1 plus the length/host headers reqwest and hyper recompute.
const HOP_BY_HOP: [HeaderName; 10] = [
    header::CONNECTION,
    HeaderName::from_static("keep-alive"),
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
    header::HOST,
    header::CONTENT_LENGTH,
];

#[derive(Debug, Clone)]
pub struct ServiceClient {
    client: reqwest::Client,
}

impl ServiceClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .tcp_keepalive(Duration::from_secs(30))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .context("failed to build upstream http client")?;

        Ok(Self { client })
    }

    /// Forward `request` to `base` and return the upstream response unchanged.
    pub async fn forward(&self, base: &Url, request: Request<Body>) -> Result<Response<Body>> {
        let target = target_url(base, request.uri().path(), request.uri().query());

        let (parts, body) = request.into_parts();
        let body_bytes = to_bytes(body, MAX_BODY_BYTES)
            .await
            .context("failed to read request body")?;

        debug!(method = %parts.method, target = %target, "forwarding");

        let mut upstream = self
            .client
            .request(parts.method, target)
            .headers(end_to_end(&parts.headers));
        if !body_bytes.is_empty() {
            upstream = upstream.body(body_bytes);
        }

        let response = upstream.send().await?;

        let status = response.status();
        let headers = end_to_end(response.headers());
        let bytes = response.bytes().await?;

        let mut out = Response::builder()
            .status(status)
            .body(Body::from(bytes))
            .context("failed to build response")?;
        *out.headers_mut() = headers;

        Ok(out)
    }
}

fn end_to_end(headers: &HeaderMap) -> HeaderMap {
    let mut out = headers.clone();
    for name in HOP_BY_HOP.iter() {
        out.remove(name);
    }
    out
}

pub fn target_url(base: &Url, path: &str, query: Option<&str>) -> Url {
    let mut url = base.clone();
    // keep any base path (e.g. http://host/prefix) in front of the request path
    let joined = format!("{}{}", base.path().trim_end_matches('/'), path);
    url.set_path(&joined);
    url.set_query(query);
    url
}
