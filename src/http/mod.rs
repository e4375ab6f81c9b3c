use crate::config::Config;
use crate::error::Error;
use crate::request::redacted;
use crate::types::{ApiResponse, ErrorPayload, RateLimit};
use log::debug;
use reqwest::header::HeaderMap;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use url::Url;

pub const RATE_LIMIT_LIMIT: &str = "x-rate-limit-limit";
pub const RATE_LIMIT_REMAINING: &str = "x-rate-limit-remaining";
pub const RATE_LIMIT_RESET: &str = "x-rate-reset";

/// Default transport used when the caller does not inject one.
pub fn build_http_client(cfg: &Config) -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(cfg.user_agent.as_str())
        .timeout(Duration::from_secs(cfg.timeout_secs))
        .use_rustls_tls()
        .build()
}

pub fn extract_rate_limit(headers: &HeaderMap) -> RateLimit {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    };
    RateLimit {
        limit: header(RATE_LIMIT_LIMIT),
        remaining: header(RATE_LIMIT_REMAINING),
        reset: header(RATE_LIMIT_RESET),
    }
}

/// Turns a non-200 body into an error, keeping the status code.
pub fn classify_error(status: StatusCode, body: &[u8]) -> Error {
    match serde_json::from_slice::<ErrorPayload>(body) {
        Ok(payload) => Error::Service {
            status: status.as_u16(),
            message: payload.error,
        },
        Err(e) => Error::Decode(e),
    }
}

/// Issues exactly one GET and returns the raw body of a 200 response.
/// Rate-limit headers are captured for every response, whatever the status.
pub async fn get(client: &Client, url: Url) -> ApiResponse<Vec<u8>> {
    debug!("GET {}", redacted(&url));
    let res = match client.get(url).send().await {
        Ok(r) => r,
        Err(e) => return ApiResponse::err(Error::Transport(e), None),
    };

    let status = res.status();
    let rate = extract_rate_limit(res.headers());
    debug!(
        "status={} rate_limit={}/{} reset={}",
        status, rate.remaining, rate.limit, rate.reset
    );

    let (body, read_err) = read_body(res).await;
    if status != StatusCode::OK {
        // A truncated error body is still decoded; it fails as a decode error.
        return ApiResponse::err(classify_error(status, &body), Some(rate));
    }
    match read_err {
        Some(e) => ApiResponse::err(Error::Read(e), Some(rate)),
        None => ApiResponse::ok(body, rate),
    }
}

// Collects the body chunk by chunk so a failed read still yields what arrived.
async fn read_body(mut res: Response) -> (Vec<u8>, Option<reqwest::Error>) {
    let mut body = Vec::new();
    loop {
        match res.chunk().await {
            Ok(Some(chunk)) => body.extend_from_slice(&chunk),
            Ok(None) => return (body, None),
            Err(e) => return (body, Some(e)),
        }
    }
}
