use axum::{
    extract::Request,
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

/// Emit one `access_log` line per request
pub async fn access_log_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let remote_addr = client_address(request.headers());
    let user_agent = header_or_dash(request.headers(), header::USER_AGENT.as_str());

    let response = next.run(request).await;

    let status = response.status();
    let content_length = header_or_dash(response.headers(), header::CONTENT_LENGTH.as_str());
    let latency_ms = start.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::warn!(
            target: "access_log",
            %method, %uri, status = status.as_u16(), latency_ms, %remote_addr,
            "{} {} {} {}ms", method, uri, status.as_u16(), latency_ms
        );
    } else {
        tracing::info!(
            target: "access_log",
            %method, %uri, status = status.as_u16(), latency_ms, %remote_addr,
            %content_length, %user_agent,
            "{} {} {} {}ms", method, uri, status.as_u16(), latency_ms
        );
    }

    response
}

/// Forwarded client address, falling back to `-`
fn client_address(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|v| v.split(',').next())
        .or_else(|| headers.get("x-real-ip").and_then(|h| h.to_str().ok()))
        .map(str::trim)
        .unwrap_or("-")
        .to_string()
}

fn header_or_dash(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("-")
        .to_string()
}
