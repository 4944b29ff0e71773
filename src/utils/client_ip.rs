//! Client IP extraction from request headers.

use axum::http::HeaderMap;
use std::net::SocketAddr;

/// Determines the client IP for click logging.
///
/// Priority: first `X-Forwarded-For` entry, then `X-Real-IP`, then the peer
/// socket address. Forwarded headers are only meaningful behind a trusted
/// reverse proxy; the value is recorded as-is for analytics, not used for
/// access control.
pub fn client_ip(headers: &HeaderMap, peer: SocketAddr) -> String {
    if let Some(xff) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        if let Some(first) = xff.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    if let Some(real_ip) = headers.get("x-real-ip").and_then(|v| v.to_str().ok()) {
        let real_ip = real_ip.trim();
        if !real_ip.is_empty() {
            return real_ip.to_string();
        }
    }

    peer.ip().to_string()
}
