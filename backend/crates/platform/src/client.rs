//! Client identification utilities
//!
//! Resolves the client address used as the rate-limit key.

use http::HeaderMap;
use std::net::IpAddr;

/// Resolve the client IP address for a request.
///
/// `X-Forwarded-For` is consulted only when `trust_forwarded` is set,
/// because the header is attacker-controllable unless a trusted reverse
/// proxy in front of this process overwrites it. Deployments without such
/// a proxy must leave `trust_forwarded` off, otherwise rate limiting can
/// be bypassed by spoofing the header.
///
/// ## Arguments
/// * `headers` - HTTP request headers
/// * `direct_ip` - peer address of the TCP connection
/// * `trust_forwarded` - whether the proxy header may be believed
pub fn client_ip(
    headers: &HeaderMap,
    direct_ip: Option<IpAddr>,
    trust_forwarded: bool,
) -> Option<IpAddr> {
    if trust_forwarded {
        if let Some(xff) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
            if let Some(first) = xff.split(',').next() {
                if let Ok(ip) = first.trim().parse::<IpAddr>() {
                    return Some(ip);
                }
            }
        }
    }
    direct_ip
}
