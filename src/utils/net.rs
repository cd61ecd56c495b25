use std::net::SocketAddr;

use axum::http::HeaderMap;

// same header precedence as the rate limiter's key extractor
pub fn client_ip(headers: &HeaderMap, peer: SocketAddr) -> String {
    forwarded_ip(headers).unwrap_or_else(|| peer.ip().to_string())
}

fn forwarded_ip(headers: &HeaderMap) -> Option<String> {
    if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        // first entry is the originating client
        if let Some(first) = forwarded
            .split(',')
            .next()
            .map(str::trim)
            .filter(|ip| !ip.is_empty())
        {
            return Some(first.to_string());
        }
    }

    headers
        .get("x-real-ip")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn peer() -> SocketAddr {
        "192.0.2.1:4242".parse().unwrap()
    }

    #[test]
    fn test_forwarded_for_takes_first_entry() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.9, 10.0.0.1"),
        );
        assert_eq!(client_ip(&headers, peer()), "203.0.113.9");
    }

    #[test]
    fn test_real_ip_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("203.0.113.7"));
        assert_eq!(client_ip(&headers, peer()), "203.0.113.7");
    }

    #[test]
    fn test_peer_address_fallback() {
        let headers = HeaderMap::new();
        assert_eq!(client_ip(&headers, peer()), "192.0.2.1");
    }
}
