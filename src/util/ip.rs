use std::net::Ipv4Addr;

use once_cell::sync::Lazy;
use regex::Regex;

static IPV4_CANDIDATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}").expect("valid ipv4 pattern")
});

/// Headers consulted, in priority order, when X-Forwarded-For yields nothing.
const FALLBACK_HEADERS: [&str; 3] = ["client-ip", "cf-connecting-ip", "x-real-ip"];

/// Resolve the originating client address from proxy-forwarding headers.
///
/// Behaviour:
/// - If an `X-Forwarded-For` value carries any IPv4-shaped hops, the first
///   *public* (non-private-range) one wins; when every hop is private the
///   direct `remote` address is kept.
/// - Otherwise `Client-IP`, `CF-Connecting-IP` and `X-Real-IP` are tried in
///   that order; the first value that parses as an IPv4 address wins.
/// - With no usable header, `remote` is returned.
///
/// Header names are matched case-insensitively; duplicate headers beyond the
/// first occurrence are ignored.
pub fn resolve_client_ip(remote: Ipv4Addr, headers: &[(&str, &str)]) -> Ipv4Addr {
    if let Some(forwarded) = header_value(headers, "x-forwarded-for") {
        let mut saw_candidate = false;
        for m in IPV4_CANDIDATE.find_iter(forwarded) {
            saw_candidate = true;
            if let Ok(ip) = m.as_str().parse::<Ipv4Addr>() {
                if !ip.is_private() {
                    return ip;
                }
            }
        }
        // A populated forwarding chain of purely private hops keeps the
        // direct peer address rather than falling through to weaker headers.
        if saw_candidate {
            return remote;
        }
    }

    for name in FALLBACK_HEADERS {
        if let Some(value) = header_value(headers, name) {
            if let Ok(ip) = value.trim().parse::<Ipv4Addr>() {
                return ip;
            }
        }
    }

    remote
}

fn header_value<'a>(headers: &'a [(&str, &str)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| *v)
}
