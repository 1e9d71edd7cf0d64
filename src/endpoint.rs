//! Relay URL normalization.

/// Extracts the bare hostname from a relay URL.
///
/// Strips a leading `ws://` or `wss://` scheme (case-insensitive), then
/// truncates at the first `/` (path) and first `:` (port), in that order.
/// The result may be empty; callers must treat an empty hostname as
/// unresolvable rather than an error.
pub fn normalize(raw: &str) -> &str {
    let rest = strip_scheme(raw);
    let rest = rest.split('/').next().unwrap_or("");
    rest.split(':').next().unwrap_or("")
}

fn strip_scheme(raw: &str) -> &str {
    for scheme in ["wss://", "ws://"] {
        if raw.len() >= scheme.len() && raw[..scheme.len()].eq_ignore_ascii_case(scheme) {
            return &raw[scheme.len()..];
        }
    }
    raw
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn test_strips_ws_and_wss_schemes() {
        assert_eq!(normalize("wss://relay.example.com"), "relay.example.com");
        assert_eq!(normalize("ws://relay.example.com"), "relay.example.com");
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        assert_eq!(normalize("WSS://relay.example.com"), "relay.example.com");
        assert_eq!(normalize("Ws://relay.example.com"), "relay.example.com");
    }

    #[test]
    fn test_strips_path_and_port() {
        assert_eq!(normalize("wss://relay.example.com/nostr"), "relay.example.com");
        assert_eq!(normalize("wss://relay.example.com:4443"), "relay.example.com");
        assert_eq!(
            normalize("wss://relay.example.com:4443/sub/path"),
            "relay.example.com"
        );
    }

    #[test]
    fn test_bare_hostname_passes_through() {
        assert_eq!(normalize("relay.example.com"), "relay.example.com");
    }

    #[test]
    fn test_degenerate_inputs_yield_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("wss://"), "");
        assert_eq!(normalize("wss:///path"), "");
        assert_eq!(normalize("wss://:4443"), "");
    }
}
