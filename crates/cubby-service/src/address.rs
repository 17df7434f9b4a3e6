use regex::Regex;
use std::sync::OnceLock;

/// Reported when a timeout message carries no recognizable address.
pub(crate) const UNSPECIFIED_SERVER: &str = "unspecified";

static HOST_PORT: OnceLock<Regex> = OnceLock::new();

/// Scrapes a `host:port` token out of a store timeout message.
///
/// Best-effort and diagnostic only: drivers embed the unreachable
/// server's address in free-form text, and the format is not part of
/// any contract. Falls back to [`UNSPECIFIED_SERVER`] when nothing
/// matches.
pub(crate) fn server_address(message: &str) -> String {
    let pattern = HOST_PORT.get_or_init(|| {
        Regex::new(r"\b[A-Za-z0-9][A-Za-z0-9_.-]*:\d{1,5}\b").expect("valid host:port regex")
    });

    pattern
        .find(message)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| UNSPECIFIED_SERVER.to_string())
}
