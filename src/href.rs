//! URL syntax checks for the site address and social link targets
//!
//! Only structure is checked. Whether a link points at a real profile is a
//! data-quality question handled by [`crate::lint`].

use regex_lite::Regex;
use std::sync::OnceLock;

/// scheme://[userinfo@]host[:port][/path][?query][#fragment], where host is
/// a name (IDN allowed) or a bracketed IPv6 literal
const ABSOLUTE_URL: &str = concat!(
    r"^[A-Za-z][A-Za-z0-9+.-]*://",
    r"(?:[^\s/?#@]+@)?",
    r"(?:\[[0-9A-Fa-f:.]+\]|[^\s/?#:@\[\]]+)",
    r"(?::[0-9]{1,5})?(?:[/?#][^\s]*)?$",
);

/// mailto:local@domain.tld, with an optional ?query
const MAILTO: &str = r"^mailto:[^\s@/?]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)+(?:\?[^\s]*)?$";

fn absolute_url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(ABSOLUTE_URL).expect("absolute URL pattern is valid"))
}

fn mailto_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(MAILTO).expect("mailto pattern is valid"))
}

/// Check that `s` is a syntactically valid absolute URL with any scheme.
pub fn is_absolute_url(s: &str) -> bool {
    absolute_url_re().is_match(s)
}

/// Check that `s` is an `http`/`https` URL.
pub fn is_web_url(s: &str) -> bool {
    let lower = s.to_ascii_lowercase();
    (lower.starts_with("http://") || lower.starts_with("https://")) && is_absolute_url(s)
}

/// Check that `s` is a `mailto:` address.
pub fn is_mailto(s: &str) -> bool {
    mailto_re().is_match(s)
}

/// Check that `s` is usable as a social link target: a web URL or a mail address.
pub fn is_link_target(s: &str) -> bool {
    is_web_url(s) || is_mailto(s)
}
