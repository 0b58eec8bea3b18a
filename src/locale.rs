//! Locale tag checks
//!
//! An empty `LOCALE` list means "use the environment default". Otherwise every
//! entry must be a well-formed BCP-47 language tag such as `en-EN` or
//! `zh-Hans-CN`.

use regex_lite::Regex;
use std::sync::OnceLock;

/// language[-script][-region](-variant)*(-extension)*, plus an optional
/// private-use tail
const BCP47_TAG: &str = concat!(
    r"^(?:[A-Za-z]{2,3}(?:-[A-Za-z]{3}){0,3}|[A-Za-z]{5,8})",
    r"(?:-[A-Za-z]{4})?",
    r"(?:-(?:[A-Za-z]{2}|[0-9]{3}))?",
    r"(?:-(?:[A-Za-z0-9]{5,8}|[0-9][A-Za-z0-9]{3}))*",
    r"(?:-[0-9A-WY-Za-wy-z](?:-[A-Za-z0-9]{2,8})+)*",
    r"(?:-[xX](?:-[A-Za-z0-9]{1,8})+)?$",
);

fn bcp47_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(BCP47_TAG).expect("BCP-47 pattern is valid"))
}

/// Check that `tag` is a well-formed BCP-47 language tag.
pub fn is_language_tag(tag: &str) -> bool {
    bcp47_re().is_match(tag)
}

/// Return the first malformed tag, if any.
pub fn first_malformed<S: AsRef<str>>(tags: &[S]) -> Option<&str> {
    tags.iter()
        .map(AsRef::as_ref)
        .find(|tag| !is_language_tag(tag))
}
