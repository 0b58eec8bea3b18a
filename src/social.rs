//! Social link catalog
//!
//! Entries are kept in declaration order, which is also the order the
//! renderer displays them in. Visibility filtering is the consumer's job;
//! [`active`] is provided as the canonical filter.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::config::ValidationError;
use crate::href;

/// Network names the renderer ships an icon for, in catalog order
pub const KNOWN_NETWORKS: &[&str] = &[
    "Github", "Facebook", "Instagram", "LinkedIn", "Mail", "Twitter", "Twitch", "YouTube",
    "WhatsApp", "Snapchat", "Pinterest", "TikTok", "CodePen", "Discord", "GitLab", "Reddit",
    "Skype", "Steam", "Telegram", "Mastodon",
];

/// One external profile or contact channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    /// Network name, also the icon lookup key
    pub name: String,

    /// Link target (`http(s)` or `mailto:`)
    pub href: String,

    /// Tooltip text, stored as a literal
    pub link_title: String,

    /// Whether the entry is rendered
    pub active: bool,
}

impl SocialLink {
    /// Build an entry with the conventional "`{title}` on `{name}`" tooltip.
    pub fn titled(name: &str, href: &str, site_title: &str, active: bool) -> Self {
        Self {
            name: name.to_string(),
            href: href.to_string(),
            link_title: format!("{} on {}", site_title, name),
            active,
        }
    }
}

/// Iterate over entries with `active == true`, keeping declaration order.
pub fn active(links: &[SocialLink]) -> impl Iterator<Item = &SocialLink> {
    links.iter().filter(|link| link.active)
}

/// Validate the catalog as a whole
pub fn validate(links: &[SocialLink]) -> Result<(), ValidationError> {
    if links.is_empty() {
        return Err(ValidationError::NoSocialLinks);
    }

    let mut seen = HashSet::new();
    for (index, link) in links.iter().enumerate() {
        if link.name.trim().is_empty() {
            return Err(ValidationError::EmptyField(format!("SOCIALS[{}].name", index)));
        }
        if !seen.insert(link.name.as_str()) {
            return Err(ValidationError::DuplicateSocialName(link.name.clone()));
        }
        if link.href.trim().is_empty() {
            return Err(ValidationError::EmptyField(format!("SOCIALS[{}].href", index)));
        }
        if !href::is_link_target(&link.href) {
            return Err(ValidationError::MalformedUrl {
                field: format!("SOCIALS[{}].href", index),
                value: link.href.clone(),
            });
        }
        if link.link_title.trim().is_empty() {
            return Err(ValidationError::EmptyField(format!(
                "SOCIALS[{}].linkTitle",
                index
            )));
        }
    }

    Ok(())
}
