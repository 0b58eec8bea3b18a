//! Built-in blog configuration (layer 1)
//!
//! The values the blog ships with. Every other layer is merged on top.

use serde_json::{json, Value};

use super::store::Config;
use crate::site::SiteSettings;
use crate::social::{SocialLink, KNOWN_NETWORKS};

/// Profile every network without a real account points at
const PLACEHOLDER_HREF: &str = "https://yuzhou.github.io/b3";

/// Built-in configuration values
pub struct BuiltinDefaults;

impl BuiltinDefaults {
    /// Site metadata
    pub fn site() -> SiteSettings {
        SiteSettings {
            website: "https://yuzhouu.github.io/b3/".to_string(),
            author: "Zhou Yu".to_string(),
            desc: "my personal blog, about javascript typescript.".to_string(),
            title: "Ordinary Days".to_string(),
            light_and_dark_mode: true,
            post_per_page: 5,
        }
    }

    /// Locale tags; set to an empty list to use the environment default
    pub fn locale() -> Vec<String> {
        vec!["en-EN".to_string()]
    }

    /// Social links, with tooltips derived from `site_title`
    pub fn socials(site_title: &str) -> Vec<SocialLink> {
        KNOWN_NETWORKS
            .iter()
            .map(|&name| match name {
                "Github" => SocialLink::titled(name, "https://github.com/yuzhouu/b3", site_title, true),
                "Mail" => SocialLink {
                    name: name.to_string(),
                    href: "mailto:yuzhou.ini@outlook.com".to_string(),
                    link_title: format!("Send an email to {}", site_title),
                    active: true,
                },
                _ => SocialLink::titled(name, PLACEHOLDER_HREF, site_title, false),
            })
            .collect()
    }

    /// The complete built-in configuration
    pub fn config() -> Config {
        let site = Self::site();
        let socials = Self::socials(&site.title);
        Config::new(site, Self::locale(), socials)
    }

    /// Convert to JSON Value for merging
    pub fn to_value() -> Value {
        let site = Self::site();
        let socials: Vec<Value> = Self::socials(&site.title)
            .into_iter()
            .map(|link| {
                json!({
                    "name": link.name,
                    "href": link.href,
                    "linkTitle": link.link_title,
                    "active": link.active
                })
            })
            .collect();

        json!({
            "SITE": {
                "website": site.website,
                "author": site.author,
                "desc": site.desc,
                "title": site.title,
                "lightAndDarkMode": site.light_and_dark_mode,
                "postPerPage": site.post_per_page
            },
            "LOCALE": Self::locale(),
            "SOCIALS": socials
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_defaults() {
        let site = BuiltinDefaults::site();
        assert_eq!(site.title, "Ordinary Days");
        assert_eq!(site.author, "Zhou Yu");
        assert_eq!(site.post_per_page, 5);
        assert!(site.light_and_dark_mode);
    }

    #[test]
    fn test_social_catalog() {
        let socials = BuiltinDefaults::socials("Ordinary Days");
        assert_eq!(socials.len(), 20);
        assert_eq!(socials[0].name, "Github");
        assert_eq!(socials[19].name, "Mastodon");

        let active: Vec<&str> = socials.iter().filter(|l| l.active).map(|l| l.name.as_str()).collect();
        assert_eq!(active, vec!["Github", "Mail"]);
    }

    #[test]
    fn test_github_title_has_no_leading_space() {
        let socials = BuiltinDefaults::socials("Ordinary Days");
        assert_eq!(socials[0].link_title, "Ordinary Days on Github");
    }

    #[test]
    fn test_mail_title() {
        let socials = BuiltinDefaults::socials("Ordinary Days");
        let mail = socials.iter().find(|l| l.name == "Mail").unwrap();
        assert_eq!(mail.link_title, "Send an email to Ordinary Days");
        assert_eq!(mail.href, "mailto:yuzhou.ini@outlook.com");
    }

    #[test]
    fn test_to_value_matches_config() {
        let value = BuiltinDefaults::to_value();
        let parsed: Config = serde_json::from_value(value.clone()).unwrap();

        assert_eq!(parsed, BuiltinDefaults::config());
        assert_eq!(value["SITE"]["postPerPage"], 5);
        assert_eq!(value["LOCALE"][0], "en-EN");
        assert_eq!(value["SOCIALS"][1]["linkTitle"], "Ordinary Days on Facebook");
    }

    #[test]
    fn test_builtin_config_is_valid() {
        assert!(BuiltinDefaults::config().validate().is_ok());
    }
}
