//! The loaded configuration
//!
//! A `Config` is immutable once built. Consumers receive it by shared
//! reference (or behind an `Arc`) and read it without coordination.

use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use crate::lint::{self, LintWarning};
use crate::locale;
use crate::site::SiteSettings;
use crate::social::{self, SocialLink};

/// Site settings, locale tags and social links, as read by the renderer
///
/// Deserializing goes through the unvalidated wire shape and fails unless every
/// invariant holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct Config {
    #[serde(rename = "SITE")]
    site: SiteSettings,

    /// Empty means "use the environment default"
    #[serde(rename = "LOCALE", default)]
    locale: Vec<String>,

    #[serde(rename = "SOCIALS")]
    socials: Vec<SocialLink>,
}

/// The wire shape of [`Config`] before validation
#[derive(Debug, Deserialize)]
pub(crate) struct RawConfig {
    #[serde(rename = "SITE")]
    site: SiteSettings,

    #[serde(rename = "LOCALE", default)]
    locale: Vec<String>,

    #[serde(rename = "SOCIALS")]
    socials: Vec<SocialLink>,
}

impl TryFrom<RawConfig> for Config {
    type Error = ValidationError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Self::try_new(raw.site, raw.locale, raw.socials)
    }
}

impl Config {
    pub(crate) fn new(site: SiteSettings, locale: Vec<String>, socials: Vec<SocialLink>) -> Self {
        Self {
            site,
            locale,
            socials,
        }
    }

    /// Build a configuration, rejecting it if any invariant is violated
    pub fn try_new(
        site: SiteSettings,
        locale: Vec<String>,
        socials: Vec<SocialLink>,
    ) -> Result<Self, ValidationError> {
        let config = Self::new(site, locale, socials);
        config.validate()?;
        Ok(config)
    }

    /// Check every data invariant, stopping at the first violation
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.site.validate()?;
        if let Some(tag) = locale::first_malformed(&self.locale) {
            return Err(ValidationError::MalformedLocale(tag.to_string()));
        }
        social::validate(&self.socials)
    }

    pub fn site(&self) -> &SiteSettings {
        &self.site
    }

    /// Locale tags in preference order; empty means no override
    pub fn locales(&self) -> &[String] {
        &self.locale
    }

    /// All social links in declaration order, including inactive ones
    pub fn socials(&self) -> &[SocialLink] {
        &self.socials
    }

    /// Social links the renderer should show
    pub fn active_socials(&self) -> impl Iterator<Item = &SocialLink> {
        social::active(&self.socials)
    }

    /// Look up a social link by exact (case-sensitive) name
    pub fn social(&self, name: &str) -> Option<&SocialLink> {
        self.socials.iter().find(|link| link.name == name)
    }

    /// Non-fatal data-quality findings
    pub fn lint(&self) -> Vec<LintWarning> {
        lint::lint(&self.socials)
    }

    /// Serialize to pretty JSON in the shape the renderer imports
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
