//! Site-wide metadata: address, author, title and pagination

use serde::{Deserialize, Serialize};

use crate::config::ValidationError;
use crate::href;

/// Global metadata describing the blog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    /// Absolute URL the site is served from
    pub website: String,

    /// Display name of the author
    pub author: String,

    /// Free-text description used in head metadata
    #[serde(default)]
    pub desc: String,

    /// Site title, also the source of social link tooltips
    pub title: String,

    /// Whether the consuming UI shows the theme switcher
    pub light_and_dark_mode: bool,

    /// Number of posts per listing page
    pub post_per_page: u32,
}

impl SiteSettings {
    /// Validate the settings
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.website.trim().is_empty() {
            return Err(ValidationError::EmptyField("SITE.website".to_string()));
        }
        if !href::is_absolute_url(&self.website) {
            return Err(ValidationError::MalformedUrl {
                field: "SITE.website".to_string(),
                value: self.website.clone(),
            });
        }
        if self.author.trim().is_empty() {
            return Err(ValidationError::EmptyField("SITE.author".to_string()));
        }
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyField("SITE.title".to_string()));
        }
        if self.post_per_page == 0 {
            return Err(ValidationError::NonPositivePostPerPage(0));
        }
        Ok(())
    }
}
