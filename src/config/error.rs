//! Configuration errors

use std::io;

/// A violated data invariant, reported once at load time
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("'{0}' must not be empty")]
    EmptyField(String),

    #[error("'{field}' is not a valid URL: {value:?}")]
    MalformedUrl { field: String, value: String },

    #[error("SITE.postPerPage must be positive, got {0}")]
    NonPositivePostPerPage(i64),

    #[error("SOCIALS must contain at least one entry")]
    NoSocialLinks,

    #[error("duplicate social link name '{0}'")]
    DuplicateSocialName(String),

    #[error("LOCALE contains a malformed language tag: {0:?}")]
    MalformedLocale(String),
}

/// Errors raised while loading the configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] io::Error),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),
}
