//! b3 blog configuration
//!
//! Site settings, locale tags and the social link catalog for the b3 blog,
//! validated once at load time and read by the site renderer.
//!
//! ```no_run
//! use b3_config::LoadedConfig;
//!
//! let config = LoadedConfig::builtin()?.into_config();
//! for link in config.active_socials() {
//!     println!("{} -> {}", link.name, link.href);
//! }
//! # Ok::<(), b3_config::ConfigError>(())
//! ```

pub mod config;
pub mod href;
pub mod lint;
pub mod locale;
pub mod logging;
pub mod site;
pub mod social;

pub use config::{BuiltinDefaults, Config, ConfigError, LoadedConfig, ValidationError};
pub use lint::LintWarning;
pub use site::SiteSettings;
pub use social::SocialLink;
