//! Configuration store
//!
//! Built once from layers merged in precedence order:
//! 1. Built-in blog configuration
//! 2. Site file (b3.toml)
//! 3. CLI overrides

mod defaults;
mod error;
mod loader;
mod merge;
mod store;

pub use defaults::BuiltinDefaults;
pub use error::{ConfigError, ValidationError};
pub use loader::{ConfigOrigin, ConfigSource, LoadedConfig, DEFAULT_SITE_FILE};
pub use merge::{deep_merge, merge_layers};
pub use store::Config;
