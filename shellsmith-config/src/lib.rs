//! Configuration for the `smith` CLI using Figment
//!
//! # Configuration Files
//!
//! - Global: `~/.shellsmith/smith.{toml,yaml,yml,json}`
//! - Project: `./.shellsmith/smith.{toml,yaml,yml,json}`
//!
//! Precedence, lowest first: defaults, global files, project files,
//! `SMITH_*` environment variables.
//!
//! ```toml
//! copy = false
//! format = "table"
//!
//! [presets.chown]
//! owner = "www-data"
//! recursive = true
//! ```
//!
//! # Environment Variables
//!
//! ```bash
//! export SMITH_COPY=true                       # → copy
//! export SMITH_PRESETS__CHMOD__OWNER=6         # → presets.chmod.owner
//! ```

pub mod discovery;
pub mod error;
pub mod provider;
pub mod types;

pub use discovery::{ConfigFile, ConfigFormat, ConfigScope, FileDiscovery};
pub use error::ConfigError;
pub use provider::ConfigProvider;
pub use types::SmithConfig;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Load configuration from the standard locations and the environment.
pub fn load_config() -> ConfigResult<SmithConfig> {
    ConfigProvider::new().load()
}
