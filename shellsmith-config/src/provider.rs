//! Configuration provider using Figment

use crate::{
    discovery::{ConfigFile, ConfigFormat, FileDiscovery},
    error::ConfigError,
    types::SmithConfig,
    ConfigResult,
};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use tracing::{debug, trace};

/// Prefix for configuration environment variables
pub const ENV_PREFIX: &str = "SMITH_";

const FORMATS: [&str; 3] = ["table", "json", "yaml"];

/// Loads [`SmithConfig`] from every source in precedence order.
///
/// Nothing is cached; each call reads the files again.
#[derive(Debug, Clone, Default)]
pub struct ConfigProvider {
    discovery: FileDiscovery,
}

impl ConfigProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific discovery (fixed directories) instead of the default.
    pub fn with_discovery(discovery: FileDiscovery) -> Self {
        Self { discovery }
    }

    /// Load and validate the merged configuration.
    pub fn load(&self) -> ConfigResult<SmithConfig> {
        let config: SmithConfig = self.build_figment().extract()?;
        if let Some(format) = &config.format {
            if !FORMATS.contains(&format.as_str()) {
                return Err(ConfigError::InvalidValue {
                    key: "format".to_string(),
                    message: format!("'{format}' is not one of {}", FORMATS.join(", ")),
                });
            }
        }
        debug!(
            copy = config.copy,
            presets = config.presets.len(),
            "loaded configuration"
        );
        Ok(config)
    }

    /// Sources, later ones overriding earlier ones:
    /// 1. Defaults
    /// 2. Discovered files, global then project
    /// 3. `SMITH_*` environment variables, `__` separating nested keys
    fn build_figment(&self) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(SmithConfig::default()));
        for config_file in self.discovery.discover_all() {
            trace!(
                "Loading config file: {} ({:?})",
                config_file.path.display(),
                config_file.format
            );
            figment = figment.merge(Self::file_provider(&config_file));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn file_provider(config_file: &ConfigFile) -> Figment {
        let path = &config_file.path;
        match config_file.format {
            ConfigFormat::Toml => Figment::from(Toml::file(path)),
            ConfigFormat::Yaml => Figment::from(Yaml::file(path)),
            ConfigFormat::Json => Figment::from(Json::file(path)),
        }
    }
}
