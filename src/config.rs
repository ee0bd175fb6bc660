//! Configuration management for rax-vfs
//!
//! Settings are layered: built-in defaults, then an optional `config.toml`,
//! then `RAX_VFS_*` environment overrides (`__` separates nested keys, e.g.
//! `RAX_VFS_NAMES__ALLOW_DOT=true`).

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

/// Config file looked up when `RAX_VFS_CONFIG` is unset. The extension is
/// optional, as with any `config` file source.
pub const DEFAULT_CONFIG_PATH: &str = "config";

/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_ENV: &str = "RAX_VFS_CONFIG";

const ENV_PREFIX: &str = "RAX_VFS";

/// Complete configuration
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct VfsConfig {
    pub names: NameRules,
    pub shell: ShellConfig,
    pub logging: LoggingConfig,
}

/// Rules applied to user, folder and file names alike
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct NameRules {
    /// Shortest accepted name, in characters
    pub min_length: usize,

    /// Longest accepted name, in characters
    pub max_length: usize,

    /// Whether `.` joins letters, digits, `_` and `-` as an allowed character
    pub allow_dot: bool,
}

impl Default for NameRules {
    fn default() -> Self {
        Self {
            min_length: 1,
            max_length: 50,
            allow_dot: false,
        }
    }
}

/// Interactive shell settings
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ShellConfig {
    pub prompt: String,

    /// Print the banner and farewell lines
    pub banner: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            banner: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `env_logger` filter; `RUST_LOG` takes precedence
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl VfsConfig {
    /// Load configuration from `$RAX_VFS_CONFIG` (or `config.toml`) with
    /// environment overrides. A missing file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&path)
    }

    /// Load configuration from the given file with environment overrides.
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );
        Self::build(builder)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: VfsConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.names.min_length == 0 {
            return Err(ConfigError::Message(
                "names.min_length must be at least 1".into(),
            ));
        }

        if self.names.min_length > self.names.max_length {
            return Err(ConfigError::Message(
                "names.min_length must not exceed names.max_length".into(),
            ));
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Message("logging.level cannot be empty".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Result<VfsConfig, ConfigError> {
        VfsConfig::build(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    #[test]
    fn test_defaults_when_empty() {
        let config = from_toml("").unwrap();
        assert_eq!(config.names, NameRules::default());
        assert_eq!(config.shell.prompt, "> ");
        assert!(config.shell.banner);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_partial_override() {
        let config = from_toml(
            r#"
            [names]
            allow_dot = true

            [shell]
            banner = false
            "#,
        )
        .unwrap();
        assert!(config.names.allow_dot);
        assert_eq!(config.names.max_length, 50);
        assert!(!config.shell.banner);
    }

    #[test]
    fn test_rejects_bad_lengths() {
        assert!(from_toml("[names]\nmin_length = 0").is_err());
        assert!(from_toml("[names]\nmin_length = 10\nmax_length = 5").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = VfsConfig::load_from("definitely/not/a/real/config/path").unwrap();
        assert_eq!(config.names.min_length, 1);
    }
}
