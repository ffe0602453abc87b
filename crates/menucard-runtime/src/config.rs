use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_ENV: &str = "MENUCARD_CONFIG";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. MENUCARD_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory
/// 4. ~/.menucard/config.toml (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV)
        && !env_path.is_empty()
    {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("menucard").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".menucard").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Heading of the menu listing
    pub title: String,
    /// Prefix shown before every price
    pub currency_label: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Tonight's Dining Selection".to_string(),
            currency_label: "R".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Input poll interval of the TUI loop
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 250 }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub ui: UiConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Write the default config to `path`, refusing to clobber an existing
    /// file unless `force` is set.
    pub fn init_at(path: &Path, force: bool) -> Result<Self> {
        if path.exists() && !force {
            return Err(Error::ConfigExists(path.to_path_buf()));
        }

        let config = Self::default();
        config.save_to(path)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.display.title, "Tonight's Dining Selection");
        assert_eq!(config.display.currency_label, "R");
        assert_eq!(config.ui.tick_rate_ms, 250);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.display.currency_label = "ZAR".to_string();
        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[display]\ncurrency_label = \"$\"\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.display.currency_label, "$");
        assert_eq!(config.display.title, DisplayConfig::default().title);
        assert_eq!(config.ui, UiConfig::default());

        Ok(())
    }

    #[test]
    fn test_invalid_toml_is_parse_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[ui]\ntick_rate_ms = \"fast\"\n")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));

        Ok(())
    }

    #[test]
    fn test_init_refuses_to_overwrite_without_force() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[display]\ntitle = \"Mine\"\n")?;

        let err = Config::init_at(&config_path, false).unwrap_err();
        assert!(matches!(err, Error::ConfigExists(_)));
        assert_eq!(Config::load_from(&config_path)?.display.title, "Mine");

        Config::init_at(&config_path, true)?;
        assert_eq!(Config::load_from(&config_path)?, Config::default());

        Ok(())
    }

    #[test]
    fn test_explicit_path_wins() -> Result<()> {
        let path = resolve_config_path(Some("/tmp/menucard-test.toml"))?;
        assert_eq!(path, PathBuf::from("/tmp/menucard-test.toml"));
        Ok(())
    }

    #[test]
    fn test_tick_rate_has_floor() {
        let ui = UiConfig { tick_rate_ms: 0 };
        assert_eq!(ui.tick_rate(), Duration::from_millis(10));
    }
}
