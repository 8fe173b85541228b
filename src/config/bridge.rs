//! Bridge configuration file
//!
//! Optional JSON file under the XDG config directory. Every field has a
//! default, so a missing file or a partial file is valid.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Explicit display name (e.g. ":1"); falls back to $DISPLAY when unset
    #[serde(default)]
    pub display: Option<String>,
    #[serde(default)]
    pub atoms: AtomSettings,
    #[serde(default)]
    pub desktop_mode: DesktopModeConfig,
}

/// How EWMH atoms are interned
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtomSettings {
    /// Create atoms the server does not know yet instead of failing with
    /// `AtomNotFound`
    #[serde(default)]
    pub intern_missing: bool,
}

/// Extra steps taken by `enter_desktop_mode` before the state hints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopModeConfig {
    /// Mark the window override-redirect first
    #[serde(default = "default_override_redirect")]
    pub override_redirect: bool,
    /// Replace _NET_WM_WINDOW_TYPE with _NET_WM_WINDOW_TYPE_DESKTOP
    #[serde(default)]
    pub window_type_desktop: bool,
}

fn default_override_redirect() -> bool {
    true
}

impl Default for DesktopModeConfig {
    fn default() -> Self {
        Self {
            override_redirect: default_override_redirect(),
            window_type_desktop: false,
        }
    }
}

impl BridgeConfig {
    pub fn path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(crate::constants::config::APP_DIR);
        path.push(crate::constants::config::FILENAME);
        path
    }

    /// Load the configuration from its default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path())
    }

    /// Load from `path`, falling back to defaults when the file is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: BridgeConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse JSON from {:?}", path))?;

        debug!(path = %path.display(), ?config, "Loaded config");
        Ok(config)
    }

    /// Write the default configuration to its default location
    pub fn create_default() -> Result<PathBuf> {
        let path = Self::path();
        Self::create_default_at(&path)?;
        Ok(path)
    }

    /// Write `BridgeConfig::default()` to `path`, refusing to replace an existing file
    pub fn create_default_at(path: &Path) -> Result<()> {
        if path.exists() {
            bail!("Config file {:?} already exists", path);
        }
        Self::default().save_to(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, json).with_context(|| format!("Failed to write config to {:?}", path))?;

        info!(path = %path.display(), "Saved config");
        Ok(())
    }

    /// Display name used for logging and error messages
    pub fn display_label(&self) -> String {
        self.display
            .clone()
            .or_else(|| std::env::var("DISPLAY").ok())
            .unwrap_or_else(|| "<unset>".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_detach_before_desktop_hints() {
        let config = BridgeConfig::default();

        assert_eq!(config.display, None);
        assert!(!config.atoms.intern_missing);
        assert!(config.desktop_mode.override_redirect);
        assert!(!config.desktop_mode.window_type_desktop);
    }

    #[test]
    fn test_empty_desktop_mode_section_keeps_override_redirect() {
        let config: BridgeConfig = serde_json::from_str(r#"{ "desktop_mode": {} }"#).unwrap();
        assert!(config.desktop_mode.override_redirect);

        let config: BridgeConfig = serde_json::from_str("{}").unwrap();
        assert!(config.desktop_mode.override_redirect);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("absent.json");

        let config = BridgeConfig::load_from(&path).unwrap();
        assert_eq!(config, BridgeConfig::default());
        assert!(!path.exists());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{ "display": ":1", "desktop_mode": { "override_redirect": false } }"#)
            .unwrap();

        let config = BridgeConfig::load_from(&path).unwrap();
        assert_eq!(config.display.as_deref(), Some(":1"));
        assert!(!config.desktop_mode.override_redirect);
        assert!(!config.desktop_mode.window_type_desktop);
        assert!(!config.atoms.intern_missing);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{ display: ").unwrap();

        let err = BridgeConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse JSON"));
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("config.json");

        let config = BridgeConfig {
            display: Some(":0".to_string()),
            atoms: AtomSettings { intern_missing: true },
            desktop_mode: DesktopModeConfig {
                override_redirect: true,
                window_type_desktop: true,
            },
        };
        config.save_to(&path).unwrap();

        assert_eq!(BridgeConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_create_default_writes_defaults_once() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.json");

        BridgeConfig::create_default_at(&path).unwrap();
        assert_eq!(BridgeConfig::load_from(&path).unwrap(), BridgeConfig::default());

        fs::write(&path, r#"{ "display": ":3" }"#).unwrap();
        let err = BridgeConfig::create_default_at(&path).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(
            BridgeConfig::load_from(&path).unwrap().display.as_deref(),
            Some(":3")
        );
    }

    #[test]
    fn test_explicit_display_label() {
        let config = BridgeConfig {
            display: Some(":7".to_string()),
            ..Default::default()
        };
        assert_eq!(config.display_label(), ":7");
    }
}
