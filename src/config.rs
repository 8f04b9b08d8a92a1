use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::content::Language;
use crate::error::Result;

/// Environment variable that overrides the image base path
pub const BASE_PATH_ENV: &str = "NEXT_PUBLIC_BASE_PATH";

const CONFIG_DIR_NAME: &str = ".baanrainaifun";
const SETTINGS_FILE: &str = "settings.json";

/// Where the site lives once deployed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(default = "default_base_path")]
    pub base_path: String,
    #[serde(default = "default_asset_prefix")]
    pub asset_prefix: String,
}

fn default_base_path() -> String {
    "/baanrainaifun".to_string()
}

fn default_asset_prefix() -> String {
    "/baanrainaifun/".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            asset_prefix: default_asset_prefix(),
        }
    }
}

/// Static export settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSettings {
    #[serde(default = "default_out_dir")]
    pub out_dir: String,
}

fn default_out_dir() -> String {
    "out".to_string()
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
        }
    }
}

/// Developer tooling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevSettings {
    /// Show the "Color Dev" trigger and palette overlay
    #[serde(default = "default_true")]
    pub palette_tool: bool,
}

impl Default for DevSettings {
    fn default() -> Self {
        Self { palette_tool: true }
    }
}

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub site: SiteSettings,
    #[serde(default)]
    pub export: ExportSettings,
    #[serde(default)]
    pub dev: DevSettings,
    /// Language shown at startup. Toggling does not write it back.
    #[serde(default)]
    pub default_language: Language,
}

impl Settings {
    /// Returns the config directory path (~/.baanrainaifun)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(CONFIG_DIR_NAME))
    }

    /// Returns the log directory path (~/.baanrainaifun/logs)
    pub fn log_dir() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("logs"))
    }

    /// Loads settings from the home config dir, returns default if not found or invalid
    pub fn load() -> Self {
        match Self::config_dir() {
            Some(dir) => match Self::load_from_dir(&dir) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!(error = %e, "falling back to default settings");
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    /// Loads `settings.json` from `dir`, writing a default file first if none exists
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(SETTINGS_FILE);
        if !path.exists() {
            Self::default().save_to_dir(dir)?;
        }

        let content = fs::read_to_string(&path)?;
        let settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    /// Saves settings using atomic write pattern
    pub fn save_to_dir(&self, dir: &Path) -> Result<()> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
            // Set directory permissions to user-only on Unix
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                let perms = fs::Permissions::from_mode(0o700);
                let _ = fs::set_permissions(dir, perms);
            }
        }

        let config_path = dir.join(SETTINGS_FILE);
        let temp_path = dir.join(format!("{}.tmp", SETTINGS_FILE));
        let content = serde_json::to_string_pretty(self)?;

        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, &config_path)?;
        Ok(())
    }

    /// Base path for card images, honoring `NEXT_PUBLIC_BASE_PATH`
    pub fn image_base(&self) -> String {
        self.image_base_with(std::env::var(BASE_PATH_ENV).ok())
    }

    pub fn image_base_with(&self, env_value: Option<String>) -> String {
        match env_value {
            Some(v) if !v.trim().is_empty() => v,
            _ => self.site.base_path.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiteError;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.site.base_path, "/baanrainaifun");
        assert_eq!(settings.site.asset_prefix, "/baanrainaifun/");
        assert_eq!(settings.export.out_dir, "out");
        assert!(settings.dev.palette_tool);
        assert_eq!(settings.default_language, Language::En);
    }

    #[test]
    fn test_parse_partial_json() {
        let json = r#"{"site":{"base_path":"/garden"},"default_language":"th"}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.site.base_path, "/garden");
        assert_eq!(settings.site.asset_prefix, "/baanrainaifun/");
        assert_eq!(settings.default_language, Language::Th);
        assert!(settings.dev.palette_tool);
    }

    #[test]
    fn test_old_settings_file_with_retired_field_loads() {
        let json = r#"{"site":{"base_path":"/garden","images_unoptimized":true}}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.site.base_path, "/garden");
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from_dir(dir.path()).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(dir.path().join("settings.json").exists());
        assert!(!dir.path().join("settings.json.tmp").exists());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("config");
        let mut settings = Settings::default();
        settings.dev.palette_tool = false;
        settings.export.out_dir = "public".to_string();
        settings.save_to_dir(&nested).unwrap();

        let loaded = Settings::load_from_dir(&nested).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("settings.json"), "{ not json").unwrap();
        assert!(matches!(Settings::load_from_dir(dir.path()), Err(SiteError::Json(_))));
    }

    #[test]
    fn test_image_base_env_override() {
        let settings = Settings::default();
        assert_eq!(settings.image_base_with(None), "/baanrainaifun");
        assert_eq!(settings.image_base_with(Some(String::new())), "/baanrainaifun");
        assert_eq!(settings.image_base_with(Some("/preview".to_string())), "/preview");
    }
}
