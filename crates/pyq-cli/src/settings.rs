//! Persistent presentation settings.
//!
//! Settings live in `settings.toml` inside the platform config folder:
//! - macOS: ~/Library/Application Support/com.pyq.PYQ Dashboard/
//! - Windows: %APPDATA%/pyq/PYQ Dashboard/config/
//! - Linux: ~/.config/pyqdashboard/
//!
//! An explicit `--config` path replaces the platform location.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use pyq_core::{IconAssignment, SortDirection, SortKey, StoreSettings};
use pyq_model::Subject;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "pyq";
const APP_NAME: &str = "PYQ Dashboard";
const CONFIG_FILENAME: &str = "settings.toml";

// ============================================================================
// Settings
// ============================================================================

/// Dashboard settings (persisted as TOML).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Render with the dark palette.
    pub dark_mode: bool,
    /// Subject selected when a session starts.
    pub default_subject: Subject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub icon_assignment: IconAssignment,
    /// Sort applied when a session starts; `"none"` keeps catalogue order.
    #[serde(with = "optional_sort")]
    pub default_sort: Option<SortKey>,
    pub default_direction: SortDirection,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            icon_assignment: IconAssignment::default(),
            default_sort: Some(SortKey::Title),
            default_direction: SortDirection::Ascending,
        }
    }
}

impl Settings {
    /// Initial store state described by these settings.
    pub fn store_settings(&self) -> StoreSettings {
        StoreSettings {
            subject: self.general.default_subject,
            sort_key: self.display.default_sort,
            sort_direction: self.display.default_direction,
            icons: self.display.icon_assignment,
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("serialize settings")
    }
}

/// TOML has no null, so "no initial sort" is spelled `"none"`.
mod optional_sort {
    use serde::{Deserialize, Deserializer, Serializer, de};

    use pyq_core::SortKey;

    const NONE: &str = "none";

    pub fn serialize<S: Serializer>(
        key: &Option<SortKey>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(key.map_or(NONE, |key| key.as_str()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<SortKey>, D::Error> {
        let name = String::deserialize(deserializer)?;
        if name.eq_ignore_ascii_case(NONE) {
            return Ok(None);
        }
        SortKey::from_name(&name)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("unknown sort key '{name}'")))
    }
}

// ============================================================================
// Persistence
// ============================================================================

/// Platform settings path, or `None` when no home directory is known.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Where settings are read from and written to.
pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(settings_path)
}

/// Load settings.
///
/// An explicit path must exist and parse. The platform file falls back to
/// defaults when it is missing or broken.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        let content = fs::read_to_string(path)
            .with_context(|| format!("read settings file {}", path.display()))?;
        let settings = toml::from_str(&content)
            .with_context(|| format!("parse settings file {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded settings");
        return Ok(settings);
    }

    let Some(path) = settings_path() else {
        tracing::warn!("could not determine settings path, using defaults");
        return Ok(Settings::default());
    };
    Ok(load_or_default(&path))
}

fn load_or_default(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "loaded settings");
                settings
            }
            Err(error) => {
                tracing::warn!(
                    path = %path.display(),
                    %error,
                    "failed to parse settings, using defaults"
                );
                Settings::default()
            }
        },
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            Settings::default()
        }
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                %error,
                "failed to read settings, using defaults"
            );
            Settings::default()
        }
    }
}

/// Save settings, creating the parent directory if needed.
pub fn save_settings(settings: &Settings, explicit: Option<&Path>) -> Result<PathBuf> {
    let path =
        resolve_path(explicit).ok_or_else(|| anyhow!("could not determine settings path"))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config directory {}", parent.display()))?;
    }
    fs::write(&path, settings.to_toml()?)
        .with_context(|| format!("write settings file {}", path.display()))?;
    tracing::info!(path = %path.display(), "saved settings");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_start_on_physics_sorted_by_title() {
        let store = Settings::default().store_settings();
        assert_eq!(store, StoreSettings::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let settings: Settings = toml::from_str("[general]\ndark_mode = true\n").unwrap();
        assert!(settings.general.dark_mode);
        assert_eq!(settings.general.default_subject, Subject::Physics);
        assert_eq!(settings.display, DisplaySettings::default());
    }

    #[test]
    fn none_disables_the_initial_sort() {
        let settings: Settings = toml::from_str("[display]\ndefault_sort = \"none\"\n").unwrap();
        assert_eq!(settings.display.default_sort, None);
    }

    #[test]
    fn unknown_sort_key_is_rejected() {
        let parsed: Result<Settings, _> = toml::from_str("[display]\ndefault_sort = \"pages\"\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn settings_survive_toml() {
        let mut settings = Settings::default();
        settings.general.dark_mode = true;
        settings.general.default_subject = Subject::Chemistry;
        settings.display.icon_assignment = IconAssignment::Positional;
        settings.display.default_sort = None;
        settings.display.default_direction = SortDirection::Descending;
        let text = settings.to_toml().unwrap();
        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn broken_platform_file_falls_back_to_defaults() {
        let dir = std::env::temp_dir().join(format!("pyq-settings-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILENAME);
        fs::write(&path, "general = [").unwrap();
        assert_eq!(load_or_default(&path), Settings::default());
        assert_eq!(load_or_default(&dir.join("missing.toml")), Settings::default());
        fs::remove_dir_all(&dir).unwrap();
    }
}
