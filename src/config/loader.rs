//! Settings loading and validation

use crate::constants::{CONFIG_FILENAMES, DEFAULT_BACKUP_SUFFIX, DEFAULT_PRISTINE_SUFFIX};
use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::marker::MarkerSet;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Tunables for a generation run. Every field has a default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsV1 {
    #[serde(default = "get_default_backup_suffix")]
    pub backup_suffix: String,
    #[serde(default = "get_default_pristine_suffix")]
    pub pristine_suffix: String,
    #[serde(default)]
    pub markers: MarkerSet,
}

impl Default for SettingsV1 {
    fn default() -> Self {
        Self {
            backup_suffix: get_default_backup_suffix(),
            pristine_suffix: get_default_pristine_suffix(),
            markers: MarkerSet::default(),
        }
    }
}

impl SettingsV1 {
    pub fn validate(&self) -> Result<()> {
        validate_suffix("backup_suffix", &self.backup_suffix)?;
        validate_suffix("pristine_suffix", &self.pristine_suffix)?;
        if self.backup_suffix == self.pristine_suffix {
            return Err(Error::ConfigValidation(
                "backup_suffix and pristine_suffix must differ".into(),
            ));
        }
        self.markers.validate()
    }
}

fn validate_suffix(field: &str, suffix: &str) -> Result<()> {
    if !suffix.starts_with('.') || suffix.len() < 2 {
        return Err(Error::ConfigValidation(format!(
            "{field} must start with '.' and have at least 1 character after it"
        )));
    }
    if suffix.contains(['/', '\\']) {
        return Err(Error::ConfigValidation(format!(
            "{field} must not contain path separators"
        )));
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
#[serde(tag = "schemaVersion")]
pub enum Settings {
    #[serde(rename = "v1")]
    V1(SettingsV1),
}

impl Settings {
    /// Loads and validates the settings for a run against `template_path`.
    ///
    /// # Arguments
    /// * `explicit` - A settings file given on the command line; must exist
    /// * `template_path` - The template document; its directory is searched
    ///   for one of [`CONFIG_FILENAMES`] when `explicit` is `None`
    ///
    /// # Returns
    /// * `SettingsV1::default()` when no settings file is found implicitly
    pub fn resolve(explicit: Option<&Path>, template_path: &Path) -> Result<SettingsV1> {
        let settings = match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(Error::ConfigNotFound { path: path.display().to_string() });
                }
                Some(Self::load_file(path)?)
            }
            None => Self::load_config(template_dir(template_path))?,
        };

        let settings = match settings {
            Some(Settings::V1(settings)) => settings,
            None => {
                log::debug!("No settings file found, using defaults");
                SettingsV1::default()
            }
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Searches `dir` for the first existing settings file.
    pub fn load_config<P: AsRef<Path>>(dir: P) -> Result<Option<Self>> {
        let dir = dir.as_ref();
        for config_file_name in CONFIG_FILENAMES.iter() {
            let config_file_path = dir.join(config_file_name);
            if config_file_path.is_file() {
                return Self::load_file(&config_file_path).map(Some);
            }
        }
        Ok(None)
    }

    /// Parses a settings file, choosing JSON or YAML by extension.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let display = path.to_str_checked()?;
        log::debug!("Loading settings from '{display}'");

        let content = std::fs::read_to_string(path)
            .map_err(|source| Error::ReadError { path: display.to_string(), source })?;

        let parse_error =
            |reason: String| Error::ConfigParse { path: display.to_string(), reason };
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))
            }
            _ => serde_yaml::from_str(&content).map_err(|e| parse_error(e.to_string())),
        }
    }
}

fn template_dir(template_path: &Path) -> PathBuf {
    match template_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn get_default_backup_suffix() -> String {
    DEFAULT_BACKUP_SUFFIX.to_string()
}

fn get_default_pristine_suffix() -> String {
    DEFAULT_PRISTINE_SUFFIX.to_string()
}
