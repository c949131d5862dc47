use crate::app::keymap::KeyConfig;
use crate::domain::builtin::builtin_entries;
use crate::domain::catalog::{Catalog, CatalogEntry, CatalogError};
use crate::theme::PaletteType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid key binding `{0}`")]
    InvalidKeyBinding(String),
    #[error("catalog entry `{0}` must set exactly one of `destination` or `handler`")]
    AmbiguousEntry(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Extra palette entry declared in the config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EntryConfig {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub keywords: Vec<String>,
    pub icon: Option<String>,
    pub destination: Option<String>,
    pub handler: Option<String>,
}

impl EntryConfig {
    pub fn into_entry(self) -> Result<CatalogEntry, ConfigError> {
        let mut entry = match (self.destination, self.handler) {
            (Some(destination), None) => CatalogEntry::navigation(self.id, self.title, destination),
            (None, Some(handler)) => CatalogEntry::action(self.id, self.title, handler),
            _ => return Err(ConfigError::AmbiguousEntry(self.id)),
        };
        entry.subtitle = self.subtitle;
        entry.icon = self.icon;
        Ok(entry.keywords(self.keywords))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub theme: PaletteType,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
    pub keys: KeyConfig,
    pub entries: Vec<EntryConfig>,
}

impl AppConfig {
    /// Built-in entries followed by the configured ones. Ids must stay
    /// unique across both.
    pub fn build_catalog(&self) -> Result<Catalog, ConfigError> {
        let mut entries = builtin_entries();
        for extra in &self.entries {
            entries.push(extra.clone().into_entry()?);
        }
        Ok(Catalog::new(entries)?)
    }

    #[must_use]
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(default_log_path)
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("staffdesk");
        path.push("config.toml");
        path
    })
}

pub fn default_log_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".local");
        path.push("state");
        path.push("staffdesk");
        path.push("staffdesk.log");
        path
    })
}

/// Loads the user config. A missing file (or no home directory) yields the
/// defaults.
pub fn load() -> Result<AppConfig, ConfigError> {
    match get_config_path() {
        Some(path) => load_from(&path),
        None => Ok(AppConfig::default()),
    }
}

pub fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.keys.toggle_palette, "ctrl+k");
    }

    #[test]
    fn test_full_config() {
        let file = write_config(
            r#"
theme = "nord"
log_level = "debug"

[keys]
toggle_palette = "ctrl+p"

[[entries]]
id = "timesheets"
title = "Approve Timesheets"
keywords = ["hours"]
destination = "/employee/hr/time/approvals"

[[entries]]
id = "sync-crm"
title = "Sync CRM"
handler = "crm.sync"
"#,
        );

        let config = load_from(file.path()).unwrap();
        assert_eq!(config.theme, PaletteType::Nord);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.keys.toggle_palette, "ctrl+p");

        let catalog = config.build_catalog().unwrap();
        assert_eq!(catalog.len(), builtin_entries().len() + 2);
        let entry = catalog.get("timesheets").unwrap();
        assert!(entry.kind.is_navigation());
        assert_eq!(entry.keywords, vec!["hours".to_string()]);
        assert!(!catalog.get("sync-crm").unwrap().kind.is_navigation());
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let file = write_config("theme = [");
        let err = load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn test_entry_needs_exactly_one_target() {
        let both = EntryConfig {
            id: "x".to_string(),
            title: "X".to_string(),
            destination: Some("/x".to_string()),
            handler: Some("x.run".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            both.into_entry(),
            Err(ConfigError::AmbiguousEntry(id)) if id == "x"
        ));

        let neither = EntryConfig {
            id: "y".to_string(),
            ..Default::default()
        };
        assert!(neither.into_entry().is_err());
    }

    #[test]
    fn test_entry_colliding_with_builtin_is_rejected() {
        let config = AppConfig {
            entries: vec![EntryConfig {
                id: "jobs".to_string(),
                title: "My Jobs".to_string(),
                destination: Some("/mine".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert!(matches!(
            config.build_catalog(),
            Err(ConfigError::Catalog(CatalogError::DuplicateId(id))) if id == "jobs"
        ));
    }
}
