use crate::error::{Result, SearchError};
use crate::host::ConfigTarget;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Contents written when the settings UI is opened before anything is saved
const SETTINGS_TEMPLATE: &str = "\
# Percipio Search settings
#
# siteUrl must be an https URL on a *.percipio.com host. Only the origin is
# used, e.g. https://demo.percipio.com

[percipioSearch]
# siteUrl = \"https://demo.percipio.com\"
";

/// Key/value settings storage with global and workspace scopes
pub trait SettingsStore {
    /// Read a `section.name` key; workspace values shadow global ones
    fn get(&self, key: &str) -> Option<String>;

    /// Write a `section.name` key into `target`
    fn update(&mut self, key: &str, value: &str, target: ConfigTarget) -> Result<()>;
}

/// Default global settings file: `<config dir>/percipio-search/settings.toml`
pub fn default_settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("percipio-search")
        .join("settings.toml")
}

/// Settings stored in TOML files, one table per section
#[derive(Debug, Clone)]
pub struct FileSettings {
    global_path: PathBuf,
    workspace_path: Option<PathBuf>,
    global: toml::Table,
    workspace: toml::Table,
}

impl FileSettings {
    /// Load settings from the global file and an optional workspace file.
    /// Missing files load as empty.
    pub fn load(global_path: impl Into<PathBuf>, workspace_path: Option<PathBuf>) -> Result<Self> {
        let global_path = global_path.into();
        let global = read_table(&global_path)?;
        let workspace = match &workspace_path {
            Some(path) => read_table(path)?,
            None => toml::Table::new(),
        };

        Ok(Self {
            global_path,
            workspace_path,
            global,
            workspace,
        })
    }

    /// Load from [`default_settings_path`]
    pub fn load_default() -> Result<Self> {
        Self::load(default_settings_path(), None)
    }

    /// Path of the file backing `target`
    pub fn path(&self, target: ConfigTarget) -> Option<&Path> {
        match target {
            ConfigTarget::Global => Some(&self.global_path),
            ConfigTarget::Workspace => self.workspace_path.as_deref(),
        }
    }

    /// Make sure the global file exists so it can be opened for editing
    pub fn ensure_global_file(&self) -> Result<&Path> {
        if !self.global_path.exists() {
            write_atomic(&self.global_path, SETTINGS_TEMPLATE)?;
        }
        Ok(&self.global_path)
    }
}

impl SettingsStore for FileSettings {
    fn get(&self, key: &str) -> Option<String> {
        let (section, name) = split_key(key).ok()?;
        [&self.workspace, &self.global].into_iter().find_map(|table| {
            table
                .get(section)
                .and_then(|s| s.get(name))
                .and_then(|v| v.as_str())
                .map(str::to_string)
        })
    }

    fn update(&mut self, key: &str, value: &str, target: ConfigTarget) -> Result<()> {
        let (section, name) = split_key(key)?;

        let path = self
            .path(target)
            .map(Path::to_path_buf)
            .ok_or_else(|| SearchError::ScopeUnavailable(target.to_string()))?;

        let table = match target {
            ConfigTarget::Global => &mut self.global,
            ConfigTarget::Workspace => &mut self.workspace,
        };

        let entry = table
            .entry(section.to_string())
            .or_insert(toml::Value::Table(toml::Table::new()));
        let Some(section_table) = entry.as_table_mut() else {
            return Err(SearchError::SettingsWrite {
                path,
                reason: format!("'{}' is not a table", section),
            });
        };
        section_table.insert(name.to_string(), toml::Value::String(value.to_string()));

        let text = toml::to_string_pretty(&*table).map_err(|e| SearchError::SettingsWrite {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        write_atomic(&path, &text)?;

        log::debug!("Wrote {} to {} settings at {}", key, target, path.display());
        Ok(())
    }
}

fn split_key(key: &str) -> Result<(&str, &str)> {
    match key.split_once('.') {
        Some((section, name)) if !section.is_empty() && !name.is_empty() => Ok((section, name)),
        _ => Err(SearchError::InvalidSettingKey(key.to_string())),
    }
}

fn read_table(path: &Path) -> Result<toml::Table> {
    if !path.exists() {
        return Ok(toml::Table::new());
    }

    let text = std::fs::read_to_string(path).map_err(|e| SearchError::SettingsRead {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    toml::from_str::<toml::Table>(&text).map_err(|e| SearchError::SettingsRead {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Write via temp file, fsync and rename so a crash never leaves a partial file
fn write_atomic(path: &Path, text: &str) -> Result<()> {
    let write_err = |reason: String| SearchError::SettingsWrite {
        path: path.to_path_buf(),
        reason,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| write_err(format!("failed to create directory: {}", e)))?;
    }

    let tmp_path = path.with_extension("toml.tmp");
    let mut file = std::fs::File::create(&tmp_path)
        .map_err(|e| write_err(format!("failed to create temp file: {}", e)))?;
    file.write_all(text.as_bytes())
        .map_err(|e| write_err(format!("failed to write temp file: {}", e)))?;
    file.sync_all()
        .map_err(|e| write_err(format!("failed to sync temp file: {}", e)))?;

    std::fs::rename(&tmp_path, path).map_err(|e| write_err(format!("failed to rename: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::SITE_URL_KEY;

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let settings = FileSettings::load(dir.path().join("settings.toml"), None).unwrap();
        assert_eq!(settings.get(SITE_URL_KEY), None);
    }

    #[test]
    fn test_update_persists_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        let mut settings = FileSettings::load(&path, None).unwrap();
        settings
            .update(SITE_URL_KEY, "https://demo.percipio.com", ConfigTarget::Global)
            .unwrap();
        assert_eq!(settings.get(SITE_URL_KEY).as_deref(), Some("https://demo.percipio.com"));

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("[percipioSearch]"));
        assert!(text.contains("siteUrl = \"https://demo.percipio.com\""));

        let reloaded = FileSettings::load(&path, None).unwrap();
        assert_eq!(reloaded.get(SITE_URL_KEY).as_deref(), Some("https://demo.percipio.com"));
    }

    #[test]
    fn test_workspace_shadows_global() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let workspace = dir.path().join("workspace.toml");
        std::fs::write(&global, "[percipioSearch]\nsiteUrl = \"https://a.percipio.com\"\n").unwrap();
        std::fs::write(&workspace, "[percipioSearch]\nsiteUrl = \"https://b.percipio.com\"\n").unwrap();

        let settings = FileSettings::load(&global, Some(workspace)).unwrap();
        assert_eq!(settings.get(SITE_URL_KEY).as_deref(), Some("https://b.percipio.com"));
    }

    #[test]
    fn test_workspace_write_without_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = FileSettings::load(dir.path().join("s.toml"), None).unwrap();
        let err = settings
            .update(SITE_URL_KEY, "https://demo.percipio.com", ConfigTarget::Workspace)
            .unwrap_err();
        assert!(matches!(err, SearchError::ScopeUnavailable(_)));
    }

    #[test]
    fn test_invalid_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = FileSettings::load(dir.path().join("s.toml"), None).unwrap();
        assert!(settings.get("siteUrl").is_none());
        assert!(matches!(
            settings.update("siteUrl", "x", ConfigTarget::Global),
            Err(SearchError::InvalidSettingKey(_))
        ));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[percipioSearch\nsiteUrl = ").unwrap();
        assert!(matches!(
            FileSettings::load(&path, None),
            Err(SearchError::SettingsRead { .. })
        ));
    }

    #[test]
    fn test_ensure_global_file_writes_template_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let settings = FileSettings::load(&path, None).unwrap();

        settings.ensure_global_file().unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("[percipioSearch]"));

        // Template parses and leaves the site unset
        let reloaded = FileSettings::load(&path, None).unwrap();
        assert_eq!(reloaded.get(SITE_URL_KEY), None);
    }
}
