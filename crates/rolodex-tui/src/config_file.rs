use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub display: Option<DisplayConfig>,
    pub data: Option<DataConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub theme: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    pub path: Option<String>,
}

impl ConfigFile {
    pub fn theme(&self) -> Option<&str> {
        self.display.as_ref()?.theme.as_deref()
    }

    pub fn data_path(&self) -> Option<PathBuf> {
        self.data.as_ref()?.path.as_deref().map(PathBuf::from)
    }
}

/// Platform config directory path: `<config_dir>/rolodex/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("rolodex").join("config.toml"))
}

/// Load config by cascading CWD `.rolodex.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(&PathBuf::from(".rolodex.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

fn load_from_path(path: &PathBuf) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str(&content).ok()
}

/// Merge two configs: `overlay` values take precedence over `base`.
fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    ConfigFile {
        display: Some(DisplayConfig {
            theme: overlay
                .display
                .as_ref()
                .and_then(|d| d.theme.clone())
                .or_else(|| base.display.as_ref().and_then(|d| d.theme.clone())),
        }),
        data: Some(DataConfig {
            path: overlay
                .data
                .as_ref()
                .and_then(|d| d.path.clone())
                .or_else(|| base.data.as_ref().and_then(|d| d.path.clone())),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(s: &str) -> ConfigFile {
        toml::from_str(s).unwrap()
    }

    #[test]
    fn partial_config_parses() {
        let config = parsed("[display]\ntheme = \"amber\"\n");
        assert_eq!(config.theme(), Some("amber"));
        assert_eq!(config.data_path(), None);
    }

    #[test]
    fn overlay_wins_where_set() {
        let base = parsed("[display]\ntheme = \"slate\"\n\n[data]\npath = \"base.json\"\n");
        let overlay = parsed("[display]\ntheme = \"amber\"\n");

        let merged = merge(base, overlay);
        assert_eq!(merged.theme(), Some("amber"));
        // Unset overlay fields fall through to base
        assert_eq!(merged.data_path(), Some(PathBuf::from("base.json")));
    }

    #[test]
    fn empty_config_merges_to_defaults() {
        let merged = merge(ConfigFile::default(), ConfigFile::default());
        assert_eq!(merged.theme(), None);
        assert_eq!(merged.data_path(), None);
    }
}
