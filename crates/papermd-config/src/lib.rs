use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid asset pattern {pattern}: {source}")]
    AssetPatternError {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("Failed to read asset match: {0}")]
    AssetGlobError(#[from] glob::GlobError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorConfig {
    pub name: String,
    pub email: String,
}

/// User settings from `~/.config/papermd/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Stylesheets and scripts inlined into every page. Entries may be
    /// glob patterns.
    pub assets: Vec<String>,
    /// Language class for code that does not name one.
    pub code_language: Option<String>,
    /// JSON reference index used for wg21 link titles.
    pub references: Option<PathBuf>,
    /// Author written into new paper skeletons.
    pub author: Option<AuthorConfig>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded paths
        config.references = config
            .references
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        log::debug!("Loaded config from {}", config_path.display());
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/papermd");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expands every asset entry into concrete paths.
    ///
    /// Glob patterns contribute their matches in sorted order; a pattern
    /// without matches contributes nothing.
    pub fn asset_paths(&self) -> Result<Vec<PathBuf>, ConfigError> {
        let mut paths = Vec::new();
        for entry in &self.assets {
            let expanded = Self::expand_path(Path::new(entry)).unwrap_or_else(|| entry.into());
            let pattern = expanded.to_string_lossy();
            let matches = glob::glob(&pattern).map_err(|source| ConfigError::AssetPatternError {
                pattern: pattern.to_string(),
                source,
            })?;
            let mut found = matches.collect::<Result<Vec<_>, _>>()?;
            if found.is_empty() {
                log::warn!("Asset pattern {pattern} matched no files");
            }
            found.sort();
            paths.extend(found);
        }
        Ok(paths)
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
