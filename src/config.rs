use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::DATE_MARKERS;
use crate::error::AppError;

const CONFIG_NAME: &str = "ki-table";

/// Optional settings file. Every key falls back to the built-in default;
/// list values replace the default table rather than extending it.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) input: Option<PathBuf>,
    #[serde(default)]
    pub(crate) output: Option<PathBuf>,
    #[serde(default)]
    pub(crate) exclude_purpose: Option<Vec<String>>,
    #[serde(default)]
    pub(crate) exclude_prompt: Option<Vec<String>>,
    #[serde(default)]
    pub(crate) exclude_purpose_exact: Option<Vec<String>>,
    #[serde(default)]
    pub(crate) prompt_length_limit: Option<usize>,
    #[serde(default)]
    pub(crate) date_markers: Option<Vec<String>>,
}

impl Config {
    /// Load the config named on the command line, or the first usable file on
    /// the search path. An explicit path must exist and parse.
    pub(crate) fn load(explicit: Option<&Path>) -> Result<Self, AppError> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => Ok(Self::search(&Self::get_config_paths())),
        }
    }

    fn load_from(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|source| AppError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| AppError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<Config>(content)
    }

    fn search(paths: &[PathBuf]) -> Self {
        for path in paths {
            if path.exists()
                && let Ok(content) = fs::read_to_string(path)
            {
                match Self::parse(&content) {
                    Ok(config) => {
                        tracing::info!(path = %path.display(), "loaded config");
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "failed to parse config");
                    }
                }
            }
        }

        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let file_name = format!("{CONFIG_NAME}.toml");

        // 1. Working directory: ./ki-table.toml
        let mut paths = vec![PathBuf::from(&file_name)];

        // 2. XDG config: ~/.config/ki-table/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join(CONFIG_NAME).join("config.toml"));
        }

        // 3. Platform config dir (Application Support on macOS, AppData on Windows)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join(CONFIG_NAME).join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        paths
    }

    pub(crate) fn date_markers(&self) -> Vec<String> {
        match &self.date_markers {
            Some(markers) => markers.clone(),
            None => DATE_MARKERS.iter().map(|m| (*m).to_string()).collect(),
        }
    }
}
