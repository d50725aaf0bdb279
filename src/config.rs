use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".tidumprc.json";

pub const DEFAULT_MARKER: &str = "EASYTR";

pub const DEFAULT_EXTENSIONS: &[&str] = &[".h", ".hpp", ".c", ".cpp", ".cxx", ".cc"];

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_marker")]
    pub marker: String,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_indent")]
    pub indent: usize,
    #[serde(default)]
    pub strip_quotes: bool,
    #[serde(default)]
    pub all_matches: bool,
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

fn default_output() -> String {
    "text_ids.json".to_string()
}

fn default_indent() -> usize {
    4
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            extensions: default_extensions(),
            ignores: Vec::new(),
            output: default_output(),
            indent: default_indent(),
            strip_quotes: false,
            all_matches: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Rejects an empty marker, an empty extension list and invalid glob
    /// patterns in `ignores`.
    pub fn validate(&self) -> Result<()> {
        if self.marker.trim().is_empty() {
            bail!("'marker' must not be empty");
        }

        if self.extensions.is_empty() {
            bail!("'extensions' must list at least one file suffix");
        }
        if let Some(ext) = self.extensions.iter().find(|ext| ext.is_empty()) {
            bail!("Invalid suffix in 'extensions': \"{}\"", ext);
        }

        // Only patterns with wildcards are globs, the rest are literal paths
        for pattern in &self.ignores {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignores': \"{}\"", pattern)
                })?;
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, `None` when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }

    /// Directory relative config paths (like `output`) are resolved against.
    pub fn base_dir(&self) -> Option<&Path> {
        self.path.as_deref().and_then(Path::parent)
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {}", path.display()))?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
