use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::OutputFormat;

pub const CONFIG_FILE_NAME: &str = ".phrasekitrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Default output format for `render`.
    #[serde(default)]
    pub format: OutputFormat,
    /// Value exported for plural quantities that have no content.
    #[serde(default)]
    pub plural_default: Option<String>,
    /// Glob patterns skipped when scanning directories for documents.
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    /// `status` fails when a phrase's completeness is below this ratio.
    #[serde(default)]
    pub min_completeness: f64,
}

fn default_ignores() -> Vec<String> {
    ["**/node_modules/**", "**/target/**"]
        .map(String::from)
        .to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            plural_default: None,
            ignores: default_ignores(),
            min_completeness: 0.0,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid or
    /// `minCompleteness` lies outside `0.0..=1.0`.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if !(0.0..=1.0).contains(&self.min_completeness) {
            bail!(
                "'minCompleteness' must be between 0.0 and 1.0, got {}",
                self.min_completeness
            );
        }

        Ok(())
    }

    /// Compiled `ignores` patterns. Call [`validate`](Self::validate) first;
    /// invalid patterns are dropped here.
    pub fn ignore_patterns(&self) -> Vec<Pattern> {
        self.ignores
            .iter()
            .filter_map(|pattern| Pattern::new(pattern).ok())
            .collect()
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
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
