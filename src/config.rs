//! Configuration management for etabs.
//!
//! This module provides the [`Config`] struct which controls reflow
//! behavior. Configuration can be loaded from:
//! - TOML files (`etabs.toml`)
//! - CLI arguments (which override file settings)
//! - In-file directives (`# etabs: --gap 4`)
//!
//! Config files are auto-discovered by searching parent directories from
//! the file being reflowed up to the filesystem root, plus the user's home
//! directory; more specific files override less specific ones.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Config file names to search for (in order of priority, later overrides earlier)
const CONFIG_FILE_NAMES: &[&str] = &["etabs.toml"];

/// Minimum number of spaces between an aligned column and the next.
pub const DEFAULT_GAP: usize = 2;

/// Get the user's home directory
fn dirs_home() -> Option<PathBuf> {
    // Try HOME environment variable first (works on Unix and some Windows setups)
    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home));
    }
    // Fallback for Windows
    if let Ok(userprofile) = std::env::var("USERPROFILE") {
        return Some(PathBuf::from(userprofile));
    }
    None
}

fn default_gap() -> usize {
    DEFAULT_GAP
}

/// Main configuration struct for etabs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Number of spaces inserted between an aligned column and the next
    /// (default: 2)
    #[serde(default = "default_gap")]
    pub gap: usize,
}

/// Partial configuration for TOML parsing
///
/// All fields are `Option<T>` so we can distinguish between
/// "explicitly set" and "not specified" when merging configs.
#[derive(Debug, Clone, Default, Deserialize)]
struct PartialConfig {
    pub gap: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config { gap: DEFAULT_GAP }
    }
}

impl Config {
    /// Maximum reasonable inter-column gap
    const MAX_GAP: usize = 16;

    /// Validate configuration values are within reasonable bounds
    ///
    /// Returns an error message if validation fails, None if valid.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if self.gap == 0 {
            return Some("gap must be at least 1".to_string());
        }
        if self.gap > Self::MAX_GAP {
            return Some(format!(
                "gap {} exceeds maximum of {}",
                self.gap,
                Self::MAX_GAP
            ));
        }
        None
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let partial: PartialConfig = toml::from_str(&contents)?;
        let mut config = Self::default();
        config.apply_partial(&partial);
        Ok(config)
    }

    /// Apply a partial config, only overriding fields that are explicitly set
    fn apply_partial(&mut self, partial: &PartialConfig) {
        if let Some(v) = partial.gap {
            self.gap = v;
        }
    }

    /// Discover config files from parent directories of a given path
    ///
    /// Searches from the file's directory up to the root, then adds the
    /// home directory config. Returns config file paths in order of
    /// priority (least specific first).
    #[must_use]
    pub fn discover_config_files(start_path: &Path) -> Vec<PathBuf> {
        let mut config_files = Vec::new();

        // Home directory config first (lowest priority)
        if let Some(home) = dirs_home() {
            for config_name in CONFIG_FILE_NAMES {
                let home_config = home.join(config_name);
                if home_config.is_file() {
                    config_files.push(home_config);
                }
            }
        }

        // Start from the file's parent directory (or the path itself if it's a directory)
        let start_dir = if start_path.is_file() {
            start_path.parent().map(Path::to_path_buf)
        } else if start_path.is_dir() {
            Some(start_path.to_path_buf())
        } else {
            // Path doesn't exist, use current directory
            std::env::current_dir().ok()
        };

        // Collect config files from parent directories (from root to current)
        if let Some(dir) = start_dir {
            let mut ancestors: Vec<PathBuf> = dir.ancestors().map(Path::to_path_buf).collect();
            // Reverse so we go from root to current (less specific to more specific)
            ancestors.reverse();

            for ancestor in ancestors {
                for config_name in CONFIG_FILE_NAMES {
                    let config_path = ancestor.join(config_name);
                    if config_path.is_file() && !config_files.contains(&config_path) {
                        config_files.push(config_path);
                    }
                }
            }
        }

        config_files
    }

    /// Build a config by merging all discovered config files
    ///
    /// Later (more specific) files override earlier ones. Unreadable or
    /// malformed files are skipped.
    #[must_use]
    pub fn from_discovered_files(start_path: &Path) -> Self {
        let mut config = Self::default();

        for config_path in Self::discover_config_files(start_path) {
            if let Ok(contents) = std::fs::read_to_string(&config_path) {
                match toml::from_str::<PartialConfig>(&contents) {
                    Ok(partial) => config.apply_partial(&partial),
                    Err(e) => {
                        eprintln!("Warning: ignoring {}: {e}", config_path.display());
                    }
                }
            }
        }

        config
    }
}
