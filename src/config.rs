//! Search-path configuration
//!
//! Resolves the ordered list of RDF search paths with a fixed priority
//! ladder:
//! 1. Explicit caller-supplied paths (highest priority)
//! 2. `LADSPA_RDF_PATH` environment variable
//! 3. TOML config file (`<config dir>/ladspa-rdf/config.toml`)
//! 4. Compiled defaults (fallback)

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, Result};

/// Environment variable holding search paths, in the platform's path-list
/// separator format.
pub const SEARCH_PATH_ENV: &str = "LADSPA_RDF_PATH";

/// Compiled default search paths.
pub const DEFAULT_SEARCH_PATHS: &[&str] = &["/usr/share/ladspa/rdf", "/usr/local/share/ladspa/rdf"];

/// Optional TOML configuration file contents.
#[derive(Debug, Default, Deserialize)]
pub struct TomlConfig {
    /// Ordered RDF search paths.
    pub rdf_paths: Option<Vec<PathBuf>>,
}

impl TomlConfig {
    /// Load and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Invalid config file {}: {}", path.display(), e)))
    }
}

/// Resolve the RDF search paths following the priority order.
pub fn resolve_search_paths(explicit: Option<&[PathBuf]>) -> Vec<PathBuf> {
    // Priority 1: caller-supplied paths
    if let Some(paths) = explicit {
        if !paths.is_empty() {
            return paths.to_vec();
        }
    }

    // Priority 2: environment variable
    if let Some(raw) = std::env::var_os(SEARCH_PATH_ENV) {
        let paths: Vec<PathBuf> = std::env::split_paths(&raw).collect();
        if !paths.is_empty() {
            return paths;
        }
    }

    // Priority 3: TOML config file
    if let Some(path) = config_file_path() {
        if path.exists() {
            match TomlConfig::load(&path) {
                Ok(config) => {
                    if let Some(paths) = config.rdf_paths {
                        if !paths.is_empty() {
                            return paths;
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!("Ignoring config file: {}", e);
                }
            }
        }
    }

    // Priority 4: compiled defaults
    DEFAULT_SEARCH_PATHS.iter().map(PathBuf::from).collect()
}

/// Platform config file location, when determinable.
fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ladspa-rdf").join("config.toml"))
}
