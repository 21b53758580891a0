//! Resolver settings with layered loading
//!
//! `SettingsLoader` reads `[resolver]` tables from a hierarchy of TOML files,
//! later files overriding keys set by earlier ones.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default bound on reuse hops for a single section.
pub const DEFAULT_MAX_DEPTH: usize = 16;

/// Directory name under the platform config dir holding global settings.
const GLOBAL_DIR_NAME: &str = "market-config";

/// Effective resolver settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverSettings {
    /// Maximum number of reuse hops followed for one section.
    pub max_depth: usize,

    /// Resolve the four sections concurrently.
    pub concurrent_sections: bool,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            concurrent_sections: true,
        }
    }
}

/// One settings file. Every key is optional so a layer only overrides
/// what it mentions.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    #[serde(default)]
    resolver: ResolverLayer,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ResolverLayer {
    max_depth: Option<usize>,
    concurrent_sections: Option<bool>,
}

impl ResolverSettings {
    fn merge(&mut self, layer: &ResolverLayer) {
        if let Some(max_depth) = layer.max_depth {
            self.max_depth = max_depth;
        }
        if let Some(concurrent) = layer.concurrent_sections {
            self.concurrent_sections = concurrent;
        }
    }
}

/// Loads [`ResolverSettings`] from layered TOML files
///
/// Layers, in order:
/// 1. Global settings (`<config_dir>/market-config/settings.toml`)
/// 2. Workspace settings (`<root>/market.toml`)
/// 3. Local overrides (`<root>/market.local.toml`)
///
/// Missing layers are skipped. Invalid TOML in any layer is an error.
pub struct SettingsLoader {
    root: PathBuf,

    /// Override for the global config directory (used for testing).
    /// When `None`, `dirs::config_dir()` decides.
    global_config_dir_override: Option<PathBuf>,
}

impl SettingsLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            global_config_dir_override: None,
        }
    }

    /// Create a loader with a custom global config directory.
    ///
    /// Useful in tests, which must not read the real user config.
    pub fn with_global_config_dir(root: impl Into<PathBuf>, global_config_dir: PathBuf) -> Self {
        Self {
            root: root.into(),
            global_config_dir_override: Some(global_config_dir),
        }
    }

    fn global_config_dir(&self) -> Option<PathBuf> {
        if let Some(ref override_dir) = self.global_config_dir_override {
            return Some(override_dir.clone());
        }
        dirs::config_dir().map(|d| d.join(GLOBAL_DIR_NAME))
    }

    /// The layer paths in the order they are applied.
    pub fn layer_paths(&self) -> Vec<PathBuf> {
        let mut paths = Vec::with_capacity(3);
        if let Some(global_dir) = self.global_config_dir() {
            paths.push(global_dir.join("settings.toml"));
        }
        paths.push(self.root.join("market.toml"));
        paths.push(self.root.join("market.local.toml"));
        paths
    }

    pub fn load(&self) -> Result<ResolverSettings> {
        let mut settings = ResolverSettings::default();

        for (index, path) in self.layer_paths().iter().enumerate() {
            if !path.is_file() {
                tracing::debug!(?path, layer = index + 1, "No settings file, skipping");
                continue;
            }
            tracing::debug!(?path, layer = index + 1, "Loading settings");
            let layer = read_layer(path)?;
            settings.merge(&layer.resolver);
        }

        if settings.max_depth == 0 {
            return Err(Error::InvalidSettings {
                path: self.root.clone(),
                message: "resolver.max_depth must be at least 1".to_string(),
            });
        }

        Ok(settings)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn read_layer(path: &Path) -> Result<SettingsFile> {
    let content = fs::read_to_string(path).map_err(|source| Error::SettingsRead {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|e| Error::InvalidSettings {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
