//! Engine configuration loading and parsing.
//!
//! A small TOML surface tunes the editing engine: `[history] max_depth`
//! bounds the undo snapshot stack and `[search] wrap` controls whether
//! forward scans wrap around the document start. `prompted.toml` is
//! discovered in the working directory first, then under the platform
//! config dir. Unknown fields are ignored and parse failures degrade to
//! defaults: configuration must never take the engine down.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::info;

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    /// Maximum retained undo snapshots.
    #[serde(default = "HistoryConfig::default_max_depth")]
    pub max_depth: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::default_max_depth(),
        }
    }
}

impl HistoryConfig {
    const fn default_max_depth() -> usize {
        200
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Wrap forward scans around the document start.
    #[serde(default = "SearchConfig::default_wrap")]
    pub wrap: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            wrap: Self::default_wrap(),
        }
    }
}

impl SearchConfig {
    const fn default_wrap() -> bool {
        true
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Best-effort config path following platform conventions: a local
/// `prompted.toml` wins over the platform config dir.
pub fn discover() -> PathBuf {
    let local = PathBuf::from("prompted.toml");
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("prompted").join("prompted.toml");
    }
    PathBuf::from("prompted.toml")
}

/// Load configuration from `path` (or the discovered location). A missing
/// file or a parse error yields the defaults.
pub fn load_from(path: Option<PathBuf>) -> Result<EngineConfig> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(EngineConfig::default());
    };
    match toml::from_str::<EngineConfig>(&content) {
        Ok(config) => {
            info!(
                target: "config",
                path = %path.display(),
                max_depth = config.history.max_depth,
                search_wrap = config.search.wrap,
                "engine config loaded"
            );
            Ok(config)
        }
        Err(_e) => {
            info!(target: "config", path = %path.display(), "config parse failed; using defaults");
            Ok(EngineConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_without_file() {
        let config = load_from(Some(PathBuf::from("/nonexistent/prompted.toml"))).unwrap();
        assert_eq!(config.history.max_depth, 200);
        assert!(config.search.wrap);
    }

    #[test]
    fn loads_values_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prompted.toml");
        let mut f = fs::File::create(&path).unwrap();
        writeln!(f, "[history]\nmax_depth = 32\n\n[search]\nwrap = false").unwrap();

        let config = load_from(Some(path)).unwrap();
        assert_eq!(config.history.max_depth, 32);
        assert!(!config.search.wrap);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prompted.toml");
        fs::write(&path, "[search]\nwrap = false\n").unwrap();

        let config = load_from(Some(path)).unwrap();
        assert_eq!(config.history.max_depth, 200);
        assert!(!config.search.wrap);
    }

    #[test]
    fn parse_error_degrades_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prompted.toml");
        fs::write(&path, "[history\nmax_depth = oops").unwrap();

        let config = load_from(Some(path)).unwrap();
        assert_eq!(config.history.max_depth, 200);
        assert!(config.search.wrap);
    }
}
