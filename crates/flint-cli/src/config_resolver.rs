//! Locating `flint.toml`.
//!
//! Priority: `--config`, then `flint.toml` or `.flint.toml` in the working
//! directory, then `config.toml` in `$FLINT_CONFIG_DIR` (default `~/.flint`),
//! then built-in defaults.

use anyhow::{Context, Result};
use flint_core::Config;
use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly specified via `--config` flag.
    Explicit(PathBuf),
    /// Found in the working directory.
    Project(PathBuf),
    /// Loaded from the global config directory (`~/.flint/`).
    Global(PathBuf),
    /// No config found; defaults will be used.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Picks the configuration for a run started in `project_dir`.
    ///
    /// An explicit path is taken as given. Otherwise the first existing file
    /// among `flint.toml`, `.flint.toml` and `config.toml` in the global
    /// directory wins.
    #[must_use]
    pub fn discover(project_dir: &Path, explicit: Option<&Path>) -> Self {
        Self::discover_in(project_dir, explicit, global_dir().as_deref())
    }

    fn discover_in(project_dir: &Path, explicit: Option<&Path>, global_dir: Option<&Path>) -> Self {
        if let Some(path) = explicit {
            return Self::Explicit(path.to_path_buf());
        }

        PROJECT_FILES
            .iter()
            .map(|name| Self::Project(project_dir.join(name)))
            .chain(global_dir.map(|dir| Self::Global(dir.join(GLOBAL_FILE))))
            .find(|source| source.path().is_some_and(Path::is_file))
            .inspect(|source| {
                if let Some(path) = source.path() {
                    tracing::debug!("Discovered config file: {}", path.display());
                }
            })
            .unwrap_or(Self::Default)
    }

    /// Loads the configuration this source points at.
    ///
    /// [`ConfigSource::Default`] yields an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, including an
    /// explicit path that does not exist.
    pub fn load(&self) -> Result<Config> {
        let Some(path) = self.path() else {
            return Ok(Config::default());
        };
        if matches!(self, Self::Global(_)) {
            tracing::info!("Using global config: {}", path.display());
        }
        Config::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))
    }
}

/// Project config files, in lookup order.
const PROJECT_FILES: [&str; 2] = ["flint.toml", ".flint.toml"];

/// File looked up inside the global directory.
const GLOBAL_FILE: &str = "config.toml";

/// `$FLINT_CONFIG_DIR` when set and non-empty, else `~/.flint`.
fn global_dir() -> Option<PathBuf> {
    std::env::var_os("FLINT_CONFIG_DIR")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|home| home.join(".flint")))
}
