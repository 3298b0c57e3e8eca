use super::Config;
use anyhow::{Context, Result};
use directories::UserDirs;
use std::fs;
use std::path::{Path, PathBuf};

impl Config {
    /// `~/.journey-drafter/config.toml`, when a home directory exists.
    pub fn default_config_path() -> Option<PathBuf> {
        UserDirs::new().map(|u| u.home_dir().join(".journey-drafter").join("config.toml"))
    }

    /// Resolve and read the config file, then layer environment overrides.
    ///
    /// Lookup order: `explicit` (from `--config`), `JOURNEY_DRAFTER_CONFIG`,
    /// then the default path. The first two must exist; the default path is
    /// optional and the built-in defaults apply without it.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let required = explicit.map(Path::to_path_buf).or_else(|| {
            std::env::var("JOURNEY_DRAFTER_CONFIG")
                .ok()
                .filter(|raw| !raw.trim().is_empty())
                .map(PathBuf::from)
        });

        let mut config = match required {
            Some(path) => Self::from_file(&path)?,
            None => match Self::default_config_path().filter(|path| path.exists()) {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };

        config
            .apply_env_overrides()
            .context("Failed to apply environment overrides")?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }
}
