use crate::file::generator::{CollisionPolicy, FileGenerator};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration (saved to config/settings.toml)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory documents are written to; current directory when unset
    #[serde(default)]
    pub directory: Option<PathBuf>,
    #[serde(default)]
    pub on_collision: CollisionPolicy,
    #[serde(default = "default_sync_to_disk")]
    pub sync_to_disk: bool,
}

fn default_sync_to_disk() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: None,
            on_collision: CollisionPolicy::default(),
            sync_to_disk: default_sync_to_disk(),
        }
    }
}

impl Config {
    /// Load configuration from settings.toml in the config directory
    pub fn load() -> anyhow::Result<Self> {
        let config_path = crate::util::paths::get_app_config_path()?;
        Self::load_from(&config_path)
    }

    /// Save configuration to settings.toml in the config directory
    pub fn save(&self) -> anyhow::Result<PathBuf> {
        let config_path = crate::util::paths::get_app_config_path()?;
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    /// Load from an explicit path; a missing file yields defaults
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .context(format!("Failed to read {:?}", path))?;
            let config: Config = toml::from_str(&content)
                .context(format!("Failed to parse {:?}", path))?;
            tracing::debug!("Loaded config from {:?}", path);
            Ok(config)
        } else {
            tracing::info!("Config not found at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Save to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;

        // Atomic write using temp file + rename
        let temp_path = path.with_extension("toml.tmp");
        std::fs::write(&temp_path, &content)
            .context("Failed to write temp config file")?;
        std::fs::rename(&temp_path, path)
            .context("Failed to rename temp config file")?;

        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Build a generator that follows this configuration
    pub fn generator(&self) -> FileGenerator {
        let generator = FileGenerator::new()
            .with_collision_policy(self.output.on_collision)
            .with_sync(self.output.sync_to_disk);
        match &self.output.directory {
            Some(dir) => generator.with_output_dir(dir),
            None => generator,
        }
    }
}
