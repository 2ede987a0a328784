use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

const CONFIG_DIR_ENV: &str = "HELLOMD_CONFIG_DIR";
const APP_DIR_NAME: &str = "hellomd";

// Global config directory override (for --config flag and tests)
static CONFIG_DIR_OVERRIDE: RwLock<Option<PathBuf>> = RwLock::new(None);

/// Set config directory override (used by --config flag and tests)
pub fn set_config_dir_override(path: Option<PathBuf>) {
    let mut override_path = CONFIG_DIR_OVERRIDE
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    *override_path = path;
}

/// Get current config directory override
pub fn get_config_dir_override() -> Option<PathBuf> {
    CONFIG_DIR_OVERRIDE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Find config directory by searching in priority order:
/// 1. Override from --config flag or set_config_dir_override() (highest priority)
/// 2. Environment variable HELLOMD_CONFIG_DIR
/// 3. User config directory (`~/.config/hellomd/` on Unix, `%APPDATA%\hellomd\` on Windows)
/// 4. Current working directory (`./config/`)
///
/// The override is returned even if it does not exist yet, so `config init`
/// can create it. If nothing else is found, the user config directory is
/// created.
pub fn find_config_directory() -> Result<PathBuf> {
    if let Some(override_path) = get_config_dir_override() {
        tracing::debug!("Using config directory override: {:?}", override_path);
        return Ok(override_path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_DIR_ENV) {
        let env_config = PathBuf::from(env_path);
        if env_config.exists() {
            tracing::debug!("Found config directory from {}: {:?}", CONFIG_DIR_ENV, env_config);
            return Ok(env_config);
        }
        tracing::warn!("{} points to a missing directory: {:?}", CONFIG_DIR_ENV, env_config);
    }

    if let Ok(user_config) = get_user_config_dir() {
        if user_config.exists() {
            tracing::debug!("Found config directory at: {:?}", user_config);
            return Ok(user_config);
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        let cwd_config = cwd.join("config");
        if cwd_config.exists() {
            tracing::debug!("Found config directory at: {:?}", cwd_config);
            return Ok(cwd_config);
        }
    }

    let user_config = get_user_config_dir()?;
    std::fs::create_dir_all(&user_config)
        .context("Failed to create user config directory")?;
    tracing::info!("Created config directory at: {:?}", user_config);
    Ok(user_config)
}

/// Get platform-specific user config directory
/// - Windows: `%APPDATA%\hellomd`
/// - Unix: `~/.config/hellomd`
fn get_user_config_dir() -> Result<PathBuf> {
    let base_dir = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine user config directory"))?;
    Ok(base_dir.join(APP_DIR_NAME))
}

/// Get absolute path to settings.toml
pub fn get_app_config_path() -> Result<PathBuf> {
    let config_dir = find_config_directory()?;
    Ok(config_dir.join("settings.toml"))
}

/// Get absolute path to the logs directory
pub fn get_logs_dir() -> Result<PathBuf> {
    let config_dir = find_config_directory()?;
    Ok(config_dir.join(".logs"))
}

/// Logs directory, falling back to `<temp_dir>/hellomd/.logs` when the
/// config directory cannot be resolved
pub fn resolve_logs_dir() -> PathBuf {
    get_logs_dir().unwrap_or_else(|e| {
        let fallback = fallback_logs_dir();
        eprintln!("Could not resolve logs directory ({}), using {:?}", e, fallback);
        fallback
    })
}

fn fallback_logs_dir() -> PathBuf {
    std::env::temp_dir().join(APP_DIR_NAME).join(".logs")
}

/// Resolve a relative path against the current working directory.
///
/// Absolute paths are returned as-is.
pub fn resolve_relative_to_cwd(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}
