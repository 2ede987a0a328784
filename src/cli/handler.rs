use super::error;
use super::output;
use super::{Commands, ConfigAction};
use crate::app::config::Config;
use crate::file::error::GenerateError;
use crate::file::generator::{verify_document, CollisionPolicy};
use anyhow::Result;
use std::path::PathBuf;

/// Handle a CLI command and return exit code
pub fn handle_command(command: Commands, config: &Config) -> i32 {
    let result = match command {
        Commands::Generate { output_dir, on_collision, json } => {
            handle_generate(config, output_dir, on_collision, json)
        }
        Commands::Verify { file, json } => handle_verify(file, json),
        Commands::Config { action } => handle_config(action, config),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", error_line(&e));
            error::ERROR
        }
    }
}

/// Render an error the way the host reports it on stderr
pub fn error_line(e: &dyn std::fmt::Display) -> String {
    format!("Error: {}", e)
}

/// Generate a document; flags override configured values
fn handle_generate(
    config: &Config,
    output_dir: Option<PathBuf>,
    on_collision: Option<CollisionPolicy>,
    json: bool,
) -> Result<i32> {
    let mut generator = config.generator();
    if let Some(dir) = output_dir {
        generator = generator.with_output_dir(dir);
    }
    if let Some(policy) = on_collision {
        generator = generator.with_collision_policy(policy);
    }

    let generated = generator.generate()?;
    println!("{}", output::format_generated(&generated, json));

    Ok(error::SUCCESS)
}

fn handle_verify(file: PathBuf, json: bool) -> Result<i32> {
    match verify_document(&file) {
        Ok(verification) => {
            println!("{}", output::format_verification(&verification, json));
            if verification.is_valid() {
                Ok(error::SUCCESS)
            } else {
                Ok(error::INVALID_INPUT)
            }
        }
        Err(e) if e.is_not_found() => {
            eprintln!("{}", error_line(&e));
            Ok(error::NOT_FOUND)
        }
        Err(e @ (GenerateError::InvalidFilename(_) | GenerateError::MissingTimestamp(_))) => {
            eprintln!("{}", error_line(&e));
            Ok(error::INVALID_INPUT)
        }
        Err(e) => Err(e.into()),
    }
}

fn handle_config(action: ConfigAction, config: &Config) -> Result<i32> {
    match action {
        ConfigAction::Show { json } => {
            println!("{}", output::format_config(config, json)?);
            Ok(error::SUCCESS)
        }
        ConfigAction::Path => {
            let path = crate::util::paths::get_app_config_path()?;
            println!("{}", path.display());
            Ok(error::SUCCESS)
        }
        ConfigAction::Init { force } => {
            let path = crate::util::paths::get_app_config_path()?;
            if path.exists() && !force {
                eprintln!("Config already exists at {} (use --force to replace)", path.display());
                return Ok(error::INVALID_INPUT);
            }
            let saved = Config::default().save()?;
            println!("Wrote default config to {}", saved.display());
            Ok(error::SUCCESS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_failure_error_line() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        let err = handle_generate(&Config::default(), Some(missing.clone()), None, false)
            .unwrap_err();
        let line = error_line(&err);

        assert!(line.starts_with("Error: Could not create file"), "{line}");
        assert!(line.contains("hello_world_"), "{line}");
        assert!(!missing.exists());
    }

    #[test]
    fn test_verify_error_line() {
        let err = GenerateError::InvalidFilename("notes.md".to_string());
        assert_eq!(
            error_line(&err),
            "Error: Not a generated document filename: notes.md"
        );
    }
}
