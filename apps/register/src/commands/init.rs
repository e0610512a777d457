//! # Init Command

use std::path::PathBuf;

use crate::config::RegisterConfig;
use crate::error::{RegisterError, RegisterResult};

/// Writes the default configuration and returns a confirmation line.
pub fn run(config_path: Option<PathBuf>, force: bool) -> RegisterResult<String> {
    let path = RegisterConfig::resolve_path(config_path).ok_or_else(|| {
        RegisterError::Config("no config directory available; pass --config".into())
    })?;

    RegisterConfig::default().save(&path, force)?;

    Ok(format!("Wrote {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = std::env::temp_dir().join(format!("till-init-test-{}", std::process::id()));
        let path = dir.join("register.toml");
        let _ = std::fs::remove_dir_all(&dir);

        let out = run(Some(path.clone()), false).unwrap();
        assert!(out.starts_with("Wrote "));

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(RegisterConfig::from_toml_str(&contents).is_ok());

        assert!(run(Some(path), false).is_err());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
