use std::{fmt, io, path::PathBuf};

mod loader;
mod paths;

use loader::ConfigLoader;
use paths::ConfigPaths;

pub const DEFAULT_PROMPT: &str = "myShell> ";

/// Settings read from the rc file.
#[derive(Debug, Clone)]
pub struct Config {
    pub prompt: String,
    pub color: bool,
    /// Program the fallback path hands unknown lines to.
    pub interpreter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: DEFAULT_PROMPT.to_string(),
            color: true,
            interpreter: None,
        }
    }
}

impl Config {
    /// Loads `explicit` if given, otherwise `~/.myshellrc` when it exists.
    pub fn load(explicit: Option<&str>) -> Result<Self, ConfigError> {
        let paths = ConfigPaths::new(explicit);
        let mut config = Config::default();
        ConfigLoader::new(&paths).load_config(&mut config)?;
        Ok(config)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, io::Error),
    Malformed(usize, String),
    UnknownKey(usize, String),
    InvalidValue(usize, String, String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "{}: {}", path.display(), e),
            ConfigError::Malformed(line, text) => {
                write!(f, "line {}: expected key = value, got '{}'", line, text)
            }
            ConfigError::UnknownKey(line, key) => write!(f, "line {}: unknown key '{}'", line, key),
            ConfigError::InvalidValue(line, key, value) => {
                write!(f, "line {}: invalid value '{}' for '{}'", line, value, key)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::test_support::scratch_dir;
    use std::fs;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.prompt, "myShell> ");
        assert!(config.color);
        assert!(config.interpreter.is_none());
    }

    #[test]
    fn test_load_explicit() {
        let dir = scratch_dir("config-load");
        let rc = dir.join("rc");
        fs::write(&rc, "color = false\n").unwrap();

        let config = Config::load(rc.to_str()).unwrap();
        assert!(!config.color);
        assert_eq!(config.prompt, DEFAULT_PROMPT);
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::UnknownKey(3, "foo".to_string());
        assert_eq!(err.to_string(), "line 3: unknown key 'foo'");
    }
}
