use std::{fs, io};

use super::{Config, ConfigError, ConfigPaths};

pub struct ConfigLoader<'a> {
    paths: &'a ConfigPaths,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(paths: &'a ConfigPaths) -> Self {
        Self { paths }
    }

    pub fn load_config(&self, config: &mut Config) -> Result<(), ConfigError> {
        let Some(path) = &self.paths.rc_path else {
            return Ok(());
        };

        match fs::read_to_string(path) {
            Ok(content) => {
                log::debug!("loading config from {}", path.display());
                self.apply(&content, config)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound && !self.paths.explicit => Ok(()),
            Err(e) => Err(ConfigError::Io(path.to_path_buf(), e)),
        }
    }

    pub fn apply(&self, content: &str, config: &mut Config) -> Result<(), ConfigError> {
        for (index, line) in content.lines().enumerate() {
            self.process_line(index + 1, line, config)?;
        }
        Ok(())
    }

    fn process_line(&self, line_no: usize, line: &str, config: &mut Config) -> Result<(), ConfigError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let (key, value) = line
            .split_once('=')
            .ok_or_else(|| ConfigError::Malformed(line_no, line.to_string()))?;
        let key = key.trim();
        let value = strip_quotes(value.trim());

        match key {
            "prompt" => config.prompt = value.to_string(),
            "color" => {
                config.color = value.parse().map_err(|_| {
                    ConfigError::InvalidValue(line_no, key.to_string(), value.to_string())
                })?
            }
            "interpreter" => {
                if value.is_empty() {
                    return Err(ConfigError::InvalidValue(
                        line_no,
                        key.to_string(),
                        value.to_string(),
                    ));
                }
                config.interpreter = Some(value.to_string());
            }
            _ => return Err(ConfigError::UnknownKey(line_no, key.to_string())),
        }
        Ok(())
    }
}

fn strip_quotes(value: &str) -> &str {
    let quoted = value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')));
    if quoted {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
