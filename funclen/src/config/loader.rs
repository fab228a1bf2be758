use std::fs;
use std::path::Path;

use super::models::{Config, PyProject};

/// Name of the dedicated configuration file.
pub(super) const CONFIG_FILENAME: &str = ".funclen.toml";
/// Name of the shared Python project file.
pub(super) const PYPROJECT_FILENAME: &str = "pyproject.toml";

pub(super) fn load_from_path(path: &Path) -> Config {
    let mut current = path.to_path_buf();
    if current.is_file() {
        current.pop();
    }

    loop {
        let funclen_toml = current.join(CONFIG_FILENAME);
        if funclen_toml.exists() {
            if let Ok(content) = fs::read_to_string(&funclen_toml) {
                if let Ok(mut config) = toml::from_str::<Config>(&content) {
                    config.config_file_path = Some(funclen_toml);
                    return config;
                }
            }
        }

        let pyproject_toml = current.join(PYPROJECT_FILENAME);
        if pyproject_toml.exists() {
            if let Ok(content) = fs::read_to_string(&pyproject_toml) {
                if let Ok(pyproject) = toml::from_str::<PyProject>(&content) {
                    return Config {
                        funclen: pyproject.tool.funclen,
                        config_file_path: Some(pyproject_toml),
                    };
                }
            }
        }

        if !current.pop() {
            break;
        }
    }

    Config::default()
}
