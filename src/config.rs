use std::{
    fs::File,
    io::{Read, Write},
    path::{Path, PathBuf},
};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::dirs::Dirs;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML deserialization error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    export_dir: Option<PathBuf>,
    last_layout: Option<String>,
}

impl Config {
    pub fn load() -> Result<Config, ConfigError> {
        let config_path = Dirs::Config.path().join("config.toml");
        if config_path.exists() {
            let mut file = File::open(config_path)?;
            let mut buf = String::new();
            file.read_to_string(&mut buf)?;
            let config: Config = toml::from_str(&buf)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn load_or_default() -> Config {
        match Config::load() {
            Ok(config) => config,
            Err(err) => {
                warn!("Failed to load config, starting fresh: {}", err);
                Config::default()
            }
        }
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Dirs::Config.path().join("config.toml");
        let mut file = File::create(config_path)?;
        file.write_all(toml::to_string(self)?.as_bytes())?;
        Ok(())
    }

    pub fn export_dir(&self) -> Option<&Path> {
        self.export_dir.as_deref()
    }

    pub fn last_layout(&self) -> Option<&str> {
        self.last_layout.as_deref()
    }

    pub fn remember_layout(&mut self, layout_id: &str) {
        self.last_layout = Some(layout_id.to_string());
        if let Err(err) = self.save() {
            warn!("Failed to persist config: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = Config {
            export_dir: Some(PathBuf::from("/exports")),
            last_layout: Some("grid-14".to_string()),
        };

        let serialized = toml::to_string(&config).unwrap();
        let restored: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(restored.export_dir(), Some(Path::new("/exports")));
        assert_eq!(restored.last_layout(), Some("grid-14"));
    }

    #[test]
    fn test_empty_config_parses_to_defaults() {
        let restored: Config = toml::from_str("").unwrap();

        assert!(restored.export_dir().is_none());
        assert!(restored.last_layout().is_none());
    }
}
