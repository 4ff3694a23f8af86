use std::path::PathBuf;

use strum::IntoEnumIterator;
use strum_macros::EnumIter;

const SUBDIR: &str = "collage_rs";

#[derive(Debug, EnumIter)]
pub enum Dirs {
    Config,
    Exports,
}

impl Dirs {
    pub fn path(&self) -> PathBuf {
        match *self {
            Dirs::Config => dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(SUBDIR),
            Dirs::Exports => dirs::picture_dir()
                .or_else(dirs::home_dir)
                .unwrap_or_else(|| PathBuf::from("."))
                .join("Collages"),
        }
    }

    pub fn initialize_dirs() -> anyhow::Result<()> {
        for dir in Dirs::iter() {
            let path = dir.path();
            if !path.exists() {
                std::fs::create_dir_all(path)?;
            }
        }
        Ok(())
    }
}
