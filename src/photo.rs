use std::path::PathBuf;

use anyhow::anyhow;

/// A photo picked from the local gallery. Dimensions are probed up front so
/// layout code can reason about aspect ratios without decoding pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl Photo {
    pub fn from_path(path: PathBuf) -> anyhow::Result<Self> {
        let size = imagesize::size(&path)
            .map_err(|err| anyhow!("Failed to read dimensions of {}: {}", path.display(), err))?;

        Ok(Self {
            path,
            width: size.width as u32,
            height: size.height as u32,
        })
    }

    pub fn file_name(&self) -> &str {
        match self.path.file_name() {
            Some(file_name) => file_name.to_str().unwrap_or("Unknown"),
            None => "Unknown",
        }
    }

    pub fn uri(&self) -> String {
        format!("file://{}", self.path.display())
    }
}
