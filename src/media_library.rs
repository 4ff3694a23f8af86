use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::info;

use crate::config::Config;
use crate::dependencies::{Dependency, SingletonFor};
use crate::dirs::Dirs;
use crate::gallery_service::PermissionStatus;

/// Where exported collages end up. Split out as a trait so the export flow
/// can be exercised without touching the real filesystem.
pub trait MediaStore: Send + Sync {
    fn request_permission(&self) -> PermissionStatus;
    fn save(&self, bitmap: &Path) -> anyhow::Result<PathBuf>;
}

/// Saves into the user's pictures directory, or the directory configured as
/// the export override.
pub struct LocalMediaLibrary;

impl LocalMediaLibrary {
    fn target_dir(&self) -> PathBuf {
        Dependency::<Config>::get()
            .with_lock(|config| config.export_dir().map(Path::to_path_buf))
            .unwrap_or_else(|| Dirs::Exports.path())
    }
}

impl MediaStore for LocalMediaLibrary {
    /// Write access to the export directory is the closest desktop analog of
    /// a media library permission.
    fn request_permission(&self) -> PermissionStatus {
        match fs::create_dir_all(self.target_dir()) {
            Ok(()) => PermissionStatus::Granted,
            Err(_) => PermissionStatus::Denied,
        }
    }

    fn save(&self, bitmap: &Path) -> anyhow::Result<PathBuf> {
        let dir = self.target_dir();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;

        let extension = bitmap
            .extension()
            .and_then(|extension| extension.to_str())
            .unwrap_or("png");
        let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");

        let mut target = dir.join(format!("collage-{}.{}", stamp, extension));
        let mut attempt = 1;
        while target.exists() {
            target = dir.join(format!("collage-{}-{}.{}", stamp, attempt, extension));
            attempt += 1;
        }

        fs::copy(bitmap, &target)
            .with_context(|| format!("Failed to copy capture to {}", target.display()))?;
        info!("Saved collage to {}", target.display());

        Ok(target)
    }
}
