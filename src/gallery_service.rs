use log::{error, info};
use native_dialog::DialogBuilder;

use crate::photo::Photo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Gallery access as the editing scenes see it: ask for permission, then ask
/// the user for one image. Denial and cancellation are both no-ops for the
/// caller.
pub trait ImagePicker {
    fn request_permission(&self) -> PermissionStatus;
    fn pick_image(&self) -> Option<Photo>;
}

/// Desktop picker backed by the native file dialog. The filesystem has no
/// gallery permission gate, so permission requests always succeed here; the
/// trait still carries the check so the flow matches platforms that do gate.
pub struct NativeImagePicker;

impl ImagePicker for NativeImagePicker {
    fn request_permission(&self) -> PermissionStatus {
        PermissionStatus::Granted
    }

    fn pick_image(&self) -> Option<Photo> {
        let picked = DialogBuilder::file()
            .set_title("Choose a photo")
            .add_filter("Images", ["png", "jpg", "jpeg"])
            .open_single_file()
            .show();

        match picked {
            Ok(Some(path)) => match Photo::from_path(path) {
                Ok(photo) => {
                    info!("Picked {}", photo.file_name());
                    Some(photo)
                }
                Err(err) => {
                    error!("Ignoring unreadable image: {}", err);
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                error!("File dialog failed: {}", err);
                None
            }
        }
    }
}
