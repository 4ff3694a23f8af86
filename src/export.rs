use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use log::info;

use crate::collage::session::{CollageSnapshot, SharedSession};
use crate::gallery_service::PermissionStatus;
use crate::media_library::MediaStore;

/// Grace period between entering download mode and capturing, so the
/// chrome-free layout has a rendered frame behind it.
pub const SETTLE_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureFormat {
    Png,
    Jpeg,
}

#[derive(Debug, Clone)]
pub struct CaptureOptions {
    pub format: CaptureFormat,
    pub quality: u8,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            format: CaptureFormat::Png,
            quality: 100,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("Collage snapshot is missing a slot image")]
    MissingSlotImage(usize),
    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error(transparent)]
    InvalidBuffer(#[from] fast_image_resize::ImageBufferError),
    #[error(transparent)]
    Resize(#[from] fast_image_resize::ResizeError),
    #[error("Failed to encode capture: {0}")]
    Encode(#[source] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Capture task failed: {0}")]
    TaskFailed(String),
}

/// Turns a collage snapshot into a bitmap file and returns its location.
pub trait CaptureService: Send + Sync {
    fn capture(
        &self,
        snapshot: &CollageSnapshot,
        options: &CaptureOptions,
    ) -> Result<PathBuf, CaptureError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Please add images to all containers before downloading")]
    IncompleteCollage,
    #[error("Permission to access the media library is required to save the collage")]
    PermissionDenied,
    #[error("An export is already running")]
    InProgress,
    #[error(transparent)]
    Capture(#[from] CaptureError),
    #[error("Failed to save the collage: {0}")]
    Persist(#[source] anyhow::Error),
}

pub struct Exporter {
    capture: Arc<dyn CaptureService>,
    media: Arc<dyn MediaStore>,
    options: CaptureOptions,
}

impl Exporter {
    pub fn new(capture: Arc<dyn CaptureService>, media: Arc<dyn MediaStore>) -> Self {
        Self {
            capture,
            media,
            options: CaptureOptions::default(),
        }
    }

    /// Captures the current collage and persists it to the media store.
    ///
    /// The completeness check runs before any permission work so an
    /// incomplete collage never triggers a permission prompt. Download mode
    /// and the in-flight guard are reset on every exit path.
    pub async fn export(&self, session: &SharedSession) -> Result<PathBuf, ExportError> {
        let snapshot = {
            let mut guard = session.lock().unwrap();
            if guard.export_in_flight {
                return Err(ExportError::InProgress);
            }
            let snapshot = guard.snapshot().ok_or(ExportError::IncompleteCollage)?;
            guard.export_in_flight = true;
            snapshot
        };
        let _reset = FlagReset {
            session: Arc::clone(session),
        };

        if self.media.request_permission() == PermissionStatus::Denied {
            return Err(ExportError::PermissionDenied);
        }

        session.lock().unwrap().download_mode = true;
        tokio::time::sleep(SETTLE_DELAY).await;

        let capture = Arc::clone(&self.capture);
        let options = self.options.clone();
        let captured = tokio::task::spawn_blocking(move || capture.capture(&snapshot, &options))
            .await
            .map_err(|err| CaptureError::TaskFailed(err.to_string()))??;

        let saved = self.media.save(&captured).map_err(ExportError::Persist)?;
        info!("Export finished: {}", saved.display());
        Ok(saved)
    }
}

struct FlagReset {
    session: SharedSession,
}

impl Drop for FlagReset {
    fn drop(&mut self) {
        if let Ok(mut guard) = self.session.lock() {
            guard.download_mode = false;
            guard.export_in_flight = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::layout_by_id;
    use crate::collage::session::CollageSession;
    use crate::photo::Photo;
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct RecordingCapture {
        calls: AtomicUsize,
        download_mode_at_capture: Mutex<Option<bool>>,
        session: Mutex<Option<SharedSession>>,
    }

    impl RecordingCapture {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                download_mode_at_capture: Mutex::new(None),
                session: Mutex::new(None),
            })
        }

        fn observe(&self, session: &SharedSession) {
            *self.session.lock().unwrap() = Some(Arc::clone(session));
        }
    }

    impl CaptureService for RecordingCapture {
        fn capture(
            &self,
            _snapshot: &CollageSnapshot,
            _options: &CaptureOptions,
        ) -> Result<PathBuf, CaptureError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(session) = self.session.lock().unwrap().as_ref() {
                *self.download_mode_at_capture.lock().unwrap() =
                    Some(session.lock().unwrap().download_mode);
            }
            Ok(PathBuf::from("/tmp/collage-capture-test.png"))
        }
    }

    struct CountingMediaStore {
        permission_calls: AtomicUsize,
        save_calls: AtomicUsize,
        deny: bool,
    }

    impl CountingMediaStore {
        fn new(deny: bool) -> Arc<Self> {
            Arc::new(Self {
                permission_calls: AtomicUsize::new(0),
                save_calls: AtomicUsize::new(0),
                deny,
            })
        }
    }

    impl MediaStore for CountingMediaStore {
        fn request_permission(&self) -> PermissionStatus {
            self.permission_calls.fetch_add(1, Ordering::SeqCst);
            if self.deny {
                PermissionStatus::Denied
            } else {
                PermissionStatus::Granted
            }
        }

        fn save(&self, bitmap: &Path) -> anyhow::Result<PathBuf> {
            self.save_calls.fetch_add(1, Ordering::SeqCst);
            Ok(bitmap.to_path_buf())
        }
    }

    fn photo(name: &str) -> Photo {
        Photo {
            path: format!("/photos/{name}").into(),
            width: 320,
            height: 240,
        }
    }

    fn complete_session(layout_id: &str) -> SharedSession {
        let session = CollageSession::shared(layout_by_id(layout_id).unwrap().clone());
        {
            let mut guard = session.lock().unwrap();
            for slot in 0..guard.slots().len() {
                guard.begin_crop(photo(&format!("{slot}.jpg")), slot);
                guard.confirm_crop();
            }
        }
        session
    }

    #[tokio::test]
    async fn test_incomplete_collage_never_requests_permission() {
        let capture = RecordingCapture::new();
        let media = CountingMediaStore::new(false);
        let exporter = Exporter::new(capture.clone(), media.clone());

        let session = CollageSession::shared(layout_by_id("grid-5").unwrap().clone());
        session.lock().unwrap().begin_crop(photo("only.jpg"), 0);
        session.lock().unwrap().confirm_crop();

        let result = exporter.export(&session).await;

        assert!(matches!(result, Err(ExportError::IncompleteCollage)));
        assert_eq!(media.permission_calls.load(Ordering::SeqCst), 0);
        assert_eq!(capture.calls.load(Ordering::SeqCst), 0);
        assert!(!session.lock().unwrap().export_in_flight);
    }

    #[tokio::test]
    async fn test_denied_permission_aborts_before_capture() {
        let capture = RecordingCapture::new();
        let media = CountingMediaStore::new(true);
        let exporter = Exporter::new(capture.clone(), media.clone());
        let session = complete_session("grid-2");

        let result = exporter.export(&session).await;

        assert!(matches!(result, Err(ExportError::PermissionDenied)));
        assert_eq!(media.permission_calls.load(Ordering::SeqCst), 1);
        assert_eq!(capture.calls.load(Ordering::SeqCst), 0);

        let guard = session.lock().unwrap();
        assert!(!guard.download_mode);
        assert!(!guard.export_in_flight);
    }

    #[tokio::test]
    async fn test_top_heavy_export_toggles_download_mode_and_persists() {
        let capture = RecordingCapture::new();
        let media = CountingMediaStore::new(false);
        let exporter = Exporter::new(capture.clone(), media.clone());

        let session = complete_session("grid-14");
        assert_eq!(session.lock().unwrap().slots().len(), 4);
        assert!(!session.lock().unwrap().download_mode);
        capture.observe(&session);

        let saved = exporter.export(&session).await.expect("export succeeds");

        assert_eq!(saved, PathBuf::from("/tmp/collage-capture-test.png"));
        assert_eq!(
            *capture.download_mode_at_capture.lock().unwrap(),
            Some(true),
            "capture must run while download mode is on"
        );
        assert_eq!(media.save_calls.load(Ordering::SeqCst), 1);

        let guard = session.lock().unwrap();
        assert!(!guard.download_mode);
        assert!(!guard.export_in_flight);
    }

    #[tokio::test]
    async fn test_second_export_while_one_is_pending_is_rejected() {
        let capture = RecordingCapture::new();
        let media = CountingMediaStore::new(false);
        let exporter = Exporter::new(capture.clone(), media.clone());
        let session = complete_session("grid-2");

        session.lock().unwrap().export_in_flight = true;
        let result = exporter.export(&session).await;

        assert!(matches!(result, Err(ExportError::InProgress)));
        assert_eq!(media.permission_calls.load(Ordering::SeqCst), 0);
        // The pending export still owns the flag.
        assert!(session.lock().unwrap().export_in_flight);
    }

    #[tokio::test]
    async fn test_capture_failure_still_resets_download_mode() {
        struct FailingCapture;
        impl CaptureService for FailingCapture {
            fn capture(
                &self,
                _snapshot: &CollageSnapshot,
                _options: &CaptureOptions,
            ) -> Result<PathBuf, CaptureError> {
                Err(CaptureError::TaskFailed("boom".to_string()))
            }
        }

        let media = CountingMediaStore::new(false);
        let exporter = Exporter::new(Arc::new(FailingCapture), media.clone());
        let session = complete_session("grid-2");

        let result = exporter.export(&session).await;

        assert!(matches!(result, Err(ExportError::Capture(_))));
        assert_eq!(media.save_calls.load(Ordering::SeqCst), 0);

        let guard = session.lock().unwrap();
        assert!(!guard.download_mode);
        assert!(!guard.export_in_flight);
    }
}
