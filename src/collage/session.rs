use std::sync::{Arc, Mutex};

use crate::catalog::LayoutDescriptor;
use crate::photo::Photo;

use super::crop::CropSession;
use super::slots::SlotAssignment;

/// Handle shared between the editing scene and a running export task. The UI
/// thread owns all mutation; the export task only reads a snapshot and
/// toggles the two transient flags.
pub type SharedSession = Arc<Mutex<CollageSession>>;

/// All state of one collage editing session. Nothing in here outlives the
/// editing screen.
#[derive(Debug)]
pub struct CollageSession {
    descriptor: LayoutDescriptor,
    slots: SlotAssignment,
    crop: Option<CropSession>,
    /// While set, the grid renders without decorative chrome so a capture
    /// contains photo content only.
    pub download_mode: bool,
    /// Guards against a second export racing a pending one.
    pub export_in_flight: bool,
}

/// Immutable copy of everything the capture pipeline needs, taken after the
/// completeness check so every slot is guaranteed filled.
#[derive(Debug, Clone)]
pub struct CollageSnapshot {
    pub descriptor: LayoutDescriptor,
    pub photos: Vec<Photo>,
}

impl CollageSession {
    pub fn new(descriptor: LayoutDescriptor) -> Self {
        let slots = SlotAssignment::for_layout(&descriptor);
        Self {
            descriptor,
            slots,
            crop: None,
            download_mode: false,
            export_in_flight: false,
        }
    }

    pub fn shared(descriptor: LayoutDescriptor) -> SharedSession {
        Arc::new(Mutex::new(Self::new(descriptor)))
    }

    pub fn descriptor(&self) -> &LayoutDescriptor {
        &self.descriptor
    }

    pub fn slots(&self) -> &SlotAssignment {
        &self.slots
    }

    /// Switching layouts drops every placed photo along with any pending
    /// crop.
    pub fn select_descriptor(&mut self, descriptor: LayoutDescriptor) {
        self.slots = SlotAssignment::for_layout(&descriptor);
        self.descriptor = descriptor;
        self.crop = None;
    }

    pub fn begin_crop(&mut self, photo: Photo, slot: usize) {
        self.crop = Some(CropSession::new(photo, slot));
    }

    pub fn crop(&self) -> Option<&CropSession> {
        self.crop.as_ref()
    }

    pub fn crop_mut(&mut self) -> Option<&mut CropSession> {
        self.crop.as_mut()
    }

    /// Dismissing the crop overlay leaves the slot assignment untouched.
    pub fn cancel_crop(&mut self) {
        self.crop = None;
    }

    /// Confirms the pending image into its slot. The crop insets are a
    /// preview adjustment and are discarded together with the session.
    pub fn confirm_crop(&mut self) {
        if let Some(crop) = self.crop.take() {
            self.slots.assign(crop.slot, crop.photo);
        }
    }

    pub fn snapshot(&self) -> Option<CollageSnapshot> {
        self.slots.filled().map(|photos| CollageSnapshot {
            descriptor: self.descriptor.clone(),
            photos,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::layout_by_id;

    fn photo(name: &str) -> Photo {
        Photo {
            path: format!("/photos/{name}").into(),
            width: 640,
            height: 480,
        }
    }

    #[test]
    fn test_confirm_crop_assigns_the_pending_photo() {
        let mut session = CollageSession::new(layout_by_id("grid-2").unwrap().clone());

        session.begin_crop(photo("a.jpg"), 1);
        session.confirm_crop();

        assert!(session.crop().is_none());
        assert!(session.slots().get(0).is_none());
        assert_eq!(session.slots().get(1), Some(&photo("a.jpg")));
    }

    #[test]
    fn test_cancel_crop_leaves_slots_untouched() {
        let mut session = CollageSession::new(layout_by_id("grid-2").unwrap().clone());
        session.begin_crop(photo("a.jpg"), 0);
        session.confirm_crop();

        session.begin_crop(photo("b.jpg"), 0);
        session.cancel_crop();

        assert_eq!(session.slots().get(0), Some(&photo("a.jpg")));
    }

    #[test]
    fn test_selecting_a_new_descriptor_clears_all_slots() {
        let mut session = CollageSession::new(layout_by_id("grid-2").unwrap().clone());
        session.begin_crop(photo("a.jpg"), 0);
        session.confirm_crop();

        session.select_descriptor(layout_by_id("grid-5").unwrap().clone());

        assert_eq!(session.slots().len(), 4);
        assert!((0..4).all(|slot| session.slots().get(slot).is_none()));
    }

    #[test]
    fn test_snapshot_requires_every_slot_filled() {
        let mut session = CollageSession::new(layout_by_id("grid-2").unwrap().clone());
        assert!(session.snapshot().is_none());

        session.begin_crop(photo("a.jpg"), 0);
        session.confirm_crop();
        assert!(session.snapshot().is_none());

        session.begin_crop(photo("b.jpg"), 1);
        session.confirm_crop();

        let snapshot = session.snapshot().expect("complete collage");
        assert_eq!(snapshot.photos.len(), 2);
        assert_eq!(snapshot.descriptor.id, "grid-2");
    }
}
