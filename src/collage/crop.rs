use egui::Vec2;

use crate::catalog::AspectRatio;
use crate::photo::Photo;

/// Largest inset a single edge may reach, as a fraction of the container
/// extent on that edge's axis.
pub const MAX_INSET_RATIO: f32 = 0.4;
/// Fraction of the container extent the crop window nominally occupies.
pub const VISIBLE_WINDOW_RATIO: f32 = 0.8;
/// The crop window may never shrink below this many layout units on either
/// axis.
pub const MIN_VISIBLE_EXTENT: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropEdge {
    Top,
    Bottom,
    Left,
    Right,
}

impl CropEdge {
    pub const ALL: [CropEdge; 4] = [
        CropEdge::Top,
        CropEdge::Bottom,
        CropEdge::Left,
        CropEdge::Right,
    ];

    pub fn opposite(&self) -> CropEdge {
        match self {
            CropEdge::Top => CropEdge::Bottom,
            CropEdge::Bottom => CropEdge::Top,
            CropEdge::Left => CropEdge::Right,
            CropEdge::Right => CropEdge::Left,
        }
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, CropEdge::Left | CropEdge::Right)
    }

    /// Maps a pointer displacement onto the inset axis. Top and left grow
    /// against the pointer direction, bottom and right grow with it.
    fn signed_displacement(&self, delta: Vec2) -> f32 {
        match self {
            CropEdge::Top => -delta.y,
            CropEdge::Bottom => delta.y,
            CropEdge::Left => -delta.x,
            CropEdge::Right => delta.x,
        }
    }
}

/// Extents of the crop container the insets are measured against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropBounds {
    pub width: f32,
    pub height: f32,
}

impl CropBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    fn extent(&self, edge: CropEdge) -> f32 {
        if edge.is_horizontal() {
            self.width
        } else {
            self.height
        }
    }

    pub fn max_inset(&self, edge: CropEdge) -> f32 {
        self.extent(edge) * MAX_INSET_RATIO
    }

    /// Largest allowed sum of an opposite edge pair before the visible window
    /// would drop under the minimum size.
    pub fn pair_limit(&self, edge: CropEdge) -> f32 {
        self.extent(edge) * VISIBLE_WINDOW_RATIO - MIN_VISIBLE_EXTENT
    }
}

/// Non-negative inset distances pulled in from each container edge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CropInsets {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl CropInsets {
    pub const ZERO: CropInsets = CropInsets {
        top: 0.0,
        bottom: 0.0,
        left: 0.0,
        right: 0.0,
    };

    pub fn get(&self, edge: CropEdge) -> f32 {
        match edge {
            CropEdge::Top => self.top,
            CropEdge::Bottom => self.bottom,
            CropEdge::Left => self.left,
            CropEdge::Right => self.right,
        }
    }

    fn set(&mut self, edge: CropEdge, value: f32) {
        match edge {
            CropEdge::Top => self.top = value,
            CropEdge::Bottom => self.bottom = value,
            CropEdge::Left => self.left = value,
            CropEdge::Right => self.right = value,
        }
    }

    /// Applies one drag-move event to a single edge.
    ///
    /// The proposed inset is clamped to `[0, max_inset]`, then rejected
    /// outright when the opposite pair would squeeze the visible window below
    /// its floor. Returns whether the state changed; a rejection leaves every
    /// field untouched.
    pub fn apply_drag(&mut self, edge: CropEdge, delta: Vec2, bounds: &CropBounds) -> bool {
        let proposed = (self.get(edge) + edge.signed_displacement(delta))
            .clamp(0.0, bounds.max_inset(edge));

        if self.get(edge.opposite()) + proposed > bounds.pair_limit(edge) {
            return false;
        }

        self.set(edge, proposed);
        true
    }
}

/// One image pending placement into a slot, together with its crop state.
/// Created when the picker returns an image and discarded on confirm or
/// cancel; the insets are preview-only and never outlive the session.
#[derive(Debug, Clone)]
pub struct CropSession {
    pub photo: Photo,
    pub slot: usize,
    ratio: AspectRatio,
    pub insets: CropInsets,
    dragging: Option<CropEdge>,
}

impl CropSession {
    pub fn new(photo: Photo, slot: usize) -> Self {
        Self {
            photo,
            slot,
            ratio: AspectRatio::Free,
            insets: CropInsets::ZERO,
            dragging: None,
        }
    }

    pub fn ratio(&self) -> AspectRatio {
        self.ratio
    }

    /// Any ratio selection resets the insets, in both directions: picking a
    /// fixed ratio discards the free crop, and returning to free starts from
    /// an uncropped window again.
    pub fn select_ratio(&mut self, ratio: AspectRatio) {
        self.ratio = ratio;
        self.insets = CropInsets::ZERO;
        self.dragging = None;
    }

    pub fn free_crop_enabled(&self) -> bool {
        self.ratio.ratio().is_none()
    }

    pub fn begin_drag(&mut self, edge: CropEdge) {
        if self.free_crop_enabled() {
            self.dragging = Some(edge);
        }
    }

    pub fn drag_by(&mut self, delta: Vec2, bounds: &CropBounds) -> bool {
        match self.dragging {
            Some(edge) if self.free_crop_enabled() => self.insets.apply_drag(edge, delta, bounds),
            _ => false,
        }
    }

    pub fn end_drag(&mut self) {
        self.dragging = None;
    }

    pub fn dragging(&self) -> Option<CropEdge> {
        self.dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> CropBounds {
        CropBounds::new(400.0, 300.0)
    }

    #[test]
    fn test_top_drag_toward_pointer_origin_increases_inset() {
        let mut insets = CropInsets::ZERO;

        let changed = insets.apply_drag(CropEdge::Top, Vec2::new(0.0, -10.0), &bounds());

        assert!(changed);
        assert_eq!(insets.top, 10.0);
        assert_eq!(insets.bottom, 0.0);
    }

    #[test]
    fn test_bottom_and_right_follow_pointer_direction() {
        let mut insets = CropInsets::ZERO;

        insets.apply_drag(CropEdge::Bottom, Vec2::new(0.0, 12.0), &bounds());
        insets.apply_drag(CropEdge::Right, Vec2::new(8.0, 0.0), &bounds());

        assert_eq!(insets.bottom, 12.0);
        assert_eq!(insets.right, 8.0);
    }

    #[test]
    fn test_inset_never_goes_negative() {
        let mut insets = CropInsets::ZERO;

        let changed = insets.apply_drag(CropEdge::Top, Vec2::new(0.0, 25.0), &bounds());

        assert!(changed);
        assert_eq!(insets.top, 0.0);
    }

    #[test]
    fn test_overlong_drag_clamps_to_exact_max_inset() {
        let mut insets = CropInsets::ZERO;
        let max = bounds().max_inset(CropEdge::Top);

        insets.apply_drag(CropEdge::Top, Vec2::new(0.0, -10_000.0), &bounds());

        assert_eq!(insets.top, max);
        assert_eq!(insets.top, 300.0 * MAX_INSET_RATIO);
    }

    #[test]
    fn test_pair_floor_rejects_and_leaves_state_unchanged() {
        let bounds = CropBounds::new(400.0, 300.0);
        let mut insets = CropInsets::ZERO;

        // Push bottom to its cap, then walk top up until the pair limit bites.
        insets.apply_drag(CropEdge::Bottom, Vec2::new(0.0, 10_000.0), &bounds);
        assert_eq!(insets.bottom, 120.0);

        let limit = bounds.pair_limit(CropEdge::Top);
        let accepted_top = limit - insets.bottom;
        assert!(insets.apply_drag(CropEdge::Top, Vec2::new(0.0, -accepted_top), &bounds));
        assert_eq!(insets.top, accepted_top);

        let before = insets;
        let changed = insets.apply_drag(CropEdge::Top, Vec2::new(0.0, -5.0), &bounds);

        assert!(!changed);
        assert_eq!(insets, before);
    }

    #[test]
    fn test_random_drag_sequence_preserves_invariants() {
        use rand::Rng;

        let bounds = CropBounds::new(420.0, 360.0);
        let mut rng = rand::rng();
        let mut insets = CropInsets::ZERO;

        for _ in 0..1000 {
            let edge = CropEdge::ALL[rng.random_range(0..4)];
            let delta = Vec2::new(rng.random_range(-60.0..60.0), rng.random_range(-60.0..60.0));
            insets.apply_drag(edge, delta, &bounds);

            for edge in CropEdge::ALL {
                assert!(insets.get(edge) >= 0.0);
                assert!(insets.get(edge) <= bounds.max_inset(edge) + f32::EPSILON);
            }
            assert!(insets.top + insets.bottom <= bounds.pair_limit(CropEdge::Top) + f32::EPSILON);
            assert!(insets.left + insets.right <= bounds.pair_limit(CropEdge::Left) + f32::EPSILON);
        }
    }

    fn session() -> CropSession {
        CropSession::new(
            Photo {
                path: "/photos/a.jpg".into(),
                width: 640,
                height: 480,
            },
            0,
        )
    }

    #[test]
    fn test_selecting_fixed_ratio_resets_insets_and_disables_dragging() {
        let mut session = session();
        session.begin_drag(CropEdge::Left);
        session.drag_by(Vec2::new(-30.0, 0.0), &bounds());
        session.end_drag();
        assert_eq!(session.insets.left, 30.0);

        session.select_ratio(AspectRatio::Square);

        assert_eq!(session.insets, CropInsets::ZERO);
        session.begin_drag(CropEdge::Left);
        assert!(!session.drag_by(Vec2::new(-30.0, 0.0), &bounds()));
        assert_eq!(session.insets, CropInsets::ZERO);
    }

    #[test]
    fn test_switching_back_to_free_resets_insets() {
        let mut session = session();
        session.select_ratio(AspectRatio::SixteenNine);

        session.select_ratio(AspectRatio::Free);

        assert_eq!(session.insets, CropInsets::ZERO);
        session.begin_drag(CropEdge::Top);
        assert!(session.drag_by(Vec2::new(0.0, -5.0), &bounds()));
        assert_eq!(session.insets.top, 5.0);
    }

    #[test]
    fn test_drag_outside_a_session_is_ignored() {
        let mut session = session();

        assert!(!session.drag_by(Vec2::new(0.0, -5.0), &bounds()));
        assert_eq!(session.insets, CropInsets::ZERO);
    }
}
