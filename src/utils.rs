use egui::{Pos2, Rect, Vec2};

pub trait RectExt {
    fn with_aspect_ratio(&self, aspect_ratio: f32) -> Rect;
    fn fit_and_center_within(&self, container: Rect) -> Rect;
    fn shrink_by_insets(&self, top: f32, bottom: f32, left: f32, right: f32) -> Rect;
}

impl RectExt for Rect {
    fn with_aspect_ratio(&self, aspect_ratio: f32) -> Rect {
        let width = self.width();
        let height = width / aspect_ratio;
        Rect::from_min_size(self.min, Vec2::new(width, height))
    }

    fn fit_and_center_within(&self, container: Rect) -> Rect {
        let scale = (container.width() / self.width())
            .min(container.height() / self.height())
            .min(1.0);
        let size = self.size() * scale;
        Rect::from_center_size(container.center(), size)
    }

    fn shrink_by_insets(&self, top: f32, bottom: f32, left: f32, right: f32) -> Rect {
        Rect::from_min_max(
            Pos2::new(self.min.x + left, self.min.y + top),
            Pos2::new(self.max.x - right, self.max.y - bottom),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_and_center_within_shrinks_oversized_rect() {
        let rect = Rect::from_min_size(Pos2::ZERO, Vec2::new(200.0, 100.0));
        let container = Rect::from_min_size(Pos2::ZERO, Vec2::new(100.0, 100.0));

        let fitted = rect.fit_and_center_within(container);

        assert_eq!(fitted.width(), 100.0);
        assert_eq!(fitted.height(), 50.0);
        assert_eq!(fitted.center(), container.center());
    }

    #[test]
    fn test_fit_and_center_within_never_grows() {
        let rect = Rect::from_min_size(Pos2::ZERO, Vec2::new(10.0, 10.0));
        let container = Rect::from_min_size(Pos2::ZERO, Vec2::new(100.0, 100.0));

        let fitted = rect.fit_and_center_within(container);

        assert_eq!(fitted.size(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_shrink_by_insets() {
        let rect = Rect::from_min_size(Pos2::ZERO, Vec2::new(100.0, 80.0));

        let shrunk = rect.shrink_by_insets(5.0, 10.0, 15.0, 20.0);

        assert_eq!(shrunk.min, Pos2::new(15.0, 5.0));
        assert_eq!(shrunk.max, Pos2::new(80.0, 70.0));
    }
}
