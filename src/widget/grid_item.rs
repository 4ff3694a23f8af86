use egui::{Color32, CornerRadius, Response, Sense, Shape, Stroke, StrokeKind, Ui, Vec2};

use crate::catalog::LayoutDescriptor;
use crate::layout::{grid_cells, CellShape};
use crate::theme;

const OUTLINE_SEGMENTS: usize = 32;

/// Miniature preview of a layout descriptor for the catalog strips.
pub struct GridItem<'a> {
    descriptor: &'a LayoutDescriptor,
}

impl<'a> GridItem<'a> {
    pub fn new(descriptor: &'a LayoutDescriptor) -> Self {
        Self { descriptor }
    }

    pub fn show(&self, ui: &mut Ui, size: Vec2) -> Response {
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            ui.painter()
                .rect_filled(rect, CornerRadius::same(4), Color32::WHITE);

            let stroke = if response.hovered() {
                Stroke::new(1.5, theme::color::ACCENT)
            } else {
                Stroke::new(1.0, theme::color::MUTED)
            };

            for cell in grid_cells(self.descriptor, rect.shrink(6.0)) {
                match cell.shape {
                    CellShape::Rect => {
                        let inner = cell.rect.shrink(1.0);
                        ui.painter().rect_filled(
                            inner,
                            0.0,
                            theme::color::PREVIEW_BACKGROUND,
                        );
                        ui.painter()
                            .rect_stroke(inner, 0.0, stroke, StrokeKind::Inside);
                    }
                    _ => {
                        let outline = cell.shape.outline(cell.rect, OUTLINE_SEGMENTS);
                        ui.painter()
                            .add(Shape::closed_line(outline, stroke));
                    }
                }
            }

            if response.hovered() {
                ui.painter().rect_stroke(
                    rect,
                    CornerRadius::same(4),
                    Stroke::new(1.0, theme::color::ACCENT),
                    StrokeKind::Inside,
                );
            }
        }

        response
    }
}
