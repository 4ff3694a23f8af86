use egui::{Align2, Color32, CornerRadius, Rect, RichText, Sense, Ui, Vec2};
use strum::IntoEnumIterator;

use crate::catalog::AspectRatio;
use crate::collage::crop::{CropBounds, CropEdge, CropSession};
use crate::layout::CellShape;
use crate::theme;
use crate::utils::RectExt;
use crate::widget::collage_grid::paint_photo_cover;

const HANDLE_THICKNESS: f32 = 20.0;
const HANDLE_LINE_LENGTH: f32 = 40.0;
const HANDLE_LINE_WIDTH: f32 = 4.0;
const SHEET_HEIGHT_RATIO: f32 = 0.7;
const SHEET_CHROME_HEIGHT: f32 = 150.0;
const MIN_WRAPPER_HEIGHT: f32 = 120.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropPreviewResponse {
    None,
    Apply,
    Cancel,
}

/// Bottom sheet shown while an image is pending placement: the crop window
/// with its four edge handles, the aspect ratio strip and the confirm button.
pub struct CropPreview<'a> {
    session: &'a mut CropSession,
}

impl<'a> CropPreview<'a> {
    pub fn new(session: &'a mut CropSession) -> Self {
        Self { session }
    }

    pub fn show(mut self, ui: &mut Ui) -> CropPreviewResponse {
        let screen = ui.ctx().screen_rect();
        ui.painter()
            .rect_filled(screen, 0.0, Color32::from_black_alpha(128));

        let sheet_size = Vec2::new(
            screen.width() - 40.0,
            screen.height() * SHEET_HEIGHT_RATIO,
        );

        let mut response = CropPreviewResponse::None;
        egui::Window::new("crop_preview")
            .title_bar(false)
            .anchor(Align2::CENTER_BOTTOM, Vec2::ZERO)
            .fixed_size(sheet_size)
            .resizable(false)
            .show(ui.ctx(), |ui| {
                response = self.sheet_ui(ui, sheet_size);
            });

        response
    }

    fn sheet_ui(&mut self, ui: &mut Ui, sheet_size: Vec2) -> CropPreviewResponse {
        let wrapper_size = Vec2::new(
            sheet_size.x - 40.0,
            (sheet_size.y - SHEET_CHROME_HEIGHT).max(MIN_WRAPPER_HEIGHT)
                * crate::collage::crop::VISIBLE_WINDOW_RATIO,
        );

        let (outer, _) = ui.allocate_exact_size(
            Vec2::new(ui.available_width(), wrapper_size.y + 20.0),
            Sense::hover(),
        );
        let wrapper = Rect::from_center_size(outer.center(), wrapper_size);

        ui.painter()
            .rect_filled(wrapper, 0.0, theme::color::PREVIEW_BACKGROUND);

        let bounds = CropBounds::new(wrapper.width(), wrapper.height());
        let window = self.crop_window(wrapper);
        paint_photo_cover(ui, window, &self.session.photo, CellShape::Rect);

        if self.session.free_crop_enabled() {
            self.edge_handles(ui, wrapper, &bounds);
        }

        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format!(
                    "{} ({} x {})",
                    self.session.photo.file_name(),
                    self.session.photo.width,
                    self.session.photo.height
                ))
                .size(11.0)
                .color(theme::color::MUTED),
            );
        });

        ui.add_space(8.0);
        self.ratio_strip(ui);
        ui.add_space(8.0);

        let mut response = CropPreviewResponse::None;
        ui.horizontal(|ui| {
            if ui.button("Cancel").clicked() {
                response = CropPreviewResponse::Cancel;
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let confirm = egui::Button::new(RichText::new("Apply").color(Color32::WHITE))
                    .fill(theme::color::ACCENT)
                    .corner_radius(CornerRadius::same(16));
                if ui.add(confirm).clicked() {
                    response = CropPreviewResponse::Apply;
                }
            });
        });

        response
    }

    /// The visible crop window inside the wrapper: inset by the crop state in
    /// free mode, fitted to the fixed ratio otherwise.
    fn crop_window(&self, wrapper: Rect) -> Rect {
        match self.session.ratio().ratio() {
            None => {
                let insets = self.session.insets;
                wrapper.shrink_by_insets(insets.top, insets.bottom, insets.left, insets.right)
            }
            Some(ratio) => wrapper
                .with_aspect_ratio(ratio)
                .fit_and_center_within(wrapper),
        }
    }

    fn edge_handles(&mut self, ui: &mut Ui, wrapper: Rect, bounds: &CropBounds) {
        for edge in CropEdge::ALL {
            let handle_rect = handle_rect(wrapper, edge);
            let response = ui.interact(
                handle_rect,
                ui.id().with(("crop_handle", edge as usize)),
                Sense::drag(),
            );

            if response.drag_started() {
                self.session.begin_drag(edge);
            }
            if response.dragged() {
                self.session.drag_by(response.drag_delta(), bounds);
            }
            if response.drag_stopped() {
                self.session.end_drag();
            }

            ui.painter()
                .rect_filled(handle_rect, 0.0, Color32::from_black_alpha(50));

            let line_size = if edge.is_horizontal() {
                Vec2::new(HANDLE_LINE_WIDTH, HANDLE_LINE_LENGTH)
            } else {
                Vec2::new(HANDLE_LINE_LENGTH, HANDLE_LINE_WIDTH)
            };
            ui.painter().rect_filled(
                Rect::from_center_size(handle_rect.center(), line_size),
                CornerRadius::same(2),
                theme::color::ACCENT,
            );
        }
    }

    fn ratio_strip(&mut self, ui: &mut Ui) {
        egui::ScrollArea::horizontal()
            .id_salt("aspect_ratios")
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    for ratio in AspectRatio::iter() {
                        let selected = self.session.ratio() == ratio;
                        let label = if selected {
                            RichText::new(ratio.label())
                                .color(theme::color::ACCENT)
                                .strong()
                        } else {
                            RichText::new(ratio.label()).color(theme::color::MUTED)
                        };
                        if ui.selectable_label(selected, label).clicked() {
                            self.session.select_ratio(ratio);
                        }
                    }
                });
            });
    }
}

fn handle_rect(wrapper: Rect, edge: CropEdge) -> Rect {
    match edge {
        CropEdge::Top => Rect::from_min_size(
            wrapper.left_top(),
            Vec2::new(wrapper.width(), HANDLE_THICKNESS),
        ),
        CropEdge::Bottom => Rect::from_min_size(
            wrapper.left_bottom() - Vec2::new(0.0, HANDLE_THICKNESS),
            Vec2::new(wrapper.width(), HANDLE_THICKNESS),
        ),
        CropEdge::Left => Rect::from_min_size(
            wrapper.left_top(),
            Vec2::new(HANDLE_THICKNESS, wrapper.height()),
        ),
        CropEdge::Right => Rect::from_min_size(
            wrapper.right_top() - Vec2::new(HANDLE_THICKNESS, 0.0),
            Vec2::new(HANDLE_THICKNESS, wrapper.height()),
        ),
    }
}

