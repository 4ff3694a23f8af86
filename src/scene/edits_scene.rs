use egui::{Rect, RichText, ScrollArea, Slider, TextEdit, Ui, Vec2};

use crate::gallery_service::{ImagePicker, NativeImagePicker, PermissionStatus};
use crate::layout::CellShape;
use crate::modal::ModalManager;
use crate::photo::Photo;
use crate::theme;
use crate::widget::collage_grid::paint_photo_cover;

use super::{Scene, SceneResponse};

/// Single-photo adjustment screen. The sliders are display state only, there
/// is no pixel pipeline behind them.
pub struct EditsScene {
    picker: Box<dyn ImagePicker>,
    photo: Option<Photo>,
    brightness: f32,
    contrast: f32,
    saturation: f32,
    overlay_text: String,
}

impl EditsScene {
    pub fn new() -> Self {
        Self {
            picker: Box::new(NativeImagePicker),
            photo: None,
            brightness: 1.0,
            contrast: 1.0,
            saturation: 1.0,
            overlay_text: String::new(),
        }
    }

    fn pick_photo(&mut self) {
        if self.picker.request_permission() == PermissionStatus::Denied {
            ModalManager::push_basic_modal(
                "Permission Denied",
                "Permission to access gallery is required",
            );
            return;
        }
        if let Some(photo) = self.picker.pick_image() {
            self.photo = Some(photo);
        }
    }
}

impl Scene for EditsScene {
    fn ui(&mut self, ui: &mut Ui) -> SceneResponse {
        let mut response = SceneResponse::None;

        ui.horizontal(|ui| {
            if ui.button("< Back").clicked() {
                response = SceneResponse::Pop;
            }
            ui.heading("Edits");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_enabled(false, egui::Button::new("Save"));
            });
        });
        ui.separator();

        ScrollArea::vertical().id_salt("edits").show(ui, |ui| {
            match self.photo.clone() {
                Some(photo) => {
                    let width = ui.available_width();
                    let (rect, _) = ui
                        .allocate_exact_size(Vec2::new(width, width * 0.75), egui::Sense::hover());
                    paint_photo_cover(ui, rect, &photo, CellShape::Rect);
                    if !self.overlay_text.is_empty() {
                        paint_overlay_text(ui, rect, &self.overlay_text);
                    }
                }
                None => {
                    ui.add_space(40.0);
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new("No photo selected").color(theme::color::MUTED));
                    });
                    ui.add_space(40.0);
                }
            }

            if ui.button("Choose Photo").clicked() {
                self.pick_photo();
            }

            ui.add_space(12.0);
            ui.label("Brightness");
            ui.add(Slider::new(&mut self.brightness, 0.0..=2.0));
            ui.label("Contrast");
            ui.add(Slider::new(&mut self.contrast, 0.0..=2.0));
            ui.label("Saturation");
            ui.add(Slider::new(&mut self.saturation, 0.0..=2.0));

            ui.add_space(12.0);
            ui.label("Overlay Text");
            ui.add(TextEdit::singleline(&mut self.overlay_text).hint_text("Say something.."));
        });

        response
    }
}

fn paint_overlay_text(ui: &Ui, rect: Rect, text: &str) {
    ui.painter().text(
        rect.center_bottom() - Vec2::new(0.0, 20.0),
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(18.0),
        egui::Color32::WHITE,
    );
}
