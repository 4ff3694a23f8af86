use egui::{
    Color32, CornerRadius, Image, Rect, RichText, ScrollArea, Shape, Stroke, Ui, Vec2,
};

use crate::catalog::{self, Template};
use crate::theme;

use super::{collage_scene::CollageScene, Scene, SceneResponse};

/// Nominal pixel space the template placeholders are authored in.
const TEMPLATE_SPACE: Vec2 = Vec2::new(900.0, 1200.0);

pub struct TemplatePreviewScene {
    template: Template,
    favorite: bool,
}

impl TemplatePreviewScene {
    pub fn new(template: Template) -> Self {
        Self {
            template,
            favorite: false,
        }
    }

    fn preview_image(&self, ui: &mut Ui) {
        let width = ui.available_width().min(360.0);
        let size = Vec2::new(width, width * TEMPLATE_SPACE.y / TEMPLATE_SPACE.x);

        let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
        Image::from_uri(self.template.image)
            .fit_to_exact_size(size)
            .corner_radius(CornerRadius::same(8))
            .paint_at(ui, rect);

        // Placeholder outlines, scaled from the authoring space.
        let scale = Vec2::new(
            rect.width() / TEMPLATE_SPACE.x,
            rect.height() / TEMPLATE_SPACE.y,
        );
        for placeholder in &self.template.placeholders {
            let outline = Rect::from_min_size(
                rect.min + Vec2::new(placeholder.x * scale.x, placeholder.y * scale.y),
                Vec2::new(placeholder.width * scale.x, placeholder.height * scale.y),
            );
            let points = vec![
                outline.left_top(),
                outline.right_top(),
                outline.right_bottom(),
                outline.left_bottom(),
                outline.left_top(),
            ];
            ui.painter().extend(Shape::dashed_line(
                &points,
                Stroke::new(2.0, theme::color::GRID_BORDER),
                6.0,
                4.0,
            ));
        }
    }
}

impl Scene for TemplatePreviewScene {
    fn ui(&mut self, ui: &mut Ui) -> SceneResponse {
        let mut response = SceneResponse::None;

        ui.horizontal(|ui| {
            if ui.button("< Back").clicked() {
                response = SceneResponse::Pop;
            }
            ui.heading("Template Preview");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let star = if self.favorite { "★" } else { "☆" };
                if ui.button(star).clicked() {
                    self.favorite = !self.favorite;
                }
            });
        });
        ui.separator();

        ScrollArea::vertical().id_salt("template_preview").show(ui, |ui| {
            ui.vertical_centered(|ui| {
                self.preview_image(ui);
                ui.add_space(8.0);
                ui.heading(self.template.name);
                ui.label(
                    RichText::new(format!(
                        "{} photo placeholder(s)",
                        self.template.placeholders.len()
                    ))
                    .color(theme::color::MUTED),
                );
                ui.add_space(8.0);

                let use_button = egui::Button::new(
                    RichText::new("Use This Template").color(Color32::WHITE),
                )
                .fill(theme::color::ACCENT)
                .corner_radius(CornerRadius::same(16));
                if ui.add(use_button).clicked() {
                    // Templates open the editor with the single-slot layout,
                    // matching their one placeholder.
                    if let Some(descriptor) = catalog::layout_by_id("grid-10") {
                        response = SceneResponse::Push(CollageScene::boxed(descriptor.clone()));
                    }
                }
            });
        });

        response
    }
}
