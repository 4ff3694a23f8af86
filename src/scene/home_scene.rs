use egui::{
    Align, Color32, CornerRadius, Image, ImageButton, Layout, RichText, ScrollArea, TextEdit, Ui,
    Vec2,
};

use crate::catalog::{self, Template};
use crate::theme;
use crate::widget::grid_item::GridItem;

use super::{collage_scene::CollageScene, Scene, SceneResponse};
use super::{create_scene::CreateScene, edits_scene::EditsScene};
use super::template_preview_scene::TemplatePreviewScene;

const GRID_ITEM_SIZE: f32 = 84.0;
const TEMPLATE_CARD_SIZE: Vec2 = Vec2::new(120.0, 160.0);

pub struct HomeScene {
    search_query: String,
}

impl HomeScene {
    pub fn new() -> Self {
        Self {
            search_query: String::new(),
        }
    }

    fn top_nav(&mut self, ui: &mut Ui) -> SceneResponse {
        let mut response = SceneResponse::None;

        ui.horizontal(|ui| {
            if ui.button("Create").clicked() {
                response = SceneResponse::Push(Box::new(CreateScene::new()));
            }
            if ui.button("Edits").clicked() {
                response = SceneResponse::Push(Box::new(EditsScene::new()));
            }
            ui.add_sized(
                Vec2::new(ui.available_width(), 24.0),
                TextEdit::singleline(&mut self.search_query)
                    .hint_text("Search Birthday, Love, Sale.."),
            );
        });

        response
    }

    fn design_options(&self, ui: &mut Ui) {
        ScrollArea::horizontal()
            .id_salt("design_options")
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    for option in catalog::design_options() {
                        ui.vertical(|ui| {
                            ui.set_width(72.0);
                            ui.with_layout(Layout::top_down(Align::Center), |ui| {
                                ui.label(RichText::new(option.icon).size(22.0));
                                ui.label(
                                    RichText::new(option.name)
                                        .size(11.0)
                                        .color(theme::color::MUTED),
                                );
                            });
                        });
                    }
                });
            });
    }

    fn grid_strip(&self, ui: &mut Ui) -> SceneResponse {
        let mut response = SceneResponse::None;

        ScrollArea::horizontal().id_salt("grids").show(ui, |ui| {
            ui.horizontal(|ui| {
                for descriptor in catalog::grid_layouts() {
                    let item = GridItem::new(descriptor).show(ui, Vec2::splat(GRID_ITEM_SIZE));
                    if item.clicked() {
                        response = SceneResponse::Push(CollageScene::boxed(descriptor.clone()));
                    }
                }
            });
        });

        response
    }

    fn template_strip(&self, ui: &mut Ui, id: &str, templates: &[Template]) -> SceneResponse {
        let mut response = SceneResponse::None;

        ScrollArea::horizontal().id_salt(id.to_string()).show(ui, |ui| {
            ui.horizontal(|ui| {
                for template in templates {
                    ui.vertical(|ui| {
                        if template_card(ui, template).clicked() {
                            response = SceneResponse::Push(Box::new(
                                TemplatePreviewScene::new(template.clone()),
                            ));
                        }
                        ui.label(RichText::new(template.name).size(11.0));
                    });
                }
            });
        });

        response
    }
}

/// Template thumbnail with the free badge, shared with the Create screen.
pub fn template_card(ui: &mut Ui, template: &Template) -> egui::Response {
    let image = Image::from_uri(template.image)
        .fit_to_exact_size(TEMPLATE_CARD_SIZE)
        .corner_radius(CornerRadius::same(8));
    let response = ui.add_sized(TEMPLATE_CARD_SIZE, ImageButton::new(image));

    let badge = egui::Rect::from_min_size(
        response.rect.left_top() + Vec2::new(6.0, 6.0),
        Vec2::new(34.0, 16.0),
    );
    ui.painter()
        .rect_filled(badge, CornerRadius::same(8), theme::color::ACCENT);
    ui.painter().text(
        badge.center(),
        egui::Align2::CENTER_CENTER,
        "Free",
        egui::FontId::proportional(10.0),
        Color32::WHITE,
    );

    response
}

impl Scene for HomeScene {
    fn ui(&mut self, ui: &mut Ui) -> SceneResponse {
        let mut response = SceneResponse::None;

        ScrollArea::vertical().id_salt("home").show(ui, |ui| {
            if let r @ SceneResponse::Push(_) = self.top_nav(ui) {
                response = r;
            }
            ui.add_space(8.0);

            self.design_options(ui);
            ui.add_space(12.0);

            ui.heading("Grid Layouts");
            if let r @ SceneResponse::Push(_) = self.grid_strip(ui) {
                response = r;
            }
            ui.add_space(12.0);

            ui.heading("Spring Stories");
            if let r @ SceneResponse::Push(_) =
                self.template_strip(ui, "spring", catalog::templates())
            {
                response = r;
            }
            ui.add_space(12.0);

            ui.heading("Birthday Cards");
            if let r @ SceneResponse::Push(_) =
                self.template_strip(ui, "birthday", catalog::birthday_templates())
            {
                response = r;
            }
        });

        response
    }
}
