use egui::{RichText, ScrollArea, Ui, Vec2};

use crate::catalog;
use crate::collage::slots::slot_count;
use crate::theme;
use crate::widget::grid_item::GridItem;

use super::home_scene::template_card;
use super::template_preview_scene::TemplatePreviewScene;
use super::{collage_scene::CollageScene, Scene, SceneResponse};

const CARD_SIZE: f32 = 120.0;
const CARDS_PER_ROW: usize = 2;

/// Full catalog browser: every layout as a card plus the template strips.
pub struct CreateScene;

impl CreateScene {
    pub fn new() -> Self {
        Self
    }

    fn layout_cards(&self, ui: &mut Ui) -> SceneResponse {
        let mut response = SceneResponse::None;

        for row in catalog::grid_layouts().chunks(CARDS_PER_ROW) {
            ui.horizontal(|ui| {
                for descriptor in row {
                    ui.vertical(|ui| {
                        let item = GridItem::new(descriptor).show(ui, Vec2::splat(CARD_SIZE));
                        ui.label(descriptor.name);
                        ui.label(
                            RichText::new(format!("{} photos", slot_count(descriptor)))
                                .size(11.0)
                                .color(theme::color::MUTED),
                        );
                        if item.clicked() {
                            response = SceneResponse::Push(CollageScene::boxed(descriptor.clone()));
                        }
                    });
                }
            });
            ui.add_space(8.0);
        }

        response
    }
}

impl Scene for CreateScene {
    fn ui(&mut self, ui: &mut Ui) -> SceneResponse {
        let mut response = SceneResponse::None;

        ui.horizontal(|ui| {
            if ui.button("< Back").clicked() {
                response = SceneResponse::Pop;
            }
            ui.heading("Create");
        });
        ui.separator();

        ScrollArea::vertical().id_salt("create").show(ui, |ui| {
            ui.heading("Popular Layouts");
            if let r @ SceneResponse::Push(_) = self.layout_cards(ui) {
                response = r;
            }

            ui.heading("Trending Templates");
            ScrollArea::horizontal()
                .id_salt("create_templates")
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        for template in catalog::templates() {
                            if template_card(ui, template).clicked() {
                                response = SceneResponse::Push(Box::new(
                                    TemplatePreviewScene::new(template.clone()),
                                ));
                            }
                        }
                    });
                });

            ui.heading("Birthday & Celebration");
            ScrollArea::horizontal()
                .id_salt("create_birthday")
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        for template in catalog::birthday_templates() {
                            if template_card(ui, template).clicked() {
                                response = SceneResponse::Push(Box::new(
                                    TemplatePreviewScene::new(template.clone()),
                                ));
                            }
                        }
                    });
                });
        });

        response
    }
}
