use egui::{Align, Color32, Layout, Vec2};
use indexmap::IndexMap;

use crate::dependencies::{Dependency, Singleton, SingletonFor};

pub type ModalId = u64;

pub enum ModalResponse {
    Dismiss,
    None,
}

/// A single alert dialog: a title, a message and a dismiss button.
pub struct Modal {
    pub title: String,
    pub message: String,
    pub dismiss_label: String,
}

impl Modal {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        dismiss_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            dismiss_label: dismiss_label.into(),
        }
    }

    fn show(&self, ui: &mut egui::Ui) -> ModalResponse {
        let viewport_rect = ui
            .ctx()
            .viewport(|viewport| viewport.this_pass.available_rect);

        ui.painter()
            .rect_filled(viewport_rect, 0.0, Color32::from_black_alpha(128));

        let mut response = ModalResponse::None;

        egui::Window::new(&self.title)
            .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
            .resizable(false)
            .collapsible(false)
            .min_size(Vec2::new(300.0, 100.0))
            .show(ui.ctx(), |ui| {
                ui.label(&self.message);
                ui.add_space(20.0);
                ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                    if ui.button(&self.dismiss_label).clicked() {
                        response = ModalResponse::Dismiss;
                    }
                });
            });

        response
    }
}

/// Keeps the stack of open alerts. Alerts can be pushed from any thread (the
/// export task reports its outcome this way); only the topmost one is drawn.
pub struct ModalManager {
    modals: IndexMap<ModalId, Modal>,
    next_id: ModalId,
}

impl ModalManager {
    pub fn new() -> Self {
        Self {
            modals: IndexMap::new(),
            next_id: 0,
        }
    }

    pub fn push(&mut self, modal: Modal) -> ModalId {
        let id = self.next_id;
        self.next_id += 1;
        self.modals.insert(id, modal);
        id
    }

    pub fn push_basic_modal(title: impl Into<String>, message: impl Into<String>) {
        let modal_manager: Singleton<ModalManager> = Dependency::get();
        modal_manager.with_lock_mut(|manager| {
            manager.push(Modal::new(title, message, "OK"));
        });
    }

    pub fn show_next(&mut self, ui: &mut egui::Ui) {
        let response = self.modals.last().map(|(_, modal)| modal.show(ui));

        if let Some(ModalResponse::Dismiss) = response {
            self.modals.pop();
        }
    }
}
