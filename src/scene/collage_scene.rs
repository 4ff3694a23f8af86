use std::sync::Arc;

use egui::{Rect, Shape, Stroke, Ui, Vec2};
use log::{debug, error, info};

use crate::catalog::LayoutDescriptor;
use crate::collage::session::{CollageSession, SharedSession};
use crate::config::Config;
use crate::dependencies::{Dependency, SingletonFor};
use crate::export::{ExportError, Exporter};
use crate::gallery_service::{ImagePicker, NativeImagePicker, PermissionStatus};
use crate::media_library::LocalMediaLibrary;
use crate::modal::ModalManager;
use crate::rasterize::CollageRasterizer;
use crate::theme;
use crate::widget::collage_grid::{CollageGrid, CollageGridResponse};
use crate::widget::crop_preview::{CropPreview, CropPreviewResponse};

use super::{Scene, SceneResponse};

const CANVAS_MARGIN: f32 = 20.0;
const BORDER_DASH: f32 = 6.0;
const BORDER_GAP: f32 = 4.0;

/// The collage editor. Owns the editing session for one layout; the session
/// handle is shared only with export tasks spawned from here.
pub struct CollageScene {
    session: SharedSession,
    exporter: Arc<Exporter>,
    picker: Box<dyn ImagePicker>,
}

impl CollageScene {
    pub fn new(descriptor: LayoutDescriptor) -> Self {
        info!("Opening collage editor for layout {}", descriptor.id);
        Dependency::<Config>::get().with_lock_mut(|config| config.remember_layout(descriptor.id));

        Self {
            session: CollageSession::shared(descriptor),
            exporter: Arc::new(Exporter::new(
                Arc::new(CollageRasterizer::default()),
                Arc::new(LocalMediaLibrary),
            )),
            picker: Box::new(NativeImagePicker),
        }
    }

    pub fn boxed(descriptor: LayoutDescriptor) -> Box<dyn Scene> {
        Box::new(Self::new(descriptor))
    }

    fn pick_into_slot(&mut self, slot: usize) {
        if self.picker.request_permission() == PermissionStatus::Denied {
            ModalManager::push_basic_modal(
                "Permission Denied",
                "Permission to access gallery is required",
            );
            return;
        }

        // Denial and cancellation both end here without touching the slots.
        if let Some(photo) = self.picker.pick_image() {
            self.session.lock().unwrap().begin_crop(photo, slot);
        }
    }

    fn start_export(&self, ui: &Ui) {
        let exporter = Arc::clone(&self.exporter);
        let session = Arc::clone(&self.session);
        let ctx = ui.ctx().clone();

        tokio::spawn(async move {
            match exporter.export(&session).await {
                Ok(path) => {
                    info!("Collage exported to {}", path.display());
                    ModalManager::push_basic_modal(
                        "Success",
                        "Collage has been saved to your gallery",
                    );
                }
                Err(ExportError::IncompleteCollage) => {
                    ModalManager::push_basic_modal(
                        "Incomplete Collage",
                        "Please add images to all containers before downloading",
                    );
                }
                Err(ExportError::PermissionDenied) => {
                    ModalManager::push_basic_modal(
                        "Permission Denied",
                        "Permission to access media library is required to save the collage",
                    );
                }
                Err(ExportError::InProgress) => {
                    debug!("Ignoring export while another one is running");
                }
                Err(err) => {
                    // Capture and persistence failures stay silent beyond the
                    // log, the session is already back in its normal state.
                    error!("Export failed: {}", err);
                }
            }
            ctx.request_repaint();
        });
    }

    fn top_bar(&mut self, ui: &mut Ui) -> SceneResponse {
        let mut response = SceneResponse::None;

        ui.horizontal(|ui| {
            if ui.button("< Back").clicked() {
                response = SceneResponse::Pop;
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Download").clicked() {
                    self.start_export(ui);
                }
                ui.add_enabled(false, egui::Button::new("Redo"));
                ui.add_enabled(false, egui::Button::new("Undo"));
            });
        });

        response
    }
}

impl Scene for CollageScene {
    fn ui(&mut self, ui: &mut Ui) -> SceneResponse {
        let response = self.top_bar(ui);
        ui.separator();

        let (download_mode, crop_active) = {
            let guard = self.session.lock().unwrap();
            (guard.download_mode, guard.crop().is_some())
        };

        let available = ui.available_rect_before_wrap();
        if !download_mode {
            ui.painter()
                .rect_filled(available, 0.0, theme::color::CANVAS_BACKGROUND);
        }

        let side = (available.width().min(available.height()) - 2.0 * CANVAS_MARGIN).max(0.0);
        let canvas = Rect::from_center_size(available.center(), Vec2::splat(side));

        if !download_mode {
            paint_canvas_border(ui, canvas);
        }

        let grid_response = {
            let guard = self.session.lock().unwrap();
            CollageGrid::new(guard.descriptor(), guard.slots(), download_mode).show(ui, canvas)
        };
        if !crop_active {
            if let CollageGridResponse::SlotClicked(slot) = grid_response {
                self.pick_into_slot(slot);
            }
        }

        let crop_response = {
            let mut guard = self.session.lock().unwrap();
            guard
                .crop_mut()
                .map(|crop| CropPreview::new(crop).show(ui))
        };
        match crop_response {
            Some(CropPreviewResponse::Apply) => self.session.lock().unwrap().confirm_crop(),
            Some(CropPreviewResponse::Cancel) => self.session.lock().unwrap().cancel_crop(),
            _ => {}
        }

        response
    }
}

fn paint_canvas_border(ui: &Ui, canvas: Rect) {
    let points = vec![
        canvas.left_top(),
        canvas.right_top(),
        canvas.right_bottom(),
        canvas.left_bottom(),
        canvas.left_top(),
    ];
    ui.painter().extend(Shape::dashed_line(
        &points,
        Stroke::new(2.0, theme::color::GRID_BORDER),
        BORDER_DASH,
        BORDER_GAP,
    ));
}
