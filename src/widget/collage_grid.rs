use egui::epaint::Vertex;
use egui::load::TexturePoll;
use egui::{
    Align2, Color32, FontId, Image, Mesh, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2,
};

use crate::catalog::LayoutDescriptor;
use crate::collage::slots::SlotAssignment;
use crate::layout::{grid_cells, CellShape, GridCell};
use crate::photo::Photo;
use crate::theme;

const BORDER_WIDTH: f32 = 2.0;
const DASH_LENGTH: f32 = 6.0;
const GAP_LENGTH: f32 = 4.0;
const OUTLINE_SEGMENTS: usize = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollageGridResponse {
    None,
    SlotClicked(usize),
}

/// Paints the collage grid for the current layout and slot assignment.
/// Every cell is clickable and reports its resolved slot index; in download
/// mode all decorative chrome is suppressed so a capture shows photo content
/// only.
pub struct CollageGrid<'a> {
    descriptor: &'a LayoutDescriptor,
    slots: &'a SlotAssignment,
    download_mode: bool,
}

impl<'a> CollageGrid<'a> {
    pub fn new(
        descriptor: &'a LayoutDescriptor,
        slots: &'a SlotAssignment,
        download_mode: bool,
    ) -> Self {
        Self {
            descriptor,
            slots,
            download_mode,
        }
    }

    pub fn show(&self, ui: &mut Ui, canvas: Rect) -> CollageGridResponse {
        let mut response = CollageGridResponse::None;

        for (index, cell) in grid_cells(self.descriptor, canvas).iter().enumerate() {
            let cell_response = ui.interact(
                cell.rect,
                ui.id().with(("collage_cell", index)),
                Sense::click(),
            );

            match self.slots.get(cell.slot) {
                Some(photo) => paint_photo_cover(ui, cell.rect, photo, cell.shape),
                None => {
                    if !self.download_mode {
                        let icon_size = cell.rect.height().min(cell.rect.width()) * 0.3;
                        ui.painter().text(
                            cell.rect.center(),
                            Align2::CENTER_CENTER,
                            "+",
                            FontId::proportional(icon_size.max(16.0)),
                            theme::color::MUTED,
                        );
                    }
                }
            }

            if !self.download_mode {
                paint_dashed_outline(ui, cell);
            }

            if cell_response.clicked() {
                response = CollageGridResponse::SlotClicked(cell.slot);
            }
        }

        response
    }
}

fn paint_dashed_outline(ui: &Ui, cell: &GridCell) {
    let mut points = cell.shape.outline(cell.rect, OUTLINE_SEGMENTS);
    if let Some(first) = points.first().copied() {
        points.push(first);
    }
    ui.painter().extend(Shape::dashed_line(
        &points,
        Stroke::new(BORDER_WIDTH, theme::color::GRID_BORDER),
        DASH_LENGTH,
        GAP_LENGTH,
    ));
}

/// Paints `photo` covering `rect`, center cropped to the rect's aspect ratio
/// and clipped to `shape`. Falls back to a flat fill until the texture is
/// loaded.
pub fn paint_photo_cover(ui: &Ui, rect: Rect, photo: &Photo, shape: CellShape) {
    let texture = match Image::from_uri(photo.uri()).load_for_size(ui.ctx(), rect.size()) {
        Ok(TexturePoll::Ready { texture }) => texture,
        Ok(TexturePoll::Pending { .. }) => {
            ui.painter()
                .rect_filled(rect, 0.0, theme::color::PREVIEW_BACKGROUND);
            ui.ctx().request_repaint();
            return;
        }
        Err(err) => {
            log::error!("Failed to load {}: {}", photo.uri(), err);
            ui.painter()
                .rect_filled(rect, 0.0, theme::color::PREVIEW_BACKGROUND);
            return;
        }
    };

    let uv = cover_uv(texture.size, rect.size());
    let mut mesh = Mesh::with_texture(texture.id);

    match shape {
        CellShape::Rect => mesh.add_rect_with_uv(rect, uv, Color32::WHITE),
        _ => {
            let outline = shape.outline(rect, OUTLINE_SEGMENTS);
            let uv_at = |pos: Pos2| {
                Pos2::new(
                    uv.min.x + (pos.x - rect.left()) / rect.width() * uv.width(),
                    uv.min.y + (pos.y - rect.top()) / rect.height() * uv.height(),
                )
            };

            mesh.vertices.push(Vertex {
                pos: rect.center(),
                uv: uv_at(rect.center()),
                color: Color32::WHITE,
            });
            for point in &outline {
                mesh.vertices.push(Vertex {
                    pos: *point,
                    uv: uv_at(*point),
                    color: Color32::WHITE,
                });
            }

            let count = outline.len() as u32;
            for segment in 0..count {
                mesh.indices
                    .extend([0, 1 + segment, 1 + (segment + 1) % count]);
            }
        }
    }

    ui.painter().add(Shape::mesh(mesh));
}

/// UV rect selecting the centered portion of a texture that stays visible
/// when the texture is scaled to cover a cell.
pub fn cover_uv(texture_size: Vec2, cell_size: Vec2) -> Rect {
    if texture_size.x <= 0.0 || texture_size.y <= 0.0 {
        return Rect::from_min_size(Pos2::ZERO, Vec2::splat(1.0));
    }

    let scale = (cell_size.x / texture_size.x).max(cell_size.y / texture_size.y);
    let visible = Vec2::new(
        cell_size.x / (texture_size.x * scale),
        cell_size.y / (texture_size.y * scale),
    );
    let min = (Vec2::splat(1.0) - visible) / 2.0;
    Rect::from_min_size(min.to_pos2(), visible)
}
