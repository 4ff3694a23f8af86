use egui::{Pos2, Rect, Vec2};

use crate::catalog::{LayoutDescriptor, LayoutShape};
use crate::collage::slots::cell_to_slot;

use super::{CellShape, GridCell};

/// Fraction of the canvas the single heart or clover cell occupies.
const FULL_SHAPE_RATIO: f32 = 0.7;
const CIRCLE_DIAMETER_RATIO: f32 = 0.2;
const CIRCLE_GAP_RATIO: f32 = 0.05;
const HEX_WIDTH_RATIO: f32 = 0.25;
const HEX_HEIGHT_RATIO: f32 = 0.28;
const HEX_GAP_RATIO: f32 = 0.025;

/// Weight of a cell within its row. A cell whose value equals the maximum of
/// the other values in the row is a major cell and takes a double share,
/// which is what gives the irregular presets their 2:1 split.
pub fn cell_weight(row: &[u32], col: usize) -> f32 {
    let max_other = row
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != col)
        .map(|(_, value)| *value)
        .max();

    match max_other {
        Some(value) if value == row[col] => 2.0,
        _ => 1.0,
    }
}

/// Lays a descriptor out inside `canvas`, producing one cell per matrix
/// position (rect grids) or per drawn shape. Cells referencing the same slot
/// share one photo.
pub fn grid_cells(descriptor: &LayoutDescriptor, canvas: Rect) -> Vec<GridCell> {
    match descriptor.shape {
        LayoutShape::Heart | LayoutShape::Clover => {
            let side = canvas.width().min(canvas.height()) * FULL_SHAPE_RATIO;
            let shape = if descriptor.shape == LayoutShape::Heart {
                CellShape::Heart
            } else {
                CellShape::Clover
            };
            vec![GridCell {
                slot: 0,
                rect: Rect::from_center_size(canvas.center(), Vec2::splat(side)),
                shape,
            }]
        }
        LayoutShape::Circle => shape_row(
            descriptor,
            canvas,
            Vec2::splat(canvas.width() * CIRCLE_DIAMETER_RATIO),
            canvas.width() * CIRCLE_GAP_RATIO,
            CellShape::Circle,
        ),
        LayoutShape::Hexagon => shape_row(
            descriptor,
            canvas,
            Vec2::new(
                canvas.width() * HEX_WIDTH_RATIO,
                canvas.width() * HEX_HEIGHT_RATIO,
            ),
            canvas.width() * HEX_GAP_RATIO,
            CellShape::Hexagon,
        ),
        LayoutShape::Rect => {
            let row_count = descriptor.layout.len();
            let row_height = canvas.height() / row_count as f32;

            let mut cells = Vec::new();
            for (row_index, row) in descriptor.layout.iter().enumerate() {
                let weights: Vec<f32> = (0..row.len())
                    .map(|col| cell_weight(row, col))
                    .collect();
                let total: f32 = weights.iter().sum();

                let top = canvas.top() + row_index as f32 * row_height;
                let mut left = canvas.left();
                for (col_index, weight) in weights.iter().enumerate() {
                    let width = canvas.width() * weight / total;
                    cells.push(GridCell {
                        slot: cell_to_slot(descriptor, row_index, col_index),
                        rect: Rect::from_min_size(
                            Pos2::new(left, top),
                            Vec2::new(width, row_height),
                        ),
                        shape: CellShape::Rect,
                    });
                    left += width;
                }
            }
            cells
        }
    }
}

/// A single centered row of identically sized shaped cells, one per column.
fn shape_row(
    descriptor: &LayoutDescriptor,
    canvas: Rect,
    cell_size: Vec2,
    gap: f32,
    shape: CellShape,
) -> Vec<GridCell> {
    let count = descriptor.layout[0].len();
    let total_width = cell_size.x * count as f32 + gap * (count.saturating_sub(1)) as f32;
    let left = canvas.center().x - total_width / 2.0;
    let top = canvas.center().y - cell_size.y / 2.0;

    (0..count)
        .map(|col| GridCell {
            slot: cell_to_slot(descriptor, 0, col),
            rect: Rect::from_min_size(
                Pos2::new(left + col as f32 * (cell_size.x + gap), top),
                cell_size,
            ),
            shape,
        })
        .collect()
}
