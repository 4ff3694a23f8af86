use egui::{Pos2, Rect};

pub mod grid_layout;

pub use grid_layout::grid_cells;

const SQRT_3: f32 = 1.732_050_8;

/// How a cell's photo is masked when painted or rasterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellShape {
    Rect,
    Circle,
    Hexagon,
    Heart,
    Clover,
}

/// One rendered cell of a collage. Several cells may reference the same slot
/// when a layout value spans multiple matrix positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    pub slot: usize,
    pub rect: Rect,
    pub shape: CellShape,
}

const CLOVER_LOBE_OFFSET: f32 = 0.45;
const CLOVER_LOBE_RADIUS: f32 = 0.5;

impl CellShape {
    /// Mask test in the cell's normalized space, where both axes run -1..=1
    /// and y grows downward.
    pub fn contains(&self, nx: f32, ny: f32) -> bool {
        match self {
            CellShape::Rect => nx.abs() <= 1.0 && ny.abs() <= 1.0,
            CellShape::Circle => nx * nx + ny * ny <= 1.0,
            CellShape::Hexagon => {
                nx.abs() <= SQRT_3 / 2.0 && ny.abs() + nx.abs() / SQRT_3 <= 1.0
            }
            CellShape::Heart => point_in_polygon(&heart_outline(HEART_SEGMENTS), nx, ny),
            CellShape::Clover => clover_lobes()
                .iter()
                .any(|(cx, cy)| {
                    let dx = nx - cx;
                    let dy = ny - cy;
                    dx * dx + dy * dy <= CLOVER_LOBE_RADIUS * CLOVER_LOBE_RADIUS
                }),
        }
    }

    /// Closed outline of the shape fitted to `rect`, used for borders and for
    /// textured meshes. All returned polygons are star shaped around the cell
    /// center, so a triangle fan from the center fills them correctly.
    pub fn outline(&self, rect: Rect, segments: usize) -> Vec<Pos2> {
        let to_rect = |(nx, ny): (f32, f32)| {
            Pos2::new(
                rect.center().x + nx * rect.width() / 2.0,
                rect.center().y + ny * rect.height() / 2.0,
            )
        };

        match self {
            CellShape::Rect => vec![
                rect.left_top(),
                rect.right_top(),
                rect.right_bottom(),
                rect.left_bottom(),
            ],
            CellShape::Circle => (0..segments)
                .map(|step| {
                    let angle = step as f32 / segments as f32 * std::f32::consts::TAU;
                    to_rect((angle.cos(), angle.sin()))
                })
                .collect(),
            CellShape::Hexagon => [
                (0.0, -1.0),
                (SQRT_3 / 2.0, -0.5),
                (SQRT_3 / 2.0, 0.5),
                (0.0, 1.0),
                (-SQRT_3 / 2.0, 0.5),
                (-SQRT_3 / 2.0, -0.5),
            ]
            .into_iter()
            .map(to_rect)
            .collect(),
            CellShape::Heart => heart_outline(segments).into_iter().map(to_rect).collect(),
            CellShape::Clover => (0..segments)
                .map(|step| {
                    let angle = step as f32 / segments as f32 * std::f32::consts::TAU;
                    let direction = (angle.cos(), angle.sin());
                    to_rect(scale_direction(direction, clover_radius_along(direction)))
                })
                .collect(),
        }
    }
}

const HEART_SEGMENTS: usize = 64;

fn clover_lobes() -> [(f32, f32); 4] {
    [
        (CLOVER_LOBE_OFFSET, 0.0),
        (-CLOVER_LOBE_OFFSET, 0.0),
        (0.0, CLOVER_LOBE_OFFSET),
        (0.0, -CLOVER_LOBE_OFFSET),
    ]
}

fn scale_direction((dx, dy): (f32, f32), length: f32) -> (f32, f32) {
    (dx * length, dy * length)
}

/// Distance from the cell center to the clover boundary along a unit ray.
/// Every lobe contains the center, so the union boundary is the farthest
/// ray-circle exit over the four lobes.
fn clover_radius_along((dx, dy): (f32, f32)) -> f32 {
    clover_lobes()
        .iter()
        .filter_map(|(cx, cy)| {
            let along = cx * dx + cy * dy;
            let center_sq = cx * cx + cy * cy;
            let disc = CLOVER_LOBE_RADIUS * CLOVER_LOBE_RADIUS - (center_sq - along * along);
            if disc >= 0.0 {
                Some(along + disc.sqrt())
            } else {
                None
            }
        })
        .fold(0.0, f32::max)
}

/// Classic parametric heart, normalized to the -1..=1 box with the lobes at
/// the top (screen y grows downward).
fn heart_outline(segments: usize) -> Vec<(f32, f32)> {
    (0..segments)
        .map(|step| {
            let t = step as f32 / segments as f32 * std::f32::consts::TAU;
            let x = 16.0 * t.sin().powi(3);
            let y = 13.0 * t.cos()
                - 5.0 * (2.0 * t).cos()
                - 6.0 * (3.0 * t).cos()
                - (4.0 * t).cos();
            (x / 17.0, -y / 17.0)
        })
        .collect()
}

fn point_in_polygon(points: &[(f32, f32)], x: f32, y: f32) -> bool {
    let mut inside = false;
    let mut previous = points.len() - 1;
    for current in 0..points.len() {
        let (xi, yi) = points[current];
        let (xj, yj) = points[previous];
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        previous = current;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Pos2, Vec2};

    #[test]
    fn test_circle_mask() {
        assert!(CellShape::Circle.contains(0.0, 0.0));
        assert!(CellShape::Circle.contains(0.7, 0.7));
        assert!(!CellShape::Circle.contains(0.8, 0.8));
    }

    #[test]
    fn test_hexagon_mask() {
        assert!(CellShape::Hexagon.contains(0.0, 0.0));
        assert!(CellShape::Hexagon.contains(0.0, 0.99));
        assert!(!CellShape::Hexagon.contains(0.9, 0.0));
        assert!(!CellShape::Hexagon.contains(0.8, 0.6));
    }

    #[test]
    fn test_heart_mask_has_a_dimple_between_the_lobes() {
        assert!(CellShape::Heart.contains(0.0, 0.0));
        assert!(CellShape::Heart.contains(0.0, 0.5));
        assert!(CellShape::Heart.contains(0.5, -0.6));
        assert!(!CellShape::Heart.contains(0.0, -0.5));
        assert!(!CellShape::Heart.contains(0.9, 0.9));
    }

    #[test]
    fn test_clover_mask() {
        assert!(CellShape::Clover.contains(0.0, 0.0));
        assert!(CellShape::Clover.contains(0.45, 0.0));
        assert!(CellShape::Clover.contains(0.0, -0.9));
        assert!(!CellShape::Clover.contains(0.9, 0.9));
        assert!(!CellShape::Clover.contains(0.65, 0.65));
    }

    #[test]
    fn test_outlines_stay_within_the_cell_rect() {
        let rect = egui::Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::new(100.0, 80.0));
        let loose = rect.expand(0.5);

        for shape in [
            CellShape::Rect,
            CellShape::Circle,
            CellShape::Hexagon,
            CellShape::Heart,
            CellShape::Clover,
        ] {
            for point in shape.outline(rect, 48) {
                assert!(loose.contains(point), "{:?} produced {:?}", shape, point);
            }
        }
    }

    #[test]
    fn test_outline_points_are_inside_their_own_mask_when_nudged_inward() {
        for shape in [
            CellShape::Circle,
            CellShape::Hexagon,
            CellShape::Clover,
        ] {
            let rect = egui::Rect::from_min_size(Pos2::ZERO, Vec2::splat(2.0));
            for point in shape.outline(rect, 32) {
                let nx = (point.x - 1.0) * 0.98;
                let ny = (point.y - 1.0) * 0.98;
                assert!(shape.contains(nx, ny), "{:?} at {},{}", shape, nx, ny);
            }
        }
    }
}
