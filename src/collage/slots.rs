use crate::catalog::{LayoutDescriptor, LayoutShape};
use crate::photo::Photo;

/// Number of distinct photo slots a layout exposes.
///
/// Rect grids count distinct matrix values so that a value spanning several
/// cells still contributes a single slot. The drawn shapes have fixed counts:
/// heart and clover are a single full-shape slot, circle and multi-column
/// hexagon rows get one slot per column.
pub fn slot_count(descriptor: &LayoutDescriptor) -> usize {
    match descriptor.shape {
        LayoutShape::Heart | LayoutShape::Clover => 1,
        LayoutShape::Circle => descriptor.layout[0].len(),
        LayoutShape::Hexagon => {
            if descriptor.cols == 1 {
                1
            } else {
                descriptor.layout[0].len()
            }
        }
        LayoutShape::Rect => distinct_count(descriptor.layout.iter().flatten().copied()),
    }
}

/// Resolves a rendered grid cell to its slot index.
///
/// The index of a cell is the number of distinct values seen in all earlier
/// rows plus the number of distinct values seen in its own row up to and
/// including the cell, minus one. Cells sharing a value therefore resolve to
/// the same index, which is what makes row and column spans work.
pub fn cell_to_slot(descriptor: &LayoutDescriptor, row: usize, col: usize) -> usize {
    match descriptor.shape {
        LayoutShape::Heart | LayoutShape::Clover => 0,
        LayoutShape::Circle => col,
        LayoutShape::Hexagon => {
            if descriptor.cols == 1 {
                0
            } else {
                col
            }
        }
        LayoutShape::Rect => {
            let earlier_rows = distinct_count(
                descriptor.layout[..row]
                    .iter()
                    .flatten()
                    .copied(),
            );
            let this_row = distinct_count(descriptor.layout[row][..=col].iter().copied());
            earlier_rows + this_row - 1
        }
    }
}

fn distinct_count(values: impl Iterator<Item = u32>) -> usize {
    let mut seen: Vec<u32> = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen.len()
}

/// Per-slot photo assignment for one editing session. Index-aligned with the
/// slot indices produced by `cell_to_slot`.
#[derive(Debug, Clone)]
pub struct SlotAssignment {
    photos: Vec<Option<Photo>>,
}

impl SlotAssignment {
    pub fn for_layout(descriptor: &LayoutDescriptor) -> Self {
        Self {
            photos: vec![None; slot_count(descriptor)],
        }
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn get(&self, slot: usize) -> Option<&Photo> {
        self.photos.get(slot).and_then(|photo| photo.as_ref())
    }

    pub fn assign(&mut self, slot: usize, photo: Photo) {
        if let Some(entry) = self.photos.get_mut(slot) {
            *entry = Some(photo);
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.photos.is_empty() && self.photos.iter().all(|photo| photo.is_some())
    }

    pub fn filled(&self) -> Option<Vec<Photo>> {
        self.photos.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{grid_layouts, layout_by_id};

    fn layout(id: &str) -> &'static LayoutDescriptor {
        layout_by_id(id).expect("missing catalog entry")
    }

    #[test]
    fn test_slot_count_matches_distinct_values_for_every_rect_layout() {
        for descriptor in grid_layouts() {
            if descriptor.shape != LayoutShape::Rect {
                continue;
            }
            let mut values: Vec<u32> = descriptor.layout.iter().flatten().copied().collect();
            values.sort_unstable();
            values.dedup();
            assert_eq!(slot_count(descriptor), values.len(), "{}", descriptor.id);
        }
    }

    #[test]
    fn test_fixed_shape_slot_counts() {
        assert_eq!(slot_count(layout("grid-1")), 1); // heart
        assert_eq!(slot_count(layout("grid-4")), 1); // clover
        assert_eq!(slot_count(layout("grid-6")), 3); // circle row
        assert_eq!(slot_count(layout("grid-7")), 3); // hexagon row
        assert_eq!(slot_count(layout("grid-8")), 1); // single hexagon
    }

    #[test]
    fn test_top_heavy_row_span_resolves_to_one_slot() {
        let descriptor = layout("grid-14");

        assert_eq!(slot_count(descriptor), 4);
        assert_eq!(cell_to_slot(descriptor, 0, 0), 0);
        assert_eq!(cell_to_slot(descriptor, 0, 1), 0);
        assert_eq!(cell_to_slot(descriptor, 0, 2), 0);
        assert_eq!(cell_to_slot(descriptor, 1, 0), 1);
        assert_eq!(cell_to_slot(descriptor, 1, 1), 2);
        assert_eq!(cell_to_slot(descriptor, 1, 2), 3);
    }

    #[test]
    fn test_stitch_vertical_span_shares_slots_across_rows() {
        let descriptor = layout("grid-9");

        assert_eq!(slot_count(descriptor), 2);
        assert_eq!(cell_to_slot(descriptor, 0, 0), 0);
        assert_eq!(cell_to_slot(descriptor, 0, 1), 1);
        assert_eq!(cell_to_slot(descriptor, 1, 0), 0);
        assert_eq!(cell_to_slot(descriptor, 1, 1), 1);
    }

    #[test]
    fn test_left_heavy_span() {
        let descriptor = layout("grid-11");

        assert_eq!(slot_count(descriptor), 3);
        assert_eq!(cell_to_slot(descriptor, 0, 0), 0);
        assert_eq!(cell_to_slot(descriptor, 0, 1), 1);
        assert_eq!(cell_to_slot(descriptor, 1, 0), 0);
        assert_eq!(cell_to_slot(descriptor, 1, 1), 2);
    }

    #[test]
    fn test_circle_columns_map_directly_to_slots() {
        let descriptor = layout("grid-6");

        for col in 0..3 {
            assert_eq!(cell_to_slot(descriptor, 0, col), col);
        }
    }

    #[test]
    fn test_equal_matrix_values_always_resolve_to_equal_slots() {
        for descriptor in grid_layouts() {
            if descriptor.shape != LayoutShape::Rect {
                continue;
            }
            let mut value_to_slot: Vec<(u32, usize)> = Vec::new();
            for (row_index, row) in descriptor.layout.iter().enumerate() {
                for (col_index, value) in row.iter().enumerate() {
                    let slot = cell_to_slot(descriptor, row_index, col_index);
                    match value_to_slot.iter().find(|(v, _)| v == value) {
                        Some((_, existing)) => {
                            assert_eq!(slot, *existing, "{} cell {},{}", descriptor.id, row_index, col_index)
                        }
                        None => value_to_slot.push((*value, slot)),
                    }
                }
            }
        }
    }

    #[test]
    fn test_assignment_lifecycle() {
        let descriptor = layout("grid-5");
        let mut slots = SlotAssignment::for_layout(descriptor);

        assert_eq!(slots.len(), 4);
        assert!(!slots.is_complete());

        let photo = Photo {
            path: "/photos/a.jpg".into(),
            width: 100,
            height: 100,
        };
        for slot in 0..4 {
            slots.assign(slot, photo.clone());
        }

        assert!(slots.is_complete());
        assert_eq!(slots.filled().map(|photos| photos.len()), Some(4));
    }

    #[test]
    fn test_assignment_resets_when_rebuilt_for_new_layout() {
        let mut slots = SlotAssignment::for_layout(layout("grid-5"));
        slots.assign(
            0,
            Photo {
                path: "/photos/a.jpg".into(),
                width: 10,
                height: 10,
            },
        );

        slots = SlotAssignment::for_layout(layout("grid-2"));

        assert_eq!(slots.len(), 2);
        assert!(slots.get(0).is_none());
    }
}
