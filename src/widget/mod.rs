pub mod collage_grid;
pub mod crop_preview;
pub mod grid_item;
