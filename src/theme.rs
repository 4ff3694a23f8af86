pub mod color {
    use egui::Color32;

    pub const ACCENT: Color32 = Color32::from_rgb(0xff, 0x5a, 0x5f);
    pub const GRID_BORDER: Color32 = Color32::from_rgb(0x1e, 0x90, 0xff);
    pub const MUTED: Color32 = Color32::from_rgb(0x88, 0x88, 0x88);
    pub const CANVAS_BACKGROUND: Color32 = Color32::from_rgb(0xf5, 0xf5, 0xf5);
    pub const PREVIEW_BACKGROUND: Color32 = Color32::from_rgb(0xf0, 0xf0, 0xf0);
}
