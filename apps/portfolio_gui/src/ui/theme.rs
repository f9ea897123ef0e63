use eframe::egui;

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(0x25, 0x63, 0xeb);
pub const CARD_BORDER: egui::Color32 = egui::Color32::from_rgb(0xcc, 0xcc, 0xdd);
pub const CARD_FILL: egui::Color32 = egui::Color32::WHITE;
pub const SELECTED_FILL: egui::Color32 = egui::Color32::from_rgb(0xee, 0xee, 0xff);
pub const CARD_RADIUS: f32 = 8.0;
pub const CARD_PADDING: i8 = 12;

pub fn card_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(CARD_FILL)
        .stroke(egui::Stroke::new(1.0, CARD_BORDER))
        .corner_radius(CARD_RADIUS)
        .inner_margin(egui::Margin::same(CARD_PADDING))
}

pub fn apply_page_visuals(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.selection.bg_fill = SELECTED_FILL;
    visuals.selection.stroke = egui::Stroke::new(1.0, ACCENT);
    visuals.hyperlink_color = ACCENT;
    ctx.set_visuals(visuals);
}
