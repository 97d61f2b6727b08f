use eframe::egui::{self, Color32, FontId, Margin, Style, TextStyle, Vec2};

#[derive(Clone)]
pub struct Palette {
    pub background: Color32,
    pub panel: Color32,
    pub button: Color32,
    pub button_hovered: Color32,
    pub accent: Color32,
    pub separator: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub error: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(24, 26, 32),
            panel: Color32::from_rgb(30, 33, 40),
            button: Color32::from_rgb(44, 48, 58),
            button_hovered: Color32::from_rgb(60, 66, 80),
            accent: Color32::from_rgb(86, 156, 214),
            separator: Color32::from_rgb(52, 56, 68),
            text_primary: Color32::from_rgb(222, 226, 234),
            text_muted: Color32::from_rgb(150, 156, 170),
            error: Color32::from_rgb(232, 104, 96),
        }
    }
}

pub fn install(ctx: &egui::Context, palette: &Palette) {
    apply_visuals(ctx, palette);
    ctx.style_mut(|style| {
        apply_text_styles(style);
        apply_spacing(style);
    });
}

fn apply_visuals(ctx: &egui::Context, palette: &Palette) {
    let mut visuals = egui::Visuals::dark();
    visuals.override_text_color = Some(palette.text_primary);
    visuals.widgets.inactive.bg_fill = palette.button;
    visuals.widgets.inactive.weak_bg_fill = palette.button;
    visuals.widgets.hovered.bg_fill = palette.button_hovered;
    visuals.widgets.hovered.weak_bg_fill = palette.button_hovered;
    visuals.widgets.active.bg_fill = palette.accent.gamma_multiply(0.7);
    visuals.selection.bg_fill = palette.accent.gamma_multiply(0.6);
    visuals.extreme_bg_color = palette.background;
    visuals.panel_fill = palette.panel;
    visuals.window_fill = palette.panel;
    visuals.window_stroke.color = palette.separator;

    ctx.set_visuals(visuals);
}

fn apply_spacing(style: &mut Style) {
    style.spacing.item_spacing = Vec2::new(8.0, 8.0);
    style.spacing.window_margin = Margin::same(14);
    style.spacing.menu_margin = Margin::same(8);
}

fn apply_text_styles(style: &mut Style) {
    style
        .text_styles
        .insert(TextStyle::Heading, FontId::proportional(22.0));
    style
        .text_styles
        .insert(TextStyle::Body, FontId::proportional(15.0));
    style
        .text_styles
        .insert(TextStyle::Button, FontId::proportional(17.0));
    style
        .text_styles
        .insert(TextStyle::Small, FontId::proportional(13.0));
}

pub fn draw_separator(painter: &egui::Painter, rect: egui::Rect, color: Color32) {
    painter.rect_filled(rect, 0.0, color);
}
