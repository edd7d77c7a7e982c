//! Dark theme: palette, spacing and frame builders shared by all panels.

use egui::{Color32, Rounding, Stroke, Vec2};

/// Central theme constants and helpers.
pub struct Theme;

impl Theme {
    // ── Typography ─────────────────────────────────────────────
    pub const FONT_XS: f32 = 11.0; // section labels, badges
    pub const FONT_SM: f32 = 13.0; // body, buttons
    pub const FONT_MONO: f32 = 12.0; // frame/time readouts

    // ── Spacing (4px base) ─────────────────────────────────────
    pub const SPACE_XS: f32 = 4.0;
    pub const SPACE_SM: f32 = 8.0;
    pub const SPACE_MD: f32 = 16.0;

    // ── Sizes ──────────────────────────────────────────────────
    pub const ROW_HEIGHT: f32 = 20.0;
    pub const RADIUS: f32 = 6.0;
    pub const RADIUS_LG: f32 = 12.0;
    pub const STROKE_SUBTLE: f32 = 0.5;
    pub const DIVIDER_WIDTH: f32 = 1.0;

    // ── Backgrounds ────────────────────────────────────────────
    pub const fn bg() -> Color32 {
        Color32::from_rgb(18, 18, 22)
    }
    pub const fn bg1() -> Color32 {
        Color32::from_rgb(28, 28, 34)
    }
    pub const fn bg2() -> Color32 {
        Color32::from_rgb(35, 35, 42)
    }
    pub const fn bg3() -> Color32 {
        Color32::from_rgb(45, 45, 55)
    }

    // ── Text ───────────────────────────────────────────────────
    pub const fn t1() -> Color32 {
        Color32::from_rgba_premultiplied(235, 235, 235, 235)
    }
    pub const fn t2() -> Color32 {
        Color32::from_rgba_premultiplied(153, 153, 153, 153)
    }
    pub const fn t3() -> Color32 {
        Color32::from_rgba_premultiplied(89, 89, 89, 89)
    }

    // ── Accent ─────────────────────────────────────────────────
    pub const fn accent() -> Color32 {
        Color32::from_rgb(86, 130, 255)
    }

    /// Section separators.
    pub const fn divider() -> Color32 {
        Color32::from_rgba_premultiplied(15, 15, 15, 15)
    }

    /// Return a color with replaced alpha.
    pub const fn with_alpha(c: Color32, a: u8) -> Color32 {
        Color32::from_rgba_premultiplied(
            (c.r() as u16 * a as u16 / 255) as u8,
            (c.g() as u16 * a as u16 / 255) as u8,
            (c.b() as u16 * a as u16 / 255) as u8,
            a,
        )
    }

    // ── Frame builders ─────────────────────────────────────────

    /// Frame for floating dialogs.
    pub fn dialog_frame() -> egui::Frame {
        egui::Frame::none()
            .fill(Self::bg2())
            .stroke(Stroke::new(Self::STROKE_SUBTLE, Self::with_alpha(Color32::WHITE, 20)))
            .rounding(Rounding::same(Self::RADIUS_LG))
            .inner_margin(egui::Margin::same(14.0))
            .shadow(egui::epaint::Shadow {
                offset: Vec2::new(0.0, 8.0),
                blur: 32.0,
                spread: 0.0,
                color: Color32::from_rgba_premultiplied(0, 0, 0, 100),
            })
    }

    /// Standard side panel frame.
    pub fn panel_frame() -> egui::Frame {
        egui::Frame::none()
            .fill(Self::bg1())
            .inner_margin(egui::Margin::same(Self::SPACE_SM))
    }

    /// Small uppercase caption above a field.
    pub fn section_label(ui: &mut egui::Ui, text: &str) {
        ui.label(
            egui::RichText::new(text)
                .size(Self::FONT_XS)
                .color(Self::t3())
                .strong(),
        );
    }

    /// Draw a 1px horizontal divider.
    pub fn draw_separator(ui: &mut egui::Ui) {
        let width = ui.available_width();
        let (resp, painter) =
            ui.allocate_painter(Vec2::new(width, Self::DIVIDER_WIDTH), egui::Sense::hover());
        painter.rect_filled(resp.rect, 0.0, Self::divider());
    }

    /// Apply the theme to an egui context.
    pub fn apply(ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        let visuals = &mut style.visuals;
        *visuals = egui::Visuals::dark();

        visuals.panel_fill = Self::bg1();
        visuals.window_fill = Self::bg2();
        visuals.extreme_bg_color = Self::bg();
        visuals.faint_bg_color = Self::bg2();

        visuals.widgets.inactive.bg_fill = Self::bg3();
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, Self::t2());
        visuals.widgets.inactive.rounding = Rounding::same(Self::RADIUS);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, Self::t1());
        visuals.widgets.hovered.rounding = Rounding::same(Self::RADIUS);
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, Self::accent());
        visuals.widgets.active.rounding = Rounding::same(Self::RADIUS);

        // Selected table rows
        visuals.selection.bg_fill = Self::with_alpha(Self::accent(), 70);
        visuals.selection.stroke = Stroke::new(1.0, Self::accent());

        visuals.window_rounding = Rounding::same(Self::RADIUS_LG);

        ctx.set_style(style);
    }
}
