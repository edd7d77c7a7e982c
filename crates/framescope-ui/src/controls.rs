//! Bound form controls.
//!
//! Each control keeps its own display state. `set_*` methods only change what
//! is displayed; a user edit is reported by the return value of `show`, which
//! the owning dialog routes to its handler. Programmatic updates therefore
//! never loop back into the model.

use egui::{self, Vec2};
use framescope_core::{Frame, Time};

use crate::theme::Theme;

// ── Frame spinner ───────────────────────────────────────────────

/// Frame index spinner bounded by `[0, maximum]`.
#[derive(Debug, Clone)]
pub struct FrameEdit {
    value: Frame,
    maximum: Frame,
    enabled: bool,
}

impl FrameEdit {
    pub fn new() -> Self {
        Self {
            value: Frame::ZERO,
            maximum: Frame::new(u32::MAX),
            enabled: true,
        }
    }

    pub fn value(&self) -> Frame {
        self.value
    }

    /// Display `value`, clamped to the maximum.
    pub fn set_value(&mut self, value: Frame) {
        self.value = value.clamp_to(self.maximum);
    }

    pub fn maximum(&self) -> Frame {
        self.maximum
    }

    pub fn set_maximum(&mut self, maximum: Frame) {
        self.maximum = maximum;
        self.value = self.value.clamp_to(maximum);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Draw the spinner. Returns the new value when the user changed it.
    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<Frame> {
        let mut index = self.value.get();
        let response = ui.add_enabled(
            self.enabled,
            egui::DragValue::new(&mut index)
                .range(0..=self.maximum.get())
                .speed(1.0),
        );
        if response.changed() && index != self.value.get() {
            self.set_value(Frame::new(index));
            return Some(self.value);
        }
        None
    }
}

impl Default for FrameEdit {
    fn default() -> Self {
        Self::new()
    }
}

// ── Time spinner ────────────────────────────────────────────────

/// Time spinner displaying `H:MM:SS.mmm`, bounded by `[0, maximum]`.
#[derive(Debug, Clone)]
pub struct TimeEdit {
    value: Time,
    maximum: Option<Time>,
    enabled: bool,
}

impl TimeEdit {
    pub fn new() -> Self {
        Self {
            value: Time::ZERO,
            maximum: None,
            enabled: true,
        }
    }

    pub fn value(&self) -> Time {
        self.value
    }

    pub fn set_value(&mut self, value: Time) {
        self.value = match self.maximum {
            Some(maximum) => value.min(maximum),
            None => value,
        };
    }

    pub fn maximum(&self) -> Option<Time> {
        self.maximum
    }

    pub fn set_maximum(&mut self, maximum: Time) {
        self.maximum = Some(maximum);
        self.value = self.value.min(maximum);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<Time> {
        let mut seconds = self.value.to_seconds_f64();
        let maximum = self.maximum.map_or(f64::MAX, Time::to_seconds_f64);
        let response = ui.add_enabled(
            self.enabled,
            egui::DragValue::new(&mut seconds)
                .range(0.0..=maximum)
                .speed(0.01)
                .custom_formatter(|value, _| Time::from_seconds_f64(value).to_string())
                .custom_parser(|text| text.parse::<Time>().ok().map(Time::to_seconds_f64)),
        );
        if response.changed() {
            let previous = self.value;
            self.set_value(Time::from_seconds_f64(seconds));
            if self.value != previous {
                return Some(self.value);
            }
        }
        None
    }
}

impl Default for TimeEdit {
    fn default() -> Self {
        Self::new()
    }
}

// ── Line edit ───────────────────────────────────────────────────

/// Single-line text field with a placeholder.
#[derive(Debug, Clone)]
pub struct LineEdit {
    text: String,
    placeholder: String,
    enabled: bool,
    width: f32,
}

impl LineEdit {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            placeholder: placeholder.into(),
            enabled: true,
            width: 160.0,
        }
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<String> {
        let width = if self.width > 0.0 {
            self.width
        } else {
            ui.available_width()
        };
        let response = ui.add_enabled(
            self.enabled,
            egui::TextEdit::singleline(&mut self.text)
                .hint_text(self.placeholder.as_str())
                .desired_width(width),
        );
        response.changed().then(|| self.text.clone())
    }
}

// ── Push button ─────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct PushButton {
    text: String,
    enabled: bool,
}

impl PushButton {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            enabled: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns `true` when clicked.
    pub fn show(&self, ui: &mut egui::Ui) -> bool {
        let button = egui::Button::new(egui::RichText::new(&self.text).size(Theme::FONT_SM))
            .min_size(Vec2::new(0.0, Theme::ROW_HEIGHT + 2.0));
        ui.add_enabled(self.enabled, button).clicked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_edit_clamps_to_maximum() {
        let mut edit = FrameEdit::new();
        edit.set_value(Frame::new(500));
        edit.set_maximum(Frame::new(99));
        assert_eq!(edit.value(), Frame::new(99));
        edit.set_value(Frame::new(120));
        assert_eq!(edit.value(), Frame::new(99));
    }

    #[test]
    fn test_time_edit_unbounded_until_maximum_set() {
        let mut edit = TimeEdit::new();
        edit.set_value(Time::new(3600, 1));
        assert_eq!(edit.value(), Time::new(3600, 1));
        edit.set_maximum(Time::new(10, 1));
        assert_eq!(edit.value(), Time::new(10, 1));
    }

    #[test]
    fn test_line_edit_display_state() {
        let mut edit = LineEdit::new("Label");
        edit.set_text("intro");
        assert_eq!(edit.text(), "intro");
        edit.clear();
        assert_eq!(edit.text(), "");
        assert_eq!(edit.placeholder(), "Label");
    }
}
