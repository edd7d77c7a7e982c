//! Framescope UI - egui widgets for the preview tool
//!
//! Provides UI components:
//! - Scening list dialog with bound edit controls
//! - Headless form controls and table selection
//! - Frame transport bar
//! - Theme

pub mod controls;
pub mod scening_dialog;
pub mod selection;
pub mod theme;

pub use controls::{FrameEdit, LineEdit, PushButton, TimeEdit};
pub use scening_dialog::{
    column_policy, DeferredAction, ResizePolicy, SceningDialogAction, SceningListDialog,
};
pub use selection::{SelectionChange, TableSelection};
pub use theme::Theme;

use egui::Ui;
use framescope_core::{Frame, OutputInfo};
use framescope_scening::SceningList;

/// Frame transport: seek slider and scene-boundary stepping.
///
/// Returns the frame the user asked to display, if any.
pub fn show_transport(
    ui: &mut Ui,
    current: Frame,
    output: &OutputInfo,
    scenes: Option<&SceningList>,
) -> Option<Frame> {
    let last = output.last_frame().get();
    let mut requested = None;

    ui.horizontal(|ui| {
        if ui.button("⏮").clicked() {
            requested = Some(Frame::ZERO);
        }

        let prev = scenes.and_then(|list| list.prev_frame(current));
        if ui
            .add_enabled(prev.is_some(), egui::Button::new("◀ Scene"))
            .clicked()
        {
            requested = prev;
        }

        let mut index = current.get();
        let slider = egui::Slider::new(&mut index, 0..=last).show_value(false);
        if ui.add(slider).changed() {
            requested = Some(Frame::new(index));
        }

        let next = scenes.and_then(|list| list.next_frame(current));
        if ui
            .add_enabled(next.is_some(), egui::Button::new("Scene ▶"))
            .clicked()
        {
            requested = next;
        }

        ui.label(
            egui::RichText::new(format!(
                "Frame {} / {} | {}",
                current,
                last,
                output.time_of(current)
            ))
            .monospace()
            .size(Theme::FONT_MONO),
        );
    });

    requested
        .map(|frame| frame.clamp_to(output.last_frame()))
        .filter(|frame| *frame != current)
}
