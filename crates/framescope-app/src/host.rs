//! Host state: the active output, the scening lists and the current frame.
//!
//! Kept apart from the eframe shell so navigation and list switching can be
//! exercised without a window.

use framescope_core::{Frame, OutputInfo};
use framescope_scening::{SceningLists, SharedSceningList};
use framescope_ui::{SceningDialogAction, SceningListDialog};
use tracing::{debug, info, warn};

pub struct Host {
    pub output: OutputInfo,
    pub lists: SceningLists,
    pub dialog: SceningListDialog,
    current_list: usize,
    current_frame: Frame,
    /// Start frame marked for the next scene.
    pub mark_in: Option<Frame>,
    /// Label for the next scene.
    pub new_label: String,
}

impl Host {
    pub fn new(output: OutputInfo) -> Self {
        let mut lists = SceningLists::new();
        lists.add("Scening List 1", output.frame_rate);

        let mut host = Self {
            output,
            lists,
            dialog: SceningListDialog::new(),
            current_list: 0,
            current_frame: Frame::ZERO,
            mark_in: None,
            new_label: String::new(),
        };
        let output = host.output.clone();
        host.set_output(output);
        host.switch_list(0);
        host
    }

    pub fn current_frame(&self) -> Frame {
        self.current_frame
    }

    pub fn current_list_index(&self) -> usize {
        self.current_list
    }

    pub fn current_list(&self) -> Option<&SharedSceningList> {
        self.lists.get(self.current_list)
    }

    /// Display `frame`, clamped to the output.
    pub fn switch_frame(&mut self, frame: Frame) {
        let frame = frame.clamp_to(self.output.last_frame());
        if frame == self.current_frame {
            return;
        }
        debug!(%frame, "switching frame");
        self.current_frame = frame;
        let time = self.output.time_of(frame);
        self.dialog.on_current_frame_changed(frame, time);
    }

    /// Make the list at `index` the active one.
    pub fn switch_list(&mut self, index: usize) {
        let Some(list) = self.lists.get(index).cloned() else {
            warn!(index, "no scening list at index");
            return;
        };
        info!(index, name = %list.read().name(), "active scening list changed");
        self.current_list = index;
        self.dialog.on_current_list_changed(list);
        self.refresh_highlight();
    }

    /// Append a fresh list and make it active.
    pub fn add_list(&mut self) {
        let name = format!("Scening List {}", self.lists.len() + 1);
        let (index, _) = self.lists.add(name, self.output.frame_rate);
        self.switch_list(index);
    }

    /// Replace the output bounds.
    pub fn set_output(&mut self, output: OutputInfo) {
        info!(name = %output.name, frames = output.total_frames, rate = %output.frame_rate, "output changed");
        self.lists.set_frame_rate(output.frame_rate);
        self.dialog.on_current_output_changed(&output);
        self.output = output;
        self.current_frame = self.current_frame.clamp_to(self.output.last_frame());
    }

    pub fn toggle_dialog(&mut self) {
        self.dialog.open = !self.dialog.open;
        self.refresh_highlight();
    }

    /// Add a scene from the marked start (or the current frame) to the
    /// current frame.
    pub fn add_scene(&mut self) {
        let Some(list) = self.current_list().cloned() else {
            return;
        };
        let end = self.current_frame;
        let start = self.mark_in.take().unwrap_or(end);
        let (start, end) = (start.min(end), start.max(end));
        let label = std::mem::take(&mut self.new_label);
        if let Err(err) = list.write().add(start, Some(end), label) {
            warn!(%err, "could not add scene");
        };
    }

    pub fn handle_dialog_actions(&mut self, actions: Vec<SceningDialogAction>) {
        for action in actions {
            match action {
                SceningDialogAction::SwitchFrame(frame) => self.switch_frame(frame),
            }
        }
    }

    fn refresh_highlight(&mut self) {
        let time = self.output.time_of(self.current_frame);
        self.dialog
            .on_current_frame_changed(self.current_frame, time);
    }
}
