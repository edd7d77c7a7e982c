//! Scening list dialog: scene table with bound frame/time/label controls.
//!
//! Every handler is a plain method so the binding logic runs without a GUI;
//! [`SceningListDialog::show`] only draws the window and routes user input to
//! those handlers.

use egui::{self, Vec2};
use egui_extras::{Column as TableColumn, TableBuilder};
use framescope_core::{Frame, OutputInfo, Time};
use framescope_scening::{
    CellValue, Column, SceningList, SceningListEvent, SceningLists, SharedSceningList,
    Subscription,
};
use std::collections::VecDeque;
use tracing::{debug, trace};

use crate::controls::{FrameEdit, LineEdit, PushButton, TimeEdit};
use crate::selection::{SelectionChange, TableSelection};
use crate::theme::Theme;

pub const WINDOW_TITLE: &str = "Scening List View";

// ── Layout policy ───────────────────────────────────────────────

/// How a table column is sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizePolicy {
    /// Takes all remaining width.
    Stretch,
    /// Sized to its content.
    ResizeToContents,
}

/// The label column stretches; every other column fits its content.
pub fn column_policy(column: Column) -> ResizePolicy {
    if column == Column::LABEL {
        ResizePolicy::Stretch
    } else {
        ResizePolicy::ResizeToContents
    }
}

// ── Actions ─────────────────────────────────────────────────────

/// Work queued for the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    SelectRow(usize),
}

/// Requests the dialog makes of its host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceningDialogAction {
    /// Display this frame.
    SwitchFrame(Frame),
}

#[derive(Debug, Default)]
struct TableInteraction {
    clicked: Option<usize>,
    double_clicked: Option<(usize, Column)>,
}

// ── Dialog ──────────────────────────────────────────────────────

/// View/editor for the active scening list.
pub struct SceningListDialog {
    /// Whether the dialog window is visible.
    pub open: bool,
    scening_list: SharedSceningList,
    subscription: Subscription,
    selection: TableSelection,
    deferred: VecDeque<DeferredAction>,
    /// Moves caused by this dialog's own edits, already applied to the
    /// selection and awaiting their `RowsMoved` echo.
    own_moves: VecDeque<(usize, usize)>,

    name_edit: LineEdit,
    start_frame_control: FrameEdit,
    end_frame_control: FrameEdit,
    start_time_control: TimeEdit,
    end_time_control: TimeEdit,
    label_edit: LineEdit,
    delete_button: PushButton,
}

impl SceningListDialog {
    /// Create a closed dialog bound to an empty, unnamed list.
    pub fn new() -> Self {
        let scening_list = SceningList::default().into_shared();
        let subscription = scening_list.write().subscribe();

        let mut dialog = Self {
            open: false,
            scening_list,
            subscription,
            selection: TableSelection::new(),
            deferred: VecDeque::new(),
            own_moves: VecDeque::new(),
            name_edit: LineEdit::new("Scening list name").with_width(0.0),
            start_frame_control: FrameEdit::new(),
            end_frame_control: FrameEdit::new(),
            start_time_control: TimeEdit::new(),
            end_time_control: TimeEdit::new(),
            label_edit: LineEdit::new("Label"),
            delete_button: PushButton::new("Delete Selected Scene"),
        };
        dialog.set_controls_enabled(false);
        dialog
    }

    // ── Accessors ───────────────────────────────────────────────

    pub fn scening_list(&self) -> &SharedSceningList {
        &self.scening_list
    }

    pub fn selection(&self) -> &TableSelection {
        &self.selection
    }

    pub fn name_edit(&self) -> &LineEdit {
        &self.name_edit
    }

    pub fn start_frame_control(&self) -> &FrameEdit {
        &self.start_frame_control
    }

    pub fn end_frame_control(&self) -> &FrameEdit {
        &self.end_frame_control
    }

    pub fn start_time_control(&self) -> &TimeEdit {
        &self.start_time_control
    }

    pub fn end_time_control(&self) -> &TimeEdit {
        &self.end_time_control
    }

    pub fn label_edit(&self) -> &LineEdit {
        &self.label_edit
    }

    pub fn delete_button(&self) -> &PushButton {
        &self.delete_button
    }

    /// Whether every dependent control is enabled.
    pub fn controls_enabled(&self) -> bool {
        self.delete_button.is_enabled()
            && self.start_frame_control.is_enabled()
            && self.end_frame_control.is_enabled()
            && self.start_time_control.is_enabled()
            && self.end_time_control.is_enabled()
            && self.label_edit.is_enabled()
    }

    pub fn pending_deferred(&self) -> usize {
        self.deferred.len()
    }

    // ── Host notifications ─────────────────────────────────────

    /// Bind a new list. The previous subscription is dropped, so nothing the
    /// old list emits reaches this dialog afterwards.
    pub fn on_current_list_changed(&mut self, scening_list: SharedSceningList) {
        let subscription = scening_list.write().subscribe();
        let name = scening_list.read().name().to_owned();
        debug!(list = %name, "scening dialog bound to list");

        self.scening_list = scening_list;
        self.subscription = subscription;
        self.selection = TableSelection::new();
        self.deferred.clear();
        self.own_moves.clear();

        self.name_edit.set_text(name);
        self.label_edit.clear();
        self.set_controls_enabled(false);
    }

    /// Bound the frame and time controls by the current output.
    pub fn on_current_output_changed(&mut self, output: &OutputInfo) {
        let last_frame = output.last_frame();
        let total_time = output.total_time();
        self.start_frame_control.set_maximum(last_frame);
        self.end_frame_control.set_maximum(last_frame);
        self.start_time_control.set_maximum(total_time);
        self.end_time_control.set_maximum(total_time);
    }

    /// Highlight every scene containing `frame`, replacing the selection.
    pub fn on_current_frame_changed(&mut self, frame: Frame, _time: Time) {
        if !self.open {
            return;
        }
        let rows: Vec<usize> = self.scening_list.read().rows_containing(frame).collect();
        trace!(%frame, ?rows, "highlighting scenes at frame");
        let change = self.selection.select_rows(rows);
        if !change.is_empty() {
            self.on_selection_changed(&change);
        }
    }

    // ── Model → fields ─────────────────────────────────────────

    pub fn on_selection_changed(&mut self, change: &SelectionChange) {
        trace!(?change, "scene selection changed");
        self.refresh_controls(change.selected.first().copied());
    }

    fn refresh_controls(&mut self, preferred: Option<usize>) {
        let row = preferred
            .filter(|row| self.selection.is_selected(*row))
            .or_else(|| self.selection.first());
        let Some(row) = row else {
            self.set_controls_enabled(false);
            return;
        };
        let populated = self.populate_controls(row);
        self.set_controls_enabled(populated);
    }

    /// Display `row` in the controls without writing anything back.
    fn populate_controls(&mut self, row: usize) -> bool {
        let list = self.scening_list.read();
        let Some(scene) = list.get(row) else {
            return false;
        };
        let rate = list.frame_rate();
        self.start_frame_control.set_value(scene.start());
        self.end_frame_control.set_value(scene.end());
        self.start_time_control
            .set_value(Time::from_frame(scene.start(), rate));
        self.end_time_control.set_value(Time::from_frame(scene.end(), rate));
        self.label_edit.set_text(scene.label());
        true
    }

    fn set_controls_enabled(&mut self, enabled: bool) {
        self.delete_button.set_enabled(enabled);
        self.start_frame_control.set_enabled(enabled);
        self.end_frame_control.set_enabled(enabled);
        self.start_time_control.set_enabled(enabled);
        self.end_time_control.set_enabled(enabled);
        self.label_edit.set_enabled(enabled);
    }

    // ── Fields → model ─────────────────────────────────────────

    pub fn on_start_frame_changed(&mut self, frame: Frame) {
        self.write_selected(Column::StartFrame, CellValue::Frame(frame));
    }

    pub fn on_end_frame_changed(&mut self, frame: Frame) {
        self.write_selected(Column::EndFrame, CellValue::Frame(frame));
    }

    pub fn on_start_time_changed(&mut self, time: Time) {
        self.write_selected(Column::StartTime, CellValue::Time(time));
    }

    pub fn on_end_time_changed(&mut self, time: Time) {
        self.write_selected(Column::EndTime, CellValue::Time(time));
    }

    pub fn on_label_changed(&mut self, text: &str) {
        self.write_selected(Column::Label, CellValue::Text(text.to_owned()));
    }

    /// Rename the bound list through the list-of-lists that owns it.
    pub fn on_name_changed(&mut self, text: &str, lists: &mut SceningLists) {
        self.name_edit.set_text(text);
        let id = self.scening_list.read().id();
        let Some(index) = lists.index_of(id) else {
            debug!("bound scening list is not owned by the host, rename ignored");
            return;
        };
        if let Err(err) = lists.set_name(index, text) {
            debug!(%err, index, "scening list rename failed");
        }
    }

    fn write_selected(&mut self, column: Column, value: CellValue) {
        let Some(row) = self.selection.first() else {
            trace!(?column, "no scene selected, edit ignored");
            return;
        };
        let result = self.scening_list.write().set_data(row, column, value);
        match result {
            Ok(to) => {
                debug!(row, to, ?column, "scene edited");
                if to != row {
                    self.own_moves.push_back((row, to));
                    self.on_rows_moved(row, to);
                }
            }
            Err(err) => {
                debug!(row, ?column, %err, "scene edit rejected");
                self.populate_controls(row);
            }
        }
    }

    // ── Table actions ──────────────────────────────────────────

    /// Make `row` the only selected row, as a click on it does.
    pub fn on_row_clicked(&mut self, row: usize) {
        if row >= self.scening_list.read().len() {
            return;
        }
        let change = self.selection.select_row(row);
        if !change.is_empty() {
            self.on_selection_changed(&change);
        }
    }

    pub fn clear_selection(&mut self) {
        let change = self.selection.clear();
        if !change.is_empty() {
            self.on_selection_changed(&change);
        }
    }

    /// Remove the selected scenes and clear the selection.
    pub fn on_delete_clicked(&mut self) {
        let rows = self.selection.selected_rows();
        {
            let mut list = self.scening_list.write();
            for row in rows.iter().rev() {
                if let Err(err) = list.remove(*row) {
                    debug!(row, %err, "scene delete failed");
                }
            }
        }
        let change = self.selection.clear();
        self.on_selection_changed(&change);
    }

    /// Frame to navigate to for a double-clicked cell. Time cells resolve
    /// their frame column on the same row; the label column has none.
    pub fn on_table_double_clicked(&self, row: usize, column: Column) -> Option<Frame> {
        let frame_column = column.frame_column()?;
        self.scening_list.read().data(row, frame_column)?.as_frame()
    }

    /// Keep the selection on a row the model just moved. A selected row is
    /// re-selected once the move has settled.
    pub fn on_rows_moved(&mut self, from: usize, to: usize) {
        let was_selected = self.selection.is_selected(from);
        self.selection.row_moved(from, to);
        if was_selected {
            self.deferred
                .retain(|action| *action != DeferredAction::SelectRow(from));
            self.deferred.push_back(DeferredAction::SelectRow(to));
        }
    }

    // ── Event pump ─────────────────────────────────────────────

    /// Run work deferred by the previous pass, then drain notifications.
    pub fn tick(&mut self) {
        self.run_deferred();
        self.process_events();
    }

    pub fn run_deferred(&mut self) {
        let pending: Vec<DeferredAction> = self.deferred.drain(..).collect();
        for action in pending {
            match action {
                DeferredAction::SelectRow(row) => {
                    if row >= self.scening_list.read().len() {
                        continue;
                    }
                    let change = self.selection.select_row(row);
                    self.on_selection_changed(&change);
                }
            }
        }
    }

    pub fn process_events(&mut self) {
        let mut refresh = false;
        for event in self.subscription.drain() {
            trace!(?event, "scening dialog event");
            match event {
                SceningListEvent::RowsInserted { first, last } => {
                    self.selection.rows_inserted(first, last);
                }
                SceningListEvent::RowsRemoved { first, last } => {
                    refresh |= !self.selection.rows_removed(first, last).is_empty();
                }
                SceningListEvent::RowsMoved { from, to } => {
                    if self.own_moves.front() == Some(&(from, to)) {
                        self.own_moves.pop_front();
                    } else {
                        self.on_rows_moved(from, to);
                    }
                }
                SceningListEvent::DataChanged { row } => {
                    refresh |= self.selection.is_selected(row);
                }
                SceningListEvent::Renamed => {
                    let name = self.scening_list.read().name().to_owned();
                    self.name_edit.set_text(name);
                }
            }
        }
        if refresh {
            self.refresh_controls(None);
        }
    }

    // ── Rendering ──────────────────────────────────────────────

    /// Show the dialog as a floating egui window.
    ///
    /// Returns any actions the caller should handle.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        lists: &mut SceningLists,
    ) -> Vec<SceningDialogAction> {
        let mut actions = Vec::new();
        self.tick();

        if !self.open {
            return actions;
        }

        let mut still_open = self.open;
        egui::Window::new(WINDOW_TITLE)
            .open(&mut still_open)
            .resizable(true)
            .collapsible(false)
            .default_size(Vec2::new(720.0, 420.0))
            .frame(Theme::dialog_frame())
            .show(ctx, |ui| self.draw(ui, lists, &mut actions));
        self.open = still_open;

        self.process_events();
        if !self.deferred.is_empty() {
            ctx.request_repaint();
        }
        actions
    }

    fn draw(
        &mut self,
        ui: &mut egui::Ui,
        lists: &mut SceningLists,
        actions: &mut Vec<SceningDialogAction>,
    ) {
        ui.spacing_mut().item_spacing = Vec2::new(Theme::SPACE_SM, Theme::SPACE_XS);

        Theme::section_label(ui, "LIST NAME");
        if let Some(text) = self.name_edit.show(ui) {
            self.on_name_changed(&text, lists);
        }
        ui.add_space(Theme::SPACE_XS);

        let interaction = self.draw_table(ui);
        if let Some(row) = interaction.clicked {
            self.on_row_clicked(row);
        }
        if let Some((row, column)) = interaction.double_clicked {
            if let Some(frame) = self.on_table_double_clicked(row, column) {
                actions.push(SceningDialogAction::SwitchFrame(frame));
            }
        }

        ui.add_space(Theme::SPACE_XS);
        Theme::draw_separator(ui);
        ui.add_space(Theme::SPACE_XS);

        ui.horizontal(|ui| {
            if let Some(frame) = self.start_frame_control.show(ui) {
                self.on_start_frame_changed(frame);
            }
            if let Some(frame) = self.end_frame_control.show(ui) {
                self.on_end_frame_changed(frame);
            }
            if let Some(time) = self.start_time_control.show(ui) {
                self.on_start_time_changed(time);
            }
            if let Some(time) = self.end_time_control.show(ui) {
                self.on_end_time_changed(time);
            }
            if let Some(text) = self.label_edit.show(ui) {
                self.on_label_changed(&text);
            }
            if self.delete_button.show(ui) {
                self.on_delete_clicked();
            }
        });
    }

    fn draw_table(&self, ui: &mut egui::Ui) -> TableInteraction {
        let cells: Vec<[String; Column::COUNT]> = {
            let list = self.scening_list.read();
            (0..list.len())
                .map(|row| {
                    Column::ALL.map(|column| {
                        list.data(row, column)
                            .map(|value| value.to_string())
                            .unwrap_or_default()
                    })
                })
                .collect()
        };

        let mut interaction = TableInteraction::default();
        let table_height = (ui.available_height() - 2.0 * Theme::ROW_HEIGHT - Theme::SPACE_MD)
            .max(4.0 * Theme::ROW_HEIGHT);

        let mut builder = TableBuilder::new(ui)
            .striped(true)
            .sense(egui::Sense::click())
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .max_scroll_height(table_height);
        for column in Column::ALL {
            builder = builder.column(match column_policy(column) {
                ResizePolicy::Stretch => TableColumn::remainder().at_least(120.0),
                ResizePolicy::ResizeToContents => TableColumn::auto(),
            });
        }

        builder
            .header(Theme::ROW_HEIGHT, |mut header| {
                for column in Column::ALL {
                    header.col(|ui| {
                        Theme::section_label(ui, column.title());
                    });
                }
            })
            .body(|body| {
                body.rows(Theme::ROW_HEIGHT, cells.len(), |mut row| {
                    let index = row.index();
                    row.set_selected(self.selection.is_selected(index));
                    for column in Column::ALL {
                        let text = cells[index][column.index()].as_str();
                        let (_, response) = row.col(|ui| {
                            if column == Column::LABEL {
                                ui.label(text);
                            } else {
                                ui.label(
                                    egui::RichText::new(text)
                                        .monospace()
                                        .size(Theme::FONT_MONO),
                                );
                            }
                        });
                        if response.double_clicked() {
                            interaction.double_clicked = Some((index, column));
                        } else if response.clicked() {
                            interaction.clicked = Some(index);
                        }
                    }
                });
            });

        interaction
    }
}

impl Default for SceningListDialog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use framescope_core::FrameRate;

    fn f(i: u32) -> Frame {
        Frame::new(i)
    }

    fn bound_dialog() -> (SceningListDialog, SharedSceningList) {
        let mut list = SceningList::new("cuts").with_frame_rate(FrameRate::FPS_24);
        list.add(f(0), Some(f(10)), "a").unwrap();
        list.add(f(20), Some(f(30)), "b").unwrap();
        let shared = list.into_shared();

        let mut dialog = SceningListDialog::new();
        dialog.open = true;
        dialog.on_current_list_changed(shared.clone());
        (dialog, shared)
    }

    fn select(dialog: &mut SceningListDialog, row: usize) {
        dialog.on_row_clicked(row);
    }

    #[test]
    fn test_label_column_stretches() {
        for column in Column::ALL {
            let expected = if column == Column::Label {
                ResizePolicy::Stretch
            } else {
                ResizePolicy::ResizeToContents
            };
            assert_eq!(column_policy(column), expected);
        }
    }

    #[test]
    fn test_new_dialog_starts_disabled() {
        let dialog = SceningListDialog::new();
        assert!(!dialog.open);
        assert!(!dialog.delete_button().is_enabled());
        assert!(!dialog.label_edit().is_enabled());
        assert_eq!(dialog.label_edit().placeholder(), "Label");
    }

    #[test]
    fn test_selection_populates_controls() {
        let (mut dialog, _) = bound_dialog();
        select(&mut dialog, 1);
        assert!(dialog.controls_enabled());
        assert_eq!(dialog.start_frame_control().value(), f(20));
        assert_eq!(dialog.end_frame_control().value(), f(30));
        assert_eq!(dialog.start_time_control().value(), Time::new(20, 24));
        assert_eq!(dialog.end_time_control().value(), Time::new(30, 24));
        assert_eq!(dialog.label_edit().text(), "b");
    }

    #[test]
    fn test_edits_without_selection_are_ignored() {
        let (mut dialog, list) = bound_dialog();
        let events = list.write().subscribe();
        dialog.on_end_frame_changed(f(15));
        dialog.on_label_changed("x");
        dialog.on_start_time_changed(Time::new(1, 1));
        assert!(events.is_empty());
        assert_eq!(list.read().get(0).unwrap().end(), f(10));
    }

    #[test]
    fn test_rejected_edit_resyncs_controls() {
        let (mut dialog, list) = bound_dialog();
        select(&mut dialog, 0);
        dialog.on_start_frame_changed(f(50));
        assert_eq!(list.read().get(0).unwrap().start(), f(0));
        assert_eq!(dialog.start_frame_control().value(), f(0));
    }

    #[test]
    fn test_time_edit_writes_frame() {
        let (mut dialog, list) = bound_dialog();
        select(&mut dialog, 1);
        dialog.on_end_time_changed(Time::new(3, 2));
        assert_eq!(list.read().get(1).unwrap().end(), f(36));
        dialog.tick();
        assert_eq!(dialog.end_frame_control().value(), f(36));
    }

    #[test]
    fn test_reordering_edit_moves_selection_at_once() {
        let (mut dialog, list) = bound_dialog();
        select(&mut dialog, 0);
        dialog.on_end_frame_changed(f(40));
        dialog.on_start_frame_changed(f(25));
        assert_eq!(dialog.selection().selected_rows(), vec![1]);
        assert_eq!(dialog.pending_deferred(), 1);

        dialog.on_label_changed("a2");
        assert_eq!(list.read().get(0).unwrap().label(), "b");
        assert_eq!(list.read().get(1).unwrap().label(), "a2");

        dialog.tick();
        assert_eq!(dialog.selection().selected_rows(), vec![1]);
        assert_eq!(dialog.pending_deferred(), 0);
        assert_eq!(dialog.label_edit().text(), "a2");
    }

    #[test]
    fn test_external_move_still_followed() {
        let (mut dialog, list) = bound_dialog();
        select(&mut dialog, 1);
        {
            let mut list = list.write();
            list.set_data(0, Column::EndFrame, CellValue::Frame(f(40))).unwrap();
            list.set_data(0, Column::StartFrame, CellValue::Frame(f(22))).unwrap();
        }
        dialog.tick();
        assert_eq!(dialog.selection().selected_rows(), vec![0]);
        assert_eq!(dialog.pending_deferred(), 0);
        assert_eq!(dialog.label_edit().text(), "b");
    }

    #[test]
    fn test_double_click_navigation() {
        let (dialog, _) = bound_dialog();
        assert_eq!(dialog.on_table_double_clicked(1, Column::StartFrame), Some(f(20)));
        assert_eq!(dialog.on_table_double_clicked(1, Column::EndFrame), Some(f(30)));
        assert_eq!(dialog.on_table_double_clicked(0, Column::StartTime), Some(f(0)));
        assert_eq!(dialog.on_table_double_clicked(0, Column::EndTime), Some(f(10)));
        assert_eq!(dialog.on_table_double_clicked(0, Column::Label), None);
        assert_eq!(dialog.on_table_double_clicked(9, Column::StartFrame), None);
    }

    #[test]
    fn test_highlight_skipped_when_closed() {
        let (mut dialog, _) = bound_dialog();
        dialog.open = false;
        dialog.on_current_frame_changed(f(5), Time::ZERO);
        assert!(dialog.selection().is_empty());
    }

    #[test]
    fn test_overlapping_scenes_all_highlighted() {
        let (mut dialog, list) = bound_dialog();
        list.write().add(f(5), Some(f(25)), "wide").unwrap();
        dialog.tick();
        dialog.on_current_frame_changed(f(22), Time::ZERO);
        assert_eq!(dialog.selection().selected_rows(), vec![1, 2]);
        assert!(dialog.controls_enabled());
    }

    #[test]
    fn test_output_bounds_clamp_controls() {
        let (mut dialog, _) = bound_dialog();
        select(&mut dialog, 1);
        dialog.on_current_output_changed(&OutputInfo::new("short", 25, FrameRate::FPS_24));
        assert_eq!(dialog.start_frame_control().maximum(), f(24));
        assert_eq!(dialog.end_frame_control().value(), f(24));
        assert_eq!(dialog.end_time_control().maximum(), Some(Time::new(25, 24)));
    }

    #[test]
    fn test_external_insert_shifts_selection() {
        let (mut dialog, list) = bound_dialog();
        select(&mut dialog, 1);
        list.write().add(f(2), Some(f(4)), "early").unwrap();
        dialog.tick();
        assert_eq!(dialog.selection().selected_rows(), vec![2]);
        assert_eq!(dialog.label_edit().text(), "b");
    }

    #[test]
    fn test_external_remove_of_selected_row_disables_controls() {
        let (mut dialog, list) = bound_dialog();
        select(&mut dialog, 0);
        list.write().remove(0).unwrap();
        dialog.tick();
        assert!(dialog.selection().is_empty());
        assert!(!dialog.controls_enabled());
    }

    #[test]
    fn test_external_rename_updates_name_field() {
        let (mut dialog, list) = bound_dialog();
        list.write().set_name("renamed");
        dialog.tick();
        assert_eq!(dialog.name_edit().text(), "renamed");
    }
}
