//! Integration tests for the scening list dialog.
//!
//! Exercises the dialog bound to lists owned by a `SceningLists`, with
//! notifications pumped through `tick` as the UI loop would.

use framescope_core::{Frame, FrameRate, OutputInfo, Time};
use framescope_scening::{CellValue, Column, SceningLists, SharedSceningList};
use framescope_ui::SceningListDialog;

// ── Helpers ────────────────────────────────────────────────────

fn f(i: u32) -> Frame {
    Frame::new(i)
}

fn scenes(list: &SharedSceningList) -> Vec<(u32, u32, String)> {
    list.read()
        .iter()
        .map(|s| (s.start().get(), s.end().get(), s.label().to_owned()))
        .collect()
}

/// Lists `[cuts, other]`, with `cuts` holding `[(0,10,"a"), (20,30,"b")]`,
/// and an open dialog bound to `cuts`.
fn setup() -> (SceningListDialog, SceningLists, SharedSceningList) {
    let mut lists = SceningLists::new();
    let (_, cuts) = lists.add("cuts", FrameRate::FPS_24);
    lists.add("other", FrameRate::FPS_24);
    {
        let mut list = cuts.write();
        list.add(f(0), Some(f(10)), "a").unwrap();
        list.add(f(20), Some(f(30)), "b").unwrap();
    }

    let mut dialog = SceningListDialog::new();
    dialog.open = true;
    dialog.on_current_output_changed(&OutputInfo::new("out", 1000, FrameRate::FPS_24));
    dialog.on_current_list_changed(cuts.clone());
    (dialog, lists, cuts)
}

fn highlight(dialog: &mut SceningListDialog, frame: u32) -> Vec<usize> {
    dialog.on_current_frame_changed(f(frame), Time::from_frame(f(frame), FrameRate::FPS_24));
    dialog.selection().selected_rows()
}

// ── Frame-position highlighting ────────────────────────────────

#[test]
fn current_frame_selects_containing_scenes() {
    let (mut dialog, _lists, _cuts) = setup();
    assert_eq!(highlight(&mut dialog, 5), vec![0]);
    assert_eq!(highlight(&mut dialog, 25), vec![1]);
    assert!(highlight(&mut dialog, 15).is_empty());
    assert!(!dialog.controls_enabled());
}

#[test]
fn scene_boundaries_are_inclusive() {
    let (mut dialog, _lists, _cuts) = setup();
    assert_eq!(highlight(&mut dialog, 10), vec![0]);
    assert_eq!(highlight(&mut dialog, 20), vec![1]);
}

// ── Field edits ────────────────────────────────────────────────

#[test]
fn end_frame_edit_updates_selected_scene_only() {
    let (mut dialog, _lists, cuts) = setup();
    dialog.on_row_clicked(0);
    dialog.on_end_frame_changed(f(12));
    dialog.tick();

    assert_eq!(
        scenes(&cuts),
        vec![(0, 12, "a".to_owned()), (20, 30, "b".to_owned())]
    );
    assert_eq!(dialog.end_frame_control().value(), f(12));
    assert_eq!(dialog.end_time_control().value(), Time::new(12, 24));
}

#[test]
fn last_written_value_wins() {
    let (mut dialog, _lists, cuts) = setup();
    dialog.on_row_clicked(1);
    dialog.on_label_changed("b2");
    dialog.on_label_changed("b3");
    dialog.on_end_time_changed(Time::new(2, 1));
    dialog.tick();

    assert_eq!(cuts.read().get(1).unwrap().label(), "b3");
    assert_eq!(cuts.read().get(1).unwrap().end(), f(48));
    assert_eq!(dialog.label_edit().text(), "b3");
}

#[test]
fn deselect_disables_and_reselect_repopulates_from_model() {
    let (mut dialog, _lists, cuts) = setup();
    dialog.on_row_clicked(0);
    assert!(dialog.controls_enabled());

    dialog.clear_selection();
    assert!(!dialog.controls_enabled());

    cuts.write()
        .set_data(0, Column::Label, CellValue::Text("changed".into()))
        .unwrap();
    dialog.tick();
    assert!(!dialog.controls_enabled());

    dialog.on_row_clicked(0);
    assert!(dialog.controls_enabled());
    assert_eq!(dialog.label_edit().text(), "changed");
    assert_eq!(dialog.end_frame_control().value(), f(10));
}

// ── Delete & rename ────────────────────────────────────────────

#[test]
fn delete_removes_selected_scene_and_clears_selection() {
    let (mut dialog, _lists, cuts) = setup();
    dialog.on_row_clicked(1);
    dialog.on_delete_clicked();
    dialog.tick();

    assert_eq!(scenes(&cuts), vec![(0, 10, "a".to_owned())]);
    assert!(dialog.selection().is_empty());
    assert!(!dialog.controls_enabled());
}

#[test]
fn delete_removes_every_highlighted_scene() {
    let (mut dialog, _lists, cuts) = setup();
    cuts.write().add(f(5), Some(f(25)), "wide").unwrap();
    dialog.tick();
    assert_eq!(highlight(&mut dialog, 22), vec![1, 2]);

    dialog.on_delete_clicked();
    dialog.tick();
    assert_eq!(scenes(&cuts), vec![(0, 10, "a".to_owned())]);
}

#[test]
fn rename_is_visible_through_owning_lists() {
    let (mut dialog, mut lists, _cuts) = setup();
    dialog.on_name_changed("Cuts v2", &mut lists);
    dialog.tick();

    assert_eq!(lists.name(0).as_deref(), Some("Cuts v2"));
    assert_eq!(lists.name(1).as_deref(), Some("other"));
    assert_eq!(dialog.name_edit().text(), "Cuts v2");
}

// ── List switching ─────────────────────────────────────────────

#[test]
fn old_list_no_longer_notifies_after_switch() {
    let (mut dialog, lists, cuts) = setup();
    dialog.on_row_clicked(0);

    let other = lists.get(1).unwrap().clone();
    dialog.on_current_list_changed(other.clone());
    assert_eq!(dialog.name_edit().text(), "other");
    assert!(dialog.label_edit().text().is_empty());
    assert!(!dialog.controls_enabled());

    cuts.write().add(f(40), Some(f(50)), "late").unwrap();
    cuts.write().set_name("renamed elsewhere");
    dialog.tick();

    assert_eq!(dialog.name_edit().text(), "other");
    assert!(dialog.selection().is_empty());
    assert_eq!(cuts.read().subscriber_count(), 0);
    assert_eq!(other.read().subscriber_count(), 1);
}

#[test]
fn switch_back_rebinds_to_current_contents() {
    let (mut dialog, lists, cuts) = setup();
    dialog.on_current_list_changed(lists.get(1).unwrap().clone());
    cuts.write().remove(0).unwrap();
    dialog.on_current_list_changed(cuts.clone());

    assert_eq!(highlight(&mut dialog, 25), vec![0]);
    assert_eq!(dialog.label_edit().text(), "b");
}

// ── Reordering ─────────────────────────────────────────────────

#[test]
fn start_frame_edit_that_reorders_keeps_selection_on_scene() {
    let (mut dialog, _lists, cuts) = setup();
    dialog.on_row_clicked(0);
    dialog.on_end_frame_changed(f(40));
    dialog.tick();

    dialog.on_start_frame_changed(f(25));
    assert_eq!(
        scenes(&cuts),
        vec![(20, 30, "b".to_owned()), (25, 40, "a".to_owned())]
    );

    assert_eq!(dialog.selection().selected_rows(), vec![1]);
    assert_eq!(dialog.pending_deferred(), 1);

    dialog.tick();
    assert_eq!(dialog.pending_deferred(), 0);
    assert_eq!(dialog.selection().selected_rows(), vec![1]);
    assert_eq!(dialog.label_edit().text(), "a");
    assert_eq!(dialog.start_frame_control().value(), f(25));
    assert!(dialog.controls_enabled());

    dialog.tick();
    assert_eq!(dialog.selection().selected_rows(), vec![1]);
}

#[test]
fn edits_after_reorder_reach_moved_scene_before_tick() {
    let (mut dialog, _lists, cuts) = setup();
    dialog.on_row_clicked(0);
    dialog.on_end_frame_changed(f(40));
    dialog.on_start_frame_changed(f(25));
    dialog.on_label_changed("a2");
    dialog.on_end_frame_changed(f(45));

    assert_eq!(
        scenes(&cuts),
        vec![(20, 30, "b".to_owned()), (25, 45, "a2".to_owned())]
    );

    dialog.tick();
    assert_eq!(dialog.selection().selected_rows(), vec![1]);
    assert_eq!(dialog.label_edit().text(), "a2");
    assert_eq!(dialog.end_frame_control().value(), f(45));
}

#[test]
fn consecutive_reorders_follow_scene() {
    let (mut dialog, _lists, cuts) = setup();
    cuts.write().add(f(50), Some(f(60)), "c").unwrap();
    dialog.tick();

    dialog.on_row_clicked(0);
    dialog.on_end_frame_changed(f(70));
    dialog.on_start_frame_changed(f(25));
    dialog.on_start_frame_changed(f(55));
    assert_eq!(dialog.selection().selected_rows(), vec![2]);
    assert_eq!(dialog.pending_deferred(), 1);

    dialog.on_label_changed("last");
    dialog.tick();
    dialog.tick();

    assert_eq!(
        scenes(&cuts),
        vec![
            (20, 30, "b".to_owned()),
            (50, 60, "c".to_owned()),
            (55, 70, "last".to_owned())
        ]
    );
    assert_eq!(dialog.selection().selected_rows(), vec![2]);
    assert_eq!(dialog.label_edit().text(), "last");
}

#[test]
fn start_after_end_is_rejected() {
    let (mut dialog, _lists, cuts) = setup();
    dialog.on_row_clicked(0);
    dialog.on_start_frame_changed(f(11));
    dialog.tick();

    assert_eq!(cuts.read().get(0).unwrap().start(), f(0));
    assert_eq!(dialog.start_frame_control().value(), f(0));
}

// ── Navigation ─────────────────────────────────────────────────

#[test]
fn double_click_resolves_frames() {
    let (dialog, _lists, _cuts) = setup();
    assert_eq!(dialog.on_table_double_clicked(1, Column::EndTime), Some(f(30)));
    assert_eq!(dialog.on_table_double_clicked(0, Column::StartFrame), Some(f(0)));
    assert_eq!(dialog.on_table_double_clicked(1, Column::Label), None);
}
