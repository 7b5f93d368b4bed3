//! Tests for the drag session controller.

use super::*;
use crate::model::identifiers::sequential_ids;

const FRAME: Duration = Duration::from_millis(16);

#[derive(Default)]
struct RecordingTarget {
    requests: Vec<f64>,
}

impl ScrollTarget for RecordingTarget {
    fn scroll_to_offset(&mut self, offset: f64) {
        self.requests.push(offset);
    }
}

/// Controller with `rows` rows, 70-unit rows, a 700-unit viewport at the top
/// of the screen.
fn controller_with_rows(rows: u32) -> DragController {
    let mut controller = DragController::new(DragConfig::default());
    controller
        .load_initial_order(sequential_ids(rows))
        .expect("unique ids");
    controller.on_layout(700.0, 0.0);
    controller
}

/// Pointer coordinate at the vertical center of row `index` (no scroll).
fn center_of(index: usize) -> f64 {
    index as f64 * 70.0 + 35.0
}

fn order(controller: &DragController) -> Vec<u32> {
    controller.snapshot().iter().map(|row| row.get()).collect()
}

// ===== position_to_index =====

#[test]
fn position_to_index_maps_row_centers() {
    let controller = controller_with_rows(5);
    for index in 0..5 {
        assert_eq!(controller.position_to_index(center_of(index)), Some(index));
    }
}

#[test]
fn position_to_index_clamps_above_and_below() {
    let controller = controller_with_rows(5);
    assert_eq!(controller.position_to_index(-10_000.0), Some(0));
    assert_eq!(controller.position_to_index(10_000.0), Some(4));
    assert_eq!(controller.position_to_index(f64::NEG_INFINITY), Some(0));
    assert_eq!(controller.position_to_index(f64::INFINITY), Some(4));
    assert_eq!(controller.position_to_index(f64::NAN), Some(0));
}

#[test]
fn position_to_index_compensates_scroll_and_top_offset() {
    let mut controller = controller_with_rows(20);
    controller.on_layout(700.0, 50.0);
    controller.on_scroll(140.0).unwrap();
    // 60 + 140 - 50 = 150 → row 2
    assert_eq!(controller.position_to_index(60.0), Some(2));
}

#[test]
fn position_to_index_on_empty_list_is_none() {
    let controller = DragController::new(DragConfig::default());
    assert_eq!(controller.position_to_index(100.0), None);
}

// ===== start =====

#[test]
fn start_lifts_row_under_pointer() {
    let mut controller = controller_with_rows(5);
    assert!(controller.start(center_of(2)));

    let session = controller.session();
    assert!(session.is_active());
    assert_eq!(session.dragged_index(), Some(2));
    assert_eq!(session.origin_index(), Some(2));
}

#[test]
fn start_on_empty_list_does_nothing() {
    let mut controller = DragController::new(DragConfig::default());
    assert!(!controller.start(10.0));
    assert!(!controller.session().is_active());
}

#[test]
fn start_marks_row_hidden_in_place_and_shows_ghost() {
    let mut controller = controller_with_rows(5);
    controller.start(center_of(2));

    let views = controller.row_views();
    let dragged: Vec<_> = views.iter().filter(|v| v.is_being_dragged).collect();
    assert_eq!(dragged.len(), 1);
    assert_eq!(dragged[0].index, 2);

    let ghost = controller.ghost().expect("ghost while dragging");
    assert_eq!(ghost.view.row, RowId::new(2));
    assert_eq!(ghost.top, center_of(2) - 35.0);
}

// ===== move_to =====

#[test]
fn move_to_top_reorders_like_single_relocation() {
    let mut controller = controller_with_rows(5);
    controller.start(center_of(2));

    let outcome = controller.move_to(10.0).unwrap();

    assert_eq!(outcome, MoveOutcome::Reordered { from: 2, to: 0 });
    assert_eq!(order(&controller), vec![2, 0, 1, 3, 4]);
    assert_eq!(controller.session().dragged_index(), Some(0));
}

#[test]
fn move_to_bottom_reorders_like_single_relocation() {
    let mut controller = controller_with_rows(5);
    controller.start(center_of(2));

    controller.move_to(center_of(4)).unwrap();

    assert_eq!(order(&controller), vec![0, 1, 3, 4, 2]);
    assert_eq!(controller.session().dragged_index(), Some(4));
}

#[test]
fn move_within_same_row_is_unchanged() {
    let mut controller = controller_with_rows(5);
    controller.start(center_of(2));
    let before = controller.snapshot();

    let outcome = controller.move_to(center_of(2) + 20.0).unwrap();

    assert_eq!(outcome, MoveOutcome::Unchanged);
    assert!(controller.snapshot().same_identity(&before));
}

#[test]
fn successive_moves_track_current_index_not_origin() {
    let mut controller = controller_with_rows(5);
    controller.start(center_of(1));

    controller.move_to(center_of(3)).unwrap();
    controller.move_to(center_of(2)).unwrap();

    assert_eq!(order(&controller), vec![0, 2, 1, 3, 4]);
    assert_eq!(controller.session().dragged_index(), Some(2));
    assert_eq!(controller.session().origin_index(), Some(1));
}

#[test]
fn move_without_active_drag_is_ignored() {
    let mut controller = controller_with_rows(5);
    let outcome = controller.move_to(center_of(4)).unwrap();
    assert_eq!(outcome, MoveOutcome::Unchanged);
    assert_eq!(order(&controller), vec![0, 1, 2, 3, 4]);
    assert!(!controller.is_auto_scrolling());
}

#[test]
fn ghost_follows_pointer() {
    let mut controller = controller_with_rows(5);
    controller.start(center_of(2));
    controller.move_to(300.0).unwrap();
    let ghost = controller.ghost().unwrap();
    assert_eq!(ghost.top, 265.0);
    assert_eq!(ghost.view.row, RowId::new(2));
}

// ===== auto-scroll =====

#[test]
fn bottom_edge_engages_positive_scroll() {
    let mut controller = controller_with_rows(20);
    controller.start(center_of(5));

    controller.move_to(650.0).unwrap();

    assert_eq!(controller.auto_scroll_direction(), Some(ScrollDirection::Down));
}

#[test]
fn top_edge_engages_negative_scroll() {
    let mut controller = controller_with_rows(20);
    controller.start(center_of(5));

    controller.move_to(40.0).unwrap();

    assert_eq!(controller.auto_scroll_direction(), Some(ScrollDirection::Up));
}

#[test]
fn middle_zone_stops_scroll_without_further_offset_changes() {
    let mut controller = controller_with_rows(20);
    let mut target = RecordingTarget::default();
    let now = Instant::now();
    controller.start(center_of(5));

    controller.move_to(650.0).unwrap();
    assert_eq!(controller.tick(now, &mut target), Some(20.0));
    controller.on_scroll(20.0).unwrap();
    assert_eq!(controller.tick(now + FRAME, &mut target), Some(40.0));
    controller.on_scroll(40.0).unwrap();

    controller.move_to(350.0).unwrap();
    assert!(!controller.is_auto_scrolling());
    assert_eq!(controller.tick(now + FRAME * 2, &mut target), None);
    assert_eq!(controller.tick(now + FRAME * 3, &mut target), None);

    assert_eq!(target.requests, vec![20.0, 40.0]);
    assert_eq!(controller.time_until_tick(now + FRAME * 3), None);
}

#[test]
fn resting_pointer_keeps_scrolling_without_new_samples() {
    let mut controller = controller_with_rows(50);
    let mut target = RecordingTarget::default();
    let now = Instant::now();
    controller.start(center_of(5));
    controller.move_to(690.0).unwrap();

    for frame in 0..5 {
        if let Some(offset) = controller.tick(now + FRAME * frame, &mut target) {
            controller.on_scroll(offset).unwrap();
        }
    }

    assert_eq!(target.requests, vec![20.0, 40.0, 60.0, 80.0, 100.0]);
}

#[test]
fn scroll_feedback_reorders_under_resting_pointer() {
    let mut controller = controller_with_rows(20);
    controller.start(650.0);
    assert_eq!(controller.session().dragged_index(), Some(9));
    controller.move_to(650.0).unwrap();

    assert_eq!(controller.on_scroll(20.0).unwrap(), MoveOutcome::Unchanged);
    assert_eq!(
        controller.on_scroll(70.0).unwrap(),
        MoveOutcome::Reordered { from: 9, to: 10 }
    );
    assert_eq!(controller.snapshot().get(10), Some(RowId::new(9)));
}

#[test]
fn scroll_while_idle_only_updates_geometry() {
    let mut controller = controller_with_rows(20);
    let before = controller.snapshot();
    assert_eq!(controller.on_scroll(210.0).unwrap(), MoveOutcome::Unchanged);
    assert_eq!(controller.viewport().scroll_offset(), 210.0);
    assert!(controller.snapshot().same_identity(&before));
}

#[test]
fn unknown_geometry_degrades_without_auto_scroll() {
    let mut controller = DragController::new(DragConfig::default());
    controller.load_initial_order(sequential_ids(5)).unwrap();

    assert!(controller.start(center_of(3)));
    controller.move_to(10.0).unwrap();

    assert!(!controller.is_auto_scrolling());
    assert_eq!(order(&controller), vec![3, 0, 1, 2, 4]);
}

// ===== reset =====

#[test]
fn reset_keeps_last_order_and_clears_session() {
    let mut controller = controller_with_rows(5);
    controller.start(center_of(2));
    controller.move_to(10.0).unwrap();
    assert!(controller.is_auto_scrolling());

    assert!(controller.reset());

    assert!(!controller.session().is_active());
    assert_eq!(controller.session().dragged_index(), None);
    assert!(!controller.is_auto_scrolling());
    assert!(controller.ghost().is_none());
    assert_eq!(order(&controller), vec![2, 0, 1, 3, 4], "no rollback");
}

#[test]
fn reset_forces_new_snapshot_identity() {
    let mut controller = controller_with_rows(5);
    controller.start(center_of(2));
    let during = controller.snapshot();

    controller.reset();

    assert!(!controller.snapshot().same_identity(&during));
    assert_eq!(controller.snapshot(), during);
}

#[test]
fn reset_twice_matches_reset_once() {
    let mut controller = controller_with_rows(5);
    controller.start(center_of(2));
    controller.move_to(center_of(0)).unwrap();

    controller.reset();
    let session_once = *controller.session();
    let snapshot_once = controller.snapshot();

    assert!(!controller.reset());
    assert_eq!(*controller.session(), session_once);
    assert!(controller.snapshot().same_identity(&snapshot_once));
}

#[test]
fn reset_halts_pending_tick() {
    let mut controller = controller_with_rows(20);
    let mut target = RecordingTarget::default();
    let now = Instant::now();
    controller.start(center_of(5));
    controller.move_to(650.0).unwrap();

    controller.reset();

    assert_eq!(controller.tick(now, &mut target), None);
    assert!(target.requests.is_empty());
}

// ===== row views =====

#[test]
fn row_views_in_clamps_range() {
    let controller = controller_with_rows(5);
    let views = controller.row_views_in(3..99);
    let indices: Vec<_> = views.iter().map(|v| v.index).collect();
    assert_eq!(indices, vec![3, 4]);
    assert!(controller.row_views_in(7..9).is_empty());
}

#[test]
fn load_initial_order_resets_active_drag() {
    let mut controller = controller_with_rows(5);
    controller.start(center_of(1));
    controller.load_initial_order(sequential_ids(3)).unwrap();
    assert!(!controller.session().is_active());
    assert_eq!(controller.snapshot().len(), 3);
}
