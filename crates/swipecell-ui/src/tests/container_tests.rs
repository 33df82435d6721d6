use super::*;

use std::cell::RefCell;

use crate::gesture::GestureDisposition;
use crate::row::RowHit;
use crate::state::SwipeState;
use crate::test_support::{drag, two_right_actions, Harness, ROW_HEIGHT};
use crate::SwipeOrientation::Right;

fn center_of(index: u64, x: f32) -> Point {
    Point::new(x, index as f32 * ROW_HEIGHT + ROW_HEIGHT / 2.0)
}

#[test]
fn dragging_a_row_closes_the_open_one_first() {
    let mut harness = Harness::new(two_right_actions());
    let first = harness.row(0);
    let second = harness.row(1);
    first.show_swipe(Right, false, |_| {});
    assert_eq!(harness.container.open_row(), Some(first.clone()));

    drag(&second, -90.0, 0.0);

    assert_eq!(first.state(), SwipeState::Center);
    assert_eq!(first.swipe_offset(), 0.0);
    assert_eq!(second.state(), SwipeState::Expanded(Right));
    assert_eq!(
        harness.delegate.events(),
        vec!["will_begin #0 right", "did_end #0 right", "will_begin #1 right"]
    );
    harness.settle();
    assert_eq!(harness.container.open_row(), Some(second));
}

#[test]
fn showing_a_row_closes_an_animating_one() {
    let mut harness = Harness::new(two_right_actions());
    let first = harness.row(0);
    let second = harness.row(1);
    let finished = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&finished);
    first.show_swipe(Right, true, move |done| sink.borrow_mut().push(done));
    harness.frame();
    second.show_swipe(Right, false, |_| {});

    assert_eq!(first.state(), SwipeState::Center);
    assert_eq!(*finished.borrow(), vec![false]);
    harness.settle();
    assert_eq!(*finished.borrow(), vec![false]);
    assert_eq!(second.swipe_offset(), -160.0);
}

#[test]
fn rebinding_resets_and_moves_items() {
    let harness = Harness::new(two_right_actions());
    let first = harness.row(0);
    let second = harness.row(1);
    first.show_swipe(Right, false, |_| {});

    harness.container.bind(&first, ItemKey(5));
    assert_eq!(first.state(), SwipeState::Center);
    assert_eq!(first.item(), Some(ItemKey(5)));

    harness.container.bind(&second, ItemKey(5));
    assert_eq!(first.item(), None);
    assert_eq!(second.item(), Some(ItemKey(5)));
    assert_eq!(harness.container.row_for_item(ItemKey(5)), Some(second));
    assert_eq!(harness.container.row_for_item(ItemKey(0)), None);
}

#[test]
fn recycling_a_closing_row_drops_its_completion() {
    let mut harness = Harness::new(two_right_actions());
    harness.delegate.selected.borrow_mut().push(ItemKey(0));
    let row = harness.row(0);
    let finished = Rc::new(RefCell::new(Vec::new()));

    drag(&row, -90.0, 0.0);
    harness.settle();
    let sink = Rc::clone(&finished);
    row.hide_swipe(true, move |done| sink.borrow_mut().push(done));
    harness.frame();
    assert_eq!(row.state(), SwipeState::AnimatingToCenter);

    harness.container.prepare_for_reuse(&row);
    harness.settle();

    assert!(finished.borrow().is_empty());
    assert_eq!(row.state(), SwipeState::Center);
    assert_eq!(row.item(), None);
    assert_eq!(*harness.delegate.selected.borrow(), vec![ItemKey(0)]);
    assert_eq!(
        harness.delegate.events(),
        vec!["select #0 false", "will_begin #0 right", "select #0 true"]
    );
}

#[test]
fn scrolling_closes_open_rows_with_animation() {
    let mut harness = Harness::new(two_right_actions());
    let row = harness.row(0);
    row.show_swipe(Right, false, |_| {});

    harness.container.scroll_began();
    assert_eq!(row.state(), SwipeState::AnimatingToCenter);
    harness.settle();
    assert_eq!(row.state(), SwipeState::Center);
    assert_eq!(harness.container.open_row(), None);
}

#[test]
fn editing_mode_closes_rows_and_blocks_swipes() {
    let harness = Harness::new(two_right_actions());
    let first = harness.row(0);
    let second = harness.row(1);
    first.show_swipe(Right, false, |_| {});

    harness.container.set_editing(true);
    assert!(harness.container.is_editing());
    assert_eq!(first.state(), SwipeState::Center);

    let dispositions = drag(&second, -90.0, 0.0);
    assert!(dispositions.contains(&GestureDisposition::Yielded));
    assert_eq!(second.state(), SwipeState::Center);

    let refused = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&refused);
    second.show_swipe(Right, false, move |done| *sink.borrow_mut() = Some(done));
    assert_eq!(*refused.borrow(), Some(false));

    harness.container.set_editing(false);
    second.show_swipe(Right, false, |_| {});
    assert_eq!(second.state(), SwipeState::Expanded(Right));
}

#[test]
fn tap_outside_an_open_row_is_swallowed() {
    let harness = Harness::new(two_right_actions());
    let first = harness.row(0);
    let _second = harness.row(1);
    first.show_swipe(Right, false, |_| {});

    let outcome = harness.container.handle_tap(center_of(1, 100.0));
    assert_eq!(outcome, TapOutcome::Dismissed);
    assert_eq!(first.state(), SwipeState::AnimatingToCenter);
}

#[test]
fn tap_on_open_content_closes_the_row() {
    let harness = Harness::new(two_right_actions());
    let row = harness.row(0);
    row.show_swipe(Right, false, |_| {});

    assert_eq!(
        harness.container.handle_tap(center_of(0, 100.0)),
        TapOutcome::Dismissed
    );
    assert_eq!(row.state(), SwipeState::AnimatingToCenter);
}

#[test]
fn tap_on_a_button_performs_it() {
    let mut harness = Harness::new(two_right_actions());
    let row = harness.row(0);
    row.show_swipe(Right, false, |_| {});
    harness.delegate.clear_events();

    let outcome = harness.container.handle_tap(center_of(0, 200.0));
    assert_eq!(
        outcome,
        TapOutcome::ActionPerformed {
            item: ItemKey(0),
            identifier: "flag".to_owned(),
        }
    );
    assert_eq!(row.state(), SwipeState::AnimatingToCenter);
    harness.settle();
    assert_eq!(
        harness.delegate.events(),
        vec!["action flag #0", "did_end #0 right"]
    );
}

#[test]
fn tap_on_a_destructive_button_deletes() {
    let harness = Harness::new(two_right_actions());
    let row = harness.row(0);
    row.show_swipe(Right, false, |_| {});
    harness.delegate.clear_events();

    let outcome = harness.container.handle_tap(center_of(0, 300.0));
    assert_eq!(
        outcome,
        TapOutcome::ActionPerformed {
            item: ItemKey(0),
            identifier: "delete".to_owned(),
        }
    );
    assert_eq!(row.state(), SwipeState::Center);
    assert_eq!(row.item(), None);
    assert_eq!(
        harness.delegate.events(),
        vec!["action delete #0", "did_end #0 right", "did_delete #0"]
    );
}

#[test]
fn taps_without_open_rows_pass_through() {
    let harness = Harness::new(two_right_actions());
    let _first = harness.row(0);
    let second = harness.row(1);

    assert_eq!(
        harness.container.handle_tap(center_of(1, 40.0)),
        TapOutcome::Passed(Some(second.id()))
    );
    assert_eq!(
        harness.container.handle_tap(Point::new(40.0, 500.0)),
        TapOutcome::Passed(None)
    );
}

#[test]
fn accessibility_navigation_keeps_rows_open() {
    let harness = Harness::new(two_right_actions());
    let first = harness.row(0);
    let second = harness.row(1);
    harness.container.set_accessibility_active(true);
    assert!(harness.container.is_accessibility_active());
    first.show_swipe(Right, false, |_| {});

    assert_eq!(
        harness.container.handle_tap(center_of(1, 40.0)),
        TapOutcome::Passed(Some(second.id()))
    );
    assert_eq!(first.state(), SwipeState::Expanded(Right));

    let dispositions = drag(&second, -90.0, 0.0);
    assert!(dispositions.contains(&GestureDisposition::Yielded));
    assert_eq!(second.state(), SwipeState::Center);
    assert_eq!(first.state(), SwipeState::Expanded(Right));
}

#[test]
fn lookup_by_point_and_removal() {
    let harness = Harness::new(two_right_actions());
    let first = harness.row(0);
    let second = harness.row(1);

    assert_eq!(harness.container.row_at(center_of(1, 10.0)), Some(second.clone()));
    assert_eq!(second.hit_test(center_of(0, 10.0)), RowHit::Outside);

    harness.container.remove_row(&first);
    assert_eq!(harness.container.rows(), vec![second]);
    assert_eq!(harness.container.item_for(&first), None);
    assert_eq!(harness.container.row_at(center_of(0, 10.0)), None);
}

#[test]
fn hide_open_rows_without_animation() {
    let harness = Harness::new(two_right_actions());
    let row = harness.row(0);
    row.show_swipe(Right, false, |_| {});

    harness.container.hide_open_rows(false);
    assert_eq!(row.state(), SwipeState::Center);
    assert_eq!(
        harness.delegate.events(),
        vec!["will_begin #0 right", "did_end #0 right"]
    );
}
