use super::*;

use crate::action::SwipeActionStyle;
use crate::state::SwipeState;
use crate::test_support::{two_right_actions, Harness};

fn labels(actions: &[AccessibilityCustomAction]) -> Vec<(&str, SwipeOrientation, usize)> {
    actions
        .iter()
        .map(|action| (action.label.as_str(), action.orientation, action.index))
        .collect()
}

#[test]
fn centered_row_exposes_only_its_content() {
    let harness = Harness::new(two_right_actions());
    let row = harness.row(0);
    assert_eq!(row.accessibility_elements(), vec![AccessibilityElement::Content]);
}

#[test]
fn open_row_lists_buttons_before_content() {
    let harness = Harness::new(two_right_actions());
    let row = harness.row(0);
    row.show_swipe(SwipeOrientation::Right, false, |_| {});

    assert_eq!(
        row.accessibility_elements(),
        vec![
            AccessibilityElement::Action {
                orientation: SwipeOrientation::Right,
                index: 0,
                label: "delete".to_owned(),
                destructive: true,
            },
            AccessibilityElement::Action {
                orientation: SwipeOrientation::Right,
                index: 1,
                label: "flag".to_owned(),
                destructive: false,
            },
            AccessibilityElement::Content,
        ]
    );
}

#[test]
fn partly_open_row_lists_uncovered_buttons_only() {
    let harness = Harness::new(two_right_actions());
    let row = harness.row(0);
    row.set_swipe_offset(-60.0, false, |_| {});

    let elements = row.accessibility_elements();
    assert_eq!(elements.len(), 2);
    assert!(matches!(
        elements[0],
        AccessibilityElement::Action { index: 0, .. }
    ));
}

#[test]
fn activating_a_button_element_performs_it() {
    let mut harness = Harness::new(two_right_actions());
    let row = harness.row(0);
    row.show_swipe(SwipeOrientation::Right, false, |_| {});
    harness.delegate.clear_events();

    let elements = row.accessibility_elements();
    assert!(row.perform_accessibility_element(&elements[1]));
    assert!(!row.perform_accessibility_element(&AccessibilityElement::Content));
    harness.settle();
    assert_eq!(row.state(), SwipeState::Center);
    assert_eq!(
        harness.delegate.events(),
        vec!["action flag #0", "did_end #0 right"]
    );
}

#[test]
fn custom_actions_interleave_edge_actions_first() {
    let delegate = two_right_actions();
    *delegate.left.borrow_mut() = vec![
        ("read", SwipeActionStyle::Default),
        ("pin", SwipeActionStyle::Default),
    ];
    let harness = Harness::new(delegate);
    let row = harness.row(0);

    let actions = row.accessibility_custom_actions();
    assert_eq!(
        labels(&actions),
        vec![
            ("delete", SwipeOrientation::Right, 0),
            ("read", SwipeOrientation::Left, 0),
            ("flag", SwipeOrientation::Right, 1),
            ("pin", SwipeOrientation::Left, 1),
        ]
    );
    assert!(actions.iter().all(|action| action.item == ItemKey(0)));
}

#[test]
fn custom_actions_of_unbound_row_are_empty() {
    let harness = Harness::new(two_right_actions());
    let row = harness.row(0);
    harness.container.unbind(&row);
    assert!(row.accessibility_custom_actions().is_empty());
}

#[test]
fn destructive_custom_action_deletes_without_swiping() {
    let harness = Harness::new(two_right_actions());
    let row = harness.row(0);

    let delete = row.accessibility_custom_actions().remove(0);
    assert!(row.perform_custom_action(&delete));

    assert_eq!(row.state(), SwipeState::Center);
    assert_eq!(row.item(), None);
    assert_eq!(
        harness.delegate.events(),
        vec!["action delete #0", "did_delete #0"]
    );
}

#[test]
fn default_custom_action_leaves_row_alone() {
    let harness = Harness::new(two_right_actions());
    let row = harness.row(0);

    let flag = row.accessibility_custom_actions().remove(1);
    assert!(row.perform_custom_action(&flag));
    assert_eq!(row.state(), SwipeState::Center);
    assert_eq!(row.item(), Some(ItemKey(0)));
    assert_eq!(harness.delegate.events(), vec!["action flag #0"]);
}

#[test]
fn stale_custom_actions_are_refused() {
    let harness = Harness::new(two_right_actions());
    let row = harness.row(0);
    let actions = row.accessibility_custom_actions();

    harness.container.bind(&row, ItemKey(9));
    assert!(!row.perform_custom_action(&actions[0]));

    harness.container.bind(&row, ItemKey(0));
    *harness.delegate.right.borrow_mut() = vec![("archive", SwipeActionStyle::Default)];
    assert!(!row.perform_custom_action(&actions[0]));
    assert!(harness.delegate.events().is_empty());
}
