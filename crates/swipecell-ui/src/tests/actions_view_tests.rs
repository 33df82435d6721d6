use super::*;

use crate::action::SwipeActionStyle;
use crate::options::ExpansionStyle;

fn actions(count: usize) -> Vec<SwipeAction> {
    (0..count)
        .map(|index| SwipeAction::new(format!("action-{index}"), SwipeActionStyle::Default))
        .collect()
}

fn view(orientation: SwipeOrientation, options: SwipeOptions) -> ActionsView {
    ActionsView::new(orientation, actions(2), options, Size::new(320.0, 44.0), 320.0)
}

#[test]
fn two_buttons_take_their_preferred_width() {
    let panel = view(SwipeOrientation::Right, SwipeOptions::default());
    assert_eq!(panel.button_width(), 80.0);
    assert_eq!(panel.total_width(), 160.0);
}

#[test]
fn narrow_rows_shrink_buttons_down_to_the_minimum() {
    let options = SwipeOptions::default().with_button_spacing(10.0);
    let panel = ActionsView::new(
        SwipeOrientation::Left,
        actions(3),
        options,
        Size::new(200.0, 44.0),
        200.0,
    );
    assert!((panel.button_width() - 60.0).abs() < 1e-4);
    assert!((panel.total_width() - 200.0).abs() < 1e-4);

    let mut panel = panel;
    panel.set_row_size(Size::new(100.0, 44.0), 100.0);
    assert_eq!(panel.button_width(), 44.0);
    assert_eq!(panel.total_width(), 44.0 * 3.0 + 20.0);
}

#[test]
fn border_buttons_stay_anchored_at_the_edge() {
    let panel = view(SwipeOrientation::Right, SwipeOptions::default());
    let half = panel.button_frames(80.0);
    let full = panel.button_frames(160.0);
    assert_eq!(half, full);
    assert_eq!(full[0], Rect::new(240.0, 0.0, 80.0, 44.0));
    assert_eq!(full[1], Rect::new(160.0, 0.0, 80.0, 44.0));
    assert_eq!(panel.visible_buttons(80.0).as_slice(), &[0]);
    assert_eq!(panel.visible_buttons(160.0).as_slice(), &[0, 1]);
}

#[test]
fn border_buttons_stretch_past_full_width() {
    let panel = view(SwipeOrientation::Left, SwipeOptions::default());
    let frames = panel.button_frames(200.0);
    assert_eq!(frames[0], Rect::new(0.0, 0.0, 100.0, 44.0));
    assert_eq!(frames[1], Rect::new(100.0, 0.0, 100.0, 44.0));
}

#[test]
fn drag_panel_follows_the_content_edge() {
    let options = SwipeOptions::default().with_transition_style(TransitionStyle::Drag);
    let panel = view(SwipeOrientation::Left, options);
    let frames = panel.button_frames(80.0);
    assert_eq!(frames[0].x, -80.0);
    assert_eq!(frames[1].x, 0.0);
    assert_eq!(frames[1].max_x(), 80.0);
}

#[test]
fn reveal_panel_moves_at_half_speed() {
    let options = SwipeOptions::default().with_transition_style(TransitionStyle::Reveal);
    let panel = view(SwipeOrientation::Left, options);
    assert_eq!(panel.button_frames(80.0)[0].x, -40.0);
    assert_eq!(panel.button_frames(160.0)[0].x, 0.0);
    assert_eq!(panel.button_frames(190.0)[0].x, 0.0);
}

#[test]
fn fill_expansion_grows_the_edge_button() {
    let options = SwipeOptions::default().with_expansion_style(ExpansionStyle::Fill);
    let panel = view(SwipeOrientation::Right, options);
    assert!(!panel.is_expanded(160.0));
    assert!(panel.is_expanded(170.0));

    let frames = panel.button_frames(180.0);
    assert_eq!(frames[0], Rect::new(140.0, 0.0, 180.0, 44.0));
    assert!(frames[1].is_empty());
    assert_eq!(panel.button_at(Point::new(150.0, 20.0), 180.0), Some(0));
    assert_eq!(panel.button_at(Point::new(130.0, 20.0), 180.0), None);
    assert_eq!(panel.visible_buttons(180.0).as_slice(), &[0]);
}

#[test]
fn selection_expansion_commits_without_filling() {
    let options = SwipeOptions::default().with_expansion_style(ExpansionStyle::Selection);
    let panel = view(SwipeOrientation::Left, options);
    assert!(panel.is_expanded(180.0));
    assert_eq!(
        panel.expandable_action().map(SwipeAction::identifier),
        Some("action-0")
    );
    assert_eq!(panel.button_frames(180.0)[0].width, 90.0);
}

#[test]
fn no_expandable_action_without_expansion() {
    let panel = view(SwipeOrientation::Left, SwipeOptions::default());
    assert!(panel.expandable_action().is_none());
    assert!(!panel.is_expanded(400.0));
}

#[test]
fn hidden_buttons_are_not_hit() {
    let panel = view(SwipeOrientation::Right, SwipeOptions::default());
    assert_eq!(panel.button_at(Point::new(300.0, 10.0), 80.0), Some(0));
    assert_eq!(panel.button_at(Point::new(200.0, 10.0), 80.0), None);
    assert_eq!(panel.button_at(Point::new(200.0, 10.0), 160.0), Some(1));
}
