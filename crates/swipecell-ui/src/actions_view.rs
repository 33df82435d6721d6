//! Layout of the buttons revealed on one edge of a row.

use smallvec::SmallVec;
use swipecell_ui_graphics::{Point, Rect, Size};

use crate::action::SwipeAction;
use crate::options::{SwipeOptions, TransitionStyle};
use crate::orientation::SwipeOrientation;

const REVEAL_PARALLAX: f32 = 0.5;

pub type ButtonFrames = SmallVec<[Rect; 4]>;

/// Buttons for one orientation, laid out against a live offset.
///
/// Positions are measured from the row's outer edge inward (`depth`) and
/// mapped to row coordinates at the end. Action 0 sits at the outer edge.
#[derive(Clone, Debug)]
pub struct ActionsView {
    orientation: SwipeOrientation,
    actions: Vec<SwipeAction>,
    options: SwipeOptions,
    row_size: Size,
    available_width: f32,
    button_width: f32,
}

impl ActionsView {
    /// `available_width` is the row width clipped to the visible viewport.
    pub fn new(
        orientation: SwipeOrientation,
        actions: Vec<SwipeAction>,
        options: SwipeOptions,
        row_size: Size,
        available_width: f32,
    ) -> Self {
        let mut view = Self {
            orientation,
            actions,
            options,
            row_size,
            available_width,
            button_width: options.button_width,
        };
        view.allocate_widths();
        view
    }

    /// Re-runs width allocation after the row was resized.
    pub fn set_row_size(&mut self, row_size: Size, available_width: f32) {
        self.row_size = row_size;
        self.available_width = available_width;
        self.allocate_widths();
    }

    fn allocate_widths(&mut self) {
        let count = self.actions.len().max(1) as f32;
        let spacing = self.options.button_spacing * (count - 1.0);
        let fitting = (self.available_width - spacing) / count;
        self.button_width = self
            .options
            .button_width
            .min(fitting)
            .max(self.options.minimum_button_width);
    }

    pub fn orientation(&self) -> SwipeOrientation {
        self.orientation
    }

    pub fn actions(&self) -> &[SwipeAction] {
        &self.actions
    }

    pub fn action(&self, index: usize) -> Option<&SwipeAction> {
        self.actions.get(index)
    }

    pub fn options(&self) -> &SwipeOptions {
        &self.options
    }

    pub fn button_width(&self) -> f32 {
        self.button_width
    }

    /// Width of the fully open panel, spacing included. Drags past it meet
    /// elastic resistance.
    pub fn total_width(&self) -> f32 {
        let count = self.actions.len() as f32;
        if count == 0.0 {
            return 0.0;
        }
        self.button_width * count + self.options.button_spacing * (count - 1.0)
    }

    /// Whether `magnitude` is past the point where a release commits the
    /// edge action.
    pub fn is_expanded(&self, magnitude: f32) -> bool {
        self.options.expansion_style.expands() && magnitude > self.total_width()
    }

    /// The action committed by an expansion release.
    pub fn expandable_action(&self) -> Option<&SwipeAction> {
        if self.options.expansion_style.expands() {
            self.actions.first()
        } else {
            None
        }
    }

    /// Revealed strip between the row edge and the content, row coordinates.
    pub fn revealed_rect(&self, magnitude: f32) -> Rect {
        let magnitude = magnitude.clamp(0.0, self.row_size.width);
        self.depth_rect(0.0, magnitude)
    }

    /// Button frames in row coordinates for an offset of `magnitude`.
    pub fn button_frames(&self, magnitude: f32) -> ButtonFrames {
        let magnitude = magnitude.max(0.0);
        let total = self.total_width();
        let step = self.button_width + self.options.button_spacing;

        if self.options.expansion_style.fills() && self.is_expanded(magnitude) {
            return (0..self.actions.len())
                .map(|index| {
                    if index == 0 {
                        self.depth_rect(0.0, magnitude)
                    } else {
                        self.depth_rect(magnitude, 0.0)
                    }
                })
                .collect();
        }

        (0..self.actions.len())
            .map(|index| {
                let index = index as f32;
                match self.options.transition_style {
                    TransitionStyle::Border => {
                        let stretch = if total > 0.0 && magnitude > total {
                            magnitude / total
                        } else {
                            1.0
                        };
                        self.depth_rect(index * step * stretch, self.button_width * stretch)
                    }
                    TransitionStyle::Drag => {
                        self.depth_rect(magnitude - total + index * step, self.button_width)
                    }
                    TransitionStyle::Reveal => {
                        let start = ((magnitude - total) * REVEAL_PARALLAX).min(0.0);
                        self.depth_rect(start + index * step, self.button_width)
                    }
                }
            })
            .collect()
    }

    /// Indices of buttons with some part inside the revealed strip.
    pub fn visible_buttons(&self, magnitude: f32) -> SmallVec<[usize; 4]> {
        let revealed = self.revealed_rect(magnitude);
        self.button_frames(magnitude)
            .iter()
            .enumerate()
            .filter(|(_, frame)| frame.intersect(&revealed).is_some())
            .map(|(index, _)| index)
            .collect()
    }

    /// Button under `point` (row coordinates), if it is uncovered.
    pub fn button_at(&self, point: Point, magnitude: f32) -> Option<usize> {
        let revealed = self.revealed_rect(magnitude);
        if !revealed.contains(point.x, point.y) {
            return None;
        }
        self.button_frames(magnitude)
            .iter()
            .position(|frame| !frame.is_empty() && frame.contains(point.x, point.y))
    }

    fn depth_rect(&self, depth: f32, width: f32) -> Rect {
        let x = match self.orientation {
            SwipeOrientation::Left => depth,
            SwipeOrientation::Right => self.row_size.width - depth - width,
        };
        Rect::new(x, 0.0, width, self.row_size.height)
    }
}

#[cfg(test)]
#[path = "tests/actions_view_tests.rs"]
mod tests;
