//! Swipe state machine: the only place a row's state and offset change.

use std::fmt;

use crate::orientation::SwipeOrientation;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SwipeState {
    #[default]
    Center,
    Dragging(SwipeOrientation),
    AnimatingToCenter,
    Expanded(SwipeOrientation),
}

impl SwipeState {
    pub fn is_active(self) -> bool {
        self != SwipeState::Center
    }

    pub fn orientation(self) -> Option<SwipeOrientation> {
        match self {
            SwipeState::Dragging(orientation) | SwipeState::Expanded(orientation) => {
                Some(orientation)
            }
            SwipeState::Center | SwipeState::AnimatingToCenter => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeEvent {
    /// A drag claimed the row, or switched sides while dragging.
    BeginDrag(SwipeOrientation),
    /// Release or programmatic move to an open position.
    Open(SwipeOrientation),
    /// Start the animated return to center.
    Close,
    /// The return animation finished.
    Settle,
    /// Jump to center without animation.
    ForceCenter,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionError {
    pub from: SwipeState,
    pub event: SwipeEvent,
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no transition from {:?} on {:?}", self.from, self.event)
    }
}

impl std::error::Error for TransitionError {}

/// Current state plus the live content offset.
#[derive(Clone, Debug, Default)]
pub struct SwipeStateMachine {
    state: SwipeState,
    offset: f32,
}

impl SwipeStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SwipeState {
        self.state
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn apply(&mut self, event: SwipeEvent) -> Result<SwipeState, TransitionError> {
        use SwipeEvent as E;
        use SwipeState as S;

        let next = match (self.state, event) {
            (_, E::BeginDrag(o)) => S::Dragging(o),
            (S::Dragging(current), E::Open(o)) if current == o => S::Expanded(o),
            (S::Center | S::AnimatingToCenter | S::Expanded(_), E::Open(o)) => S::Expanded(o),
            (S::Dragging(_) | S::Expanded(_), E::Close) => S::AnimatingToCenter,
            (S::AnimatingToCenter, E::Settle) => S::Center,
            (_, E::ForceCenter) => S::Center,
            (from, event) => return Err(TransitionError { from, event }),
        };

        if next != self.state {
            log::debug!("swipe state {:?} -> {:?}", self.state, next);
        }
        self.state = next;
        if next == S::Center {
            self.offset = 0.0;
        }
        debug_assert!(self.state.is_active() || self.offset == 0.0);
        Ok(next)
    }

    /// Updates the live offset. A centered row always stays at zero.
    pub fn set_offset(&mut self, offset: f32) {
        if !self.state.is_active() {
            if offset != 0.0 {
                log::debug!("ignoring offset {offset} for a centered row");
            }
            return;
        }
        self.offset = offset;
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
