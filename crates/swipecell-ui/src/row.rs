//! A swipeable row: owns its state machine, offset animation, gesture
//! coordinator and the panel of the side currently revealed.
//!
//! Delegate callbacks, action handlers and completions are always invoked
//! after the row's state borrow is released, so any of them may call back
//! into the row or its container.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use swipecell_animation::{Animatable, AnimationType};
use swipecell_core::FrameClock;
use swipecell_foundation::DragSample;
use swipecell_ui_graphics::{Point, Rect};

use crate::actions_view::{ActionsView, ButtonFrames};
use crate::container::ContainerShared;
use crate::delegate::{ItemKey, SwipeDelegate};
use crate::gesture::{GestureCoordinator, GestureDisposition, GestureStep};
use crate::hit_test::HitTestStrategy;
use crate::offset::{release_decision, resolve_orientation, swipe_offset, ReleaseDecision};
use crate::options::{ExpansionStyle, SwipeOptions};
use crate::orientation::SwipeOrientation;
use crate::state::{SwipeEvent, SwipeState, SwipeStateMachine};

/// Completion for programmatic moves; `true` when the move ran to the end.
pub type SwipeCompletion = Box<dyn FnOnce(bool)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub(crate) u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row{}", self.0)
    }
}

/// What a container-space point lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowHit {
    Action {
        orientation: SwipeOrientation,
        index: usize,
    },
    Content,
    Outside,
}

pub(crate) struct RowShared {
    id: RowId,
    container: Weak<ContainerShared>,
    hit_test: Box<dyn HitTestStrategy>,
    offset: Animatable<f32>,
    state: RefCell<RowState>,
}

#[derive(Default)]
struct RowState {
    machine: SwipeStateMachine,
    panel: Option<ActionsView>,
    gesture: GestureCoordinator,
    frame: Rect,
    has_left: bool,
    has_right: bool,
    /// Side reported to `will_begin_editing` and not yet ended.
    session: Option<SwipeOrientation>,
    previously_selected: bool,
    /// Bumped whenever in-flight work must stop applying to this row.
    generation: u64,
    pending: Vec<SwipeCompletion>,
}

/// Handle to a row owned by a [`SwipeContainer`](crate::SwipeContainer).
#[derive(Clone)]
pub struct SwipeRow {
    shared: Rc<RowShared>,
}

impl PartialEq for SwipeRow {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
    }
}

impl Eq for SwipeRow {}

impl fmt::Debug for SwipeRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeRow")
            .field("id", &self.shared.id)
            .field("state", &self.state())
            .field("offset", &self.swipe_offset())
            .finish()
    }
}

fn complete_all(completions: Vec<SwipeCompletion>, finished: bool) {
    for completion in completions {
        completion(finished);
    }
}

fn available_width(frame: Rect, visible: Option<Rect>) -> f32 {
    visible
        .and_then(|visible| frame.intersect(&visible))
        .map_or(frame.width, |clipped| clipped.width)
}

impl SwipeRow {
    pub(crate) fn new(
        id: RowId,
        container: Weak<ContainerShared>,
        clock: FrameClock,
        hit_test: Box<dyn HitTestStrategy>,
    ) -> Self {
        Self {
            shared: Rc::new(RowShared {
                id,
                container,
                hit_test,
                offset: Animatable::new(0.0, clock),
                state: RefCell::new(RowState::default()),
            }),
        }
    }

    fn from_weak(weak: &Weak<RowShared>) -> Option<Self> {
        weak.upgrade().map(|shared| Self { shared })
    }

    pub fn id(&self) -> RowId {
        self.shared.id
    }

    fn container(&self) -> Option<Rc<ContainerShared>> {
        self.shared.container.upgrade()
    }

    /// The item currently bound to this row, looked up on every call.
    pub fn item(&self) -> Option<ItemKey> {
        self.container()?.item_for(self.shared.id)
    }

    fn context(&self) -> Option<(Rc<ContainerShared>, Rc<dyn SwipeDelegate>, ItemKey)> {
        let container = self.container()?;
        let item = container.item_for(self.shared.id)?;
        let delegate = container.delegate();
        Some((container, delegate, item))
    }

    pub(crate) fn delegate(&self) -> Option<Rc<dyn SwipeDelegate>> {
        self.container().map(|container| container.delegate())
    }

    pub(crate) fn with_panel<R>(&self, f: impl FnOnce(Option<&ActionsView>) -> R) -> R {
        f(self.shared.state.borrow().panel.as_ref())
    }

    pub fn state(&self) -> SwipeState {
        self.shared.state.borrow().machine.state()
    }

    pub fn is_active(&self) -> bool {
        self.state().is_active()
    }

    /// Horizontal content offset; positive reveals the left actions.
    pub fn swipe_offset(&self) -> f32 {
        self.shared.state.borrow().machine.offset()
    }

    pub fn frame(&self) -> Rect {
        self.shared.state.borrow().frame
    }

    /// Row bounds in container coordinates. The content offset is kept
    /// separately, so an open row stays open across layout passes.
    pub fn set_frame(&self, frame: Rect) {
        let visible = self.container().and_then(|c| c.delegate().visible_rect());
        let mut state = self.shared.state.borrow_mut();
        state.frame = frame;
        if let Some(panel) = state.panel.as_mut() {
            panel.set_row_size(frame.size(), available_width(frame, visible));
        }
    }

    /// Side whose buttons are currently laid out.
    pub fn revealed_orientation(&self) -> Option<SwipeOrientation> {
        self.shared
            .state
            .borrow()
            .panel
            .as_ref()
            .map(ActionsView::orientation)
    }

    /// Whether a release now would commit the edge action.
    pub fn is_action_expanded(&self) -> bool {
        let state = self.shared.state.borrow();
        state
            .panel
            .as_ref()
            .is_some_and(|panel| panel.is_expanded(state.machine.offset().abs()))
    }

    /// Button frames in container coordinates, outer edge first.
    pub fn action_frames(&self) -> ButtonFrames {
        let state = self.shared.state.borrow();
        let Some(panel) = state.panel.as_ref() else {
            return ButtonFrames::new();
        };
        let frame = state.frame;
        panel
            .button_frames(state.machine.offset().abs())
            .into_iter()
            .map(|button| button.translate(frame.x, frame.y))
            .collect()
    }

    /// Selection highlight is suppressed while the row is swiped.
    pub fn should_highlight(&self) -> bool {
        !self.is_active()
    }

    pub fn hit_test(&self, point: Point) -> RowHit {
        let state = self.shared.state.borrow();
        let frame = state.frame;
        if state.machine.state().is_active() {
            if let Some(panel) = state.panel.as_ref() {
                let local = Point::new(point.x - frame.x, point.y - frame.y);
                if let Some(index) = panel.button_at(local, state.machine.offset().abs()) {
                    return RowHit::Action {
                        orientation: panel.orientation(),
                        index,
                    };
                }
            }
        }
        if self.shared.hit_test.contains(frame, point) {
            RowHit::Content
        } else {
            RowHit::Outside
        }
    }

    /// Identifier of a revealed button.
    pub fn action_identifier(&self, orientation: SwipeOrientation, index: usize) -> Option<String> {
        let state = self.shared.state.borrow();
        state
            .panel
            .as_ref()
            .filter(|panel| panel.orientation() == orientation)
            .and_then(|panel| panel.action(index))
            .map(|action| action.identifier().to_owned())
    }

    pub(crate) fn take_previous_selection(&self) -> bool {
        std::mem::take(&mut self.shared.state.borrow_mut().previously_selected)
    }

    fn generation(&self) -> u64 {
        self.shared.state.borrow().generation
    }

    /// Builds the panel for one side, or `None` when the side has no actions.
    fn load_side(
        &self,
        delegate: &dyn SwipeDelegate,
        item: ItemKey,
        orientation: SwipeOrientation,
    ) -> Option<ActionsView> {
        let actions = delegate.edit_actions(item, orientation);
        if actions.is_empty() {
            return None;
        }
        let mut options = delegate.edit_actions_options(item, orientation);
        if let Err(err) = options.validate() {
            log::warn!("invalid {orientation} swipe options for {item}: {err}; using defaults");
            options = SwipeOptions::default();
        }
        let visible = delegate.visible_rect();
        let frame = self.frame();
        Some(ActionsView::new(
            orientation,
            actions,
            options,
            frame.size(),
            available_width(frame, visible),
        ))
    }

    // Editing session

    fn begin_session(&self, delegate: &dyn SwipeDelegate, item: ItemKey, orientation: SwipeOrientation) {
        let selected = delegate.is_selected(item);
        if selected {
            delegate.set_selected(item, false);
        }
        {
            let mut state = self.shared.state.borrow_mut();
            state.session = Some(orientation);
            state.previously_selected = selected;
        }
        delegate.will_begin_editing(item, orientation);
    }

    fn end_session(&self, item: Option<ItemKey>, session: Option<SwipeOrientation>, reselect: bool) {
        let (Some(item), Some(orientation)) = (item, session) else {
            return;
        };
        let Some(container) = self.container() else {
            return;
        };
        let delegate = container.delegate();
        if reselect {
            delegate.set_selected(item, true);
        }
        delegate.did_end_editing(item, orientation);
    }

    // Gesture handling

    /// Feeds one drag sample. The container scrolls when this yields.
    pub fn handle_drag(&self, sample: DragSample) -> GestureDisposition {
        let step = self.shared.state.borrow_mut().gesture.on_sample(&sample);
        match step {
            GestureStep::Wait => GestureDisposition::Pending,
            GestureStep::Claim { translation_x } => self.begin_tracking(translation_x),
            GestureStep::Yield => GestureDisposition::Yielded,
            GestureStep::Move { raw_offset } => {
                self.track(raw_offset);
                GestureDisposition::Tracking
            }
            GestureStep::Release {
                velocity_x,
                cancelled,
            } => {
                self.release(velocity_x, cancelled);
                GestureDisposition::Released
            }
            GestureStep::Ignore => GestureDisposition::Ignored,
        }
    }

    fn reject_drag(&self, reason: &str) -> GestureDisposition {
        log::trace!("{} yields drag: {reason}", self.shared.id);
        self.shared.state.borrow_mut().gesture.reject();
        GestureDisposition::Yielded
    }

    fn begin_tracking(&self, translation_x: f32) -> GestureDisposition {
        let Some((container, delegate, item)) = self.context() else {
            return self.reject_drag("no item bound");
        };
        if container.is_editing() {
            return self.reject_drag("container is editing");
        }
        if container.is_accessibility_active() && container.has_other_open_row(self.shared.id) {
            return self.reject_drag("another row is open during accessibility navigation");
        }

        let (current, session, existing) = {
            let state = self.shared.state.borrow();
            (
                state.panel.as_ref().map(ActionsView::orientation),
                state.session,
                state.panel.clone(),
            )
        };
        let start_offset = if self.shared.offset.is_running() {
            self.shared.offset.value()
        } else {
            self.swipe_offset()
        };
        let raw_offset = start_offset + translation_x;

        let left = self.load_side(delegate.as_ref(), item, SwipeOrientation::Left);
        let right = self.load_side(delegate.as_ref(), item, SwipeOrientation::Right);
        let Some(orientation) =
            resolve_orientation(raw_offset, left.is_some(), right.is_some(), current)
        else {
            return self.reject_drag("no actions in drag direction");
        };
        if session != Some(orientation) && !delegate.can_begin_editing(item, orientation) {
            return self.reject_drag("delegate declined");
        }

        // Only one row may be off center; others close before this one moves.
        container.close_others(self.shared.id);

        self.shared.offset.stop();
        let interrupted = {
            let mut state = self.shared.state.borrow_mut();
            if state.machine.state().is_active() {
                state.machine.set_offset(start_offset);
            }
            state.gesture.accept(start_offset);
            state.has_left = left.is_some();
            state.has_right = right.is_some();
            std::mem::take(&mut state.pending)
        };
        complete_all(interrupted, false);

        match session {
            None => self.begin_session(delegate.as_ref(), item, orientation),
            Some(previous) if previous != orientation => {
                delegate.did_end_editing(item, previous);
                self.shared.state.borrow_mut().session = Some(orientation);
                delegate.will_begin_editing(item, orientation);
            }
            Some(_) => {}
        }

        {
            let mut state = self.shared.state.borrow_mut();
            if let Err(err) = state.machine.apply(SwipeEvent::BeginDrag(orientation)) {
                log::debug!("{}: {err}", self.shared.id);
            }
            let keep_existing = existing
                .as_ref()
                .is_some_and(|panel| panel.orientation() == orientation);
            if !keep_existing {
                state.panel = match orientation {
                    SwipeOrientation::Left => left,
                    SwipeOrientation::Right => right,
                };
            }
        }
        log::debug!(
            "{} tracking {orientation} drag from offset {start_offset}",
            self.shared.id
        );
        self.track(raw_offset);
        GestureDisposition::Tracking
    }

    fn track(&self, raw_offset: f32) {
        let (current, has_left, has_right) = {
            let state = self.shared.state.borrow();
            let SwipeState::Dragging(current) = state.machine.state() else {
                return;
            };
            (current, state.has_left, state.has_right)
        };

        match resolve_orientation(raw_offset, has_left, has_right, Some(current)) {
            Some(orientation) if orientation == current => {}
            Some(orientation) => {
                if !self.switch_side(orientation) {
                    self.shared.state.borrow_mut().machine.set_offset(0.0);
                    return;
                }
            }
            None => {
                self.shared.state.borrow_mut().machine.set_offset(0.0);
                return;
            }
        }

        let mut state = self.shared.state.borrow_mut();
        let Some(panel) = state.panel.as_ref() else {
            return;
        };
        let orientation = panel.orientation();
        let offset = swipe_offset(
            raw_offset,
            orientation,
            panel.total_width(),
            panel.options().elasticity,
        );
        state.machine.set_offset(offset);
    }

    /// Moves a live drag across zero to the other side.
    fn switch_side(&self, orientation: SwipeOrientation) -> bool {
        let Some((_, delegate, item)) = self.context() else {
            return false;
        };
        if !delegate.can_begin_editing(item, orientation) {
            return false;
        }
        let Some(panel) = self.load_side(delegate.as_ref(), item, orientation) else {
            return false;
        };
        let previous = {
            let mut state = self.shared.state.borrow_mut();
            if let Err(err) = state.machine.apply(SwipeEvent::BeginDrag(orientation)) {
                log::debug!("{}: {err}", self.shared.id);
                return false;
            }
            state.panel = Some(panel);
            state.session.replace(orientation)
        };
        if let Some(previous) = previous {
            delegate.did_end_editing(item, previous);
        }
        delegate.will_begin_editing(item, orientation);
        true
    }

    fn release(&self, velocity_x: f32, cancelled: bool) {
        let (orientation, offset, expanded, decision) = {
            let state = self.shared.state.borrow();
            let SwipeState::Dragging(orientation) = state.machine.state() else {
                log::debug!("{} released while {:?}", self.shared.id, state.machine.state());
                return;
            };
            let Some(panel) = state.panel.as_ref() else {
                return;
            };
            let offset = state.machine.offset();
            let options = panel.options();
            let decision = release_decision(
                offset,
                velocity_x,
                orientation,
                panel.total_width(),
                options.threshold,
                options.fling_velocity,
            );
            (orientation, offset, panel.is_expanded(offset.abs()), decision)
        };
        log::debug!(
            "{} released at {offset} with velocity {velocity_x}: {decision:?}",
            self.shared.id
        );

        if cancelled {
            self.close(true, None);
        } else if expanded {
            self.commit_expansion();
        } else if decision == ReleaseDecision::Open {
            let target = self.open_target(orientation, f32::INFINITY);
            self.open_to(orientation, target, true, None);
        } else {
            self.close(true, None);
        }
    }

    fn commit_expansion(&self) {
        let Some(item) = self.item() else {
            self.close(true, None);
            return;
        };
        let (action, style, generation) = {
            let state = self.shared.state.borrow();
            let panel = state.panel.as_ref();
            (
                panel.and_then(ActionsView::expandable_action).cloned(),
                panel.map_or(ExpansionStyle::None, |panel| panel.options().expansion_style),
                state.generation,
            )
        };
        let Some(action) = action else {
            self.close(true, None);
            return;
        };
        log::debug!(
            "{} commits '{}' for {item}",
            self.shared.id,
            action.identifier()
        );
        action.invoke(item);
        if self.generation() != generation || self.item() != Some(item) {
            return;
        }
        if style == ExpansionStyle::Destructive || action.is_destructive() {
            self.delete_item(item);
        } else {
            self.close(true, None);
        }
    }

    /// Invokes a revealed button, as a tap on it would.
    pub fn perform_action(&self, orientation: SwipeOrientation, index: usize) -> bool {
        let Some(item) = self.item() else {
            return false;
        };
        let (action, generation) = {
            let state = self.shared.state.borrow();
            let action = state
                .panel
                .as_ref()
                .filter(|panel| panel.orientation() == orientation)
                .and_then(|panel| panel.action(index))
                .cloned();
            (action, state.generation)
        };
        let Some(action) = action else {
            return false;
        };
        action.invoke(item);
        if self.generation() != generation || self.item() != Some(item) {
            return true;
        }
        if action.is_destructive() {
            self.delete_item(item);
        } else {
            self.hide_swipe(true, |_| {});
        }
        true
    }

    /// Centers the row and removes its item: `did_end_editing`, then
    /// `did_delete`, then the row is unbound.
    pub(crate) fn delete_item(&self, item: ItemKey) {
        self.shared.offset.stop();
        let (session, interrupted) = {
            let mut state = self.shared.state.borrow_mut();
            if let Err(err) = state.machine.apply(SwipeEvent::ForceCenter) {
                log::debug!("{}: {err}", self.shared.id);
            }
            state.panel = None;
            state.gesture.finish();
            state.generation += 1;
            state.previously_selected = false;
            (state.session.take(), std::mem::take(&mut state.pending))
        };
        complete_all(interrupted, false);

        let Some(container) = self.container() else {
            return;
        };
        let delegate = container.delegate();
        if let Some(orientation) = session {
            delegate.did_end_editing(item, orientation);
        }
        log::debug!("{} deletes {item}", self.shared.id);
        delegate.did_delete(item);
        container.unbind_id(self.shared.id);
    }

    // Programmatic moves

    /// Animates to the fully revealed `orientation`.
    pub fn show_swipe(
        &self,
        orientation: SwipeOrientation,
        animated: bool,
        completion: impl FnOnce(bool) + 'static,
    ) {
        self.set_swipe_offset(f32::MAX * orientation.scale(), animated, completion);
    }

    /// Returns to center. On a centered row the completion receives `false`.
    pub fn hide_swipe(&self, animated: bool, completion: impl FnOnce(bool) + 'static) {
        self.close(animated, Some(Box::new(completion)));
    }

    /// Moves to `offset`, clamped to the action width of its side. `0` hides.
    pub fn set_swipe_offset(
        &self,
        offset: f32,
        animated: bool,
        completion: impl FnOnce(bool) + 'static,
    ) {
        let Some(orientation) = SwipeOrientation::for_offset(offset) else {
            self.hide_swipe(animated, completion);
            return;
        };
        let Some((container, delegate, item)) = self.context() else {
            completion(false);
            return;
        };
        if container.is_editing() {
            completion(false);
            return;
        }

        let (session, existing) = {
            let state = self.shared.state.borrow();
            let existing = state
                .panel
                .as_ref()
                .filter(|panel| panel.orientation() == orientation)
                .cloned();
            (state.session, existing)
        };
        if session != Some(orientation) && !delegate.can_begin_editing(item, orientation) {
            completion(false);
            return;
        }
        let Some(panel) =
            existing.or_else(|| self.load_side(delegate.as_ref(), item, orientation))
        else {
            completion(false);
            return;
        };

        container.close_others(self.shared.id);
        if session.is_some_and(|side| side != orientation) {
            self.force_center(false);
        }
        if self.shared.state.borrow().session.is_none() {
            self.begin_session(delegate.as_ref(), item, orientation);
        }
        {
            let mut state = self.shared.state.borrow_mut();
            state.gesture.finish();
            state.panel = Some(panel);
        }
        let target = self.open_target(orientation, offset.abs());
        self.open_to(orientation, target, animated, Some(Box::new(completion)));
    }

    fn open_target(&self, orientation: SwipeOrientation, magnitude: f32) -> f32 {
        let state = self.shared.state.borrow();
        let width = state.panel.as_ref().map_or(0.0, ActionsView::total_width);
        magnitude.min(width) * orientation.scale()
    }

    fn settle_animation(&self) -> AnimationType {
        self.shared
            .state
            .borrow()
            .panel
            .as_ref()
            .map_or(SwipeOptions::default().animation, |panel| {
                panel.options().animation
            })
    }

    fn open_to(
        &self,
        orientation: SwipeOrientation,
        target: f32,
        animated: bool,
        completion: Option<SwipeCompletion>,
    ) {
        let item = self.item();
        let (from, generation, interrupted) = {
            let mut state = self.shared.state.borrow_mut();
            if let Err(err) = state.machine.apply(SwipeEvent::Open(orientation)) {
                log::debug!("{}: {err}", self.shared.id);
                drop(state);
                if let Some(completion) = completion {
                    completion(false);
                }
                return;
            }
            let interrupted = std::mem::take(&mut state.pending);
            state.pending.extend(completion);
            (state.machine.offset(), state.generation, interrupted)
        };
        complete_all(interrupted, false);

        if !animated {
            self.shared.offset.snap_to(target);
            self.shared.state.borrow_mut().machine.set_offset(target);
            self.finish_open(generation, item);
            return;
        }

        let animation = self.settle_animation();
        self.shared.offset.snap_to(from);
        let on_value = Rc::downgrade(&self.shared);
        let on_end = Rc::downgrade(&self.shared);
        self.shared.offset.animate_to(
            target,
            animation,
            move |value| {
                if let Some(row) = on_value.upgrade() {
                    row.state.borrow_mut().machine.set_offset(value);
                }
            },
            move || {
                if let Some(row) = SwipeRow::from_weak(&on_end) {
                    row.finish_open(generation, item);
                }
            },
        );
    }

    fn finish_open(&self, generation: u64, item: Option<ItemKey>) {
        let current_item = self.item();
        let completions = {
            let mut state = self.shared.state.borrow_mut();
            if state.generation != generation || current_item != item {
                log::debug!("{} ignores stale open completion", self.shared.id);
                return;
            }
            std::mem::take(&mut state.pending)
        };
        complete_all(completions, true);
    }

    fn close(&self, animated: bool, completion: Option<SwipeCompletion>) {
        match self.state() {
            SwipeState::Center => {
                if let Some(completion) = completion {
                    completion(false);
                }
                return;
            }
            SwipeState::AnimatingToCenter if animated => {
                self.shared.state.borrow_mut().pending.extend(completion);
                return;
            }
            _ => {}
        }

        if !animated {
            self.shared.state.borrow_mut().pending.extend(completion);
            self.force_center(true);
            return;
        }

        let item = self.item();
        let (from, generation, interrupted) = {
            let mut state = self.shared.state.borrow_mut();
            if let Err(err) = state.machine.apply(SwipeEvent::Close) {
                log::debug!("{}: {err}", self.shared.id);
                drop(state);
                if let Some(completion) = completion {
                    completion(false);
                }
                return;
            }
            state.gesture.finish();
            let interrupted = std::mem::take(&mut state.pending);
            state.pending.extend(completion);
            (state.machine.offset(), state.generation, interrupted)
        };
        complete_all(interrupted, false);

        let animation = self.settle_animation();
        self.shared.offset.snap_to(from);
        let on_value = Rc::downgrade(&self.shared);
        let on_end = Rc::downgrade(&self.shared);
        self.shared.offset.animate_to(
            0.0,
            animation,
            move |value| {
                if let Some(row) = on_value.upgrade() {
                    row.state.borrow_mut().machine.set_offset(value);
                }
            },
            move || {
                if let Some(row) = SwipeRow::from_weak(&on_end) {
                    row.finish_close(generation, item);
                }
            },
        );
    }

    fn finish_close(&self, generation: u64, item: Option<ItemKey>) {
        let current_item = self.item();
        let (session, reselect, completions) = {
            let mut state = self.shared.state.borrow_mut();
            if state.generation != generation || current_item != item {
                log::debug!("{} ignores stale close completion", self.shared.id);
                return;
            }
            if let Err(err) = state.machine.apply(SwipeEvent::Settle) {
                log::debug!("{}: {err}", self.shared.id);
                return;
            }
            state.panel = None;
            (
                state.session.take(),
                std::mem::take(&mut state.previously_selected),
                std::mem::take(&mut state.pending),
            )
        };
        self.end_session(item, session, reselect);
        complete_all(completions, true);
    }

    /// Jumps to center without animation, ending the editing session.
    /// Pending completions receive `completed`.
    pub(crate) fn force_center(&self, completed: bool) {
        let item = self.item();
        self.shared.offset.stop();
        let (session, reselect, completions) = {
            let mut state = self.shared.state.borrow_mut();
            if !state.machine.state().is_active() {
                drop(state);
                return;
            }
            if let Err(err) = state.machine.apply(SwipeEvent::ForceCenter) {
                log::debug!("{}: {err}", self.shared.id);
            }
            state.panel = None;
            state.gesture.finish();
            state.generation += 1;
            (
                state.session.take(),
                std::mem::take(&mut state.previously_selected),
                std::mem::take(&mut state.pending),
            )
        };
        self.end_session(item, session, reselect);
        complete_all(completions, completed);
    }

    /// Discards all runtime state without notifying anyone: the panel, the
    /// animation, the live gesture and pending completions.
    pub fn reset(&self) {
        self.shared.offset.snap_to(0.0);
        let dropped = {
            let mut state = self.shared.state.borrow_mut();
            if let Err(err) = state.machine.apply(SwipeEvent::ForceCenter) {
                log::debug!("{}: {err}", self.shared.id);
            }
            state.panel = None;
            state.gesture.finish();
            state.generation += 1;
            state.session = None;
            state.previously_selected = false;
            std::mem::take(&mut state.pending)
        };
        if !dropped.is_empty() {
            log::debug!(
                "{} reset dropped {} pending completion(s)",
                self.shared.id,
                dropped.len()
            );
        }
        drop(dropped);
    }
}

#[cfg(test)]
#[path = "tests/row_tests.rs"]
mod tests;
