//! Frame-driven animatable values.

use std::cell::RefCell;
use std::rc::Rc;

use swipecell_core::{FrameCallbackRegistration, FrameClock, NANOS_PER_MILLI};

use crate::easing::{AnimationType, SpringSpec};

/// Values that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Scalars a spring can drive. Physics runs in `f32` progress space.
pub trait SpringScalar: Lerp + Clone {
    fn to_f32(&self) -> f32;

    fn spring_progress(start: &Self, target: &Self, current: &Self) -> f32 {
        let start_val = start.to_f32();
        let target_val = target.to_f32();
        if (target_val - start_val).abs() < f32::EPSILON {
            1.0
        } else {
            (current.to_f32() - start_val) / (target_val - start_val)
        }
    }

    fn is_near_target(current: &Self, target: &Self, threshold: f32) -> bool {
        (current.to_f32() - target.to_f32()).abs() < threshold
    }
}

impl SpringScalar for f32 {
    fn to_f32(&self) -> f32 {
        *self
    }
}

/// Fixed integration step for springs (~60 fps).
const SPRING_TIMESTEP: f32 = 0.016;

type ValueListener<T> = Rc<dyn Fn(T)>;
type EndListener = Box<dyn FnOnce()>;

/// A value animated over frames of a [`FrameClock`].
///
/// Each drained frame moves the value and reports it to the `on_value`
/// listener of the running animation. When the animation settles, `on_end`
/// runs once. Stopping or retargeting drops the pending `on_end` without
/// running it; callers that need to observe interruption track it
/// themselves.
pub struct Animatable<T: SpringScalar + 'static> {
    inner: Rc<RefCell<AnimatableInner<T>>>,
}

struct AnimatableInner<T: SpringScalar + 'static> {
    clock: FrameClock,
    current: T,
    /// Spring velocity in progress units per second.
    velocity: f32,
    start: T,
    target: T,
    animation_type: AnimationType,
    start_time_nanos: Option<u64>,
    last_frame_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
    on_value: Option<ValueListener<T>>,
    on_end: Option<EndListener>,
}

impl<T: SpringScalar + 'static> AnimatableInner<T> {
    fn settle(&mut self) {
        self.current = self.target.clone();
        self.start = self.target.clone();
        self.velocity = 0.0;
        self.start_time_nanos = None;
        self.last_frame_nanos = None;
    }

    fn step_tween(&mut self, spec: crate::AnimationSpec, frame_time_nanos: u64) -> bool {
        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed = frame_time_nanos.saturating_sub(start_time);
        let delay = spec.delay_millis * NANOS_PER_MILLI;
        if elapsed < delay {
            return false;
        }
        let duration = (spec.duration_millis * NANOS_PER_MILLI).max(1);
        let linear = ((elapsed - delay) as f32 / duration as f32).clamp(0.0, 1.0);
        if linear >= 1.0 {
            self.settle();
            return true;
        }
        let progress = spec.easing.transform(linear);
        self.current = self.start.lerp(&self.target, progress);
        false
    }

    fn step_spring(&mut self, spec: SpringSpec, frame_time_nanos: u64) -> bool {
        self.start_time_nanos.get_or_insert(frame_time_nanos);
        let last = self.last_frame_nanos.replace(frame_time_nanos);
        let Some(last) = last else {
            return false;
        };
        let dt = frame_time_nanos.saturating_sub(last) as f32 / 1_000_000_000.0;

        let stiffness = spec.stiffness;
        let damping = 2.0 * spec.damping_ratio * stiffness.sqrt();
        let mut progress = T::spring_progress(&self.start, &self.target, &self.current);
        let mut integrated = 0.0f32;
        while integrated < dt {
            let step = SPRING_TIMESTEP.min(dt - integrated);
            let displacement = progress - 1.0;
            let force = -stiffness * displacement - damping * self.velocity;
            self.velocity += force * step;
            progress += self.velocity * step;
            integrated += step;
        }
        self.current = self.start.lerp(&self.target, progress.clamp(-1.0, 2.0));

        let at_rest = self.velocity.abs() < spec.velocity_threshold;
        if at_rest && T::is_near_target(&self.current, &self.target, spec.position_threshold) {
            self.settle();
            return true;
        }
        false
    }
}

impl<T: SpringScalar + 'static> Animatable<T> {
    pub fn new(initial: T, clock: FrameClock) -> Self {
        let inner = AnimatableInner {
            clock,
            current: initial.clone(),
            velocity: 0.0,
            start: initial.clone(),
            target: initial,
            animation_type: AnimationType::default(),
            start_time_nanos: None,
            last_frame_nanos: None,
            registration: None,
            on_value: None,
            on_end: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Starts animating from the current value towards `target`.
    ///
    /// Completion is always reported from a frame callback, never from
    /// inside this call, even when the value already equals the target.
    pub fn animate_to(
        &self,
        target: T,
        animation: AnimationType,
        on_value: impl Fn(T) + 'static,
        on_end: impl FnOnce() + 'static,
    ) {
        {
            let mut inner = self.inner.borrow_mut();
            if let Some(registration) = inner.registration.take() {
                registration.cancel();
            }
            inner.start = inner.current.clone();
            inner.target = target;
            inner.animation_type = animation;
            inner.velocity = 0.0;
            inner.start_time_nanos = None;
            inner.last_frame_nanos = None;
            inner.on_value = Some(Rc::new(on_value));
            inner.on_end = Some(Box::new(on_end));
        }
        Self::schedule_frame(&self.inner);
    }

    /// Jumps to `value`, cancelling any running animation.
    pub fn snap_to(&self, value: T) {
        let mut inner = self.inner.borrow_mut();
        if let Some(registration) = inner.registration.take() {
            registration.cancel();
        }
        inner.on_value = None;
        inner.on_end = None;
        inner.current = value.clone();
        inner.target = value;
        inner.settle();
    }

    /// Cancels the running animation and returns the interpolated value it
    /// had reached.
    pub fn stop(&self) -> T {
        let mut inner = self.inner.borrow_mut();
        if let Some(registration) = inner.registration.take() {
            registration.cancel();
        }
        inner.on_value = None;
        inner.on_end = None;
        inner.target = inner.current.clone();
        inner.settle();
        inner.current.clone()
    }

    pub fn value(&self) -> T {
        self.inner.borrow().current.clone()
    }

    pub fn target(&self) -> T {
        self.inner.borrow().target.clone()
    }

    pub fn animation_type(&self) -> AnimationType {
        self.inner.borrow().animation_type
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().on_end.is_some()
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner<T>>>) {
        let clock = {
            let inner = this.borrow();
            if inner.registration.is_some() {
                return;
            }
            inner.clock.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = clock.with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        if !registration.is_active() {
            log::debug!("frame clock is gone; animation will not run");
        }
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner<T>>>, frame_time_nanos: u64) {
        let (value, finished, on_value, on_end) = {
            let mut inner = this.borrow_mut();
            inner.registration = None;

            let reached_target = T::is_near_target(&inner.start, &inner.target, f32::EPSILON)
                && T::is_near_target(&inner.current, &inner.target, f32::EPSILON);
            let finished = if reached_target {
                inner.settle();
                true
            } else {
                match inner.animation_type {
                    AnimationType::Tween(spec) => inner.step_tween(spec, frame_time_nanos),
                    AnimationType::Spring(spec) => inner.step_spring(spec, frame_time_nanos),
                }
            };

            let on_value = inner.on_value.clone();
            let on_end = if finished {
                inner.on_value = None;
                inner.on_end.take()
            } else {
                None
            };
            (inner.current.clone(), finished, on_value, on_end)
        };

        // Queue the next frame before notifying so a listener that stops the
        // animation also dequeues it.
        if !finished {
            Self::schedule_frame(this);
        }
        if let Some(on_value) = on_value {
            on_value(value);
        }
        if let Some(on_end) = on_end {
            on_end();
        }
    }
}

impl<T: SpringScalar + 'static> Clone for Animatable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
