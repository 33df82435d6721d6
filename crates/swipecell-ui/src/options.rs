//! Per-row, per-orientation swipe configuration.

use swipecell_animation::{AnimationSpec, AnimationType, Easing};

/// How concealed buttons move into view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransitionStyle {
    /// Buttons stay anchored at the row edge and are uncovered by the content.
    #[default]
    Border,
    /// Buttons are pinned to the content edge and travel in with it.
    Drag,
    /// Buttons sit underneath and slide in at half speed.
    Reveal,
}

/// What happens once the drag passes the full action width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExpansionStyle {
    #[default]
    None,
    /// Releasing past the actions invokes the edge action.
    Selection,
    /// The edge button fills the row and its action deletes the item.
    Destructive,
    /// The edge button fills the row and its action runs on release.
    Fill,
}

impl ExpansionStyle {
    pub fn expands(self) -> bool {
        self != ExpansionStyle::None
    }

    /// Whether the edge button grows over the whole revealed area.
    pub fn fills(self) -> bool {
        matches!(self, ExpansionStyle::Destructive | ExpansionStyle::Fill)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeOptions {
    pub transition_style: TransitionStyle,
    pub expansion_style: ExpansionStyle,
    pub button_width: f32,
    pub minimum_button_width: f32,
    pub button_spacing: f32,
    /// Fraction of the action width a release must reach to stay open.
    pub threshold: f32,
    /// Overshoot allowed past the travel limit, as a fraction of the action width.
    pub elasticity: f32,
    /// Release speed in px/s that opens or closes regardless of distance.
    pub fling_velocity: f32,
    /// Settle animation after release and for programmatic moves.
    pub animation: AnimationType,
}

impl Default for SwipeOptions {
    fn default() -> Self {
        Self {
            transition_style: TransitionStyle::Border,
            expansion_style: ExpansionStyle::None,
            button_width: 80.0,
            minimum_button_width: 44.0,
            button_spacing: 0.0,
            threshold: 0.5,
            elasticity: 0.2,
            fling_velocity: 600.0,
            animation: AnimationType::Tween(AnimationSpec::tween(300, Easing::FastOutSlowIn)),
        }
    }
}

impl SwipeOptions {
    pub fn with_transition_style(mut self, style: TransitionStyle) -> Self {
        self.transition_style = style;
        self
    }

    pub fn with_expansion_style(mut self, style: ExpansionStyle) -> Self {
        self.expansion_style = style;
        self
    }

    pub fn with_button_width(mut self, width: f32) -> Self {
        self.button_width = width;
        self
    }

    pub fn with_minimum_button_width(mut self, width: f32) -> Self {
        self.minimum_button_width = width;
        self
    }

    pub fn with_button_spacing(mut self, spacing: f32) -> Self {
        self.button_spacing = spacing;
        self
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_elasticity(mut self, elasticity: f32) -> Self {
        self.elasticity = elasticity;
        self
    }

    pub fn with_fling_velocity(mut self, velocity: f32) -> Self {
        self.fling_velocity = velocity;
        self
    }

    pub fn with_animation(mut self, animation: AnimationType) -> Self {
        self.animation = animation;
        self
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(OptionsError::ThresholdOutOfRange {
                threshold: self.threshold,
            });
        }
        if !(self.elasticity >= 0.0) || !self.elasticity.is_finite() {
            return Err(OptionsError::NegativeElasticity {
                elasticity: self.elasticity,
            });
        }
        for (field, value) in [
            ("button_width", self.button_width),
            ("minimum_button_width", self.minimum_button_width),
            ("fling_velocity", self.fling_velocity),
        ] {
            if !(value > 0.0) || !value.is_finite() {
                return Err(OptionsError::NonPositive { field, value });
            }
        }
        if !(self.button_spacing >= 0.0) {
            return Err(OptionsError::NegativeSpacing {
                spacing: self.button_spacing,
            });
        }
        if self.minimum_button_width > self.button_width {
            return Err(OptionsError::MinimumExceedsButtonWidth {
                minimum: self.minimum_button_width,
                button: self.button_width,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OptionsError {
    ThresholdOutOfRange { threshold: f32 },
    NegativeElasticity { elasticity: f32 },
    NonPositive { field: &'static str, value: f32 },
    NegativeSpacing { spacing: f32 },
    MinimumExceedsButtonWidth { minimum: f32, button: f32 },
}

impl std::fmt::Display for OptionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionsError::ThresholdOutOfRange { threshold } => {
                write!(f, "threshold {threshold} outside 0..=1")
            }
            OptionsError::NegativeElasticity { elasticity } => {
                write!(f, "elasticity {elasticity} must be a non-negative number")
            }
            OptionsError::NonPositive { field, value } => {
                write!(f, "{field} must be positive, got {value}")
            }
            OptionsError::NegativeSpacing { spacing } => {
                write!(f, "button spacing {spacing} must not be negative")
            }
            OptionsError::MinimumExceedsButtonWidth { minimum, button } => {
                write!(
                    f,
                    "minimum button width {minimum} exceeds button width {button}"
                )
            }
        }
    }
}

impl std::error::Error for OptionsError {}
