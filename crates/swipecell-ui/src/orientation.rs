/// The row edge a set of actions is revealed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeOrientation {
    /// Actions on the left edge; the content moves right.
    Left,
    /// Actions on the right edge; the content moves left.
    Right,
}

impl SwipeOrientation {
    pub const ALL: [SwipeOrientation; 2] = [SwipeOrientation::Left, SwipeOrientation::Right];

    /// Sign of the content offset while this side is revealed.
    pub fn scale(self) -> f32 {
        match self {
            SwipeOrientation::Left => 1.0,
            SwipeOrientation::Right => -1.0,
        }
    }

    /// Side a signed offset reveals; `None` at zero.
    pub fn for_offset(offset: f32) -> Option<Self> {
        if offset > 0.0 {
            Some(SwipeOrientation::Left)
        } else if offset < 0.0 {
            Some(SwipeOrientation::Right)
        } else {
            None
        }
    }
}

impl std::fmt::Display for SwipeOrientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwipeOrientation::Left => f.write_str("left"),
            SwipeOrientation::Right => f.write_str("right"),
        }
    }
}
