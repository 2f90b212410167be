//! Keyframe primitive.

/// A waypoint in a property's animated transition.
///
/// The host animation engine interpolates between consecutive frames; this
/// crate only produces them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Normalized time in [0, 1] relative to the transition duration.
    pub time: f64,
    /// Property value reached at `time`.
    pub value: f64,
}

impl Frame {
    /// Create a keyframe.
    #[must_use]
    pub const fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }
}
