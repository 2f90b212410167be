//! Fluent keyframe builder for property transitions.

use super::frame::Frame;
use crate::options::AnimationOptions;

/// Normalized time of the overshoot frame in a bounce.
const OVERSHOOT_TIME: f64 = 0.8;
/// Normalized time of the damped rebound frame in a bounce.
const REBOUND_TIME: f64 = 0.9;
/// Fraction of the overshoot retained by the rebound frame.
const REBOUND_DAMPING: f64 = 0.6;

/// Overshoot magnitude as a fraction of the target value, used when a
/// bounce is built without an explicit overshoot.
pub const DEFAULT_BOUNCE_RATIO: f64 = 0.25;

/// Keyframes for one animated property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyTrack<P> {
    /// Host-toolkit property reference the frames apply to.
    pub property: P,
    /// Ordered keyframes, times ascending.
    pub frames: Vec<Frame>,
}

/// Accumulates per-property keyframe tracks for one transition.
///
/// The builder is immutable in the fluent sense: every method consumes the
/// builder and returns the extended value, so a reused binding can never
/// alias a shared accumulator. `P` is the host toolkit's property
/// reference type (e.g. a dependency-property handle or a string id).
///
/// Bounce transitions approximate a damped bounce curve with exactly three
/// frames: an overshoot past the target, then a damped rebound, then the
/// settle at the target itself.
#[derive(Debug, Clone)]
pub struct AnimationBuilder<P> {
    tracks: Vec<PropertyTrack<P>>,
    bounce_ratio: f64,
    enabled: bool,
}

impl<P> AnimationBuilder<P> {
    /// Create an empty builder with default bounce overshoot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tracks: Vec::new(),
            bounce_ratio: DEFAULT_BOUNCE_RATIO,
            enabled: true,
        }
    }

    /// Create a builder honoring configured animation options.
    ///
    /// A disabled configuration collapses bounce helpers to their single
    /// settle frame so charts still reach their final state.
    #[must_use]
    pub const fn from_options(options: &AnimationOptions) -> Self {
        Self {
            tracks: Vec::new(),
            bounce_ratio: options.bounce_ratio,
            enabled: options.enabled,
        }
    }

    /// Append an explicit keyframe track for `property`.
    #[must_use]
    pub fn property(
        mut self,
        property: P,
        frames: impl IntoIterator<Item = Frame>,
    ) -> Self {
        self.tracks.push(PropertyTrack {
            property,
            frames: frames.into_iter().collect(),
        });
        self
    }

    /// Append a bounce toward `to`: overshoot high, rebound low, settle.
    ///
    /// `max_bounce` fixes the overshoot magnitude; when `None` the
    /// overshoot is `to` times the configured bounce ratio. A non-finite
    /// target degenerates to a zero overshoot (all frames settle at `to`),
    /// and a non-finite `max_bounce` is treated as unset.
    #[must_use]
    pub fn bounce(self, property: P, to: f64, max_bounce: Option<f64>) -> Self {
        let b = self.overshoot(to, max_bounce);
        if !self.enabled {
            return self.property(property, [Frame::new(1.0, to)]);
        }
        self.property(
            property,
            [
                Frame::new(OVERSHOOT_TIME, to + b),
                Frame::new(REBOUND_TIME, to - b * REBOUND_DAMPING),
                Frame::new(1.0, to),
            ],
        )
    }

    /// Append an inverted bounce toward `to`: overshoot low, rebound high,
    /// settle. Same overshoot rules as [`bounce`](Self::bounce).
    #[must_use]
    pub fn inverse_bounce(
        self,
        property: P,
        to: f64,
        max_bounce: Option<f64>,
    ) -> Self {
        let b = self.overshoot(to, max_bounce);
        if !self.enabled {
            return self.property(property, [Frame::new(1.0, to)]);
        }
        self.property(
            property,
            [
                Frame::new(OVERSHOOT_TIME, to - b),
                Frame::new(REBOUND_TIME, to + b * REBOUND_DAMPING),
                Frame::new(1.0, to),
            ],
        )
    }

    /// Accumulated tracks, in append order.
    #[must_use]
    pub fn tracks(&self) -> &[PropertyTrack<P>] {
        &self.tracks
    }

    /// Consume the builder, handing the tracks to the host engine.
    #[must_use]
    pub fn into_tracks(self) -> Vec<PropertyTrack<P>> {
        self.tracks
    }

    /// Whether no tracks have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Number of accumulated tracks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    fn overshoot(&self, to: f64, max_bounce: Option<f64>) -> f64 {
        if !to.is_finite() {
            return 0.0;
        }
        match max_bounce {
            Some(b) if b.is_finite() => b,
            _ => to * self.bounce_ratio,
        }
    }
}

impl<P> Default for AnimationBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames_of(builder: &AnimationBuilder<&str>, idx: usize) -> Vec<Frame> {
        builder.tracks()[idx].frames.clone()
    }

    #[test]
    fn bounce_default_overshoot() {
        let b = AnimationBuilder::new().bounce("height", 100.0, None);
        assert_eq!(
            frames_of(&b, 0),
            vec![
                Frame::new(0.8, 125.0),
                Frame::new(0.9, 85.0),
                Frame::new(1.0, 100.0),
            ]
        );
    }

    #[test]
    fn inverse_bounce_default_overshoot() {
        let b = AnimationBuilder::new().inverse_bounce("y", 100.0, None);
        assert_eq!(
            frames_of(&b, 0),
            vec![
                Frame::new(0.8, 75.0),
                Frame::new(0.9, 115.0),
                Frame::new(1.0, 100.0),
            ]
        );
    }

    #[test]
    fn bounce_explicit_overshoot() {
        let b = AnimationBuilder::new().bounce("height", 100.0, Some(10.0));
        assert_eq!(
            frames_of(&b, 0),
            vec![
                Frame::new(0.8, 110.0),
                Frame::new(0.9, 94.0),
                Frame::new(1.0, 100.0),
            ]
        );
    }

    #[test]
    fn non_finite_overshoot_falls_back_to_ratio() {
        let b = AnimationBuilder::new().bounce("h", 100.0, Some(f64::NAN));
        assert_eq!(frames_of(&b, 0)[0], Frame::new(0.8, 125.0));
    }

    #[test]
    fn non_finite_target_degenerates() {
        let b =
            AnimationBuilder::new().bounce("h", f64::INFINITY, Some(10.0));
        let frames = frames_of(&b, 0);
        // Zero overshoot: every frame sits at the (non-finite) target
        assert_eq!(frames[0].value, f64::INFINITY);
        assert_eq!(frames[1].value, f64::INFINITY);
        assert_eq!(frames[2].value, f64::INFINITY);
    }

    #[test]
    fn chaining_accumulates_tracks() {
        let b = AnimationBuilder::new()
            .bounce("width", 10.0, None)
            .inverse_bounce("height", 20.0, None)
            .property("opacity", [Frame::new(1.0, 1.0)]);
        assert_eq!(b.len(), 3);
        assert_eq!(b.tracks()[0].property, "width");
        assert_eq!(b.tracks()[2].frames, vec![Frame::new(1.0, 1.0)]);
    }

    #[test]
    fn chaining_leaves_no_shared_accumulator() {
        let base = AnimationBuilder::new().bounce("a", 1.0, None);
        let extended = base.clone().bounce("b", 2.0, None);
        assert_eq!(base.len(), 1);
        assert_eq!(extended.len(), 2);
    }

    #[test]
    fn disabled_options_collapse_to_settle_frame() {
        let opts = AnimationOptions {
            enabled: false,
            ..AnimationOptions::default()
        };
        let b = AnimationBuilder::from_options(&opts)
            .bounce("height", 100.0, None)
            .inverse_bounce("width", 50.0, None);
        assert_eq!(frames_of(&b, 0), vec![Frame::new(1.0, 100.0)]);
        assert_eq!(frames_of(&b, 1), vec![Frame::new(1.0, 50.0)]);
    }

    #[test]
    fn custom_bounce_ratio() {
        let opts = AnimationOptions {
            bounce_ratio: 0.5,
            ..AnimationOptions::default()
        };
        let b =
            AnimationBuilder::from_options(&opts).bounce("h", 100.0, None);
        assert_eq!(frames_of(&b, 0)[0], Frame::new(0.8, 150.0));
    }

    #[test]
    fn into_tracks_preserves_order() {
        let tracks = AnimationBuilder::new()
            .bounce("a", 1.0, None)
            .bounce("b", 2.0, None)
            .into_tracks();
        let names: Vec<&str> = tracks.iter().map(|t| t.property).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
