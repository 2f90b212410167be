//! Keyframe construction for animated property transitions.
//!
//! The host toolkit owns playback and interpolation; this module only
//! computes the ordered frame sequences handed to its animation engine.

mod builder;
mod frame;

pub use builder::{AnimationBuilder, PropertyTrack, DEFAULT_BOUNCE_RATIO};
pub use frame::Frame;
