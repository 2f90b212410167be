//! Animation timing options.

use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Options for visual property transitions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct AnimationOptions {
    /// Whether transitions animate at all. When disabled, bounce helpers
    /// emit only the final settle frame.
    pub enabled: bool,
    /// Transition duration in milliseconds. Default: 300ms
    pub duration_ms: u64,
    /// Overshoot magnitude as a fraction of the target value, used when a
    /// bounce is built without an explicit overshoot. Default: 0.25
    pub bounce_ratio: f64,
}

impl AnimationOptions {
    /// Transition duration as a [`Duration`].
    #[must_use]
    pub const fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_ms: 300,
            bounce_ratio: 0.25,
        }
    }
}
