//! Show/hide keyframes and their completion signal.
//!
//! The window animates with CSS transitions between two keyframes; a timer of
//! the same duration stands in for the transition's completion event.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

use std::time::Duration;

/// Duration of both the open and the close animation.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(600);

/// Vertical offset of the hidden window, in pixels.
const HIDDEN_OFFSET_PX: f64 = -100.0;

/// Visual properties the animation interpolates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationFrame {
    pub opacity: f64,
    pub scale: f64,
    pub translate_y: f64,
}

pub const OPEN_FRAME: AnimationFrame = AnimationFrame { opacity: 1.0, scale: 1.0, translate_y: 0.0 };
pub const CLOSED_FRAME: AnimationFrame = AnimationFrame { opacity: 0.0, scale: 0.0, translate_y: HIDDEN_OFFSET_PX };

impl AnimationFrame {
    /// Inline CSS declarations for this frame.
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translateY({}px) scale({});",
            self.opacity, self.translate_y, self.scale
        )
    }
}

/// CSS `transition` declaration animating between frames over `duration`.
#[must_use]
pub fn transition_css(duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    format!("transition: opacity {secs}s ease, transform {secs}s ease;")
}

/// Resolves once an animation of `duration` has run.
///
/// Outside the browser there is nothing to animate and it resolves at once.
#[allow(clippy::unused_async)]
pub async fn completed(duration: Duration) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(duration).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = duration;
    }
}
