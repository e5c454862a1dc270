//! One-shot fade-in animation for overlays

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Overlay fade duration
const FADE_DURATION: Duration = Duration::from_millis(220);

fn fade_easing() -> Easing {
    Easing::EASE_OUT.with_duration(FADE_DURATION)
}

/// Opacity that animates 0 → 1 each time `restart` is called
#[derive(Debug)]
pub struct FadeIn {
    animation: Animated<f32>,
}

impl Default for FadeIn {
    fn default() -> Self {
        Self::new()
    }
}

impl FadeIn {
    pub fn new() -> Self {
        Self {
            animation: Animated::transition(0.0, fade_easing()),
        }
    }

    /// Start again from fully transparent
    pub fn restart(&mut self) {
        self.animation = Animated::transition(0.0, fade_easing());
        self.animation.update(1.0.into());
    }

    /// Jump back to transparent without animating
    pub fn reset(&mut self) {
        self.animation = Animated::transition(0.0, fade_easing());
    }

    /// Current opacity (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        *self.animation.value()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Must be called on each animation frame to update values
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}
