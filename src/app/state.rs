// src/app/state.rs
//! Application state definitions

use iced::Size;
use iced::time::Instant;

use crate::features::Settings;
use crate::features::celebration::CelebrationHandle;
use crate::features::donation::DonationDesk;
use crate::i18n::Locale;
use crate::ui::animation::FadeIn;
use crate::ui::effects::ConfettiField;

/// Main application state
pub struct App {
    /// Settings, locale and window size
    pub core: CoreState,
    /// Donation flow
    pub session: SessionState,
    /// Overlay animations and confetti
    pub ui: UiState,
}

pub struct CoreState {
    pub settings: Settings,
    pub locale: Locale,
    pub viewport: Size,
}

impl CoreState {
    pub fn new(settings: Settings, locale: Locale) -> Self {
        Self {
            settings,
            locale,
            viewport: Size::new(1200.0, 820.0),
        }
    }
}

pub struct SessionState {
    pub desk: DonationDesk,
    /// Most recently launched celebration, for Escape to cancel
    pub last_celebration: Option<CelebrationHandle>,
}

impl SessionState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            desk: DonationDesk::new(settings.celebration.overlap),
            last_celebration: None,
        }
    }
}

pub struct UiState {
    pub modal_fade: FadeIn,
    pub banner_fade: FadeIn,
    pub confetti: ConfettiField,
}

impl UiState {
    pub fn new(settings: &Settings, viewport: Size) -> Self {
        let mut confetti = ConfettiField::new(viewport);
        confetti.set_enabled(!settings.display.reduce_motion);
        Self {
            modal_fade: FadeIn::new(),
            banner_fade: FadeIn::new(),
            confetti,
        }
    }

    /// Whether any fade is still running
    pub fn has_active_animations(&self) -> bool {
        self.modal_fade.is_animating() || self.banner_fade.is_animating()
    }

    /// Advance fades and particles
    pub fn tick(&mut self, now: Instant) {
        self.modal_fade.tick(now);
        self.banner_fade.tick(now);
        self.confetti.tick(now);
    }
}
