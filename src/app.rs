//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::i18n::{Key, Language, Locale};
pub use message::Message;
pub use state::{App, CoreState, SessionState, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Load settings first to initialize locale correctly
        let settings = crate::features::Settings::load();
        let locale = Locale::new(Language::from_code(&settings.display.language));

        // 2. Initialize sub-states
        let session = SessionState::new(&settings);
        let core = CoreState::new(settings, locale);
        let ui = UiState::new(&core.settings, core.viewport);

        tracing::info!(
            "Donation desk ready (language: {}, overlap: {}, reduce motion: {})",
            locale.language.code(),
            session.desk.overlap_policy(),
            core.settings.display.reduce_motion
        );

        (Self { core, session, ui }, Task::none())
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title
    pub fn title(&self) -> String {
        let name = self.core.locale.get(Key::AppName);
        if self.session.desk.is_modal_open() {
            format!("{} - {}", name, self.session.desk.package().name)
        } else {
            name.to_string()
        }
    }

    /// Subscriptions for animation frames, window size and keyboard
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;

        // 1. Keyboard events
        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, .. } => Some(Message::KeyPressed(key)),
            _ => None,
        });

        // 2. Animation frames while something moves
        let animation_sub = if subscription_logic::needs_animation_subscription(
            self.ui.has_active_animations(),
            self.ui.confetti.is_active(),
            self.session.desk.is_celebrating(),
        ) {
            iced::window::frames().map(Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        // 3. Window resize
        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        iced::Subscription::batch([keyboard_sub, animation_sub, resize_sub])
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().0
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    pub fn needs_animation_subscription(
        has_fades: bool,
        has_particles: bool,
        is_celebrating: bool,
    ) -> bool {
        has_fades || has_particles || is_celebrating
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;

    #[test]
    fn idle_needs_no_frames() {
        assert!(!needs_animation_subscription(false, false, false));
    }

    #[test]
    fn running_loop_needs_frames_before_particles_exist() {
        // Loop launched with motion reduced: no particles but bursts still scheduled
        assert!(needs_animation_subscription(false, false, true));
    }

    #[test]
    fn lingering_particles_keep_frames_after_loop_ends() {
        assert!(needs_animation_subscription(false, true, false));
    }

    #[test]
    fn fades_need_frames() {
        assert!(needs_animation_subscription(true, false, false));
    }
}
