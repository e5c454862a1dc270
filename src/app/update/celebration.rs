// src/app/update/celebration.rs
//! Confetti frame and encore handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::ConfettiPort;

impl App {
    /// Handle celebration-related messages
    pub fn handle_celebration(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::AnimationTick(now) => {
                self.session.desk.tick(*now, &mut self.ui.confetti);
                self.ui.tick(*now);
                Some(Task::none())
            }

            Message::EncoreBurst(handle, burst) => {
                if self.session.desk.is_celebration_live(*handle) {
                    self.ui.confetti.fire(burst.clone());
                } else {
                    tracing::debug!("Dropping encore for finished celebration {:?}", handle);
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
