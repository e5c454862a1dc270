// src/app/update/window.rs
//! Window message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::WindowResized(size) => {
                self.core.viewport = *size;
                self.ui.confetti.set_viewport(*size);
                Some(Task::none())
            }

            Message::Noop => Some(Task::none()),

            _ => None,
        }
    }
}
