// src/app/update/keyboard.rs
//! Keyboard shortcuts

use iced::Task;
use iced::keyboard::{Key, key::Named};

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle keyboard-related messages
    pub fn handle_keyboard(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::KeyPressed(Key::Named(Named::Escape)) => Some(self.escape()),
            Message::KeyPressed(_) => Some(Task::none()),
            _ => None,
        }
    }

    /// Close the topmost overlay, or stop the latest celebration
    fn escape(&mut self) -> Task<Message> {
        if self.session.desk.is_modal_open() {
            return self.update(Message::CloseDonation);
        }
        if self.session.desk.success_message().is_some() {
            return self.update(Message::DismissSuccess);
        }
        if let Some(handle) = self.session.last_celebration.take()
            && self.session.desk.cancel_celebration(handle)
        {
            tracing::info!("Celebration {:?} cancelled", handle);
        }
        Task::none()
    }
}
