//! Task helpers bridging feature ports to iced tasks

use std::time::Duration;

use iced::Task;

use crate::app::Message;
use crate::features::ClipboardPort;

/// Clipboard port that queues `iced::clipboard::write` tasks
#[derive(Default)]
pub struct TaskClipboard {
    writes: Vec<Task<Message>>,
}

impl TaskClipboard {
    /// Batch every queued write into one task
    pub fn into_task(self) -> Task<Message> {
        Task::batch(self.writes)
    }
}

impl ClipboardPort for TaskClipboard {
    fn write_text(&mut self, text: String) {
        self.writes.push(iced::clipboard::write(text));
    }
}

/// Deliver `message` after `delay`
pub fn after(delay: Duration, message: Message) -> Task<Message> {
    Task::perform(
        async move {
            tokio::time::sleep(delay).await;
            message
        },
        |message| message,
    )
}
