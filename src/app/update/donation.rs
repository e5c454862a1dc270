// src/app/update/donation.rs
//! Donation modal and success banner handlers

use iced::Task;
use iced::time::Instant;

use crate::app::helpers::{TaskClipboard, after};
use crate::app::message::Message;
use crate::app::state::App;
use crate::features::donation::CATALOG;

impl App {
    /// Handle donation-related messages
    pub fn handle_donation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::SelectPackage(index) => {
                let Some(listing) = CATALOG.get(*index) else {
                    tracing::warn!("Ignoring unknown package index {}", index);
                    return Some(Task::none());
                };
                self.session
                    .desk
                    .open_donation(listing.to_package(), &mut rand::rng());
                self.ui.modal_fade.restart();
                Some(Task::none())
            }

            Message::CloseDonation => {
                self.session.desk.close_donation();
                self.ui.modal_fade.reset();
                Some(Task::none())
            }

            Message::CopyMemo => {
                let mut clipboard = TaskClipboard::default();
                let Some((delay, expiry)) = self
                    .session
                    .desk
                    .copy_to_clipboard(&self.core.settings.bank, &mut clipboard)
                else {
                    return Some(Task::none());
                };
                tracing::debug!("Transfer memo copied to clipboard");
                Some(Task::batch([
                    clipboard.into_task(),
                    after(delay, Message::CopiedExpired(expiry)),
                ]))
            }

            Message::CopiedExpired(expiry) => {
                self.session.desk.expire_copied(*expiry);
                Some(Task::none())
            }

            Message::ConfirmTransfer => {
                let Some(confirmation) = self
                    .session
                    .desk
                    .confirm(Instant::now(), &mut self.ui.confetti)
                else {
                    return Some(Task::none());
                };
                self.ui.modal_fade.reset();
                self.ui.banner_fade.restart();
                self.session.last_celebration = Some(confirmation.celebration);

                let (delay, expiry) = confirmation.banner_timer();
                let mut tasks = vec![after(delay, Message::SuccessExpired(expiry))];
                if let Some(encore) = confirmation.encore {
                    tasks.push(after(
                        encore.delay,
                        Message::EncoreBurst(confirmation.celebration, encore.burst),
                    ));
                }
                Some(Task::batch(tasks))
            }

            Message::SuccessExpired(expiry) => {
                self.session.desk.expire_success(*expiry);
                if self.session.desk.success_message().is_none() {
                    self.ui.banner_fade.reset();
                }
                Some(Task::none())
            }

            Message::DismissSuccess => {
                self.session.desk.dismiss_success();
                self.ui.banner_fade.reset();
                Some(Task::none())
            }

            _ => None,
        }
    }
}
