// src/app/message.rs
//! Application messages

use iced::Size;
use iced::keyboard::Key;
use iced::time::Instant;

use crate::features::Burst;
use crate::features::celebration::CelebrationHandle;
use crate::features::donation::Expiry;

#[derive(Debug, Clone)]
pub enum Message {
    /// Swallowed click (inside the modal panel)
    Noop,

    // Donation flow
    /// Open the modal for the catalogue entry at this index
    SelectPackage(usize),
    CloseDonation,
    CopyMemo,
    CopiedExpired(Expiry),
    ConfirmTransfer,

    // Success banner
    SuccessExpired(Expiry),
    DismissSuccess,

    // Celebration
    /// Extra burst belonging to a loop; dropped once that loop is gone
    EncoreBurst(CelebrationHandle, Burst),
    AnimationTick(Instant),

    // Window
    WindowResized(Size),
    KeyPressed(Key),
}
