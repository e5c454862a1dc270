//! Feature modules - business logic separated from UI
//!
//! Each feature module contains the core logic for a specific functionality.
//! Features should not depend on UI components directly; the window side talks
//! to them through the capability ports they declare.

pub mod celebration;
pub mod donation;
pub mod settings;

pub use celebration::{Burst, ConfettiPort, Rgb};
pub use donation::{ClipboardPort, DonationPackage, SupportCode};
pub use settings::{BankAccount, Settings};
