//! Donation flow - package selection, transfer instructions, confirmation
//!
//! Structure:
//! - catalog.rs: the packages offered on the landing page
//! - support_code.rs: `NT-xxxx` transfer memo codes
//! - memo.rs: clipboard capability and the transfer memo template
//! - timed.rs: values that clear themselves after a delay
//! - desk.rs: root session state (modal, success banner, celebrations)

mod catalog;
mod desk;
mod memo;
mod support_code;
mod timed;

pub use catalog::{CATALOG, DonationPackage};
pub use desk::DonationDesk;
pub use memo::ClipboardPort;
pub use support_code::SupportCode;
pub use timed::Expiry;
