//! Visual effects
//!
//! - Confetti particle field rendered on a canvas overlay

pub mod confetti;

pub use confetti::ConfettiField;
