//! Celebration effects fired when a donation is confirmed
//!
//! Structure:
//! - tier.rs: package name → `PackageTier` classification and profiles
//! - burst.rs: burst requests and the `ConfettiPort` capability
//! - scheduler.rs: deadline-bounded confetti loops with cancellation handles

mod burst;
mod scheduler;
mod tier;

pub use burst::{Burst, ConfettiPort, Rgb};
#[cfg(test)]
pub use burst::{Origin, RecordingConfetti};
#[cfg(test)]
pub use scheduler::LOOP_DURATION;
pub use scheduler::{CelebrationHandle, CelebrationScheduler, ENCORE_DELAY};
pub use tier::PackageTier;
