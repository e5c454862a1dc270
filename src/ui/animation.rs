//! Animation helpers built on `iced_anim`
//!
//! Overlays fade in when they appear and vanish at once when dismissed.

mod fade;

pub use fade::FadeIn;
