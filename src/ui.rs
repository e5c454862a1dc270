//! UI module for the donation desk
//! Warm sunrise aesthetic with orange and pink accents
//!
//! # Architecture
//!
//! - **Widgets** (`widgets`): Composable UI patterns without business logic
//! - **Components** (`components`): Business-specific UI with Message handling
//! - **Pages** (`pages`): Full-screen content
//! - **Effects** (`effects`): Canvas overlays such as confetti

pub mod animation;
pub mod components;
pub mod effects;
pub mod pages;
pub mod theme;
pub mod widgets;
