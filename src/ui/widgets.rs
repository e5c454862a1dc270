//! Reusable UI widgets - composable components without business logic
//!
//! Widgets combine basic iced elements into reusable UI patterns.
//! They should not depend on `crate::app` directly.
//!
//! # Design Principles
//!
//! - **No business logic**: Widgets must not import from `crate::app::Message`
//! - **Generic callbacks**: Use generic Message types
//! - **Composable**: Build on iced's built-in widgets

pub mod package_card;
pub mod section_header;

pub use package_card::view as package_card;
