//! UI Components module - business-specific composite components
//!
//! Components combine widgets with application logic.
//! Components and pages are the layers that import from `crate::app`.
//!
//! # Relationship to Other Layers
//!
//! - **Widgets** (`crate::ui::widgets`): Composable UI patterns (no business logic)
//! - **Components** (this module): Business-specific UI with Message handling
//! - **Pages** (`crate::ui::pages`): Full-screen content built from both

pub mod donation_modal;
pub mod success_banner;
