//! Section header widget
//!
//! Displays a section title with a muted subtitle underneath.
//! Uses a generic Message type so it can be reused anywhere.

use iced::widget::{Space, column, text};
use iced::{Alignment, Element};

use crate::ui::theme::{self, BLACK_WEIGHT};

/// Create a centered section header element
///
/// # Arguments
/// * `title` - The section title text
/// * `subtitle` - Smaller line below the title
pub fn view<'a, Message: 'a>(title: &'a str, subtitle: &'a str) -> Element<'a, Message> {
    let title_text = text(title)
        .size(30)
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        })
        .font(iced::Font {
            weight: BLACK_WEIGHT,
            ..Default::default()
        });

    let subtitle_text = text(subtitle).size(15).style(|theme| text::Style {
        color: Some(theme::text_secondary(theme)),
    });

    column![title_text, Space::new().height(6), subtitle_text]
        .align_x(Alignment::Center)
        .into()
}
