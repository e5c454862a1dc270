//! Package card widget
//!
//! Displays one donation package: emoji badge, name, amount, tagline and a
//! call-to-action button.
//!
//! # Design
//!
//! Reusable widget with a generic Message type; the caller decides what
//! picking the package does.

use iced::widget::{Space, button, column, container, text};
use iced::{Alignment, Element, Fill};

use crate::ui::theme::{self, BLACK_WEIGHT, BOLD_WEIGHT};

/// Card size configuration
const CARD_WIDTH: f32 = 300.0;
const BADGE_SIZE: f32 = 72.0;

/// Create a package card element
///
/// # Arguments
/// * `emoji` - Badge glyph
/// * `name` - Package label
/// * `amount` - Display-formatted amount
/// * `tagline` - One line pitch
/// * `cta` - Button label
/// * `on_pick` - Message to send when the button is pressed
pub fn view<'a, Message: Clone + 'a>(
    emoji: &'a str,
    name: &'a str,
    amount: &'a str,
    tagline: &'a str,
    cta: &'a str,
    on_pick: Message,
) -> Element<'a, Message> {
    let badge = container(text(emoji).size(36))
        .width(BADGE_SIZE)
        .height(BADGE_SIZE)
        .center_x(BADGE_SIZE)
        .center_y(BADGE_SIZE)
        .style(theme::soft_block);

    let name_text = text(name)
        .size(18)
        .color(theme::ACCENT_ORANGE)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        });

    let amount_text = text(amount)
        .size(28)
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        })
        .font(iced::Font {
            weight: BLACK_WEIGHT,
            ..Default::default()
        });

    let tagline_text = text(tagline)
        .size(13)
        .align_x(Alignment::Center)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        });

    let pick = button(
        text(cta)
            .size(14)
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            })
            .width(Fill)
            .align_x(Alignment::Center),
    )
    .width(Fill)
    .padding([10, 20])
    .style(theme::accent_button)
    .on_press(on_pick);

    container(
        column![
            badge,
            Space::new().height(14),
            name_text,
            Space::new().height(4),
            amount_text,
            Space::new().height(8),
            tagline_text,
            Space::new().height(18),
            pick,
        ]
        .align_x(Alignment::Center),
    )
    .width(CARD_WIDTH)
    .padding(24)
    .style(theme::package_card)
    .into()
}
