//! Landing page
//! Hero copy followed by the package grid

use iced::widget::{Column, Row, Space, column, container, scrollable, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::features::donation::CATALOG;
use crate::i18n::{Key, Locale};
use crate::ui::theme::{self, BLACK_WEIGHT, BOLD_WEIGHT};
use crate::ui::widgets::{self, section_header};

/// Cards per grid row
const CARDS_PER_ROW: usize = 3;

/// Build the landing page
pub fn view<'a>(locale: Locale) -> Element<'a, Message> {
    let hero = column![
        text(locale.get(Key::HeroEyebrow).to_uppercase())
            .size(13)
            .color(theme::ACCENT_ORANGE)
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            }),
        Space::new().height(10),
        text(locale.get(Key::HeroTitle))
            .size(44)
            .align_x(Alignment::Center)
            .font(iced::Font {
                weight: BLACK_WEIGHT,
                ..Default::default()
            }),
        Space::new().height(12),
        text(locale.get(Key::HeroSubtitle))
            .size(16)
            .align_x(Alignment::Center)
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
    ]
    .align_x(Alignment::Center)
    .max_width(760);

    let cta = locale.get(Key::PickPackage);
    let grid = CATALOG
        .chunks(CARDS_PER_ROW)
        .enumerate()
        .fold(Column::new().spacing(24), |grid, (row_idx, chunk)| {
            let cards = chunk.iter().enumerate().fold(
                Row::new().spacing(24),
                |cards, (col_idx, listing)| {
                    cards.push(widgets::package_card(
                        listing.emoji,
                        listing.name,
                        listing.amount,
                        listing.tagline,
                        cta,
                        Message::SelectPackage(row_idx * CARDS_PER_ROW + col_idx),
                    ))
                },
            );
            grid.push(cards)
        })
        .align_x(Alignment::Center);

    let footer = text(locale.get(Key::Footer))
        .size(13)
        .style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        });

    let content = column![
        hero,
        Space::new().height(56),
        section_header::view(
            locale.get(Key::PackagesTitle),
            locale.get(Key::PackagesSubtitle)
        ),
        Space::new().height(32),
        grid,
        Space::new().height(56),
        footer,
    ]
    .align_x(Alignment::Center)
    .width(Fill)
    .padding(Padding::new(32.0).top(64.0));

    let scrollable_content = scrollable(content)
        .width(Fill)
        .height(Fill)
        .id(iced::widget::Id::new("landing_scroll"));

    container(scrollable_content)
        .width(Fill)
        .height(Fill)
        .style(theme::page)
        .into()
}
