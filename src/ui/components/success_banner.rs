//! Success banner component
//!
//! Top-center celebration notice shown after a confirmed transfer.
//! The banner ignores clicks outside its own dismiss button.

use iced::widget::{Space, button, column, container, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::theme::{self, BLACK_WEIGHT, BOLD_WEIGHT};

const BANNER_WIDTH: f32 = 440.0;

/// Build the success banner for `message`
pub fn view<'a>(message: &'a str, opacity: f32, locale: Locale) -> Element<'a, Message> {
    let strip = container(Space::new().width(Fill).height(6))
        .width(Fill)
        .style(move |_theme| theme::banner_strip(opacity));

    let title = text(locale.get(Key::BannerTitle))
        .size(22)
        .align_x(Alignment::Center)
        .style(move |theme| text::Style {
            color: Some(theme::with_alpha(theme::text_primary(theme), opacity)),
        })
        .font(iced::Font {
            weight: BLACK_WEIGHT,
            ..Default::default()
        });

    let quote = text(format!("\u{201c}{message}\u{201d}"))
        .size(17)
        .align_x(Alignment::Center)
        .color(theme::with_alpha(theme::ACCENT_PINK, opacity))
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        });

    let dismiss = button(
        text(locale.get(Key::BannerDismiss))
            .size(14)
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            }),
    )
    .padding([10, 28])
    .style(theme::primary_button)
    .on_press(Message::DismissSuccess);

    let content = column![
        strip,
        column![
            text("🥰").size(52),
            Space::new().height(6),
            title,
            Space::new().height(8),
            quote,
            Space::new().height(18),
            dismiss,
        ]
        .align_x(Alignment::Center)
        .padding(Padding::new(24.0).top(18.0)),
    ];

    let card = container(content)
        .width(BANNER_WIDTH)
        .style(move |theme| theme::floating_panel(theme, opacity));

    container(card)
        .center_x(Fill)
        .padding(Padding::new(0.0).top(32.0))
        .into()
}
