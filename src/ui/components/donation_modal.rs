//! Donation modal component
//!
//! Shows the chosen package, the bank card, the support code with a copy
//! button and the confirmation button. Clicking the backdrop closes it.

use iced::mouse::Interaction;
use iced::widget::{Space, button, column, container, mouse_area, opaque, row, text};
use iced::{Alignment, Color, Element, Fill, Padding};

use crate::app::Message;
use crate::features::{BankAccount, DonationPackage, SupportCode};
use crate::i18n::{Key, Locale};
use crate::ui::theme::{self, BLACK_WEIGHT, BOLD_WEIGHT};

const MODAL_WIDTH: f32 = 400.0;

fn bold() -> iced::Font {
    iced::Font {
        weight: BOLD_WEIGHT,
        ..Default::default()
    }
}

fn black() -> iced::Font {
    iced::Font {
        weight: BLACK_WEIGHT,
        ..Default::default()
    }
}

/// Tiny uppercase caption used on the bank card
fn caption<'a>(label: &'a str) -> Element<'a, Message> {
    text(label.to_uppercase())
        .size(10)
        .color(Color::from_rgba(1.0, 1.0, 1.0, 0.7))
        .font(bold())
        .into()
}

/// Build the donation modal
pub fn view<'a>(
    package: &'a DonationPackage,
    support_code: SupportCode,
    copied: bool,
    bank: &'a BankAccount,
    opacity: f32,
    locale: Locale,
) -> Element<'a, Message> {
    // Header
    let header = container(
        row![
            column![
                text(locale.get(Key::ModalEyebrow).to_uppercase())
                    .size(11)
                    .color(theme::GOLD)
                    .font(bold()),
                Space::new().height(4),
                text(locale.get(Key::ModalTitle))
                    .size(22)
                    .color(Color::WHITE)
                    .font(black()),
            ],
            Space::new().width(Fill),
            button(text("✕").size(18).color(Color::WHITE))
                .padding([4, 10])
                .style(theme::ghost_button)
                .on_press(Message::CloseDonation),
        ]
        .align_y(Alignment::Start),
    )
    .width(Fill)
    .padding(20)
    .style(theme::modal_header);

    // Selected package
    let selected = container(
        column![
            text(locale.get(Key::SelectedPackage).to_uppercase())
                .size(11)
                .font(bold())
                .style(|theme| text::Style {
                    color: Some(theme::text_secondary(theme)),
                }),
            Space::new().height(4),
            text(package.name.as_str())
                .size(18)
                .color(theme::ACCENT_ORANGE)
                .font(bold()),
            Space::new().height(2),
            text(package.amount.as_str()).size(30).font(black()),
        ]
        .align_x(Alignment::Center),
    )
    .width(Fill)
    .padding(16)
    .style(theme::soft_block);

    // Bank card
    let account = button(
        column![
            caption(locale.get(Key::AccountLabel)),
            Space::new().height(4),
            text(bank.account_alias.as_str())
                .size(24)
                .color(theme::GOLD)
                .font(iced::Font::MONOSPACE),
        ]
        .align_x(Alignment::Start),
    )
    .padding(0)
    .style(|_theme, _status| button::Style {
        background: None,
        text_color: Color::WHITE,
        ..Default::default()
    })
    .on_press(Message::CopyMemo);

    let bank_card = container(
        column![
            row![
                column![
                    caption(locale.get(Key::BankLabel)),
                    text(bank.bank_name.as_str()).size(15).font(bold()),
                ],
                Space::new().width(Fill),
                text("VCB")
                    .size(32)
                    .color(Color::from_rgba(1.0, 1.0, 1.0, 0.2))
                    .font(black()),
            ]
            .align_y(Alignment::Start),
            Space::new().height(14),
            account,
            Space::new().height(14),
            caption(locale.get(Key::HolderLabel)),
            text(bank.holder_name.as_str()).size(15).font(bold()),
        ],
    )
    .width(Fill)
    .padding(20)
    .style(theme::bank_card);

    // Transfer memo
    let memo_heading = row![
        text(locale.get(Key::MemoLabel))
            .size(12)
            .font(bold())
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
        Space::new().width(Fill),
        container(text(locale.get(Key::MemoWarning)).size(10).font(bold()))
            .padding([2, 8])
            .style(theme::warning_pill),
    ]
    .align_y(Alignment::Center);

    let copy_label = if copied {
        format!("✓ {}", locale.get(Key::Copied))
    } else {
        format!("⧉ {}", locale.get(Key::Copy))
    };

    let memo_row = container(
        row![
            text(support_code.to_string())
                .size(18)
                .font(iced::Font::MONOSPACE),
            Space::new().width(Fill),
            button(text(copy_label).size(12).font(bold()))
                .padding([8, 12])
                .style(theme::copy_button(copied))
                .on_press(Message::CopyMemo),
        ]
        .align_y(Alignment::Center),
    )
    .width(Fill)
    .padding(Padding::new(10.0).left(14.0))
    .style(theme::soft_block);

    let note = text(locale.get(Key::TransferNote))
        .size(11)
        .width(Fill)
        .align_x(Alignment::Center)
        .style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        });

    let confirm = button(
        text(locale.get(Key::ConfirmTransfer))
            .size(15)
            .font(bold())
            .width(Fill)
            .align_x(Alignment::Center),
    )
    .width(Fill)
    .padding(14)
    .style(theme::primary_button)
    .on_press(Message::ConfirmTransfer);

    let body = column![
        selected,
        bank_card,
        column![memo_heading, Space::new().height(8), memo_row, Space::new().height(10), note],
        confirm,
    ]
    .spacing(18)
    .padding(20);

    let panel = container(column![header, body])
        .width(MODAL_WIDTH)
        .style(move |theme| theme::floating_panel(theme, opacity));

    // Clicks inside the panel must not reach the backdrop
    let panel = mouse_area(panel).on_press(Message::Noop);

    let backdrop = container(panel)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .padding(16)
        .style(move |_theme| theme::backdrop(opacity));

    // Clicking the backdrop closes the modal
    let event_blocker = mouse_area(backdrop)
        .interaction(Interaction::Idle)
        .on_press(Message::CloseDonation);

    opaque(event_blocker).into()
}
