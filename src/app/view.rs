// src/app/view.rs
//! View rendering

use iced::widget::{Space, stack};
use iced::{Element, Fill};

use crate::app::message::Message;
use crate::app::state::App;
use crate::ui::{components, pages};

impl App {
    /// Build the view
    pub fn view(&self) -> Element<'_, Message> {
        let locale = self.core.locale;
        let desk = &self.session.desk;

        let landing = pages::landing::view(locale);

        // Donation modal overlay (empty space if closed)
        let modal_overlay: Element<'_, Message> = match desk.support_code() {
            Some(support_code) => components::donation_modal::view(
                desk.package(),
                support_code,
                desk.is_copied(),
                &self.core.settings.bank,
                self.ui.modal_fade.progress(),
                locale,
            ),
            None => Space::new().width(0).height(0).into(),
        };

        // Success banner overlay (empty space if hidden)
        let banner_overlay: Element<'_, Message> = match desk.success_message() {
            Some(message) => {
                components::success_banner::view(message, self.ui.banner_fade.progress(), locale)
            }
            None => Space::new().width(0).height(0).into(),
        };

        // Confetti draws above everything and never takes input
        stack![
            landing,
            modal_overlay,
            banner_overlay,
            self.ui.confetti.view(),
        ]
        .width(Fill)
        .height(Fill)
        .into()
    }
}
