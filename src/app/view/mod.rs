//! UI rendering module for contactbook
//!
//! Split into logical submodules for maintainability.

mod contact_list;
mod form;
mod modals;

use crate::app::ui_components::{ghost_button, main_container, modal_backdrop};
use crate::app::{Message, State};
use iced::widget::{
    Space, button, center, column, container, opaque, row, scrollable, stack, text,
};
use iced::{Alignment, Element, Length};

/// Main view entry point
pub fn view(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let session = &state.session;

    let header = view_header(state);

    let body = row![
        container(form::view_form(session, theme))
            .width(Length::FillPortion(1))
            .max_width(380),
        container(contact_list::view_contact_list(session, theme)).width(Length::FillPortion(2)),
    ]
    .spacing(32);

    let content = scrollable(
        container(column![header, body].spacing(32).max_width(1000))
            .padding([32, 24])
            .center_x(Length::Fill),
    )
    .height(Length::Fill);

    // Top-most first: the sync warning can appear while settings are open
    let overlay = if let Some(warning) = &session.warning {
        Some(modals::view_sync_warning(warning, theme))
    } else if let Some(contact) = session.pending_delete_contact() {
        Some(modals::view_delete_confirmation(contact, theme))
    } else {
        session
            .settings
            .as_ref()
            .map(|settings| modals::view_settings(settings, theme))
    };

    let base = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| main_container(theme));

    // Always use stack! so the widget tree keeps its shape (preserves scroll state)
    if let Some(overlay) = overlay {
        stack![
            base,
            opaque(center(overlay).style(move |_| modal_backdrop(theme)))
        ]
        .into()
    } else {
        stack![base, Space::new()].into()
    }
}

fn view_header(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;

    let title = column![
        text("Contact Registry").size(26).color(theme.accent),
        text("Clients and partners").size(14).color(theme.fg_secondary),
    ]
    .spacing(6)
    .align_x(Alignment::Center)
    .width(Length::Fill);

    let settings_button = button(text("⚙").size(22))
        .on_press(Message::OpenSettings)
        .padding(8)
        .style(move |_, status| ghost_button(theme, theme.accent, status));

    let mut header = column![row![
        Space::new().width(40),
        title,
        settings_button
    ]
    .align_y(Alignment::Start)]
    .spacing(8);

    for (blob, err) in state.save_errors() {
        header = header.push(
            text(format!("Could not save {}: {err}", blob.file_name()))
                .size(13)
                .color(theme.danger)
                .width(Length::Fill)
                .align_x(Alignment::Center),
        );
    }

    header.into()
}
