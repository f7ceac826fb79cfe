//! Search bar and contact list

use crate::app::Message;
use crate::app::ui_components::{avatar_container, card_container, ghost_button, themed_text_input};
use crate::theme::AppTheme;
use contactbook::Contact;
use contactbook::core::session::Session;
use iced::widget::{Space, button, column, container, keyed_column, row, text, text_input};
use iced::{Alignment, Element, Length};

pub fn view_contact_list<'a>(session: &'a Session, theme: &'a AppTheme) -> Element<'a, Message> {
    let search_bar = container(
        row![
            text("🔍").size(16).color(theme.accent),
            text_input("Search by name or CPF...", &session.search)
                .on_input(Message::SearchChanged)
                .padding(10)
                .size(14)
                .style(move |_, status| themed_text_input(theme, status)),
            text(session.record_count_label())
                .size(12)
                .color(theme.highlight),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .padding(16)
    .style(move |_| card_container(theme));

    let list: Element<'a, Message> = if session.contacts.is_empty() {
        empty_state(
            "No contacts yet",
            "Use the form to add new entries.",
            theme,
        )
    } else {
        let visible = session.visible_contacts();
        if visible.is_empty() {
            empty_state("", "No contacts match this search.", theme)
        } else {
            keyed_column(
                visible
                    .into_iter()
                    .map(|contact| (contact.id, view_contact_row(contact, theme))),
            )
            .spacing(12)
            .into()
        }
    };

    column![search_bar, list].spacing(24).into()
}

fn view_contact_row<'a>(contact: &'a Contact, theme: &'a AppTheme) -> Element<'a, Message> {
    let avatar = container(text(contact.initial()).size(18))
        .width(40)
        .height(40)
        .center_x(40)
        .center_y(40)
        .style(move |_| avatar_container(theme));

    let details = column![
        text(&contact.name).size(16).color(theme.accent),
        row![
            text(format!("CPF {}", contact.tax_id))
                .size(13)
                .color(theme.fg_secondary),
            text(format!("☎ {}", contact.phone))
                .size(13)
                .color(theme.fg_secondary),
        ]
        .spacing(16),
    ]
    .spacing(4);

    let delete = button(text("🗑").size(16))
        .on_press(Message::DeleteRequested(contact.id))
        .padding(8)
        .style(move |_, status| ghost_button(theme, theme.danger, status));

    container(
        row![avatar, details, Space::new().width(Length::Fill), delete]
            .spacing(16)
            .align_y(Alignment::Center),
    )
    .padding(18)
    .width(Length::Fill)
    .style(move |_| card_container(theme))
    .into()
}

fn empty_state<'a>(title: &'a str, body: &'a str, theme: &'a AppTheme) -> Element<'a, Message> {
    let mut content = column![].spacing(6).align_x(Alignment::Center);
    if !title.is_empty() {
        content = content.push(text(title).size(16).color(theme.accent));
    }
    content = content.push(text(body).size(14).color(theme.fg_secondary));

    container(content)
        .padding(48)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}
