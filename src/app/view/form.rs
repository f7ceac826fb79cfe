//! New-contact form card

use crate::app::Message;
use crate::app::ui_components::{accent_strip, card_container, online_badge, primary_button, themed_text_input};
use crate::theme::AppTheme;
use contactbook::core::mask::{self, PHONE_MAX_LEN, TAX_ID_MAX_LEN};
use contactbook::core::session::Session;
use iced::widget::{Space, button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length};

pub fn view_form<'a>(session: &'a Session, theme: &'a AppTheme) -> Element<'a, Message> {
    let draft = &session.draft;

    let mut heading = row![
        text("+").size(20).color(theme.highlight),
        text("New contact").size(18).color(theme.accent),
        Space::new().width(Length::Fill),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    if session.is_online() {
        heading = heading.push(
            container(text("ONLINE").size(10))
                .padding([3, 8])
                .style(move |_| online_badge(theme)),
        );
    }

    let name_input = labeled_input(
        "Full name",
        text_input("e.g. João da Silva", &draft.name)
            .on_input(Message::NameChanged)
            .on_submit(Message::SubmitClicked),
        None,
        theme,
    );

    let tax_id_hint = hint(
        draft.tax_id.len(),
        TAX_ID_MAX_LEN,
        mask::is_complete_tax_id(&draft.tax_id),
    );
    let tax_id_input = labeled_input(
        "CPF",
        text_input("000.000.000-00", &draft.tax_id)
            .on_input(Message::TaxIdChanged)
            .on_submit(Message::SubmitClicked),
        tax_id_hint,
        theme,
    );

    let phone_hint = hint(
        draft.phone.len(),
        PHONE_MAX_LEN,
        mask::is_complete_phone(&draft.phone),
    );
    let phone_input = labeled_input(
        "Phone",
        text_input("(00) 00000-0000", &draft.phone)
            .on_input(Message::PhoneChanged)
            .on_submit(Message::SubmitClicked),
        phone_hint,
        theme,
    );

    let submit_label = if session.submitting {
        "Sending..."
    } else {
        "Register contact"
    };
    let submit = button(
        text(submit_label)
            .size(14)
            .width(Length::Fill)
            .align_x(Alignment::Center),
    )
    .on_press_maybe(session.can_submit().then_some(Message::SubmitClicked))
    .padding([12, 20])
    .width(Length::Fill)
    .style(move |_, status| primary_button(theme, status));

    let body = column![heading, name_input, tax_id_input, phone_input, submit]
        .spacing(18)
        .padding(24);

    container(column![
        container(Space::new().height(4))
            .width(Length::Fill)
            .style(move |_| accent_strip(theme)),
        body,
    ])
    .width(Length::Fill)
    .style(move |_| card_container(theme))
    .into()
}

/// Small progress note under a masked field, e.g. "9/14"
fn hint(len: usize, max: usize, complete: bool) -> Option<String> {
    if len == 0 || complete {
        None
    } else {
        Some(format!("{len}/{max}"))
    }
}

fn labeled_input<'a>(
    label: &'a str,
    input: iced::widget::TextInput<'a, Message>,
    hint: Option<String>,
    theme: &'a AppTheme,
) -> Element<'a, Message> {
    let mut field = column![
        text(label).size(13).color(theme.fg_secondary),
        input
            .padding(10)
            .size(14)
            .style(move |_, status| themed_text_input(theme, status)),
    ]
    .spacing(6);

    if let Some(hint) = hint {
        field = field.push(text(hint).size(11).color(theme.fg_muted));
    }

    field.into()
}
