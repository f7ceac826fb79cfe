//! Modal dialogs (delete confirmation, settings, sync warning)

use crate::app::Message;
use crate::app::ui_components::{
    card_container, danger_button, info_container, primary_button, secondary_button,
    themed_text_input,
};
use crate::theme::AppTheme;
use contactbook::Contact;
use contactbook::core::session::{SettingsDraft, SyncWarning};
use iced::widget::{button, column, container, row, text, text_input};
use iced::{Alignment, Border, Element};

pub fn view_delete_confirmation<'a>(
    contact: &'a Contact,
    theme: &'a AppTheme,
) -> Element<'a, Message> {
    container(
        column![
            text("🗑").size(32).color(theme.danger),
            text("Confirm deletion").size(20).color(theme.accent),
            text(format!(
                "Are you sure you want to remove \"{}\"? This cannot be undone.",
                contact.name
            ))
            .size(14)
            .color(theme.fg_secondary)
            .align_x(Alignment::Center),
            row![
                button(text("Cancel").size(14))
                    .on_press(Message::CancelDelete)
                    .padding([10, 20])
                    .style(move |_, status| secondary_button(theme, status)),
                button(text("Yes, delete").size(14))
                    .on_press(Message::ConfirmDelete)
                    .padding([10, 24])
                    .style(move |_, status| danger_button(theme, status)),
            ]
            .spacing(12),
        ]
        .spacing(16)
        .padding(30)
        .align_x(Alignment::Center),
    )
    .max_width(420)
    .style(move |_| card_container(theme))
    .into()
}

pub fn view_settings<'a>(settings: &'a SettingsDraft, theme: &'a AppTheme) -> Element<'a, Message> {
    let help = container(
        column![
            text("Setup").size(13),
            text(
                "1. In your spreadsheet open Extensions > Apps Script.\n\
                 2. Add a doPost handler that appends name, cpf and phone.\n\
                 3. Deploy as a web app with access set to \"Anyone\".\n\
                 4. Paste the deployment URL below."
            )
            .size(12),
        ]
        .spacing(6),
    )
    .padding(14)
    .style(move |_| info_container(theme));

    let mut url_field = column![
        text("Web app URL").size(13).color(theme.fg_secondary),
        text_input("https://script.google.com/macros/s/.../exec", &settings.url)
            .on_input(Message::SettingsUrlChanged)
            .on_submit(Message::SaveSettings)
            .padding(10)
            .size(13)
            .style(move |_, status| themed_text_input(theme, status)),
        text("Leave empty to keep contacts on this machine only.")
            .size(11)
            .color(theme.fg_muted),
    ]
    .spacing(6);

    if let Some(error) = &settings.error {
        url_field = url_field.push(text(error).size(12).color(theme.danger));
    }

    container(
        column![
            text("Google Sheets integration").size(20).color(theme.accent),
            help,
            url_field,
            row![
                button(text("Cancel").size(14))
                    .on_press(Message::CancelSettings)
                    .padding([10, 20])
                    .style(move |_, status| secondary_button(theme, status)),
                button(text("Save configuration").size(14))
                    .on_press(Message::SaveSettings)
                    .padding([10, 24])
                    .style(move |_, status| primary_button(theme, status)),
            ]
            .spacing(12),
        ]
        .spacing(20)
        .padding(30),
    )
    .max_width(520)
    .style(move |_| card_container(theme))
    .into()
}

pub fn view_sync_warning<'a>(warning: &'a SyncWarning, theme: &'a AppTheme) -> Element<'a, Message> {
    let mut body = column![
        text("⚠️ Spreadsheet sync failed").size(20).color(theme.danger),
        text(&warning.translation.user_message)
            .size(14)
            .color(theme.fg_primary),
    ]
    .spacing(12);

    for suggestion in &warning.translation.suggestions {
        body = body.push(
            text(format!("• {suggestion}"))
                .size(13)
                .color(theme.fg_secondary),
        );
    }

    body = body.push(text(&warning.detail).size(11).color(theme.fg_muted));
    body = body.push(
        button(text("OK").size(14))
            .on_press(Message::DismissWarning)
            .padding([10, 24])
            .style(move |_, status| primary_button(theme, status)),
    );

    container(body.padding(30))
        .max_width(520)
        .style(move |_| {
            let mut style = card_container(theme);
            style.border = Border {
                color: theme.danger,
                width: 2.0,
                radius: 8.0.into(),
            };
            style
        })
        .into()
}
