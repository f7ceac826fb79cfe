use crate::theme::AppTheme;
use iced::widget::{button, container, text_input};
use iced::{Border, Color, Shadow, Vector};

/// Multiplies the RGB channels of `color`, clamped to 1.0
fn scale(color: Color, factor: f32) -> Color {
    Color {
        r: (color.r * factor).min(1.0),
        g: (color.g * factor).min(1.0),
        b: (color.b * factor).min(1.0),
        ..color
    }
}

fn raised(theme: &AppTheme) -> Shadow {
    Shadow {
        color: theme.shadow_color,
        offset: Vector::new(0.0, 2.0),
        blur_radius: 3.0,
    }
}

pub fn main_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(theme.bg_base.into()),
        text_color: Some(theme.fg_primary),
        ..Default::default()
    }
}

pub fn card_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(theme.bg_surface.into()),
        border: Border {
            color: Color {
                a: 0.3,
                ..theme.highlight
            },
            width: 1.0,
            radius: 12.0.into(),
        },
        shadow: raised(theme),
        ..Default::default()
    }
}

/// Thin accent strip across the top of the form card
pub fn accent_strip(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(
            iced::Gradient::Linear(
                iced::gradient::Linear::new(std::f32::consts::FRAC_PI_2)
                    .add_stop(0.0, theme.accent)
                    .add_stop(1.0, theme.highlight),
            )
            .into(),
        ),
        ..Default::default()
    }
}

/// Circle with the contact's initial
pub fn avatar_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(theme.accent.into()),
        text_color: Some(theme.highlight),
        border: Border {
            radius: 20.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Small pill shown in the form header when an endpoint is configured
pub fn online_badge(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(
            Color {
                a: 0.15,
                ..theme.success
            }
            .into(),
        ),
        text_color: Some(theme.success),
        border: Border {
            radius: 10.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Blue help box in the settings modal
pub fn info_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(Color { a: 0.08, ..theme.info }.into()),
        text_color: Some(theme.info),
        border: Border {
            color: Color { a: 0.2, ..theme.info },
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

pub fn primary_button(theme: &AppTheme, status: button::Status) -> button::Style {
    filled_button(theme, theme.accent, status)
}

pub fn danger_button(theme: &AppTheme, status: button::Status) -> button::Style {
    filled_button(theme, theme.danger, status)
}

fn filled_button(theme: &AppTheme, fill: Color, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(fill.into()),
        text_color: theme.fg_on_accent,
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        shadow: raised(theme),
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(scale(fill, 1.08).into()),
            shadow: Shadow {
                color: theme.shadow_color,
                offset: Vector::new(0.0, 2.5),
                blur_radius: 4.0,
            },
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(scale(fill, 0.95).into()),
            shadow: Shadow {
                color: theme.shadow_color,
                offset: Vector::new(0.0, 0.5),
                blur_radius: 1.5,
            },
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Color { a: 0.5, ..fill }.into()),
            text_color: Color {
                a: 0.5,
                ..theme.fg_on_accent
            },
            shadow: Shadow::default(),
            ..base
        },
        button::Status::Active => base,
    }
}

pub fn secondary_button(theme: &AppTheme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(theme.bg_surface.into()),
        text_color: theme.fg_primary,
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 6.0.into(),
        },
        shadow: raised(theme),
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(theme.bg_hover.into()),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(scale(theme.bg_hover, 0.97).into()),
            shadow: Shadow::default(),
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: theme.fg_muted,
            shadow: Shadow::default(),
            ..base
        },
        button::Status::Active => base,
    }
}

/// Borderless icon button (settings gear, list delete)
pub fn ghost_button(theme: &AppTheme, tint: Color, status: button::Status) -> button::Style {
    let base = button::Style {
        background: None,
        text_color: tint,
        border: Border {
            radius: 16.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };
    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Color { a: 0.1, ..tint }.into()),
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: theme.fg_muted,
            ..base
        },
        button::Status::Active => base,
    }
}

/// Text input styling with theme-aware colors
pub fn themed_text_input(theme: &AppTheme, status: text_input::Status) -> text_input::Style {
    let base = text_input::Style {
        background: theme.bg_elevated.into(),
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 6.0.into(),
        },
        icon: theme.fg_muted,
        placeholder: theme.fg_muted,
        value: theme.fg_primary,
        selection: Color {
            a: 0.3,
            ..theme.accent
        },
    };
    match status {
        text_input::Status::Active => base,
        text_input::Status::Hovered => text_input::Style {
            border: Border {
                color: theme.border_strong,
                ..base.border
            },
            ..base
        },
        text_input::Status::Focused { .. } => text_input::Style {
            border: Border {
                color: theme.accent,
                width: 2.0,
                ..base.border
            },
            icon: theme.accent,
            ..base
        },
        text_input::Status::Disabled => text_input::Style {
            background: Color {
                a: 0.5,
                ..theme.bg_elevated
            }
            .into(),
            value: theme.fg_muted,
            ..base
        },
    }
}

pub fn modal_backdrop(_theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.5).into()),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_clamps() {
        let c = scale(Color::from_rgb(0.9, 0.5, 0.0), 2.0);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 1.0);
        assert_eq!(c.b, 0.0);
    }

    #[test]
    fn test_disabled_primary_is_translucent() {
        let theme = AppTheme::brand();
        let style = primary_button(&theme, button::Status::Disabled);
        assert_eq!(style.text_color.a, 0.5);
    }
}
