use iced::widget::{button, container};
use iced::{Border, Color, Shadow, Vector};

use crate::theme::IcedColorPalette;

const PANEL_CLOSING_ALPHA: f32 = 0.55;
const PANEL_SHADOW_BLUR: f32 = 24.0;
const ACTION_BUTTON_RADIUS: f32 = 4.0;
const ARROW_BUTTON_RADIUS: f32 = 24.0;

/// Visual variants for the form action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ActionButtonVariant {
    Clear,
    Apply,
}

pub(crate) fn panel_style(
    palette: IcedColorPalette,
    is_closing: bool,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    move |_theme: &iced::Theme| {
        let mut background = palette.background;
        let mut text_color = palette.foreground;
        if is_closing {
            background.a = PANEL_CLOSING_ALPHA;
            text_color.a = PANEL_CLOSING_ALPHA;
        }

        container::Style {
            background: Some(background.into()),
            text_color: Some(text_color),
            shadow: Shadow {
                color: Color {
                    a: 0.2,
                    ..Color::BLACK
                },
                offset: Vector::new(4.0, 0.0),
                blur_radius: PANEL_SHADOW_BLUR,
            },
            ..Default::default()
        }
    }
}

pub(crate) fn separator_style(
    palette: IcedColorPalette,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    move |_theme: &iced::Theme| container::Style {
        background: Some(palette.border.into()),
        ..Default::default()
    }
}

pub(crate) fn action_button_style(
    palette: IcedColorPalette,
    variant: ActionButtonVariant,
) -> impl Fn(&iced::Theme, button::Status) -> button::Style + 'static {
    move |_theme, status| {
        let (mut background, text_color, border_color) = match variant {
            ActionButtonVariant::Clear => {
                (Color::TRANSPARENT, palette.foreground, palette.foreground)
            },
            ActionButtonVariant::Apply => {
                (palette.accent, palette.accent_foreground, palette.accent)
            },
        };

        if matches!(status, button::Status::Hovered) {
            background = match variant {
                ActionButtonVariant::Clear => palette.overlay,
                ActionButtonVariant::Apply => {
                    let mut color = palette.accent;
                    color.a = 0.85;
                    color
                },
            };
        }

        button::Style {
            background: Some(background.into()),
            text_color,
            border: Border {
                width: 1.0,
                color: border_color,
                radius: ACTION_BUTTON_RADIUS.into(),
            },
            ..Default::default()
        }
    }
}

pub(crate) fn arrow_button_style(
    palette: IcedColorPalette,
    is_open: bool,
) -> impl Fn(&iced::Theme, button::Status) -> button::Style + 'static {
    move |_theme, status| {
        let background = if is_open {
            palette.accent
        } else if matches!(status, button::Status::Hovered) {
            palette.overlay
        } else {
            palette.background
        };

        button::Style {
            background: Some(background.into()),
            text_color: palette.foreground,
            border: Border {
                width: 1.0,
                color: palette.border,
                radius: ARROW_BUTTON_RADIUS.into(),
            },
            ..Default::default()
        }
    }
}

pub(crate) fn field_title_color(palette: &IcedColorPalette) -> Color {
    palette.dim_foreground
}
