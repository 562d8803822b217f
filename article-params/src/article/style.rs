use iced::{Color, Font};

use super::options::ArticleOption;
use super::settings::ArticleSettings;

const FALLBACK_FONT_SIZE: f32 = 18.0;
const FALLBACK_CONTENT_WIDTH: f32 = 700.0;

/// A named presentation variable derived from the applied settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StyleVariable {
    pub(crate) name: &'static str,
    pub(crate) value: &'static str,
}

/// Resolved presentation values consumed by the article preview.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ArticleStyle {
    pub(crate) font: Font,
    pub(crate) font_size: f32,
    pub(crate) font_color: Color,
    pub(crate) background: Color,
    pub(crate) content_width: f32,
}

impl ArticleStyle {
    pub(crate) fn from_settings(settings: &ArticleSettings) -> Self {
        Self {
            font: Font::with_name(settings.font_family.value()),
            font_size: parse_px(settings.font_size.value())
                .unwrap_or(FALLBACK_FONT_SIZE),
            font_color: parse_color(settings.font_color.value())
                .unwrap_or(Color::BLACK),
            background: parse_color(settings.background_color.value())
                .unwrap_or(Color::WHITE),
            content_width: parse_px(settings.content_width.value())
                .unwrap_or(FALLBACK_CONTENT_WIDTH),
        }
    }
}

/// Presentation variables in the order the preview stylesheet names them.
pub(crate) fn style_variables(
    settings: &ArticleSettings,
) -> [StyleVariable; 5] {
    [
        StyleVariable {
            name: "--font-family",
            value: settings.font_family.value(),
        },
        StyleVariable {
            name: "--font-size",
            value: settings.font_size.value(),
        },
        StyleVariable {
            name: "--font-color",
            value: settings.font_color.value(),
        },
        StyleVariable {
            name: "--container-width",
            value: settings.content_width.value(),
        },
        StyleVariable {
            name: "--bg-color",
            value: settings.background_color.value(),
        },
    ]
}

fn parse_color(value: &str) -> Option<Color> {
    value.parse::<Color>().ok()
}

/// Parse a CSS pixel length such as `18px`.
fn parse_px(value: &str) -> Option<f32> {
    value.trim().strip_suffix("px")?.trim().parse().ok()
}
