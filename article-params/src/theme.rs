use iced::theme::Palette;
use iced::{Color, Theme};

/// Raw hex palette used for the application chrome.
#[derive(Debug, Clone)]
pub(crate) struct ColorPalette {
    pub(crate) foreground: String,
    pub(crate) background: String,
    pub(crate) dim_foreground: String,
    pub(crate) overlay: String,
    pub(crate) border: String,
    pub(crate) accent: String,
    pub(crate) accent_foreground: String,
    pub(crate) red: String,
    pub(crate) green: String,
    pub(crate) yellow: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            foreground: String::from("#000000"),
            background: String::from("#FFFFFF"),
            dim_foreground: String::from("#6B7280"),
            overlay: String::from("#F2F2F2"),
            border: String::from("#C4C4C4"),
            accent: String::from("#FFC802"),
            accent_foreground: String::from("#000000"),
            red: String::from("#E06C75"),
            green: String::from("#98C379"),
            yellow: String::from("#E5C07B"),
        }
    }
}

/// Chrome palette resolved into iced colors.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IcedColorPalette {
    pub(crate) foreground: Color,
    pub(crate) background: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) overlay: Color,
    pub(crate) border: Color,
    pub(crate) accent: Color,
    pub(crate) accent_foreground: Color,
    pub(crate) red: Color,
    pub(crate) green: Color,
    pub(crate) yellow: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        Self {
            foreground: parse_hex_color(&p.foreground),
            background: parse_hex_color(&p.background),
            dim_foreground: parse_hex_color(&p.dim_foreground),
            overlay: parse_hex_color(&p.overlay),
            border: parse_hex_color(&p.border),
            accent: parse_hex_color(&p.accent),
            accent_foreground: parse_hex_color(&p.accent_foreground),
            red: parse_hex_color(&p.red),
            green: parse_hex_color(&p.green),
            yellow: parse_hex_color(&p.yellow),
        }
    }
}

/// Global application theme.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::from_palette(String::from("default"), &ColorPalette::default())
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.accent,
            success: palette.green,
            danger: palette.red,
            warning: palette.yellow,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    pub(crate) fn from_palette(id: String, palette: &ColorPalette) -> Self {
        Self {
            id,
            iced_palette: IcedColorPalette::from(palette),
        }
    }

    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(self)
    }
}

/// Theme props passed from the app down to widget views.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }
}

fn parse_hex_color(value: &str) -> Color {
    value.parse::<Color>().unwrap_or_else(|_| {
        log::warn!("invalid theme color {value:?}, using black");
        Color::BLACK
    })
}
