use super::options::{
    ArticleOption, BackgroundColor, ContentWidth, FontColor, FontFamily,
    FontSize,
};

/// Display settings applied to the article preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ArticleSettings {
    pub(crate) font_family: FontFamily,
    pub(crate) font_size: FontSize,
    pub(crate) font_color: FontColor,
    pub(crate) background_color: BackgroundColor,
    pub(crate) content_width: ContentWidth,
}

impl ArticleSettings {
    /// Settings used at start-up and restored by a reset.
    pub(crate) const DEFAULT: Self = Self {
        font_family: FontFamily::OpenSans,
        font_size: FontSize::Small,
        font_color: FontColor::Black,
        background_color: BackgroundColor::White,
        content_width: ContentWidth::Medium,
    };

    /// Return a copy with one field replaced.
    pub(crate) fn with_field(mut self, field: ArticleField) -> Self {
        self.set_field(field);
        self
    }

    /// Replace the field addressed by `field`.
    pub(crate) fn set_field(&mut self, field: ArticleField) {
        match field {
            ArticleField::FontFamily(value) => self.font_family = value,
            ArticleField::FontSize(value) => self.font_size = value,
            ArticleField::FontColor(value) => self.font_color = value,
            ArticleField::BackgroundColor(value) => {
                self.background_color = value
            },
            ArticleField::ContentWidth(value) => self.content_width = value,
        }
    }

    /// Return the style class hints of the selected options.
    pub(crate) fn class_names(&self) -> Vec<&'static str> {
        [
            self.font_family.class_name(),
            self.font_size.class_name(),
            self.font_color.class_name(),
            self.background_color.class_name(),
            self.content_width.class_name(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

impl Default for ArticleSettings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A single settings edit: the field key together with a value from that
/// field's option set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ArticleField {
    FontFamily(FontFamily),
    FontSize(FontSize),
    FontColor(FontColor),
    BackgroundColor(BackgroundColor),
    ContentWidth(ContentWidth),
}

impl ArticleField {
    /// Stable key naming the edited field.
    pub(crate) fn key(self) -> &'static str {
        match self {
            Self::FontFamily(_) => "font_family",
            Self::FontSize(_) => "font_size",
            Self::FontColor(_) => "font_color",
            Self::BackgroundColor(_) => "background_color",
            Self::ContentWidth(_) => "content_width",
        }
    }
}
