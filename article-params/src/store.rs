use crate::article::style::{StyleVariable, style_variables};
use crate::article::{ArticleSettings, ArticleStyle};

/// Application-wide store of the settings applied to the article preview.
///
/// Settings are only ever replaced as a whole; the resolved style is kept
/// in sync on every replacement.
#[derive(Debug, Clone)]
pub(crate) struct ArticleStore {
    settings: ArticleSettings,
    style: ArticleStyle,
}

impl ArticleStore {
    pub(crate) fn new(settings: ArticleSettings) -> Self {
        Self {
            settings,
            style: ArticleStyle::from_settings(&settings),
        }
    }

    /// Return the currently applied settings.
    pub(crate) fn settings(&self) -> &ArticleSettings {
        &self.settings
    }

    /// Return presentation values resolved from the applied settings.
    pub(crate) fn style(&self) -> &ArticleStyle {
        &self.style
    }

    /// Return presentation variables for the applied settings.
    pub(crate) fn variables(&self) -> [StyleVariable; 5] {
        style_variables(&self.settings)
    }

    /// Replace the applied settings. Returns `true` if anything changed.
    pub(crate) fn apply(&mut self, settings: ArticleSettings) -> bool {
        if self.settings == settings {
            return false;
        }

        self.settings = settings;
        self.style = ArticleStyle::from_settings(&settings);
        true
    }
}

impl Default for ArticleStore {
    fn default() -> Self {
        Self::new(ArticleSettings::DEFAULT)
    }
}
