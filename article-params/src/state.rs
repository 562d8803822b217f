use iced::Size;

/// Host-owned window and sidebar state.
#[derive(Debug, Default)]
pub(crate) struct State {
    pub(crate) window_size: Size,
    article_params_open: bool,
}

impl State {
    /// Create state with the given initial window size.
    pub(crate) fn new(window_size: Size) -> Self {
        Self {
            window_size,
            article_params_open: false,
        }
    }

    /// Return the host-owned open flag of the article params sidebar.
    pub(crate) fn article_params_open(&self) -> bool {
        self.article_params_open
    }

    pub(crate) fn set_article_params_open(&mut self, open: bool) {
        self.article_params_open = open;
    }

    /// Update the window size after a resize.
    pub(crate) fn set_window_size(&mut self, size: Size) {
        self.window_size = size;
    }
}
