use std::time::Duration;

use iced::{Point, Rectangle, Size};
use serde::Deserialize;

use crate::article::ArticleSettings;

pub(crate) const ARROW_BUTTON_SIZE: f32 = 48.0;
pub(crate) const ARROW_BUTTON_MARGIN: f32 = 16.0;

/// Who owns the logical open/closed flag of the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OpenStateOwner {
    /// The widget flips its own flag.
    Local,
    /// The widget asks the host and waits for `SyncOpen`.
    Host,
}

/// Construction parameters for the article params widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ArticleParamsConfig {
    pub(crate) owner: OpenStateOwner,
    pub(crate) panel_width: f32,
    pub(crate) grace_period: Duration,
}

/// Read-only snapshot consumed by the view.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ArticleParamsViewModel {
    pub(crate) draft: ArticleSettings,
    pub(crate) is_open: bool,
    pub(crate) is_rendered: bool,
    pub(crate) is_closing: bool,
    pub(crate) is_dirty: bool,
    pub(crate) panel_width: f32,
}

/// What a pointer press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PointerTarget {
    Panel,
    Toggle,
    Outside,
}

/// Window-space layout of the sidebar panel and its toggle.
///
/// Mirrors the view: the panel is pinned to the left edge at full height
/// and the toggle sits `ARROW_BUTTON_MARGIN` to the right of it (or of
/// the window edge when the panel is not mounted).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SidebarGeometry {
    window_size: Size,
    panel_width: f32,
}

impl SidebarGeometry {
    pub(crate) fn new(window_size: Size, panel_width: f32) -> Self {
        Self {
            window_size,
            panel_width,
        }
    }

    pub(crate) fn panel_bounds(&self) -> Rectangle {
        Rectangle::new(
            Point::ORIGIN,
            Size::new(
                self.panel_width.min(self.window_size.width),
                self.window_size.height,
            ),
        )
    }

    pub(crate) fn toggle_bounds(&self, is_rendered: bool) -> Rectangle {
        let left = if is_rendered { self.panel_width } else { 0.0 };

        Rectangle::new(
            Point::new(left + ARROW_BUTTON_MARGIN, ARROW_BUTTON_MARGIN),
            Size::new(ARROW_BUTTON_SIZE, ARROW_BUTTON_SIZE),
        )
    }

    /// Classify a press position. The toggle wins over everything so the
    /// press that flips the sidebar is never also an outside press.
    pub(crate) fn hit_test(
        &self,
        position: Point,
        is_rendered: bool,
    ) -> PointerTarget {
        if self.toggle_bounds(is_rendered).contains(position) {
            return PointerTarget::Toggle;
        }

        if is_rendered && self.panel_bounds().contains(position) {
            return PointerTarget::Panel;
        }

        PointerTarget::Outside
    }
}
