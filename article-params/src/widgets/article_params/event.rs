use iced::Point;

use crate::article::{ArticleField, ArticleSettings};

/// Intent events handled by the article params widget.
#[derive(Debug, Clone)]
pub(crate) enum ArticleParamsIntent {
    /// The arrow toggle was pressed.
    TogglePressed,
    /// A pointer went down somewhere in the window. `None` means the last
    /// tracked cursor position applies.
    PointerPressed { position: Option<Point> },
    /// The cursor moved inside the window.
    CursorMoved { position: Point },
    /// One draft field was edited.
    FieldChanged(ArticleField),
    /// Commit the draft.
    Submit,
    /// Restore and commit the default settings.
    Reset,
    /// Host-owned open flag changed.
    SyncOpen(bool),
    /// Applied settings changed in the store.
    SyncSettings(ArticleSettings),
    /// The close grace timer of the given generation fired.
    GraceElapsed { generation: u64 },
}

/// Effect events produced by the article params reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ArticleParamsEffect {
    /// Replace the applied settings with the payload.
    Apply(ArticleSettings),
    /// Ask the host to open the sidebar.
    RequestOpen,
    /// Ask the host to close the sidebar.
    RequestClose,
}

/// Article params event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum ArticleParamsEvent {
    /// Intent event reduced by the widget.
    Intent(ArticleParamsIntent),
    /// External effect orchestrated by app-level routing.
    Effect(ArticleParamsEffect),
}
