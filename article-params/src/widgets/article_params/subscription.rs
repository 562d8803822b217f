use iced::{Event, Subscription, event, mouse, touch};

use super::event::{ArticleParamsEvent, ArticleParamsIntent};

/// Listen for presses anywhere in the window while the sidebar is open.
///
/// Cursor moves are tracked here as well: widgets such as a dragged
/// scrollbar capture them before the root mouse area sees them.
pub(super) fn subscription(is_open: bool) -> Subscription<ArticleParamsEvent> {
    if !is_open {
        return Subscription::none();
    }

    event::listen_with(pointer_event)
}

fn pointer_event(
    event: Event,
    _status: event::Status,
    _window: iced::window::Id,
) -> Option<ArticleParamsEvent> {
    let intent = match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            ArticleParamsIntent::CursorMoved { position }
        },
        Event::Mouse(mouse::Event::ButtonPressed(_)) => {
            ArticleParamsIntent::PointerPressed { position: None }
        },
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            ArticleParamsIntent::PointerPressed {
                position: Some(position),
            }
        },
        _ => return None,
    };

    Some(ArticleParamsEvent::Intent(intent))
}
