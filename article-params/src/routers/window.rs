use iced::{Size, Task, window};

use crate::app::{App, AppEvent};

/// Route window events that affect app-level geometry.
pub(crate) fn route(app: &mut App, event: window::Event) -> Task<AppEvent> {
    match event {
        window::Event::Opened { size, .. } | window::Event::Resized(size) => {
            handle_resize(app, size)
        },
        _ => Task::none(),
    }
}

/// Keep the window size used for sidebar hit-testing in sync.
pub(crate) fn handle_resize(app: &mut App, size: Size) -> Task<AppEvent> {
    log::debug!("window resized to {}x{}", size.width, size.height);
    app.state.set_window_size(size);
    Task::none()
}
