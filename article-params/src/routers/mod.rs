use iced::Task;

use crate::app::{App, AppEvent};

pub(crate) mod article_params;
pub(crate) mod window;

pub(crate) fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        // Article params widget
        AppEvent::ArticleParams(event) => article_params::route(app, event),
        // Direct operations
        AppEvent::Window(event) => window::route(app, event),
    }
}
