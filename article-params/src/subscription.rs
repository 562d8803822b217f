use iced::{Subscription, window};

use crate::app::{App, AppEvent};

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));

    // Outside-press listener exists only while the sidebar is open.
    let article_params_subs = app
        .widgets
        .article_params
        .subscription()
        .map(AppEvent::ArticleParams);

    Subscription::batch([win_subs, article_params_subs])
}
