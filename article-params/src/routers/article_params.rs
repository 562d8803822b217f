use iced::Task;

use crate::app::{App, AppEvent};
use crate::article::ArticleSettings;
use crate::widgets::article_params::{
    ArticleParamsCtx, ArticleParamsEffect, ArticleParamsEvent,
    ArticleParamsIntent,
};

/// Route an article params event to the widget or to app-level effects.
pub(crate) fn route(
    app: &mut App,
    event: ArticleParamsEvent,
) -> Task<AppEvent> {
    match event {
        ArticleParamsEvent::Intent(intent) => route_intent(app, intent),
        ArticleParamsEvent::Effect(effect) => route_effect(app, effect),
    }
}

/// Route an intent through the widget reducer.
pub(crate) fn route_intent(
    app: &mut App,
    intent: ArticleParamsIntent,
) -> Task<AppEvent> {
    let ctx = ArticleParamsCtx {
        window_size: app.state.window_size,
    };

    app.widgets
        .article_params
        .reduce(intent, &ctx)
        .map(AppEvent::ArticleParams)
}

/// Route an article params effect to the store or the host open flag.
pub(crate) fn route_effect(
    app: &mut App,
    effect: ArticleParamsEffect,
) -> Task<AppEvent> {
    match effect {
        ArticleParamsEffect::Apply(settings) => apply_settings(app, settings),
        ArticleParamsEffect::RequestOpen => set_open(app, true),
        ArticleParamsEffect::RequestClose => set_open(app, false),
    }
}

/// Replace the store settings and resync the widget draft.
fn apply_settings(app: &mut App, settings: ArticleSettings) -> Task<AppEvent> {
    if app.store.apply(settings) {
        let variables = app
            .store
            .variables()
            .iter()
            .map(|variable| format!("{}={}", variable.name, variable.value))
            .collect::<Vec<_>>()
            .join(" ");
        log::info!("article settings applied: {variables}");
        log::debug!(
            "article option classes: {}",
            app.store.settings().class_names().join(" ")
        );
    } else {
        log::debug!("article settings unchanged");
    }

    let settings = *app.store.settings();
    route_intent(app, ArticleParamsIntent::SyncSettings(settings))
}

/// Update the host-owned open flag and push it into the widget.
fn set_open(app: &mut App, open: bool) -> Task<AppEvent> {
    if app.state.article_params_open() == open {
        return Task::none();
    }

    app.state.set_article_params_open(open);
    route_intent(app, ArticleParamsIntent::SyncOpen(open))
}
