#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use iced::{Element, Subscription, Task, Theme};

use crate::config::AppConfig;
use crate::fonts::FontsConfig;
use crate::state::State;
use crate::store::ArticleStore;
use crate::theme::AppTheme;
use crate::widgets::Widgets;
use crate::widgets::article_params::{
    ArticleParamsConfig, ArticleParamsEvent, ArticleParamsWidget,
};

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Article params widget
    ArticleParams(ArticleParamsEvent),
    // Direct operations
    Window(iced::window::Event),
}

/// Root application state.
pub(crate) struct App {
    pub(crate) theme: AppTheme,
    pub(crate) fonts: FontsConfig,
    pub(crate) store: ArticleStore,
    pub(crate) state: State,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new(config: AppConfig) -> (Self, Task<AppEvent>) {
        let store = ArticleStore::default();
        let article_params = ArticleParamsWidget::new(
            *store.settings(),
            ArticleParamsConfig {
                owner: config.open_state(),
                panel_width: config.sidebar_width(),
                grace_period: config.grace_period(),
            },
        );

        log::info!(
            "article params ready: sidebar {}px, grace {}ms, {:?} open state",
            config.sidebar_width(),
            config.grace_period().as_millis(),
            config.open_state(),
        );

        let app = App {
            theme: AppTheme::default(),
            fonts: FontsConfig::default(),
            store,
            state: State::new(config.window_size()),
            widgets: Widgets { article_params },
        };

        (app, Task::none())
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from("Article params")
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
