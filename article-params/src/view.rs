use iced::widget::{Stack, mouse_area};
use iced::{Element, Length, Theme};

use super::{App, AppEvent};
use crate::article::view::{self as article_view, ArticlePreviewProps};
use crate::theme::ThemeProps;
use crate::widgets::article_params::view::{
    self as article_params_view, ArticleParamsProps,
};
use crate::widgets::article_params::{ArticleParamsEvent, ArticleParamsIntent};

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme_props = ThemeProps::new(&app.theme);

    let preview: Element<'_, AppEvent, Theme, iced::Renderer> =
        article_view::view(ArticlePreviewProps {
            style: app.store.style(),
        });

    let sidebar = article_params_view::view(ArticleParamsProps {
        vm: app.widgets.article_params.vm(),
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(|intent| AppEvent::ArticleParams(ArticleParamsEvent::Intent(intent)));

    let layers = Stack::new()
        .push(preview)
        .push(sidebar)
        .width(Length::Fill)
        .height(Length::Fill);

    mouse_area(layers)
        .on_move(|position| {
            AppEvent::ArticleParams(ArticleParamsEvent::Intent(
                ArticleParamsIntent::CursorMoved { position },
            ))
        })
        .into()
}
