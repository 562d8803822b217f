pub(crate) mod arrow_button;
pub(crate) mod params_form;

use iced::widget::{Row, container};
use iced::{Element, Length, Theme, alignment};

use self::arrow_button::ArrowButtonProps;
use self::params_form::{ParamsFormEvent, ParamsFormProps};
use super::event::ArticleParamsIntent;
use super::model::{ARROW_BUTTON_MARGIN, ArticleParamsViewModel};
use crate::fonts::FontsConfig;
use crate::theme::ThemeProps;

/// Props for the sidebar layer drawn over the article preview.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ArticleParamsProps<'a> {
    pub(crate) vm: ArticleParamsViewModel,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the mounted panel (if any) followed by the toggle.
pub(crate) fn view<'a>(
    props: ArticleParamsProps<'a>,
) -> Element<'a, ArticleParamsIntent, Theme, iced::Renderer> {
    let mut layer = Row::new().height(Length::Fill);

    if props.vm.is_rendered {
        let panel = params_form::view(ParamsFormProps {
            vm: props.vm,
            theme: props.theme,
            fonts: props.fonts,
        })
        .map(map_form_event);
        layer = layer.push(panel);
    }

    let toggle = arrow_button::view(ArrowButtonProps {
        is_open: props.vm.is_open,
        theme: props.theme,
    })
    .map(|_| ArticleParamsIntent::TogglePressed);

    let toggle = container(toggle)
        .padding(ARROW_BUTTON_MARGIN)
        .align_y(alignment::Vertical::Top);

    layer.push(toggle).into()
}

fn map_form_event(event: ParamsFormEvent) -> ArticleParamsIntent {
    match event {
        ParamsFormEvent::FieldChanged(field) => {
            ArticleParamsIntent::FieldChanged(field)
        },
        ParamsFormEvent::ResetPressed => ArticleParamsIntent::Reset,
        ParamsFormEvent::ApplyPressed => ArticleParamsIntent::Submit,
    }
}
