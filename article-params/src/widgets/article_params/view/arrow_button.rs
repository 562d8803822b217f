use iced::widget::{button, container, svg};
use iced::{Element, Length, alignment};

use crate::icons::{ARROW, ARROW_BACK};
use crate::style::arrow_button_style;
use crate::theme::ThemeProps;
use crate::widgets::article_params::model::ARROW_BUTTON_SIZE;

const ARROW_ICON_SIZE: f32 = 20.0;

/// UI events emitted by the sidebar toggle.
#[derive(Debug, Clone)]
pub(crate) enum ArrowButtonEvent {
    Pressed,
}

/// Props for rendering the sidebar toggle.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ArrowButtonProps<'a> {
    pub(crate) is_open: bool,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the round toggle that opens and closes the sidebar.
pub(crate) fn view<'a>(
    props: ArrowButtonProps<'a>,
) -> Element<'a, ArrowButtonEvent> {
    let palette = *props.theme.theme.iced_palette();
    let icon = if props.is_open { ARROW_BACK } else { ARROW };

    let icon = svg::Svg::new(svg::Handle::from_memory(icon))
        .width(Length::Fixed(ARROW_ICON_SIZE))
        .height(Length::Fixed(ARROW_ICON_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(palette.foreground),
        });

    let icon_container = container(icon)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(icon_container)
        .on_press(ArrowButtonEvent::Pressed)
        .padding(0.0)
        .width(Length::Fixed(ARROW_BUTTON_SIZE))
        .height(Length::Fixed(ARROW_BUTTON_SIZE))
        .style(arrow_button_style(palette, props.is_open))
        .into()
}
