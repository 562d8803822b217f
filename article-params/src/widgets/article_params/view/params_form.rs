use iced::widget::{
    Column, Space, button, column, container, pick_list, radio, row,
    scrollable, text,
};
use iced::{Element, Length, Theme, alignment};

use crate::article::options::FontSize;
use crate::article::{ArticleField, ArticleOption};
use crate::fonts::FontsConfig;
use crate::style::{
    ActionButtonVariant, action_button_style, field_title_color, panel_style,
    separator_style,
};
use crate::theme::{IcedColorPalette, ThemeProps};
use crate::widgets::article_params::model::ArticleParamsViewModel;

const FORM_TITLE: &str = "SET PARAMETERS";
const FORM_PADDING: f32 = 48.0;
const FORM_SECTION_SPACING: f32 = 40.0;
const FIELD_SPACING: f32 = 12.0;
const FIELD_TITLE_SCALE: f32 = 0.85;
const RADIO_SPACING: f32 = 24.0;
const SEPARATOR_HEIGHT: f32 = 1.0;
const ACTIONS_SPACING: f32 = 16.0;
const ACTION_BUTTON_HEIGHT: f32 = 48.0;
const ACTION_BUTTON_PADDING_X: f32 = 24.0;
const DIRTY_HINT_SCALE: f32 = 0.85;

/// UI events emitted by the settings form.
#[derive(Debug, Clone)]
pub(crate) enum ParamsFormEvent {
    FieldChanged(ArticleField),
    ResetPressed,
    ApplyPressed,
}

/// Props for the sidebar panel with the settings form.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ParamsFormProps<'a> {
    pub(crate) vm: ArticleParamsViewModel,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the sidebar panel: title, five fields and the action row.
pub(crate) fn view<'a>(
    props: ParamsFormProps<'a>,
) -> Element<'a, ParamsFormEvent, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();
    let draft = props.vm.draft;

    let title = text(FORM_TITLE)
        .font(props.fonts.heading.font_type)
        .size(props.fonts.heading.size);

    let form: Column<'a, ParamsFormEvent, Theme, iced::Renderer> = column![
        title,
        select_field(
            "Font",
            draft.font_family,
            ArticleField::FontFamily,
            &props,
        ),
        font_size_field(draft.font_size, &props),
        select_field(
            "Font color",
            draft.font_color,
            ArticleField::FontColor,
            &props,
        ),
        separator(palette),
        select_field(
            "Background color",
            draft.background_color,
            ArticleField::BackgroundColor,
            &props,
        ),
        select_field(
            "Content width",
            draft.content_width,
            ArticleField::ContentWidth,
            &props,
        ),
        actions(&props),
    ]
    .spacing(FORM_SECTION_SPACING)
    .width(Length::Fill);

    let content = scrollable(container(form).padding(FORM_PADDING))
        .width(Length::Fill)
        .height(Length::Fill);

    container(content)
        .width(Length::Fixed(props.vm.panel_width))
        .height(Length::Fill)
        .style(panel_style(palette, props.vm.is_closing))
        .into()
}

fn field_title<'a>(
    title: &'a str,
    props: &ParamsFormProps<'a>,
) -> Element<'a, ParamsFormEvent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette();

    text(title)
        .font(props.fonts.ui.font_type)
        .size(props.fonts.ui.size * FIELD_TITLE_SCALE)
        .color(field_title_color(palette))
        .into()
}

fn select_field<'a, T>(
    title: &'a str,
    selected: T,
    to_field: fn(T) -> ArticleField,
    props: &ParamsFormProps<'a>,
) -> Element<'a, ParamsFormEvent, Theme, iced::Renderer>
where
    T: ArticleOption,
{
    let select = pick_list(T::ALL, Some(selected), move |value| {
        ParamsFormEvent::FieldChanged(to_field(value))
    })
    .font(props.fonts.ui.font_type)
    .text_size(props.fonts.ui.size)
    .width(Length::Fill);

    column![field_title(title, props), select]
        .spacing(FIELD_SPACING)
        .into()
}

fn font_size_field<'a>(
    selected: FontSize,
    props: &ParamsFormProps<'a>,
) -> Element<'a, ParamsFormEvent, Theme, iced::Renderer> {
    let options = FontSize::ALL.iter().fold(
        row![].spacing(RADIO_SPACING),
        |options, &size| {
            options.push(
                radio(size.label(), size, Some(selected), |value| {
                    ParamsFormEvent::FieldChanged(ArticleField::FontSize(value))
                })
                .font(props.fonts.ui.font_type)
                .text_size(props.fonts.ui.size),
            )
        },
    );

    column![field_title("Font size", props), options]
        .spacing(FIELD_SPACING)
        .into()
}

fn separator<'a>(
    palette: IcedColorPalette,
) -> Element<'a, ParamsFormEvent, Theme, iced::Renderer> {
    container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(SEPARATOR_HEIGHT))
        .style(separator_style(palette))
        .into()
}

fn actions<'a>(
    props: &ParamsFormProps<'a>,
) -> Element<'a, ParamsFormEvent, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();

    let buttons = row![
        action_button(
            "Reset",
            ParamsFormEvent::ResetPressed,
            ActionButtonVariant::Clear,
            palette,
            props.fonts,
        ),
        action_button(
            "Apply",
            ParamsFormEvent::ApplyPressed,
            ActionButtonVariant::Apply,
            palette,
            props.fonts,
        ),
    ]
    .spacing(ACTIONS_SPACING);

    let hint = if props.vm.is_dirty { "Unapplied changes" } else { "" };
    let hint = text(hint)
        .font(props.fonts.ui.font_type)
        .size(props.fonts.ui.size * DIRTY_HINT_SCALE)
        .color(field_title_color(&palette));

    column![hint, buttons]
        .spacing(FIELD_SPACING)
        .align_x(alignment::Horizontal::Right)
        .width(Length::Fill)
        .into()
}

fn action_button<'a>(
    label: &'a str,
    on_press: ParamsFormEvent,
    variant: ActionButtonVariant,
    palette: IcedColorPalette,
    fonts: &'a FontsConfig,
) -> Element<'a, ParamsFormEvent, Theme, iced::Renderer> {
    let label = text(label)
        .font(fonts.ui.font_type)
        .size(fonts.ui.size)
        .center()
        .width(Length::Fill)
        .height(Length::Fill);

    button(label)
        .on_press(on_press)
        .padding([0.0, ACTION_BUTTON_PADDING_X])
        .width(Length::Fill)
        .height(Length::Fixed(ACTION_BUTTON_HEIGHT))
        .style(action_button_style(palette, variant))
        .into()
}

