use iced::widget::{column, container, scrollable, text};
use iced::{Element, Length, Theme, alignment};

use super::style::ArticleStyle;

const ARTICLE_PADDING: f32 = 48.0;
const ARTICLE_PARAGRAPH_SPACING: f32 = 24.0;
const ARTICLE_TITLE_SCALE: f32 = 2.0;

const ARTICLE_TITLE: &str = "Portrait of a sunflower field";
const ARTICLE_PARAGRAPHS: [&str; 3] = [
    "The field starts where the road gives up. Rows of sunflowers lean \
     east in the morning, heavy heads turned toward the light, and by \
     noon the whole slope has quietly rotated to follow it.",
    "Farmers here speak about the crop the way sailors speak about \
     weather: with respect, some suspicion, and a long memory of the \
     seasons that went wrong. A dry August can halve the harvest; a wet \
     one brings mould into the seed heads.",
    "Still, every July the hillside turns yellow from edge to edge, and \
     for a few weeks the village is full of strangers with cameras who \
     came for one photograph and stayed for the light.",
];

/// Props for the article preview.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ArticlePreviewProps<'a> {
    pub(crate) style: &'a ArticleStyle,
}

/// Render the sample article using the applied presentation values.
pub(crate) fn view<'a, Message: 'a>(
    props: ArticlePreviewProps<'a>,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let style = *props.style;

    let title = text(ARTICLE_TITLE)
        .font(style.font)
        .size(style.font_size * ARTICLE_TITLE_SCALE)
        .color(style.font_color);

    let mut body = column![title].spacing(ARTICLE_PARAGRAPH_SPACING);
    for paragraph in ARTICLE_PARAGRAPHS {
        body = body.push(
            text(paragraph)
                .font(style.font)
                .size(style.font_size)
                .color(style.font_color),
        );
    }

    let article = container(body)
        .max_width(style.content_width)
        .padding(ARTICLE_PADDING);

    let centered = container(article)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let scroll = scrollable(centered)
        .width(Length::Fill)
        .height(Length::Fill);

    container(scroll)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| iced::widget::container::Style {
            background: Some(style.background.into()),
            text_color: Some(style.font_color),
            ..Default::default()
        })
        .into()
}
