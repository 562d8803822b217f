pub(crate) mod options;
pub(crate) mod settings;
pub(crate) mod style;
pub(crate) mod view;

pub(crate) use options::ArticleOption;
pub(crate) use settings::{ArticleField, ArticleSettings};
pub(crate) use style::ArticleStyle;
