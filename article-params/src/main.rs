mod app;
mod article;
mod config;
mod fonts;
mod icons;
mod routers;
mod state;
mod store;
mod style;
mod theme;
mod widgets;

use env_logger::Env;
use iced::{Size, window};

use crate::app::App;
use crate::config::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config = config::load_initial_config();
    let window_size = config.window_size();

    iced::application(move || App::new(config.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .antialiasing(true)
        .window(window::Settings {
            size: window_size,
            min_size: Some(Size {
                width: MIN_WINDOW_WIDTH,
                height: MIN_WINDOW_HEIGHT,
            }),
            ..window::Settings::default()
        })
        .resizable(true)
        .subscription(App::subscription)
        .run()
}
