mod app;
mod catalog;
mod config;
mod session;
mod ui;

use app::State;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = config::load();
    let window_size = iced::Size::new(config.window.width, config.window.height);

    tracing::info!("Starting Tome book search");

    iced::application(
        move || State::new(config.clone()),
        State::update,
        State::view,
    )
    .title(State::title)
    .subscription(State::subscription)
    .theme(State::theme)
    .window_size(window_size)
    .run()
}
