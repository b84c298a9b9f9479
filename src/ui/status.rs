use iced::widget::{button, column, container, text};
use iced::{Element, Fill, Padding};

use crate::app::Message;
use crate::catalog::CatalogError;
use crate::ui::theme;

/// Static loading indicator shown while a lookup is in flight.
pub fn loading<'a>() -> Element<'a, Message> {
    container(text("Loading...").size(18).style(theme::result_subtitle))
        .width(Fill)
        .padding(24)
        .center_x(Fill)
        .into()
}

/// Prompt shown when there is nothing to list. The wording depends on
/// whether a search has completed before; the button is the "search again"
/// affordance that refocuses (and clears) the input.
pub fn empty(last_query: Option<&str>) -> Element<'_, Message> {
    let message = match last_query {
        Some(query) => format!("No books found for \"{query}\""),
        None => "Nothing to see here yet.".to_string(),
    };
    let label = if last_query.is_some() {
        "Search again?"
    } else {
        "Let's find a book!"
    };

    let prompt = column![
        text(message).size(18),
        button(text(label).size(16))
            .on_press(Message::SearchAgain)
            .padding(Padding::from([10, 16]))
            .style(theme::accent_button),
    ]
    .spacing(12)
    .align_x(iced::Alignment::Center);

    container(prompt).width(Fill).padding(24).center_x(Fill).into()
}

/// Failure notice with a retry affordance, distinct from the empty prompt.
pub fn failed<'a>(query: &'a str, error: &'a CatalogError) -> Element<'a, Message> {
    let prompt = column![
        text(format!("Search for \"{query}\" failed")).size(18),
        text(error.to_string()).size(12).style(theme::result_subtitle),
        button(text("Try again").size(16))
            .on_press(Message::Retry)
            .padding(Padding::from([10, 16]))
            .style(theme::accent_button),
    ]
    .spacing(12)
    .align_x(iced::Alignment::Center);

    container(prompt).width(Fill).padding(24).center_x(Fill).into()
}
