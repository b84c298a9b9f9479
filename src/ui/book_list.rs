use iced::widget::{column, container, image, mouse_area, row, scrollable, text, Column};
use iced::{Element, Fill, Padding};

use crate::app::Message;
use crate::catalog::BookSummary;
use crate::ui::theme;

/// Cover thumbnail display size
const COVER_WIDTH: f32 = 48.0;
const COVER_HEIGHT: f32 = 64.0;

/// Build the result list: one preview card per volume. `thumbnails` is
/// index-aligned with `books`.
pub fn view<'a>(
    books: &'a [BookSummary],
    thumbnails: &'a [Option<image::Handle>],
) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = books
        .iter()
        .enumerate()
        .map(|(i, book)| card(i, book, thumbnails.get(i).and_then(Option::as_ref)))
        .collect();

    let list = Column::from_vec(cards).spacing(8);

    scrollable(list).height(Fill).into()
}

fn card<'a>(
    index: usize,
    book: &'a BookSummary,
    thumbnail: Option<&image::Handle>,
) -> Element<'a, Message> {
    let title = text(book.title.as_deref().unwrap_or("Untitled"))
        .size(16)
        .style(theme::result_name);

    let mut details = column![title].spacing(2);
    if let Some(authors) = &book.authors {
        details = details.push(
            text(authors.join(", "))
                .size(12)
                .style(theme::result_subtitle),
        );
    }
    if book.preview_url.is_some() {
        details = details.push(text("Preview available").size(12).style(theme::result_link));
    }

    let content: Element<'a, Message> = match thumbnail {
        Some(handle) => {
            let cover = image(handle.clone()).width(COVER_WIDTH).height(COVER_HEIGHT);
            row![cover, details]
                .spacing(12)
                .align_y(iced::Alignment::Center)
                .into()
        }
        None => details.into(),
    };

    let card = container(content)
        .padding(Padding::from([10, 14]))
        .width(Fill)
        .style(theme::result_row);

    mouse_area(card).on_press(Message::OpenPreview(index)).into()
}
