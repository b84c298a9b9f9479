use iced::widget::{button, container, row, text, text_input};
use iced::{Element, Fill, Padding};

use crate::app::Message;
use crate::ui::theme;

/// The search input ID for focus management
pub const SEARCH_INPUT_ID: &str = "tome-search-input";

/// Peak vertical travel of the attention bounce, in pixels.
const MAX_OFFSET: f32 = 8.0;

/// Build the query field and submit button. `bounce_progress` is the
/// attention animation's progress in `0.0..=1.0` while it is playing.
pub fn view(query: &str, bounce_progress: Option<f32>) -> Element<'_, Message> {
    let input = text_input("Search by author, title, or keywords...", query)
        .on_input(Message::QueryChanged)
        .on_submit(Message::Submit)
        .id(SEARCH_INPUT_ID)
        .padding(12)
        .size(18)
        .width(Fill)
        .style(theme::search_input);

    let submit = button(text("Search").size(16))
        .on_press(Message::Submit)
        .padding(Padding::from([12, 20]))
        .style(theme::accent_button);

    let offset = bounce_progress.map(bounce_offset).unwrap_or(0.0);

    // Vertical padding trades top for bottom so the row's total height
    // stays fixed while the bounce plays.
    container(row![input, submit].spacing(8))
        .padding(Padding {
            top: offset,
            bottom: MAX_OFFSET - offset,
            right: 0.0,
            left: 0.0,
        })
        .into()
}

/// Map bounce progress to a decaying series of hops.
fn bounce_offset(progress: f32) -> f32 {
    (progress * std::f32::consts::PI * 3.0).sin().abs() * (1.0 - progress) * MAX_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounce_starts_and_ends_at_rest() {
        assert_eq!(bounce_offset(0.0), 0.0);
        assert!(bounce_offset(1.0).abs() < 1e-4);
    }

    #[test]
    fn bounce_stays_within_travel() {
        for i in 0..=100 {
            let offset = bounce_offset(i as f32 / 100.0);
            assert!((0.0..=MAX_OFFSET).contains(&offset));
        }
    }
}
