use std::time::{Duration, Instant};

use iced::widget::{column, container, image, text};
use iced::{Element, Fill, Padding, Subscription, Task, Theme};

use crate::catalog::{self, BookSummary, CatalogError};
use crate::config::Config;
use crate::session::{RenderState, SearchSession};
use crate::ui::{book_list, search_input, status, theme};

/// How long the input's attention bounce plays.
const BOUNCE_DURATION: Duration = Duration::from_millis(600);
/// Frame cadence while the bounce is playing.
const BOUNCE_FRAME: Duration = Duration::from_millis(16);

pub struct State {
    session: SearchSession,
    /// Image handles for the current result set, index-aligned with the
    /// session's results. Rebuilt wholesale when a lookup settles.
    thumbnails: Vec<Option<image::Handle>>,
    /// When the attention bounce started; `None` while it is not playing.
    bounce_started: Option<Instant>,
    now: Instant,
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    Submit,
    LookupFinished {
        query: String,
        outcome: Result<Vec<BookSummary>, CatalogError>,
    },
    OpenPreview(usize),
    SearchAgain,
    Retry,
    BounceTick(Instant),
}

impl State {
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let mut session = SearchSession::new(config.search.default_query);
        let query = session.begin_initial_lookup();

        let state = Self {
            session,
            thumbnails: Vec::new(),
            bounce_started: None,
            now: Instant::now(),
        };
        (state, lookup(query))
    }

    pub fn title(&self) -> String {
        String::from("Tome")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryChanged(query) => {
                self.session.set_query(query);
                Task::none()
            }
            Message::Submit => {
                let raw = self.session.query().to_owned();
                match self.session.begin_submit(&raw) {
                    Some(query) => lookup(query),
                    None => Task::none(),
                }
            }
            Message::LookupFinished { query, outcome } => {
                if let Err(e) = &outcome {
                    tracing::error!(query = %query, error = %e, "Catalog lookup failed");
                }
                self.session.finish_lookup(query, outcome);
                self.thumbnails = match self.session.render_state() {
                    RenderState::HasResults(books) => books.iter().map(thumbnail_handle).collect(),
                    _ => Vec::new(),
                };
                Task::none()
            }
            Message::OpenPreview(index) => {
                if let RenderState::HasResults(books) = self.session.render_state() {
                    if let Some(url) = books.get(index).and_then(|book| book.preview_url.as_deref())
                    {
                        if let Err(e) = webbrowser::open(url) {
                            tracing::error!(url, error = %e, "Failed to open preview link");
                        }
                    }
                }
                Task::none()
            }
            Message::SearchAgain => {
                if self.session.last_completed_query().is_some() {
                    self.session.clear_query();
                }
                // One-shot: a second trigger while the bounce is still
                // playing must not restart it.
                if self.bounce_started.is_none() {
                    self.now = Instant::now();
                    self.bounce_started = Some(self.now);
                }
                iced::widget::operation::focus(search_input::SEARCH_INPUT_ID)
            }
            Message::Retry => match self.session.begin_retry() {
                Some(query) => lookup(query),
                None => Task::none(),
            },
            Message::BounceTick(now) => {
                self.now = now;
                if let Some(started) = self.bounce_started {
                    if now.duration_since(started) >= BOUNCE_DURATION {
                        self.bounce_started = None;
                    }
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let heading = text("Book Search").size(28).style(theme::heading);
        let input = search_input::view(self.session.query(), self.bounce_progress());

        let body: Element<'_, Message> = match self.session.render_state() {
            RenderState::Loading => status::loading(),
            RenderState::HasResults(books) => book_list::view(books, &self.thumbnails),
            RenderState::Empty { last_query } => status::empty(last_query),
            RenderState::Failed { query, error } => status::failed(query, error),
        };

        let content = column![heading, input, body]
            .spacing(16)
            .padding(Padding::new(20.0));

        container(content)
            .width(Fill)
            .height(Fill)
            .style(theme::main_container)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.bounce_started.is_some() {
            iced::time::every(BOUNCE_FRAME).map(Message::BounceTick)
        } else {
            Subscription::none()
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Progress of the attention bounce in `0.0..=1.0`, or `None` while it
    /// is not playing.
    fn bounce_progress(&self) -> Option<f32> {
        let started = self.bounce_started?;
        let elapsed = self.now.duration_since(started).as_secs_f32();
        Some((elapsed / BOUNCE_DURATION.as_secs_f32()).clamp(0.0, 1.0))
    }
}

fn lookup(query: String) -> Task<Message> {
    tracing::info!(query = %query, "Issuing catalog lookup");
    Task::perform(
        async move {
            let outcome = catalog::client::search(&query).await;
            (query, outcome)
        },
        |(query, outcome)| Message::LookupFinished { query, outcome },
    )
}

fn thumbnail_handle(book: &BookSummary) -> Option<image::Handle> {
    book.thumbnail
        .as_ref()
        .map(|bytes| image::Handle::from_bytes(bytes.as_ref().clone()))
}
