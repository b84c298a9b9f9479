use crate::catalog::{BookSummary, CatalogError};

/// What the results area should show, derived from the session.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderState<'a> {
    /// A lookup is in flight. Dominates everything else.
    Loading,
    /// The last lookup returned at least one volume.
    HasResults(&'a [BookSummary]),
    /// No results to show. `last_query` distinguishes "never searched"
    /// from "searched and found nothing".
    Empty { last_query: Option<&'a str> },
    /// The last lookup failed. Carries the query so it can be retried.
    Failed {
        query: &'a str,
        error: &'a CatalogError,
    },
}

/// A failed lookup, kept around until a later lookup settles.
#[derive(Debug, Clone)]
struct LookupFailure {
    query: String,
    error: CatalogError,
}

/// Per-window search state: the input text, the last query that completed
/// successfully, the in-flight flag, and the latest result set.
///
/// Lookups are gated here so that at most one is ever outstanding: the
/// `begin_*` methods flip `fetching` and hand back the query to run, and
/// `finish_lookup` applies the outcome and clears the flag. Callers issue a
/// provider call exactly when a `begin_*` method returns a query.
pub struct SearchSession {
    default_query: String,
    query: String,
    last_completed_query: Option<String>,
    fetching: bool,
    results: Option<Vec<BookSummary>>,
    failure: Option<LookupFailure>,
}

impl SearchSession {
    pub fn new(default_query: String) -> Self {
        Self {
            query: default_query.clone(),
            default_query,
            last_completed_query: None,
            fetching: false,
            results: None,
            failure: None,
        }
    }

    /// Current content of the query field.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, text: String) {
        self.query = text;
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    pub fn last_completed_query(&self) -> Option<&str> {
        self.last_completed_query.as_deref()
    }

    /// Start the boot-time lookup with the default query. Called once when
    /// the window comes up.
    pub fn begin_initial_lookup(&mut self) -> String {
        self.fetching = true;
        self.default_query.clone()
    }

    /// Gate a user submission. Returns the query to look up, or `None` when
    /// the submission is dropped: blank query, a lookup already in flight,
    /// or the same query as the last completed one. The guards run in that
    /// order. Comparison against the last query trims both sides, so
    /// trailing whitespace does not sneak past the duplicate check.
    pub fn begin_submit(&mut self, raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        if self.fetching {
            return None;
        }
        if self.last_completed_query.as_deref().map(str::trim) == Some(trimmed) {
            return None;
        }
        self.fetching = true;
        Some(raw.to_string())
    }

    /// Re-issue the query of a failed lookup, subject to the usual guards.
    pub fn begin_retry(&mut self) -> Option<String> {
        let failed = self.failure.as_ref()?.query.clone();
        self.begin_submit(&failed)
    }

    /// Apply a lookup outcome. Results replace the previous set wholesale;
    /// a failure leaves the previous results and last query untouched so
    /// the same query can be submitted again. Either way the in-flight flag
    /// clears, so a failure can never wedge the session.
    pub fn finish_lookup(&mut self, query: String, outcome: Result<Vec<BookSummary>, CatalogError>) {
        match outcome {
            Ok(results) => {
                self.results = Some(results);
                self.last_completed_query = Some(query);
                self.failure = None;
            }
            Err(error) => {
                self.failure = Some(LookupFailure { query, error });
            }
        }
        self.fetching = false;
    }

    /// Derive what to render. Pure; no side effects.
    pub fn render_state(&self) -> RenderState<'_> {
        if self.fetching {
            return RenderState::Loading;
        }
        if let Some(failure) = &self.failure {
            return RenderState::Failed {
                query: &failure.query,
                error: &failure.error,
            };
        }
        match &self.results {
            Some(results) if !results.is_empty() => RenderState::HasResults(results),
            _ => RenderState::Empty {
                last_query: self.last_completed_query.as_deref(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: &str) -> BookSummary {
        BookSummary {
            id: id.to_string(),
            title: Some(format!("Book {id}")),
            authors: None,
            thumbnail_url: None,
            preview_url: None,
            thumbnail: None,
        }
    }

    fn session() -> SearchSession {
        SearchSession::new("React".to_string())
    }

    #[test]
    fn starts_empty_with_no_last_query() {
        let session = session();
        assert_eq!(session.render_state(), RenderState::Empty { last_query: None });
        assert_eq!(session.query(), "React");
    }

    #[test]
    fn initial_lookup_loads_then_settles() {
        let mut session = session();
        let query = session.begin_initial_lookup();
        assert_eq!(query, "React");
        assert_eq!(session.render_state(), RenderState::Loading);

        session.finish_lookup(query, Ok(vec![book("a"), book("b"), book("c")]));
        assert_eq!(session.last_completed_query(), Some("React"));
        match session.render_state() {
            RenderState::HasResults(results) => assert_eq!(results.len(), 3),
            other => panic!("expected results, got {other:?}"),
        }
    }

    #[test]
    fn blank_submissions_are_dropped() {
        let mut session = session();
        assert_eq!(session.begin_submit(""), None);
        assert_eq!(session.begin_submit("   "), None);
        assert_eq!(session.render_state(), RenderState::Empty { last_query: None });
    }

    #[test]
    fn submissions_while_fetching_are_dropped() {
        let mut session = session();
        let query = session.begin_initial_lookup();
        assert_eq!(session.begin_submit("Dune"), None);
        assert_eq!(session.render_state(), RenderState::Loading);

        // Only settling the in-flight lookup unblocks the next one.
        session.finish_lookup(query, Ok(vec![book("a")]));
        assert_eq!(session.begin_submit("Dune"), Some("Dune".to_string()));
    }

    #[test]
    fn duplicate_of_last_completed_query_is_dropped() {
        let mut session = session();
        let query = session.begin_submit("Dune").unwrap();
        session.finish_lookup(query, Ok(vec![book("a")]));

        assert_eq!(session.begin_submit("Dune"), None);
        // Whitespace-only differences are still duplicates.
        assert_eq!(session.begin_submit("  Dune "), None);
        assert_eq!(session.begin_submit("Dune Messiah"), Some("Dune Messiah".to_string()));
    }

    #[test]
    fn at_most_one_lookup_outstanding() {
        let mut session = session();
        let mut issued = 0;
        if session.begin_submit("Dune").is_some() {
            issued += 1;
        }
        for _ in 0..5 {
            if session.begin_submit("Foundation").is_some() {
                issued += 1;
            }
        }
        assert_eq!(issued, 1);
    }

    #[test]
    fn zero_results_renders_empty_with_last_query() {
        let mut session = session();
        let query = session.begin_submit("Dune").unwrap();
        session.finish_lookup(query, Ok(vec![]));

        assert_eq!(
            session.render_state(),
            RenderState::Empty { last_query: Some("Dune") }
        );
    }

    #[test]
    fn failure_clears_fetching_and_renders_failed() {
        let mut session = session();
        let query = session.begin_submit("Dune").unwrap();
        session.finish_lookup(query, Err(CatalogError::Transport("connection refused".into())));

        match session.render_state() {
            RenderState::Failed { query, .. } => assert_eq!(query, "Dune"),
            other => panic!("expected failure, got {other:?}"),
        }
        // The failed query never became the last completed one, so it can
        // be submitted again right away.
        assert_eq!(session.begin_submit("Dune"), Some("Dune".to_string()));
    }

    #[test]
    fn retry_reissues_the_failed_query() {
        let mut session = session();
        let query = session.begin_initial_lookup();
        session.finish_lookup(query, Err(CatalogError::Transport("timed out".into())));

        assert_eq!(session.begin_retry(), Some("React".to_string()));
        assert_eq!(session.render_state(), RenderState::Loading);

        // No failure recorded, nothing to retry.
        let mut fresh = self::session();
        assert_eq!(fresh.begin_retry(), None);
    }

    #[test]
    fn failure_does_not_clobber_previous_results() {
        let mut session = session();
        let query = session.begin_submit("Dune").unwrap();
        session.finish_lookup(query, Ok(vec![book("a"), book("b")]));

        let query = session.begin_submit("Foundation").unwrap();
        session.finish_lookup(query, Err(CatalogError::Decode("truncated body".into())));
        assert_eq!(session.last_completed_query(), Some("Dune"));

        // Once a later lookup succeeds the failure is gone.
        let query = session.begin_submit("Hyperion").unwrap();
        session.finish_lookup(query, Ok(vec![book("c")]));
        match session.render_state() {
            RenderState::HasResults(results) => assert_eq!(results.len(), 1),
            other => panic!("expected results, got {other:?}"),
        }
    }

    #[test]
    fn render_state_is_idempotent() {
        let mut session = session();
        let query = session.begin_submit("Dune").unwrap();
        session.finish_lookup(query, Ok(vec![book("a")]));

        let first = format!("{:?}", session.render_state());
        let second = format!("{:?}", session.render_state());
        assert_eq!(first, second);
    }
}
