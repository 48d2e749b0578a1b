//! Fetch session: one logical query cycle per view
//!
//! A view triggers a new fetch whenever any of its reactive inputs
//! (file, query, range) changes. Older in-flight requests are not
//! cancelled; instead only the most recently started cycle may apply
//! its response. The session tracks that with a monotonically
//! increasing generation counter compared at apply time, independent
//! of any particular concurrency primitive.

use crate::client::FetchOutcome;

/// Per-view fetch state for one report kind
///
/// Single producer, single consumer: one dispatch and one render per
/// logical query cycle, so no locking is needed inside the session.
#[derive(Debug, Default)]
pub struct ReportSession<T> {
    generation: u64,
    loading: bool,
    data: T,
}

impl<T: Default> ReportSession<T> {
    /// Create a new, empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new query cycle
    ///
    /// Sets the loading flag and returns the cycle's ticket. Starting
    /// a cycle supersedes every earlier one: their responses become
    /// stale and will be discarded at apply time.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    /// Apply a fetch outcome for the given ticket
    ///
    /// Returns false (and changes nothing) when the ticket is stale.
    /// For the current ticket the loading flag always clears, on every
    /// outcome: data on `Fetched`, the empty default on `Skipped` and
    /// `Failed`.
    pub fn apply(&mut self, ticket: u64, outcome: FetchOutcome<T>) -> bool {
        if ticket != self.generation {
            log::debug!(
                "discarding stale report response (ticket {}, generation {})",
                ticket,
                self.generation
            );
            return false;
        }
        self.loading = false;
        self.data = outcome.into_data();
        true
    }

    /// Reset to the empty state without starting a cycle
    ///
    /// The no-file path: the loading flag is never raised, and any
    /// in-flight cycle is invalidated.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.loading = false;
        self.data = T::default();
    }

    /// Most recently applied report data
    pub fn data(&self) -> &T {
        &self.data
    }

    /// True while the current cycle's response is outstanding
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Current cycle ticket
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_lifecycle() {
        let mut session: ReportSession<Vec<String>> = ReportSession::new();
        assert!(!session.is_loading());

        let ticket = session.begin();
        assert!(session.is_loading());

        let applied = session.apply(ticket, FetchOutcome::Fetched(vec!["a".to_string()]));
        assert!(applied);
        assert!(!session.is_loading());
        assert_eq!(session.data(), &vec!["a".to_string()]);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut session: ReportSession<Vec<String>> = ReportSession::new();

        let old_ticket = session.begin();
        let new_ticket = session.begin();

        // The older cycle resolves late; its data must not overwrite
        // the newer cycle's pending state.
        let applied = session.apply(old_ticket, FetchOutcome::Fetched(vec!["stale".to_string()]));
        assert!(!applied);
        assert!(session.is_loading());
        assert!(session.data().is_empty());

        let applied = session.apply(new_ticket, FetchOutcome::Fetched(vec!["fresh".to_string()]));
        assert!(applied);
        assert!(!session.is_loading());
        assert_eq!(session.data(), &vec!["fresh".to_string()]);
    }

    #[test]
    fn test_failure_clears_loading_and_data() {
        let mut session: ReportSession<Vec<String>> = ReportSession::new();
        session.begin();
        session.apply(
            session.generation(),
            FetchOutcome::Fetched(vec!["old".to_string()]),
        );

        let ticket = session.begin();
        let applied = session.apply(
            ticket,
            FetchOutcome::Failed(ledgerview_engine::EngineError::Engine {
                message: "boom".to_string(),
            }),
        );
        assert!(applied);
        assert!(!session.is_loading());
        assert!(session.data().is_empty());
    }

    #[test]
    fn test_clear_never_raises_loading() {
        let mut session: ReportSession<Vec<String>> = ReportSession::new();
        session.clear();
        assert!(!session.is_loading());
        assert!(session.data().is_empty());
    }

    #[test]
    fn test_clear_invalidates_in_flight_cycle() {
        let mut session: ReportSession<Vec<String>> = ReportSession::new();
        let ticket = session.begin();

        session.clear();
        let applied = session.apply(ticket, FetchOutcome::Fetched(vec!["late".to_string()]));
        assert!(!applied);
        assert!(session.data().is_empty());
    }
}
