use serde::{Deserialize, Serialize};

/// Observable controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchPhase {
    /// No pending work.
    Idle,
    /// Timer armed, no request issued yet.
    Debouncing,
    /// Requests in flight for the current session.
    Fetching,
}

/// One generation of search work: the monotonically increasing token that
/// decides whether a completion is still allowed to touch display state.
#[derive(Debug, Clone)]
pub struct SearchSession {
    generation: u64,
    query: String,
    needle: String,
}

impl SearchSession {
    pub fn new(generation: u64, query: impl Into<String>) -> Self {
        let query = query.into();
        let needle = query.to_lowercase();
        Self {
            generation,
            query,
            needle,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Case-insensitive substring match against a breed name.
    pub fn matches(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.needle)
    }
}
