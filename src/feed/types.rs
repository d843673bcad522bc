//! Feed loader state types

/// Where the loader is in its lifecycle.
///
/// `Idle` → `LoadingInitial` → `Ready` ⇄ `LoadingMore` → … → `End`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedPhase {
    /// No data fetched yet
    #[default]
    Idle,
    /// First page in flight
    LoadingInitial,
    /// At least one page loaded, more available
    Ready,
    /// A follow-up page in flight
    LoadingMore,
    /// A page reported no continuation cursor; the feed is complete
    End,
}

/// Result of a single `load_more` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A page was fetched and appended
    Page {
        /// Number of posts the page contributed
        count: usize,
    },
    /// The loader was already at the end; no network call was made
    End,
}

impl LoadOutcome {
    /// Posts contributed by this call
    pub fn count(&self) -> usize {
        match self {
            Self::Page { count } => *count,
            Self::End => 0,
        }
    }
}
