//! Paginated feed loading
//!
//! [`FeedLoader`] exposes a continuously-growing, lazily-extended view over
//! the remote feed: pages are fetched strictly in cursor order and appended
//! to one flat post list that is never reordered or deduplicated.

mod loader;
mod types;

pub use loader::{FeedLoader, DEFAULT_PAGE_SIZE};
pub use types::{FeedPhase, LoadOutcome};
