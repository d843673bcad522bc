//! Feed loader implementation

use super::types::{FeedPhase, LoadOutcome};
use crate::api::PostsApi;
use crate::auth::AuthGateway;
use crate::error::Result;
use crate::types::PostSummary;
use futures::stream::{self, Stream};
use std::sync::Arc;
use tracing::debug;

/// Default number of posts requested per page
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Incrementally loads the viewer's feed, one cursor-delimited page at a
/// time, into a single flat post list.
///
/// Calls are strictly sequential: `load_more` takes `&mut self`, so at most
/// one page request is ever in flight, and the next page's cursor is only
/// known once the previous page has resolved.
///
/// Cancellation safety: loader state is mutated only after the network
/// future has resolved, inside the same call. Dropping an in-flight
/// `load_more` future leaves the loader exactly as it was, so tearing down
/// a consumer cannot leave half-applied pages behind.
pub struct FeedLoader {
    gateway: Arc<AuthGateway>,
    viewer: String,
    page_size: u32,
    posts: Vec<PostSummary>,
    cursor: Option<String>,
    pages_fetched: usize,
    exhausted: bool,
    phase: FeedPhase,
}

impl FeedLoader {
    /// Create a loader for the given viewer identity
    pub fn new(gateway: Arc<AuthGateway>, viewer: impl Into<String>) -> Self {
        Self::with_page_size(gateway, viewer, DEFAULT_PAGE_SIZE)
    }

    /// Create a loader with a custom page size
    pub fn with_page_size(
        gateway: Arc<AuthGateway>,
        viewer: impl Into<String>,
        page_size: u32,
    ) -> Self {
        Self {
            gateway,
            viewer: viewer.into(),
            page_size,
            posts: Vec::new(),
            cursor: None,
            pages_fetched: 0,
            exhausted: false,
            phase: FeedPhase::Idle,
        }
    }

    /// Fetch the next page and append it.
    ///
    /// A no-op returning [`LoadOutcome::End`] once the feed reported a null
    /// cursor: no further network call is ever issued. On error the
    /// accumulated posts and cursor are untouched and the phase reverts, so
    /// the caller may retry the same page.
    pub async fn load_more(&mut self) -> Result<LoadOutcome> {
        if self.exhausted {
            return Ok(LoadOutcome::End);
        }

        let prior = self.phase;
        self.phase = if self.pages_fetched == 0 {
            FeedPhase::LoadingInitial
        } else {
            FeedPhase::LoadingMore
        };

        let result = PostsApi::new(&self.gateway)
            .feed_page(&self.viewer, self.page_size, self.cursor.as_deref())
            .await;

        let page = match result {
            Ok(page) => page,
            Err(e) => {
                self.phase = prior;
                return Err(e);
            }
        };

        let count = page.posts.len();
        self.pages_fetched += 1;
        self.posts.extend(page.posts);

        match page.next_cursor {
            Some(cursor) => {
                debug!(page = self.pages_fetched, count, "feed page appended");
                self.cursor = Some(cursor);
                self.phase = FeedPhase::Ready;
            }
            None => {
                debug!(page = self.pages_fetched, count, "feed exhausted");
                self.cursor = None;
                self.exhausted = true;
                self.phase = FeedPhase::End;
            }
        }

        Ok(LoadOutcome::Page { count })
    }

    /// The flattened, order-preserving concatenation of all fetched pages
    pub fn posts(&self) -> &[PostSummary] {
        &self.posts
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> FeedPhase {
        self.phase
    }

    /// True while the first page is in flight
    pub fn is_loading_initial(&self) -> bool {
        self.phase == FeedPhase::LoadingInitial
    }

    /// True while a follow-up page is in flight
    pub fn is_loading_more(&self) -> bool {
        self.phase == FeedPhase::LoadingMore
    }

    /// True once a page reported no continuation cursor
    pub fn is_reaching_end(&self) -> bool {
        self.exhausted
    }

    /// Number of pages fetched so far
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// The cursor the next page would be requested with
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// The viewer identity this loader fetches for
    pub fn viewer(&self) -> &str {
        &self.viewer
    }

    /// Page size used for every request
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Consume the loader into a stream of page batches.
    ///
    /// Each item is the `Vec<PostSummary>` contributed by one page, yielded
    /// in fetch order; the stream ends after the page with a null cursor.
    pub fn into_pages(self) -> impl Stream<Item = Result<Vec<PostSummary>>> {
        stream::try_unfold(self, |mut loader| async move {
            if loader.is_reaching_end() {
                return Ok(None);
            }
            match loader.load_more().await? {
                LoadOutcome::End => Ok(None),
                LoadOutcome::Page { count } => {
                    let start = loader.posts.len() - count;
                    let batch = loader.posts[start..].to_vec();
                    Ok(Some((batch, loader)))
                }
            }
        })
    }
}

impl std::fmt::Debug for FeedLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedLoader")
            .field("viewer", &self.viewer)
            .field("page_size", &self.page_size)
            .field("posts", &self.posts.len())
            .field("cursor", &self.cursor)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}
