//! Search endpoints

use crate::auth::AuthGateway;
use crate::error::Result;
use crate::http::RequestConfig;
use crate::types::{MediaRef, Tag};
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// What to search for
#[derive(Debug, Clone)]
pub enum SearchQuery {
    /// Users by name fragment
    Users { query: String },
    /// Posts by content fragment
    Posts { query: String },
    /// Posts carrying a specific interest tag
    Tags { tag_id: String },
}

/// A user hit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserHit {
    pub id: String,
    #[serde(default)]
    pub username: String,
}

/// A post hit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostHit {
    pub id: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub media: Vec<MediaRef>,
}

/// Combined search results; only the section matching the query kind is
/// populated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub users: Vec<UserHit>,
    #[serde(default)]
    pub posts: Vec<PostHit>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// Search endpoints
pub struct SearchApi<'a> {
    gateway: &'a AuthGateway,
}

impl<'a> SearchApi<'a> {
    pub fn new(gateway: &'a AuthGateway) -> Self {
        Self { gateway }
    }

    /// Run a search as the given requester
    pub async fn search(&self, requester_id: &str, query: SearchQuery) -> Result<SearchResults> {
        let mut config = RequestConfig::new().query("requesterId", requester_id);
        config = match query {
            SearchQuery::Users { query } => config.query("type", "user").query("query", query),
            SearchQuery::Posts { query } => config.query("type", "post").query("query", query),
            SearchQuery::Tags { tag_id } => config.query("type", "tag").query("tagId", tag_id),
        };

        self.gateway.send_json(Method::GET, "/search", config).await
    }
}
