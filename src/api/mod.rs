//! Typed endpoint groups
//!
//! Thin wrappers over the authenticated gateway, one module per backend
//! resource. Each call builds the request, routes it through the gateway
//! (which handles the bearer token) and parses the typed response.

pub mod auth;
pub mod friends;
pub mod posts;
pub mod search;
pub mod users;
pub mod wellbeing;

pub use auth::AuthApi;
pub use friends::{FriendInfo, FriendsApi};
pub use posts::{Attachment, PostDetail, PostsApi};
pub use search::{SearchApi, SearchQuery, SearchResults};
pub use users::{Notification, ProfileDetails, ProfileHeader, UsersApi};
pub use wellbeing::{Mood, WellbeingApi};

#[cfg(test)]
mod tests;
