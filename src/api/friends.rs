//! Friendship endpoints

use crate::auth::AuthGateway;
use crate::error::Result;
use crate::http::RequestConfig;
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// Friendship endpoints
pub struct FriendsApi<'a> {
    gateway: &'a AuthGateway,
}

/// A friend or pending requester as listed by the friend endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendInfo {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub profile_image_url: String,
}

impl<'a> FriendsApi<'a> {
    pub fn new(gateway: &'a AuthGateway) -> Self {
        Self { gateway }
    }

    /// Accepted friends of the given user
    pub async fn friend_list(&self, current_user_id: &str) -> Result<Vec<FriendInfo>> {
        self.gateway
            .send_json(
                Method::GET,
                "/friend/Friend-List",
                RequestConfig::new().query("currentUserId", current_user_id),
            )
            .await
    }

    /// Pending incoming friend requests
    pub async fn friend_requests(&self, current_user_id: &str) -> Result<Vec<FriendInfo>> {
        self.gateway
            .send_json(
                Method::GET,
                "/friend/Friend-Request",
                RequestConfig::new().query("currentUserId", current_user_id),
            )
            .await
    }

    /// Send a friend request. Returns false when a request between the two
    /// users is already pending.
    pub async fn add_friend(&self, sender: &str, addressee: &str) -> Result<bool> {
        let body = serde_json::json!({
            "sender": sender,
            "addressee": addressee,
            "status": "pending",
        });
        self.gateway
            .send_json(
                Method::POST,
                "/friend/add-friend",
                RequestConfig::new().json(body),
            )
            .await
    }

    /// Approve a pending friend request from `sender`
    pub async fn approve(&self, sender: &str, addressee: &str) -> Result<()> {
        self.relation_action("/friend/approve", sender, addressee).await
    }

    /// Reject a pending friend request from `sender`
    pub async fn reject(&self, sender: &str, addressee: &str) -> Result<()> {
        self.relation_action("/friend/reject", sender, addressee).await
    }

    /// Remove an existing friendship
    pub async fn unfriend(&self, sender: &str, addressee: &str) -> Result<()> {
        self.relation_action("/friend/unfriend", sender, addressee).await
    }

    async fn relation_action(&self, path: &str, sender: &str, addressee: &str) -> Result<()> {
        let body = serde_json::json!({ "sender": sender, "addressee": addressee });
        self.gateway
            .send(Method::POST, path, RequestConfig::new().json(body))
            .await?;
        Ok(())
    }
}
