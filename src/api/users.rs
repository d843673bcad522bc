//! User profile and notification endpoints

use crate::auth::AuthGateway;
use crate::error::{Error, Result};
use crate::http::RequestConfig;
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// User profile and notification endpoints
pub struct UsersApi<'a> {
    gateway: &'a AuthGateway,
}

/// Editable profile fields
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDetails {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub course_name: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

/// The summary block at the top of a profile page, including how the
/// viewer relates to the profile's owner
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileHeader {
    pub username: String,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub background_image: Option<String>,
    /// Viewer's relation to the owner ("self", "friend", "pending", "none")
    #[serde(default)]
    pub relation: String,
}

/// An entry in the user's notification list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
}

impl<'a> UsersApi<'a> {
    pub fn new(gateway: &'a AuthGateway) -> Self {
        Self { gateway }
    }

    /// URL of the user's profile image
    pub async fn profile_image(&self, current_user_id: &str) -> Result<String> {
        let response = self
            .gateway
            .send(
                Method::GET,
                "/user/Profile-Image",
                RequestConfig::new().query("currentUserId", current_user_id),
            )
            .await?;
        let url = response.text().await.map_err(Error::Network)?;
        Ok(url.trim_matches('"').to_string())
    }

    /// Profile header for the given profile, as seen by the viewer
    pub async fn profile_header(
        &self,
        profile_id: &str,
        current_user_id: &str,
    ) -> Result<ProfileHeader> {
        self.gateway
            .send_json(
                Method::GET,
                "/user/Profile-Header",
                RequestConfig::new()
                    .query("profileId", profile_id)
                    .query("currentUserId", current_user_id),
            )
            .await
    }

    /// Profile details for the given profile id
    pub async fn profile_details(&self, profile_id: &str) -> Result<ProfileDetails> {
        self.gateway
            .send_json(
                Method::GET,
                "/user/Profile-Details",
                RequestConfig::new().query("profileId", profile_id),
            )
            .await
    }

    /// Update the user's profile
    pub async fn update_profile(&self, user_id: &str, details: &ProfileDetails) -> Result<()> {
        let body = serde_json::json!({
            "userId": user_id,
            "username": details.username,
            "bio": details.bio,
            "age": details.age,
            "courseName": details.course_name,
            "interests": details.interests,
        });
        self.gateway
            .send(
                Method::POST,
                "/user/update-profile",
                RequestConfig::new().json(body),
            )
            .await?;
        Ok(())
    }

    /// The user's notifications, newest first
    pub async fn notifications(&self, current_user_id: &str) -> Result<Vec<Notification>> {
        self.gateway
            .send_json(
                Method::GET,
                "/user/Notifications",
                RequestConfig::new().query("currentUserId", current_user_id),
            )
            .await
    }

    /// Mark a notification as read. Returns the target URL the
    /// notification points at, when the server provides one.
    pub async fn mark_notification_read(&self, notification_id: &str) -> Result<Option<String>> {
        let body = serde_json::json!({ "notificationId": notification_id });
        let response = self
            .gateway
            .send(
                Method::POST,
                "/user/markAsRead",
                RequestConfig::new().json(body),
            )
            .await?;
        let target = response.text().await.map_err(Error::Network)?;
        let target = target.trim_matches('"').to_string();
        Ok(if target.is_empty() { None } else { Some(target) })
    }
}
