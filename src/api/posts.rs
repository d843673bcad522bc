//! Post, feed, like, comment and tag endpoints

use crate::auth::AuthGateway;
use crate::error::{Error, Result};
use crate::http::RequestConfig;
use crate::types::{Comment, FeedPage, PostSummary, Tag};
use chrono::{DateTime, Utc};
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// Post-related endpoints
pub struct PostsApi<'a> {
    gateway: &'a AuthGateway,
}

/// A file to attach to a new post
#[derive(Debug, Clone)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// A post as returned by the detail endpoint.
///
/// The detail route exposes the raw storage shape (PascalCase, nested
/// relations) rather than the flattened feed shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetail {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "UserId")]
    pub user_id: String,
    #[serde(rename = "Content")]
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "Users")]
    pub author: PostAuthor,
    #[serde(rename = "PostMedia", default)]
    pub media: Vec<DetailMedia>,
    #[serde(rename = "Likes", default)]
    pub likes: Vec<LikeRecord>,
    #[serde(rename = "Comments", default)]
    pub comments: Vec<Comment>,
    #[serde(rename = "PostTags", default)]
    pub tags: Vec<DetailTag>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostAuthor {
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Profiles", default)]
    pub profile: Option<AuthorProfile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorProfile {
    #[serde(rename = "ProfileImageUrl", default)]
    pub profile_image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailMedia {
    #[serde(rename = "Url")]
    pub url: String,
    #[serde(rename = "Type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeRecord {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "postId")]
    pub post_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailTag {
    #[serde(rename = "InterestTags")]
    pub tag: DetailTagInner,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailTagInner {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IsLikedResponse {
    is_liked: bool,
}

impl<'a> PostsApi<'a> {
    pub fn new(gateway: &'a AuthGateway) -> Self {
        Self { gateway }
    }

    /// Fetch one page of the viewer's feed.
    ///
    /// `cursor: None` requests the first page; the returned page carries
    /// the cursor for the next one (or `None` at the end).
    pub async fn feed_page(
        &self,
        viewer: &str,
        limit: u32,
        cursor: Option<&str>,
    ) -> Result<FeedPage> {
        self.gateway
            .send_json(
                Method::GET,
                "/posts/feed",
                RequestConfig::new()
                    .query("userId", viewer)
                    .query("limit", limit.to_string())
                    .query_opt("cursor", cursor),
            )
            .await
    }

    /// Fetch a single post with its relations
    pub async fn get_post(&self, post_id: &str) -> Result<PostDetail> {
        self.gateway
            .send_json(
                Method::GET,
                "/posts/get-post",
                RequestConfig::new().query("postId", post_id),
            )
            .await
    }

    /// All posts authored by a user
    pub async fn user_posts(&self, user_id: &str) -> Result<Vec<PostSummary>> {
        self.gateway
            .send_json(
                Method::GET,
                "/posts/user-posts",
                RequestConfig::new().query("userId", user_id),
            )
            .await
    }

    /// Create a post with optional attachments (multipart)
    pub async fn create_post(
        &self,
        user_id: &str,
        content: &str,
        tag_ids: &[String],
        attachments: Vec<Attachment>,
    ) -> Result<()> {
        let mut form = Form::new()
            .text("content", content.to_string())
            .text("userId", user_id.to_string())
            .text("interestTagIds", serde_json::to_string(tag_ids)?);

        for attachment in attachments {
            let part = Part::bytes(attachment.bytes)
                .file_name(attachment.file_name)
                .mime_str(&attachment.content_type)
                .map_err(Error::Network)?;
            form = form.part("files", part);
        }

        self.gateway
            .send(
                Method::POST,
                "/posts/create-post",
                RequestConfig::new().multipart(form),
            )
            .await?;
        Ok(())
    }

    /// Update a post's content and tags
    pub async fn update_post(
        &self,
        post_id: &str,
        user_id: &str,
        content: &str,
        tag_ids: &[String],
    ) -> Result<()> {
        let body = serde_json::json!({
            "postId": post_id,
            "userId": user_id,
            "content": content,
            "interestTagIds": tag_ids,
        });
        self.gateway
            .send(
                Method::PUT,
                "/posts/update-post",
                RequestConfig::new().json(body),
            )
            .await?;
        Ok(())
    }

    /// Delete a post
    pub async fn delete_post(&self, post_id: &str, user_id: &str) -> Result<()> {
        self.gateway
            .send(
                Method::DELETE,
                &format!("/posts/delete-post/{post_id}/{user_id}"),
                RequestConfig::new(),
            )
            .await?;
        Ok(())
    }

    /// Like a post
    pub async fn like(&self, post_id: &str, user_id: &str) -> Result<()> {
        let body = serde_json::json!({ "postId": post_id, "userId": user_id });
        self.gateway
            .send(Method::POST, "/posts/like", RequestConfig::new().json(body))
            .await?;
        Ok(())
    }

    /// Remove a like from a post
    pub async fn unlike(&self, post_id: &str, user_id: &str) -> Result<()> {
        let body = serde_json::json!({ "postId": post_id, "userId": user_id });
        self.gateway
            .send(
                Method::DELETE,
                "/posts/unlike",
                RequestConfig::new().json(body),
            )
            .await?;
        Ok(())
    }

    /// Whether the user has liked the post
    pub async fn is_liked(&self, post_id: &str, user_id: &str) -> Result<bool> {
        let response: IsLikedResponse = self
            .gateway
            .send_json(
                Method::GET,
                "/posts/is-liked",
                RequestConfig::new()
                    .query("postId", post_id)
                    .query("userId", user_id),
            )
            .await?;
        Ok(response.is_liked)
    }

    /// Comments on a post, oldest first
    pub async fn comments(&self, post_id: &str) -> Result<Vec<Comment>> {
        self.gateway
            .send_json(
                Method::GET,
                &format!("/posts/{post_id}/comments"),
                RequestConfig::new(),
            )
            .await
    }

    /// Add a comment to a post
    pub async fn add_comment(&self, post_id: &str, user_id: &str, content: &str) -> Result<()> {
        let body = serde_json::json!({
            "postId": post_id,
            "userId": user_id,
            "content": content,
        });
        self.gateway
            .send(
                Method::POST,
                "/posts/comment",
                RequestConfig::new().json(body),
            )
            .await?;
        Ok(())
    }

    /// All interest tags posts can be labelled with
    pub async fn all_tags(&self) -> Result<Vec<Tag>> {
        self.gateway
            .send_json(Method::GET, "/posts/get-all-tags", RequestConfig::new())
            .await
    }
}
