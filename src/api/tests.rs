//! Tests for the endpoint wrappers

use super::*;
use crate::auth::AuthGateway;
use crate::http::{HttpClient, HttpClientConfig};
use crate::session::MemoryStore;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway_for(server: &MockServer) -> AuthGateway {
    let config = HttpClientConfig::builder().base_url(server.uri()).build();
    AuthGateway::new(
        HttpClient::with_config(config).unwrap(),
        Arc::new(MemoryStore::new()),
    )
}

#[tokio::test]
async fn test_get_post_parses_storage_shape() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/posts/get-post"))
        .and(query_param("postId", "p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Id": "p1",
            "UserId": "u1",
            "Content": "hello",
            "createdAt": "2024-05-01T12:00:00Z",
            "Users": {
                "Username": "alice",
                "Profiles": { "ProfileImageUrl": "https://cdn.example.com/a.png" }
            },
            "PostMedia": [{ "Url": "https://cdn.example.com/m.png", "Type": "image" }],
            "Likes": [{ "id": "l1", "userId": "u2", "postId": "p1" }],
            "Comments": [{
                "id": "c1",
                "userId": "u2",
                "postId": "p1",
                "content": "nice",
                "createdAt": "2024-05-01T13:00:00Z"
            }],
            "PostTags": [{ "InterestTags": { "Id": "t1", "Name": "sports" } }]
        })))
        .mount(&mock_server)
        .await;

    let gateway = gateway_for(&mock_server);
    let detail = PostsApi::new(&gateway).get_post("p1").await.unwrap();

    assert_eq!(detail.id, "p1");
    assert_eq!(detail.author.username, "alice");
    assert_eq!(
        detail.author.profile.unwrap().profile_image_url.as_deref(),
        Some("https://cdn.example.com/a.png")
    );
    assert_eq!(detail.likes.len(), 1);
    assert_eq!(detail.comments[0].content, "nice");
    assert_eq!(detail.tags[0].tag.name, "sports");
}

#[tokio::test]
async fn test_is_liked() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/posts/is-liked"))
        .and(query_param("postId", "p1"))
        .and(query_param("userId", "u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "isLiked": true
        })))
        .mount(&mock_server)
        .await;

    let gateway = gateway_for(&mock_server);
    assert!(PostsApi::new(&gateway).is_liked("p1", "u1").await.unwrap());
}

#[tokio::test]
async fn test_add_friend_pending_rejection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/friend/add-friend"))
        .and(body_json(serde_json::json!({
            "sender": "u1",
            "addressee": "u2",
            "status": "pending",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(false)))
        .mount(&mock_server)
        .await;

    let gateway = gateway_for(&mock_server);
    let sent = FriendsApi::new(&gateway).add_friend("u1", "u2").await.unwrap();
    assert!(!sent);
}

#[tokio::test]
async fn test_profile_header_relation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/Profile-Header"))
        .and(query_param("profileId", "u2"))
        .and(query_param("currentUserId", "u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "username": "bob",
            "profileImage": "https://cdn.example.com/b.png",
            "backgroundImage": null,
            "relation": "pending",
        })))
        .mount(&mock_server)
        .await;

    let gateway = gateway_for(&mock_server);
    let header = UsersApi::new(&gateway)
        .profile_header("u2", "u1")
        .await
        .unwrap();
    assert_eq!(header.username, "bob");
    assert_eq!(header.relation, "pending");
    assert!(header.background_image.is_none());
}

#[tokio::test]
async fn test_mood_roundtrip_over_the_wire() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/wellbeing/mood-submit"))
        .and(body_json(serde_json::json!({ "userId": "u1", "mood": 4 })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/wellbeing/mood"))
        .and(query_param("userId", "u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(4)))
        .mount(&mock_server)
        .await;

    let gateway = gateway_for(&mock_server);
    let api = WellbeingApi::new(&gateway);
    api.submit_mood("u1", Mood::Happy).await.unwrap();
    assert_eq!(api.today_mood("u1").await.unwrap(), Some(Mood::Happy));
}

#[tokio::test]
async fn test_search_posts_by_tag() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("requesterId", "u1"))
        .and(query_param("type", "tag"))
        .and(query_param("tagId", "t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "posts": [{ "id": "p9", "content": "match", "media": [] }],
        })))
        .mount(&mock_server)
        .await;

    let gateway = gateway_for(&mock_server);
    let results = SearchApi::new(&gateway)
        .search("u1", SearchQuery::Tags { tag_id: "t1".into() })
        .await
        .unwrap();
    assert_eq!(results.posts.len(), 1);
    assert!(results.users.is_empty());
}

#[tokio::test]
async fn test_create_post_multipart() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/posts/create-post"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&mock_server)
        .await;

    let gateway = gateway_for(&mock_server);
    PostsApi::new(&gateway)
        .create_post(
            "u1",
            "first post",
            &["t1".to_string()],
            vec![Attachment {
                file_name: "photo.png".to_string(),
                content_type: "image/png".to_string(),
                bytes: vec![0x89, 0x50, 0x4e, 0x47],
            }],
        )
        .await
        .unwrap();

    let request = &mock_server.received_requests().await.unwrap()[0];
    let content_type = request.headers.get("content-type").unwrap();
    assert!(content_type
        .to_str()
        .unwrap()
        .starts_with("multipart/form-data"));
}
