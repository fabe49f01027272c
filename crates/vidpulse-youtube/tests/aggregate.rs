//! Resolver and aggregator behaviour against a mocked `YouTube` API.

use serde_json::json;
use vidpulse_core::NO_COMMENTS_TEXT;
use vidpulse_youtube::{aggregate_category, resolve_categories, YoutubeClient, YoutubeError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> YoutubeClient {
    YoutubeClient::with_base_url("test-key", "US", 5, "vidpulse-test/0.1", base_url)
        .expect("client construction should not fail")
}

fn video(id: &str, title: &str, views: &str) -> serde_json::Value {
    json!({
        "id": id,
        "snippet": { "title": title },
        "statistics": { "viewCount": views }
    })
}

fn comment_thread(likes: u64, text: &str) -> serde_json::Value {
    json!({
        "items": [{
            "snippet": {
                "topLevelComment": {
                    "snippet": { "likeCount": likes, "textDisplay": text }
                }
            }
        }]
    })
}

async fn mount_chart(server: &MockServer, category_id: &str, items: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("videoCategoryId", category_id))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(&json!({ "etag": "e", "items": items })),
        )
        .mount(server)
        .await;
}

async fn mount_comment(server: &MockServer, video_id: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .and(query_param("videoId", video_id))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(server)
        .await;
}

// ---------------------------------------------------------------------------
// aggregate_category
// ---------------------------------------------------------------------------

#[tokio::test]
async fn aggregate_returns_one_record_per_video_in_chart_order() {
    let server = MockServer::start().await;
    mount_chart(
        &server,
        "10",
        json!([
            video("a", "First", "300"),
            video("b", "Second", "200"),
            video("c", "Third", "100")
        ]),
    )
    .await;
    mount_comment(&server, "a", comment_thread(5, "nice")).await;
    mount_comment(&server, "b", comment_thread(7, "great")).await;
    mount_comment(&server, "c", comment_thread(0, "meh")).await;

    let client = test_client(&server.uri());
    let records = aggregate_category(&client, "10")
        .await
        .expect("aggregation should succeed");

    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
    assert_eq!(records[1].title, "Second");
    assert_eq!(records[1].view_count, 200);
    assert_eq!(records[1].top_comment_like_count, 7);
    assert_eq!(records[1].top_comment_text, "great");
    assert_eq!(records[1].url, "https://www.youtube.com/watch?v=b");
}

#[tokio::test]
async fn aggregate_merges_title_views_and_comment() {
    let server = MockServer::start().await;
    mount_chart(&server, "1", json!([video("test_id", "Test Video", "1000")])).await;
    mount_comment(&server, "test_id", comment_thread(10, "Test comment")).await;

    let client = test_client(&server.uri());
    let records = aggregate_category(&client, "1").await.expect("ok");

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.id, "test_id");
    assert_eq!(record.title, "Test Video");
    assert_eq!(record.view_count, 1000);
    assert_eq!(record.top_comment_like_count, 10);
    assert_eq!(record.top_comment_text, "Test comment");
    assert_eq!(record.url, "https://www.youtube.com/watch?v=test_id");
}

#[tokio::test]
async fn aggregate_uses_defaults_when_video_has_no_comments() {
    let server = MockServer::start().await;
    mount_chart(&server, "1", json!([video("test_id", "Test Video", "1000")])).await;
    mount_comment(&server, "test_id", json!({ "items": [] })).await;

    let client = test_client(&server.uri());
    let records = aggregate_category(&client, "1").await.expect("ok");

    assert_eq!(records[0].top_comment_like_count, 0);
    assert_eq!(records[0].top_comment_text, NO_COMMENTS_TEXT);
}

#[tokio::test]
async fn aggregate_uses_defaults_when_comments_disabled() {
    let server = MockServer::start().await;
    mount_chart(&server, "1", json!([video("quiet", "Quiet Video", "42")])).await;

    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .respond_with(ResponseTemplate::new(403).set_body_json(&json!({
            "error": {
                "code": 403,
                "message": "comments disabled",
                "errors": [{ "reason": "commentsDisabled" }]
            }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let records = aggregate_category(&client, "1").await.expect("ok");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].top_comment_like_count, 0);
    assert_eq!(records[0].top_comment_text, NO_COMMENTS_TEXT);
}

#[tokio::test]
async fn aggregate_empty_chart_makes_no_comment_calls() {
    let server = MockServer::start().await;
    mount_chart(&server, "1", json!([])).await;

    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let records = aggregate_category(&client, "1").await.expect("ok");
    assert!(records.is_empty());
}

#[tokio::test]
async fn aggregate_fails_when_chart_request_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = aggregate_category(&client, "1").await;

    assert!(
        matches!(result, Err(YoutubeError::UnexpectedStatus { status: 500, .. })),
        "expected UnexpectedStatus, got: {result:?}"
    );
}

#[tokio::test]
async fn aggregate_fails_when_a_comment_request_fails() {
    let server = MockServer::start().await;
    mount_chart(&server, "1", json!([video("v1", "One", "1")])).await;

    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    assert!(aggregate_category(&client, "1").await.is_err());
}

// ---------------------------------------------------------------------------
// resolve_categories
// ---------------------------------------------------------------------------

#[tokio::test]
async fn resolve_keeps_only_categories_with_a_chart() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videoCategories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "etag": "cats",
            "items": [
                { "id": "1", "snippet": { "title": "Film & Animation" } },
                { "id": "18", "snippet": { "title": "Short Movies" } },
                { "id": "10", "snippet": { "title": "Music" } }
            ]
        })))
        .mount(&server)
        .await;

    mount_chart(&server, "1", json!([])).await;
    mount_chart(&server, "10", json!([])).await;
    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("videoCategoryId", "18"))
        .respond_with(ResponseTemplate::new(404).set_body_json(&json!({
            "error": { "code": 404, "message": "chart not found" }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let map = resolve_categories(&client).await.expect("resolution should succeed");

    let names: Vec<&str> = map.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Film & Animation", "Music"]);
    assert_eq!(map.id_for("Music"), Some("10"));
    assert_eq!(map.id_for("Short Movies"), None);
}

#[tokio::test]
async fn resolve_fails_when_listing_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videoCategories"))
        .respond_with(ResponseTemplate::new(403).set_body_json(&json!({
            "error": {
                "code": 403,
                "message": "API key not valid",
                "errors": [{ "reason": "forbidden" }]
            }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = resolve_categories(&client).await.unwrap_err();
    assert!(err.to_string().contains("API key not valid"), "got: {err}");
}
