//! Integration tests for the Advent of Code client against a mock server.

use aoc_common::{AdventOfCodeClient, AdventOfCodeClientConfig, AocError, LeaderboardFetcher};
use httpmock::prelude::*;

const LEADERBOARD_JSON: &str = r#"{
  "event": "2021",
  "owner_id": 490120,
  "members": {
    "490120": {
      "id": 490120,
      "name": "Lambo",
      "stars": 3,
      "local_score": 26,
      "global_score": 0,
      "last_star_ts": 1606899444,
      "completion_day_level": {}
    }
  }
}"#;

fn client_for(server: &MockServer) -> AdventOfCodeClient {
    let config = AdventOfCodeClientConfig::new("secret-session", "490120")
        .with_base_url(server.base_url())
        .with_timeout(5);
    AdventOfCodeClient::new(config).expect("client should build")
}

#[tokio::test]
async fn test_fetch_leaderboard_sends_session_cookie() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/2021/leaderboard/private/view/490120.json")
                .header("cookie", "session=secret-session");
            then.status(200)
                .header("content-type", "application/json")
                .body(LEADERBOARD_JSON);
        })
        .await;

    let board = client_for(&server).fetch_leaderboard(2021).await.unwrap();

    api_mock.assert_async().await;
    assert_eq!(board.event, "2021");
    assert_eq!(board.members["490120"].name.as_deref(), Some("Lambo"));
}

#[tokio::test]
async fn test_fetch_leaderboard_uses_requested_year() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/2018/leaderboard/private/view/490120.json");
            then.status(200)
                .body(r#"{"event":"2018","owner_id":"12345","members":{}}"#);
        })
        .await;

    let board = client_for(&server).fetch_leaderboard(2018).await.unwrap();

    api_mock.assert_hits_async(1).await;
    assert!(board.members.is_empty());
}

#[tokio::test]
async fn test_fetch_leaderboard_error_status() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(500).body("internal error");
        })
        .await;

    let err = client_for(&server).fetch_leaderboard(2021).await.unwrap_err();

    // No retries
    api_mock.assert_hits_async(1).await;
    assert_eq!(err.status_code(), Some(500));
}

#[tokio::test]
async fn test_fetch_leaderboard_html_login_page() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(200)
                .header("content-type", "text/html")
                .body("<!DOCTYPE html><html><body>[Log In]</body></html>");
        })
        .await;

    let err = client_for(&server).fetch_leaderboard(2021).await.unwrap_err();

    assert!(matches!(err, AocError::Serialization(_)));
}
