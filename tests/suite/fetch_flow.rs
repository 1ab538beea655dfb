//! Fetch behavior against a mock users endpoint.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use chrono::NaiveDate;
use sysdash_client::{FetchError, UsersClient};
use sysdash_engine::{App, AppConfig, DashConfig, FetchState};

use crate::common::settle;

fn users_body() -> serde_json::Value {
    json!([
        { "id": 1, "user": "user 1", "role": "role 1", "date": "2026-08-06" },
        { "id": 2, "user": "user 2", "role": "role 2", "date": "2026-08-05" },
        { "id": 3, "user": "user 3", "role": "role 3", "date": "2026-08-04" },
        { "id": 4, "user": "user 4", "role": "role 4", "date": "2026-08-03" },
        { "id": 5, "user": "user 5", "role": "role 5", "date": "2026-08-02" },
    ])
}

async fn serving(status: u16, body: serde_json::Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(&server)
        .await;
    server
}

fn config_for(server: &MockServer) -> DashConfig {
    DashConfig {
        app: Some(AppConfig {
            endpoint: Some(server.uri()),
            ..AppConfig::default()
        }),
    }
}

#[tokio::test]
async fn fetch_users_decodes_the_wire_format() {
    let server = serving(200, users_body()).await;
    let client = UsersClient::new(server.uri()).expect("client builds");

    let users = client.fetch_users().await.expect("fetch succeeds");

    assert_eq!(users.len(), 5);
    assert_eq!(users[0].id, 1);
    assert_eq!(users[0].user, "user 1");
    assert_eq!(users[0].role, "role 1");
    assert_eq!(
        users[0].date,
        NaiveDate::from_ymd_opt(2026, 8, 6).expect("valid date")
    );
}

#[tokio::test]
async fn server_error_maps_to_a_status_failure() {
    let server = serving(500, json!({"error": "boom"})).await;
    let client = UsersClient::new(server.uri()).expect("client builds");

    let err = client.fetch_users().await.expect_err("fetch fails");
    assert!(matches!(err, FetchError::Status { status } if status.as_u16() == 500));
}

#[tokio::test]
async fn malformed_body_maps_to_a_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not a user list"))
        .mount(&server)
        .await;
    let client = UsersClient::new(server.uri()).expect("client builds");

    let err = client.fetch_users().await.expect_err("fetch fails");
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn unreachable_server_maps_to_a_network_failure() {
    // Port 1 is reserved and never listening.
    let client = UsersClient::new("http://127.0.0.1:1").expect("client builds");
    let err = client.fetch_users().await.expect_err("fetch fails");
    assert!(matches!(err, FetchError::Network(_)));
}

#[tokio::test]
async fn app_loads_the_table_from_a_live_endpoint() {
    let server = serving(200, users_body()).await;
    let mut app = App::start(&config_for(&server)).expect("app starts");
    settle(&mut app).await;

    match app.state() {
        FetchState::Loaded(table) => {
            let ids: Vec<u64> = table.rows().iter().map(|r| r.id).collect();
            assert_eq!(ids, [1, 2, 3, 4, 5]);
        }
        other => panic!("expected loaded table, got {other:?}"),
    }
}

#[tokio::test]
async fn app_reaches_the_fallback_state_when_the_endpoint_fails() {
    let server = serving(503, json!({"error": "unavailable"})).await;
    let mut app = App::start(&config_for(&server)).expect("app starts");
    settle(&mut app).await;

    assert!(matches!(app.state(), FetchState::Failed(_)));
}

#[tokio::test]
async fn demo_source_serves_five_rows_without_a_server() {
    let config = DashConfig {
        app: Some(AppConfig {
            demo_delay_ms: Some(0),
            ..AppConfig::default()
        }),
    };
    let mut app = App::start(&config).expect("app starts");
    settle(&mut app).await;

    match app.state() {
        FetchState::Loaded(table) => {
            let ids: Vec<u64> = table.rows().iter().map(|r| r.id).collect();
            assert_eq!(ids, [1, 2, 3, 4, 5]);
        }
        other => panic!("expected loaded table, got {other:?}"),
    }
}
