use std::time::Duration;

use jobboard_engine::{BackendClient, ClientSettings, FailureKind, JobSearch};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> BackendClient {
    BackendClient::new(ClientSettings {
        base_url: server.uri(),
        ..ClientSettings::default()
    })
    .expect("client")
}

const QUERY: &str =
    "what=rust&where=india&page=2&skills=React%2CGo&datePosted=week&jobType=all&workMode=remote";

#[tokio::test]
async fn search_sends_query_and_returns_jobs() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/jobs"))
        .and(query_param("what", "rust"))
        .and(query_param("where", "india"))
        .and(query_param("page", "2"))
        .and(query_param("skills", "React,Go"))
        .and(query_param("datePosted", "week"))
        .and(query_param("jobType", "all"))
        .and(query_param("workMode", "remote"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "jobs": [
                {
                    "id": "a1",
                    "title": "Rust Developer",
                    "company": "Acme",
                    "location": "Remote",
                    "description": "Write services",
                    "jobType": "Contract",
                    "posted": "2 days ago",
                    "applyUrl": "https://acme.example/apply/a1"
                },
                {
                    "id": 7,
                    "title": "Platform Engineer",
                    "company": "Initech",
                    "location": "Pune",
                    "description": "Keep it running",
                    "applyUrl": "https://initech.example/7"
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let jobs = client_for(&server).search(QUERY).await.expect("search ok");

    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].title, "Rust Developer");
    assert_eq!(jobs[0].job_type.as_deref(), Some("Contract"));
    assert_eq!(jobs[1].id, "7");
    assert_eq!(jobs[1].posted, None);
}

#[tokio::test]
async fn success_without_jobs_field_is_an_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&server)
        .await;

    let jobs = client_for(&server).search(QUERY).await.expect("search ok");
    assert!(jobs.is_empty());
}

#[tokio::test]
async fn server_rejection_carries_message_even_on_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/jobs"))
        .respond_with(ResponseTemplate::new(502).set_body_json(json!({
            "success": false,
            "message": "Upstream job API unavailable"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).search(QUERY).await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::Rejected {
            message: Some("Upstream job API unavailable".to_string())
        }
    );
}

#[tokio::test]
async fn non_json_body_is_a_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/jobs"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let err = client_for(&server).search(QUERY).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn slow_search_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/jobs"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(300))
                .set_body_json(json!({ "success": true, "jobs": [] })),
        )
        .mount(&server)
        .await;

    let client = BackendClient::new(ClientSettings {
        base_url: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..ClientSettings::default()
    })
    .expect("client");

    let err = client.search(QUERY).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn oversized_response_is_refused() {
    let server = MockServer::start().await;
    let description = "x".repeat(4096);
    Mock::given(method("GET"))
        .and(path("/api/v1/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "jobs": [{ "id": "1", "title": "Big", "description": description }]
        })))
        .mount(&server)
        .await;

    let client = BackendClient::new(ClientSettings {
        base_url: server.uri(),
        max_response_bytes: 1024,
        ..ClientSettings::default()
    })
    .expect("client");

    let err = client.search(QUERY).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::TooLarge { max_bytes: 1024 });
}

#[tokio::test]
async fn unreachable_server_is_a_network_failure() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = BackendClient::new(ClientSettings {
        base_url: uri,
        ..ClientSettings::default()
    })
    .expect("client");

    let err = client.search(QUERY).await.unwrap_err();
    assert!(matches!(err.kind, FailureKind::Network | FailureKind::Timeout));
}
