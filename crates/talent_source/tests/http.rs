use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use talent_core::{JobId, RecordId};
use talent_source::{FailureKind, HttpSettings, HttpTalentSource, JobSource, TalentSource};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn source_for(server: &MockServer) -> HttpTalentSource {
    HttpTalentSource::new(HttpSettings {
        base_url: format!("{}/api/", server.uri()),
        ..HttpSettings::default()
    })
    .expect("valid base url")
}

#[tokio::test]
async fn fetch_sends_page_and_keyword_and_decodes_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/talents"))
        .and(query_param("page", "2"))
        .and(query_param("keyword", "rust dev"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "contacts": [
                {"id": 1, "detail_url": "https://talent.example/1", "name": "Alice"},
                {"id": "2", "detail_url": "https://talent.example/2"}
            ],
            "remain": 5
        })))
        .mount(&server)
        .await;

    let page = source_for(&server)
        .fetch(2, "rust dev")
        .await
        .expect("fetch ok");

    assert_eq!(page.remaining, 5);
    let ids: Vec<_> = page.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
    assert_eq!(page.records[0].label(), "Alice");
    assert_eq!(page.records[1].detail_url, "https://talent.example/2");
}

#[tokio::test]
async fn empty_keyword_is_sent_as_empty_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/talents"))
        .and(query_param("page", "0"))
        .and(query_param("keyword", ""))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"contacts": [], "remain": 0})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let page = source_for(&server).fetch(0, "").await.expect("fetch ok");
    assert!(page.records.is_empty());
}

#[tokio::test]
async fn fetch_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/talents"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = source_for(&server).fetch(0, "").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(503));
}

#[tokio::test]
async fn fetch_reports_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/talents"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;

    let err = source_for(&server).fetch(0, "").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn fetch_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/talents"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({"contacts": [], "remain": 0})),
        )
        .mount(&server)
        .await;

    let source = HttpTalentSource::new(HttpSettings {
        base_url: format!("{}/api", server.uri()),
        request_timeout: Duration::from_millis(50),
        ..HttpSettings::default()
    })
    .unwrap();

    let err = source.fetch(0, "").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn archive_posts_target_and_job() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/talents/archive"))
        .and(body_json(json!({"to_uid": "42", "jid": "j7"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    source_for(&server)
        .archive(&RecordId::from("42"), &JobId::from("j7"))
        .await
        .expect("archive ok");
}

#[tokio::test]
async fn archive_failure_carries_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/talents/archive"))
        .respond_with(ResponseTemplate::new(409))
        .mount(&server)
        .await;

    let err = source_for(&server)
        .archive(&RecordId::from("42"), &JobId::from("j7"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(409));
}

#[tokio::test]
async fn jobs_are_decoded_with_name_alias() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 3, "title": "Backend engineer"},
            {"id": "4", "name": "Designer", "city": "Berlin"}
        ])))
        .mount(&server)
        .await;

    let jobs = source_for(&server).jobs().await.expect("jobs ok");
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].id, JobId::from("3"));
    assert_eq!(jobs[0].label(), "Backend engineer");
    assert_eq!(jobs[1].label(), "Designer");
    assert_eq!(jobs[1].fields.get("city"), Some(&json!("Berlin")));
}

#[test]
fn invalid_base_url_is_rejected() {
    let err = HttpTalentSource::new(HttpSettings {
        base_url: "not a url".to_string(),
        ..HttpSettings::default()
    })
    .unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
