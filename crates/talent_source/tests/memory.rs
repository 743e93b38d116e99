use pretty_assertions::assert_eq;
use talent_core::{Job, JobId, Record, RecordId};
use talent_source::{FailureKind, JobSource, MemoryTalentSource, TalentSource};

fn source() -> MemoryTalentSource {
    let records = ["alice", "bob", "alina", "carol", "alan"]
        .iter()
        .map(|name| {
            Record::new(*name, format!("https://talent.example/{name}"))
                .with_field("name", name.to_uppercase())
        })
        .collect();
    MemoryTalentSource::new(records, vec![Job::new("j1", Some("Engineer"))], 2)
}

fn ids(records: &[Record]) -> Vec<&str> {
    records.iter().map(|record| record.id.as_str()).collect()
}

#[tokio::test]
async fn pages_through_unfiltered_results() {
    let source = source();

    let first = source.fetch(0, "").await.unwrap();
    assert_eq!(ids(&first.records), vec!["alice", "bob"]);
    assert_eq!(first.remaining, 3);

    let last = source.fetch(2, "").await.unwrap();
    assert_eq!(ids(&last.records), vec!["alan"]);
    assert_eq!(last.remaining, 0);

    let beyond = source.fetch(9, "").await.unwrap();
    assert!(beyond.records.is_empty());
    assert_eq!(beyond.remaining, 0);
}

#[tokio::test]
async fn keyword_filters_case_insensitively() {
    let source = source();
    let page = source.fetch(0, "AL").await.unwrap();
    assert_eq!(ids(&page.records), vec!["alice", "alina"]);
    assert_eq!(page.remaining, 1);
}

#[tokio::test]
async fn archive_removes_record_and_records_job() {
    let source = source();
    source
        .archive(&RecordId::from("bob"), &JobId::from("j1"))
        .await
        .unwrap();

    let page = source.fetch(0, "").await.unwrap();
    assert_eq!(ids(&page.records), vec!["alice", "alina"]);
    assert_eq!(
        source.archived(),
        vec![(RecordId::from("bob"), JobId::from("j1"))]
    );

    let err = source
        .archive(&RecordId::from("bob"), &JobId::from("j1"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Rejected);
}

#[tokio::test]
async fn offline_source_fails_every_request() {
    let source = source();
    source.set_offline(true);
    assert_eq!(
        source.fetch(0, "").await.unwrap_err().kind,
        FailureKind::Network
    );
    assert_eq!(source.jobs().await.unwrap_err().kind, FailureKind::Network);

    source.set_offline(false);
    assert_eq!(source.jobs().await.unwrap().len(), 1);
}
