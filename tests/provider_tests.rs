use std::sync::Arc;

use readyq::provider::{JobConfigProvider, StoreConfigProvider};
use readyq::store::{CoordinationStore, MemoryStore};
use readyq::{JobConfiguration, JobExecutionType, ReadyQueueError};

fn provider() -> (Arc<MemoryStore>, StoreConfigProvider) {
    let store = Arc::new(MemoryStore::new());
    let provider = StoreConfigProvider::new(store.clone());
    (store, provider)
}

#[tokio::test]
async fn test_load_round_trips_json_config() {
    let (store, provider) = provider();
    let config = JobConfiguration::new(
        "report-job",
        "billing",
        "0 0 2 * * ?",
        JobExecutionType::Transient,
    )
    .with_sharding_total_count(4)
    .with_misfire(true);
    store
        .write(
            &StoreConfigProvider::config_path("report-job"),
            &serde_json::to_string(&config).unwrap(),
        )
        .await
        .unwrap();

    let loaded = provider.load("report-job").await.unwrap();

    assert_eq!(loaded, Some(config));
}

#[tokio::test]
async fn test_load_absent_job_is_none() {
    let (_store, provider) = provider();

    assert_eq!(provider.load("ghost-job").await.unwrap(), None);
}

#[tokio::test]
async fn test_load_malformed_payload_is_an_error() {
    let (store, provider) = provider();
    store
        .write(&StoreConfigProvider::config_path("bad-job"), "{not json")
        .await
        .unwrap();

    let err = provider.load("bad-job").await.unwrap_err();

    assert!(matches!(err, ReadyQueueError::Config(_)));
}
