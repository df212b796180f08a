//! Test harness for ready-queue integration tests.
//!
//! Provides mock sibling trackers and helpers for seeding job
//! configurations into an in-memory coordination store.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};

use readyq::error::Result;
use readyq::provider::StoreConfigProvider;
use readyq::store::{CoordinationStore, MemoryStore};
use readyq::tracker::{MisfireTracker, RunningTracker};
use readyq::{JobConfiguration, JobExecutionType, QueueConfig, ReadyQueue};

/// Running tracker whose answer is driven directly by the test.
#[derive(Default)]
pub struct MockRunningTracker {
    running: RwLock<HashSet<String>>,
}

impl MockRunningTracker {
    pub async fn set_running(&self, job_name: &str) {
        self.running.write().await.insert(job_name.to_string());
    }
}

#[async_trait]
impl RunningTracker for MockRunningTracker {
    async fn is_running(&self, job_name: &str) -> bool {
        self.running.read().await.contains(job_name)
    }
}

/// Misfire tracker that records every call for later assertions.
#[derive(Default)]
pub struct RecordingMisfireTracker {
    records: Mutex<Vec<String>>,
}

impl RecordingMisfireTracker {
    pub async fn records(&self) -> Vec<String> {
        self.records.lock().await.clone()
    }
}

#[async_trait]
impl MisfireTracker for RecordingMisfireTracker {
    async fn record(&self, job_name: &str) -> Result<()> {
        self.records.lock().await.push(job_name.to_string());
        Ok(())
    }
}

/// A ready queue wired to an in-memory store and mock trackers, with the
/// pieces exposed for seeding and assertions.
pub struct TestQueue {
    pub store: Arc<MemoryStore>,
    pub running: Arc<MockRunningTracker>,
    pub misfired: Arc<RecordingMisfireTracker>,
    pub queue: ReadyQueue,
}

impl TestQueue {
    pub fn new() -> Self {
        Self::with_config(QueueConfig::default())
    }

    pub fn with_config(config: QueueConfig) -> Self {
        let store = Arc::new(MemoryStore::new());
        let provider = Arc::new(StoreConfigProvider::new(store.clone()));
        let running = Arc::new(MockRunningTracker::default());
        let misfired = Arc::new(RecordingMisfireTracker::default());
        let queue = ReadyQueue::new(
            store.clone(),
            provider,
            running.clone(),
            misfired.clone(),
            config,
        );
        Self {
            store,
            running,
            misfired,
            queue,
        }
    }

    /// Persist a job configuration where the store-backed provider reads it.
    pub async fn seed_config(&self, config: &JobConfiguration) {
        let raw = serde_json::to_string(config).unwrap();
        self.store
            .write(&StoreConfigProvider::config_path(&config.job_name), &raw)
            .await
            .unwrap();
    }

    /// Stored counter for a job's ready entry, if any.
    pub async fn counter(&self, job_name: &str) -> Option<String> {
        self.store
            .read_direct(&readyq::ready::ready_job_path(job_name))
            .await
            .unwrap()
    }
}

#[allow(dead_code)]
pub fn transient_config(job_name: &str) -> JobConfiguration {
    JobConfiguration::new(job_name, "test-app", "0/30 * * * * ?", JobExecutionType::Transient)
}

#[allow(dead_code)]
pub fn daemon_config(job_name: &str) -> JobConfiguration {
    JobConfiguration::new(job_name, "test-app", "0/30 * * * * ?", JobExecutionType::Daemon)
}
