use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::job::JobConfiguration;
use crate::store::CoordinationStore;

/// Root under which the configuration subsystem persists job configurations.
pub const CONFIG_ROOT: &str = "/config/job";

/// Loads a job's declared configuration by name.
#[async_trait]
pub trait JobConfigProvider: Send + Sync {
    /// `None` when no job with that name is configured.
    async fn load(&self, job_name: &str) -> Result<Option<JobConfiguration>>;
}

/// [`JobConfigProvider`] that reads JSON configurations from the
/// coordination store at `/config/job/<jobName>`.
pub struct StoreConfigProvider {
    store: Arc<dyn CoordinationStore>,
}

impl StoreConfigProvider {
    pub fn new(store: Arc<dyn CoordinationStore>) -> Self {
        Self { store }
    }

    pub fn config_path(job_name: &str) -> String {
        format!("{CONFIG_ROOT}/{job_name}")
    }
}

#[async_trait]
impl JobConfigProvider for StoreConfigProvider {
    async fn load(&self, job_name: &str) -> Result<Option<JobConfiguration>> {
        let Some(raw) = self.store.read_direct(&Self::config_path(job_name)).await? else {
            return Ok(None);
        };
        let config: JobConfiguration = serde_json::from_str(&raw)?;
        Ok(Some(config))
    }
}
