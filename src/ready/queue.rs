use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::QueueConfig;
use crate::error::{ReadyQueueError, Result};
use crate::job::{ExecutionType, JobContext, JobExecutionType};
use crate::provider::JobConfigProvider;
use crate::ready::node::{ready_job_path, READY_ROOT};
use crate::store::CoordinationStore;
use crate::tracker::{MisfireTracker, RunningTracker};

/// Controller for the ready queue: the set of jobs admitted and awaiting a
/// dispatch decision, kept as nodes under [`READY_ROOT`].
///
/// Holds no state of its own; every operation reads or writes the
/// coordination store directly, so any number of controller instances
/// across the cluster observe the same queue.
pub struct ReadyQueue {
    store: Arc<dyn CoordinationStore>,
    config_provider: Arc<dyn JobConfigProvider>,
    running: Arc<dyn RunningTracker>,
    misfired: Arc<dyn MisfireTracker>,
    config: QueueConfig,
}

impl ReadyQueue {
    pub fn new(
        store: Arc<dyn CoordinationStore>,
        config_provider: Arc<dyn JobConfigProvider>,
        running: Arc<dyn RunningTracker>,
        misfired: Arc<dyn MisfireTracker>,
        config: QueueConfig,
    ) -> Self {
        Self {
            store,
            config_provider,
            running,
            misfired,
            config,
        }
    }

    /// Admit one trigger of a transient job.
    ///
    /// Increments the job's ready counter by one. Silently does nothing if
    /// the job is not configured or is not transient; rejects with a warning
    /// (not an error) while the queue is over capacity.
    pub async fn add_transient(&self, job_name: &str) -> Result<()> {
        if self.over_capacity().await? {
            warn!(
                job_name,
                max_queue_size = self.config.max_queue_size,
                "Cannot add transient job, ready queue is over capacity"
            );
            return Ok(());
        }
        let Some(config) = self.config_provider.load(job_name).await? else {
            return Ok(());
        };
        if config.execution_type != JobExecutionType::Transient {
            return Ok(());
        }
        let path = ready_job_path(job_name);
        // Non-transactional read-modify-write: two concurrent triggers can
        // lose an increment. The counter is a replay hint, not an exact
        // ledger.
        let times = self.read_counter(&path).await?;
        self.store.write(&path, &(times + 1).to_string()).await
    }

    /// Mark a daemon job as desired-ready.
    ///
    /// Writes the fixed presence marker `"1"`; repeated calls are no-ops in
    /// effect. Same capacity gate and configuration check as
    /// [`add_transient`](Self::add_transient), requiring a daemon job.
    pub async fn add_daemon(&self, job_name: &str) -> Result<()> {
        if self.over_capacity().await? {
            warn!(
                job_name,
                max_queue_size = self.config.max_queue_size,
                "Cannot add daemon job, ready queue is over capacity"
            );
            return Ok(());
        }
        let Some(config) = self.config_provider.load(job_name).await? else {
            return Ok(());
        };
        if config.execution_type != JobExecutionType::Daemon {
            return Ok(());
        }
        self.store.write(&ready_job_path(job_name), "1").await
    }

    /// Snapshot the jobs currently eligible for dispatch.
    ///
    /// `ineligible` is compared by job name only; matching entries are
    /// skipped outright. Running transient jobs are excluded, running
    /// daemon jobs are still included so the caller can re-assert their
    /// desired state.
    ///
    /// Not read-only: a ready entry whose configuration has been deleted is
    /// removed from the store, and a running job with misfire handling
    /// enabled gets one misfire record per scan. Both effects are part of
    /// the contract.
    ///
    /// No ordering guarantee on the result.
    pub async fn all_eligible_contexts(&self, ineligible: &[JobContext]) -> Result<Vec<JobContext>> {
        if !self.store.exists(READY_ROOT).await? {
            return Ok(Vec::new());
        }
        let ineligible_names: HashSet<&str> =
            ineligible.iter().map(JobContext::job_name).collect();
        let job_names = self.store.child_names(READY_ROOT).await?;
        let mut result = Vec::with_capacity(job_names.len());
        for job_name in &job_names {
            if ineligible_names.contains(job_name.as_str()) {
                continue;
            }
            let Some(config) = self.config_provider.load(job_name).await? else {
                // Configuration deleted since admission; drop the orphan.
                debug!(job_name, "Removing ready entry for deleted job configuration");
                self.store.delete(&ready_job_path(job_name)).await?;
                continue;
            };
            if self.running.is_running(job_name).await {
                if config.misfire {
                    self.misfired.record(job_name).await?;
                }
                if config.execution_type == JobExecutionType::Daemon {
                    result.push(JobContext::from_config(config, ExecutionType::Ready));
                }
                continue;
            }
            result.push(JobContext::from_config(config, ExecutionType::Ready));
        }
        Ok(result)
    }

    /// Release one dispatched execution for each named job.
    ///
    /// Decrements the job's counter, deleting the entry once it reaches
    /// zero. Daemon entries always hold `"1"` and are therefore always
    /// deleted; re-add them to keep the daemon desired at the next cycle.
    /// Names with no existing entry are a no-op.
    pub async fn remove(&self, job_names: &[impl AsRef<str>]) -> Result<()> {
        for job_name in job_names {
            let path = ready_job_path(job_name.as_ref());
            let times = self.read_counter(&path).await?;
            if times <= 1 {
                self.store.delete(&path).await?;
            } else {
                self.store.write(&path, &(times - 1).to_string()).await?;
            }
        }
        Ok(())
    }

    async fn over_capacity(&self) -> Result<bool> {
        Ok(self.store.child_count(READY_ROOT).await? > self.config.max_queue_size)
    }

    /// Absent entries read as zero; anything unparsable is a store fault.
    async fn read_counter(&self, path: &str) -> Result<u64> {
        match self.store.read_direct(path).await? {
            None => Ok(0),
            Some(raw) => raw
                .parse()
                .map_err(|_| ReadyQueueError::MalformedCounter {
                    path: path.to_string(),
                    value: raw,
                }),
        }
    }
}
