use serde::{Deserialize, Serialize};

/// How a job's readiness is managed once admitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobExecutionType {
    /// Fires once per trigger; outstanding triggers are counted.
    Transient,
    /// Continuously desired running; readiness is a presence marker.
    Daemon,
}

impl std::fmt::Display for JobExecutionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobExecutionType::Transient => write!(f, "transient"),
            JobExecutionType::Daemon => write!(f, "daemon"),
        }
    }
}

/// Which subsystem produced a [`JobContext`].
///
/// The ready queue only ever produces `Ready`; the other variants tag
/// contexts surfaced by the misfire replay and failover paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionType {
    Ready,
    Misfired,
    Failover,
}

/// Declared configuration for a cloud job, stored as JSON in the
/// coordination store by the configuration subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobConfiguration {
    pub job_name: String,
    pub app_name: String,
    pub cron: String,
    pub sharding_total_count: u32,
    pub execution_type: JobExecutionType,
    /// Whether triggers that fire while the job is running should be
    /// recorded for later replay instead of dropped.
    pub misfire: bool,
}

impl JobConfiguration {
    pub fn new(
        job_name: impl Into<String>,
        app_name: impl Into<String>,
        cron: impl Into<String>,
        execution_type: JobExecutionType,
    ) -> Self {
        Self {
            job_name: job_name.into(),
            app_name: app_name.into(),
            cron: cron.into(),
            sharding_total_count: 1,
            execution_type,
            misfire: false,
        }
    }

    pub fn with_sharding_total_count(mut self, count: u32) -> Self {
        self.sharding_total_count = count;
        self
    }

    pub fn with_misfire(mut self, misfire: bool) -> Self {
        self.misfire = misfire;
        self
    }
}

/// A job paired with the execution path that surfaced it. Produced fresh on
/// every eligibility scan and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct JobContext {
    pub config: JobConfiguration,
    pub execution_type: ExecutionType,
}

impl JobContext {
    pub fn from_config(config: JobConfiguration, execution_type: ExecutionType) -> Self {
        Self {
            config,
            execution_type,
        }
    }

    pub fn job_name(&self) -> &str {
        &self.config.job_name
    }
}
