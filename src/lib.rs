pub mod config;
pub mod error;
pub mod job;
pub mod provider;
pub mod ready;
pub mod store;
pub mod tracker;

pub use config::QueueConfig;
pub use error::{ReadyQueueError, Result};
pub use job::{ExecutionType, JobConfiguration, JobContext, JobExecutionType};
pub use ready::ReadyQueue;
