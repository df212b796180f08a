//! Interfaces to the sibling state trackers.
//!
//! The running-job and misfire trackers keep their own books in other parts
//! of the scheduler; the ready queue only consults or notifies them.

use async_trait::async_trait;

use crate::error::Result;

/// Reports whether a named job currently has an execution in flight.
#[async_trait]
pub trait RunningTracker: Send + Sync {
    async fn is_running(&self, job_name: &str) -> bool;
}

/// Records triggers that fired while their job was ineligible, for replay.
#[async_trait]
pub trait MisfireTracker: Send + Sync {
    async fn record(&self, job_name: &str) -> Result<()>;
}
