pub mod node;
pub mod queue;

pub use node::{ready_job_path, READY_ROOT};
pub use queue::ReadyQueue;
