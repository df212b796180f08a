/// Configuration for the ready queue, passed explicitly into [`ReadyQueue`]
/// rather than read from process-global state.
///
/// [`ReadyQueue`]: crate::ready::ReadyQueue
#[derive(Debug, Clone)]
pub struct QueueConfig {
    /// Soft cap on the number of ready entries. Admission calls are rejected
    /// (with a warning, not an error) while the child count under the ready
    /// root exceeds this value. Protects the coordination store from
    /// unbounded growth under trigger storms.
    pub max_queue_size: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            max_queue_size: 10_000,
        }
    }
}

impl QueueConfig {
    pub fn with_max_queue_size(max_queue_size: usize) -> Self {
        Self { max_queue_size }
    }
}
