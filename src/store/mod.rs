pub mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::error::Result;

/// Ordered hierarchical key/value store shared by every scheduler process.
///
/// Paths are `/`-separated absolute strings (`/state/ready/my-job`). The
/// store is the single source of truth for queue state; implementations are
/// expected to provide linearizable per-path reads and writes but no
/// cross-path transactions. Timeout and retry policy belong to the
/// implementation, not to callers.
#[async_trait]
pub trait CoordinationStore: Send + Sync {
    /// Whether a node exists at `path` (a node with children exists even if
    /// it holds no value of its own).
    async fn exists(&self, path: &str) -> Result<bool>;

    /// Names of the direct children of `path`, in store order.
    async fn child_names(&self, path: &str) -> Result<Vec<String>>;

    /// Number of direct children of `path`.
    async fn child_count(&self, path: &str) -> Result<usize>;

    /// Read the value at `path` straight from the store, bypassing any
    /// client-side cache. `None` if the node is absent or holds no value.
    async fn read_direct(&self, path: &str) -> Result<Option<String>>;

    /// Write `value` at `path`, creating the node if needed.
    async fn write(&self, path: &str, value: &str) -> Result<()>;

    /// Delete the node at `path` and its subtree. Absent paths are a no-op.
    async fn delete(&self, path: &str) -> Result<()>;
}
