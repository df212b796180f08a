use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::store::CoordinationStore;

/// In-process [`CoordinationStore`] backed by an ordered map.
///
/// Mirrors the hierarchy semantics of a real coordination tree: writing a
/// leaf makes every ancestor exist, and deleting a node removes its whole
/// subtree. Used by single-process deployments and tests; it provides the
/// same per-path consistency as the distributed store, minus durability.
#[derive(Debug, Default)]
pub struct MemoryStore {
    nodes: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn child_prefix(path: &str) -> String {
        if path.ends_with('/') {
            path.to_string()
        } else {
            format!("{path}/")
        }
    }
}

#[async_trait]
impl CoordinationStore for MemoryStore {
    async fn exists(&self, path: &str) -> Result<bool> {
        let nodes = self.nodes.read().await;
        if nodes.contains_key(path) {
            return Ok(true);
        }
        let prefix = Self::child_prefix(path);
        Ok(nodes
            .range(prefix.clone()..)
            .next()
            .is_some_and(|(k, _)| k.starts_with(&prefix)))
    }

    async fn child_names(&self, path: &str) -> Result<Vec<String>> {
        let nodes = self.nodes.read().await;
        let prefix = Self::child_prefix(path);
        let mut names: Vec<String> = Vec::new();
        for key in nodes.range(prefix.clone()..).map(|(k, _)| k) {
            let Some(rest) = key.strip_prefix(&prefix) else {
                break;
            };
            let name = rest.split('/').next().unwrap_or(rest);
            if names.last().map(String::as_str) != Some(name) {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }

    async fn child_count(&self, path: &str) -> Result<usize> {
        Ok(self.child_names(path).await?.len())
    }

    async fn read_direct(&self, path: &str) -> Result<Option<String>> {
        let nodes = self.nodes.read().await;
        Ok(nodes.get(path).cloned())
    }

    async fn write(&self, path: &str, value: &str) -> Result<()> {
        let mut nodes = self.nodes.write().await;
        nodes.insert(path.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, path: &str) -> Result<()> {
        let mut nodes = self.nodes.write().await;
        let prefix = Self::child_prefix(path);
        nodes.remove(path);
        nodes.retain(|k, _| !k.starts_with(&prefix));
        Ok(())
    }
}
