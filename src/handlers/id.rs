//! Id generation for generated elements (gradients, patterns, clip paths, images)

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Mutex;

/// Produces identifiers that are unique within a generation session
pub trait IdGenerator: Send + Sync + Debug {
    fn generate_id(&self, prefix: &str) -> String;
}

/// Per-prefix counters: `gradient1`, `gradient2`, `pattern1`, ...
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    counters: Mutex<HashMap<String, u64>>,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last number handed out for `prefix` (0 if none yet)
    pub fn current(&self, prefix: &str) -> u64 {
        let counters = self.counters.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        counters.get(prefix).copied().unwrap_or(0)
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate_id(&self, prefix: &str) -> String {
        // A panic while holding the lock cannot leave a counter half-updated
        let mut counters = self.counters.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let counter = counters.entry(prefix.to_string()).or_insert(0);
        *counter += 1;
        format!("{}{}", prefix, counter)
    }
}

/// Random ids, for output fragments that get merged into foreign documents
#[cfg(feature = "uuid")]
#[derive(Debug, Clone, Default)]
pub struct UuidIdGenerator;

#[cfg(feature = "uuid")]
impl IdGenerator for UuidIdGenerator {
    fn generate_id(&self, prefix: &str) -> String {
        format!("{}-{}", prefix, uuid::Uuid::new_v4().simple())
    }
}
