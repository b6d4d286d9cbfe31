use std::collections::BTreeMap;
use tracing::debug;

/// Per-item "added" counts for one restaurant-browsing session.
///
/// Entries appear on first increment and only disappear on [`reset`](Self::reset).
/// Reading an item that was never added yields 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionLedger {
    counts: BTreeMap<String, u64>,
}

impl SelectionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, item_id: &str) -> u64 {
        let count = self.counts.entry(item_id.to_string()).or_insert(0);
        *count = count.saturating_add(1);
        debug!(item = item_id, count = *count, "ledger increment");
        *count
    }

    pub fn get(&self, item_id: &str) -> u64 {
        self.counts.get(item_id).copied().unwrap_or(0)
    }

    pub fn reset(&mut self) {
        debug!(entries = self.counts.len(), "ledger reset");
        self.counts.clear();
    }

    /// Non-zero entries ordered by item id.
    pub fn entries(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(id, n)| (id.as_str(), *n))
    }

    pub fn total_added(&self) -> u64 {
        self.counts.values().fold(0u64, |acc, n| acc.saturating_add(*n))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
