//! Insertion-ordered key counter shared by the ranker and summarizer.

use crate::parser::schema::{AggregatedCount, GroupKey};
use std::collections::HashMap;

/// Counts keys while remembering the order they were first seen in
#[derive(Debug, Default)]
pub(crate) struct OrderedCounts {
    entries: Vec<AggregatedCount>,
    index: HashMap<GroupKey, usize>,
}

impl OrderedCounts {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add(&mut self, key: GroupKey) {
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].count += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push(AggregatedCount { key, count: 1 });
            }
        }
    }

    pub(crate) fn into_counts(self) -> Vec<AggregatedCount> {
        self.entries
    }
}
