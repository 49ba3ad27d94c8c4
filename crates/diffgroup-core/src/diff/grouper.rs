//! Grouping of row diffs by their set of differing columns.

use crate::diff::model::{DiffGroup, GroupCountTable, GroupKey};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Bucket {
    count: usize,
    indices: Vec<usize>,
}

/// Accumulates row diffs into groups keyed by the exact differing-column tuple.
///
/// Rows must be recorded in ascending index order. Partial groupers built
/// over disjoint row ranges can be combined with [`DiffGrouper::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffGrouper {
    buckets: BTreeMap<GroupKey, Bucket>,
}

impl DiffGrouper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the diff of one row pair. Empty diffs are ignored.
    pub fn record(&mut self, row_index: usize, diff: Vec<String>) {
        if diff.is_empty() {
            return;
        }
        let bucket = self.buckets.entry(GroupKey::new(diff)).or_default();
        bucket.count += 1;
        bucket.indices.push(row_index);
    }

    /// Combine with a grouper built over a disjoint set of rows.
    ///
    /// Counts add up and index lists are concatenated and kept ascending,
    /// so the outcome does not depend on merge order.
    pub fn merge(mut self, other: DiffGrouper) -> DiffGrouper {
        for (key, theirs) in other.buckets {
            let ours = self.buckets.entry(key).or_default();
            let in_order = match (ours.indices.last(), theirs.indices.first()) {
                (Some(last), Some(first)) => last < first,
                _ => true,
            };
            ours.count += theirs.count;
            ours.indices.extend(theirs.indices);
            if !in_order {
                ours.indices.sort_unstable();
            }
        }
        self
    }

    /// Number of distinct groups so far
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Produce the result table, one row per group in ascending key order.
    pub fn finish(self) -> GroupCountTable {
        let groups = self
            .buckets
            .into_iter()
            .map(|(group, bucket)| DiffGroup {
                group,
                count: bucket.count,
                indices: bucket.indices,
            })
            .collect();
        GroupCountTable::from_groups(groups)
    }
}
