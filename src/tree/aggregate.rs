use std::collections::HashMap;

use crate::data::{Record, LEVELS};
use crate::tree::GroupNode;

/// Error while aggregating records into the grouping tree
#[derive(Debug)]
pub struct AggregateError {
    pub message: String,
}

impl std::fmt::Display for AggregateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Group records into the 4-level nesting tree.
///
/// Children appear in insertion order of first occurrence. Empty field
/// values group under the empty-string key like any other value. Leaves sit
/// at the deepest level and carry the count of records sharing the path.
pub fn nest(records: &[Record]) -> Vec<GroupNode> {
    let rows: Vec<&Record> = records.iter().collect();
    group_level(&rows, 0)
}

fn group_level(rows: &[&Record], level: usize) -> Vec<GroupNode> {
    let mut order: Vec<&str> = Vec::new();
    let mut buckets: HashMap<&str, Vec<&Record>> = HashMap::new();

    for row in rows {
        let key = row.key(level);
        if !buckets.contains_key(key) {
            order.push(key);
        }
        buckets.entry(key).or_default().push(row);
    }

    order
        .into_iter()
        .map(|key| {
            let bucket = buckets.remove(key).unwrap_or_default();
            if level + 1 == LEVELS {
                GroupNode::leaf(key, bucket.len())
            } else {
                GroupNode::group(key, group_level(&bucket, level + 1))
            }
        })
        .collect()
}

/// Select the single tree root from the top-level groups.
///
/// Only one top-level group (one city) is charted. When the input contains
/// more, the first in insertion order wins and the rest are dropped with a
/// warning — the dataset this tool was built for has exactly one city, and
/// silently merging several would misstate every count.
pub fn select_root(mut groups: Vec<GroupNode>) -> Result<GroupNode, AggregateError> {
    if groups.is_empty() {
        return Err(AggregateError {
            message: "no records to aggregate: input produced zero top-level groups".to_string(),
        });
    }
    if groups.len() > 1 {
        log::warn!(
            "input has {} top-level groups; charting only \"{}\" and dropping the rest",
            groups.len(),
            groups[0].key
        );
    }
    Ok(groups.swap_remove(0))
}
