//! Step snapshots and the immutable step sequence
//!
//! An algorithm run produces a [`StepSequence`]: an ordered, non-empty list of
//! [`Step`]s. Each step carries the data-structure state at that point of the
//! run, emphasis metadata, named pointers, a message, and the source line it
//! corresponds to.
//!
//! The state is a closed set of optional typed fields ([`StepState`]) rather
//! than an open map, so every pane has a concrete contract. Fields an
//! algorithm does not use stay `None` and render as nothing.

use rustc_hash::FxHashSet;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::ops::Index;

/// A node-and-edge graph as seen at one step
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphState {
    pub nodes: Vec<String>,
    /// Directed edges as `(from, to)` node indices
    pub edges: Vec<(usize, usize)>,
}

/// Data-structure states visible at one step
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StepState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub array: Option<Vec<i64>>,
    /// Key/value entries in insertion order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash_map: Option<Vec<(String, String)>>,
    /// Bottom of the stack first
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<Vec<String>>,
    /// Binary tree in level order, `None` for missing children
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree: Option<Vec<Option<i64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph: Option<GraphState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matrix: Option<Vec<Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intervals: Option<Vec<(i64, i64)>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bits: Option<Vec<bool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    /// Escape hatch for state that fits none of the typed fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<serde_json::Value>,
}

/// One immutable snapshot of an algorithm's execution
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Step {
    pub state: StepState,
    #[serde(serialize_with = "sorted_set")]
    pub highlights: FxHashSet<usize>,
    #[serde(serialize_with = "sorted_set")]
    pub secondary: FxHashSet<usize>,
    /// Pointer name to the index it references
    pub pointers: BTreeMap<String, usize>,
    pub message: String,
    /// 1-based line in the paired source view
    pub code_line: usize,
}

fn sorted_set<S: Serializer>(set: &FxHashSet<usize>, serializer: S) -> Result<S::Ok, S::Error> {
    let mut items: Vec<usize> = set.iter().copied().collect();
    items.sort_unstable();
    items.serialize(serializer)
}

impl Step {
    pub fn new(code_line: usize, message: impl Into<String>) -> Self {
        Step {
            code_line,
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn array(mut self, values: &[i64]) -> Self {
        self.state.array = Some(values.to_vec());
        self
    }

    pub fn hash_map<K: ToString, V: ToString>(mut self, entries: &[(K, V)]) -> Self {
        self.state.hash_map = Some(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
        self
    }

    pub fn stack<T: ToString>(mut self, items: &[T]) -> Self {
        self.state.stack = Some(items.iter().map(|item| item.to_string()).collect());
        self
    }

    pub fn tree(mut self, level_order: &[Option<i64>]) -> Self {
        self.state.tree = Some(level_order.to_vec());
        self
    }

    pub fn graph(mut self, graph: GraphState) -> Self {
        self.state.graph = Some(graph);
        self
    }

    pub fn matrix(mut self, rows: Vec<Vec<String>>) -> Self {
        self.state.matrix = Some(rows);
        self
    }

    pub fn intervals(mut self, intervals: &[(i64, i64)]) -> Self {
        self.state.intervals = Some(intervals.to_vec());
        self
    }

    pub fn bits(mut self, bits: Vec<bool>) -> Self {
        self.state.bits = Some(bits);
        self
    }

    pub fn result(mut self, result: impl Into<String>) -> Self {
        self.state.result = Some(result.into());
        self
    }

    pub fn custom(mut self, value: serde_json::Value) -> Self {
        self.state.custom = Some(value);
        self
    }

    pub fn highlight(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.highlights.extend(indices);
        self
    }

    pub fn secondary(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.secondary.extend(indices);
        self
    }

    pub fn pointer(mut self, name: impl Into<String>, index: usize) -> Self {
        self.pointers.insert(name.into(), index);
        self
    }

    /// Pointer names referencing `index`, in name order
    pub fn pointers_at(&self, index: usize) -> Vec<&str> {
        self.pointers
            .iter()
            .filter(|(_, &at)| at == index)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// Finite, non-empty, immutable trace of one `(algorithm, input)` run
///
/// There is no way to mutate a sequence once built; a new input produces a
/// new sequence that replaces the old one wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct StepSequence {
    steps: Box<[Step]>,
}

impl StepSequence {
    /// Build a sequence, or `None` if `steps` is empty
    pub fn new(steps: Vec<Step>) -> Option<Self> {
        if steps.is_empty() {
            return None;
        }
        Some(StepSequence {
            steps: steps.into_boxed_slice(),
        })
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn first(&self) -> &Step {
        &self.steps[0]
    }

    pub fn last(&self) -> &Step {
        &self.steps[self.steps.len() - 1]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn as_slice(&self) -> &[Step] {
        &self.steps
    }
}

impl Index<usize> for StepSequence {
    type Output = Step;

    fn index(&self, index: usize) -> &Step {
        &self.steps[index]
    }
}

impl<'a> IntoIterator for &'a StepSequence {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_rejected() {
        assert!(StepSequence::new(Vec::new()).is_none());
    }

    #[test]
    fn test_single_step_is_valid() {
        let seq = StepSequence::new(vec![Step::new(1, "done")]).unwrap();
        assert_eq!(seq.len(), 1);
        assert_eq!(seq.last_index(), 0);
        assert_eq!(seq.first().message, "done");
    }

    #[test]
    fn test_builder_sets_fields() {
        let step = Step::new(3, "compare")
            .array(&[1, 2, 3])
            .highlight([0, 2])
            .secondary([1])
            .pointer("left", 0)
            .pointer("right", 2);

        assert_eq!(step.code_line, 3);
        assert_eq!(step.state.array.as_deref(), Some(&[1, 2, 3][..]));
        assert!(step.highlights.contains(&0));
        assert!(step.highlights.contains(&2));
        assert!(step.secondary.contains(&1));
        assert_eq!(step.pointers_at(2), vec!["right"]);
        assert!(step.state.stack.is_none());
    }

    #[test]
    fn test_serialized_sets_are_sorted() {
        let step = Step::new(1, "x").highlight([5, 1, 3]);
        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["highlights"], serde_json::json!([1, 3, 5]));
        assert!(json["state"].get("array").is_none());
    }
}
