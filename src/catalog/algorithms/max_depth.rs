//! Maximum Depth of Binary Tree, level by level

use super::{ensure_limit, nullable_int_list};
use crate::catalog::{Algorithm, AlgorithmError, Difficulty, Language, SourceCode};
use crate::step::Step;
use serde_json::{json, Value};
use std::collections::VecDeque;

const PYTHON: &str = "\
def max_depth(root):
    if not root:
        return 0
    depth = 0
    queue = deque([root])
    while queue:
        depth += 1
        for _ in range(len(queue)):
            node = queue.popleft()
            if node.left: queue.append(node.left)
            if node.right: queue.append(node.right)
    return depth";

const JAVA: &str = "\
public int maxDepth(TreeNode root) {
    if (root == null) {
        return 0;
    }
    int depth = 0;
    Deque<TreeNode> queue = new ArrayDeque<>(List.of(root));
    while (!queue.isEmpty()) {
        depth++;
        for (int i = queue.size(); i > 0; i--) {
            TreeNode node = queue.poll();
            if (node.left != null) queue.add(node.left);
            if (node.right != null) queue.add(node.right);
        }
    }
    return depth;
}";

pub const ALGORITHM: Algorithm = Algorithm {
    id: "maximum-depth-of-binary-tree",
    name: "Maximum Depth of Binary Tree",
    category: "trees",
    difficulty: Difficulty::Easy,
    time_complexity: "O(n)",
    space_complexity: "O(w)",
    pattern: "Breadth-First Search — Level Order",
    description: "Count the levels of a binary tree.",
    default_input,
    sources: &[
        SourceCode {
            language: Language::Python,
            text: PYTHON,
            line_map: &[],
        },
        SourceCode {
            language: Language::Java,
            text: JAVA,
            line_map: &[1, 2, 3, 5, 6, 7, 8, 9, 10, 11, 12, 15],
        },
    ],
    run,
};

/// Heap-indexed layouts are capped at depth 6
const MAX_SLOTS: usize = 127;

fn default_input() -> Value {
    json!({"root": [3, 9, 20, null, null, 15, 7]})
}

/// Convert compact level order (children of absent nodes omitted) into a
/// heap-indexed layout where the children of slot `i` are `2i + 1` and
/// `2i + 2`
pub fn to_heap_layout(level_order: &[Option<i64>]) -> Result<Vec<Option<i64>>, AlgorithmError> {
    let mut heap: Vec<Option<i64>> = Vec::new();
    let Some(Some(root)) = level_order.first() else {
        return Ok(heap);
    };
    heap.push(Some(*root));

    let mut parents = VecDeque::from([0usize]);
    let mut values = level_order[1..].iter();
    while let Some(parent) = parents.pop_front() {
        for slot in [2 * parent + 1, 2 * parent + 2] {
            let Some(value) = values.next() else {
                return Ok(heap);
            };
            if let Some(v) = value {
                ensure_limit("root", slot + 1, MAX_SLOTS)?;
                if heap.len() <= slot {
                    heap.resize(slot + 1, None);
                }
                heap[slot] = Some(*v);
                parents.push_back(slot);
            }
        }
    }
    Ok(heap)
}

pub fn run(input: &Value) -> Result<Vec<Step>, AlgorithmError> {
    let level_order = nullable_int_list(input, "root")?;
    let tree = to_heap_layout(&level_order)?;
    let present = |slot: usize| tree.get(slot).is_some_and(|v| v.is_some());

    if !present(0) {
        return Ok(vec![
            Step::new(2, "The tree is empty").tree(&tree),
            Step::new(3, "depth = 0").tree(&tree).result("0"),
        ]);
    }

    let mut steps = vec![Step::new(5, "Queue the root").tree(&tree).secondary([0])];
    let mut depth = 0;
    let mut queue = VecDeque::from([0usize]);

    while !queue.is_empty() {
        depth += 1;
        steps.push(
            Step::new(7, format!("Enter level {depth} with {} node(s)", queue.len()))
                .tree(&tree)
                .secondary(queue.iter().copied())
                .result(depth.to_string()),
        );

        for _ in 0..queue.len() {
            let Some(node) = queue.pop_front() else {
                break;
            };
            for child in [2 * node + 1, 2 * node + 2] {
                if present(child) {
                    queue.push_back(child);
                }
            }
            steps.push(
                Step::new(9, format!("Visit {}", tree[node].unwrap_or_default()))
                    .tree(&tree)
                    .highlight([node])
                    .secondary(queue.iter().copied())
                    .pointer("node", node)
                    .result(depth.to_string()),
            );
        }
    }

    steps.push(
        Step::new(12, format!("Queue drained: depth = {depth}"))
            .tree(&tree)
            .result(depth.to_string()),
    );
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heap_layout() {
        let layout = to_heap_layout(&[Some(3), Some(9), Some(20), None, None, Some(15), Some(7)]).unwrap();
        assert_eq!(
            layout,
            vec![Some(3), Some(9), Some(20), None, None, Some(15), Some(7)]
        );

        let skewed = to_heap_layout(&[Some(1), None, Some(2), None, Some(3)]).unwrap();
        assert_eq!(skewed[0], Some(1));
        assert_eq!(skewed[2], Some(2));
        assert_eq!(skewed[6], Some(3));
    }

    #[test]
    fn test_default_depth() {
        let steps = run(&default_input()).unwrap();
        assert_eq!(steps.last().unwrap().state.result.as_deref(), Some("3"));
    }

    #[test]
    fn test_empty_tree() {
        let steps = run(&json!({"root": []})).unwrap();
        assert_eq!(steps.last().unwrap().state.result.as_deref(), Some("0"));
    }

    #[test]
    fn test_too_deep() {
        let mut chain = vec![json!(1)];
        for v in 2..=9 {
            chain.push(Value::Null);
            chain.push(json!(v));
        }
        assert!(matches!(
            run(&json!({ "root": chain })),
            Err(AlgorithmError::TooLarge { .. })
        ));
    }
}
