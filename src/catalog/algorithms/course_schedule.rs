//! Course Schedule: Kahn's topological sort

use super::{ensure_limit, format_list, int, pair_list};
use crate::catalog::{Algorithm, AlgorithmError, Difficulty, Language, SourceCode};
use crate::step::{GraphState, Step};
use serde_json::{json, Value};
use std::collections::VecDeque;

const PYTHON: &str = "\
def can_finish(num_courses, prerequisites):
    graph = [[] for _ in range(num_courses)]
    indegree = [0] * num_courses
    for course, pre in prerequisites:
        graph[pre].append(course)
        indegree[course] += 1
    queue = deque(i for i in range(num_courses) if indegree[i] == 0)
    taken = 0
    while queue:
        node = queue.popleft()
        taken += 1
        for nxt in graph[node]:
            indegree[nxt] -= 1
            if indegree[nxt] == 0:
                queue.append(nxt)
    return taken == num_courses";

const JAVA: &str = "\
public boolean canFinish(int numCourses, int[][] prerequisites) {
    List<List<Integer>> graph = new ArrayList<>();
    int[] indegree = new int[numCourses];
    for (int i = 0; i < numCourses; i++) graph.add(new ArrayList<>());
    for (int[] p : prerequisites) {
        graph.get(p[1]).add(p[0]);
        indegree[p[0]]++;
    }
    Deque<Integer> queue = new ArrayDeque<>();
    for (int i = 0; i < numCourses; i++) if (indegree[i] == 0) queue.add(i);
    int taken = 0;
    while (!queue.isEmpty()) {
        int node = queue.poll();
        taken++;
        for (int next : graph.get(node)) {
            if (--indegree[next] == 0) {
                queue.add(next);
            }
        }
    }
    return taken == numCourses;
}";

pub const ALGORITHM: Algorithm = Algorithm {
    id: "course-schedule",
    name: "Course Schedule",
    category: "graphs",
    difficulty: Difficulty::Medium,
    time_complexity: "O(V + E)",
    space_complexity: "O(V + E)",
    pattern: "Topological Sort — Kahn's Algorithm",
    description: "Decide whether all courses can be finished given their prerequisites.",
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
            line_map: &[1, 2, 3, 5, 6, 7, 10, 11, 12, 13, 14, 15, 16, 16, 17, 21],
        },
    ],
    run,
};

const MAX_COURSES: usize = 26;

fn default_input() -> Value {
    json!({"num_courses": 5, "prerequisites": [[1, 0], [2, 0], [3, 1], [3, 2], [4, 3]]})
}

pub fn run(input: &Value) -> Result<Vec<Step>, AlgorithmError> {
    let num_courses = int(input, "num_courses")?;
    let prerequisites = pair_list(input, "prerequisites")?;
    if num_courses < 0 {
        return Err(AlgorithmError::InvalidField {
            field: "num_courses",
            expected: "a non-negative integer",
        });
    }
    let n = usize::try_from(num_courses).unwrap_or(usize::MAX);
    ensure_limit("num_courses", n, MAX_COURSES)?;
    let in_range = |v: i64| usize::try_from(v).map_or(false, |v| v < n);
    if prerequisites.iter().any(|&(c, p)| !in_range(c) || !in_range(p)) {
        return Err(AlgorithmError::InvalidField {
            field: "prerequisites",
            expected: "pairs of course ids below num_courses",
        });
    }

    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut indegree = vec![0i64; n];
    let mut edges = Vec::with_capacity(prerequisites.len());
    for &(course, pre) in &prerequisites {
        let (course, pre) = (course as usize, pre as usize);
        adjacency[pre].push(course);
        indegree[course] += 1;
        edges.push((pre, course));
    }
    let graph = GraphState {
        nodes: (0..n).map(|i| i.to_string()).collect(),
        edges,
    };

    let mut steps = vec![Step::new(6, "Build the graph and count incoming edges")
        .graph(graph.clone())
        .array(&indegree)];

    let mut queue: VecDeque<usize> = (0..n).filter(|&i| indegree[i] == 0).collect();
    let mut order = Vec::new();
    steps.push(
        Step::new(7, format!("Courses with no prerequisites: {}", format_list(queue.make_contiguous())))
            .graph(graph.clone())
            .array(&indegree)
            .secondary(queue.iter().copied()),
    );

    while let Some(node) = queue.pop_front() {
        order.push(node);
        for &next in &adjacency[node] {
            indegree[next] -= 1;
            if indegree[next] == 0 {
                queue.push_back(next);
            }
        }
        steps.push(
            Step::new(
                11,
                format!("Take course {node}; order so far {}", format_list(&order)),
            )
            .graph(graph.clone())
            .array(&indegree)
            .highlight([node])
            .secondary(queue.iter().copied())
            .pointer("node", node)
            .result(format_list(&order)),
        );
    }

    let finished = order.len() == n;
    let message = if finished {
        format!("All {n} course(s) can be taken")
    } else {
        format!("Only {} of {n} course(s) can be taken: a cycle blocks the rest", order.len())
    };
    steps.push(
        Step::new(16, message)
            .graph(graph)
            .array(&indegree)
            .result(finished.to_string()),
    );
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_finishable() {
        let steps = run(&default_input()).unwrap();
        assert_eq!(steps.last().unwrap().state.result.as_deref(), Some("true"));
    }

    #[test]
    fn test_cycle_detected() {
        let steps = run(&json!({"num_courses": 2, "prerequisites": [[0, 1], [1, 0]]})).unwrap();
        assert_eq!(steps.last().unwrap().state.result.as_deref(), Some("false"));
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(run(&json!({"num_courses": 2, "prerequisites": [[0, 5]]})).is_err());
    }

    #[test]
    fn test_huge_ids_rejected() {
        let err = run(&json!({"num_courses": i64::MAX, "prerequisites": []})).unwrap_err();
        assert!(matches!(err, AlgorithmError::TooLarge { field: "num_courses", .. }));

        let huge = 1i64 << 32;
        assert!(run(&json!({"num_courses": 2, "prerequisites": [[huge, 0]]})).is_err());
        assert!(run(&json!({"num_courses": 2, "prerequisites": [[-1, 0]]})).is_err());
    }
}
