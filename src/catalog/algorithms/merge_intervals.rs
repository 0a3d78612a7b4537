//! Merge Intervals: sort by start, then sweep

use super::{format_list, pair_list};
use crate::catalog::{Algorithm, AlgorithmError, Difficulty, Language, SourceCode};
use crate::step::Step;
use serde_json::{json, Value};

const PYTHON: &str = "\
def merge(intervals):
    intervals.sort(key=lambda x: x[0])
    merged = []
    for start, end in intervals:
        if merged and start <= merged[-1][1]:
            merged[-1][1] = max(merged[-1][1], end)
        else:
            merged.append([start, end])
    return merged";

const JAVA: &str = "\
public int[][] merge(int[][] intervals) {
    Arrays.sort(intervals, (a, b) -> Integer.compare(a[0], b[0]));
    List<int[]> merged = new ArrayList<>();
    for (int[] cur : intervals) {
        int[] last = merged.isEmpty() ? null : merged.get(merged.size() - 1);
        if (last != null && cur[0] <= last[1]) {
            last[1] = Math.max(last[1], cur[1]);
        } else {
            merged.add(cur);
        }
    }
    return merged.toArray(new int[0][]);
}";

pub const ALGORITHM: Algorithm = Algorithm {
    id: "merge-intervals",
    name: "Merge Intervals",
    category: "intervals",
    difficulty: Difficulty::Medium,
    time_complexity: "O(n log n)",
    space_complexity: "O(n)",
    pattern: "Sorting — Sweep and Merge",
    description: "Merge all overlapping intervals.",
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
            line_map: &[1, 2, 3, 4, 6, 7, 8, 9, 12],
        },
    ],
    run,
};

fn default_input() -> Value {
    json!({"intervals": [[8, 10], [1, 3], [15, 18], [2, 6]]})
}

fn describe(merged: &[(i64, i64)]) -> String {
    let parts: Vec<String> = merged
        .iter()
        .map(|(s, e)| format_list(&[*s, *e]))
        .collect();
    format!("[{}]", parts.join(", "))
}

pub fn run(input: &Value) -> Result<Vec<Step>, AlgorithmError> {
    let mut intervals = pair_list(input, "intervals")?;
    if intervals.iter().any(|(s, e)| s > e) {
        return Err(AlgorithmError::InvalidField {
            field: "intervals",
            expected: "pairs with start <= end",
        });
    }

    let mut steps = vec![Step::new(1, "Unsorted input").intervals(&intervals)];
    intervals.sort_by_key(|&(start, _)| start);
    steps.push(Step::new(2, "Sort by start").intervals(&intervals));

    let mut merged: Vec<(i64, i64)> = Vec::new();
    for (i, &(start, end)) in intervals.iter().enumerate() {
        match merged.last_mut() {
            Some(last) if start <= last.1 => {
                last.1 = last.1.max(end);
                steps.push(
                    Step::new(6, format!("[{start}, {end}] overlaps: extend to {}", last.1))
                        .intervals(&intervals)
                        .highlight([i])
                        .pointer("cur", i)
                        .result(describe(&merged)),
                );
            }
            _ => {
                merged.push((start, end));
                steps.push(
                    Step::new(8, format!("[{start}, {end}] starts a new block"))
                        .intervals(&intervals)
                        .secondary([i])
                        .pointer("cur", i)
                        .result(describe(&merged)),
                );
            }
        }
    }

    steps.push(
        Step::new(9, format!("{} merged interval(s)", merged.len()))
            .intervals(&merged)
            .result(describe(&merged)),
    );
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_merge() {
        let steps = run(&default_input()).unwrap();
        assert_eq!(
            steps.last().unwrap().state.result.as_deref(),
            Some("[[1, 6], [8, 10], [15, 18]]")
        );
    }

    #[test]
    fn test_touching_intervals_merge() {
        let steps = run(&json!({"intervals": [[1, 4], [4, 5]]})).unwrap();
        assert_eq!(steps.last().unwrap().state.intervals, Some(vec![(1, 5)]));
    }

    #[test]
    fn test_inverted_interval_rejected() {
        assert!(run(&json!({"intervals": [[5, 1]]})).is_err());
    }
}
