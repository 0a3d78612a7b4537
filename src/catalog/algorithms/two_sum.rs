//! Two Sum: single pass with a complement map

use super::{format_list, int, int_list};
use crate::catalog::{Algorithm, AlgorithmError, Difficulty, Language, SourceCode};
use crate::step::Step;
use serde_json::{json, Value};

const PYTHON: &str = "\
def two_sum(nums, target):
    seen = {}
    for i, num in enumerate(nums):
        complement = target - num
        if complement in seen:
            return [seen[complement], i]
        seen[num] = i
    return []";

const JAVA: &str = "\
public int[] twoSum(int[] nums, int target) {
    Map<Integer, Integer> seen = new HashMap<>();
    for (int i = 0; i < nums.length; i++) {
        int complement = target - nums[i];
        if (seen.containsKey(complement)) {
            return new int[] {seen.get(complement), i};
        }
        seen.put(nums[i], i);
    }
    return new int[0];
}";

pub const ALGORITHM: Algorithm = Algorithm {
    id: "two-sum",
    name: "Two Sum",
    category: "arrays-hashing",
    difficulty: Difficulty::Easy,
    time_complexity: "O(n)",
    space_complexity: "O(n)",
    pattern: "Hashing — Complement Lookup",
    description: "Find the indices of two numbers that add up to the target.",
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
            line_map: &[1, 2, 3, 4, 5, 6, 8, 10],
        },
    ],
    run,
};

fn default_input() -> Value {
    json!({"nums": [2, 7, 11, 15], "target": 9})
}

pub fn run(input: &Value) -> Result<Vec<Step>, AlgorithmError> {
    let nums = int_list(input, "nums")?;
    let target = int(input, "target")?;

    let mut steps = Vec::new();
    // value -> index, in insertion order
    let mut seen: Vec<(i64, usize)> = Vec::new();

    steps.push(Step::new(2, "Start with an empty map of seen values").array(&nums));

    for (i, &num) in nums.iter().enumerate() {
        let complement = target
            .checked_sub(num)
            .ok_or(AlgorithmError::Overflow { field: "target" })?;
        steps.push(
            Step::new(4, format!("i = {i}: complement = {target} - {num} = {complement}"))
                .array(&nums)
                .hash_map(&seen)
                .highlight([i])
                .pointer("i", i),
        );

        if let Some(&(_, j)) = seen.iter().find(|(value, _)| *value == complement) {
            steps.push(
                Step::new(6, format!("{complement} was seen at index {j}: pair found"))
                    .array(&nums)
                    .hash_map(&seen)
                    .highlight([j, i])
                    .pointer("i", i)
                    .result(format_list(&[j, i])),
            );
            return Ok(steps);
        }

        match seen.iter_mut().find(|(value, _)| *value == num) {
            Some(entry) => entry.1 = i,
            None => seen.push((num, i)),
        }
        steps.push(
            Step::new(7, format!("Remember {num} at index {i}"))
                .array(&nums)
                .hash_map(&seen)
                .secondary([i])
                .pointer("i", i),
        );
    }

    steps.push(
        Step::new(8, "No pair adds up to the target")
            .array(&nums)
            .hash_map(&seen)
            .result("[]"),
    );
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_finds_pair() {
        let steps = run(&default_input()).unwrap();
        let last = steps.last().unwrap();
        assert_eq!(last.state.result.as_deref(), Some("[0, 1]"));
        assert_eq!(last.code_line, 6);
    }

    #[test]
    fn test_no_pair() {
        let steps = run(&json!({"nums": [1, 2], "target": 10})).unwrap();
        let last = steps.last().unwrap();
        assert_eq!(last.state.result.as_deref(), Some("[]"));
        assert_eq!(last.code_line, 8);
    }

    #[test]
    fn test_empty_nums_still_yields_steps() {
        let steps = run(&json!({"nums": [], "target": 1})).unwrap();
        assert_eq!(steps.len(), 2);
    }

    #[test]
    fn test_overflowing_complement_rejected() {
        let err = run(&json!({"nums": [1, 2], "target": i64::MIN})).unwrap_err();
        assert_eq!(err, AlgorithmError::Overflow { field: "target" });

        let err = run(&json!({"nums": [-1], "target": i64::MAX})).unwrap_err();
        assert_eq!(err, AlgorithmError::Overflow { field: "target" });
    }
}
