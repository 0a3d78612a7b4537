//! Binary search over a sorted array

use super::{int, int_list};
use crate::catalog::{Algorithm, AlgorithmError, Difficulty, Language, SourceCode};
use crate::step::Step;
use serde_json::{json, Value};

const PYTHON: &str = "\
def search(nums, target):
    lo, hi = 0, len(nums) - 1
    while lo <= hi:
        mid = (lo + hi) // 2
        if nums[mid] == target:
            return mid
        elif nums[mid] < target:
            lo = mid + 1
        else:
            hi = mid - 1
    return -1";

const JAVA: &str = "\
public int search(int[] nums, int target) {
    int lo = 0, hi = nums.length - 1;
    while (lo <= hi) {
        int mid = lo + (hi - lo) / 2;
        if (nums[mid] == target) {
            return mid;
        } else if (nums[mid] < target) {
            lo = mid + 1;
        } else {
            hi = mid - 1;
        }
    }
    return -1;
}";

pub const ALGORITHM: Algorithm = Algorithm {
    id: "binary-search",
    name: "Binary Search",
    category: "binary-search",
    difficulty: Difficulty::Easy,
    time_complexity: "O(log n)",
    space_complexity: "O(1)",
    pattern: "Binary Search — Sorted Array",
    description: "Locate the target in a sorted array by halving the window.",
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
            line_map: &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 13],
        },
    ],
    run,
};

fn default_input() -> Value {
    json!({"nums": [-1, 0, 3, 5, 9, 12], "target": 9})
}

fn window(nums: &[i64], lo: i64, hi: i64, line: usize, message: String) -> Step {
    let mut step = Step::new(line, message).array(nums);
    if lo <= hi {
        step = step.secondary(lo as usize..=hi as usize);
    }
    if (lo as usize) < nums.len() {
        step = step.pointer("lo", lo as usize);
    }
    if hi >= 0 {
        step = step.pointer("hi", hi as usize);
    }
    step
}

pub fn run(input: &Value) -> Result<Vec<Step>, AlgorithmError> {
    let nums = int_list(input, "nums")?;
    let target = int(input, "target")?;
    if nums.windows(2).any(|w| w[0] > w[1]) {
        return Err(AlgorithmError::InvalidField {
            field: "nums",
            expected: "sorted in ascending order",
        });
    }

    let mut steps = Vec::new();
    let (mut lo, mut hi) = (0i64, nums.len() as i64 - 1);
    steps.push(window(&nums, lo, hi, 2, format!("Search the whole array for {target}")));

    while lo <= hi {
        let mid = (lo + hi) / 2;
        let m = mid as usize;
        steps.push(
            window(&nums, lo, hi, 4, format!("mid = ({lo} + {hi}) / 2 = {mid}"))
                .highlight([m])
                .pointer("mid", m),
        );

        if nums[m] == target {
            steps.push(
                window(&nums, lo, hi, 6, format!("nums[{mid}] = {target}: found"))
                    .highlight([m])
                    .pointer("mid", m)
                    .result(mid.to_string()),
            );
            return Ok(steps);
        } else if nums[m] < target {
            lo = mid + 1;
            steps.push(window(
                &nums,
                lo,
                hi,
                8,
                format!("{} < {target}: discard the left half", nums[m]),
            ));
        } else {
            hi = mid - 1;
            steps.push(window(
                &nums,
                lo,
                hi,
                10,
                format!("{} > {target}: discard the right half", nums[m]),
            ));
        }
    }

    steps.push(
        Step::new(11, format!("{target} is not present"))
            .array(&nums)
            .result("-1"),
    );
    Ok(steps)
}
