//! Container With Most Water: two pointers closing in from both ends

use super::int_list;
use crate::catalog::{Algorithm, AlgorithmError, Difficulty, Language, SourceCode};
use crate::step::Step;
use serde_json::{json, Value};

const PYTHON: &str = "\
def max_area(height):
    left, right = 0, len(height) - 1
    best = 0
    while left < right:
        area = (right - left) * min(height[left], height[right])
        best = max(best, area)
        if height[left] < height[right]:
            left += 1
        else:
            right -= 1
    return best";

const JAVA: &str = "\
public int maxArea(int[] height) {
    int left = 0, right = height.length - 1;
    int best = 0;
    while (left < right) {
        int area = (right - left) * Math.min(height[left], height[right]);
        best = Math.max(best, area);
        if (height[left] < height[right]) {
            left++;
        } else {
            right--;
        }
    }
    return best;
}";

pub const ALGORITHM: Algorithm = Algorithm {
    id: "container-with-most-water",
    name: "Container With Most Water",
    category: "two-pointers",
    difficulty: Difficulty::Medium,
    time_complexity: "O(n)",
    space_complexity: "O(1)",
    pattern: "Two Pointers — Opposite Ends",
    description: "Pick two lines that hold the most water between them.",
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
    json!({"height": [1, 8, 6, 2, 5, 4, 8, 3, 7]})
}

pub fn run(input: &Value) -> Result<Vec<Step>, AlgorithmError> {
    let height = int_list(input, "height")?;
    let mut steps = Vec::new();

    if height.len() < 2 {
        steps.push(Step::new(2, "Fewer than two lines: nothing can hold water").array(&height));
        steps.push(Step::new(11, "best = 0").array(&height).result("0"));
        return Ok(steps);
    }

    let (mut left, mut right) = (0usize, height.len() - 1);
    let mut best = 0i64;
    steps.push(
        Step::new(2, "Place pointers at both ends")
            .array(&height)
            .pointer("left", left)
            .pointer("right", right),
    );

    while left < right {
        let area = i64::try_from(right - left)
            .ok()
            .and_then(|width| width.checked_mul(height[left].min(height[right])))
            .ok_or(AlgorithmError::Overflow { field: "height" })?;
        best = best.max(area);
        steps.push(
            Step::new(
                6,
                format!(
                    "area = ({right} - {left}) * min({}, {}) = {area}, best = {best}",
                    height[left], height[right]
                ),
            )
            .array(&height)
            .highlight([left, right])
            .secondary(left + 1..right)
            .pointer("left", left)
            .pointer("right", right)
            .result(best.to_string()),
        );

        if height[left] < height[right] {
            left += 1;
            steps.push(
                Step::new(8, "Left line is shorter: move left inward")
                    .array(&height)
                    .highlight([left])
                    .pointer("left", left)
                    .pointer("right", right)
                    .result(best.to_string()),
            );
        } else {
            right -= 1;
            steps.push(
                Step::new(10, "Right line is not taller: move right inward")
                    .array(&height)
                    .highlight([right])
                    .pointer("left", left)
                    .pointer("right", right)
                    .result(best.to_string()),
            );
        }
    }

    steps.push(
        Step::new(11, format!("Pointers met: the most water is {best}"))
            .array(&height)
            .result(best.to_string()),
    );
    Ok(steps)
}
