//! Counting Bits: reuse the count of `i >> 1`

use super::{ensure_limit, format_list, int};
use crate::catalog::{Algorithm, AlgorithmError, Difficulty, Language, SourceCode};
use crate::step::Step;
use serde_json::{json, Value};

const PYTHON: &str = "\
def count_bits(n):
    ans = [0] * (n + 1)
    for i in range(1, n + 1):
        ans[i] = ans[i >> 1] + (i & 1)
    return ans";

const JAVA: &str = "\
public int[] countBits(int n) {
    int[] ans = new int[n + 1];
    for (int i = 1; i <= n; i++) {
        ans[i] = ans[i >> 1] + (i & 1);
    }
    return ans;
}";

pub const ALGORITHM: Algorithm = Algorithm {
    id: "counting-bits",
    name: "Counting Bits",
    category: "bit-manipulation",
    difficulty: Difficulty::Easy,
    time_complexity: "O(n)",
    space_complexity: "O(n)",
    pattern: "Dynamic Programming — Bit Recurrence",
    description: "Count the set bits of every number from 0 to n.",
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
            line_map: &[1, 2, 3, 4, 6],
        },
    ],
    run,
};

const MAX_N: usize = 64;
const BIT_WIDTH: u32 = 8;

fn default_input() -> Value {
    json!({"n": 5})
}

/// Most significant bit first
fn bits_of(value: usize) -> Vec<bool> {
    (0..BIT_WIDTH).rev().map(|b| (value >> b) & 1 == 1).collect()
}

pub fn run(input: &Value) -> Result<Vec<Step>, AlgorithmError> {
    let n = int(input, "n")?;
    if n < 0 {
        return Err(AlgorithmError::InvalidField {
            field: "n",
            expected: "a non-negative integer",
        });
    }
    let n = usize::try_from(n).unwrap_or(usize::MAX);
    ensure_limit("n", n, MAX_N)?;

    let mut ans = vec![0i64; n + 1];
    let mut steps = vec![Step::new(2, format!("ans = [0] * {}", n + 1)).array(&ans)];

    for i in 1..=n {
        ans[i] = ans[i >> 1] + (i & 1) as i64;
        steps.push(
            Step::new(
                4,
                format!("ans[{i}] = ans[{}] + {} = {}", i >> 1, i & 1, ans[i]),
            )
            .array(&ans)
            .bits(bits_of(i))
            .highlight([i])
            .secondary([i >> 1])
            .pointer("i", i),
        );
    }

    steps.push(Step::new(5, "Done").array(&ans).result(format_list(&ans)));
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_counts() {
        let steps = run(&default_input()).unwrap();
        assert_eq!(
            steps.last().unwrap().state.result.as_deref(),
            Some("[0, 1, 1, 2, 1, 2]")
        );
    }

    #[test]
    fn test_bits_msb_first() {
        assert_eq!(
            bits_of(5),
            vec![false, false, false, false, false, true, false, true]
        );
    }

    #[test]
    fn test_negative_rejected() {
        assert!(run(&json!({"n": -1})).is_err());
    }

    #[test]
    fn test_huge_n_rejected() {
        let err = run(&json!({"n": i64::MAX})).unwrap_err();
        assert_eq!(err, AlgorithmError::TooLarge { field: "n", limit: MAX_N });
    }
}
