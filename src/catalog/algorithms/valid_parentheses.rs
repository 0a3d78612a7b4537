//! Valid Parentheses: match closing brackets against a stack

use super::{ensure_limit, string};
use crate::catalog::{Algorithm, AlgorithmError, Difficulty, Language, SourceCode};
use crate::step::Step;
use serde_json::{json, Value};

const PYTHON: &str = "\
def is_valid(s):
    pairs = {')': '(', ']': '[', '}': '{'}
    stack = []
    for ch in s:
        if ch in pairs:
            if not stack or stack[-1] != pairs[ch]:
                return False
            stack.pop()
        else:
            stack.append(ch)
    return not stack";

const JAVA: &str = "\
public boolean isValid(String s) {
    Map<Character, Character> pairs = Map.of(')', '(', ']', '[', '}', '{');
    Deque<Character> stack = new ArrayDeque<>();
    for (char ch : s.toCharArray()) {
        if (pairs.containsKey(ch)) {
            if (stack.isEmpty() || stack.peek() != pairs.get(ch)) {
                return false;
            }
            stack.pop();
        } else {
            stack.push(ch);
        }
    }
    return stack.isEmpty();
}";

pub const ALGORITHM: Algorithm = Algorithm {
    id: "valid-parentheses",
    name: "Valid Parentheses",
    category: "stack",
    difficulty: Difficulty::Easy,
    time_complexity: "O(n)",
    space_complexity: "O(n)",
    pattern: "Stack — Matching Brackets",
    description: "Decide whether every bracket is closed in the right order.",
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
            line_map: &[1, 2, 3, 4, 5, 6, 7, 9, 10, 11, 14],
        },
    ],
    run,
};

const MAX_LEN: usize = 64;

fn default_input() -> Value {
    json!({"s": "({[]})[]"})
}

fn opening_for(ch: char) -> Option<char> {
    match ch {
        ')' => Some('('),
        ']' => Some('['),
        '}' => Some('{'),
        _ => None,
    }
}

pub fn run(input: &Value) -> Result<Vec<Step>, AlgorithmError> {
    let s = string(input, "s")?;
    let chars: Vec<char> = s.chars().collect();
    ensure_limit("s", chars.len(), MAX_LEN)?;
    if chars.iter().any(|c| !"()[]{}".contains(*c)) {
        return Err(AlgorithmError::InvalidField {
            field: "s",
            expected: "made of bracket characters only",
        });
    }

    // The string is shown as a single-row matrix; cell index == char index
    let row = vec![chars.iter().map(|c| c.to_string()).collect::<Vec<_>>()];
    let mut stack: Vec<char> = Vec::new();
    let mut steps = vec![Step::new(3, "Start with an empty stack")
        .matrix(row.clone())
        .stack(&stack)];

    for (i, &ch) in chars.iter().enumerate() {
        match opening_for(ch) {
            Some(open) => {
                if stack.last() != Some(&open) {
                    steps.push(
                        Step::new(7, format!("'{ch}' has no matching '{open}' on top: invalid"))
                            .matrix(row.clone())
                            .stack(&stack)
                            .highlight([i])
                            .pointer("ch", i)
                            .result("false"),
                    );
                    return Ok(steps);
                }
                stack.pop();
                steps.push(
                    Step::new(8, format!("'{ch}' closes '{open}': pop"))
                        .matrix(row.clone())
                        .stack(&stack)
                        .highlight([i])
                        .pointer("ch", i),
                );
            }
            None => {
                stack.push(ch);
                steps.push(
                    Step::new(10, format!("Push opening '{ch}'"))
                        .matrix(row.clone())
                        .stack(&stack)
                        .secondary([i])
                        .pointer("ch", i),
                );
            }
        }
    }

    let valid = stack.is_empty();
    let message = if valid {
        "Every bracket was matched: valid"
    } else {
        "Unclosed brackets remain on the stack: invalid"
    };
    steps.push(
        Step::new(11, message)
            .matrix(row)
            .stack(&stack)
            .result(valid.to_string()),
    );
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(s: &str) -> String {
        let steps = run(&json!({ "s": s })).unwrap();
        steps.last().unwrap().state.result.clone().unwrap()
    }

    #[test]
    fn test_verdicts() {
        assert_eq!(verdict("({[]})[]"), "true");
        assert_eq!(verdict("(]"), "false");
        assert_eq!(verdict("(("), "false");
        assert_eq!(verdict(""), "true");
    }

    #[test]
    fn test_rejects_other_characters() {
        assert!(run(&json!({"s": "(a)"})).is_err());
    }

    #[test]
    fn test_too_long() {
        let s = "()".repeat(40);
        assert_eq!(
            run(&json!({ "s": s })),
            Err(AlgorithmError::TooLarge {
                field: "s",
                limit: MAX_LEN
            })
        );
    }
}
