//! Built-in algorithm traces
//!
//! Each submodule exposes an `ALGORITHM` constant plus its run function. The
//! run functions read their input from a JSON object and record one [`Step`]
//! per interesting point of the computation.
//!
//! [`Step`]: crate::step::Step

pub mod binary_search;
pub mod container_water;
pub mod counting_bits;
pub mod course_schedule;
pub mod max_depth;
pub mod merge_intervals;
pub mod number_of_islands;
pub mod two_sum;
pub mod valid_parentheses;

use super::{AlgorithmError, Category};
use serde_json::Value;

pub(crate) fn builtin_categories() -> Vec<Category> {
    vec![
        Category {
            id: "arrays-hashing",
            name: "Arrays & Hashing",
            algorithms: vec![two_sum::ALGORITHM],
        },
        Category {
            id: "two-pointers",
            name: "Two Pointers",
            algorithms: vec![container_water::ALGORITHM],
        },
        Category {
            id: "binary-search",
            name: "Binary Search",
            algorithms: vec![binary_search::ALGORITHM],
        },
        Category {
            id: "stack",
            name: "Stack",
            algorithms: vec![valid_parentheses::ALGORITHM],
        },
        Category {
            id: "intervals",
            name: "Intervals",
            algorithms: vec![merge_intervals::ALGORITHM],
        },
        Category {
            id: "trees",
            name: "Trees",
            algorithms: vec![max_depth::ALGORITHM],
        },
        Category {
            id: "graphs",
            name: "Graphs",
            algorithms: vec![number_of_islands::ALGORITHM, course_schedule::ALGORITHM],
        },
        Category {
            id: "bit-manipulation",
            name: "Bit Manipulation",
            algorithms: vec![counting_bits::ALGORITHM],
        },
    ]
}

// ========== Input helpers ==========

pub(crate) fn field<'a>(input: &'a Value, name: &'static str) -> Result<&'a Value, AlgorithmError> {
    input.get(name).ok_or(AlgorithmError::MissingField(name))
}

pub(crate) fn int(input: &Value, name: &'static str) -> Result<i64, AlgorithmError> {
    field(input, name)?
        .as_i64()
        .ok_or(AlgorithmError::InvalidField {
            field: name,
            expected: "an integer",
        })
}

pub(crate) fn string<'a>(input: &'a Value, name: &'static str) -> Result<&'a str, AlgorithmError> {
    field(input, name)?
        .as_str()
        .ok_or(AlgorithmError::InvalidField {
            field: name,
            expected: "a string",
        })
}

pub(crate) fn int_list(input: &Value, name: &'static str) -> Result<Vec<i64>, AlgorithmError> {
    let invalid = AlgorithmError::InvalidField {
        field: name,
        expected: "a list of integers",
    };
    field(input, name)?
        .as_array()
        .ok_or_else(|| invalid.clone())?
        .iter()
        .map(|v| v.as_i64().ok_or_else(|| invalid.clone()))
        .collect()
}

/// List of integers where `null` marks an absent entry
pub(crate) fn nullable_int_list(
    input: &Value,
    name: &'static str,
) -> Result<Vec<Option<i64>>, AlgorithmError> {
    let invalid = AlgorithmError::InvalidField {
        field: name,
        expected: "a list of integers or nulls",
    };
    field(input, name)?
        .as_array()
        .ok_or_else(|| invalid.clone())?
        .iter()
        .map(|v| match v {
            Value::Null => Ok(None),
            other => other.as_i64().map(Some).ok_or_else(|| invalid.clone()),
        })
        .collect()
}

pub(crate) fn pair_list(input: &Value, name: &'static str) -> Result<Vec<(i64, i64)>, AlgorithmError> {
    let invalid = AlgorithmError::InvalidField {
        field: name,
        expected: "a list of [a, b] integer pairs",
    };
    field(input, name)?
        .as_array()
        .ok_or_else(|| invalid.clone())?
        .iter()
        .map(|pair| match pair.as_array().map(|p| p.as_slice()) {
            Some([a, b]) => match (a.as_i64(), b.as_i64()) {
                (Some(a), Some(b)) => Ok((a, b)),
                _ => Err(invalid.clone()),
            },
            _ => Err(invalid.clone()),
        })
        .collect()
}

pub(crate) fn string_list(input: &Value, name: &'static str) -> Result<Vec<String>, AlgorithmError> {
    let invalid = AlgorithmError::InvalidField {
        field: name,
        expected: "a list of strings",
    };
    field(input, name)?
        .as_array()
        .ok_or_else(|| invalid.clone())?
        .iter()
        .map(|v| v.as_str().map(str::to_string).ok_or_else(|| invalid.clone()))
        .collect()
}

pub(crate) fn ensure_limit(name: &'static str, len: usize, limit: usize) -> Result<(), AlgorithmError> {
    if len > limit {
        return Err(AlgorithmError::TooLarge { field: name, limit });
    }
    Ok(())
}

pub(crate) fn format_list<T: ToString>(items: &[T]) -> String {
    let parts: Vec<String> = items.iter().map(|item| item.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_int_list_rejects_mixed_values() {
        let input = json!({"nums": [1, "two", 3]});
        assert_eq!(
            int_list(&input, "nums"),
            Err(AlgorithmError::InvalidField {
                field: "nums",
                expected: "a list of integers"
            })
        );
    }

    #[test]
    fn test_missing_field() {
        let input = json!({});
        assert_eq!(int(&input, "n"), Err(AlgorithmError::MissingField("n")));
    }

    #[test]
    fn test_pair_list() {
        let input = json!({"p": [[1, 2], [3, 4]]});
        assert_eq!(pair_list(&input, "p").unwrap(), vec![(1, 2), (3, 4)]);
        let bad = json!({"p": [[1, 2, 3]]});
        assert!(pair_list(&bad, "p").is_err());
    }

    #[test]
    fn test_nullable_list() {
        let input = json!({"root": [1, null, 2]});
        assert_eq!(
            nullable_int_list(&input, "root").unwrap(),
            vec![Some(1), None, Some(2)]
        );
    }

    #[test]
    fn test_format_list() {
        assert_eq!(format_list(&[1, 2, 3]), "[1, 2, 3]");
        assert_eq!(format_list::<i64>(&[]), "[]");
    }
}
