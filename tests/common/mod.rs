// Shared fixtures for the integration tests

#![allow(dead_code)]

use algoscope::catalog::{Algorithm, AlgorithmError, Category, Catalog};
use algoscope::step::Step;
use serde_json::{json, Value};

/// Produces `n` steps (default 5) on lines 1..=n
pub fn counter(input: &Value) -> Result<Vec<Step>, AlgorithmError> {
    let n = match input.get("n") {
        None => 5,
        Some(v) => v.as_u64().ok_or(AlgorithmError::InvalidField {
            field: "n",
            expected: "a non-negative integer",
        })? as usize,
    };
    Ok((0..n.max(1))
        .map(|i| Step::new(i + 1, format!("tick {i}")).array(&[i as i64]))
        .collect())
}

fn five() -> Value {
    json!({"n": 5})
}

pub fn counter_algorithm() -> Algorithm {
    Algorithm {
        default_input: five,
        ..Algorithm::new("counter", "Counter", "Counting — Linear", counter)
    }
}

pub fn counter_catalog() -> Catalog {
    Catalog::new(vec![Category {
        id: "test",
        name: "Test",
        algorithms: vec![counter_algorithm()],
    }])
}
