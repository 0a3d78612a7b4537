//! Static algorithm catalog
//!
//! The catalog is an ordered list of [`Category`]s, each holding an ordered
//! list of [`Algorithm`]s. It is built once per process ([`Catalog::builtin`])
//! and is read-only afterwards.
//!
//! Every algorithm is a pure function from a JSON input value to a list of
//! [`Step`]s. [`Algorithm::trace`] wraps that function and enforces the
//! non-empty sequence contract.

pub mod algorithms;

use crate::step::{Step, StepSequence};
use serde_json::Value;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

/// Failure of an algorithm run on a given input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlgorithmError {
    #[error("missing input field `{0}`")]
    MissingField(&'static str),

    #[error("input field `{field}` must be {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },

    #[error("input field `{field}` exceeds the limit of {limit}")]
    TooLarge { field: &'static str, limit: usize },

    #[error("input field `{field}` holds values too large to compute with")]
    Overflow { field: &'static str },

    #[error("algorithm `{0}` produced no steps")]
    EmptyTrace(String),
}

/// Problem difficulty, ordered Easy < Medium < Hard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn parse(text: &str) -> Option<Self> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(text.trim()))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Source language variant shown in the code pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Python,
    Java,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Python, Language::Java];

    pub fn label(self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::Java => "Java",
        }
    }

    /// Cycle to the next language
    pub fn next(self) -> Self {
        match self {
            Language::Python => Language::Java,
            Language::Java => Language::Python,
        }
    }

    pub fn parse(text: &str) -> Option<Self> {
        Language::ALL
            .into_iter()
            .find(|l| l.label().eq_ignore_ascii_case(text.trim()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Source text for one language variant
///
/// Steps always carry the line number of the Python reference. `line_map`
/// translates reference line `n` to `line_map[n - 1]` in this variant; an
/// empty map means the lines already coincide.
#[derive(Debug, Clone, Copy)]
pub struct SourceCode {
    pub language: Language,
    pub text: &'static str,
    pub line_map: &'static [usize],
}

impl SourceCode {
    pub fn map_line(&self, reference_line: usize) -> usize {
        if self.line_map.is_empty() || reference_line == 0 {
            return reference_line;
        }
        self.line_map
            .get(reference_line - 1)
            .copied()
            .unwrap_or(reference_line)
    }
}

/// Signature every algorithm implements
pub type RunFn = fn(&Value) -> Result<Vec<Step>, AlgorithmError>;

/// A catalog entry
#[derive(Debug, Clone, Copy)]
pub struct Algorithm {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub difficulty: Difficulty,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    /// Pattern label, optionally followed by `" — "` and a refinement
    pub pattern: &'static str,
    pub description: &'static str,
    pub default_input: fn() -> Value,
    pub sources: &'static [SourceCode],
    pub run: RunFn,
}

fn null_input() -> Value {
    Value::Null
}

impl Algorithm {
    /// Minimal entry with the remaining attributes left blank
    pub const fn new(id: &'static str, name: &'static str, pattern: &'static str, run: RunFn) -> Self {
        Algorithm {
            id,
            name,
            category: "",
            difficulty: Difficulty::Easy,
            time_complexity: "",
            space_complexity: "",
            pattern,
            description: "",
            default_input: null_input,
            sources: &[],
            run,
        }
    }

    pub fn default_input(&self) -> Value {
        (self.default_input)()
    }

    /// Run the algorithm and wrap its output as a [`StepSequence`]
    pub fn trace(&self, input: &Value) -> Result<StepSequence, AlgorithmError> {
        let steps = (self.run)(input)?;
        StepSequence::new(steps).ok_or_else(|| AlgorithmError::EmptyTrace(self.id.to_string()))
    }

    pub fn source(&self, language: Language) -> Option<&SourceCode> {
        self.sources.iter().find(|s| s.language == language)
    }
}

/// A named group of algorithms
#[derive(Debug, Clone)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub algorithms: Vec<Algorithm>,
}

/// Ordered list of categories
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Catalog { categories }
    }

    /// Process-wide built-in catalog
    pub fn builtin() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| Catalog::new(algorithms::builtin_categories()))
    }

    /// All algorithms in category order
    pub fn algorithms(&self) -> impl Iterator<Item = &Algorithm> {
        self.categories.iter().flat_map(|c| c.algorithms.iter())
    }

    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.algorithms.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find(&self, id: &str) -> Option<&Algorithm> {
        self.algorithms().find(|a| a.id == id)
    }

    pub fn category_name(&self, id: &str) -> Option<&'static str> {
        self.categories.iter().find(|c| c.id == id).map(|c| c.name)
    }

    /// Case-insensitive search over id, name and pattern, optionally
    /// restricted to one difficulty
    pub fn filter(&self, query: &str, difficulty: Option<Difficulty>) -> Vec<&Algorithm> {
        let needle = query.trim().to_lowercase();
        self.algorithms()
            .filter(|a| difficulty.map_or(true, |d| a.difficulty == d))
            .filter(|a| {
                needle.is_empty()
                    || a.id.to_lowercase().contains(&needle)
                    || a.name.to_lowercase().contains(&needle)
                    || a.pattern.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_ids_unique() {
        let catalog = Catalog::builtin();
        let mut ids: Vec<&str> = catalog.algorithms().map(|a| a.id).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
        assert!(total >= 8);
    }

    #[test]
    fn test_every_default_input_traces() {
        for algorithm in Catalog::builtin().algorithms() {
            let seq = algorithm
                .trace(&algorithm.default_input())
                .unwrap_or_else(|e| panic!("{} failed: {}", algorithm.id, e));
            assert!(seq.len() > 1, "{} produced a trivial trace", algorithm.id);
        }
    }

    #[test]
    fn test_code_lines_stay_inside_sources() {
        for algorithm in Catalog::builtin().algorithms() {
            let seq = algorithm.trace(&algorithm.default_input()).unwrap();
            for source in algorithm.sources {
                let line_count = source.text.lines().count();
                for step in &seq {
                    let line = source.map_line(step.code_line);
                    assert!(
                        line >= 1 && line <= line_count,
                        "{} {}: line {} out of range",
                        algorithm.id,
                        source.language,
                        line
                    );
                }
            }
        }
    }

    #[test]
    fn test_every_algorithm_has_both_languages() {
        for algorithm in Catalog::builtin().algorithms() {
            for language in Language::ALL {
                assert!(algorithm.source(language).is_some(), "{} lacks {}", algorithm.id, language);
            }
        }
    }

    #[test]
    fn test_filter_by_query_and_difficulty() {
        let catalog = Catalog::builtin();
        let hits = catalog.filter("two", None);
        assert!(hits.iter().any(|a| a.id == "two-sum"));

        let medium = catalog.filter("", Some(Difficulty::Medium));
        assert!(!medium.is_empty());
        assert!(medium.iter().all(|a| a.difficulty == Difficulty::Medium));
    }

    #[test]
    fn test_line_map_falls_back_to_identity() {
        let source = SourceCode {
            language: Language::Java,
            text: "a\nb\nc",
            line_map: &[1, 3],
        };
        assert_eq!(source.map_line(2), 3);
        assert_eq!(source.map_line(3), 3);
        assert_eq!(source.map_line(0), 0);
    }

    #[test]
    fn test_difficulty_ordering_and_parse() {
        assert!(Difficulty::Easy < Difficulty::Medium);
        assert!(Difficulty::Medium < Difficulty::Hard);
        assert_eq!(Difficulty::parse("hard"), Some(Difficulty::Hard));
        assert_eq!(Language::parse("JAVA"), Some(Language::Java));
        assert_eq!(Language::Python.next(), Language::Java);
    }
}
