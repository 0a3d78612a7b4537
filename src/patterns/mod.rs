//! Pattern grouping and solved statistics
//!
//! Everything here is a pure function of the catalog and a solved-id
//! predicate; nothing is cached.

use crate::catalog::{Algorithm, Catalog, Difficulty};
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Separator between a pattern name and its refinement
pub const PATTERN_DELIMITER: &str = " — ";

/// Leading segment of a pattern label, trimmed
pub fn pattern_label(pattern: &str) -> &str {
    match pattern.split_once(PATTERN_DELIMITER) {
        Some((head, _)) => head.trim(),
        None => pattern.trim(),
    }
}

/// Pattern name of `algorithm`
pub fn pattern_name(algorithm: &Algorithm) -> &str {
    pattern_label(algorithm.pattern)
}

/// Algorithms that share one pattern name, in catalog order
#[derive(Debug, Clone)]
pub struct PatternGroup<'a> {
    pub name: &'a str,
    pub algorithms: Vec<&'a Algorithm>,
}

/// Group the catalog by pattern name
///
/// Groups appear in the order their first member appears in the catalog.
pub fn group_by_pattern(catalog: &Catalog) -> Vec<PatternGroup<'_>> {
    let mut groups: Vec<PatternGroup<'_>> = Vec::new();
    let mut positions: FxHashMap<&str, usize> = FxHashMap::default();

    for algorithm in catalog.algorithms() {
        let name = pattern_name(algorithm);
        match positions.get(name) {
            Some(&at) => groups[at].algorithms.push(algorithm),
            None => {
                positions.insert(name, groups.len());
                groups.push(PatternGroup {
                    name,
                    algorithms: vec![algorithm],
                });
            }
        }
    }
    groups
}

/// Totals for one pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternStat {
    pub name: String,
    pub total: usize,
    pub solved: usize,
}

/// Per-pattern totals, largest groups first (ties keep group order)
pub fn pattern_stats<F>(catalog: &Catalog, is_solved: F) -> Vec<PatternStat>
where
    F: Fn(&str) -> bool,
{
    let mut stats: Vec<PatternStat> = group_by_pattern(catalog)
        .into_iter()
        .map(|group| PatternStat {
            name: group.name.to_string(),
            total: group.algorithms.len(),
            solved: group.algorithms.iter().filter(|a| is_solved(a.id)).count(),
        })
        .collect();
    stats.sort_by(|a, b| b.total.cmp(&a.total));
    stats
}

/// Totals for one difficulty
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DifficultyStat {
    pub difficulty: &'static str,
    pub total: usize,
    pub solved: usize,
}

/// Totals per difficulty in Easy, Medium, Hard order
pub fn difficulty_stats<F>(catalog: &Catalog, is_solved: F) -> Vec<DifficultyStat>
where
    F: Fn(&str) -> bool,
{
    Difficulty::ALL
        .into_iter()
        .map(|difficulty| {
            let members: Vec<&Algorithm> = catalog
                .algorithms()
                .filter(|a| a.difficulty == difficulty)
                .collect();
            DifficultyStat {
                difficulty: difficulty.label(),
                total: members.len(),
                solved: members.iter().filter(|a| is_solved(a.id)).count(),
            }
        })
        .collect()
}
