//! Number of Islands: breadth-first flood fill over a grid

use super::{ensure_limit, string_list};
use crate::catalog::{Algorithm, AlgorithmError, Difficulty, Language, SourceCode};
use crate::step::Step;
use serde_json::{json, Value};
use std::collections::VecDeque;

const PYTHON: &str = "\
def num_islands(grid):
    rows, cols = len(grid), len(grid[0])
    count = 0
    for r in range(rows):
        for c in range(cols):
            if grid[r][c] == '1':
                count += 1
                queue = deque([(r, c)])
                grid[r][c] = '0'
                while queue:
                    cr, cc = queue.popleft()
                    for nr, nc in neighbors(cr, cc):
                        if grid[nr][nc] == '1':
                            grid[nr][nc] = '0'
                            queue.append((nr, nc))
    return count";

const JAVA: &str = "\
public int numIslands(char[][] grid) {
    int rows = grid.length, cols = grid[0].length;
    int count = 0;
    for (int r = 0; r < rows; r++) {
        for (int c = 0; c < cols; c++) {
            if (grid[r][c] == '1') {
                count++;
                Deque<int[]> queue = new ArrayDeque<>(List.of(new int[] {r, c}));
                grid[r][c] = '0';
                while (!queue.isEmpty()) {
                    int[] cell = queue.poll();
                    for (int[] n : neighbors(cell[0], cell[1], rows, cols)) {
                        if (grid[n[0]][n[1]] == '1') {
                            grid[n[0]][n[1]] = '0';
                            queue.add(n);
                        }
                    }
                }
            }
        }
    }
    return count;
}";

pub const ALGORITHM: Algorithm = Algorithm {
    id: "number-of-islands",
    name: "Number of Islands",
    category: "graphs",
    difficulty: Difficulty::Medium,
    time_complexity: "O(m·n)",
    space_complexity: "O(min(m, n))",
    pattern: "Breadth-First Search — Flood Fill",
    description: "Count groups of horizontally or vertically connected land cells.",
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
            line_map: &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 22],
        },
    ],
    run,
};

const MAX_CELLS: usize = 400;

fn default_input() -> Value {
    json!({"grid": ["11000", "11000", "00100", "00011"]})
}

/// Visited land is relabelled with its island letter
fn island_label(count: usize) -> String {
    let letter = (b'A' + ((count - 1) % 26) as u8) as char;
    letter.to_string()
}

pub fn run(input: &Value) -> Result<Vec<Step>, AlgorithmError> {
    let rows_text = string_list(input, "grid")?;
    let mut grid: Vec<Vec<String>> = rows_text
        .iter()
        .map(|row| row.chars().map(|c| c.to_string()).collect())
        .collect();

    let rows = grid.len();
    let cols = grid.first().map_or(0, |r| r.len());
    if grid.iter().any(|r| r.len() != cols) {
        return Err(AlgorithmError::InvalidField {
            field: "grid",
            expected: "rows of equal length",
        });
    }
    if grid.iter().flatten().any(|cell| cell != "0" && cell != "1") {
        return Err(AlgorithmError::InvalidField {
            field: "grid",
            expected: "made of '0' and '1' cells",
        });
    }
    ensure_limit("grid", rows * cols, MAX_CELLS)?;

    let cell = |r: usize, c: usize| r * cols + c;
    let mut steps = vec![Step::new(2, format!("Scan a {rows}x{cols} grid")).matrix(grid.clone())];
    let mut count = 0usize;

    for r in 0..rows {
        for c in 0..cols {
            if grid[r][c] != "1" {
                continue;
            }
            count += 1;
            let label = island_label(count);
            grid[r][c] = label.clone();
            let mut queue = VecDeque::from([(r, c)]);
            steps.push(
                Step::new(9, format!("Land at ({r}, {c}) starts island {label} (count = {count})"))
                    .matrix(grid.clone())
                    .highlight([cell(r, c)])
                    .result(count.to_string()),
            );

            while let Some((cr, cc)) = queue.pop_front() {
                let mut neighbours = Vec::with_capacity(4);
                if cr > 0 {
                    neighbours.push((cr - 1, cc));
                }
                if cr + 1 < rows {
                    neighbours.push((cr + 1, cc));
                }
                if cc > 0 {
                    neighbours.push((cr, cc - 1));
                }
                if cc + 1 < cols {
                    neighbours.push((cr, cc + 1));
                }

                for (nr, nc) in neighbours {
                    if grid[nr][nc] == "1" {
                        grid[nr][nc] = label.clone();
                        queue.push_back((nr, nc));
                    }
                }

                steps.push(
                    Step::new(12, format!("Expand ({cr}, {cc}); {} cell(s) queued", queue.len()))
                        .matrix(grid.clone())
                        .highlight([cell(cr, cc)])
                        .secondary(queue.iter().map(|&(qr, qc)| cell(qr, qc)))
                        .result(count.to_string()),
                );
            }
        }
    }

    steps.push(
        Step::new(16, format!("{count} island(s) found"))
            .matrix(grid)
            .result(count.to_string()),
    );
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_three_islands() {
        let steps = run(&default_input()).unwrap();
        assert_eq!(steps.last().unwrap().state.result.as_deref(), Some("3"));
    }

    #[test]
    fn test_ragged_grid_rejected() {
        assert!(run(&json!({"grid": ["10", "1"]})).is_err());
    }

    #[test]
    fn test_empty_grid() {
        let steps = run(&json!({"grid": []})).unwrap();
        assert_eq!(steps.last().unwrap().state.result.as_deref(), Some("0"));
    }
}
