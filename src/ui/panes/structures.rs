//! Structures pane: renders the data-structure state of the current step
//!
//! Each optional field of [`StepState`] has its own render function that
//! turns it into lines of text. Absent fields render nothing, so an
//! algorithm only shows the structures it populates.
//!
//! Primary highlights and secondary emphasis are indices into whichever
//! structure is shown: array slots, matrix cells (`row * cols + col`), tree
//! slots (heap layout), graph nodes and interval positions.

use super::utils::{border_style, center, clamp_scroll, emphasis_style};
use crate::step::{GraphState, Step, StepState};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Data needed to render the structures pane
pub struct StructuresRenderData<'a> {
    pub step: Option<&'a Step>,
    pub index: usize,
    pub total: usize,
    pub error: Option<String>,
}

fn header(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(DEFAULT_THEME.comment)
            .add_modifier(Modifier::BOLD),
    ))
}

fn cell_style(step: &Step, index: usize) -> Style {
    emphasis_style(step.highlights.contains(&index), step.secondary.contains(&index))
}

/// Index row, value row, and a pointer row when any pointer lands in range
fn array_lines(step: &Step, values: &[i64]) -> Vec<Line<'static>> {
    let texts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    let width = texts
        .iter()
        .map(|t| t.len())
        .chain(std::iter::once(values.len().saturating_sub(1).to_string().len()))
        .max()
        .unwrap_or(1)
        + 2;

    let index_row: Vec<Span> = (0..values.len())
        .map(|i| {
            Span::styled(
                center(&i.to_string(), width + 1),
                Style::default().fg(DEFAULT_THEME.comment),
            )
        })
        .collect();
    let value_row: Vec<Span> = texts
        .iter()
        .enumerate()
        .flat_map(|(i, text)| [Span::styled(center(text, width), cell_style(step, i)), Span::raw(" ")])
        .collect();

    let mut lines = vec![header("array"), Line::from(index_row), Line::from(value_row)];
    if let Some(row) = pointer_row(step, values.len(), width + 1) {
        lines.push(row);
    }
    lines
}

fn pointer_row(step: &Step, len: usize, width: usize) -> Option<Line<'static>> {
    if !step.pointers.values().any(|&at| at < len) {
        return None;
    }
    let spans: Vec<Span> = (0..len)
        .map(|i| {
            let names = step.pointers_at(i).join(",");
            Span::styled(center(&names, width), Style::default().fg(DEFAULT_THEME.pointer))
        })
        .collect();
    Some(Line::from(spans))
}

fn hash_map_lines(entries: &[(String, String)]) -> Vec<Line<'static>> {
    let mut lines = vec![header("hash map")];
    if entries.is_empty() {
        lines.push(Line::from(Span::styled("  {}", Style::default().fg(DEFAULT_THEME.comment))));
    }
    for (key, value) in entries {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key}"), Style::default().fg(DEFAULT_THEME.number)),
            Span::styled(" → ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(value.clone(), Style::default().fg(DEFAULT_THEME.fg)),
        ]));
    }
    lines
}

fn stack_lines(items: &[String]) -> Vec<Line<'static>> {
    let mut spans = vec![Span::styled("  bottom ", Style::default().fg(DEFAULT_THEME.comment))];
    for (i, item) in items.iter().enumerate() {
        let style = if i + 1 == items.len() {
            emphasis_style(true, false)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        spans.push(Span::styled(format!(" {item} "), style));
        spans.push(Span::styled("│", Style::default().fg(DEFAULT_THEME.comment)));
    }
    spans.push(Span::styled(" top", Style::default().fg(DEFAULT_THEME.comment)));
    vec![header("stack"), Line::from(spans)]
}

/// One line per level of a heap-indexed tree
fn tree_lines(step: &Step, slots: &[Option<i64>]) -> Vec<Line<'static>> {
    let mut lines = vec![header("tree")];
    if slots.is_empty() {
        lines.push(Line::from(Span::styled("  (empty)", Style::default().fg(DEFAULT_THEME.comment))));
        return lines;
    }

    let mut level = 0;
    let mut start = 0;
    while start < slots.len() {
        let end = (start * 2 + 1).min(slots.len());
        let mut spans = vec![Span::styled(format!("  L{level}: "), Style::default().fg(DEFAULT_THEME.comment))];
        for (slot, value) in slots.iter().enumerate().take(end).skip(start) {
            match value {
                Some(v) => spans.push(Span::styled(format!(" {v} "), cell_style(step, slot))),
                None => spans.push(Span::styled(" · ", Style::default().fg(DEFAULT_THEME.comment))),
            }
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        level += 1;
        start = end;
    }
    lines
}

fn graph_lines(step: &Step, graph: &GraphState) -> Vec<Line<'static>> {
    let mut lines = vec![header("graph")];
    for (i, node) in graph.nodes.iter().enumerate() {
        let targets: Vec<&str> = graph
            .edges
            .iter()
            .filter(|(from, _)| *from == i)
            .filter_map(|&(_, to)| graph.nodes.get(to).map(String::as_str))
            .collect();
        let mut spans = vec![
            Span::raw("  "),
            Span::styled(format!(" {node} "), cell_style(step, i)),
        ];
        if !targets.is_empty() {
            spans.push(Span::styled(" → ", Style::default().fg(DEFAULT_THEME.comment)));
            spans.push(Span::styled(targets.join(", "), Style::default().fg(DEFAULT_THEME.fg)));
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn matrix_lines(step: &Step, rows: &[Vec<String>]) -> Vec<Line<'static>> {
    let cols = rows.first().map_or(0, |r| r.len());
    let width = rows
        .iter()
        .flatten()
        .map(|c| c.chars().count())
        .max()
        .unwrap_or(1)
        + 2;

    let mut lines = vec![header("grid")];
    for (r, row) in rows.iter().enumerate() {
        let mut spans = vec![Span::raw("  ")];
        for (c, cell) in row.iter().enumerate() {
            spans.push(Span::styled(center(cell, width), cell_style(step, r * cols + c)));
        }
        lines.push(Line::from(spans));
    }
    if rows.len() == 1 {
        if let Some(row) = pointer_row(step, cols, width) {
            let mut spans = vec![Span::raw("  ")];
            spans.extend(row.spans);
            lines.push(Line::from(spans));
        }
    }
    lines
}

/// Intervals as bars on a shared axis
fn interval_lines(step: &Step, intervals: &[(i64, i64)], width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![header("intervals")];
    let (Some(lo), Some(hi)) = (
        intervals.iter().map(|i| i.0).min(),
        intervals.iter().map(|i| i.1).max(),
    ) else {
        lines.push(Line::from(Span::styled("  (none)", Style::default().fg(DEFAULT_THEME.comment))));
        return lines;
    };

    let label_width = intervals
        .iter()
        .map(|(s, e)| format!("[{s}, {e}]").len())
        .max()
        .unwrap_or(0);
    let axis = width.saturating_sub(label_width + 6).max(10);
    // f64 keeps extreme endpoints from overflowing the subtraction
    let span = (hi as f64 - lo as f64).max(1.0);
    let column = |v: i64| (((v as f64 - lo as f64) / span) * (axis - 1) as f64).round() as usize;

    for (i, &(start, end)) in intervals.iter().enumerate() {
        let (from, to) = (column(start), column(end));
        let label = format!("[{start}, {end}]");
        let mut spans = vec![
            Span::styled(format!("  {label:<label_width$} "), cell_style(step, i)),
            Span::raw(" ".repeat(from)),
            Span::styled(
                "█".repeat(to.saturating_sub(from) + 1),
                if step.highlights.contains(&i) {
                    Style::default().fg(DEFAULT_THEME.highlight_bg)
                } else {
                    Style::default().fg(DEFAULT_THEME.primary)
                },
            ),
        ];
        let names = step.pointers_at(i);
        if !names.is_empty() {
            spans.push(Span::styled(
                format!(" ← {}", names.join(",")),
                Style::default().fg(DEFAULT_THEME.pointer),
            ));
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn bit_lines(bits: &[bool]) -> Vec<Line<'static>> {
    let mut spans = vec![Span::raw("  ")];
    for &bit in bits {
        let (text, style) = if bit {
            ("1", Style::default().fg(DEFAULT_THEME.success).add_modifier(Modifier::BOLD))
        } else {
            ("0", Style::default().fg(DEFAULT_THEME.comment))
        };
        spans.push(Span::styled(text, style));
    }
    vec![header("bits"), Line::from(spans)]
}

/// All lines for a step's state, in a fixed structure order
pub fn structure_lines(step: &Step, width: usize) -> Vec<Line<'static>> {
    let StepState {
        array,
        hash_map,
        stack,
        tree,
        graph,
        matrix,
        intervals,
        bits,
        result,
        custom,
    } = &step.state;

    let mut sections: Vec<Vec<Line<'static>>> = Vec::new();
    if let Some(values) = array {
        sections.push(array_lines(step, values));
    }
    if let Some(rows) = matrix {
        sections.push(matrix_lines(step, rows));
    }
    if let Some(slots) = tree {
        sections.push(tree_lines(step, slots));
    }
    if let Some(graph) = graph {
        sections.push(graph_lines(step, graph));
    }
    if let Some(list) = intervals {
        sections.push(interval_lines(step, list, width));
    }
    if let Some(entries) = hash_map {
        sections.push(hash_map_lines(entries));
    }
    if let Some(items) = stack {
        sections.push(stack_lines(items));
    }
    if let Some(bits) = bits {
        sections.push(bit_lines(bits));
    }
    if let Some(value) = custom {
        sections.push(vec![
            header("custom"),
            Line::from(Span::styled(format!("  {value}"), Style::default().fg(DEFAULT_THEME.fg))),
        ]);
    }
    if let Some(result) = result {
        sections.push(vec![Line::from(vec![
            Span::styled("result ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                result.clone(),
                Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(Modifier::BOLD),
            ),
        ])]);
    }

    let mut lines = Vec::new();
    for (i, section) in sections.into_iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.extend(section);
    }
    lines
}

/// Render the structures pane
pub fn render_structures_pane(
    frame: &mut Frame,
    area: Rect,
    data: StructuresRenderData,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = if data.total > 0 {
        format!(" Visualization · step {}/{} ", data.index + 1, data.total)
    } else {
        " Visualization ".to_string()
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let content_width = area.width.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = Vec::new();

    if let Some(error) = &data.error {
        lines.push(Line::from(Span::styled(
            format!("⚠ {error}"),
            Style::default().fg(DEFAULT_THEME.error).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());
    }

    match data.step {
        Some(step) => {
            lines.push(Line::from(Span::styled(
                step.message.clone(),
                Style::default().fg(DEFAULT_THEME.secondary).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::default());
            let body = structure_lines(step, content_width);
            if body.is_empty() {
                lines.push(Line::from(Span::styled(
                    "(nothing to render for this step)",
                    Style::default().fg(DEFAULT_THEME.comment),
                )));
            }
            lines.extend(body);
        }
        None => lines.push(Line::from(Span::styled(
            "(no steps: pick an algorithm from the catalog)",
            Style::default().fg(DEFAULT_THEME.comment),
        ))),
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    clamp_scroll(scroll_offset, lines.len(), visible_height);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((*scroll_offset as u16, 0));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect()
    }

    #[test]
    fn test_absent_fields_render_nothing() {
        let step = Step::new(1, "empty");
        assert!(structure_lines(&step, 80).is_empty());
    }

    #[test]
    fn test_array_with_pointers() {
        let step = Step::new(1, "x")
            .array(&[10, 20, 30])
            .highlight([1])
            .pointer("left", 0)
            .pointer("right", 2);
        let text = plain(&structure_lines(&step, 80));
        assert_eq!(text[0], "array");
        assert!(text[2].contains("10") && text[2].contains("30"));
        assert!(text[3].contains("left") && text[3].contains("right"));
    }

    #[test]
    fn test_result_is_last() {
        let step = Step::new(1, "x").array(&[1]).stack(&["("]).result("true");
        let text = plain(&structure_lines(&step, 80));
        assert_eq!(text.last().map(String::as_str), Some("result true"));
    }

    #[test]
    fn test_tree_levels() {
        let step = Step::new(1, "x").tree(&[Some(3), Some(9), Some(20), None, None, Some(15), Some(7)]);
        let text = plain(&structure_lines(&step, 80));
        assert_eq!(text.len(), 4);
        assert!(text[3].contains("15") && text[3].contains('·'));
    }

    #[test]
    fn test_intervals_render_bars() {
        let step = Step::new(1, "x").intervals(&[(1, 3), (2, 6)]);
        let text = plain(&structure_lines(&step, 60));
        assert!(text[1].contains('█'));
        assert!(text[2].contains("[2, 6]"));
    }

    #[test]
    fn test_intervals_with_extreme_endpoints() {
        let step = Step::new(1, "x").intervals(&[(i64::MIN, 0), (0, i64::MAX)]);
        let text = plain(&structure_lines(&step, 60));
        assert_eq!(text.len(), 3);
        assert!(text[2].contains('█'));
    }

    #[test]
    fn test_graph_adjacency() {
        let graph = GraphState {
            nodes: vec!["0".into(), "1".into()],
            edges: vec![(0, 1)],
        };
        let step = Step::new(1, "x").graph(graph);
        let text = plain(&structure_lines(&step, 80));
        assert!(text[1].contains("→ 1"));
    }
}
