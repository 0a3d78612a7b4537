//! Catalog pane: filterable list of algorithms with solved marks

use super::utils::{border_style, clamp_scroll};
use crate::catalog::{Algorithm, Difficulty};
use crate::progress::ProgressTracker;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Data needed to render the catalog pane
pub struct CatalogRenderData<'a> {
    pub entries: &'a [&'a Algorithm],
    pub cursor: usize,
    pub selected_id: Option<&'a str>,
    pub progress: &'a ProgressTracker,
    pub query: &'a str,
    pub difficulty: Option<Difficulty>,
    pub editing_query: bool,
}

/// Render the catalog pane
pub fn render_catalog_pane(
    frame: &mut Frame,
    area: Rect,
    data: CatalogRenderData,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let solved = data
        .entries
        .iter()
        .filter(|a| data.progress.is_solved(a.id))
        .count();
    let mut title = format!(" Catalog {}/{} ", solved, data.entries.len());
    if let Some(difficulty) = data.difficulty {
        title.push_str(&format!("· {difficulty} "));
    }
    if data.editing_query || !data.query.is_empty() {
        let cursor = if data.editing_query { "▏" } else { "" };
        title.push_str(&format!("· /{}{} ", data.query, cursor));
    }

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if data.entries.is_empty() {
        let list = List::new(vec![
            ListItem::new("(no matches)").style(Style::default().fg(DEFAULT_THEME.comment))
        ])
        .block(block);
        frame.render_widget(list, area);
        return;
    }

    let content_width = area.width.saturating_sub(2) as usize;
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    // Keep the cursor on screen
    if data.cursor < *scroll_offset {
        *scroll_offset = data.cursor;
    } else if data.cursor >= *scroll_offset + visible_height {
        *scroll_offset = data.cursor + 1 - visible_height;
    }
    clamp_scroll(scroll_offset, data.entries.len(), visible_height);

    let items: Vec<ListItem> = data
        .entries
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(i, algorithm)| {
            let solved = data.progress.is_solved(algorithm.id);
            let selected = data.selected_id == Some(algorithm.id);

            let mark = if solved {
                Span::styled("✓ ", Style::default().fg(DEFAULT_THEME.success))
            } else {
                Span::styled("· ", Style::default().fg(DEFAULT_THEME.comment))
            };
            let badge = algorithm.difficulty.label();
            let name_width = content_width.saturating_sub(2 + badge.len() + 1);
            let name: String = algorithm.name.chars().take(name_width).collect();
            let padding = name_width.saturating_sub(name.chars().count());

            let name_style = if selected {
                Style::default()
                    .fg(DEFAULT_THEME.function)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };

            let line = Line::from(vec![
                mark,
                Span::styled(name, name_style),
                Span::raw(" ".repeat(padding + 1)),
                Span::styled(
                    badge,
                    Style::default().fg(DEFAULT_THEME.difficulty(algorithm.difficulty)),
                ),
            ]);

            let item = ListItem::new(line);
            if i == data.cursor && is_focused {
                item.style(Style::default().bg(DEFAULT_THEME.current_line_bg))
            } else {
                item
            }
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
