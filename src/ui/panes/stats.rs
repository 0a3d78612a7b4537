//! Statistics pane: solved counts per pattern and per difficulty

use super::utils::border_style;
use crate::patterns::{DifficultyStat, PatternStat};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Data needed to render the statistics pane
pub struct StatsRenderData<'a> {
    pub patterns: &'a [PatternStat],
    pub difficulties: &'a [DifficultyStat],
    /// Pattern of the selected algorithm, emphasized in the list
    pub current_pattern: Option<&'a str>,
}

/// Text progress bar, `width` cells wide
pub fn progress_bar(solved: usize, total: usize, width: usize) -> String {
    let filled = if total == 0 {
        0
    } else {
        (solved * width + total / 2) / total
    };
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Render the statistics pane
pub fn render_stats_pane(frame: &mut Frame, area: Rect, data: StatsRenderData, is_focused: bool) {
    let block = Block::default()
        .title(" Progress ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let content_width = area.width.saturating_sub(2) as usize;
    let bar_width = 8;
    let label_width = content_width.saturating_sub(bar_width + 8).max(4);

    let mut lines = Vec::new();
    for stat in data.difficulties {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<label_width$}", stat.difficulty),
                Style::default().fg(DEFAULT_THEME.fg),
            ),
            Span::styled(
                progress_bar(stat.solved, stat.total, bar_width),
                Style::default().fg(DEFAULT_THEME.success),
            ),
            Span::styled(
                format!(" {}/{}", stat.solved, stat.total),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ]));
    }
    lines.push(Line::default());

    for stat in data.patterns {
        let name: String = stat.name.chars().take(label_width).collect();
        let name_style = if data.current_pattern == Some(stat.name.as_str()) {
            Style::default()
                .fg(DEFAULT_THEME.function)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{name:<label_width$}"), name_style),
            Span::styled(
                progress_bar(stat.solved, stat.total, bar_width),
                Style::default().fg(DEFAULT_THEME.primary),
            ),
            Span::styled(
                format!(" {}/{}", stat.solved, stat.total),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0, 4, 4), "░░░░");
        assert_eq!(progress_bar(2, 4, 4), "██░░");
        assert_eq!(progress_bar(4, 4, 4), "████");
        assert_eq!(progress_bar(0, 0, 3), "░░░");
    }
}
