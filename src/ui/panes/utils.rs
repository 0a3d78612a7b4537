//! Shared helpers for pane rendering

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Color, Modifier, Style};

/// Border style for a pane depending on focus
pub(crate) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Clamp a scroll offset so the last page stays full
pub(crate) fn clamp_scroll(offset: &mut usize, total_items: usize, visible_height: usize) {
    if total_items > visible_height {
        *offset = (*offset).min(total_items - visible_height);
    } else {
        *offset = 0;
    }
}

/// Style for an element given its emphasis
pub(crate) fn emphasis_style(primary: bool, secondary: bool) -> Style {
    if primary {
        Style::default()
            .bg(DEFAULT_THEME.highlight_bg)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else if secondary {
        Style::default()
            .bg(DEFAULT_THEME.muted_bg)
            .fg(DEFAULT_THEME.fg)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    }
}

/// Center `text` in `width` columns, truncating if needed
pub(crate) fn center(text: &str, width: usize) -> String {
    let text: String = text.chars().take(width).collect();
    let len = text.chars().count();
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
