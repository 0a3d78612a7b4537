//! Source code pane rendering with syntax highlighting
//!
//! This module renders the reference implementation of the selected
//! algorithm and marks the line that corresponds to the current step.
//!
//! # Features
//!
//! - Keyword highlighting for Python and Java
//! - Current line highlighting with arrow indicator
//! - Scroll state that keeps the current line at a stable row
//! - Line numbering
//!
//! # Rendering
//!
//! The pane uses a simple character-by-character tokenizer to apply syntax
//! highlighting styles without requiring a full lexer.

use crate::catalog::Language;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::utils::border_style;

/// Tokenize one line of source into styled spans
pub fn highlight_source_line(line: &str, language: Language) -> Line<'_> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        // Comments run to end of line
        let starts_comment = match language {
            Language::Python => c == '#',
            Language::Java => c == '/' && chars.get(i + 1) == Some(&'/'),
        };
        if starts_comment {
            if !current_word.is_empty() {
                spans.push(Span::raw(std::mem::take(&mut current_word)));
            }
            let rest: String = chars[i..].iter().collect();
            spans.push(Span::styled(rest, Style::default().fg(DEFAULT_THEME.comment)));
            break;
        }

        // Strings and char literals
        if c == '"' || c == '\'' {
            if !current_word.is_empty() {
                spans.push(Span::raw(std::mem::take(&mut current_word)));
            }
            let mut end = i + 1;
            while end < chars.len() && chars[end] != c {
                if chars[end] == '\\' {
                    end += 2;
                } else {
                    end += 1;
                }
            }
            let end = (end + 1).min(chars.len());
            let literal: String = chars[i..end].iter().collect();
            spans.push(Span::styled(literal, Style::default().fg(DEFAULT_THEME.string)));
            i = end;
            continue;
        }

        // Delimiters end the current word
        if !c.is_alphanumeric() && c != '_' {
            if !current_word.is_empty() {
                let style = word_style(&current_word, c == '(', language);
                spans.push(Span::styled(std::mem::take(&mut current_word), style));
            }

            let style = match c {
                '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary),
                _ => Style::default().fg(DEFAULT_THEME.fg),
            };
            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    if !current_word.is_empty() {
        let style = word_style(&current_word, false, language);
        spans.push(Span::styled(current_word, style));
    }

    Line::from(spans)
}

fn word_style(word: &str, is_call: bool, language: Language) -> Style {
    if word.chars().all(|c| c.is_ascii_digit()) {
        return Style::default().fg(DEFAULT_THEME.number);
    }

    let (keywords, types): (&[&str], &[&str]) = match language {
        Language::Python => (
            &[
                "def", "return", "if", "elif", "else", "for", "while", "in", "not", "and", "or",
                "lambda", "import", "from", "class", "pass", "break", "continue",
            ],
            &["True", "False", "None", "int", "str", "list", "dict", "set"],
        ),
        Language::Java => (
            &[
                "public", "private", "static", "return", "if", "else", "for", "while", "new",
                "class", "break", "continue", "final", "null", "true", "false",
            ],
            &[
                "int", "char", "boolean", "void", "long", "String", "Integer", "Character",
                "List", "Map", "Deque", "ArrayList", "HashMap", "ArrayDeque", "TreeNode",
                "Arrays", "Math",
            ],
        ),
    };

    if keywords.contains(&word) {
        Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD)
    } else if types.contains(&word) {
        Style::default().fg(DEFAULT_THEME.type_name)
    } else if is_call {
        Style::default().fg(DEFAULT_THEME.function)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    }
}

/// Scroll state for the source pane
#[derive(Debug, Default)]
pub struct SourceScrollState {
    pub offset: usize,
    pub target_line_row: Option<usize>,
}

/// Data needed to render the source pane
pub struct SourceRenderData<'a> {
    pub source: Option<&'a str>,
    pub language: Language,
    /// 1-based line of the current step, if any
    pub current_line: Option<usize>,
}

/// Render the source code pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    data: SourceRenderData,
    is_focused: bool,
    scroll_state: &mut SourceScrollState,
) {
    let block = Block::default()
        .title(format!(" Code ({}) ", data.language))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let Some(source) = data.source else {
        let paragraph = Paragraph::new("(select an algorithm)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let lines: Vec<&str> = source.lines().collect();
    let total_lines = lines.len();
    let current_line = data.current_line.unwrap_or(0);

    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    if scroll_state.target_line_row.is_none() {
        scroll_state.target_line_row = Some(visible_height / 2);
    }
    let target_row = scroll_state
        .target_line_row
        .unwrap_or(0)
        .min(visible_height.saturating_sub(1));
    scroll_state.target_line_row = Some(target_row);

    // Keep the current line at the target visual row
    if current_line > 0 && current_line <= total_lines {
        scroll_state.offset = (current_line - 1).saturating_sub(target_row);
    }
    scroll_state.offset = scroll_state
        .offset
        .min(total_lines.saturating_sub(visible_height));

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let is_current = line_num == current_line;

            let (marker, num_style) = if is_current {
                (
                    "▶",
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (" ", Style::default().fg(DEFAULT_THEME.comment))
            };

            let mut content_line = highlight_source_line(line, data.language);
            if is_current {
                let bg = Style::default().bg(DEFAULT_THEME.current_line_bg);
                for span in &mut content_line.spans {
                    span.style = span.style.patch(bg);
                }
            }

            let mut spans = vec![Span::styled(format!("{marker}{line_num:3} "), num_style)];
            spans.extend(content_line.spans);
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(line: &Line) -> Vec<String> {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn test_python_comment_and_keyword() {
        let line = highlight_source_line("return x  # done", Language::Python);
        let parts = texts(&line);
        assert_eq!(parts[0], "return");
        assert_eq!(parts.last().map(String::as_str), Some("# done"));
        assert!(line.spans[0].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_java_string_literal_kept_whole() {
        let line = highlight_source_line("s = \"a b\";", Language::Java);
        assert!(texts(&line).contains(&"\"a b\"".to_string()));
    }

    #[test]
    fn test_char_literal_in_python() {
        let line = highlight_source_line("if ch == '(':", Language::Python);
        assert!(texts(&line).contains(&"'('".to_string()));
    }

    #[test]
    fn test_text_is_preserved() {
        let src = "for (int i = 0; i < n; i++) {";
        let line = highlight_source_line(src, Language::Java);
        assert_eq!(texts(&line).concat(), src);
    }
}
