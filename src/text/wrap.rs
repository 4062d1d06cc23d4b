use crate::width::{Token, display_width, scan};

use super::fit::{fit_to_width, truncate_with_ellipsis};

/// Split on line breaks. An empty string has no lines.
pub fn split_into_lines(s: &str) -> Vec<&str> {
    if s.is_empty() {
        return Vec::new();
    }
    s.split('\n').collect()
}

/// Fit every line to `width` and join them with line breaks.
pub fn join_lines<S: AsRef<str>>(lines: &[S], width: usize) -> String {
    lines
        .iter()
        .map(|line| fit_to_width(line.as_ref(), width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Greedy word wrap on whitespace.
///
/// Words wider than `width` get a line of their own, cut with an ellipsis.
pub fn wrap_text(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in s.split_whitespace() {
        let word_width = display_width(word);

        if current_width > 0 && current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
            continue;
        }

        if current_width > 0 {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width > width {
            lines.push(truncate_with_ellipsis(word, width));
        } else {
            current.push_str(word);
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Visible text of `s` with every escape sequence removed.
pub fn strip_styles(s: &str) -> String {
    scan(s)
        .filter_map(|token| match token {
            Token::Text(run) => Some(run),
            Token::Escape(_) => None,
        })
        .collect()
}
