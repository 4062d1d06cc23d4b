use crate::width::{RESET, Token, char_width, display_width, scan};

/// Glyph appended by [`truncate_with_ellipsis`].
pub const ELLIPSIS: &str = "…";

/// Cut `s` so it occupies at most `max_width` columns.
///
/// Escape sequences before the cut are kept. If any were kept, the result is
/// terminated with a reset so no style leaks past the cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if display_width(s) <= max_width {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    let mut width = 0;
    let mut styled = false;

    'tokens: for token in scan(s) {
        match token {
            Token::Escape(seq) => {
                out.push_str(seq);
                styled = true;
            }
            Token::Text(run) => {
                for ch in run.chars() {
                    let w = char_width(ch);
                    if width + w > max_width {
                        break 'tokens;
                    }
                    out.push(ch);
                    width += w;
                }
            }
        }
    }

    close_style(&mut out, styled);
    out
}

/// Truncate to `max_width` columns, marking the cut with an ellipsis.
///
/// A cut result is always exactly `max_width` wide: when a wide code point
/// straddles the cut, a space fills the column before the ellipsis.
pub fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 1 {
        return ELLIPSIS.to_string();
    }

    let mut head = truncate_to_width(s, max_width - 1);
    let short = (max_width - 1).saturating_sub(display_width(&head));
    push_spaces(&mut head, short);
    head.push_str(ELLIPSIS);
    head
}

/// Right-align `s` within `width` columns.
pub fn pad_left(s: &str, width: usize) -> String {
    let current = display_width(s);
    if current >= width {
        return truncate_to_width(s, width);
    }
    let mut out = String::with_capacity(s.len() + width - current);
    push_spaces(&mut out, width - current);
    out.push_str(s);
    out
}

/// Left-align `s` within `width` columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let current = display_width(s);
    if current >= width {
        return truncate_to_width(s, width);
    }
    let mut out = String::with_capacity(s.len() + width - current);
    out.push_str(s);
    push_spaces(&mut out, width - current);
    out
}

/// Center `s` within `width` columns; an odd leftover space goes right.
pub fn pad_center(s: &str, width: usize) -> String {
    let current = display_width(s);
    if current >= width {
        return truncate_to_width(s, width);
    }
    let padding = width - current;
    let left = padding / 2;
    let mut out = String::with_capacity(s.len() + padding);
    push_spaces(&mut out, left);
    out.push_str(s);
    push_spaces(&mut out, padding - left);
    out
}

/// Pad or truncate `s` so it occupies exactly `width` columns.
pub fn fit_to_width(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let current = display_width(s);
    if current == width {
        return s.to_string();
    }

    let mut out = if current > width {
        truncate_to_width(s, width)
    } else {
        s.to_string()
    };
    // A wide glyph dropped at the cut leaves one column to fill.
    let short = width.saturating_sub(display_width(&out));
    push_spaces(&mut out, short);
    out
}

/// Shape multi-line `content` into exactly `height` lines of `width` columns.
pub fn fit_block(content: &str, width: usize, height: usize) -> String {
    if width == 0 || height == 0 {
        return String::new();
    }
    let mut source = content.split('\n');
    (0..height)
        .map(|_| fit_to_width(source.next().unwrap_or(""), width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Substring of `s` by visual column: up to `max_width` columns from `start`.
///
/// Escapes met while skipping or collecting are re-emitted so styling active
/// at `start` survives. Wide glyphs split by `start` contribute spaces for
/// their visible half. The result is padded with spaces to `max_width`.
pub fn extract_from_position(s: &str, start: usize, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if start >= display_width(s) {
        return " ".repeat(max_width);
    }

    let mut out = String::with_capacity(s.len());
    let mut pos = 0;
    let mut collected = 0;
    let mut styled = false;

    'tokens: for token in scan(s) {
        match token {
            Token::Escape(seq) => {
                out.push_str(seq);
                styled = true;
            }
            Token::Text(run) => {
                for ch in run.chars() {
                    let w = char_width(ch);
                    if pos < start {
                        let end = pos + w;
                        if end > start {
                            let visible = (end - start).min(max_width - collected);
                            push_spaces(&mut out, visible);
                            collected += visible;
                        }
                        pos = end;
                        continue;
                    }
                    if collected + w > max_width {
                        break 'tokens;
                    }
                    out.push(ch);
                    collected += w;
                    pos += w;
                }
            }
        }
    }

    close_style(&mut out, styled);
    push_spaces(&mut out, max_width - collected);
    out
}

fn close_style(out: &mut String, styled: bool) {
    if styled && !out.ends_with(RESET) {
        out.push_str(RESET);
    }
}

fn push_spaces(out: &mut String, count: usize) {
    out.extend(std::iter::repeat_n(' ', count));
}
