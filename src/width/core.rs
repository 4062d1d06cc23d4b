/// Escape character that opens every terminal control sequence.
pub const ESC: char = '\x1b';

/// SGR reset appended whenever a cut would otherwise leave a style open.
pub const RESET: &str = "\x1b[0m";

/// Display width of a single code point.
///
/// East-Asian wide ranges and the `U+1F300..=U+1F9FF` pictographs take two
/// columns; everything else takes one. Zero-width code points are not modeled.
pub fn char_width(ch: char) -> usize {
    let cp = ch as u32;
    if is_wide(cp) || (0x1F300..=0x1F9FF).contains(&cp) {
        2
    } else {
        1
    }
}

fn is_wide(cp: u32) -> bool {
    cp >= 0x1100
        && (cp <= 0x115F
            || cp == 0x2329
            || cp == 0x232A
            || ((0x2E80..=0xA4CF).contains(&cp) && cp != 0x303F)
            || (0xAC00..=0xD7A3).contains(&cp)
            || (0xF900..=0xFAFF).contains(&cp)
            || (0xFE10..=0xFE19).contains(&cp)
            || (0xFE30..=0xFE6F).contains(&cp)
            || (0xFF00..=0xFF60).contains(&cp)
            || (0xFFE0..=0xFFE6).contains(&cp)
            || (0x20000..=0x2FFFD).contains(&cp)
            || (0x30000..=0x3FFFD).contains(&cp))
}

/// A piece of a styled string as seen by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Run of printable code points.
    Text(&'a str),
    /// Complete escape sequence, from `ESC` through its terminating letter.
    Escape(&'a str),
}

impl<'a> Token<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Token::Text(s) | Token::Escape(s) => s,
        }
    }

    /// Columns occupied by this token; escapes occupy none.
    pub fn width(&self) -> usize {
        match self {
            Token::Text(run) => run.chars().map(char_width).sum(),
            Token::Escape(_) => 0,
        }
    }
}

/// Scanner state while walking a styled string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    InText,
    InEscape,
}

/// Iterator splitting a styled string into [`Token`]s.
///
/// An escape sequence starts at `ESC` and ends at the first ASCII letter that
/// follows it. A sequence still open at end of input is yielded as text.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.src[self.pos..];
        if rest.is_empty() {
            return None;
        }

        let state = if rest.starts_with(ESC) {
            ScanState::InEscape
        } else {
            ScanState::InText
        };

        for (idx, ch) in rest.char_indices() {
            match state {
                ScanState::InText => {
                    if ch == ESC {
                        self.pos += idx;
                        return Some(Token::Text(&rest[..idx]));
                    }
                }
                ScanState::InEscape => {
                    if idx > 0 && ch.is_ascii_alphabetic() {
                        let end = idx + ch.len_utf8();
                        self.pos += end;
                        return Some(Token::Escape(&rest[..end]));
                    }
                }
            }
        }

        self.pos = self.src.len();
        Some(Token::Text(rest))
    }
}

/// Split `s` into text runs and escape sequences.
pub fn scan(s: &str) -> Scanner<'_> {
    Scanner::new(s)
}

/// Number of terminal columns `text` occupies once escapes are ignored.
pub fn display_width(text: &str) -> usize {
    scan(text).map(|token| token.width()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_and_wide_widths() {
        assert_eq!(char_width('a'), 1);
        assert_eq!(char_width('中'), 2);
        assert_eq!(char_width('한'), 2);
        assert_eq!(char_width('Ａ'), 2);
        assert_eq!(char_width('🚀'), 2);
        assert_eq!(char_width('…'), 1);
        assert_eq!(char_width('\u{303F}'), 1);
    }

    #[test]
    fn scanner_separates_escapes() {
        let tokens: Vec<_> = scan("ab\x1b[31mcd\x1b[0m").collect();
        assert_eq!(
            tokens,
            vec![
                Token::Text("ab"),
                Token::Escape("\x1b[31m"),
                Token::Text("cd"),
                Token::Escape("\x1b[0m"),
            ]
        );
    }

    #[test]
    fn unterminated_escape_is_text() {
        let tokens: Vec<_> = scan("hi\x1b[38;5").collect();
        assert_eq!(tokens, vec![Token::Text("hi"), Token::Text("\x1b[38;5")]);
    }

    #[test]
    fn adjacent_escapes_stay_separate() {
        let tokens: Vec<_> = scan("\x1b[1m\x1b[32mx").collect();
        assert_eq!(
            tokens,
            vec![
                Token::Escape("\x1b[1m"),
                Token::Escape("\x1b[32m"),
                Token::Text("x"),
            ]
        );
    }

    #[test]
    fn display_width_ignores_styles() {
        assert_eq!(display_width(""), 0);
        assert_eq!(display_width("\x1b[1;31mhello\x1b[0m"), 5);
        assert_eq!(display_width("日本語"), 6);
        assert_eq!(display_width("a🚀b"), 4);
    }
}
