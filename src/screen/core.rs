use std::fmt;

use blake3::Hash;

use crate::render::Panel;
use crate::text::{extract_from_position, fit_to_width, strip_styles};
use crate::width::display_width;

/// Frame buffer of `height` styled lines, each exactly `width` columns.
///
/// Every mutation re-fits the lines it touches, so the width guarantee holds
/// between any two calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    width: usize,
    height: usize,
    lines: Vec<String>,
}

impl Screen {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            lines: vec![" ".repeat(width); height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(String::as_str)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Reset every row to spaces.
    pub fn clear(&mut self) {
        let blank = " ".repeat(self.width);
        for line in &mut self.lines {
            line.clone_from(&blank);
        }
    }

    /// Replace one row. Rows outside the screen are ignored.
    pub fn set_line(&mut self, row: usize, content: &str) {
        if let Some(line) = self.lines.get_mut(row) {
            *line = fit_to_width(content, self.width);
        }
    }

    /// Overlay multi-line `content` with its top-left corner at (`x`, `y`).
    ///
    /// Columns left and right of each drawn line keep their previous content
    /// and styling. Anything falling outside the screen is clipped.
    pub fn draw_block(&mut self, x: usize, y: usize, content: &str) {
        if x >= self.width {
            return;
        }

        for (offset, line) in content.split('\n').enumerate() {
            let row = y + offset;
            if row >= self.height {
                break;
            }

            let existing = &self.lines[row];
            let composed = if x == 0 && display_width(line) == self.width {
                line.to_string()
            } else {
                compose_line(existing, x, line, self.width)
            };
            self.lines[row] = composed;
        }
    }

    /// Render `panel` and overlay it at (`x`, `y`).
    pub fn draw_panel(&mut self, x: usize, y: usize, panel: &Panel) {
        self.draw_block(x, y, &panel.render());
    }

    /// Serialized frame: rows joined with line breaks.
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    /// Serialized frame with every escape sequence removed.
    pub fn to_plain_string(&self) -> String {
        strip_styles(&self.render())
    }

    /// Content hash of the serialized frame.
    pub fn fingerprint(&self) -> Hash {
        let mut hasher = blake3::Hasher::new();
        for (idx, line) in self.lines.iter().enumerate() {
            if idx > 0 {
                hasher.update(b"\n");
            }
            hasher.update(line.as_bytes());
        }
        hasher.finalize()
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Splice `content` into `existing` at column `x`, keeping what lies before
/// and after it.
fn compose_line(existing: &str, x: usize, content: &str, total: usize) -> String {
    let content_width = display_width(content);
    if x == 0 && content_width >= total {
        return fit_to_width(content, total);
    }

    let mut out = String::with_capacity(existing.len() + content.len());
    if x > 0 {
        out.push_str(&fit_to_width(existing, x));
    }
    out.push_str(content);

    let after = x + content_width;
    if after < total {
        out.push_str(&extract_from_position(existing, after, total - after));
    }

    fit_to_width(&out, total)
}
