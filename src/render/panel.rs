use crate::style::{ColorScheme, paint};
use crate::text::{fit_to_width, split_into_lines, truncate_with_ellipsis};
use crate::width::display_width;

use super::border::{BorderGlyphs, BorderStyle};

/// Bordered, titled box rendered to an exact width and height.
///
/// Content is a list of pre-shaped lines; each is fitted to the inner width
/// at render time. Nothing is cached between renders.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    title: String,
    width: usize,
    height: usize,
    border: BorderStyle,
    focused: bool,
    scheme: ColorScheme,
    content: Vec<String>,
}

impl Panel {
    pub fn new(title: impl Into<String>, width: usize, height: usize) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            border: BorderStyle::default(),
            focused: false,
            scheme: ColorScheme::default(),
            content: Vec::new(),
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    pub fn set_size(&mut self, width: usize, height: usize) -> &mut Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn set_border(&mut self, border: BorderStyle) -> &mut Self {
        self.border = border;
        self
    }

    pub fn set_focused(&mut self, focused: bool) -> &mut Self {
        self.focused = focused;
        self
    }

    pub fn set_scheme(&mut self, scheme: ColorScheme) -> &mut Self {
        self.scheme = scheme;
        self
    }

    /// Replace content with the lines of a multi-line string.
    pub fn set_content(&mut self, content: &str) -> &mut Self {
        self.content = split_into_lines(content)
            .into_iter()
            .map(str::to_string)
            .collect();
        self
    }

    pub fn set_content_lines<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.content = lines.into_iter().map(Into::into).collect();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn border(&self) -> BorderStyle {
        self.border
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn scheme(&self) -> &ColorScheme {
        &self.scheme
    }

    pub fn content(&self) -> &[String] {
        &self.content
    }

    fn framed(&self) -> bool {
        self.border.has_frame() && self.width >= 2 && self.height >= 2
    }

    /// Columns available to content inside the border.
    pub fn content_width(&self) -> usize {
        if self.framed() {
            self.width - 2
        } else {
            self.width
        }
    }

    /// Rows available to content inside the border.
    pub fn content_height(&self) -> usize {
        if self.framed() {
            self.height - 2
        } else {
            self.height
        }
    }

    /// Render to `height` lines of exactly `width` columns.
    pub fn render(&self) -> String {
        if self.width == 0 || self.height == 0 {
            return String::new();
        }
        if !self.framed() {
            return self.render_borderless();
        }

        let glyphs = self.border.effective(self.focused).glyphs();
        let mut lines = Vec::with_capacity(self.height);
        lines.push(self.render_top(&glyphs));
        lines.extend(self.render_rows(&glyphs));
        lines.push(self.render_bottom(&glyphs));
        lines.join("\n")
    }

    fn render_top(&self, glyphs: &BorderGlyphs) -> String {
        let inner = self.width - 2;
        let border = self.scheme.border_style(self.focused);
        let left_pad = inner.min(1);
        let title = self.fitted_title(inner, left_pad);
        let right_pad = inner - left_pad - display_width(&title);

        let mut line = paint(border, &edge(glyphs.top_left, glyphs.horizontal, left_pad));
        if !title.is_empty() {
            line.push_str(&paint(self.scheme.title_style(), &title));
        }
        line.push_str(&paint(
            border,
            &format!("{}{}", repeat(glyphs.horizontal, right_pad), glyphs.top_right),
        ));
        fit_to_width(&line, self.width)
    }

    /// Title wrapped in single spaces, shortened with an ellipsis, or dropped.
    fn fitted_title(&self, inner: usize, left_pad: usize) -> String {
        if self.title.is_empty() {
            return String::new();
        }
        // Keep at least one dash after the title.
        let max_width = inner.saturating_sub(left_pad + 1);
        let full = format!(" {} ", self.title);
        if display_width(&full) <= max_width {
            full
        } else if max_width > 3 {
            format!(" {} ", truncate_with_ellipsis(&self.title, max_width - 3))
        } else {
            String::new()
        }
    }

    fn render_rows(&self, glyphs: &BorderGlyphs) -> Vec<String> {
        let inner_width = self.width - 2;
        let border = self.scheme.border_style(self.focused);
        let background = self.scheme.background_style();
        let side = paint(border, &glyphs.vertical.to_string());

        (0..self.height - 2)
            .map(|row| {
                let body = self.content.get(row).map(String::as_str).unwrap_or("");
                let body = paint(background, &fit_to_width(body, inner_width));
                fit_to_width(&format!("{side}{body}{side}"), self.width)
            })
            .collect()
    }

    fn render_bottom(&self, glyphs: &BorderGlyphs) -> String {
        let line = format!(
            "{}{}",
            edge(glyphs.bottom_left, glyphs.horizontal, self.width - 2),
            glyphs.bottom_right
        );
        fit_to_width(&paint(self.scheme.border_style(self.focused), &line), self.width)
    }

    fn render_borderless(&self) -> String {
        let background = self.scheme.background_style();
        (0..self.height)
            .map(|row| {
                let body = self.content.get(row).map(String::as_str).unwrap_or("");
                paint(background, &fit_to_width(body, self.width))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn repeat(ch: char, count: usize) -> String {
    std::iter::repeat_n(ch, count).collect()
}

fn edge(corner: char, dash: char, dashes: usize) -> String {
    let mut out = String::with_capacity((dashes + 1) * dash.len_utf8());
    out.push(corner);
    out.extend(std::iter::repeat_n(dash, dashes));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::strip_styles;

    fn plain_panel(title: &str, width: usize, height: usize) -> Panel {
        let mut panel = Panel::new(title, width, height);
        panel.set_scheme(ColorScheme::monochrome());
        panel
    }

    fn plain_lines(panel: &Panel) -> Vec<String> {
        strip_styles(&panel.render())
            .split('\n')
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn zero_size_renders_nothing() {
        assert_eq!(plain_panel("x", 0, 5).render(), "");
        assert_eq!(plain_panel("x", 5, 0).render(), "");
    }

    #[test]
    fn single_border_with_content() {
        let mut panel = plain_panel("", 20, 5);
        panel.set_border(BorderStyle::Single).set_content("hello");

        let lines = plain_lines(&panel);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], format!("┌{}┐", "─".repeat(18)));
        assert_eq!(lines[1], format!("│hello{}│", " ".repeat(13)));
        for row in &lines[2..4] {
            assert_eq!(row, &format!("│{}│", " ".repeat(18)));
        }
        assert_eq!(lines[4], format!("└{}┘", "─".repeat(18)));
    }

    #[test]
    fn title_sits_after_one_dash() {
        let panel = plain_panel("Tasks", 20, 3);
        let lines = plain_lines(&panel);
        assert_eq!(lines[0], format!("╭─ Tasks {}╮", "─".repeat(10)));
        assert_eq!(display_width(panel.render().split('\n').next().unwrap()), 20);
    }

    #[test]
    fn long_title_is_shortened() {
        let panel = plain_panel("A very long panel title", 14, 3);
        let top = &plain_lines(&panel)[0];
        // inner 12, room for 10 title columns: " " + 7 + " " after truncation.
        assert_eq!(top, "╭─ A very… ──╮");
        assert_eq!(display_width(top), 14);
    }

    #[test]
    fn title_dropped_when_no_room() {
        let panel = plain_panel("Tasks", 6, 3);
        assert_eq!(plain_lines(&panel)[0], "╭────╮");
    }

    #[test]
    fn focus_uses_double_glyphs() {
        let mut panel = plain_panel("", 6, 3);
        panel.set_focused(true);
        let lines = plain_lines(&panel);
        assert_eq!(lines[0], "╔════╗");
        assert_eq!(lines[1], "║    ║");
        assert_eq!(lines[2], "╚════╝");
    }

    #[test]
    fn hidden_border_keeps_spacing() {
        let mut panel = plain_panel("", 6, 3);
        panel.set_border(BorderStyle::Hidden).set_focused(true).set_content("abc");
        let lines = plain_lines(&panel);
        assert_eq!(lines, vec!["      ", " abc  ", "      "]);
    }

    #[test]
    fn too_small_for_border_falls_back() {
        let mut panel = plain_panel("T", 1, 3);
        panel.set_content("xyz\nq");
        assert_eq!(panel.render(), "x\nq\n ");
        assert_eq!(panel.content_width(), 1);
    }

    #[test]
    fn borderless_fits_content() {
        let mut panel = plain_panel("ignored", 4, 2);
        panel
            .set_border(BorderStyle::None)
            .set_content_lines(["abcdef", "日本語"]);
        assert_eq!(panel.render(), "abcd\n日本");
    }

    #[test]
    fn content_is_clipped_to_inner_area() {
        let mut panel = plain_panel("", 6, 4);
        panel.set_content("123456789\nab\nextra\nhidden");
        let lines = plain_lines(&panel);
        assert_eq!(lines[1], "│1234│");
        assert_eq!(lines[2], "│ab  │");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn coloured_rows_keep_exact_width() {
        let mut panel = Panel::new("Colour", 24, 6);
        panel.set_content("styled \x1b[31mred\x1b[0m text that overflows the panel");
        for line in panel.render().split('\n') {
            assert_eq!(display_width(line), 24);
        }
    }

    #[test]
    fn two_by_two_is_just_corners() {
        let panel = plain_panel("Title", 2, 2);
        assert_eq!(plain_lines(&panel), vec!["╭╮", "╰╯"]);
    }
}
