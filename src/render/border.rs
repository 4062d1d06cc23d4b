/// Visual style of a panel border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    /// No border; content uses the whole area.
    None,
    /// `─│┌┐└┘`
    Single,
    /// `═║╔╗╚╝`
    Double,
    /// `─│╭╮╰╯`
    #[default]
    Rounded,
    /// Spaces in place of glyphs: keeps border spacing but draws nothing.
    Hidden,
}

/// Glyphs used to draw one border style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub horizontal: char,
    pub vertical: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
}

impl BorderGlyphs {
    const fn new(h: char, v: char, tl: char, tr: char, bl: char, br: char) -> Self {
        Self {
            horizontal: h,
            vertical: v,
            top_left: tl,
            top_right: tr,
            bottom_left: bl,
            bottom_right: br,
        }
    }
}

pub const SINGLE: BorderGlyphs = BorderGlyphs::new('─', '│', '┌', '┐', '└', '┘');
pub const DOUBLE: BorderGlyphs = BorderGlyphs::new('═', '║', '╔', '╗', '╚', '╝');
pub const ROUNDED: BorderGlyphs = BorderGlyphs::new('─', '│', '╭', '╮', '╰', '╯');
pub const BLANK: BorderGlyphs = BorderGlyphs::new(' ', ' ', ' ', ' ', ' ', ' ');

impl BorderStyle {
    pub fn glyphs(self) -> BorderGlyphs {
        match self {
            BorderStyle::Single => SINGLE,
            BorderStyle::Double => DOUBLE,
            BorderStyle::Rounded => ROUNDED,
            BorderStyle::None | BorderStyle::Hidden => BLANK,
        }
    }

    /// Style actually drawn: focus promotes any visible border to double.
    pub fn effective(self, focused: bool) -> BorderStyle {
        match self {
            BorderStyle::None | BorderStyle::Hidden => self,
            _ if focused => BorderStyle::Double,
            _ => self,
        }
    }

    pub fn has_frame(self) -> bool {
        self != BorderStyle::None
    }
}
