//! One-dimensional flex layout: items laid out along a row or a column, each
//! with a fixed extent or a share of what remains.

use super::core::{Direction, Sizing, calc_sizes};
use super::grid::{CellContent, track_sizing};
use crate::render::Panel;
use crate::screen::Screen;

#[derive(Debug, Clone, PartialEq)]
pub struct FlexItem {
    pub content: CellContent,
    pub sizing: Sizing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Flex {
    direction: Direction,
    width: u16,
    height: u16,
    gap: u16,
    items: Vec<FlexItem>,
}

impl Flex {
    /// Items placed left to right, sharing `width`.
    pub fn row(width: u16, height: u16) -> Self {
        Self::new(Direction::Row, width, height)
    }

    /// Items placed top to bottom, sharing `height`.
    pub fn column(width: u16, height: u16) -> Self {
        Self::new(Direction::Column, width, height)
    }

    fn new(direction: Direction, width: u16, height: u16) -> Self {
        Self {
            direction,
            width,
            height,
            gap: 0,
            items: Vec::new(),
        }
    }

    pub fn set_gap(&mut self, gap: u16) -> &mut Self {
        self.gap = gap;
        self
    }

    pub fn set_size(&mut self, width: u16, height: u16) -> &mut Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Text item taking `flex` shares of the free space (0 counts as 1).
    pub fn add(&mut self, content: impl Into<String>, flex: u16) -> &mut Self {
        self.push(CellContent::Text(content.into()), Sizing::Weight(flex))
    }

    /// Text item with a fixed extent along the axis; `0` behaves like `add(.., 1)`.
    pub fn add_fixed(&mut self, content: impl Into<String>, size: u16) -> &mut Self {
        self.push(CellContent::Text(content.into()), track_sizing(size))
    }

    pub fn add_panel(&mut self, panel: Panel, flex: u16) -> &mut Self {
        self.push(CellContent::Panel(panel), Sizing::Weight(flex))
    }

    pub fn add_panel_fixed(&mut self, panel: Panel, size: u16) -> &mut Self {
        self.push(CellContent::Panel(panel), track_sizing(size))
    }

    fn push(&mut self, content: CellContent, sizing: Sizing) -> &mut Self {
        self.items.push(FlexItem { content, sizing });
        self
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn items(&self) -> &[FlexItem] {
        &self.items
    }

    /// Extent of every item along the axis, gaps excluded.
    pub fn sizes(&self) -> Vec<u16> {
        let axis = match self.direction {
            Direction::Row => self.width,
            Direction::Column => self.height,
        };
        let gaps = self
            .gap
            .saturating_mul(self.items.len().saturating_sub(1) as u16);
        let sizings: Vec<Sizing> = self.items.iter().map(|item| item.sizing).collect();
        calc_sizes(&sizings, axis.saturating_sub(gaps))
    }

    /// Render to exactly `height` lines of `width` columns; gaps and unused
    /// space stay blank.
    pub fn render(&self) -> String {
        if self.width == 0 || self.height == 0 {
            return String::new();
        }

        let (width, height) = (usize::from(self.width), usize::from(self.height));
        let mut screen = Screen::new(width, height);
        let mut offset = 0usize;

        for (item, size) in self.items.iter().zip(self.sizes()) {
            let size = usize::from(size);
            if size > 0 {
                match self.direction {
                    Direction::Row => {
                        screen.draw_block(offset, 0, &item.content.render(size, height));
                    }
                    Direction::Column => {
                        screen.draw_block(0, offset, &item.content.render(width, size));
                    }
                }
            }
            offset += size + usize::from(self.gap);
        }

        screen.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ColorScheme;
    use crate::text::strip_styles;

    #[test]
    fn row_shares_width_after_fixed_items_and_gaps() {
        let mut flex = Flex::row(20, 2);
        flex.set_gap(2).add_fixed("L", 5).add("R", 1);
        assert_eq!(flex.sizes(), vec![5, 13]);
        assert_eq!(
            flex.render(),
            format!("L      R{}\n{}", " ".repeat(12), " ".repeat(20))
        );
    }

    #[test]
    fn column_stacks_items() {
        let mut flex = Flex::column(4, 5);
        flex.add_fixed("top", 1).add("a\nb", 1).add("c", 1);
        assert_eq!(flex.render(), "top \na   \nb   \nc   \n    ");
    }

    #[test]
    fn weights_split_proportionally() {
        let mut flex = Flex::row(90, 1);
        flex.add("a", 1).add("b", 2);
        assert_eq!(flex.sizes(), vec![30, 60]);

        let mut flex = Flex::row(91, 1);
        flex.add("a", 1).add("b", 2);
        assert_eq!(flex.sizes(), vec![31, 60]);
    }

    #[test]
    fn panels_are_sized_to_their_slot() {
        let mut panel = Panel::new("", 0, 0);
        panel.set_scheme(ColorScheme::monochrome());

        let mut flex = Flex::row(8, 3);
        flex.add_panel_fixed(panel, 4).add("xy", 1);
        assert_eq!(
            strip_styles(&flex.render()),
            "╭──╮xy  \n│  │    \n╰──╯    "
        );
    }

    #[test]
    fn output_is_always_full_size() {
        let flex = Flex::column(3, 2);
        assert_eq!(flex.render(), "   \n   ");
        assert_eq!(Flex::row(0, 4).render(), "");
    }
}
