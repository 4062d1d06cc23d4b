//! Grid layout: a fixed number of rows and columns, cells placed by coordinate
//! and optionally spanning several tracks.
//!
//! Track sizes come from [`calc_sizes`]: rows and columns with an explicit size
//! are served first, auto tracks share what is left. Gaps sit between tracks
//! and are counted inside spanning cells.
//!
//! # Example
//! ```
//! use room_compose::layout::grid::Grid;
//!
//! let mut grid = Grid::new(2, 2);
//! grid.set_size(40, 10).set_gap(1);
//! grid.add_cell_span(0, 0, 1, 2, "header")?;
//! grid.add_cell(1, 0, "left")?;
//! grid.add_cell(1, 1, "right")?;
//! assert_eq!(grid.render().lines().count(), 10);
//! # Ok::<(), room_compose::layout::grid::GridError>(())
//! ```

use thiserror::Error;

use super::core::{Sizing, calc_sizes};
use crate::geometry::Rect;
use crate::render::Panel;
use crate::screen::Screen;
use crate::text::fit_block;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell span must be at least 1x1, got {row_span}x{col_span}")]
    ZeroSpan { row_span: usize, col_span: usize },
    #[error("cell ({row}, {col}) lies outside a {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("cell at ({row}, {col}) spanning {row_span}x{col_span} overflows a {rows}x{cols} grid")]
    SpanOverflow {
        row: usize,
        col: usize,
        row_span: usize,
        col_span: usize,
        rows: usize,
        cols: usize,
    },
    #[error("track {index} does not exist (grid has {count})")]
    TrackOutOfRange { index: usize, count: usize },
}

/// What a grid cell or flex item draws into its rectangle.
#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    /// Pre-styled text, clipped and padded to the rectangle.
    Text(String),
    /// Panel resized to the rectangle before rendering.
    Panel(Panel),
}

impl CellContent {
    pub fn render(&self, width: usize, height: usize) -> String {
        match self {
            CellContent::Text(text) => fit_block(text, width, height),
            CellContent::Panel(panel) => {
                let mut panel = panel.clone();
                panel.set_size(width, height);
                panel.render()
            }
        }
    }
}

impl From<&str> for CellContent {
    fn from(text: &str) -> Self {
        CellContent::Text(text.to_string())
    }
}

impl From<String> for CellContent {
    fn from(text: String) -> Self {
        CellContent::Text(text)
    }
}

impl From<Panel> for CellContent {
    fn from(panel: Panel) -> Self {
        CellContent::Panel(panel)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
    pub row_span: usize,
    pub col_span: usize,
    pub content: CellContent,
}

/// Zero means "auto": the track shares leftover space.
pub(crate) fn track_sizing(size: u16) -> Sizing {
    if size == 0 {
        Sizing::Weight(1)
    } else {
        Sizing::Fixed(size)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: u16,
    height: u16,
    gap: u16,
    rows: Vec<Sizing>,
    cols: Vec<Sizing>,
    cells: Vec<GridCell>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            width: 0,
            height: 0,
            gap: 0,
            rows: vec![Sizing::Weight(1); rows],
            cols: vec![Sizing::Weight(1); cols],
            cells: Vec::new(),
        }
    }

    pub fn set_size(&mut self, width: u16, height: u16) -> &mut Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn set_gap(&mut self, gap: u16) -> &mut Self {
        self.gap = gap;
        self
    }

    /// Fix a row's height; `0` returns it to auto.
    pub fn set_row_height(&mut self, row: usize, height: u16) -> Result<&mut Self, GridError> {
        set_track(&mut self.rows, row, track_sizing(height))?;
        Ok(self)
    }

    /// Fix a column's width; `0` returns it to auto.
    pub fn set_col_width(&mut self, col: usize, width: u16) -> Result<&mut Self, GridError> {
        set_track(&mut self.cols, col, track_sizing(width))?;
        Ok(self)
    }

    /// Give an auto row a larger share of the leftover height.
    pub fn set_row_weight(&mut self, row: usize, weight: u16) -> Result<&mut Self, GridError> {
        set_track(&mut self.rows, row, Sizing::Weight(weight))?;
        Ok(self)
    }

    pub fn set_col_weight(&mut self, col: usize, weight: u16) -> Result<&mut Self, GridError> {
        set_track(&mut self.cols, col, Sizing::Weight(weight))?;
        Ok(self)
    }

    pub fn add_cell(
        &mut self,
        row: usize,
        col: usize,
        content: impl Into<String>,
    ) -> Result<&mut Self, GridError> {
        self.place(row, col, 1, 1, CellContent::Text(content.into()))
    }

    pub fn add_cell_span(
        &mut self,
        row: usize,
        col: usize,
        row_span: usize,
        col_span: usize,
        content: impl Into<String>,
    ) -> Result<&mut Self, GridError> {
        self.place(row, col, row_span, col_span, CellContent::Text(content.into()))
    }

    pub fn add_panel(
        &mut self,
        row: usize,
        col: usize,
        panel: Panel,
    ) -> Result<&mut Self, GridError> {
        self.place(row, col, 1, 1, CellContent::Panel(panel))
    }

    pub fn add_panel_span(
        &mut self,
        row: usize,
        col: usize,
        row_span: usize,
        col_span: usize,
        panel: Panel,
    ) -> Result<&mut Self, GridError> {
        self.place(row, col, row_span, col_span, CellContent::Panel(panel))
    }

    fn place(
        &mut self,
        row: usize,
        col: usize,
        row_span: usize,
        col_span: usize,
        content: CellContent,
    ) -> Result<&mut Self, GridError> {
        let (rows, cols) = (self.rows.len(), self.cols.len());
        if row_span == 0 || col_span == 0 {
            return Err(GridError::ZeroSpan { row_span, col_span });
        }
        if row >= rows || col >= cols {
            return Err(GridError::OutOfBounds {
                row,
                col,
                rows,
                cols,
            });
        }
        if row + row_span > rows || col + col_span > cols {
            return Err(GridError::SpanOverflow {
                row,
                col,
                row_span,
                col_span,
                rows,
                cols,
            });
        }

        self.cells.push(GridCell {
            row,
            col,
            row_span,
            col_span,
            content,
        });
        Ok(self)
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn cols(&self) -> usize {
        self.cols.len()
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Resolved height of every row for the current size and gap.
    pub fn row_heights(&self) -> Vec<u16> {
        resolve_tracks(&self.rows, self.height, self.gap)
    }

    /// Resolved width of every column for the current size and gap.
    pub fn col_widths(&self) -> Vec<u16> {
        resolve_tracks(&self.cols, self.width, self.gap)
    }

    /// Rectangle covered by the cell added `index`-th.
    pub fn cell_rect(&self, index: usize) -> Option<Rect> {
        let cell = self.cells.get(index)?;
        Some(self.span_rect(cell, &self.row_heights(), &self.col_widths()))
    }

    fn span_rect(&self, cell: &GridCell, heights: &[u16], widths: &[u16]) -> Rect {
        let (x, width) = span(widths, cell.col, cell.col_span, self.gap);
        let (y, height) = span(heights, cell.row, cell.row_span, self.gap);
        Rect::new(x, y, width, height)
    }

    /// Composite every cell, in insertion order, onto a `width` x `height` frame.
    pub fn render(&self) -> String {
        if self.width == 0 || self.height == 0 || self.rows.is_empty() || self.cols.is_empty() {
            return String::new();
        }

        let heights = self.row_heights();
        let widths = self.col_widths();
        let mut screen = Screen::new(usize::from(self.width), usize::from(self.height));

        for cell in &self.cells {
            let rect = self.span_rect(cell, &heights, &widths);
            if rect.is_empty() {
                continue;
            }
            let block = cell
                .content
                .render(usize::from(rect.width), usize::from(rect.height));
            screen.draw_block(usize::from(rect.x), usize::from(rect.y), &block);
        }

        screen.render()
    }
}

fn set_track(tracks: &mut [Sizing], index: usize, sizing: Sizing) -> Result<(), GridError> {
    let count = tracks.len();
    let slot = tracks
        .get_mut(index)
        .ok_or(GridError::TrackOutOfRange { index, count })?;
    *slot = sizing;
    Ok(())
}

fn resolve_tracks(tracks: &[Sizing], total: u16, gap: u16) -> Vec<u16> {
    let gaps = gap.saturating_mul(tracks.len().saturating_sub(1) as u16);
    calc_sizes(tracks, total.saturating_sub(gaps))
}

/// Start offset and extent of `count` tracks beginning at `start`.
fn span(sizes: &[u16], start: usize, count: usize, gap: u16) -> (u16, u16) {
    let offset = sizes[..start]
        .iter()
        .fold(0u16, |acc, size| acc.saturating_add(*size).saturating_add(gap));
    let covered = &sizes[start..start + count];
    let extent = covered
        .iter()
        .fold(0u16, |acc, size| acc.saturating_add(*size))
        .saturating_add(gap.saturating_mul(count.saturating_sub(1) as u16));
    (offset, extent)
}
