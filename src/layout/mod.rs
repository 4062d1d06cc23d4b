//! Layout: the recursive window arrangement plus the grid and flex helpers
//! built on the same size allocator.

mod core;
pub mod flex;
pub mod grid;

pub use self::core::{
    ChildSelector, Children, Direction, DirectionRule, DirectionSelector, LayoutNode, LayoutTree,
    NodeKind, Sizing, WindowId, arrange, calc_sizes,
};
pub use flex::{Flex, FlexItem};
pub use grid::{CellContent, Grid, GridCell, GridError};
