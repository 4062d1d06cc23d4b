//! Terminal layout and compositing engine.
//!
//! Width-exact text shaping, a line-based screen compositor, recursive window
//! arrangement, bordered panels, and grid/flex helpers. Everything renders to
//! plain strings of styled lines; putting them on a terminal is up to the
//! caller (see [`tracker::LineTracker`] for incremental repaints).

pub mod error;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod metrics;
pub mod render;
pub mod screen;
pub mod style;
pub mod text;
pub mod tracker;
pub mod width;

pub use error::{LayoutError, Result};
pub use geometry::{Rect, Size};
pub use layout::{
    CellContent, Direction, Flex, Grid, GridError, LayoutNode, LayoutTree, Sizing, WindowId,
    arrange, calc_sizes,
};
pub use logging::{LogEvent, LogFields, LogLevel, Logger, LoggingError, LoggingResult};
pub use metrics::{MetricSnapshot, RenderMetrics};
pub use render::{BorderStyle, Panel, Renderer, RendererConfig};
pub use screen::Screen;
pub use style::ColorScheme;
pub use text::{
    extract_from_position, fit_to_width, pad_center, pad_left, pad_right, truncate_to_width,
    truncate_with_ellipsis,
};
pub use tracker::LineTracker;
pub use width::display_width;
