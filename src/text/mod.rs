//! Width-exact string shaping.
//!
//! Every line that leaves the engine passes through [`fit_to_width`] at some
//! point, so its output always occupies exactly the requested column count.

mod fit;
mod wrap;

pub use fit::{
    ELLIPSIS, extract_from_position, fit_block, fit_to_width, pad_center, pad_left, pad_right,
    truncate_to_width, truncate_with_ellipsis,
};
pub use wrap::{join_lines, split_into_lines, strip_styles, wrap_text};
