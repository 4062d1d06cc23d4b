//! Panel rendering and whole-frame composition.

mod border;
mod core;
mod panel;

pub use self::core::{Renderer, RendererConfig};
pub use border::{BorderGlyphs, BorderStyle, BLANK, DOUBLE, ROUNDED, SINGLE};
pub use panel::Panel;
