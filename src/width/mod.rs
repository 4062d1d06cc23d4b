//! Terminal display width helpers.
//!
//! Every notion of "how many columns does this take" in the crate goes through
//! here: the per-code-point width table and the escape-aware scanner that
//! separates printable runs from terminal control sequences.

mod core;

pub use self::core::{ESC, RESET, ScanState, Scanner, Token, char_width, display_width, scan};
