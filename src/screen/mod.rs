//! Screen compositor.
//!
//! A [`Screen`] holds one frame as styled lines and lets independent
//! components draw blocks into it without corrupting what is already there.

mod core;

pub use self::core::Screen;
