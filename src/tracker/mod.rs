//! Row-level change tracking between frames.
//!
//! [`LineTracker`] remembers a blake3 hash per screen row and reports which
//! rows differ in the next [`Screen`]. [`LineTracker::patch`] turns those rows
//! into a cursor-addressed byte string; writing it out is left to the caller.

use blake3::Hash;

use crate::screen::Screen;

#[derive(Debug, Default, Clone)]
pub struct LineTracker {
    width: usize,
    hashes: Vec<Hash>,
}

impl LineTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows of `screen` that changed since the last recorded frame. A change
    /// in dimensions marks every row dirty.
    pub fn dirty_rows(&self, screen: &Screen) -> Vec<usize> {
        if screen.width() != self.width || screen.height() != self.hashes.len() {
            return (0..screen.height()).collect();
        }

        screen
            .lines()
            .iter()
            .zip(&self.hashes)
            .enumerate()
            .filter(|(_, (line, previous))| blake3::hash(line.as_bytes()) != **previous)
            .map(|(row, _)| row)
            .collect()
    }

    /// Record `screen` as the current frame without producing output.
    pub fn record(&mut self, screen: &Screen) {
        self.width = screen.width();
        self.hashes = screen
            .lines()
            .iter()
            .map(|line| blake3::hash(line.as_bytes()))
            .collect();
    }

    /// Escape sequence that repaints only the changed rows, then records
    /// `screen`. Empty when nothing changed.
    pub fn patch(&mut self, screen: &Screen) -> String {
        let dirty = self.dirty_rows(screen);
        let mut out = String::new();
        for row in dirty {
            if let Some(line) = screen.line(row) {
                out.push_str(&format!("\x1b[{};1H", row + 1));
                out.push_str(line);
            }
        }
        self.record(screen);
        out
    }

    /// Forget the recorded frame so the next patch repaints everything.
    pub fn reset(&mut self) {
        self.width = 0;
        self.hashes.clear();
    }
}
