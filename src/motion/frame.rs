//! Frames - the range a motion's progress is measured against.

/// Anything with a length that positions can be normalized against.
pub trait TimeFrame {
    /// Length of the frame in scroll units.
    fn length(&self) -> f64;
}

/// A bare number is a frame of that length.
impl TimeFrame for f64 {
    fn length(&self) -> f64 {
        *self
    }
}

/// A frame spanning an absolute scroll range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollWindow {
    pub start: f64,
    pub end: f64,
}

impl ScrollWindow {
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Convert an absolute scroll offset into a position relative to this window.
    #[must_use]
    pub fn local_position(&self, scroll: f64) -> f64 {
        scroll - self.start
    }
}

impl TimeFrame for ScrollWindow {
    fn length(&self) -> f64 {
        self.end - self.start
    }
}
