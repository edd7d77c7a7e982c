//! Frame indices.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Index of a frame within an output, starting at 0.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Frame(u32);

impl Frame {
    /// The first frame of every output.
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Raw frame index.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Clamp into `[0, max]`.
    #[inline]
    pub fn clamp_to(self, max: Frame) -> Self {
        Self(self.0.min(max.0))
    }
}

impl From<u32> for Frame {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

impl From<Frame> for u32 {
    fn from(frame: Frame) -> Self {
        frame.0
    }
}

impl From<Frame> for i64 {
    fn from(frame: Frame) -> Self {
        frame.0 as i64
    }
}

impl Add<u32> for Frame {
    type Output = Self;
    fn add(self, rhs: u32) -> Self {
        Self(self.0.saturating_add(rhs))
    }
}

impl Sub<u32> for Frame {
    type Output = Self;
    fn sub(self, rhs: u32) -> Self {
        Self(self.0.saturating_sub(rhs))
    }
}

impl Sub for Frame {
    type Output = u32;
    fn sub(self, rhs: Self) -> u32 {
        self.0.saturating_sub(rhs.0)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
