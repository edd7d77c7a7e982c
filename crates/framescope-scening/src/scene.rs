//! Scene type: a labeled, inclusive frame range.

use framescope_core::{Frame, FramescopeError, Result};
use std::fmt;

/// A contiguous range `[start, end]` of frames with a free-text label.
///
/// `start <= end` always holds; edits that would break it are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scene {
    start: Frame,
    end: Frame,
    label: String,
}

impl Scene {
    /// Create a scene covering `start..=end`.
    pub fn new(start: Frame, end: Frame, label: impl Into<String>) -> Result<Self> {
        if start > end {
            return Err(FramescopeError::InvalidRange { start, end });
        }
        Ok(Self {
            start,
            end,
            label: label.into(),
        })
    }

    /// A scene covering exactly one frame.
    pub fn single(frame: Frame, label: impl Into<String>) -> Self {
        Self {
            start: frame,
            end: frame,
            label: label.into(),
        }
    }

    #[inline]
    pub fn start(&self) -> Frame {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Frame {
        self.end
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of frames covered (inclusive).
    pub fn frame_count(&self) -> u32 {
        (self.end - self.start).saturating_add(1)
    }

    /// Whether `frame` lies inside `[start, end]`.
    #[inline]
    pub fn contains(&self, frame: Frame) -> bool {
        self.start <= frame && frame <= self.end
    }

    pub fn set_start(&mut self, start: Frame) -> Result<()> {
        if start > self.end {
            return Err(FramescopeError::InvalidRange {
                start,
                end: self.end,
            });
        }
        self.start = start;
        Ok(())
    }

    pub fn set_end(&mut self, end: Frame) -> Result<()> {
        if end < self.start {
            return Err(FramescopeError::InvalidRange {
                start: self.start,
                end,
            });
        }
        self.end = end;
        Ok(())
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Key used to keep lists ordered.
    #[inline]
    pub(crate) fn sort_key(&self) -> (Frame, Frame) {
        (self.start, self.end)
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)?;
        } else {
            write!(f, "{}-{}", self.start, self.end)?;
        }
        if !self.label.is_empty() {
            write!(f, " {}", self.label)?;
        }
        Ok(())
    }
}
