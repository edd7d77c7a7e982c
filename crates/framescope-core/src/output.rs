//! Bounds of the output currently shown by the host.

use serde::{Deserialize, Serialize};

use crate::frame::Frame;
use crate::time::{FrameRate, Time};

/// Frame count and rate of a video output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputInfo {
    /// Display name
    pub name: String,
    /// Number of frames in the output
    pub total_frames: u32,
    /// Playback rate
    pub frame_rate: FrameRate,
}

impl OutputInfo {
    pub fn new(name: impl Into<String>, total_frames: u32, frame_rate: FrameRate) -> Self {
        Self {
            name: name.into(),
            total_frames,
            frame_rate,
        }
    }

    /// Last valid frame index, or frame 0 for an empty output.
    pub fn last_frame(&self) -> Frame {
        Frame::new(self.total_frames.saturating_sub(1))
    }

    /// Total duration of the output.
    pub fn total_time(&self) -> Time {
        Time::from_frame(Frame::new(self.total_frames), self.frame_rate)
    }

    /// Time at which `frame` starts in this output.
    pub fn time_of(&self, frame: Frame) -> Time {
        Time::from_frame(frame, self.frame_rate)
    }
}

impl Default for OutputInfo {
    fn default() -> Self {
        Self::new("Output 0", 0, FrameRate::default())
    }
}
