//! Command-line configuration.

use anyhow::{Context, Result};
use framescope_core::{FrameRate, OutputInfo};

const DEFAULT_TOTAL_FRAMES: u32 = 2400;

/// Output bounds the host previews.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub total_frames: u32,
    pub frame_rate: FrameRate,
}

impl AppConfig {
    /// Parse `[TOTAL_FRAMES] [FPS]`, where `FPS` is `N` or `N/D`.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut config = Self::default();

        if let Some(frames) = args.next() {
            config.total_frames = frames
                .parse()
                .with_context(|| format!("invalid frame count '{frames}'"))?;
        }
        if let Some(rate) = args.next() {
            config.frame_rate = rate
                .parse()
                .with_context(|| format!("invalid frame rate '{rate}'"))?;
        }
        if let Some(extra) = args.next() {
            anyhow::bail!("unexpected argument '{extra}'");
        }
        Ok(config)
    }

    pub fn output(&self) -> OutputInfo {
        OutputInfo::new("Output 0", self.total_frames, self.frame_rate)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            total_frames: DEFAULT_TOTAL_FRAMES,
            frame_rate: FrameRate::FPS_23_976,
        }
    }
}
