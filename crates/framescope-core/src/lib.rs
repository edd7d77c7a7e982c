//! Framescope Core - Foundation types for the preview tool
//!
//! This crate provides the value types shared by every other crate:
//! - Frame indices and frame rates
//! - Exact rational time values
//! - Output bounds (frame count, duration)
//! - The common error type

pub mod error;
pub mod frame;
pub mod output;
pub mod time;

pub use error::{FramescopeError, Result};
pub use frame::Frame;
pub use output::OutputInfo;
pub use time::{FrameRate, Time};
