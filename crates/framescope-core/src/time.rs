//! Time representation for frame-accurate navigation
//!
//! Uses rational numbers so that the time of any frame at any rational
//! frame rate is exact. Times are never negative.

use num_rational::Rational64;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::FramescopeError;
use crate::frame::Frame;

/// A point in time, in seconds, relative to the first frame of an output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Time {
    value: Rational64,
}

impl Time {
    /// Zero time constant.
    pub const ZERO: Self = Self {
        value: Rational64::new_raw(0, 1),
    };

    /// Create a time of `numerator / denominator` seconds, clamped at zero.
    ///
    /// A zero denominator yields [`Time::ZERO`].
    #[inline]
    pub fn new(numerator: i64, denominator: i64) -> Self {
        if denominator == 0 {
            return Self::ZERO;
        }
        Self::from_rational(Rational64::new(numerator, denominator))
    }

    fn from_rational(value: Rational64) -> Self {
        if value < Rational64::from_integer(0) {
            Self::ZERO
        } else {
            Self { value }
        }
    }

    /// Time at which `frame` starts when played at `rate`.
    ///
    /// A degenerate rate with a zero numerator maps every frame to zero.
    #[inline]
    pub fn from_frame(frame: Frame, rate: FrameRate) -> Self {
        if rate.numerator == 0 {
            return Self::ZERO;
        }
        Self {
            value: Rational64::new(
                i64::from(frame) * rate.denominator as i64,
                rate.numerator as i64,
            ),
        }
    }

    /// Nearest frame to this time at `rate`.
    #[inline]
    pub fn to_frame(self, rate: FrameRate) -> Frame {
        if rate.denominator == 0 {
            return Frame::ZERO;
        }
        let frames = self.value
            * Rational64::new(rate.numerator as i64, rate.denominator as i64);
        let index = frames.round().to_integer().clamp(0, u32::MAX as i64);
        Frame::new(index as u32)
    }

    /// Create a time from seconds as a float.
    /// Note: May introduce small precision errors.
    pub fn from_seconds_f64(seconds: f64) -> Self {
        const PRECISION: i64 = 1_000_000;
        if !seconds.is_finite() || seconds <= 0.0 {
            return Self::ZERO;
        }
        Self::new((seconds * PRECISION as f64).round() as i64, PRECISION)
    }

    /// Convert to seconds as f64.
    #[inline]
    pub fn to_seconds_f64(self) -> f64 {
        *self.value.numer() as f64 / *self.value.denom() as f64
    }

    /// Whole milliseconds, rounded to nearest.
    pub fn as_millis(self) -> i64 {
        (self.value * Rational64::from_integer(1000))
            .round()
            .to_integer()
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        *self.value.numer() == 0
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for Time {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            value: self.value + rhs.value,
        }
    }
}

impl Sub for Time {
    type Output = Self;
    /// Saturates at zero.
    fn sub(self, rhs: Self) -> Self {
        Self::from_rational(self.value - rhs.value)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let millis = self.as_millis();
        let hours = millis / 3_600_000;
        let minutes = millis / 60_000 % 60;
        let seconds = millis / 1000 % 60;
        write!(f, "{}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis % 1000)
    }
}

const MAX_PARSED_SECONDS: f64 = (i64::MAX / 1_000_000) as f64;

impl FromStr for Time {
    type Err = FramescopeError;

    /// Parses `S`, `M:S` or `H:M:S`, where the seconds part may carry a
    /// fraction (`1:02:03.5`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FramescopeError::InvalidParameter(format!("time '{s}'"));
        let parts: Vec<&str> = s.trim().split(':').collect();
        if parts.len() > 3 {
            return Err(invalid());
        }
        let (whole, seconds) = parts.split_at(parts.len() - 1);
        let seconds: f64 = seconds[0].parse().map_err(|_| invalid())?;
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(invalid());
        }
        let mut total = 0u64;
        for part in whole {
            let unit: u64 = part.parse().map_err(|_| invalid())?;
            total = total
                .checked_mul(60)
                .and_then(|t| t.checked_add(unit))
                .ok_or_else(invalid)?;
        }
        let seconds = total as f64 * 60.0 + seconds;
        // Microsecond precision must fit the rational's i64 numerator.
        if seconds > MAX_PARSED_SECONDS {
            return Err(invalid());
        }
        Ok(Self::from_seconds_f64(seconds))
    }
}

/// Frame rate as a rational number (e.g., 24000/1001 for 23.976 fps).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameRate {
    /// Numerator (e.g., 24000)
    pub numerator: u32,
    /// Denominator (e.g., 1001)
    pub denominator: u32,
}

impl FrameRate {
    #[inline]
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Convert to frames per second as f64.
    #[inline]
    pub fn to_fps_f64(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Duration of a single frame.
    #[inline]
    pub fn frame_duration(self) -> Time {
        Time::from_frame(Frame::new(1), self)
    }

    /// Common frame rates
    pub const FPS_23_976: Self = Self::new(24000, 1001);
    pub const FPS_24: Self = Self::new(24, 1);
    pub const FPS_25: Self = Self::new(25, 1);
    pub const FPS_29_97: Self = Self::new(30000, 1001);
    pub const FPS_30: Self = Self::new(30, 1);
    pub const FPS_50: Self = Self::new(50, 1);
    pub const FPS_59_94: Self = Self::new(60000, 1001);
    pub const FPS_60: Self = Self::new(60, 1);
}

impl Default for FrameRate {
    fn default() -> Self {
        Self::FPS_24
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fps = self.to_fps_f64();
        if (fps - fps.round()).abs() < 0.001 {
            write!(f, "{} fps", fps.round() as u32)
        } else {
            write!(f, "{:.3} fps", fps)
        }
    }
}

impl FromStr for FrameRate {
    type Err = FramescopeError;

    /// Parses `N` or `N/D`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FramescopeError::InvalidParameter(format!("frame rate '{s}'"));
        let (num, den) = match s.trim().split_once('/') {
            Some((num, den)) => (num.trim(), den.trim()),
            None => (s.trim(), "1"),
        };
        let numerator: u32 = num.parse().map_err(|_| invalid())?;
        let denominator: u32 = den.parse().map_err(|_| invalid())?;
        if numerator == 0 || denominator == 0 {
            return Err(invalid());
        }
        Ok(Self::new(numerator, denominator))
    }
}
