//! Scening list: an ordered, named table of scenes.

use framescope_core::{Frame, FrameRate, FramescopeError, Result, Time};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::events::{Observers, SceningListEvent, Subscription};
use crate::scene::Scene;

// ── Columns ─────────────────────────────────────────────────────

/// Fixed table columns of a scening list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    StartFrame,
    EndFrame,
    StartTime,
    EndTime,
    Label,
}

impl Column {
    pub const COUNT: usize = 5;
    pub const LABEL: Self = Self::Label;

    /// All columns in display order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::StartFrame,
        Self::EndFrame,
        Self::StartTime,
        Self::EndTime,
        Self::Label,
    ];

    pub fn index(self) -> usize {
        match self {
            Self::StartFrame => 0,
            Self::EndFrame => 1,
            Self::StartTime => 2,
            Self::EndTime => 3,
            Self::Label => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Header text.
    pub fn title(self) -> &'static str {
        match self {
            Self::StartFrame => "Start",
            Self::EndFrame => "End",
            Self::StartTime => "Start Time",
            Self::EndTime => "End Time",
            Self::Label => "Label",
        }
    }

    /// The frame column a frame or time column is backed by.
    pub fn frame_column(self) -> Option<Self> {
        match self {
            Self::StartFrame | Self::StartTime => Some(Self::StartFrame),
            Self::EndFrame | Self::EndTime => Some(Self::EndFrame),
            Self::Label => None,
        }
    }
}

// ── Cells ───────────────────────────────────────────────────────

/// Value of a single table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Frame(Frame),
    Time(Time),
    Text(String),
}

impl CellValue {
    pub fn as_frame(&self) -> Option<Frame> {
        match self {
            Self::Frame(frame) => Some(*frame),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Frame(frame) => write!(f, "{frame}"),
            Self::Time(time) => write!(f, "{time}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

// ── List ────────────────────────────────────────────────────────

/// Scening list shared between the host and any open views.
pub type SharedSceningList = Arc<RwLock<SceningList>>;

/// An ordered, named collection of scenes.
///
/// Rows stay sorted by `(start, end)`. Edits that change a row's position
/// emit [`SceningListEvent::RowsMoved`].
#[derive(Debug)]
pub struct SceningList {
    id: Uuid,
    name: String,
    frame_rate: FrameRate,
    scenes: Vec<Scene>,
    observers: Observers,
}

impl SceningList {
    /// Create an empty list.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            frame_rate: FrameRate::default(),
            scenes: Vec::new(),
            observers: Observers::default(),
        }
    }

    /// Set the rate used for the time columns.
    pub fn with_frame_rate(mut self, rate: FrameRate) -> Self {
        self.frame_rate = rate;
        self
    }

    /// Wrap into a shared handle.
    pub fn into_shared(self) -> SharedSceningList {
        Arc::new(RwLock::new(self))
    }

    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.observers.emit(SceningListEvent::Renamed);
    }

    pub fn frame_rate(&self) -> FrameRate {
        self.frame_rate
    }

    /// Changing the rate changes every time cell, not the row order.
    pub fn set_frame_rate(&mut self, rate: FrameRate) {
        if self.frame_rate == rate {
            return;
        }
        self.frame_rate = rate;
        for row in 0..self.scenes.len() {
            self.observers.emit(SceningListEvent::DataChanged { row });
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<&Scene> {
        self.scenes.get(row)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Scene> {
        self.scenes.iter()
    }

    /// Register for change notifications.
    pub fn subscribe(&mut self) -> Subscription {
        self.observers.subscribe()
    }

    /// Number of live subscriptions as of the last emission.
    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    /// Add a scene in sorted position. A missing `end` makes a one-frame scene.
    /// Returns the row it landed on.
    pub fn add(&mut self, start: Frame, end: Option<Frame>, label: impl Into<String>) -> Result<usize> {
        let scene = Scene::new(start, end.unwrap_or(start), label)?;
        let row = self.insertion_point(&scene);
        debug!(list = %self.name, row, %scene, "scene added");
        self.scenes.insert(row, scene);
        self.observers
            .emit(SceningListEvent::RowsInserted { first: row, last: row });
        Ok(row)
    }

    /// Remove and return the scene at `row`.
    pub fn remove(&mut self, row: usize) -> Result<Scene> {
        self.check_row(row)?;
        let scene = self.scenes.remove(row);
        debug!(list = %self.name, row, %scene, "scene removed");
        self.observers
            .emit(SceningListEvent::RowsRemoved { first: row, last: row });
        Ok(scene)
    }

    /// Read a cell. Time cells are derived from frames through the list's rate.
    pub fn data(&self, row: usize, column: Column) -> Option<CellValue> {
        let scene = self.scenes.get(row)?;
        let value = match column {
            Column::StartFrame => CellValue::Frame(scene.start()),
            Column::EndFrame => CellValue::Frame(scene.end()),
            Column::StartTime => CellValue::Time(Time::from_frame(scene.start(), self.frame_rate)),
            Column::EndTime => CellValue::Time(Time::from_frame(scene.end(), self.frame_rate)),
            Column::Label => CellValue::Text(scene.label().to_owned()),
        };
        Some(value)
    }

    /// Write a cell and return the row's position afterwards.
    ///
    /// Frame columns take [`CellValue::Frame`], time columns
    /// [`CellValue::Time`] (rounded to the nearest frame), the label column
    /// [`CellValue::Text`].
    pub fn set_data(&mut self, row: usize, column: Column, value: CellValue) -> Result<usize> {
        self.check_row(row)?;
        let rate = self.frame_rate;
        let scene = &mut self.scenes[row];

        match (column, value) {
            (Column::StartFrame, CellValue::Frame(frame)) => scene.set_start(frame)?,
            (Column::StartTime, CellValue::Time(time)) => scene.set_start(time.to_frame(rate))?,
            (Column::EndFrame, CellValue::Frame(frame)) => scene.set_end(frame)?,
            (Column::EndTime, CellValue::Time(time)) => scene.set_end(time.to_frame(rate))?,
            (Column::Label, CellValue::Text(text)) => {
                scene.set_label(text);
                self.observers.emit(SceningListEvent::DataChanged { row });
                return Ok(row);
            }
            (column, value) => {
                return Err(FramescopeError::CellTypeMismatch {
                    column: column.title(),
                    value: value.to_string(),
                })
            }
        }

        Ok(self.reposition(row))
    }

    /// Rows whose scene contains `frame`.
    pub fn rows_containing(&self, frame: Frame) -> impl Iterator<Item = usize> + '_ {
        self.scenes
            .iter()
            .enumerate()
            .filter(move |(_, scene)| scene.contains(frame))
            .map(|(row, _)| row)
    }

    /// Nearest scene boundary strictly after `frame`.
    pub fn next_frame(&self, frame: Frame) -> Option<Frame> {
        self.boundaries().filter(|b| *b > frame).min()
    }

    /// Nearest scene boundary strictly before `frame`.
    pub fn prev_frame(&self, frame: Frame) -> Option<Frame> {
        self.boundaries().filter(|b| *b < frame).max()
    }

    fn boundaries(&self) -> impl Iterator<Item = Frame> + '_ {
        self.scenes
            .iter()
            .flat_map(|scene| [scene.start(), scene.end()])
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.scenes.len() {
            return Err(FramescopeError::RowOutOfRange {
                row,
                len: self.scenes.len(),
            });
        }
        Ok(())
    }

    /// Upper bound among equal keys.
    fn insertion_point(&self, scene: &Scene) -> usize {
        let key = scene.sort_key();
        self.scenes.partition_point(|s| s.sort_key() <= key)
    }

    fn in_order(&self, row: usize) -> bool {
        let key = self.scenes[row].sort_key();
        let after_prev = row == 0 || self.scenes[row - 1].sort_key() <= key;
        let before_next = row + 1 >= self.scenes.len() || key <= self.scenes[row + 1].sort_key();
        after_prev && before_next
    }

    fn reposition(&mut self, row: usize) -> usize {
        if self.in_order(row) {
            self.observers.emit(SceningListEvent::DataChanged { row });
            return row;
        }
        let scene = self.scenes.remove(row);
        let to = self.insertion_point(&scene);
        self.scenes.insert(to, scene);
        debug!(list = %self.name, from = row, to, "scene moved");
        self.observers.emit(SceningListEvent::RowsMoved { from: row, to });
        to
    }
}

impl Default for SceningList {
    fn default() -> Self {
        Self::new("")
    }
}

impl<'a> IntoIterator for &'a SceningList {
    type Item = &'a Scene;
    type IntoIter = std::slice::Iter<'a, Scene>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
