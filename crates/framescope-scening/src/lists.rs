//! The named collection of scening lists owned by the host.

use framescope_core::{FrameRate, FramescopeError, Result};
use tracing::debug;
use uuid::Uuid;

use crate::list::{SceningList, SharedSceningList};

/// Ordered list-of-lists. Lists are shared so views can hold a handle to the
/// one they display.
#[derive(Debug, Default)]
pub struct SceningLists {
    lists: Vec<SharedSceningList>,
}

impl SceningLists {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and append an empty list. Returns its index and handle.
    pub fn add(&mut self, name: impl Into<String>, rate: FrameRate) -> (usize, SharedSceningList) {
        let list = self.push(SceningList::new(name).with_frame_rate(rate));
        (self.lists.len() - 1, list)
    }

    /// Append an existing list.
    pub fn push(&mut self, list: SceningList) -> SharedSceningList {
        debug!(name = %list.name(), "scening list added");
        let shared = list.into_shared();
        self.lists.push(shared.clone());
        shared
    }

    pub fn remove(&mut self, index: usize) -> Result<SharedSceningList> {
        if index >= self.lists.len() {
            return Err(FramescopeError::NotFound(format!("scening list #{index}")));
        }
        Ok(self.lists.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&SharedSceningList> {
        self.lists.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SharedSceningList> {
        self.lists.iter()
    }

    /// Position of the list with the given identity.
    pub fn index_of(&self, id: Uuid) -> Option<usize> {
        self.lists.iter().position(|list| list.read().id() == id)
    }

    pub fn name(&self, index: usize) -> Option<String> {
        self.lists.get(index).map(|list| list.read().name().to_owned())
    }

    pub fn names(&self) -> Vec<String> {
        self.lists
            .iter()
            .map(|list| list.read().name().to_owned())
            .collect()
    }

    /// Rename the list at `index`.
    pub fn set_name(&mut self, index: usize, name: impl Into<String>) -> Result<()> {
        let list = self
            .lists
            .get(index)
            .ok_or_else(|| FramescopeError::NotFound(format!("scening list #{index}")))?;
        let name = name.into();
        debug!(index, %name, "scening list renamed");
        list.write().set_name(name);
        Ok(())
    }

    /// Apply the current output's rate to every list.
    pub fn set_frame_rate(&mut self, rate: FrameRate) {
        for list in &self.lists {
            list.write().set_frame_rate(rate);
        }
    }
}
