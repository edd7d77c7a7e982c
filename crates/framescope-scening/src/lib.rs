//! Framescope Scening - Scening list data model
//!
//! Implements the structures behind scene marking:
//! - Scenes (labeled inclusive frame ranges)
//! - Scening lists exposed as a fixed-column table
//! - Change notifications over channels
//! - The named list-of-lists owned by the host

pub mod events;
pub mod list;
pub mod lists;
pub mod scene;

pub use events::{SceningListEvent, Subscription};
pub use list::{CellValue, Column, SceningList, SharedSceningList};
pub use lists::SceningLists;
pub use scene::Scene;
