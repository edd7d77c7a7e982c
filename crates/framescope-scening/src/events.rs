//! Change notifications for scening lists.
//!
//! Every subscriber owns the receiving end of an unbounded channel. Dropping
//! the [`Subscription`] detaches it; the list prunes the dead sender the next
//! time it emits.

use crossbeam_channel::{Receiver, Sender};
use tracing::trace;

/// A structural or data change on a scening list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceningListEvent {
    /// Rows `first..=last` were inserted.
    RowsInserted { first: usize, last: usize },
    /// Rows `first..=last` were removed.
    RowsRemoved { first: usize, last: usize },
    /// The row at `from` now lives at `to` (post-move index).
    RowsMoved { from: usize, to: usize },
    /// Cells of `row` changed in place.
    DataChanged { row: usize },
    /// The list name changed.
    Renamed,
}

/// Receiving end of a list's change notifications.
#[derive(Debug)]
pub struct Subscription {
    receiver: Receiver<SceningListEvent>,
}

impl Subscription {
    /// Next pending event, if any.
    pub fn try_recv(&self) -> Option<SceningListEvent> {
        self.receiver.try_recv().ok()
    }

    /// All pending events, oldest first.
    pub fn drain(&self) -> Vec<SceningListEvent> {
        self.receiver.try_iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}

#[derive(Debug, Default)]
pub(crate) struct Observers {
    senders: Vec<Sender<SceningListEvent>>,
}

impl Observers {
    pub(crate) fn subscribe(&mut self) -> Subscription {
        let (sender, receiver) = crossbeam_channel::unbounded();
        self.senders.push(sender);
        Subscription { receiver }
    }

    pub(crate) fn emit(&mut self, event: SceningListEvent) {
        self.senders.retain(|sender| sender.send(event).is_ok());
        trace!(?event, subscribers = self.senders.len(), "scening list event");
    }

    pub(crate) fn len(&self) -> usize {
        self.senders.len()
    }
}
