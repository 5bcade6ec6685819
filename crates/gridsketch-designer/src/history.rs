//! Command history for undo-by-redraw.
//!
//! A singly linked list of drawn shapes. Identifiers are positional: the
//! live records are always numbered `1..=len` with no gaps, and removing a
//! record renumbers everything after it. The history itself is the anchor
//! of the list and owns identifier 0, which can never be deleted.

use crate::canvas::Canvas;
use crate::shapes::{Shape, ShapeKind};
use gridsketch_core::HistoryError;
use std::fmt;
use tracing::{debug, warn};

/// Identifier held by the list anchor.
pub const ROOT_ID: usize = 0;

/// Printed in place of the listing when nothing has been drawn.
pub const EMPTY_HISTORY_MESSAGE: &str = "No commands in history.";

/// One successfully drawn shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRecord {
    pub id: usize,
    pub shape: Shape,
}

impl CommandRecord {
    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    pub fn params(&self) -> [i64; 4] {
        self.shape.params()
    }
}

impl fmt::Display for CommandRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " {}: {}", self.id, self.shape)
    }
}

#[derive(Debug)]
struct HistoryNode {
    record: CommandRecord,
    next: Option<Box<HistoryNode>>,
}

/// Ordered, deletable record of drawn shapes.
#[derive(Debug, Default)]
pub struct CommandHistory {
    head: Option<Box<HistoryNode>>,
    len: usize,
}

impl CommandHistory {
    /// Creates an empty history holding only the anchor.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Links a new record at the tail and returns its identifier, one greater
    /// than the current tail's.
    pub fn append(&mut self, shape: Shape) -> usize {
        let mut tail_id = ROOT_ID;
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            tail_id = node.record.id;
            cursor = &mut node.next;
        }

        let id = tail_id + 1;
        *cursor = Some(Box::new(HistoryNode {
            record: CommandRecord { id, shape },
            next: None,
        }));
        self.len += 1;
        debug!("Recorded {} as command {}", shape.kind(), id);
        id
    }

    /// Unlinks the record with `id` and renumbers every later record so the
    /// identifiers stay dense. Returns `None` when no record matches.
    pub fn remove(&mut self, id: usize) -> Option<CommandRecord> {
        if id == ROOT_ID {
            return None;
        }

        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| node.record.id != id) {
            cursor = &mut cursor.as_mut()?.next;
        }

        let mut removed = cursor.take()?;
        *cursor = removed.next.take();
        self.len -= 1;

        let mut next_id = id;
        let mut link = cursor.as_deref_mut();
        while let Some(node) = link {
            node.record.id = next_id;
            next_id += 1;
            link = node.next.as_deref_mut();
        }

        Some(removed.record)
    }

    /// Deletes the record with `id`, erasing its shape from the canvas.
    pub fn delete_by_id(
        &mut self,
        id: i64,
        canvas: &mut Canvas,
    ) -> Result<CommandRecord, HistoryError> {
        let record = usize::try_from(id)
            .ok()
            .and_then(|id| self.remove(id))
            .ok_or(HistoryError::NotFound { id })?;

        if let Err(err) = record.shape.undraw(canvas) {
            warn!("Could not erase command {} ({}): {}", id, record.shape, err);
        }
        debug!("Deleted command {}: {}", id, record.shape);
        Ok(record)
    }

    /// Deletes every record by repeatedly removing position 1, undrawing each
    /// shape once. Returns how many records were removed.
    pub fn clear(&mut self, canvas: &mut Canvas) -> usize {
        let mut removed = 0;
        while self.delete_by_id(1, canvas).is_ok() {
            removed += 1;
        }
        removed
    }

    /// Drops every record without touching any canvas.
    pub fn release_all(&mut self) -> usize {
        let released = self.len;
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
        released
    }

    pub fn get(&self, id: usize) -> Option<&CommandRecord> {
        self.iter().find(|record| record.id == id)
    }

    /// Records in identifier order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Human readable listing, one line per record, or the empty-history
    /// message when nothing has been drawn.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        let empty = self.is_empty().then(|| EMPTY_HISTORY_MESSAGE.to_string());
        empty
            .into_iter()
            .chain(self.iter().map(CommandRecord::to_string))
    }
}

impl Drop for CommandHistory {
    fn drop(&mut self) {
        self.release_all();
    }
}

impl<'a> IntoIterator for &'a CommandHistory {
    type Item = &'a CommandRecord;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over history records.
pub struct Iter<'a> {
    next: Option<&'a HistoryNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a CommandRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.record
        })
    }
}
