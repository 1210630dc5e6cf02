//! The demo's list model — the host side of the selector.
//!
//! Owns the rows, the selection store and the scroll position.  Rows are one
//! terminal line tall, so content units are lines.

use std::collections::HashSet;

use crate::core::{
    BridgeError, RowIndex, RowMetrics, ScrollHost, SelectionBridge, ViewportGeometry,
};

/// One list entry.  `id` survives reloads; its position does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: u64,
    pub label: String,
}

#[derive(Debug, Default)]
pub struct ListModel {
    items: Vec<Item>,
    /// Selected item ids.
    selected: HashSet<u64>,
    /// First visible row.
    offset: usize,
    viewport_height: usize,
    /// Bumped on every reload.
    generation: u64,
    /// Scroll requested by the selector but not yet applied.
    pending_scroll: f64,
}

impl ListModel {
    pub fn new(count: usize) -> Self {
        let items = (0..count as u64)
            .map(|id| Item {
                id,
                label: format!("Item {:03}", id + 1),
            })
            .collect();
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_row_selected(&self, row: usize) -> bool {
        self.items
            .get(row)
            .is_some_and(|item| self.selected.contains(&item.id))
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Positions of selected rows, ascending.
    pub fn selected_rows(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.selected.contains(&item.id))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    fn max_offset(&self) -> usize {
        self.items.len().saturating_sub(self.viewport_height)
    }

    /// Returns `true` when the offset changed.
    pub fn set_viewport_height(&mut self, height: usize) -> bool {
        self.viewport_height = height;
        let clamped = self.offset.min(self.max_offset());
        let changed = clamped != self.offset;
        self.offset = clamped;
        changed
    }

    /// Scroll by `delta` rows, clamped to the content.  Returns `true` when
    /// the offset changed.
    pub fn scroll_by(&mut self, delta: isize) -> bool {
        let target = self
            .offset
            .saturating_add_signed(delta)
            .min(self.max_offset());
        let changed = target != self.offset;
        self.offset = target;
        changed
    }

    pub fn geometry(&self) -> ViewportGeometry {
        ViewportGeometry::new(
            self.offset as f64,
            self.viewport_height as f64,
            RowMetrics::uniform(1.0, self.items.len()),
        )
    }

    /// Whole rows of pending scroll, leaving any fraction queued.
    pub fn take_pending_scroll(&mut self) -> Option<isize> {
        let whole = self.pending_scroll.trunc();
        if whole == 0.0 {
            return None;
        }
        self.pending_scroll -= whole;
        Some(whole as isize)
    }

    /// Reverse the row order.  Item identities (and so the selection) are
    /// kept, but every row index now points at a different item.
    pub fn reload(&mut self) {
        self.items.reverse();
        self.generation += 1;
        self.pending_scroll = 0.0;
        self.offset = self.offset.min(self.max_offset());
    }
}

impl SelectionBridge for ListModel {
    fn is_selected(&self, row: RowIndex) -> Result<bool, BridgeError> {
        self.items
            .get(row.get())
            .map(|item| self.selected.contains(&item.id))
            .ok_or(BridgeError::UnknownRow(row))
    }

    fn set_selected(&mut self, row: RowIndex, selected: bool) {
        let Some(item) = self.items.get(row.get()) else {
            tracing::warn!(%row, "set_selected on unknown row");
            return;
        };
        if selected {
            self.selected.insert(item.id);
        } else {
            self.selected.remove(&item.id);
        }
    }
}

impl ScrollHost for ListModel {
    fn request_scroll(&mut self, by: f64) {
        self.pending_scroll += by;
    }
}
