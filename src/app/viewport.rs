//! Scroll-window and column-width math for the virtualized result table.
//!
//! Everything here is integer terminal cells; one data row is one line.

use std::ops::Range;

pub const MIN_COLUMN_WIDTH: u16 = 12;
pub const ROW_HEIGHT: u16 = 1;
/// Rows materialized above and below the visible window.
pub const OVERSCAN_ROWS: usize = 5;

/// Half-open range of row positions that get materialized for a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowWindow {
    pub start: usize,
    pub end: usize,
}

impl RowWindow {
    /// `[offset - overscan, offset + visible + overscan)` clamped to `len`.
    pub fn compute(offset: usize, visible_rows: usize, len: usize, overscan: usize) -> Self {
        let start = offset.saturating_sub(overscan).min(len);
        let end = offset
            .saturating_add(visible_rows)
            .saturating_add(overscan)
            .min(len);
        Self {
            start,
            end: end.max(start),
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, position: usize) -> bool {
        (self.start..self.end).contains(&position)
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

pub fn visible_rows(pane_height: u16) -> usize {
    (pane_height / ROW_HEIGHT) as usize
}

/// Largest offset that still fills the pane.
pub fn max_scroll_offset(len: usize, visible_rows: usize) -> usize {
    len.saturating_sub(visible_rows)
}

pub fn clamp_scroll(offset: usize, len: usize, visible_rows: usize) -> usize {
    offset.min(max_scroll_offset(len, visible_rows))
}

/// Moves `offset` by `delta` and clamps the result into the scrollable range.
pub fn scroll_by(offset: usize, delta: isize, len: usize, visible_rows: usize) -> usize {
    let moved = if delta.is_negative() {
        offset.saturating_sub(delta.unsigned_abs())
    } else {
        offset.saturating_add(delta.unsigned_abs())
    };
    clamp_scroll(moved, len, visible_rows)
}

/// Per-column widths for a container `container` cells wide.
///
/// Each column gets `max(container / count, MIN_COLUMN_WIDTH)`. When that
/// leaves slack (only possible when the minimum did not kick in), the
/// division remainder goes one cell at a time to the leftmost columns so the
/// widths sum to the container exactly.
pub fn column_widths(container: u16, count: usize) -> Vec<u16> {
    if count == 0 {
        return Vec::new();
    }
    let count_u16 = u16::try_from(count).unwrap_or(u16::MAX);
    let base = (container / count_u16).max(MIN_COLUMN_WIDTH);
    let mut widths = vec![base; count];

    let total: u32 = widths.iter().map(|w| u32::from(*w)).sum();
    let slack = u32::from(container).saturating_sub(total) as usize;
    for width in widths.iter_mut().take(slack) {
        *width += 1;
    }
    widths
}

/// Columns `[offset, end)` that fit into `available` cells. At least one
/// column is returned whenever `offset` is in range.
pub fn visible_columns(widths: &[u16], offset: usize, available: u16) -> Range<usize> {
    if offset >= widths.len() {
        return offset..offset;
    }
    let mut used: u32 = 0;
    let mut end = offset;
    for width in &widths[offset..] {
        let next = used + u32::from(*width);
        if next > u32::from(available) && end > offset {
            break;
        }
        used = next;
        end += 1;
    }
    offset..end
}

/// Returns a column offset that keeps `highlighted` on screen, moving the
/// current offset as little as possible.
pub fn follow_column(widths: &[u16], current: usize, highlighted: usize, available: u16) -> usize {
    if widths.is_empty() {
        return 0;
    }
    let highlighted = highlighted.min(widths.len() - 1);
    if highlighted < current {
        return highlighted;
    }
    let mut offset = current.min(highlighted);
    while offset < highlighted && !visible_columns(widths, offset, available).contains(&highlighted)
    {
        offset += 1;
    }
    offset
}
