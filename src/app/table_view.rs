//! App-side model of the virtualized result table.
//!
//! Holds the incrementally loaded row buffer, the paging generation, the
//! scroll window and column sizing. Rendering reads from here; page fetches
//! leave as [`PageRequest`]s and come back through
//! [`TableView::on_page_loaded`].

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::domain::{SortDirective, TabularResult};
use crate::observer::ViewportObservers;
use crate::pagination::{DEFAULT_PAGE_SIZE, Page, PageFetcher};
use crate::result_processor::{ProcessedRows, SearchTerms, process};
use crate::viewport::{
    OVERSCAN_ROWS, RowWindow, clamp_scroll, column_widths, follow_column, scroll_by,
    visible_columns, visible_rows,
};

pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(200);

pub const NO_MATCH_MESSAGE: &str = "No results match your search.";
pub const NO_DATA_MESSAGE: &str = "No data available.";

#[derive(Debug, Clone)]
pub struct PageRequest {
    pub fetcher: Arc<PageFetcher>,
    pub generation: u64,
    pub page: usize,
}

#[derive(Debug, Clone)]
pub struct TableView {
    source: Option<Arc<TabularResult>>,
    search_input: String,
    applied_search: String,
    search_debounce: Option<Instant>,
    sort: SortDirective,
    page_size: usize,
    generation: u64,
    fetcher: Option<Arc<PageFetcher>>,
    buffer: Vec<usize>,
    next_page: usize,
    has_more: bool,
    in_flight: bool,
    first_page_loaded: bool,
    scroll_offset: usize,
    viewport_width: u16,
    viewport_height: u16,
    column_widths: Vec<u16>,
    highlighted_column: usize,
    column_offset: usize,
    observers: Option<ViewportObservers>,
}

impl Default for TableView {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl TableView {
    pub fn new(page_size: usize) -> Self {
        Self {
            source: None,
            search_input: String::new(),
            applied_search: String::new(),
            search_debounce: None,
            sort: SortDirective::default(),
            page_size: page_size.max(1),
            generation: 0,
            fetcher: None,
            buffer: Vec::new(),
            next_page: 0,
            has_more: false,
            in_flight: false,
            first_page_loaded: false,
            scroll_offset: 0,
            viewport_width: 0,
            viewport_height: 0,
            column_widths: Vec::new(),
            highlighted_column: 0,
            column_offset: 0,
            observers: None,
        }
    }

    // ---- lifecycle ----

    /// Shows a new result. Any previous subscriptions are torn down first,
    /// search and sort start from scratch.
    pub fn mount(&mut self, source: Arc<TabularResult>) -> PageRequest {
        self.unmount();

        self.column_widths = column_widths(self.viewport_width, source.column_count());
        self.source = Some(source);
        self.search_input.clear();
        self.applied_search.clear();
        self.search_debounce = None;
        self.sort = SortDirective::default();
        self.highlighted_column = 0;
        self.column_offset = 0;

        let mut observers = ViewportObservers::connect();
        observers
            .resize
            .observe(self.viewport_width, self.viewport_height);
        self.observers = Some(observers);

        self.restart()
    }

    pub fn unmount(&mut self) {
        if let Some(observers) = self.observers.as_mut() {
            observers.disconnect();
        }
        self.observers = None;
        self.source = None;
        self.fetcher = None;
        self.buffer.clear();
        self.generation += 1;
        self.next_page = 0;
        self.has_more = false;
        self.in_flight = false;
        self.first_page_loaded = false;
        self.scroll_offset = 0;
        self.search_debounce = None;
        self.column_widths.clear();
    }

    pub fn is_mounted(&self) -> bool {
        self.source.is_some()
    }

    /// Re-runs processing with the current search and sort and asks for
    /// page 0 under a fresh generation.
    fn restart(&mut self) -> PageRequest {
        self.generation += 1;

        let processed = match &self.source {
            Some(source) => process(
                source,
                &SearchTerms::single(&self.applied_search),
                &self.sort,
            ),
            None => ProcessedRows::unprocessed(Arc::new(TabularResult::default())),
        };
        let fetcher = Arc::new(PageFetcher::new(processed, self.page_size));
        self.fetcher = Some(Arc::clone(&fetcher));

        self.buffer.clear();
        self.next_page = 0;
        self.has_more = false;
        self.in_flight = true;
        self.first_page_loaded = false;
        self.scroll_offset = 0;

        PageRequest {
            fetcher,
            generation: self.generation,
            page: 0,
        }
    }

    // ---- paging ----

    /// Applies a fetched page. Pages from an older generation are dropped.
    /// Page 0 replaces the buffer; later pages append.
    pub fn on_page_loaded(&mut self, generation: u64, page: Page) -> Option<PageRequest> {
        if generation != self.generation || !self.is_mounted() {
            return None;
        }
        self.in_flight = false;
        if page.number == 0 {
            self.buffer = page.rows;
        } else {
            self.buffer.extend(page.rows);
        }
        self.next_page = page.number + 1;
        self.has_more = page.has_more;
        self.first_page_loaded = true;
        self.poll_sentinel()
    }

    /// A failed fetch stops incremental growth; loaded rows stay.
    pub fn on_page_failed(&mut self, generation: u64) {
        if generation != self.generation {
            return;
        }
        self.in_flight = false;
        self.has_more = false;
    }

    /// Requests the next page when the sentinel row is near the viewport.
    pub fn poll_sentinel(&mut self) -> Option<PageRequest> {
        if self.in_flight || !self.has_more {
            return None;
        }
        let intersecting = self.observers.as_ref().is_some_and(|o| {
            o.intersection
                .is_intersecting(self.buffer.len(), self.scroll_offset, self.visible_rows())
        });
        if !intersecting {
            return None;
        }
        let fetcher = Arc::clone(self.fetcher.as_ref()?);
        self.in_flight = true;
        Some(PageRequest {
            fetcher,
            generation: self.generation,
            page: self.next_page,
        })
    }

    // ---- viewport ----

    /// Feeds a measured container size through the resize subscription.
    pub fn measure(&mut self, width: u16, height: u16) -> Option<PageRequest> {
        let changed = match self.observers.as_mut() {
            Some(observers) => observers.resize.observe(width, height),
            None => {
                self.viewport_width = width;
                self.viewport_height = height;
                false
            }
        };
        if changed {
            self.viewport_width = width;
            self.viewport_height = height;
            let count = self.source.as_ref().map_or(0, |s| s.column_count());
            self.column_widths = column_widths(width, count);
            self.column_offset = follow_column(
                &self.column_widths,
                self.column_offset,
                self.highlighted_column,
                width,
            );
            self.scroll_offset =
                clamp_scroll(self.scroll_offset, self.buffer.len(), self.visible_rows());
        }
        self.poll_sentinel()
    }

    pub fn scroll(&mut self, delta: isize) -> Option<PageRequest> {
        self.scroll_offset = scroll_by(
            self.scroll_offset,
            delta,
            self.buffer.len(),
            self.visible_rows(),
        );
        self.poll_sentinel()
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) -> Option<PageRequest> {
        self.scroll_offset = clamp_scroll(usize::MAX, self.buffer.len(), self.visible_rows());
        self.poll_sentinel()
    }

    pub fn visible_rows(&self) -> usize {
        visible_rows(self.viewport_height)
    }

    pub fn window(&self) -> RowWindow {
        RowWindow::compute(
            self.scroll_offset,
            self.visible_rows(),
            self.buffer.len(),
            OVERSCAN_ROWS,
        )
    }

    /// Rows of the current window, paired with their buffer position.
    pub fn materialized_rows(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.window()
            .range()
            .filter_map(|pos| self.row_at(pos).map(|row| (pos, row)))
    }

    pub fn row_at(&self, position: usize) -> Option<&[String]> {
        let handle = *self.buffer.get(position)?;
        self.source.as_ref()?.row(handle)
    }

    pub fn visible_column_range(&self) -> std::ops::Range<usize> {
        visible_columns(&self.column_widths, self.column_offset, self.viewport_width)
    }

    // ---- columns and sorting ----

    pub fn move_column(&mut self, delta: isize) {
        let count = self.column_count();
        if count == 0 {
            return;
        }
        let target = if delta.is_negative() {
            self.highlighted_column.saturating_sub(delta.unsigned_abs())
        } else {
            self.highlighted_column.saturating_add(delta.unsigned_abs())
        };
        self.highlighted_column = target.min(count - 1);
        self.column_offset = follow_column(
            &self.column_widths,
            self.column_offset,
            self.highlighted_column,
            self.viewport_width,
        );
    }

    /// Sorts by the header at `index`. Same column flips direction, another
    /// column starts ascending.
    pub fn sort_by_column(&mut self, index: usize) -> Option<PageRequest> {
        let header = self.source.as_ref()?.headers().get(index)?.clone();
        self.sort = self.sort.toggled(&header);
        self.highlighted_column = index;
        Some(self.restart())
    }

    pub fn sort_highlighted(&mut self) -> Option<PageRequest> {
        self.sort_by_column(self.highlighted_column)
    }

    // ---- search ----

    pub fn set_search_input(&mut self, text: String, now: Instant) {
        self.search_input = text;
        self.search_debounce = Some(now + SEARCH_DEBOUNCE);
    }

    pub fn push_search_char(&mut self, c: char, now: Instant) {
        let mut text = std::mem::take(&mut self.search_input);
        text.push(c);
        self.set_search_input(text, now);
    }

    pub fn pop_search_char(&mut self, now: Instant) {
        let mut text = std::mem::take(&mut self.search_input);
        text.pop();
        self.set_search_input(text, now);
    }

    /// Applies the typed search once the debounce has settled. Returns a
    /// page-0 request when the applied term actually changed.
    pub fn apply_search(&mut self) -> Option<PageRequest> {
        self.search_debounce = None;
        if !self.is_mounted() || self.search_input == self.applied_search {
            return None;
        }
        self.applied_search.clone_from(&self.search_input);
        Some(self.restart())
    }

    pub fn clear_search(&mut self) -> Option<PageRequest> {
        self.search_input.clear();
        self.apply_search()
    }

    pub fn search_debounce(&self) -> Option<Instant> {
        self.search_debounce
    }

    // ---- accessors ----

    pub fn source(&self) -> Option<&Arc<TabularResult>> {
        self.source.as_ref()
    }

    pub fn headers(&self) -> &[String] {
        self.source.as_ref().map_or(&[], |s| s.headers())
    }

    pub fn column_count(&self) -> usize {
        self.headers().len()
    }

    /// Every processed row (not only the loaded ones) for copy and export.
    pub fn processed(&self) -> Option<&ProcessedRows> {
        self.fetcher.as_ref().map(|f| f.rows())
    }

    pub fn sort(&self) -> &SortDirective {
        &self.sort
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn applied_search(&self) -> &str {
        &self.applied_search
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn loaded_len(&self) -> usize {
        self.buffer.len()
    }

    pub fn total_len(&self) -> usize {
        self.fetcher.as_ref().map_or(0, |f| f.total())
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn highlighted_column(&self) -> usize {
        self.highlighted_column
    }

    pub fn column_offset(&self) -> usize {
        self.column_offset
    }

    pub fn column_widths(&self) -> &[u16] {
        &self.column_widths
    }

    /// Last measured (width, height) of the table body.
    pub fn viewport_size(&self) -> (u16, u16) {
        (self.viewport_width, self.viewport_height)
    }

    pub fn observers(&self) -> Option<&ViewportObservers> {
        self.observers.as_ref()
    }

    /// Text for an empty table, or `None` while rows exist or page 0 is
    /// still pending.
    pub fn empty_message(&self) -> Option<&'static str> {
        if !self.first_page_loaded || !self.buffer.is_empty() {
            return None;
        }
        if self.applied_search.is_empty() {
            Some(NO_DATA_MESSAGE)
        } else {
            Some(NO_MATCH_MESSAGE)
        }
    }
}
