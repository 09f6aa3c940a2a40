//! Client-side listing logic shared by every remote table: search filtering,
//! page arithmetic, the one-shot fetch lifecycle and the per-screen view state.
//!
//! Everything here is a pure function of its inputs so the UI can recompute
//! it on every render without storing derived values.

use crate::error::FetchError;

/// Number of rows shown per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// An entity that can be matched against a free-text search query.
pub trait Searchable {
    /// Display fields checked by [`filter`]. An item matches when any of
    /// them contains the query.
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match against [`Self::search_fields`].
    ///
    /// `needle` must already be lowercased.
    fn matches_lowercase(&self, needle: &str) -> bool {
        self.search_fields()
            .into_iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

// ── Search ──────────────────────────────────────────────────────────

/// Keep the items whose search fields contain `query`, ignoring case.
///
/// The result preserves the original relative order. An empty query
/// matches everything.
pub fn filter<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    if query.is_empty() {
        return items.iter().collect();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.matches_lowercase(&needle))
        .collect()
}

// ── Pagination ──────────────────────────────────────────────────────

/// `ceil(len / page_size)`; zero for an empty collection.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    len.div_ceil(page_size)
}

/// The 1-based `page` of `items`. Out-of-range pages yield an empty slice.
pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> &[T] {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Previous page, never below 1.
pub fn previous_page(current: usize) -> usize {
    current.saturating_sub(1).max(1)
}

/// Next page, never beyond the last page. Page 1 stays valid when there
/// are no pages at all.
pub fn next_page(current: usize, total_pages: usize) -> usize {
    (current + 1).min(total_pages.max(1))
}

/// Clamp a requested page into `[1, max(1, total_pages)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

// ── Fetch lifecycle ─────────────────────────────────────────────────

/// Lifecycle of a one-shot list fetch: `Loading` until the request
/// completes, then `Ready` or `Failed` for the rest of the screen's life.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Ready(Vec<T>),
    Failed(FetchError),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Loading
    }
}

impl<T> FetchState<T> {
    pub fn from_result(result: Result<Vec<T>, FetchError>) -> Self {
        match result {
            Ok(items) => FetchState::Ready(items),
            Err(e) => FetchState::Failed(e),
        }
    }

    /// Fetched items, empty unless `Ready`.
    pub fn items(&self) -> &[T] {
        match self {
            FetchState::Ready(items) => items,
            _ => &[],
        }
    }
}

// ── View state ──────────────────────────────────────────────────────

/// User interaction record for one table screen.
///
/// `S` is the type of the selectable detail record; screens without a
/// detail modal never call [`ViewState::select`].
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState<S> {
    pub query: String,
    pub page: usize,
    pub selected: Option<S>,
}

impl<S> Default for ViewState<S> {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            selected: None,
        }
    }
}

impl<S> ViewState<S> {
    /// Replace the search query. Always resets to the first page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    pub fn previous(&mut self) {
        self.page = previous_page(self.page);
    }

    pub fn next(&mut self, total_pages: usize) {
        self.page = next_page(self.page, total_pages);
    }

    /// Show the detail for `item`. A later selection overwrites it.
    pub fn select(&mut self, item: S) {
        self.selected = Some(item);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

/// The rows visible for the current query and page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a, T> {
    pub rows: Vec<&'a T>,
    /// Current page, clamped into `[1, max(1, total_pages)]`.
    pub page: usize,
    pub total_pages: usize,
    pub filtered_len: usize,
}

impl<T> PageView<'_, T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.filtered_len == 0
    }
}

/// Filter `items` by the view's query and cut out the view's page.
pub fn derive_page<'a, T: Searchable, S>(
    items: &'a [T],
    view: &ViewState<S>,
    page_size: usize,
) -> PageView<'a, T> {
    let filtered = filter(items, &view.query);
    let total = total_pages(filtered.len(), page_size);
    let page = clamp_page(view.page, total);
    let rows = paginate(&filtered, page_size, page).to_vec();
    PageView {
        rows,
        page,
        total_pages: total,
        filtered_len: filtered.len(),
    }
}
