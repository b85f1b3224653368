//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready strings only: prices are formatted,
//! asset URLs resolved, and highlight ranges pre-computed.

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    /// "All" followed by one chip per category.
    pub category_bar: Vec<CategoryChip>,

    /// Present while in search mode.
    pub search_bar: Option<SearchBarInfo>,

    /// Visible window of section and product rows.
    pub rows: Vec<DisplayRow>,

    pub footer: FooterInfo,

    /// Replaces the row list when there is nothing to show.
    pub empty_state: Option<EmptyState>,

    /// Drawn over everything else while the lightbox is open.
    pub lightbox: Option<LightboxView>,
}

/// Site branding and load status for the top of the screen.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
    pub subtitle: Option<String>,
    /// Resolved logo URL, if the site has one.
    pub logo_url: Option<String>,
    /// Data freshness or fallback notice, e.g. "updated 3m ago".
    pub status: String,
    /// Whether `status` reports a problem.
    pub is_degraded: bool,
}

/// One entry of the category filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryChip {
    pub label: String,
    pub is_selected: bool,
}

/// A line in the menu list.
#[derive(Debug, Clone)]
pub enum DisplayRow {
    Section(SectionRow),
    Product(ProductRow),
}

/// Category heading.
#[derive(Debug, Clone)]
pub struct SectionRow {
    pub name: String,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub product_count: usize,
}

/// A dish.
#[derive(Debug, Clone)]
pub struct ProductRow {
    pub name: String,
    pub price: String,
    pub is_available: bool,
    pub description: Option<String>,
    /// URL of the image the carousel currently shows.
    pub image_url: Option<String>,
    /// "2/3" when the product has several images.
    pub image_position: Option<String>,
    pub is_selected: bool,
    /// Character ranges of `name` that match the search query.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    pub query: String,
    pub is_typing: bool,
}

/// Full-screen image viewer contents.
#[derive(Debug, Clone)]
pub struct LightboxView {
    pub title: String,
    pub price: String,
    pub image_url: String,
    /// "2 / 5"
    pub counter: String,
    pub thumbnails: Vec<Thumbnail>,
}

/// One slot of the lightbox thumbnail strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub label: String,
    pub is_current: bool,
}
