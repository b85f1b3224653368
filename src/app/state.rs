//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the plugin: the menu as
//! fetched, the filtered view derived from it, the selection, the image
//! navigation state, and the site settings.
//!
//! # State Components
//!
//! - **Categories**: Menu exactly as the backend (or the sample data) provided it
//! - **Filtered**: Categories left after applying [`FilterState`]
//! - **Selection**: Index into the products of `filtered`, in display order
//! - **Lightbox**: Image viewer cursor, scoped to one filtered category
//! - **Carousel**: Image pager for the selected product
//! - **Settings**: Site branding and colors, with where they came from
//!
//! `filtered` is recomputed by [`AppState::apply_filter`] whenever the source
//! menu or the filter changes; nothing else writes to it.

use super::modes::{DataSource, InputMode, SearchFocus};
use crate::api::{resolve_asset_url, Endpoint};
use crate::catalog::{highlight, FilterState};
use crate::domain::{Category, CategoryId, Product, ProductId, SiteSettings};
use crate::gallery::{image_subset, Carousel, Lightbox};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CategoryChip, DisplayRow, EmptyState, FooterInfo, HeaderInfo, LightboxView, ProductRow,
    SearchBarInfo, SectionRow, Thumbnail, UIViewModel,
};
use std::collections::BTreeSet;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3600;
const SECONDS_PER_DAY: i64 = 86400;

/// Longest product name shown before truncation, in characters.
const MAX_NAME_CHARS: usize = 32;

/// Presentation settings taken from the plugin configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Origin used for API requests and asset URL resolution.
    pub backend_origin: String,
    /// Suffix appended to prices.
    pub currency: String,
    /// Whether the site's colors override the theme accents.
    pub site_colors: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            backend_origin: "http://localhost:5000".to_string(),
            currency: "ر.س".to_string(),
            site_colors: true,
        }
    }
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Menu as last loaded. Replaced wholesale, never edited in place.
    pub categories: Vec<Category>,

    /// Categories matching `filter`, in source order.
    pub filtered: Vec<Category>,

    pub filter: FilterState,

    /// Index of the selected product across all of `filtered`.
    pub selected_index: usize,

    pub input_mode: InputMode,

    pub lightbox: Lightbox,

    /// Filtered category whose products feed the lightbox.
    pub lightbox_scope: Option<CategoryId>,

    /// Image pager for the selected product.
    pub carousel: Carousel,

    pub settings: SiteSettings,

    pub menu_source: DataSource,

    pub settings_source: DataSource,

    /// Endpoints with a request in flight.
    pub pending: BTreeSet<Endpoint>,

    /// Unix timestamp of the last menu install.
    pub loaded_at: Option<i64>,

    /// Base color scheme; see [`AppState::effective_theme`].
    pub theme: Theme,

    pub options: DisplayOptions,
}

impl AppState {
    /// Creates an empty state that is waiting for its first menu.
    #[must_use]
    pub fn new(theme: Theme, options: DisplayOptions) -> Self {
        Self {
            categories: vec![],
            filtered: vec![],
            filter: FilterState::default(),
            selected_index: 0,
            input_mode: InputMode::Normal,
            lightbox: Lightbox::Closed,
            lightbox_scope: None,
            carousel: Carousel::default(),
            settings: SiteSettings::default(),
            menu_source: DataSource::Loading,
            settings_source: DataSource::Loading,
            pending: BTreeSet::new(),
            loaded_at: None,
            theme,
            options,
        }
    }

    /// Replaces the menu and re-derives everything that depends on it.
    ///
    /// A selected category that no longer exists is dropped from the filter.
    pub fn install_menu(&mut self, categories: Vec<Category>, source: DataSource) {
        tracing::debug!(
            category_count = categories.len(),
            source = ?source,
            "installing menu"
        );

        self.categories = categories;
        self.menu_source = source;
        self.loaded_at = Some(chrono::Utc::now().timestamp());

        if let Some(id) = self.filter.selected_category {
            if !self.categories.iter().any(|c| c.id == id) {
                tracing::debug!(category_id = id, "selected category gone after reload");
                self.filter.selected_category = None;
            }
        }

        self.apply_filter();
    }

    pub fn install_settings(&mut self, settings: SiteSettings, source: DataSource) {
        tracing::debug!(site_name = %settings.site_name, source = ?source, "installing settings");
        self.settings = settings;
        self.settings_source = source;
    }

    /// Recomputes `filtered` and keeps the selection and image state valid.
    ///
    /// The selection stays on the same product when it is still visible,
    /// otherwise it is clamped. The carousel resets when the selected product
    /// changes and an open lightbox is reconciled with its new candidates.
    pub fn apply_filter(&mut self) {
        let previous = self.selected_key();

        self.filtered = self.filter.apply(&self.categories);

        let keys = self.product_keys();
        let index = previous
            .and_then(|key| keys.iter().position(|k| *k == key))
            .unwrap_or_else(|| self.selected_index.min(keys.len().saturating_sub(1)));
        self.selected_index = index;

        if self.selected_key() != previous {
            self.carousel.reset();
        }

        self.lightbox
            .reconcile(candidates_in(&self.filtered, self.lightbox_scope));
        if !self.lightbox.is_open() {
            self.lightbox_scope = None;
        }

        tracing::debug!(
            filtered_categories = self.filtered.len(),
            visible_products = keys.len(),
            selected_index = self.selected_index,
            "filter applied"
        );
    }

    /// Moves selection down by one product, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let count = self.product_count();
        if count == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % count;
        self.carousel.reset();
    }

    /// Moves selection up by one product, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let count = self.product_count();
        if count == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = count - 1;
        } else {
            self.selected_index -= 1;
        }
        self.carousel.reset();
    }

    /// The selected product together with its (filtered) category.
    #[must_use]
    pub fn selected_entry(&self) -> Option<(&Category, &Product)> {
        self.filtered
            .iter()
            .flat_map(|category| category.products.iter().map(move |p| (category, p)))
            .nth(self.selected_index)
    }

    #[must_use]
    pub fn selected_product(&self) -> Option<&Product> {
        self.selected_entry().map(|(_, product)| product)
    }

    /// Products the lightbox currently pages through.
    #[must_use]
    pub fn lightbox_candidates(&self) -> &[Product] {
        candidates_in(&self.filtered, self.lightbox_scope)
    }

    /// Opens the lightbox on the selected product's image.
    ///
    /// Candidates are the other products of the same filtered category.
    /// Returns `false` when nothing is selected or the product has no image.
    pub fn open_lightbox(&mut self) -> bool {
        let Some((category, product)) = self.selected_entry() else {
            return false;
        };
        let Some(image) = product.primary_image().map(str::to_string) else {
            tracing::debug!(product = %product.name, "selected product has no image");
            return false;
        };
        let scope = category.id;

        self.lightbox_scope = Some(scope);
        self.lightbox
            .open(&image, candidates_in(&self.filtered, self.lightbox_scope));
        true
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox.close();
        self.lightbox_scope = None;
    }

    pub fn lightbox_next(&mut self) {
        self.lightbox
            .next(candidates_in(&self.filtered, self.lightbox_scope));
    }

    pub fn lightbox_previous(&mut self) {
        self.lightbox
            .previous(candidates_in(&self.filtered, self.lightbox_scope));
    }

    /// Jumps to a thumbnail. Out-of-range indices are ignored.
    pub fn select_thumbnail(&mut self, index: usize) -> bool {
        let len = image_subset(self.lightbox_candidates()).len();
        if index >= len {
            return false;
        }
        self.lightbox.select_thumbnail(index);
        true
    }

    pub fn carousel_next(&mut self) {
        let len = self.selected_product().map_or(0, |p| p.images.len());
        self.carousel.next(len);
    }

    pub fn carousel_previous(&mut self) {
        let len = self.selected_product().map_or(0, |p| p.images.len());
        self.carousel.previous(len);
    }

    /// Jumps the carousel to one of the selected product's images.
    pub fn select_product_image(&mut self, index: usize) -> bool {
        let len = self.selected_product().map_or(0, |p| p.images.len());
        if index >= len {
            return false;
        }
        self.carousel.select(index);
        true
    }

    /// Theme to render with: the base theme, recolored by the site settings
    /// when enabled and settings have arrived.
    #[must_use]
    pub fn effective_theme(&self) -> Theme {
        if self.options.site_colors && self.settings_source != DataSource::Loading {
            self.theme.with_site_colors(&self.settings)
        } else {
            self.theme.clone()
        }
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Build every section and product row of the filtered menu
    /// 2. Subtract the chrome (header, category bar, search bar, footer) from `rows`
    /// 3. Center the window on the selected product row, shifting it back
    ///    when it would run past the end
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let (all_rows, selected_row) = self.build_rows(cols);
        let available_rows = self.calculate_available_rows(rows);

        let mut visible_start = selected_row.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(all_rows.len());
        if visible_end - visible_start < available_rows && all_rows.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        UIViewModel {
            header: self.compute_header(),
            category_bar: self.compute_category_bar(),
            search_bar: self.compute_search_bar(),
            rows: all_rows
                .into_iter()
                .skip(visible_start)
                .take(visible_end - visible_start)
                .collect(),
            footer: self.compute_footer(),
            empty_state: self.compute_empty_state(),
            lightbox: self.compute_lightbox(),
        }
    }

    fn product_count(&self) -> usize {
        self.filtered.iter().map(|c| c.products.len()).sum()
    }

    fn product_keys(&self) -> Vec<(CategoryId, ProductId)> {
        self.filtered
            .iter()
            .flat_map(|c| c.products.iter().map(move |p| (c.id, p.id)))
            .collect()
    }

    fn selected_key(&self) -> Option<(CategoryId, ProductId)> {
        self.selected_entry().map(|(c, p)| (c.id, p.id))
    }

    /// Builds all rows and returns them with the position of the selected product row.
    fn build_rows(&self, cols: usize) -> (Vec<DisplayRow>, usize) {
        let mut rows = Vec::new();
        let mut selected_row = 0;
        let mut ordinal = 0;

        for category in &self.filtered {
            rows.push(DisplayRow::Section(SectionRow {
                name: category.name.clone(),
                icon: category.icon.clone(),
                description: category.description.clone(),
                product_count: category.products.len(),
            }));

            for product in &category.products {
                let is_selected = ordinal == self.selected_index;
                if is_selected {
                    selected_row = rows.len();
                }
                rows.push(DisplayRow::Product(
                    self.compute_product_row(product, is_selected, cols),
                ));
                ordinal += 1;
            }
        }

        (rows, selected_row)
    }

    fn compute_product_row(&self, product: &Product, is_selected: bool, cols: usize) -> ProductRow {
        const FIXED_COLUMNS: usize = MAX_NAME_CHARS + 36;

        let carousel = if is_selected {
            self.carousel
        } else {
            Carousel::default()
        };

        let name = truncate_chars(&product.name, MAX_NAME_CHARS);
        let highlight_ranges = highlight_ranges(&name, &self.filter.query);

        ProductRow {
            name,
            price: product.price_label(&self.options.currency),
            is_available: product.is_available,
            description: product
                .description
                .as_deref()
                .filter(|d| !d.is_empty())
                .map(|d| truncate_chars(d, cols.saturating_sub(FIXED_COLUMNS))),
            image_url: carousel_image(product, carousel.index())
                .and_then(|path| resolve_asset_url(path, &self.options.backend_origin)),
            image_position: carousel
                .position(product.images.len())
                .map(|(pos, total)| format!("{pos}/{total}")),
            is_selected,
            highlight_ranges,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let (status, is_degraded) = match self.menu_source {
            DataSource::Loading => ("loading menu…".to_string(), false),
            DataSource::Fallback => ("backend unreachable, showing sample menu".to_string(), true),
            DataSource::Live => {
                let now = chrono::Utc::now().timestamp();
                let updated = self
                    .loaded_at
                    .map_or_else(|| "just now".to_string(), |at| time_ago(at, now));
                if self.settings_source == DataSource::Fallback {
                    (format!("updated {updated}, default branding"), true)
                } else {
                    (format!("updated {updated}"), false)
                }
            }
        };

        HeaderInfo {
            title: format!(" {} ", self.settings.site_name),
            subtitle: self.settings.description.clone(),
            logo_url: self
                .settings
                .logo
                .as_deref()
                .and_then(|logo| resolve_asset_url(logo, &self.options.backend_origin)),
            status,
            is_degraded,
        }
    }

    fn compute_category_bar(&self) -> Vec<CategoryChip> {
        let all = CategoryChip {
            label: "All".to_string(),
            is_selected: self.filter.selected_category.is_none(),
        };

        std::iter::once(all)
            .chain(self.categories.iter().map(|category| CategoryChip {
                label: category.icon.as_ref().map_or_else(
                    || category.name.clone(),
                    |icon| format!("{icon} {}", category.name),
                ),
                is_selected: self.filter.selected_category == Some(category.id),
            }))
            .collect()
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.lightbox.is_open() {
            "h/l or ←/→: previous/next  1-9: jump  Esc: close"
        } else {
            match self.input_mode {
                InputMode::Search(SearchFocus::Typing) => {
                    "ESC: exit search  Enter: results  Tab: category  Type to filter"
                }
                InputMode::Search(SearchFocus::Navigating) => {
                    "ESC: exit search  /: edit query  j/k: navigate  Enter: view image"
                }
                InputMode::Normal => {
                    "j/k: navigate  Tab: category  /: search  Enter: view image  [/]: photos  r: reload  q: quit"
                }
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        match self.input_mode {
            InputMode::Search(focus) => Some(SearchBarInfo {
                query: self.filter.query.clone(),
                is_typing: focus == SearchFocus::Typing,
            }),
            InputMode::Normal => None,
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if !self.filtered.is_empty() {
            return None;
        }

        let (message, subtitle) = if self.menu_source == DataSource::Loading {
            (
                "Loading menu…".to_string(),
                format!("Fetching {}", Endpoint::Menu.url(&self.options.backend_origin)),
            )
        } else if self.filter.is_active() {
            (
                "No dishes match your search".to_string(),
                "Esc clears the search, Tab changes the category".to_string(),
            )
        } else {
            (
                "No dishes on the menu yet".to_string(),
                "Press r to reload".to_string(),
            )
        };

        Some(EmptyState { message, subtitle })
    }

    fn compute_lightbox(&self) -> Option<LightboxView> {
        let candidates = self.lightbox_candidates();
        let entry = self.lightbox.current(candidates)?;
        let (position, total) = self.lightbox.counter(candidates)?;

        let thumbnails = if total > 1 {
            (1..=total)
                .map(|n| Thumbnail {
                    label: n.to_string(),
                    is_current: n == position,
                })
                .collect()
        } else {
            vec![]
        };

        Some(LightboxView {
            title: entry.product.name.clone(),
            price: entry.product.price_label(&self.options.currency),
            image_url: resolve_asset_url(entry.image, &self.options.backend_origin)?,
            counter: format!("{position} / {total}"),
            thumbnails,
        })
    }

    /// Rows left for the menu list after the chrome.
    ///
    /// Normal mode reserves 8 rows (blank, title, status, category bar, two
    /// borders, footer, spare); search mode adds the 3-row search box.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(8),
            InputMode::Search(_) => total_rows.saturating_sub(11),
        }
    }
}

fn candidates_in(filtered: &[Category], scope: Option<CategoryId>) -> &[Product] {
    scope
        .and_then(|id| filtered.iter().find(|c| c.id == id))
        .map(|c| c.products.as_slice())
        .unwrap_or(&[])
}

/// The image a product card shows at carousel position `index`.
fn carousel_image(product: &Product, index: usize) -> Option<&str> {
    if product.images.is_empty() {
        return product.primary_image();
    }
    product
        .images
        .get(index.min(product.images.len() - 1))
        .map(String::as_str)
        .filter(|path| !path.is_empty())
}

/// Character-index ranges of `text` matching `query`.
fn highlight_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut offset = 0;
    for segment in highlight(text, query) {
        let len = segment.text().chars().count();
        if segment.is_match() {
            ranges.push((offset, offset + len));
        }
        offset += len;
    }
    ranges
}

fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// "just now", "5m ago", "3h ago" or "2d ago".
fn time_ago(then: i64, now: i64) -> String {
    let diff = now - then;
    if diff < SECONDS_PER_MINUTE {
        "just now".to_string()
    } else if diff < SECONDS_PER_HOUR {
        format!("{}m ago", diff / SECONDS_PER_MINUTE)
    } else if diff < SECONDS_PER_DAY {
        format!("{}h ago", diff / SECONDS_PER_HOUR)
    } else {
        format!("{}d ago", diff / SECONDS_PER_DAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pictured(id: i64, name: &str, images: &[&str]) -> Product {
        Product::new(id, name, 10.0).with_images(images.iter().copied())
    }

    fn state_with_menu() -> AppState {
        let mut state = AppState::new(Theme::default(), DisplayOptions::default());
        state.install_menu(
            vec![
                Category::new(1, "Grill").with_products(vec![
                    pictured(1, "Chicken Tikka", &["tikka.png"]),
                    pictured(2, "Lamb Chops", &[]),
                    pictured(3, "Chicken Shish", &["shish-1.png", "shish-2.png"]),
                ]),
                Category::new(2, "Drinks")
                    .with_products(vec![pictured(4, "Mint Tea", &["tea.png"])]),
            ],
            DataSource::Live,
        );
        state
    }

    #[test]
    fn filter_keeps_selection_on_the_same_product() {
        let mut state = state_with_menu();
        state.selected_index = 2;
        assert_eq!(state.selected_product().map(|p| p.id), Some(3));

        state.filter.query = "chicken".to_string();
        state.apply_filter();

        assert_eq!(state.selected_index, 1);
        assert_eq!(state.selected_product().map(|p| p.id), Some(3));
    }

    #[test]
    fn filter_clamps_selection_when_product_disappears() {
        let mut state = state_with_menu();
        state.selected_index = 3;

        state.filter.query = "chicken".to_string();
        state.apply_filter();

        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn selection_wraps_over_all_categories() {
        let mut state = state_with_menu();
        state.move_selection_up();
        assert_eq!(state.selected_product().map(|p| p.id), Some(4));
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn lightbox_opens_within_the_selected_category() {
        let mut state = state_with_menu();
        state.selected_index = 2;

        assert!(state.open_lightbox());
        assert_eq!(state.lightbox_scope, Some(1));
        assert_eq!(state.lightbox.cursor(), Some(1));

        state.lightbox_next();
        assert_eq!(state.lightbox.cursor(), Some(0));
    }

    #[test]
    fn lightbox_refuses_products_without_images() {
        let mut state = state_with_menu();
        state.selected_index = 1;
        assert!(!state.open_lightbox());
        assert!(!state.lightbox.is_open());
    }

    #[test]
    fn lightbox_reconciles_when_filter_shrinks_the_subset() {
        let mut state = state_with_menu();
        state.selected_index = 2;
        state.open_lightbox();

        state.filter.query = "tikka".to_string();
        state.apply_filter();
        assert_eq!(state.lightbox.cursor(), Some(0));

        state.filter.query = "tea".to_string();
        state.apply_filter();
        assert!(!state.lightbox.is_open());
        assert_eq!(state.lightbox_scope, None);
    }

    #[test]
    fn reload_drops_vanished_category_selection() {
        let mut state = state_with_menu();
        state.filter.selected_category = Some(2);
        state.install_menu(vec![Category::new(1, "Grill")], DataSource::Live);
        assert_eq!(state.filter.selected_category, None);
    }

    #[test]
    fn viewmodel_highlights_query_and_shows_carousel_position() {
        let mut state = state_with_menu();
        state.input_mode = InputMode::Search(SearchFocus::Typing);
        state.filter.query = "shish".to_string();
        state.apply_filter();
        state.carousel_next();

        let vm = state.compute_viewmodel(40, 120);

        assert_eq!(vm.rows.len(), 2);
        let DisplayRow::Section(section) = &vm.rows[0] else {
            panic!("expected a section row");
        };
        assert_eq!(section.name, "Grill");
        let DisplayRow::Product(row) = &vm.rows[1] else {
            panic!("expected a product row");
        };
        assert_eq!(row.highlight_ranges, vec![(8, 13)]);
        assert_eq!(row.image_position.as_deref(), Some("2/2"));
        assert_eq!(
            row.image_url.as_deref(),
            Some("http://localhost:5000/uploads/shish-2.png")
        );
        assert!(vm.search_bar.is_some());
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn viewmodel_lightbox_has_counter_and_thumbnails() {
        let mut state = state_with_menu();
        state.open_lightbox();
        state.select_thumbnail(1);

        let vm = state.compute_viewmodel(40, 120);
        let lightbox = vm.lightbox.expect("lightbox should be visible");

        assert_eq!(lightbox.counter, "2 / 2");
        assert_eq!(lightbox.title, "Chicken Shish");
        assert_eq!(lightbox.image_url, "http://localhost:5000/uploads/shish-1.png");
        assert_eq!(lightbox.thumbnails.len(), 2);
        assert!(lightbox.thumbnails[1].is_current);
    }

    #[test]
    fn product_image_selection_is_bounds_checked() {
        let mut state = state_with_menu();
        state.selected_index = 2;
        assert!(state.select_product_image(1));
        assert_eq!(state.carousel.index(), 1);
        assert!(!state.select_product_image(2));
        assert_eq!(state.carousel.index(), 1);
    }

    #[test]
    fn out_of_range_thumbnail_is_ignored() {
        let mut state = state_with_menu();
        state.open_lightbox();
        assert!(!state.select_thumbnail(5));
        assert_eq!(state.lightbox.cursor(), Some(0));
    }

    #[test]
    fn empty_states_distinguish_loading_and_no_results() {
        let state = AppState::new(Theme::default(), DisplayOptions::default());
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.empty_state.map(|e| e.message).as_deref(), Some("Loading menu…"));

        let mut state = state_with_menu();
        state.filter.query = "pizza".to_string();
        state.apply_filter();
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(
            vm.empty_state.map(|e| e.message).as_deref(),
            Some("No dishes match your search")
        );
    }

    #[test]
    fn window_follows_selection() {
        let mut state = state_with_menu();
        state.selected_index = 3;
        let vm = state.compute_viewmodel(11, 80);

        assert_eq!(vm.rows.len(), 3);
        assert!(vm.rows.iter().any(|row| matches!(
            row,
            DisplayRow::Product(p) if p.is_selected && p.name == "Mint Tea"
        )));
    }

    #[test]
    fn time_ago_buckets() {
        assert_eq!(time_ago(1_000, 1_030), "just now");
        assert_eq!(time_ago(1_000, 1_000 + 5 * 60), "5m ago");
        assert_eq!(time_ago(0, 3 * 3600), "3h ago");
        assert_eq!(time_ago(0, 2 * 86400), "2d ago");
    }

    #[test]
    fn truncate_chars_counts_characters() {
        assert_eq!(truncate_chars("كبة مقلية", 20), "كبة مقلية");
        assert_eq!(truncate_chars("abcdef", 4), "abc…");
    }
}
