//! Search and category filtering over the menu.
//!
//! Filtering is a pure function of the source categories and a
//! [`FilterState`]; the source list is never touched and a fresh
//! `Vec<Category>` comes back each time.

use super::highlight::contains_ci;
use crate::domain::{Category, CategoryId};

/// The user's current search query and category selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text query, matched case-insensitively and never trimmed.
    pub query: String,
    /// `None` shows every category.
    pub selected_category: Option<CategoryId>,
}

impl FilterState {
    /// Returns `true` if either a query or a category selection narrows the menu.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.selected_category.is_some()
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Moves the category selection to the next (or previous) chip.
    ///
    /// Chips are "All" followed by every source category in order, and the
    /// walk wraps around. A selection that no longer exists in `categories`
    /// restarts from "All".
    pub fn cycle_category(&mut self, categories: &[Category], forward: bool) {
        let chip_count = categories.len() + 1;
        let current = self
            .selected_category
            .and_then(|id| categories.iter().position(|c| c.id == id))
            .map_or(0, |pos| pos + 1);

        let next = if forward {
            (current + 1) % chip_count
        } else {
            (current + chip_count - 1) % chip_count
        };

        self.selected_category = next.checked_sub(1).map(|pos| categories[pos].id);
    }

    /// Applies this filter to `categories`. See [`filter_categories`].
    #[must_use]
    pub fn apply(&self, categories: &[Category]) -> Vec<Category> {
        filter_categories(categories, &self.query, self.selected_category)
    }
}

/// Filters categories by product name and optional category selection.
///
/// A product survives when its name contains `query` case-insensitively and,
/// if `selected` is set, its parent category has that id. A category is kept
/// only when at least one of its products survives. Category and product order
/// is preserved.
#[must_use]
pub fn filter_categories(
    categories: &[Category],
    query: &str,
    selected: Option<CategoryId>,
) -> Vec<Category> {
    let _span = tracing::debug_span!(
        "filter_categories",
        total_categories = categories.len(),
        query_len = query.len(),
        selected = ?selected
    )
    .entered();

    let filtered: Vec<Category> = categories
        .iter()
        .filter_map(|category| {
            let in_selection = selected.map_or(true, |id| category.id == id);
            let products: Vec<_> = category
                .products
                .iter()
                .filter(|product| in_selection && contains_ci(&product.name, query))
                .cloned()
                .collect();

            if products.is_empty() {
                None
            } else {
                Some(Category {
                    products,
                    ..category.clone_without_products()
                })
            }
        })
        .collect();

    tracing::debug!(filtered_categories = filtered.len(), "menu filter applied");
    filtered
}

impl Category {
    fn clone_without_products(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            color: self.color.clone(),
            icon: self.icon.clone(),
            products: Vec::new(),
        }
    }
}
