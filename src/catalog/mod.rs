//! Search and filter engine for the menu.
//!
//! - [`filter`]: Derives the visible categories from a query and category selection
//! - [`highlight`]: Splits display text around literal, case-insensitive matches

pub mod filter;
pub mod highlight;

pub use filter::{filter_categories, FilterState};
pub use highlight::{contains_ci, highlight, Segment};
