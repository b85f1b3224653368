//! Image navigation.
//!
//! - [`lightbox`]: Full-screen viewer paging across the products that have images
//! - [`carousel`]: Pager over the images of the selected product

pub mod carousel;
pub mod lightbox;

pub use carousel::Carousel;
pub use lightbox::{image_subset, Lightbox, SubsetEntry};
