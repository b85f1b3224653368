//! Full-screen image viewer navigation.
//!
//! The lightbox pages through the *image subset* of a candidate product list:
//! the products, in order, that have a primary image. Only the cursor is
//! stored. Every operation takes the live candidate list and derives the
//! subset again, so a reload or filter change while the lightbox is open can
//! never leave it pointing into a stale snapshot.
//!
//! ```text
//!            open(path, candidates)
//!  Closed ─────────────────────────────▶ Open { cursor }
//!    ▲                                     │  next / previous (mod len)
//!    │              close()                │  select_thumbnail(i)
//!    └─────────────────────────────────────┘
//! ```

use crate::domain::Product;

/// Lightbox state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lightbox {
    #[default]
    Closed,
    Open {
        /// Zero-based index into the image subset.
        cursor: usize,
    },
}

/// A product in the image subset together with its primary image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubsetEntry<'a> {
    pub product: &'a Product,
    pub image: &'a str,
}

/// Returns the products of `candidates` that have a primary image, in order.
#[must_use]
pub fn image_subset(candidates: &[Product]) -> Vec<SubsetEntry<'_>> {
    candidates
        .iter()
        .filter_map(|product| {
            product
                .primary_image()
                .map(|image| SubsetEntry { product, image })
        })
        .collect()
}

impl Lightbox {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// The raw cursor, or `None` while closed.
    #[must_use]
    pub const fn cursor(&self) -> Option<usize> {
        match self {
            Self::Open { cursor } => Some(*cursor),
            Self::Closed => None,
        }
    }

    /// Opens the lightbox on `image_path`.
    ///
    /// The cursor is the first subset position whose primary image equals
    /// `image_path`. An unknown path opens at position 0.
    pub fn open(&mut self, image_path: &str, candidates: &[Product]) {
        let subset = image_subset(candidates);
        let cursor = subset
            .iter()
            .position(|entry| entry.image == image_path)
            .unwrap_or_else(|| {
                tracing::debug!(image_path = %image_path, "image not in subset, opening at start");
                0
            });

        tracing::debug!(cursor, subset_len = subset.len(), "lightbox opened");
        *self = Self::Open { cursor };
    }

    /// Closes the lightbox. The next `open` starts from scratch.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// Advances to the next image, wrapping to the first.
    ///
    /// No-op while closed or when the subset is empty.
    pub fn next(&mut self, candidates: &[Product]) {
        self.step(candidates, |cursor, len| (cursor + 1) % len);
    }

    /// Goes back to the previous image, wrapping to the last.
    ///
    /// No-op while closed or when the subset is empty.
    pub fn previous(&mut self, candidates: &[Product]) {
        self.step(candidates, |cursor, len| (cursor + len - 1) % len);
    }

    /// Jumps straight to `index` in the thumbnail strip.
    ///
    /// The index is trusted: thumbnails are generated by enumerating the same
    /// subset. Ignored while closed.
    pub fn select_thumbnail(&mut self, index: usize) {
        if let Self::Open { cursor } = self {
            *cursor = index;
        }
    }

    /// The subset entry under the cursor, looked up in the live candidate list.
    #[must_use]
    pub fn current<'a>(&self, candidates: &'a [Product]) -> Option<SubsetEntry<'a>> {
        let cursor = self.cursor()?;
        image_subset(candidates).get(cursor).copied()
    }

    /// `(position, total)` for the "2 / 5" counter, 1-based for humans.
    #[must_use]
    pub fn counter(&self, candidates: &[Product]) -> Option<(usize, usize)> {
        let cursor = self.cursor()?;
        let len = image_subset(candidates).len();
        (cursor < len).then_some((cursor + 1, len))
    }

    /// Brings an open lightbox back in line with a changed candidate list.
    ///
    /// Closes when the live subset is empty and clamps the cursor to the last
    /// image when the subset shrank.
    pub fn reconcile(&mut self, candidates: &[Product]) {
        let Self::Open { cursor } = self else {
            return;
        };

        let len = image_subset(candidates).len();
        if len == 0 {
            tracing::debug!("image subset vanished, closing lightbox");
            *self = Self::Closed;
        } else if *cursor >= len {
            tracing::debug!(cursor = *cursor, subset_len = len, "clamping lightbox cursor");
            *cursor = len - 1;
        }
    }

    fn step(&mut self, candidates: &[Product], advance: impl FnOnce(usize, usize) -> usize) {
        let Self::Open { cursor } = self else {
            return;
        };

        let len = image_subset(candidates).len();
        if len == 0 {
            return;
        }
        *cursor = advance(*cursor % len, len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_image(id: i64, image: &str) -> Product {
        Product::new(id, format!("product-{id}"), 10.0).with_images([image])
    }

    fn three_images() -> Vec<Product> {
        vec![
            with_image(1, "img1.png"),
            with_image(2, "img2.png"),
            with_image(3, "img3.png"),
        ]
    }

    #[test]
    fn open_finds_the_clicked_image() {
        let products = three_images();
        let mut lightbox = Lightbox::default();

        lightbox.open("img2.png", &products);

        assert_eq!(lightbox.cursor(), Some(1));
        assert_eq!(image_subset(&products).len(), 3);
        assert_eq!(lightbox.counter(&products), Some((2, 3)));
    }

    #[test]
    fn subset_skips_products_without_images() {
        let products = vec![
            with_image(1, "a.png"),
            Product::new(2, "plain", 5.0),
            with_image(3, "c.png"),
        ];
        let mut lightbox = Lightbox::default();

        lightbox.open("c.png", &products);

        assert_eq!(lightbox.cursor(), Some(1));
        assert_eq!(lightbox.current(&products).map(|e| e.product.id), Some(3));
    }

    #[test]
    fn unknown_image_opens_at_zero() {
        let products = three_images();
        let mut lightbox = Lightbox::default();
        lightbox.open("missing.png", &products);
        assert_eq!(lightbox.cursor(), Some(0));
    }

    #[test]
    fn navigation_wraps_in_both_directions() {
        let products = three_images();
        let mut lightbox = Lightbox::Open { cursor: 2 };

        lightbox.next(&products);
        assert_eq!(lightbox.cursor(), Some(0));

        lightbox.previous(&products);
        assert_eq!(lightbox.cursor(), Some(2));
    }

    #[test]
    fn empty_subset_navigation_is_a_no_op() {
        let products = vec![Product::new(1, "plain", 5.0)];
        let mut lightbox = Lightbox::default();
        lightbox.open("anything.png", &products);

        lightbox.next(&products);
        lightbox.previous(&products);
        lightbox.next(&[]);

        assert_eq!(lightbox.cursor(), Some(0));
        assert_eq!(lightbox.current(&products), None);
        assert_eq!(lightbox.counter(&products), None);
    }

    #[test]
    fn navigation_while_closed_does_nothing() {
        let products = three_images();
        let mut lightbox = Lightbox::Closed;
        lightbox.next(&products);
        lightbox.select_thumbnail(2);
        assert_eq!(lightbox, Lightbox::Closed);
    }

    #[test]
    fn reopening_starts_from_the_new_image() {
        let products = three_images();
        let mut lightbox = Lightbox::default();

        lightbox.open("img3.png", &products);
        lightbox.next(&products);
        lightbox.close();
        assert_eq!(lightbox.cursor(), None);

        lightbox.open("img2.png", &products);
        assert_eq!(lightbox.cursor(), Some(1));
    }

    #[test]
    fn select_thumbnail_jumps_directly() {
        let products = three_images();
        let mut lightbox = Lightbox::default();
        lightbox.open("img1.png", &products);

        lightbox.select_thumbnail(2);

        assert_eq!(lightbox.current(&products).map(|e| e.image), Some("img3.png"));
    }

    #[test]
    fn current_image_follows_the_live_product_list() {
        let mut products = three_images();
        let mut lightbox = Lightbox::default();
        lightbox.open("img2.png", &products);

        products.swap(0, 1);
        assert_eq!(lightbox.current(&products).map(|e| e.image), Some("img1.png"));

        products.insert(0, with_image(9, "img0.png"));
        lightbox.next(&products);
        assert_eq!(lightbox.counter(&products), Some((3, 4)));
        assert_eq!(lightbox.current(&products).map(|e| e.image), Some("img1.png"));
    }

    #[test]
    fn reconcile_clamps_or_closes() {
        let products = three_images();
        let mut lightbox = Lightbox::Open { cursor: 2 };

        lightbox.reconcile(&products[..2]);
        assert_eq!(lightbox.cursor(), Some(1));

        lightbox.reconcile(&products[..2]);
        assert_eq!(lightbox.cursor(), Some(1));

        lightbox.reconcile(&[Product::new(5, "plain", 1.0)]);
        assert_eq!(lightbox, Lightbox::Closed);
    }
}
