//! In-card image pager for a single product.
//!
//! Unlike the lightbox, which moves across products, the carousel moves
//! through the `images` of the selected product. The image count is passed in
//! on every call because the product can be swapped out by a reload.

/// Cursor over one product's image list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
}

impl Carousel {
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = (self.index % len + 1) % len;
    }

    pub fn previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = (self.index % len + len - 1) % len;
    }

    /// Thumbnail click. Trusts the caller to pass an index in range.
    pub fn select(&mut self, index: usize) {
        self.index = index;
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// `(position, total)` 1-based, only when there is more than one image.
    #[must_use]
    pub fn position(&self, len: usize) -> Option<(usize, usize)> {
        (len > 1).then(|| (self.index.min(len - 1) + 1, len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_through_images() {
        let mut carousel = Carousel::default();
        carousel.next(3);
        carousel.next(3);
        carousel.next(3);
        assert_eq!(carousel.index(), 0);

        carousel.previous(3);
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn empty_product_is_ignored() {
        let mut carousel = Carousel::default();
        carousel.next(0);
        carousel.previous(0);
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.position(0), None);
    }

    #[test]
    fn position_is_hidden_for_single_images() {
        let mut carousel = Carousel::default();
        assert_eq!(carousel.position(1), None);
        carousel.select(1);
        assert_eq!(carousel.position(4), Some((2, 4)));
        carousel.reset();
        assert_eq!(carousel.position(4), Some((1, 4)));
    }

    #[test]
    fn shrunken_image_list_does_not_overflow() {
        let mut carousel = Carousel::default();
        carousel.select(5);
        assert_eq!(carousel.position(2), Some((2, 2)));
        carousel.next(2);
        assert_eq!(carousel.index(), 0);
    }
}
