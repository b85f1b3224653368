//! Menu domain model: categories and the products they contain.
//!
//! These types mirror the backend's `/api/menu` payload. Optional and nullable
//! fields are tolerated so a partially filled menu still renders.

use serde::{Deserialize, Deserializer, Serialize};

/// Backend identifier of a category.
pub type CategoryId = i64;

/// Backend identifier of a product, unique within its category.
pub type ProductId = i64;

/// A named grouping of products, shown as a section of the menu.
///
/// `products` keeps the backend's order, which is also the display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub products: Vec<Product>,
}

/// A sellable menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Currency-agnostic price. Missing or `null` decodes as `0.0`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default = "available_by_default")]
    pub is_available: bool,
    /// Image paths or URLs in display order. Positions matter, contents may repeat.
    ///
    /// The backend sends either bare strings or `{"image_path": ...}` objects;
    /// both decode to the path.
    #[serde(default, deserialize_with = "image_paths")]
    pub images: Vec<String>,
    /// Single-image field used by older backend versions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Category {
    /// Creates an empty category with only an id and a name.
    #[must_use]
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            color: None,
            icon: None,
            products: Vec::new(),
        }
    }

    /// Builder-style helper that replaces the product list.
    #[must_use]
    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }
}

impl Product {
    /// Creates an available product with no description and no images.
    #[must_use]
    pub fn new(id: ProductId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            price,
            is_available: true,
            images: Vec::new(),
            image_url: None,
        }
    }

    /// Builder-style helper that replaces the image list.
    #[must_use]
    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    /// The image that represents this product in the lightbox.
    ///
    /// The legacy `image_url` wins when present and non-empty, otherwise the
    /// first non-empty entry of `images`.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.image_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .or_else(|| {
                self.images
                    .iter()
                    .map(String::as_str)
                    .find(|path| !path.is_empty())
            })
    }

    /// Formats the price for display, e.g. `"25 ر.س"` or `"12.50 $"`.
    ///
    /// A zero price means the backend did not provide one.
    #[must_use]
    pub fn price_label(&self, currency: &str) -> String {
        if self.price <= 0.0 {
            return "price on request".to_string();
        }
        if self.price.fract() == 0.0 {
            format!("{:.0} {currency}", self.price)
        } else {
            format!("{:.2} {currency}", self.price)
        }
    }
}

const fn available_by_default() -> bool {
    true
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One entry of a product's `images` array.
#[derive(Deserialize)]
#[serde(untagged)]
enum ImageRef {
    Path(String),
    Object {
        #[serde(default, alias = "imagePath")]
        image_path: Option<String>,
    },
}

impl ImageRef {
    fn into_path(self) -> String {
        match self {
            Self::Path(path) => path,
            Self::Object { image_path } => image_path.unwrap_or_default(),
        }
    }
}

fn image_paths<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let refs: Option<Vec<ImageRef>> = Option::deserialize(deserializer)?;
    Ok(refs
        .unwrap_or_default()
        .into_iter()
        .map(ImageRef::into_path)
        .collect())
}
