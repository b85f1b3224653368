//! Built-in sample menu shown when the backend cannot be reached.

use super::menu::{Category, Product};

/// Two categories with two products each, none with images.
#[must_use]
pub fn sample_menu() -> Vec<Category> {
    let mut starters = Category::new(1, "المقبلات").with_products(vec![
        described(Product::new(1, "سلطة يونانية", 25.0), "سلطة طازجة مع الخضار والزيتون والجبنة البيضاء"),
        described(Product::new(2, "حمص بالطحينة", 18.0), "حمص طازج مع الطحينة وزيت الزيتون"),
    ]);
    starters.description = Some("مقبلات لذيذة لبدء وجبتك".to_string());

    let mut mains = Category::new(2, "الوجبات الرئيسية").with_products(vec![
        described(Product::new(3, "شاورما لحم", 35.0), "شاورما لحم مشوية مع الخضار والصلصات"),
        described(Product::new(4, "كبة مقلية", 28.0), "كبة مقلية مقرمشة مع اللحم والتوابل"),
    ]);
    mains.description = Some("وجبات رئيسية شهية ومشبعة".to_string());

    vec![starters, mains]
}

fn described(mut product: Product, description: &str) -> Product {
    product.description = Some(description.to_string());
    product
}
