//! Product feed conversion functions.

use amiya_core::ProductId;

use super::types::{CatalogProduct, RawProduct};

/// Normalize a raw feed product into a [`CatalogProduct`].
///
/// Price comes from the first variant, the image from the first entry
/// of the image list, and sizes/colors from the option lists named
/// "Size" and "Color" (case-insensitive).
pub(crate) fn convert_product(raw: RawProduct) -> CatalogProduct {
    let price = raw
        .variants
        .first()
        .map(|variant| variant.price.clone())
        .unwrap_or_default();

    let image = raw
        .images
        .into_iter()
        .map(|img| img.src)
        .find(|src| !src.is_empty());

    let mut sizes = Vec::new();
    let mut colors = Vec::new();
    for option in raw.options {
        if option.name.eq_ignore_ascii_case("size") {
            sizes = option.values;
        } else if option.name.eq_ignore_ascii_case("color") {
            colors = option.values;
        }
    }

    CatalogProduct {
        id: ProductId::new(raw.id.to_string()),
        name: raw.title,
        price,
        image,
        sizes,
        colors,
        description: raw.body_html,
    }
}
