use crate::catalog::Product;

/// Products whose name, description or category contain `query`,
/// case-insensitively, in catalog order.
///
/// A blank query matches nothing: the overlay stays empty until the
/// shopper types something.
pub fn filter_products<'a>(query: &str, catalog: &'a [Product]) -> Vec<&'a Product> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|product| matches(product, &needle))
        .collect()
}

fn matches(product: &Product, needle: &str) -> bool {
    [&product.name, &product.description, &product.category]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}
