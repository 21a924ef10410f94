use crate::features::products::dtos::ProductResponseDto;

/// Inclusive price range, open-ended when `max` is absent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBand {
    pub min: f64,
    pub max: Option<f64>,
}

impl PriceBand {
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && self.max.map_or(true, |max| price <= max)
    }
}

/// Composition of the three catalog filters.
///
/// Each criterion is an independent predicate; absent criteria pass
/// everything, active criteria combine as a logical AND, so applying them
/// in any order yields the same set.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category_id: Option<i64>,
    pub search: Option<String>,
    pub price_band: Option<PriceBand>,
}

impl ProductFilter {
    pub fn matches(&self, product: &ProductResponseDto) -> bool {
        if let Some(category_id) = self.category_id {
            if product.category_id != category_id {
                return false;
            }
        }

        if let Some(ref term) = self.search {
            let term = term.to_lowercase();
            let in_name = product.name.to_lowercase().contains(&term);
            let in_description = product.description.to_lowercase().contains(&term);
            if !in_name && !in_description {
                return false;
            }
        }

        if let Some(band) = self.price_band {
            // quote-on-request products never match a price filter
            match product.price {
                Some(price) if band.contains(price) => {}
                _ => return false,
            }
        }

        true
    }

    pub fn apply(&self, products: Vec<ProductResponseDto>) -> Vec<ProductResponseDto> {
        products.into_iter().filter(|p| self.matches(p)).collect()
    }
}

/// Up to four other products from the same category, in store order
pub fn related_products<'a>(
    products: &'a [ProductResponseDto],
    product: &ProductResponseDto,
) -> Vec<&'a ProductResponseDto> {
    products
        .iter()
        .filter(|p| p.category_id == product.category_id && p.id != product.id)
        .take(4)
        .collect()
}
