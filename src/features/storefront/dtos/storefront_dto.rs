use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::products::dtos::ProductResponseDto;
use crate::shared::filters::{PriceBand, ProductFilter};

/// Query parameters accepted by the catalog listing
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct CatalogQuery {
    /// Keep only products of this category
    pub category_id: Option<i64>,

    /// Case-insensitive substring matched against name or description
    pub q: Option<String>,

    /// Lower price bound (inclusive)
    pub min_price: Option<f64>,

    /// Upper price bound (inclusive); open-ended when absent
    pub max_price: Option<f64>,
}

impl From<CatalogQuery> for ProductFilter {
    fn from(query: CatalogQuery) -> Self {
        let price_band = match (query.min_price, query.max_price) {
            (None, None) => None,
            (min, max) => Some(PriceBand {
                min: min.unwrap_or(0.0),
                max,
            }),
        };

        ProductFilter {
            category_id: query.category_id,
            search: query.q.filter(|q| !q.trim().is_empty()),
            price_band,
        }
    }
}

/// Product detail page payload: the product plus up to four related items
/// from the same category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductDetailDto {
    pub product: ProductResponseDto,
    pub related: Vec<ProductResponseDto>,
}
