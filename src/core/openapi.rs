use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::products::{dtos as products_dtos, handlers as products_handlers};
use crate::features::storefront::{dtos as storefront_dtos, handlers as storefront_handlers};
use crate::shared::types::{DeleteMessage, ErrorBody};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::list_categories,
        categories_handlers::get_category,
        categories_handlers::create_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        // Products
        products_handlers::list_products,
        products_handlers::get_product,
        products_handlers::create_product,
        products_handlers::update_product,
        products_handlers::delete_product,
        // Storefront
        storefront_handlers::catalog,
        storefront_handlers::product_detail,
    ),
    components(schemas(
        categories_dtos::CategoryResponseDto,
        categories_dtos::CreateCategoryDto,
        categories_dtos::UpdateCategoryDto,
        products_dtos::ProductResponseDto,
        products_dtos::CreateProductDto,
        products_dtos::UpdateProductDto,
        storefront_dtos::ProductDetailDto,
        ErrorBody,
        DeleteMessage,
    )),
    tags(
        (name = "categories", description = "Category management"),
        (name = "products", description = "Product management"),
        (name = "storefront", description = "Public catalog views"),
    )
)]
pub struct ApiDoc;

/// Applies the configured title/version/description to the generated doc
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
