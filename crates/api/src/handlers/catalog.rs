//! Handlers for the public catalog: products, product types and sizes.

use axum::extract::{Path, Query, State};
use axum::Json;
use famous_core::error::CoreError;
use famous_core::slug::slugify;
use famous_core::types::DbId;
use famous_db::models::product::Product;
use famous_db::models::product_size::ProductSize;
use famous_db::models::product_type::ProductType;
use famous_db::repositories::{ProductRepo, ProductSizeRepo, ProductTypeRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::ProductFilterParams;
use crate::response::{data, DataResponse};
use crate::state::AppState;

/// A product row plus its derived URL slug.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    #[serde(flatten)]
    pub product: Product,
    pub slug: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let slug = slugify(&product.name);
        Self { product, slug }
    }
}

/// GET /api/v1/products
///
/// List the catalog, optionally filtered by `?product_type_id=`.
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ProductFilterParams>,
) -> AppResult<Json<DataResponse<Vec<ProductResponse>>>> {
    let products = match params.product_type_id {
        Some(type_id) => ProductRepo::list_by_product_type(&state.pool, type_id).await?,
        None => ProductRepo::list(&state.pool).await?,
    };

    Ok(data(products.into_iter().map(ProductResponse::from).collect()))
}

/// GET /api/v1/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ProductResponse>>> {
    let product = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;

    Ok(data(product.into()))
}

/// GET /api/v1/products/by-slug/{slug}
///
/// Slugs are derived from product names rather than stored, so the match is
/// done over the catalog. The lowest id wins when two names share a slug.
pub async fn get_product_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<DataResponse<ProductResponse>>> {
    let wanted = slugify(&slug);
    let not_found = || {
        AppError::Core(CoreError::NotFoundByKey {
            entity: "Product",
            key: slug.clone(),
        })
    };

    if wanted.is_empty() {
        return Err(not_found());
    }

    let product = ProductRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(ProductResponse::from)
        .find(|p| p.slug == wanted)
        .ok_or_else(not_found)?;

    Ok(data(product))
}

/// GET /api/v1/product-types
pub async fn list_product_types(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ProductType>>>> {
    let types = ProductTypeRepo::list(&state.pool).await?;
    Ok(data(types))
}

/// GET /api/v1/product-types/{id}/sizes
///
/// 404 if the product type does not exist; an existing type with no sizes
/// returns an empty list.
pub async fn list_product_sizes(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<ProductSize>>>> {
    ProductTypeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProductType",
            id,
        }))?;

    let sizes = ProductSizeRepo::list_by_product_type(&state.pool, id).await?;
    Ok(data(sizes))
}
