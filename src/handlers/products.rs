use std::str::FromStr;

use actix_web::{web, HttpResponse};
use bigdecimal::BigDecimal;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::db::DbPool;
use crate::domain::catalog::{self, TradeType};
use crate::errors::AppError;
use crate::models::product::{NewProduct, Product};
use crate::schema::products;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    /// Required: a listing always belongs to a concrete seller.
    pub seller_id: i64,
    /// Required: a listing always starts in a concrete category.
    pub category_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub condition_percentage: Option<i32>,
    /// BUY_ONLY, RENT_ONLY or BOTH.
    pub trade_type: String,
    /// Decimal price as a string to avoid floating-point issues, e.g. "1500000.00"
    pub buy_price: Option<String>,
    pub rent_price: Option<String>,
    pub rent_unit: Option<String>,
    pub address_contact: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub name: String,
    pub description: Option<String>,
    pub trade_type: String,
    pub buy_price: Option<String>,
    pub rent_price: Option<String>,
    pub rent_unit: Option<String>,
    pub status: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i64,
    pub seller_id: i64,
    pub category_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub condition_percentage: Option<i32>,
    pub trade_type: String,
    pub buy_price: Option<String>,
    pub rent_price: Option<String>,
    pub rent_unit: Option<String>,
    pub status: String,
    pub address_contact: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        let money = |v: Option<BigDecimal>| v.map(|d| d.with_scale(2).to_string());
        Self {
            id: p.id,
            seller_id: p.seller_id,
            category_id: p.category_id,
            name: p.name,
            description: p.description,
            condition_percentage: p.condition_percentage,
            trade_type: p.trade_type,
            buy_price: money(p.buy_price),
            rent_price: money(p.rent_price),
            rent_unit: p.rent_unit,
            status: p.status,
            address_contact: p.address_contact,
        }
    }
}

fn parse_price(label: &str, value: Option<&str>) -> Result<Option<BigDecimal>, AppError> {
    value
        .map(|raw| {
            BigDecimal::from_str(raw)
                .map_err(|e| AppError::InvalidInput(format!("Invalid {} '{}': {}", label, raw, e)))
        })
        .transpose()
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /api/products
///
/// Creates a listing. `sellerId` and `categoryId` are required; a
/// reference to a row that does not exist comes back as a 400 naming the
/// offending field. Prices are validated against the trade type before
/// anything touches the database.
#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Validation failure or unknown seller/category"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "products"
)]
pub async fn create_product(
    pool: web::Data<DbPool>,
    body: web::Json<CreateProductRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();

    let product = web::block(move || {
        let trade_type = TradeType::from_str(&body.trade_type)?;
        let buy_price = parse_price("buyPrice", body.buy_price.as_deref())?;
        let rent_price = parse_price("rentPrice", body.rent_price.as_deref())?;
        catalog::validate_pricing(trade_type, buy_price.as_ref(), rent_price.as_ref())?;

        let mut conn = pool.get()?;
        let row: Product = diesel::insert_into(products::table)
            .values(&NewProduct {
                seller_id: body.seller_id,
                category_id: Some(body.category_id),
                name: body.name,
                description: body.description,
                condition_percentage: body.condition_percentage,
                trade_type: trade_type.as_str().to_string(),
                buy_price,
                rent_price,
                rent_unit: body.rent_unit,
                status: "ACTIVE".to_string(),
                address_contact: body.address_contact,
            })
            .returning(Product::as_returning())
            .get_result(&mut conn)?;
        Ok::<_, AppError>(row)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(ProductResponse::from(product)))
}

/// GET /api/products/{id}
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "products"
)]
pub async fn get_product(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let product_id = path.into_inner();

    let result = web::block(move || {
        let mut conn = pool.get()?;
        let product = products::table
            .find(product_id)
            .select(Product::as_select())
            .first(&mut conn)
            .optional()?;
        Ok::<_, AppError>(product)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    match result {
        Some(product) => Ok(HttpResponse::Ok().json(ProductResponse::from(product))),
        None => Err(AppError::NotFound),
    }
}

/// GET /api/products/seller/{seller_id}
///
/// The seller's catalog. An unknown seller is simply an empty catalog.
#[utoipa::path(
    get,
    path = "/api/products/seller/{seller_id}",
    params(("seller_id" = i64, Path, description = "Seller user id")),
    responses(
        (status = 200, description = "Products listed by the seller", body = [ProductResponse]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "products"
)]
pub async fn list_products_by_seller(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let seller_id = path.into_inner();

    let rows = web::block(move || {
        let mut conn = pool.get()?;
        let rows = products::table
            .filter(products::seller_id.eq(seller_id))
            .select(Product::as_select())
            .order(products::id.asc())
            .load(&mut conn)?;
        Ok::<_, AppError>(rows)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    let items: Vec<ProductResponse> = rows.into_iter().map(ProductResponse::from).collect();
    Ok(HttpResponse::Ok().json(items))
}

/// PUT /api/products/{id}
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 400, description = "Validation failure"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "products"
)]
pub async fn update_product(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    body: web::Json<UpdateProductRequest>,
) -> Result<HttpResponse, AppError> {
    let product_id = path.into_inner();
    let body = body.into_inner();

    let product = web::block(move || {
        let trade_type = TradeType::from_str(&body.trade_type)?;
        let buy_price = parse_price("buyPrice", body.buy_price.as_deref())?;
        let rent_price = parse_price("rentPrice", body.rent_price.as_deref())?;
        catalog::validate_pricing(trade_type, buy_price.as_ref(), rent_price.as_ref())?;

        let mut conn = pool.get()?;
        let row: Product = diesel::update(products::table.find(product_id))
            .set((
                products::name.eq(body.name),
                products::description.eq(body.description),
                products::trade_type.eq(trade_type.as_str().to_string()),
                products::buy_price.eq(buy_price),
                products::rent_price.eq(rent_price),
                products::rent_unit.eq(body.rent_unit),
                products::status.eq(body.status),
            ))
            .returning(Product::as_returning())
            .get_result(&mut conn)?;
        Ok::<_, AppError>(row)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(ProductResponse::from(product)))
}

/// DELETE /api/products/{id}
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "products"
)]
pub async fn delete_product(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let product_id = path.into_inner();

    let deleted = web::block(move || {
        let mut conn = pool.get()?;
        let deleted = diesel::delete(products::table.find(product_id)).execute(&mut conn)?;
        Ok::<_, AppError>(deleted)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    if deleted == 0 {
        return Err(AppError::NotFound);
    }
    Ok(HttpResponse::NoContent().finish())
}
