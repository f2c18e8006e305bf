use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::revenue_service::RevenueService;
use crate::domain::sales::{RevenueSummary, SaleFilter, SoldLine};
use crate::errors::AppError;
use crate::infrastructure::sales_repo::DieselSalesRepository;

/// The concrete service wired into the server.
pub type SharedRevenueService = RevenueService<DieselSalesRepository>;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueQuery {
    /// Inclusive lower bound on the sold date, `YYYY-MM-DD`.
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on the sold date, `YYYY-MM-DD`.
    pub end_date: Option<NaiveDate>,
    /// Exact, case-sensitive category name.
    pub category: Option<String>,
}

impl From<RevenueQuery> for SaleFilter {
    fn from(q: RevenueQuery) -> Self {
        SaleFilter {
            start_date: q.start_date,
            end_date: q.end_date,
            category: q.category,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RevenueSummaryResponse {
    pub seller_id: i64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub category: Option<String>,
    /// Decimal amount as a string to avoid floating-point issues, e.g. "150.00"
    pub total_revenue: String,
    pub total_items_sold: i64,
    pub distinct_order_count: i64,
}

impl From<RevenueSummary> for RevenueSummaryResponse {
    fn from(summary: RevenueSummary) -> Self {
        Self {
            seller_id: summary.seller_id,
            start_date: summary.filter.start_date,
            end_date: summary.filter.end_date,
            category: summary.filter.category,
            total_revenue: summary.total_revenue.with_scale(2).to_string(),
            total_items_sold: summary.total_items_sold,
            distinct_order_count: summary.distinct_order_count,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SoldProductResponse {
    pub id: i64,
    pub name: String,
    /// Product images live in their own table and are not joined into the
    /// sales history.
    pub image_url: Option<String>,
    pub quantity: i32,
    /// Decimal amount as a string to avoid floating-point issues, e.g. "50.00"
    pub total_amount: String,
    pub sold_date: NaiveDate,
    /// Empty when the product's category no longer exists.
    pub category: String,
    pub order_id: i64,
    pub order_status: String,
    pub shipping_name: String,
    pub shipping_phone: String,
    pub shipping_address: String,
    pub note: Option<String>,
}

impl From<SoldLine> for SoldProductResponse {
    fn from(line: SoldLine) -> Self {
        Self {
            id: line.product_id,
            name: line.product_name,
            image_url: None,
            quantity: line.quantity,
            total_amount: line.line_amount.with_scale(2).to_string(),
            sold_date: line.sold_date,
            category: line.category_name.unwrap_or_default(),
            order_id: line.order_id,
            order_status: line.order_status,
            shipping_name: line.shipping_name,
            shipping_phone: line.shipping_phone,
            shipping_address: line.shipping_address,
            note: line.note,
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /api/revenue/summary/{seller_id}
///
/// Aggregate totals over the seller's filtered sales history. An unknown
/// seller reads as an empty history (all-zero totals) rather than a 404,
/// so the response shape never reveals whether an account exists.
#[utoipa::path(
    get,
    path = "/api/revenue/summary/{seller_id}",
    params(
        ("seller_id" = i64, Path, description = "Seller user id"),
        ("startDate" = Option<String>, Query, description = "Inclusive lower bound, YYYY-MM-DD"),
        ("endDate" = Option<String>, Query, description = "Inclusive upper bound, YYYY-MM-DD"),
        ("category" = Option<String>, Query, description = "Exact category name"),
    ),
    responses(
        (status = 200, description = "Aggregated revenue summary", body = RevenueSummaryResponse),
        (status = 400, description = "Malformed date parameter"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "revenue"
)]
pub async fn revenue_summary(
    service: web::Data<SharedRevenueService>,
    path: web::Path<i64>,
    query: web::Query<RevenueQuery>,
) -> Result<HttpResponse, AppError> {
    let seller_id = path.into_inner();
    let filter = SaleFilter::from(query.into_inner());

    let summary = web::block(move || service.revenue_summary(seller_id, &filter))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(RevenueSummaryResponse::from(summary)))
}

/// GET /api/revenue/sold-products/{seller_id}
///
/// The itemized sales history behind the summary, newest first
/// (sold date descending, then order id descending).
#[utoipa::path(
    get,
    path = "/api/revenue/sold-products/{seller_id}",
    params(
        ("seller_id" = i64, Path, description = "Seller user id"),
        ("startDate" = Option<String>, Query, description = "Inclusive lower bound, YYYY-MM-DD"),
        ("endDate" = Option<String>, Query, description = "Inclusive upper bound, YYYY-MM-DD"),
        ("category" = Option<String>, Query, description = "Exact category name"),
    ),
    responses(
        (status = 200, description = "Sold product records, newest first", body = [SoldProductResponse]),
        (status = 400, description = "Malformed date parameter"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "revenue"
)]
pub async fn sold_products(
    service: web::Data<SharedRevenueService>,
    path: web::Path<i64>,
    query: web::Query<RevenueQuery>,
) -> Result<HttpResponse, AppError> {
    let seller_id = path.into_inner();
    let filter = SaleFilter::from(query.into_inner());

    let lines = web::block(move || service.sold_products(seller_id, &filter))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let records: Vec<SoldProductResponse> =
        lines.into_iter().map(SoldProductResponse::from).collect();

    Ok(HttpResponse::Ok().json(records))
}
