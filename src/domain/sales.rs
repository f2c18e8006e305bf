use bigdecimal::BigDecimal;
use chrono::NaiveDate;

/// One product-quantity contribution from one order item to a seller's
/// sales history. Derived per request by joining an order item to its
/// parent order and its product/category; never persisted.
#[derive(Debug, Clone)]
pub struct SoldLine {
    pub product_id: i64,
    pub product_name: String,
    pub seller_id: i64,
    pub quantity: i32,
    pub line_amount: BigDecimal,
    /// Date portion of the owning order's creation timestamp.
    pub sold_date: NaiveDate,
    /// `None` when the product's category has been deleted.
    pub category_name: Option<String>,
    pub order_id: i64,
    pub order_status: String,
    pub shipping_name: String,
    pub shipping_phone: String,
    pub shipping_address: String,
    pub note: Option<String>,
}

/// The three optional predicates a revenue query may carry. Absent bounds
/// mean unbounded on that side; the category match is exact and
/// case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct SaleFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub category: Option<String>,
}

/// Aggregate totals over a filtered sales history, together with the
/// filter echo used to produce them. Immutable and request-scoped.
#[derive(Debug, Clone)]
pub struct RevenueSummary {
    pub seller_id: i64,
    pub filter: SaleFilter,
    pub total_revenue: BigDecimal,
    pub total_items_sold: i64,
    pub distinct_order_count: i64,
}
