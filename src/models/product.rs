use bigdecimal::BigDecimal;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::products;

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Product {
    pub id: i64,
    pub seller_id: i64,
    pub category_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub condition_percentage: Option<i32>,
    pub trade_type: String,
    pub buy_price: Option<BigDecimal>,
    pub rent_price: Option<BigDecimal>,
    pub rent_unit: Option<String>,
    pub status: String,
    pub address_contact: Option<String>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = products)]
pub struct NewProduct {
    pub seller_id: i64,
    pub category_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub condition_percentage: Option<i32>,
    pub trade_type: String,
    pub buy_price: Option<BigDecimal>,
    pub rent_price: Option<BigDecimal>,
    pub rent_unit: Option<String>,
    pub status: String,
    pub address_contact: Option<String>,
}
