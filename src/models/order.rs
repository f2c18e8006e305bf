use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::catalog;
use crate::schema::orders;

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Order {
    pub id: i64,
    pub buyer_id: i64,
    pub total_amount: BigDecimal,
    pub shipping_fee: BigDecimal,
    pub discount_amount: BigDecimal,
    pub final_amount: BigDecimal,
    pub payment_method: String,
    pub status: String,
    pub shipping_name: String,
    pub shipping_phone: String,
    pub shipping_address: String,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrder {
    pub buyer_id: i64,
    pub total_amount: BigDecimal,
    pub shipping_fee: BigDecimal,
    pub discount_amount: BigDecimal,
    pub final_amount: BigDecimal,
    pub payment_method: String,
    pub status: String,
    pub shipping_name: String,
    pub shipping_phone: String,
    pub shipping_address: String,
    pub note: Option<String>,
}

impl NewOrder {
    /// Build an order row whose `final_amount` is derived from the other
    /// monetary columns (total + shipping fee − discount).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        buyer_id: i64,
        total_amount: BigDecimal,
        shipping_fee: BigDecimal,
        discount_amount: BigDecimal,
        payment_method: &str,
        status: &str,
        shipping_name: &str,
        shipping_phone: &str,
        shipping_address: &str,
        note: Option<String>,
    ) -> Self {
        let final_amount = catalog::final_amount(&total_amount, &shipping_fee, &discount_amount);
        Self {
            buyer_id,
            total_amount,
            shipping_fee,
            discount_amount,
            final_amount,
            payment_method: payment_method.to_string(),
            status: status.to_string(),
            shipping_name: shipping_name.to_string(),
            shipping_phone: shipping_phone.to_string(),
            shipping_address: shipping_address.to_string(),
            note,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;

    use super::NewOrder;

    #[test]
    fn final_amount_is_total_plus_shipping_minus_discount() {
        let order = NewOrder::new(
            1,
            BigDecimal::from_str("200.00").unwrap(),
            BigDecimal::from_str("25.00").unwrap(),
            BigDecimal::from_str("10.00").unwrap(),
            "COD",
            "PENDING",
            "Nguyễn Văn A",
            "0900000000",
            "123 Lê Lợi, Q.1",
            None,
        );
        let expected = &order.total_amount + &order.shipping_fee - &order.discount_amount;
        assert_eq!(order.final_amount, expected);
        assert_eq!(order.final_amount.to_string(), "215.00");
    }
}
