use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;

use super::errors::DomainError;

/// Whether a product is offered for sale, for rent, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeType {
    BuyOnly,
    RentOnly,
    Both,
}

impl TradeType {
    pub fn as_str(self) -> &'static str {
        match self {
            TradeType::BuyOnly => "BUY_ONLY",
            TradeType::RentOnly => "RENT_ONLY",
            TradeType::Both => "BOTH",
        }
    }
}

impl fmt::Display for TradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TradeType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BUY_ONLY" => Ok(TradeType::BuyOnly),
            "RENT_ONLY" => Ok(TradeType::RentOnly),
            "BOTH" => Ok(TradeType::Both),
            other => Err(DomainError::InvalidInput(format!(
                "Unknown trade type '{}'",
                other
            ))),
        }
    }
}

/// Check that a product's prices are consistent with its trade type:
/// each mode the trade type offers must carry a positive price, and any
/// price that is given at all must be positive.
pub fn validate_pricing(
    trade_type: TradeType,
    buy_price: Option<&BigDecimal>,
    rent_price: Option<&BigDecimal>,
) -> Result<(), DomainError> {
    let zero = BigDecimal::from(0);
    if buy_price.is_some_and(|p| *p <= zero) {
        return Err(DomainError::InvalidInput(
            "buyPrice must be a positive amount".to_string(),
        ));
    }
    if rent_price.is_some_and(|p| *p <= zero) {
        return Err(DomainError::InvalidInput(
            "rentPrice must be a positive amount".to_string(),
        ));
    }
    let missing = |mode: &str| {
        DomainError::InvalidInput(format!(
            "{} is required for trade type {}",
            mode, trade_type
        ))
    };
    match trade_type {
        TradeType::BuyOnly if buy_price.is_none() => Err(missing("buyPrice")),
        TradeType::RentOnly if rent_price.is_none() => Err(missing("rentPrice")),
        TradeType::Both if buy_price.is_none() => Err(missing("buyPrice")),
        TradeType::Both if rent_price.is_none() => Err(missing("rentPrice")),
        _ => Ok(()),
    }
}

/// The amount an order actually charges: item total plus shipping fee
/// minus discount.
pub fn final_amount(
    total_amount: &BigDecimal,
    shipping_fee: &BigDecimal,
    discount_amount: &BigDecimal,
) -> BigDecimal {
    (total_amount + shipping_fee - discount_amount).with_scale(2)
}
