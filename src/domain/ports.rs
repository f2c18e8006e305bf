use super::errors::DomainError;
use super::sales::SoldLine;

pub trait SalesRepository: Send + Sync + 'static {
    /// The complete, unfiltered sales history of one seller: one record
    /// per order item whose product belongs to `seller_id`, regardless of
    /// the order's current status. An unknown seller yields an empty set.
    fn sold_lines_for_seller(&self, seller_id: i64) -> Result<Vec<SoldLine>, DomainError>;
}
