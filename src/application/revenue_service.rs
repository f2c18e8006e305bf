use crate::domain::errors::DomainError;
use crate::domain::ports::SalesRepository;
use crate::domain::revenue::{filter_sold_lines, summarize};
use crate::domain::sales::{RevenueSummary, SaleFilter, SoldLine};

/// The seller revenue-reporting facility: a fresh read of the seller's
/// sales history per call, filtered and reduced in memory. Stateless;
/// concurrent calls never interact.
pub struct RevenueService<R> {
    repo: R,
}

impl<R: SalesRepository> RevenueService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn revenue_summary(
        &self,
        seller_id: i64,
        filter: &SaleFilter,
    ) -> Result<RevenueSummary, DomainError> {
        let lines = filter_sold_lines(self.repo.sold_lines_for_seller(seller_id)?, filter);
        let totals = summarize(&lines);
        Ok(RevenueSummary {
            seller_id,
            filter: filter.clone(),
            total_revenue: totals.total_revenue,
            total_items_sold: totals.total_items_sold,
            distinct_order_count: totals.distinct_order_count,
        })
    }

    pub fn sold_products(
        &self,
        seller_id: i64,
        filter: &SaleFilter,
    ) -> Result<Vec<SoldLine>, DomainError> {
        Ok(filter_sold_lines(
            self.repo.sold_lines_for_seller(seller_id)?,
            filter,
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use chrono::NaiveDate;

    use super::*;

    struct FixedRepo {
        lines: Vec<SoldLine>,
    }

    impl SalesRepository for FixedRepo {
        fn sold_lines_for_seller(&self, seller_id: i64) -> Result<Vec<SoldLine>, DomainError> {
            Ok(self
                .lines
                .iter()
                .filter(|l| l.seller_id == seller_id)
                .cloned()
                .collect())
        }
    }

    struct FailingRepo;

    impl SalesRepository for FailingRepo {
        fn sold_lines_for_seller(&self, _seller_id: i64) -> Result<Vec<SoldLine>, DomainError> {
            Err(DomainError::Internal("connection reset".to_string()))
        }
    }

    /// Seller 1 with two orders: order 1 (2024-01-05, COMPLETED, qty 2,
    /// 100.00, "Đồ chơi") and order 2 (2024-02-10, PENDING, qty 1, 50.00,
    /// "Xe đẩy").
    fn two_order_history() -> FixedRepo {
        let line = |order_id: i64, date: &str, status: &str, qty: i32, amount: &str, cat: &str| {
            SoldLine {
                product_id: order_id * 10,
                product_name: format!("product-{}", order_id),
                seller_id: 1,
                quantity: qty,
                line_amount: BigDecimal::from_str(amount).unwrap(),
                sold_date: NaiveDate::from_str(date).unwrap(),
                category_name: Some(cat.to_string()),
                order_id,
                order_status: status.to_string(),
                shipping_name: "Trần Thị B".to_string(),
                shipping_phone: "0911111111".to_string(),
                shipping_address: "45 Hai Bà Trưng, Q.1".to_string(),
                note: None,
            }
        };
        FixedRepo {
            lines: vec![
                line(1, "2024-01-05", "COMPLETED", 2, "100.00", "Đồ chơi"),
                line(2, "2024-02-10", "PENDING", 1, "50.00", "Xe đẩy"),
            ],
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::from_str(s).unwrap()
    }

    #[test]
    fn unfiltered_summary_covers_the_whole_history() {
        let service = RevenueService::new(two_order_history());
        let summary = service.revenue_summary(1, &SaleFilter::default()).unwrap();
        assert_eq!(summary.total_revenue.to_string(), "150.00");
        assert_eq!(summary.total_items_sold, 3);
        assert_eq!(summary.distinct_order_count, 2);
        assert_eq!(summary.seller_id, 1);
    }

    #[test]
    fn summary_respects_the_date_window() {
        let service = RevenueService::new(two_order_history());
        let filter = SaleFilter {
            start_date: Some(date("2024-01-01")),
            end_date: Some(date("2024-01-31")),
            category: None,
        };
        let summary = service.revenue_summary(1, &filter).unwrap();
        assert_eq!(summary.total_revenue.to_string(), "100.00");
        assert_eq!(summary.total_items_sold, 2);
        assert_eq!(summary.distinct_order_count, 1);
    }

    #[test]
    fn sold_products_filters_by_category() {
        let service = RevenueService::new(two_order_history());
        let filter = SaleFilter {
            category: Some("Xe đẩy".to_string()),
            ..Default::default()
        };
        let lines = service.sold_products(1, &filter).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].order_id, 2);
        assert_eq!(lines[0].order_status, "PENDING");
    }

    #[test]
    fn unknown_seller_gets_an_empty_result_on_both_operations() {
        let service = RevenueService::new(two_order_history());
        let summary = service.revenue_summary(99, &SaleFilter::default()).unwrap();
        assert_eq!(summary.total_revenue.to_string(), "0.00");
        assert_eq!(summary.distinct_order_count, 0);
        assert!(service.sold_products(99, &SaleFilter::default()).unwrap().is_empty());
    }

    #[test]
    fn category_with_no_sales_is_a_zero_summary_not_an_error() {
        let service = RevenueService::new(two_order_history());
        let filter = SaleFilter {
            category: Some("Tã bỉm".to_string()),
            ..Default::default()
        };
        let summary = service.revenue_summary(1, &filter).unwrap();
        assert_eq!(summary.total_revenue.to_string(), "0.00");
        assert_eq!(summary.total_items_sold, 0);
        assert!(service.sold_products(1, &filter).unwrap().is_empty());
    }

    #[test]
    fn store_failures_propagate_instead_of_reading_as_no_sales() {
        let service = RevenueService::new(FailingRepo);
        assert!(matches!(
            service.revenue_summary(1, &SaleFilter::default()),
            Err(DomainError::Internal(_))
        ));
        assert!(matches!(
            service.sold_products(1, &SaleFilter::default()),
            Err(DomainError::Internal(_))
        ));
    }
}
