use std::collections::HashSet;

use bigdecimal::BigDecimal;

use super::sales::{SaleFilter, SoldLine};

/// Aggregate totals over a set of sold lines.
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueTotals {
    pub total_revenue: BigDecimal,
    pub total_items_sold: i64,
    pub distinct_order_count: i64,
}

/// Apply a [`SaleFilter`] to an extracted sales history and return the
/// surviving records ordered newest-first.
///
/// The three predicates are AND-combined: an inclusive `[start_date,
/// end_date]` window over `sold_date`, and an exact, case-sensitive
/// category match. A window whose start lies after its end matches
/// nothing — the result is empty by definition, not an error. Output is
/// ordered by `sold_date` descending with ties broken by `order_id`
/// descending, so it never depends on input order.
pub fn filter_sold_lines(lines: Vec<SoldLine>, filter: &SaleFilter) -> Vec<SoldLine> {
    let mut kept: Vec<SoldLine> = lines
        .into_iter()
        .filter(|line| matches_filter(line, filter))
        .collect();
    kept.sort_by(|a, b| {
        b.sold_date
            .cmp(&a.sold_date)
            .then(b.order_id.cmp(&a.order_id))
    });
    kept
}

fn matches_filter(line: &SoldLine, filter: &SaleFilter) -> bool {
    if filter.start_date.is_some_and(|start| line.sold_date < start) {
        return false;
    }
    if filter.end_date.is_some_and(|end| line.sold_date > end) {
        return false;
    }
    match &filter.category {
        Some(category) => line.category_name.as_deref() == Some(category.as_str()),
        None => true,
    }
}

/// Reduce a filtered record set into its aggregate totals.
///
/// Revenue is an exact decimal sum of `line_amount` normalized to two
/// decimal places; binary floating point is never involved. An empty
/// input yields all-zero totals rather than an absent result.
pub fn summarize(lines: &[SoldLine]) -> RevenueTotals {
    let mut total_revenue = BigDecimal::from(0);
    let mut total_items_sold: i64 = 0;
    let mut order_ids = HashSet::new();
    for line in lines {
        total_revenue += &line.line_amount;
        total_items_sold += i64::from(line.quantity);
        order_ids.insert(line.order_id);
    }
    RevenueTotals {
        total_revenue: total_revenue.with_scale(2),
        total_items_sold,
        distinct_order_count: order_ids.len() as i64,
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::NaiveDate;

    use super::*;

    fn line(order_id: i64, date: &str, quantity: i32, amount: &str, category: &str) -> SoldLine {
        SoldLine {
            product_id: order_id * 10,
            product_name: format!("product-{}", order_id),
            seller_id: 1,
            quantity,
            line_amount: BigDecimal::from_str(amount).expect("valid decimal"),
            sold_date: NaiveDate::from_str(date).expect("valid date"),
            category_name: Some(category.to_string()),
            order_id,
            order_status: "COMPLETED".to_string(),
            shipping_name: "Nguyễn Văn A".to_string(),
            shipping_phone: "0900000000".to_string(),
            shipping_address: "123 Lê Lợi, Q.1".to_string(),
            note: None,
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::from_str(s).expect("valid date")
    }

    // ── summarize ────────────────────────────────────────────────────────────

    #[test]
    fn summarize_empty_input_is_all_zero() {
        let totals = summarize(&[]);
        assert_eq!(totals.total_revenue.to_string(), "0.00");
        assert_eq!(totals.total_items_sold, 0);
        assert_eq!(totals.distinct_order_count, 0);
    }

    #[test]
    fn summarize_sums_small_amounts_exactly() {
        // 0.10 three times must be exactly 0.30, not 0.30000000000000004.
        let lines = vec![
            line(1, "2024-01-01", 1, "0.10", "Đồ chơi"),
            line(2, "2024-01-02", 1, "0.10", "Đồ chơi"),
            line(3, "2024-01-03", 1, "0.10", "Đồ chơi"),
        ];
        assert_eq!(summarize(&lines).total_revenue.to_string(), "0.30");
    }

    #[test]
    fn summarize_counts_distinct_orders_once() {
        // Two items from the same order count one order, but both quantities.
        let lines = vec![
            line(7, "2024-01-01", 2, "10.00", "Đồ chơi"),
            line(7, "2024-01-01", 3, "5.50", "Xe đẩy"),
            line(8, "2024-01-02", 1, "4.50", "Đồ chơi"),
        ];
        let totals = summarize(&lines);
        assert_eq!(totals.total_revenue.to_string(), "20.00");
        assert_eq!(totals.total_items_sold, 6);
        assert_eq!(totals.distinct_order_count, 2);
    }

    #[test]
    fn summarize_is_independent_of_input_order() {
        let mut lines = vec![
            line(1, "2024-01-01", 2, "100.00", "Đồ chơi"),
            line(2, "2024-02-10", 1, "50.00", "Xe đẩy"),
            line(3, "2024-03-05", 4, "7.25", "Nôi cũi"),
        ];
        let forward = summarize(&lines);
        lines.reverse();
        assert_eq!(summarize(&lines), forward);
    }

    // ── filter_sold_lines ────────────────────────────────────────────────────

    #[test]
    fn date_bounds_are_inclusive() {
        let lines = vec![
            line(1, "2024-01-01", 1, "1.00", "Đồ chơi"),
            line(2, "2024-01-15", 1, "1.00", "Đồ chơi"),
            line(3, "2024-01-31", 1, "1.00", "Đồ chơi"),
            line(4, "2024-02-01", 1, "1.00", "Đồ chơi"),
        ];
        let filter = SaleFilter {
            start_date: Some(date("2024-01-01")),
            end_date: Some(date("2024-01-31")),
            category: None,
        };
        let kept = filter_sold_lines(lines, &filter);
        let ids: Vec<i64> = kept.iter().map(|l| l.order_id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn absent_bounds_are_unbounded() {
        let lines = vec![
            line(1, "2020-06-01", 1, "1.00", "Đồ chơi"),
            line(2, "2024-06-01", 1, "1.00", "Đồ chơi"),
        ];
        let only_start = SaleFilter {
            start_date: Some(date("2024-01-01")),
            ..Default::default()
        };
        assert_eq!(filter_sold_lines(lines.clone(), &only_start).len(), 1);

        let only_end = SaleFilter {
            end_date: Some(date("2020-12-31")),
            ..Default::default()
        };
        assert_eq!(filter_sold_lines(lines.clone(), &only_end).len(), 1);

        assert_eq!(filter_sold_lines(lines, &SaleFilter::default()).len(), 2);
    }

    #[test]
    fn start_after_end_yields_empty() {
        let lines = vec![line(1, "2024-01-15", 1, "1.00", "Đồ chơi")];
        let filter = SaleFilter {
            start_date: Some(date("2024-02-01")),
            end_date: Some(date("2024-01-01")),
            category: None,
        };
        assert!(filter_sold_lines(lines, &filter).is_empty());
    }

    #[test]
    fn category_match_is_exact_and_case_sensitive() {
        let lines = vec![
            line(1, "2024-01-01", 1, "1.00", "Đồ chơi"),
            line(2, "2024-01-02", 1, "1.00", "Xe đẩy"),
        ];
        let filter = SaleFilter {
            category: Some("Xe đẩy".to_string()),
            ..Default::default()
        };
        let kept = filter_sold_lines(lines.clone(), &filter);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].order_id, 2);

        let wrong_case = SaleFilter {
            category: Some("xe đẩy".to_string()),
            ..Default::default()
        };
        assert!(filter_sold_lines(lines, &wrong_case).is_empty());
    }

    #[test]
    fn category_filter_never_matches_a_missing_category() {
        let mut orphan = line(1, "2024-01-01", 1, "1.00", "Đồ chơi");
        orphan.category_name = None;
        let filter = SaleFilter {
            category: Some("Đồ chơi".to_string()),
            ..Default::default()
        };
        assert!(filter_sold_lines(vec![orphan.clone()], &filter).is_empty());
        // Without a category predicate the orphan still flows through.
        assert_eq!(filter_sold_lines(vec![orphan], &SaleFilter::default()).len(), 1);
    }

    #[test]
    fn predicates_are_and_combined() {
        let lines = vec![
            line(1, "2024-01-05", 1, "1.00", "Đồ chơi"),
            line(2, "2024-01-06", 1, "1.00", "Xe đẩy"),
            line(3, "2024-03-01", 1, "1.00", "Đồ chơi"),
        ];
        let filter = SaleFilter {
            start_date: Some(date("2024-01-01")),
            end_date: Some(date("2024-01-31")),
            category: Some("Đồ chơi".to_string()),
        };
        let kept = filter_sold_lines(lines, &filter);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].order_id, 1);
    }

    #[test]
    fn output_is_newest_first_with_order_id_tiebreak() {
        let lines = vec![
            line(5, "2024-01-10", 1, "1.00", "Đồ chơi"),
            line(9, "2024-01-10", 1, "1.00", "Đồ chơi"),
            line(2, "2024-02-01", 1, "1.00", "Đồ chơi"),
            line(1, "2023-12-31", 1, "1.00", "Đồ chơi"),
        ];
        let mut reversed = lines.clone();
        reversed.reverse();

        let expect = vec![2, 9, 5, 1];
        let ids = |kept: Vec<SoldLine>| kept.iter().map(|l| l.order_id).collect::<Vec<_>>();
        assert_eq!(ids(filter_sold_lines(lines, &SaleFilter::default())), expect);
        // Reversing the input before filtering does not change the output.
        assert_eq!(
            ids(filter_sold_lines(reversed, &SaleFilter::default())),
            expect
        );
    }
}
