//! # Order Overview
//!
//! Built fresh from the header names and today's row on every request.
//!
//! - `names[i]` and `orders[i]` belong to the same participant
//! - A participant ordered if both trimmed name and trimmed order are non-empty
//! - Every name slot counts towards the total, blank ones included
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub name: String,
    pub order: String,
}

#[derive(Debug, Clone)]
pub struct OrderOverview {
    names: Vec<String>,
    orders: Vec<String>,
}

impl OrderOverview {
    /// Orders missing at the end of a short row count as empty, extra cells are dropped.
    pub fn new(names: &[String], orders: &[String]) -> Self {
        let mut orders = orders.to_vec();
        orders.resize(names.len(), String::new());

        Self {
            names: names.to_vec(),
            orders,
        }
    }

    pub fn line_items(&self) -> Vec<LineItem> {
        let mut items: Vec<LineItem> = self
            .names
            .iter()
            .zip(&self.orders)
            .map(|(name, order)| (name.trim(), order.trim()))
            .filter(|(name, order)| !name.is_empty() && !order.is_empty())
            .map(|(name, order)| LineItem {
                name: name.to_string(),
                order: order.to_string(),
            })
            .collect();

        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }

    pub fn max_count(&self) -> usize {
        self.names.len()
    }

    pub fn order_count(&self) -> usize {
        self.line_items().len()
    }

    pub fn order_percent(&self) -> f64 {
        percent(self.order_count(), self.max_count())
    }

    /// One `name: order` line per line item, e.g. `Joe: BLT Sandwich`.
    pub fn summary(&self) -> String {
        let mut summary = String::new();

        for item in self.line_items() {
            let _ = writeln!(summary, "{}: {}", item.name, item.order);
        }

        summary
    }
}

pub fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }

    100.0 * count as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn lunch() -> OrderOverview {
        OrderOverview::new(
            &strings(&["Alice", "Bob", "Carol"]),
            &strings(&["BLT", " ", "Soup"]),
        )
    }

    #[test]
    fn test_line_items() {
        let overview = lunch();

        assert_eq!(
            overview.line_items(),
            vec![
                LineItem {
                    name: "Alice".to_string(),
                    order: "BLT".to_string()
                },
                LineItem {
                    name: "Carol".to_string(),
                    order: "Soup".to_string()
                },
            ]
        );
        assert_eq!(overview.max_count(), 3);
        assert!((overview.order_percent() - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary() {
        assert_eq!(lunch().summary(), "Alice: BLT\nCarol: Soup\n");
    }

    #[test]
    fn test_sorted_by_name() {
        let overview = OrderOverview::new(
            &strings(&["bob", "Zed", "Alice", "alice"]),
            &strings(&["a", "b", "c", "d"]),
        );
        let names: Vec<String> = overview.line_items().into_iter().map(|i| i.name).collect();

        assert_eq!(names, strings(&["Alice", "Zed", "alice", "bob"]));
    }

    #[test]
    fn test_blank_names_count_but_never_order() {
        let overview = OrderOverview::new(&strings(&["", "  ", "Dan"]), &strings(&["Pizza", "Soup", ""]));

        assert!(overview.line_items().is_empty());
        assert_eq!(overview.max_count(), 3);
        assert_eq!(overview.order_percent(), 0.0);
        assert_eq!(overview.summary(), "");
    }

    #[test]
    fn test_trims_whitespace() {
        let overview = OrderOverview::new(&strings(&[" Eve "]), &strings(&["\tWrap  "]));

        assert_eq!(overview.summary(), "Eve: Wrap\n");
        assert_eq!(overview.order_percent(), 100.0);
    }

    #[test]
    fn test_empty_overview() {
        let overview = OrderOverview::new(&[], &[]);

        assert_eq!(overview.max_count(), 0);
        assert_eq!(overview.order_percent(), 0.0);
    }

    #[test]
    fn test_short_and_long_rows() {
        let short = OrderOverview::new(&strings(&["Alice", "Bob"]), &strings(&["BLT"]));
        let long = OrderOverview::new(&strings(&["Alice"]), &strings(&["BLT", "Soup"]));

        assert_eq!(short.summary(), "Alice: BLT\n");
        assert_eq!(short.max_count(), 2);
        assert_eq!(long.summary(), "Alice: BLT\n");
        assert_eq!(long.max_count(), 1);
    }
}
