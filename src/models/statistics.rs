use serde::{Deserialize, Serialize};

use crate::utils::format_currency;

/// Aggregates returned by `GET /statistics`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_items: u64,
    pub total_categories: u64,
    pub total_orders: u64,
    pub total_sales: f64,
}

impl Statistics {
    /// Title/value pairs in the order the cards are laid out
    pub fn cards(&self) -> [(&'static str, String); 4] {
        [
            ("Total Items", self.total_items.to_string()),
            ("Total Categories", self.total_categories.to_string()),
            ("Total Orders", self.total_orders.to_string()),
            ("Total Sales", format_currency(self.total_sales)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_follow_dashboard_order() {
        let stats: Statistics = serde_json::from_str(
            r#"{"totalItems":12,"totalCategories":3,"totalOrders":40,"totalSales":1520.5}"#,
        )
        .unwrap();
        let cards = stats.cards();
        assert_eq!(cards[0], ("Total Items", "12".to_string()));
        assert_eq!(cards[3], ("Total Sales", "$1520.50".to_string()));
    }
}
