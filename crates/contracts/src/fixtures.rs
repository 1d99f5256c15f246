//! Static mock datasets backing the dashboard.
//!
//! The stat tiles, sales series, category distribution and supplier roster
//! are independent fixtures: they are NOT aggregated from the product
//! catalog, and their numbers do not reconcile with it. The catalog itself
//! is created once at startup and never mutated.

use crate::dashboards::analytics::AnalyticsMetric;
use crate::dashboards::overview::{CategoryShare, MonthlySales, StatSummary};
use crate::domain::product::{Product, StockStatus};
use crate::domain::supplier::Supplier;
use chrono::NaiveDate;
use once_cell::sync::Lazy;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid literal date")
}

fn product(
    id: u32,
    name: &str,
    sku: &str,
    category: &str,
    quantity: u32,
    price: f64,
    status: StockStatus,
    supplier: &str,
    last_updated: NaiveDate,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        sku: sku.to_string(),
        category: category.to_string(),
        quantity,
        price,
        status,
        supplier: supplier.to_string(),
        last_updated,
    }
}

static CATALOG: Lazy<Vec<Product>> = Lazy::new(|| {
    use StockStatus::*;
    vec![
        product(1, "Laptop Pro 15\"", "LAP-001", "Electronics", 45, 1299.99, InStock, "Tech Suppliers Inc", date(2025, 11, 4)),
        product(2, "Wireless Mouse", "MOU-002", "Accessories", 8, 29.99, LowStock, "Gadget World", date(2025, 11, 3)),
        product(3, "USB-C Cable", "CAB-003", "Accessories", 0, 12.99, OutOfStock, "Cable Co", date(2025, 11, 1)),
        product(4, "Mechanical Keyboard", "KEY-004", "Accessories", 32, 89.99, InStock, "Tech Suppliers Inc", date(2025, 11, 4)),
        product(5, "27\" Monitor", "MON-005", "Electronics", 15, 349.99, InStock, "Display Masters", date(2025, 11, 5)),
        product(6, "Desk Lamp", "LAM-006", "Furniture", 5, 45.00, LowStock, "Office Goods", date(2025, 11, 2)),
    ]
});

static OVERVIEW_STATS: Lazy<Vec<StatSummary>> = Lazy::new(|| {
    let stat = |title: &str, value: &str, change: &str, icon: &str, accent: &str| StatSummary {
        title: title.to_string(),
        value: value.to_string(),
        change: change.to_string(),
        icon: icon.to_string(),
        accent: accent.to_string(),
    };
    vec![
        stat("Total Products", "1,247", "+12%", "package", "stat-card__icon--blue"),
        stat("Low Stock Items", "23", "-5%", "alert-triangle", "stat-card__icon--yellow"),
        stat("Total Revenue", "$847K", "+18%", "dollar-sign", "stat-card__icon--green"),
        stat("Orders Today", "156", "+8%", "trending-up", "stat-card__icon--purple"),
    ]
});

static SALES_BY_MONTH: Lazy<Vec<MonthlySales>> = Lazy::new(|| {
    let month = |month: &str, sales: u32, orders: u32| MonthlySales {
        month: month.to_string(),
        sales,
        orders,
    };
    vec![
        month("Jan", 45000, 234),
        month("Feb", 52000, 267),
        month("Mar", 48000, 245),
        month("Apr", 61000, 312),
        month("May", 55000, 289),
        month("Jun", 67000, 334),
    ]
});

static CATEGORY_DISTRIBUTION: Lazy<Vec<CategoryShare>> = Lazy::new(|| {
    let share = |name: &str, value: u32| CategoryShare {
        name: name.to_string(),
        value,
    };
    vec![
        share("Electronics", 42),
        share("Accessories", 28),
        share("Furniture", 18),
        share("Others", 12),
    ]
});

static ANALYTICS_METRICS: Lazy<Vec<AnalyticsMetric>> = Lazy::new(|| {
    let metric = |label: &str, value: &str, change: &str| AnalyticsMetric {
        label: label.to_string(),
        value: value.to_string(),
        change: change.to_string(),
    };
    vec![
        metric("Average Order Value", "$542.50", "+12.5%"),
        metric("Conversion Rate", "3.2%", "+0.4%"),
        metric("Stock Turnover", "8.3x", "-0.2x"),
    ]
});

static SUPPLIER_ROSTER: Lazy<Vec<Supplier>> = Lazy::new(|| {
    [
        "Tech Suppliers Inc",
        "Gadget World",
        "Cable Co",
        "Display Masters",
        "Office Goods",
    ]
    .into_iter()
    .map(Supplier::new)
    .collect()
});

/// The full product catalog, in insertion order.
pub fn catalog() -> &'static [Product] {
    &CATALOG
}

/// The four overview stat tiles.
pub fn overview_stats() -> &'static [StatSummary] {
    &OVERVIEW_STATS
}

/// Six months of sales and order counts.
pub fn sales_by_month() -> &'static [MonthlySales] {
    &SALES_BY_MONTH
}

/// Category shares for the pie chart.
pub fn category_distribution() -> &'static [CategoryShare] {
    &CATEGORY_DISTRIBUTION
}

/// The three analytics metric tiles.
pub fn analytics_metrics() -> &'static [AnalyticsMetric] {
    &ANALYTICS_METRICS
}

/// Supplier list for the suppliers tab.
pub fn supplier_roster() -> &'static [Supplier] {
    &SUPPLIER_ROSTER
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_six_products_in_insertion_order() {
        let skus: Vec<&str> = catalog().iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(
            skus,
            ["LAP-001", "MOU-002", "CAB-003", "KEY-004", "MON-005", "LAM-006"]
        );
    }

    #[test]
    fn catalog_ids_and_skus_are_unique() {
        let ids: HashSet<u32> = catalog().iter().map(|p| p.id).collect();
        let skus: HashSet<&str> = catalog().iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(ids.len(), catalog().len());
        assert_eq!(skus.len(), catalog().len());
    }

    #[test]
    fn category_distribution_is_an_independent_fixture() {
        // Percentages sum to 100 but do not reconcile with the catalog:
        // the six products have no "Others" category at all.
        let total: u32 = category_distribution().iter().map(|c| c.value).sum();
        assert_eq!(total, 100);
        assert!(category_distribution().iter().any(|c| c.name == "Others"));
        assert!(!catalog().iter().any(|p| p.category == "Others"));
    }

    #[test]
    fn sales_fixture_covers_first_half_year() {
        let months: Vec<&str> = sales_by_month().iter().map(|m| m.month.as_str()).collect();
        assert_eq!(months, ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
    }

    #[test]
    fn roster_covers_every_catalog_supplier() {
        let roster: HashSet<&str> = supplier_roster().iter().map(|s| s.name.as_str()).collect();
        for p in catalog() {
            assert!(roster.contains(p.supplier.as_str()), "{}", p.supplier);
        }
        assert_eq!(roster.len(), 5);
    }
}
