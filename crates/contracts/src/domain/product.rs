use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Stock status
// ============================================================================

/// Stock status shown as the table badge.
///
/// This is a stored display label, deliberately not derived from
/// `quantity`: the fixture data happens to keep the two consistent, but
/// nothing enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl StockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }
}

// ============================================================================
// Product record
// ============================================================================

/// One inventory item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    /// Stock keeping unit, intended to be unique across the catalog.
    pub sku: String,
    pub category: String,
    pub quantity: u32,
    /// Unit price in dollars.
    pub price: f64,
    pub status: StockStatus,
    pub supplier: String,
    pub last_updated: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_as_display_label() {
        assert_eq!(
            serde_json::to_string(&StockStatus::InStock).unwrap(),
            "\"In Stock\""
        );
        assert_eq!(
            serde_json::to_string(&StockStatus::LowStock).unwrap(),
            "\"Low Stock\""
        );
        assert_eq!(
            serde_json::to_string(&StockStatus::OutOfStock).unwrap(),
            "\"Out of Stock\""
        );
    }

    #[test]
    fn status_label_matches_serde_rename() {
        for status in [
            StockStatus::InStock,
            StockStatus::LowStock,
            StockStatus::OutOfStock,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.label()));
        }
    }

    #[test]
    fn product_uses_camel_case_field_names() {
        let product = Product {
            id: 1,
            name: "Laptop Pro 15\"".to_string(),
            sku: "LAP-001".to_string(),
            category: "Electronics".to_string(),
            quantity: 45,
            price: 1299.99,
            status: StockStatus::InStock,
            supplier: "Tech Suppliers Inc".to_string(),
            last_updated: NaiveDate::from_ymd_opt(2025, 11, 4).unwrap(),
        };
        let json = serde_json::to_string(&product).unwrap();
        assert!(json.contains("\"lastUpdated\":\"2025-11-04\""));
        assert!(json.contains("\"status\":\"In Stock\""));
    }
}
