use serde::{Deserialize, Serialize};

/// One summary tile at the top of the overview tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatSummary {
    pub title: String,
    /// Preformatted display value ("1,247", "$847K").
    pub value: String,
    /// Signed change vs last month ("+12%", "-5%"). The sign prefix drives
    /// the up/down colouring.
    pub change: String,
    /// Icon name resolved by the frontend `icon()` helper.
    pub icon: String,
    /// Accent modifier class for the icon block.
    pub accent: String,
}

/// One month of the sales fixture. `sales` feeds the overview bar chart and
/// the analytics revenue line, `orders` feeds the orders trend line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySales {
    pub month: String,
    pub sales: u32,
    pub orders: u32,
}

/// One slice of the category distribution pie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryShare {
    pub name: String,
    pub value: u32,
}
