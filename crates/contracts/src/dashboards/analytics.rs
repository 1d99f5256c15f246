use serde::{Deserialize, Serialize};

/// One metric tile on the analytics tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsMetric {
    pub label: String,
    /// Preformatted display value ("$542.50", "3.2%", "8.3x").
    pub value: String,
    /// Signed change vs last month ("+12.5%", "-0.2x").
    pub change: String,
}
