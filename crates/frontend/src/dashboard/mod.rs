mod analytics;
mod overview;
mod products;
mod suppliers;

pub use analytics::AnalyticsPanel;
pub use overview::OverviewPanel;
pub use products::ProductsPanel;
pub use suppliers::SuppliersPanel;

use crate::layout::global_context::{DashboardContext, DashboardTab};
use leptos::prelude::*;

/// Renders the panel for the currently selected tab.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = expect_context::<DashboardContext>();

    move || match ctx.active_tab.get() {
        DashboardTab::Overview => view! { <OverviewPanel /> }.into_any(),
        DashboardTab::Products => view! { <ProductsPanel /> }.into_any(),
        DashboardTab::Analytics => view! { <AnalyticsPanel /> }.into_any(),
        DashboardTab::Suppliers => view! { <SuppliersPanel /> }.into_any(),
    }
}
