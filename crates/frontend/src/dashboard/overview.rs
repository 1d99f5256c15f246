use crate::shared::components::charts::{BarChart, LineChart, PieChart};
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use contracts::fixtures;
use leptos::prelude::*;

/// Overview tab: stat tiles plus the three fixture charts. Everything here
/// is static data, independent of the product filter.
#[component]
pub fn OverviewPanel() -> impl IntoView {
    let sales: Vec<(String, f64)> = fixtures::sales_by_month()
        .iter()
        .map(|m| (m.month.clone(), f64::from(m.sales)))
        .collect();
    let orders: Vec<(String, f64)> = fixtures::sales_by_month()
        .iter()
        .map(|m| (m.month.clone(), f64::from(m.orders)))
        .collect();
    let categories: Vec<(String, f64)> = fixtures::category_distribution()
        .iter()
        .map(|c| (c.name.clone(), f64::from(c.value)))
        .collect();

    view! {
        <div class="page page--dashboard" id="overview--dashboard">
            <div class="stat-grid">
                {fixtures::overview_stats()
                    .iter()
                    .cloned()
                    .map(|stat| view! { <StatCard stat=stat /> })
                    .collect_view()}
            </div>

            <div class="chart-grid">
                <section class="card">
                    <div class="card__header">
                        <h3 class="card__title">"Sales Overview"</h3>
                        {icon("bar-chart")}
                    </div>
                    <BarChart data=sales />
                </section>
                <section class="card">
                    <div class="card__header">
                        <h3 class="card__title">"Category Distribution"</h3>
                        {icon("archive")}
                    </div>
                    <PieChart data=categories />
                </section>
            </div>

            <section class="card">
                <div class="card__header">
                    <h3 class="card__title">"Orders Trend"</h3>
                    {icon("cart")}
                </div>
                <LineChart data=orders height=250.0 />
            </section>
        </div>
    }
}
