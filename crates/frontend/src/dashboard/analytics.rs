use crate::shared::components::charts::LineChart;
use contracts::fixtures;
use leptos::prelude::*;

/// Analytics tab: the revenue line over the sales fixture plus three static
/// metric tiles.
#[component]
pub fn AnalyticsPanel() -> impl IntoView {
    let revenue: Vec<(String, f64)> = fixtures::sales_by_month()
        .iter()
        .map(|m| (m.month.clone(), f64::from(m.sales)))
        .collect();

    view! {
        <div class="page page--dashboard" id="analytics--dashboard">
            <section class="card">
                <h3 class="card__title">"Revenue Analytics"</h3>
                <LineChart data=revenue height=400.0 color="#3b82f6" />
            </section>

            <div class="metric-grid">
                {fixtures::analytics_metrics()
                    .iter()
                    .cloned()
                    .map(|metric| {
                        let change_class = if metric.change.starts_with('+') {
                            "metric__change metric__change--up"
                        } else {
                            "metric__change metric__change--down"
                        };
                        view! {
                            <div class="card metric">
                                <h4 class="metric__label">{metric.label}</h4>
                                <p class="metric__value">{metric.value}</p>
                                <p class=change_class>
                                    {format!("{} vs last month", metric.change)}
                                </p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
