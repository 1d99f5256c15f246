use crate::shared::icons::icon;
use contracts::dashboards::overview::StatSummary;
use leptos::prelude::*;

/// Summary tile: label, preformatted value and change vs last month.
#[component]
pub fn StatCard(stat: StatSummary) -> impl IntoView {
    // The fixture encodes direction in the sign prefix of `change`.
    let change_class = if stat.change.starts_with('+') {
        "stat-card__change stat-card__change--up"
    } else {
        "stat-card__change stat-card__change--down"
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__content">
                <div class="stat-card__label">{stat.title}</div>
                <div class="stat-card__value">{stat.value}</div>
                <div class=change_class>{format!("{} from last month", stat.change)}</div>
            </div>
            <div class=format!("stat-card__icon {}", stat.accent)>
                {icon(&stat.icon)}
            </div>
        </div>
    }
}
