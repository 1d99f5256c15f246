use crate::shared::icons::icon;
use contracts::fixtures;
use leptos::prelude::*;

/// Suppliers tab: the static roster. Product counts are derived from the
/// supplier name, so they are stable across renders.
///
/// "View Details" and "Contact" are inert affordances.
#[component]
pub fn SuppliersPanel() -> impl IntoView {
    view! {
        <div class="page" id="suppliers--list">
            <div class="card">
                <div class="card__header card__header--bordered">
                    <h3 class="card__title">"Supplier Management"</h3>
                </div>
                <ul class="supplier-list">
                    {fixtures::supplier_roster()
                        .iter()
                        .map(|supplier| {
                            let count = supplier.product_count();
                            view! {
                                <li class="supplier">
                                    <div class="supplier__identity">
                                        <div class="supplier__avatar">{icon("users")}</div>
                                        <div>
                                            <h4 class="supplier__name">{supplier.name.clone()}</h4>
                                            <p class="supplier__meta">
                                                {format!(
                                                    "Active since {} \u{2022} {} products",
                                                    supplier.active_since, count,
                                                )}
                                            </p>
                                        </div>
                                    </div>
                                    <div class="supplier__actions">
                                        <button class="btn btn--ghost">"View Details"</button>
                                        <button class="btn btn--ghost">"Contact"</button>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
