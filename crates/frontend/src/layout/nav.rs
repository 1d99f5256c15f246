use crate::layout::global_context::{DashboardContext, DashboardTab};
use leptos::prelude::*;

/// Tab switcher. Buttons are generated from `DashboardTab::ALL`, so the
/// selectable values are exactly the four enumerated tabs.
#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = expect_context::<DashboardContext>();

    view! {
        <nav class="tabs">
            {DashboardTab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class=move || {
                                if ctx.active_tab.get() == tab {
                                    "tabs__item tabs__item--active"
                                } else {
                                    "tabs__item"
                                }
                            }
                            on:click=move |_| ctx.select_tab(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
