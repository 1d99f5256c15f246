use crate::shared::icons::icon;
use leptos::prelude::*;

/// Top chrome: product mark, titles and account controls.
///
/// "Add Product" is an inert affordance, wired to nothing.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header__brand">
                <div class="header__logo">{icon("package")}</div>
                <div>
                    <h1 class="header__title">"Inventory Management"</h1>
                    <p class="header__subtitle">"Admin Dashboard"</p>
                </div>
            </div>
            <div class="header__actions">
                <button class="btn btn--primary">
                    {icon("plus")}
                    "Add Product"
                </button>
                <div class="header__avatar">{icon("users")}</div>
            </div>
        </header>
    }
}
