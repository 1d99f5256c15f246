use crate::dashboard::DashboardPage;
use crate::layout::global_context::DashboardContext;
use crate::layout::header::Header;
use crate::layout::nav::TabBar;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the view state to the whole app via context.
    provide_context(DashboardContext::new());

    view! {
        <div class="app">
            <Header />
            <TabBar />
            <main class="app__content">
                <DashboardPage />
            </main>
        </div>
    }
}
