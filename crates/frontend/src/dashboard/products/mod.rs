use crate::layout::global_context::DashboardContext;
use crate::shared::components::ui::badge::StatusBadge;
use crate::shared::format::format_price;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use contracts::domain::product::Product;
use contracts::fixtures;
use leptos::prelude::*;

impl Searchable for Product {
    fn matches_query(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
            || self.sku.to_lowercase().contains(query_lower)
            || self.category.to_lowercase().contains(query_lower)
    }
}

/// Quantity cell treatment: anything below 10 units is called out.
fn quantity_class(quantity: u32) -> &'static str {
    if quantity < 10 {
        "table__qty table__qty--low"
    } else {
        "table__qty"
    }
}

/// Products tab: search box bound to the shared query plus the filtered
/// catalog table.
///
/// The Filter / Add New buttons and the per-row Edit / Delete buttons are
/// inert affordances.
#[component]
pub fn ProductsPanel() -> impl IntoView {
    let ctx = expect_context::<DashboardContext>();

    let filtered = move || filter_list(fixtures::catalog(), &ctx.search.get());

    view! {
        <div class="page" id="products--list">
            <div class="card card--toolbar">
                <SearchInput
                    value=ctx.search
                    on_change=Callback::new(move |q: String| ctx.set_search(q))
                    placeholder="Search products by name, SKU, or category..."
                />
                <button class="btn btn--muted">"Filter"</button>
                <button class="btn btn--primary">
                    {icon("plus")}
                    "Add New"
                </button>
            </div>

            <div class="card table-container">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Product"</th>
                            <th>"SKU"</th>
                            <th>"Category"</th>
                            <th>"Quantity"</th>
                            <th>"Price"</th>
                            <th>"Status"</th>
                            <th>"Supplier"</th>
                            <th>"Updated"</th>
                            <th class="table__actions">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = filtered();
                            if rows.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="9" class="table__empty">
                                            {format!(
                                                "No products match \"{}\"",
                                                ctx.search.get(),
                                            )}
                                        </td>
                                    </tr>
                                }
                                .into_any()
                            } else {
                                rows.into_iter()
                                    .map(|product| view! { <ProductRow product=product /> })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn ProductRow(product: Product) -> impl IntoView {
    let qty_class = quantity_class(product.quantity);
    let updated = product.last_updated.to_string();

    view! {
        <tr>
            <td class="table__name">{product.name}</td>
            <td class="table__dim">{product.sku}</td>
            <td class="table__dim">{product.category}</td>
            <td>
                <span class=qty_class>{product.quantity}</span>
            </td>
            <td>{format_price(product.price)}</td>
            <td>
                <StatusBadge label=product.status.label() />
            </td>
            <td class="table__dim">{product.supplier}</td>
            <td class="table__dim">{updated}</td>
            <td class="table__actions">
                <button class="btn-icon btn-icon--edit" title="Edit">{icon("edit")}</button>
                <button class="btn-icon btn-icon--delete" title="Delete">{icon("trash")}</button>
            </td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn empty_query_returns_the_whole_catalog_in_order() {
        let all = filter_list(fixtures::catalog(), "");
        assert_eq!(all.len(), fixtures::catalog().len());
        let ids: Vec<u32> = all.iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn result_is_a_subsequence_of_the_catalog() {
        for query in ["a", "e", "00", "accessories", "zzz"] {
            let result = filter_list(fixtures::catalog(), query);
            let mut catalog_ids = fixtures::catalog().iter().map(|p| p.id);
            for p in &result {
                // Each result id must appear later in the catalog than the
                // previous one: no reordering, no invented entries.
                assert!(catalog_ids.any(|id| id == p.id), "query {query:?}");
            }
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        let result = filter_list(fixtures::catalog(), "lap");
        assert!(names(&result).contains(&"Laptop Pro 15\""));
        let result = filter_list(fixtures::catalog(), "LAP");
        assert!(names(&result).contains(&"Laptop Pro 15\""));
    }

    #[test]
    fn matches_on_name_or_sku_or_category() {
        // name
        assert_eq!(names(&filter_list(fixtures::catalog(), "monitor")), ["27\" Monitor"]);
        // sku
        assert_eq!(names(&filter_list(fixtures::catalog(), "key-004")), ["Mechanical Keyboard"]);
        // category
        assert_eq!(names(&filter_list(fixtures::catalog(), "furniture")), ["Desk Lamp"]);
    }

    #[test]
    fn query_cab_finds_exactly_the_usb_c_cable() {
        let result = filter_list(fixtures::catalog(), "cab");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "USB-C Cable");
        assert_eq!(result[0].sku, "CAB-003");
    }

    #[test]
    fn query_accessories_finds_three_products_in_catalog_order() {
        let result = filter_list(fixtures::catalog(), "accessories");
        assert_eq!(
            names(&result),
            ["Wireless Mouse", "USB-C Cable", "Mechanical Keyboard"]
        );
    }

    #[test]
    fn low_quantity_treatment_kicks_in_below_ten() {
        // Wireless Mouse (8) is highlighted, Laptop Pro (45) is not.
        assert_eq!(quantity_class(8), "table__qty table__qty--low");
        assert_eq!(quantity_class(45), "table__qty");
        assert_eq!(quantity_class(9), "table__qty table__qty--low");
        assert_eq!(quantity_class(10), "table__qty");
        assert_eq!(quantity_class(0), "table__qty table__qty--low");
    }
}
