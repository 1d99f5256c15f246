//! List utilities: substring search over in-memory rows plus the search box
//! component they are driven from.

use leptos::prelude::*;

/// Trait for row types that support the search box.
pub trait Searchable {
    /// Whether the row matches an already case-folded query.
    fn matches_query(&self, query_lower: &str) -> bool;
}

/// Order-preserving subsequence of `items` matching `query`.
///
/// The query is case-folded once; an empty query matches everything.
/// Callers recompute from a derived closure on every signal change.
pub fn filter_list<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    if query.is_empty() {
        return items.to_vec();
    }
    let query_lower = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.matches_query(&query_lower))
        .cloned()
        .collect()
}

/// Search box with a clear button.
///
/// The query is pushed on every input event; interpretation (case folding,
/// substring matching) happens in `filter_list`.
#[component]
pub fn SearchInput(
    /// Current query value.
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new query on every keystroke and on clear.
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text.
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    view! {
        <div class="search">
            <span class="search__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                class="search__input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            {move || {
                if value.get().is_empty() {
                    view! { <></> }.into_any()
                } else {
                    view! {
                        <button
                            class="search__clear"
                            title="Clear"
                            on:click=move |_| on_change.run(String::new())
                        >
                            {crate::shared::icons::icon("x")}
                        </button>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row(&'static str);

    impl Searchable for Row {
        fn matches_query(&self, query_lower: &str) -> bool {
            self.0.to_lowercase().contains(query_lower)
        }
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let rows = vec![Row("alpha"), Row("beta"), Row("gamma")];
        assert_eq!(filter_list(&rows, ""), rows);
    }

    #[test]
    fn filter_preserves_input_order() {
        let rows = vec![Row("cable"), Row("lamp"), Row("CABinet")];
        assert_eq!(filter_list(&rows, "cab"), vec![Row("cable"), Row("CABinet")]);
    }

    #[test]
    fn filter_is_case_insensitive_both_ways() {
        let rows = vec![Row("Laptop Pro 15\"")];
        assert_eq!(filter_list(&rows, "LAP").len(), 1);
        assert_eq!(filter_list(&rows, "lap").len(), 1);
    }

    #[test]
    fn filter_never_invents_entries() {
        let rows = vec![Row("alpha")];
        assert!(filter_list(&rows, "zzz").is_empty());
    }
}
