use leptos::prelude::*;

/// Badge classes for a stock status label.
///
/// Kept as a pure function of the label so the mapping is testable; labels
/// outside the known set fall back to the neutral gray badge.
pub fn status_badge_class(label: &str) -> &'static str {
    match label {
        "In Stock" => "badge badge--success",
        "Low Stock" => "badge badge--warning",
        "Out of Stock" => "badge badge--error",
        _ => "badge badge--neutral",
    }
}

/// Colored pill summarizing stock status, independent of quantity.
#[component]
pub fn StatusBadge(label: &'static str) -> impl IntoView {
    view! {
        <span class=status_badge_class(label)>{label}</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_map_to_their_colour() {
        assert_eq!(status_badge_class("In Stock"), "badge badge--success");
        assert_eq!(status_badge_class("Low Stock"), "badge badge--warning");
        assert_eq!(status_badge_class("Out of Stock"), "badge badge--error");
    }

    #[test]
    fn anything_else_falls_back_to_gray() {
        assert_eq!(status_badge_class("Backordered"), "badge badge--neutral");
        assert_eq!(status_badge_class(""), "badge badge--neutral");
        assert_eq!(status_badge_class("in stock"), "badge badge--neutral");
    }
}
