use leptos::prelude::*;

/// The four mutually exclusive view modes of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Overview,
    Products,
    Analytics,
    Suppliers,
}

impl DashboardTab {
    /// Every tab the switcher offers, in display order. The tab bar is
    /// generated from this array, so values outside it are unreachable
    /// through the UI.
    pub const ALL: [DashboardTab; 4] = [
        DashboardTab::Overview,
        DashboardTab::Products,
        DashboardTab::Analytics,
        DashboardTab::Suppliers,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "overview",
            DashboardTab::Products => "products",
            DashboardTab::Analytics => "analytics",
            DashboardTab::Suppliers => "suppliers",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Products => "Products",
            DashboardTab::Analytics => "Analytics",
            DashboardTab::Suppliers => "Suppliers",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|tab| tab.key() == key)
    }
}

/// UI-local view state: the active tab and the product search query.
///
/// Initialised at mount, mutated synchronously inside input handlers,
/// discarded on unmount. Nothing is persisted across reloads.
#[derive(Clone, Copy)]
pub struct DashboardContext {
    pub active_tab: RwSignal<DashboardTab>,
    pub search: RwSignal<String>,
}

impl DashboardContext {
    pub fn new() -> Self {
        Self {
            active_tab: RwSignal::new(DashboardTab::Overview),
            search: RwSignal::new(String::new()),
        }
    }

    pub fn select_tab(&self, tab: DashboardTab) {
        log::debug!("tab selected: {}", tab.key());
        self.active_tab.set(tab);
    }

    /// Any string is accepted; the filter interprets it case-insensitively.
    pub fn set_search(&self, query: String) {
        self.search.set(query);
    }
}

impl Default for DashboardContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switcher_offers_exactly_four_tabs() {
        let keys: Vec<&str> = DashboardTab::ALL.iter().map(|t| t.key()).collect();
        assert_eq!(keys, ["overview", "products", "analytics", "suppliers"]);
    }

    #[test]
    fn from_key_round_trips_every_tab() {
        for tab in DashboardTab::ALL {
            assert_eq!(DashboardTab::from_key(tab.key()), Some(tab));
        }
    }

    #[test]
    fn from_key_rejects_unknown_values() {
        assert_eq!(DashboardTab::from_key("settings"), None);
        assert_eq!(DashboardTab::from_key(""), None);
        assert_eq!(DashboardTab::from_key("Overview"), None);
    }
}
