use std::fmt;

/// Navigation level of the client UI, driven by reply categories.
///
/// The machine has two states: `Main` (top-level menu) and `DrillDown`
/// (inside a sub-menu, item list, or search result). The initial state is
/// `Main`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum NavLevel {
    /// Top-level menu.
    #[default]
    Main,

    /// Inside a sub-menu, item list, or search result.
    DrillDown,
}

impl fmt::Display for NavLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavLevel::Main => write!(f, "main"),
            NavLevel::DrillDown => write!(f, "drill-down"),
        }
    }
}

/// Category labels that put the client into the drill-down state.
///
/// Membership is tested by substring containment, so suffixed variants like
/// `repair_submenu` match as well.
pub const DRILLDOWN_CATEGORIES: &[&str] = &[
    "main_menu",
    "submenu",
    "item_list",
    "detail",
    "search_results",
];

/// Classifies a reply category into a navigation level.
///
/// Returns `None` for categories that belong to neither set; the caller
/// leaves the navigation state unchanged in that case.
pub fn classify_category(category: &str) -> Option<NavLevel> {
    if DRILLDOWN_CATEGORIES
        .iter()
        .any(|drill| category.contains(drill))
    {
        Some(NavLevel::DrillDown)
    } else if category == "greeting" || category == "default" {
        Some(NavLevel::Main)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_results_drills_down() {
        assert_eq!(classify_category("search_results"), Some(NavLevel::DrillDown));
    }

    #[test]
    fn suffixed_variants_drill_down() {
        assert_eq!(classify_category("repair_submenu"), Some(NavLevel::DrillDown));
        assert_eq!(classify_category("supply_submenu"), Some(NavLevel::DrillDown));
        assert_eq!(classify_category("item_list"), Some(NavLevel::DrillDown));
    }

    #[test]
    fn greeting_and_default_return_to_main() {
        assert_eq!(classify_category("greeting"), Some(NavLevel::Main));
        assert_eq!(classify_category("default"), Some(NavLevel::Main));
    }

    #[test]
    fn unrecognized_categories_are_unclassified() {
        assert_eq!(classify_category("emergency"), None);
        assert_eq!(classify_category("faq"), None);
        assert_eq!(classify_category(""), None);
    }

    #[test]
    fn initial_level_is_main() {
        assert_eq!(NavLevel::default(), NavLevel::Main);
    }
}
