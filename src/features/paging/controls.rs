//! # Navigation Controls
//!
//! Enabled state of each navigation affordance, derived purely from the
//! page cursor, plus the action vocabulary carried in button custom ids.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation

/// Enabled flags for every navigation affordance on a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationControls {
    pub first_enabled: bool,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub last_enabled: bool,
    pub search_enabled: bool,
    pub home_enabled: bool,
}

impl NavigationControls {
    /// Derive control state from the 0-based page and the page count
    pub fn derive(current_page: usize, total_pages: usize) -> Self {
        let previous = current_page > 0;
        let next = current_page + 1 < total_pages;
        Self {
            first_enabled: previous,
            previous_enabled: previous,
            next_enabled: next,
            last_enabled: next,
            search_enabled: true,
            home_enabled: true,
        }
    }

    /// Every affordance disabled, used once a view has expired
    pub fn disabled() -> Self {
        Self {
            first_enabled: false,
            previous_enabled: false,
            next_enabled: false,
            last_enabled: false,
            search_enabled: false,
            home_enabled: false,
        }
    }

    /// Whether a click on `action` should be acted upon
    pub fn permits(&self, action: NavAction) -> bool {
        match action {
            NavAction::First => self.first_enabled,
            NavAction::Previous => self.previous_enabled,
            NavAction::Next => self.next_enabled,
            NavAction::Last => self.last_enabled,
            NavAction::Search => self.search_enabled,
            NavAction::Home => self.home_enabled,
            // Layout is a presentation switch, available while anything else is
            NavAction::ToggleLayout => self.search_enabled || self.home_enabled,
        }
    }
}

/// A navigation click, encoded as the suffix of a button custom id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    First,
    Previous,
    Next,
    Last,
    ToggleLayout,
    Search,
    Home,
}

impl NavAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavAction::First => "first",
            NavAction::Previous => "prev",
            NavAction::Next => "next",
            NavAction::Last => "last",
            NavAction::ToggleLayout => "layout",
            NavAction::Search => "search",
            NavAction::Home => "home",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "first" => Some(NavAction::First),
            "prev" => Some(NavAction::Previous),
            "next" => Some(NavAction::Next),
            "last" => Some(NavAction::Last),
            "layout" => Some(NavAction::ToggleLayout),
            "search" => Some(NavAction::Search),
            "home" => Some(NavAction::Home),
            _ => None,
        }
    }

    /// Build the custom id for this action under a view scope, e.g. `cities_next`
    pub fn custom_id(&self, scope: &str) -> String {
        format!("{scope}_{}", self.as_str())
    }

    /// Split a custom id back into its scope and action
    pub fn from_custom_id(custom_id: &str) -> Option<(&str, Self)> {
        let (scope, action) = custom_id.rsplit_once('_')?;
        Some((scope, Self::parse(action)?))
    }
}

impl std::fmt::Display for NavAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        for total in 1..6 {
            for current in 0..total {
                let controls = NavigationControls::derive(current, total);
                assert_eq!(!controls.previous_enabled, current == 0);
                assert_eq!(!controls.next_enabled, current == total - 1);
                assert_eq!(controls.first_enabled, controls.previous_enabled);
                assert_eq!(controls.last_enabled, controls.next_enabled);
                assert!(controls.search_enabled);
                assert!(controls.home_enabled);
            }
        }
    }

    #[test]
    fn test_single_page_has_no_movement() {
        let controls = NavigationControls::derive(0, 1);
        assert!(!controls.permits(NavAction::Previous));
        assert!(!controls.permits(NavAction::Next));
        assert!(controls.permits(NavAction::Search));
        assert!(controls.permits(NavAction::ToggleLayout));
    }

    #[test]
    fn test_disabled_permits_nothing() {
        let controls = NavigationControls::disabled();
        for action in [
            NavAction::First,
            NavAction::Previous,
            NavAction::Next,
            NavAction::Last,
            NavAction::ToggleLayout,
            NavAction::Search,
            NavAction::Home,
        ] {
            assert!(!controls.permits(action), "{action} should be rejected");
        }
    }

    #[test]
    fn test_custom_id_parsing() {
        assert_eq!(NavAction::Next.custom_id("cities"), "cities_next");
        assert_eq!(
            NavAction::from_custom_id("cities_next"),
            Some(("cities", NavAction::Next))
        );
        assert_eq!(
            NavAction::from_custom_id("school_list_prev"),
            Some(("school_list", NavAction::Previous))
        );
        assert_eq!(NavAction::from_custom_id("cities_page"), None);
        assert_eq!(NavAction::from_custom_id("nounderscore"), None);
    }
}
