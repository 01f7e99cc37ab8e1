//! Back-navigation rules for the header's RETOUR button.
//!
//! The menu hierarchy is two levels deep in places (a category page with
//! sibling detail pages under it), so the destination of the back button
//! depends on where you are. The rules live in one priority-ordered table
//! instead of a conditional chain; the first matching rule wins and
//! anything unlisted falls back to the dashboard.

/// The home path. The back button is never shown here.
pub const HOME_PATH: &str = "/dashboard";

/// How a rule matches the current path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRule {
    /// Matches the path exactly.
    Exact(&'static str),
    /// Matches any path starting with the given prefix.
    Prefix(&'static str),
}

impl PathRule {
    fn matches(&self, path: &str) -> bool {
        match self {
            PathRule::Exact(p) => path == *p,
            PathRule::Prefix(p) => path.starts_with(p),
        }
    }
}

/// Ordered back-destination table. Exact rules are listed before the
/// prefix rules they would otherwise shadow: `/clients` returns to the
/// Régime Forfait menu while `/clients/<id>` returns to the client list.
const BACK_RULES: &[(PathRule, &str)] = &[
    (PathRule::Exact("/clients"), "/regime-forfait"),
    (PathRule::Prefix("/clients/"), "/clients"),
    (PathRule::Exact("/fournisseurs"), "/achats"),
    (PathRule::Exact("/bon-achats"), "/achats"),
    (PathRule::Exact("/versements-forfait"), "/regime-forfait"),
    (PathRule::Exact("/bons-passage-forfait"), "/regime-forfait"),
];

/// Whether the back button should be rendered for the given path.
pub fn shows_back_button(path: &str) -> bool {
    path != HOME_PATH
}

/// Where the back button leads from the given path.
pub fn back_destination(path: &str) -> &'static str {
    BACK_RULES
        .iter()
        .find(|(rule, _)| rule.matches(path))
        .map(|(_, dest)| *dest)
        .unwrap_or(HOME_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_button_hidden_on_dashboard_only() {
        assert!(!shows_back_button("/dashboard"));
        assert!(shows_back_button("/clients"));
        assert!(shows_back_button("/clients/42"));
        assert!(shows_back_button("/agents-list"));
        assert!(shows_back_button("/inventaire"));
    }

    #[test]
    fn clients_list_returns_to_forfait_menu() {
        assert_eq!(back_destination("/clients"), "/regime-forfait");
    }

    #[test]
    fn client_detail_returns_to_clients_list() {
        assert_eq!(back_destination("/clients/42"), "/clients");
        assert_eq!(back_destination("/clients/1"), "/clients");
    }

    #[test]
    fn achats_children_return_to_achats() {
        assert_eq!(back_destination("/fournisseurs"), "/achats");
        assert_eq!(back_destination("/bon-achats"), "/achats");
    }

    #[test]
    fn forfait_children_return_to_forfait_menu() {
        assert_eq!(back_destination("/versements-forfait"), "/regime-forfait");
        assert_eq!(back_destination("/bons-passage-forfait"), "/regime-forfait");
    }

    #[test]
    fn unlisted_paths_return_to_dashboard() {
        assert_eq!(back_destination("/agents-list"), "/dashboard");
        assert_eq!(back_destination("/agents"), "/dashboard");
        assert_eq!(back_destination("/regime-forfait"), "/dashboard");
        assert_eq!(back_destination("/regime-réel"), "/dashboard");
        assert_eq!(back_destination("/achats"), "/dashboard");
        assert_eq!(back_destination("/produits-services"), "/dashboard");
        assert_eq!(back_destination("/inventaire"), "/dashboard");
    }
}
