//! Back-button walks through the menu hierarchy.

use vitalecosystem_web::navigation::{back_destination, shows_back_button, HOME_PATH};

/// Follow the back button from `start` until it disappears.
fn back_chain(start: &str) -> Vec<&'static str> {
    let mut path = start.to_string();
    let mut hops = Vec::new();
    while shows_back_button(&path) {
        let dest = back_destination(&path);
        hops.push(dest);
        path = dest.to_string();
        assert!(
            hops.len() <= 8,
            "back chain from {start} does not terminate"
        );
    }
    hops
}

#[test]
fn client_detail_walks_up_the_forfait_hierarchy() {
    assert_eq!(
        back_chain("/clients/42"),
        vec!["/clients", "/regime-forfait", HOME_PATH]
    );
}

#[test]
fn achats_children_walk_through_their_category() {
    assert_eq!(back_chain("/fournisseurs"), vec!["/achats", HOME_PATH]);
    assert_eq!(back_chain("/bon-achats"), vec!["/achats", HOME_PATH]);
}

#[test]
fn forfait_detail_pages_walk_through_the_forfait_menu() {
    assert_eq!(
        back_chain("/versements-forfait"),
        vec!["/regime-forfait", HOME_PATH]
    );
    assert_eq!(
        back_chain("/bons-passage-forfait"),
        vec!["/regime-forfait", HOME_PATH]
    );
}

#[test]
fn flat_pages_return_straight_home() {
    for path in [
        "/agents-list",
        "/agents",
        "/produits-services",
        "/inventaire",
        "/regime-réel",
    ] {
        assert_eq!(back_chain(path), vec![HOME_PATH], "from {path}");
    }
}

#[test]
fn dashboard_has_no_back_chain() {
    assert!(back_chain(HOME_PATH).is_empty());
}
