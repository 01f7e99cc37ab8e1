//! Menu layout selection by submenu title.

use vitalecosystem_web::components::{MenuItem, SubmenuKind};

fn labels(items: &[MenuItem]) -> Vec<&str> {
    items.iter().map(|i| i.label).collect()
}

#[test]
fn regime_forfait_shows_its_three_tiles() {
    let items = SubmenuKind::from_title("Régime Forfait").items();
    assert_eq!(labels(items), ["Clients", "Versements", "Bons de livraisons"]);
}

#[test]
fn only_the_clients_tile_navigates() {
    let items = SubmenuKind::from_title("Régime Forfait").items();
    let targets: Vec<_> = items.iter().map(|i| (i.label, i.target)).collect();
    assert_eq!(
        targets,
        [
            ("Clients", Some("/clients")),
            ("Versements", None),
            ("Bons de livraisons", None),
        ]
    );
}

#[test]
fn other_titles_share_the_generic_tiles() {
    for title in ["Régime Réel", "Achats", "Titre inattendu"] {
        let items = SubmenuKind::from_title(title).items();
        assert_eq!(
            labels(items),
            ["Gérer", "Ajouter", "Rapports", "Historique", "Documents", "Paramètres"],
            "for title {title:?}"
        );
        assert!(items.iter().all(|i| i.target.is_none()));
    }
}

#[test]
fn every_tile_has_an_icon_and_description() {
    for kind in [SubmenuKind::RegimeForfait, SubmenuKind::Generic] {
        for item in kind.items() {
            assert!(!item.icon.is_empty(), "{} has no icon", item.label);
            assert!(
                !item.description.is_empty(),
                "{} has no description",
                item.label
            );
        }
    }
}
