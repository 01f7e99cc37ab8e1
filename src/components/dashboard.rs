use leptos::*;

use super::submenu::{MenuItem, MenuTile};

/// Top-level sections reachable from the dashboard
const DASHBOARD_ITEMS: &[MenuItem] = &[
    MenuItem {
        label: "Régime Forfait",
        icon: "📄",
        description: "Clients, versements et bons de livraisons",
        target: Some("/regime-forfait"),
    },
    MenuItem {
        label: "Régime Réel",
        icon: "📈",
        description: "Clients au réel",
        target: Some("/regime-réel"),
    },
    MenuItem {
        label: "Achats",
        icon: "🛒",
        description: "Fournisseurs et bons d'achats",
        target: Some("/achats"),
    },
    MenuItem {
        label: "Agents",
        icon: "👥",
        description: "Gérer les agents de collecte",
        target: Some("/agents"),
    },
    MenuItem {
        label: "Produits & Services",
        icon: "🧾",
        description: "Catalogue des produits et services",
        target: Some("/produits-services"),
    },
    MenuItem {
        label: "Inventaire",
        icon: "📦",
        description: "Consulter le stock",
        target: Some("/inventaire"),
    },
];

/// Home page: grid of the application's main sections
#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="submenu">
            <h2 class="submenu-title">"Tableau de bord"</h2>
            <div class="tile-grid">
                {DASHBOARD_ITEMS
                    .iter()
                    .map(|item| view! { <MenuTile item=*item /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_dashboard_tile_navigates_somewhere() {
        for item in DASHBOARD_ITEMS {
            assert!(item.target.is_some(), "{} has no target", item.label);
        }
    }
}
