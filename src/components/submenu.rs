use leptos::*;
use leptos_router::use_navigate;

/// One tile of a menu grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    /// Route the tile navigates to when clicked. Tiles without a
    /// target render identically but clicking them does nothing.
    pub target: Option<&'static str>,
}

/// Known submenu layouts. A title that matches no known layout gets
/// the generic one; there is no error case for unrecognized titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmenuKind {
    RegimeForfait,
    Generic,
}

impl SubmenuKind {
    /// Select the layout for a submenu title
    pub fn from_title(title: &str) -> Self {
        match title {
            "Régime Forfait" => Self::RegimeForfait,
            _ => Self::Generic,
        }
    }

    /// The tiles of this layout
    pub fn items(&self) -> &'static [MenuItem] {
        match self {
            Self::RegimeForfait => REGIME_FORFAIT_ITEMS,
            Self::Generic => GENERIC_ITEMS,
        }
    }
}

/// Tiles of the Régime Forfait section
const REGIME_FORFAIT_ITEMS: &[MenuItem] = &[
    MenuItem {
        label: "Clients",
        icon: "👥",
        description: "Gérer les clients",
        target: Some("/clients"),
    },
    MenuItem {
        label: "Versements",
        icon: "💰",
        description: "Gérer les versements",
        target: None,
    },
    MenuItem {
        label: "Bons de livraisons",
        icon: "🚚",
        description: "Gérer les bons de livraisons",
        target: None,
    },
];

/// Default tiles shown by every other section
const GENERIC_ITEMS: &[MenuItem] = &[
    MenuItem {
        label: "Gérer",
        icon: "📋",
        description: "Afficher et modifier",
        target: None,
    },
    MenuItem {
        label: "Ajouter",
        icon: "➕",
        description: "Créer une nouvelle entrée",
        target: None,
    },
    MenuItem {
        label: "Rapports",
        icon: "📊",
        description: "Générer des statistiques",
        target: None,
    },
    MenuItem {
        label: "Historique",
        icon: "🕘",
        description: "Consulter l'historique",
        target: None,
    },
    MenuItem {
        label: "Documents",
        icon: "📄",
        description: "Gérer les documents",
        target: None,
    },
    MenuItem {
        label: "Paramètres",
        icon: "⚙️",
        description: "Configurer les options",
        target: None,
    },
];

/// Submenu page: a titled grid of tiles chosen by the title
#[component]
pub fn SubMenu(#[prop(into)] title: String) -> impl IntoView {
    let items = SubmenuKind::from_title(&title).items();

    view! {
        <div class="submenu">
            <h2 class="submenu-title">{title}</h2>
            <div class="tile-grid">
                {items
                    .iter()
                    .map(|item| view! { <MenuTile item=*item /> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// A single clickable tile
#[component]
pub fn MenuTile(item: MenuItem) -> impl IntoView {
    let navigate = use_navigate();

    let on_click = move |_| {
        if let Some(target) = item.target {
            navigate(target, Default::default());
        }
    };

    let class = if item.target.is_some() {
        "tile tile-clickable"
    } else {
        "tile"
    };

    view! {
        <div class=class on:click=on_click>
            <span class="tile-icon" aria-hidden="true">{item.icon}</span>
            <div class="tile-text">
                <h3 class="tile-label">{item.label}</h3>
                <p class="tile-description">{item.description}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_forfait_title_gets_its_own_layout() {
        assert_eq!(
            SubmenuKind::from_title("Régime Forfait"),
            SubmenuKind::RegimeForfait
        );
        assert_eq!(SubmenuKind::from_title("Régime Réel"), SubmenuKind::Generic);
        assert_eq!(SubmenuKind::from_title("Achats"), SubmenuKind::Generic);
        // Unknown titles are not an error
        assert_eq!(
            SubmenuKind::from_title("Section inconnue"),
            SubmenuKind::Generic
        );
        // Match is exact, not case-insensitive
        assert_eq!(
            SubmenuKind::from_title("régime forfait"),
            SubmenuKind::Generic
        );
    }
}
