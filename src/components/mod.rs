pub mod agents;
pub mod bon_achats;
pub mod bons_passage_forfait;
pub mod client_profile;
pub mod clients;
pub mod common;
pub mod dashboard;
pub mod error_boundary;
pub mod fournisseurs;
pub mod inventaire;
pub mod layout;
pub mod not_found;
pub mod produits_services;
pub mod submenu;
pub mod versements_forfait;

pub use agents::Agents;
pub use bon_achats::BonAchats;
pub use bons_passage_forfait::BonsPassageForfait;
pub use client_profile::ClientProfile;
pub use clients::Clients;
pub use dashboard::Dashboard;
pub use error_boundary::AppErrorBoundary;
pub use fournisseurs::Fournisseurs;
pub use inventaire::Inventaire;
pub use layout::Layout;
pub use not_found::NotFound;
pub use produits_services::ProduitsServices;
pub use submenu::{MenuItem, SubMenu, SubmenuKind};
pub use versements_forfait::VersementsForfait;
