pub mod agent;
pub mod bon_achat;
pub mod client;
pub mod fournisseur;
pub mod inventaire;
pub mod produit;

pub use agent::{Agent, Regime};
pub use bon_achat::{BonAchat, ProduitBonAchat, VersementBonAchat};
pub use client::Client;
pub use fournisseur::Fournisseur;
pub use inventaire::InventaireItem;
pub use produit::{Produit, Service};
