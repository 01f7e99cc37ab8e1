pub mod agents;
pub mod bon_achats;
pub mod client;
pub mod clients;
pub mod fournisseurs;
pub mod inventaire;
pub mod produits;

pub use client::{ApiClient, ApiError};
