use serde::{Deserialize, Serialize};

/// Stock level for one product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventaireItem {
    pub id: i64,
    pub produit: String,
    pub qte: f64,
    pub prix_dernier: Option<f64>,
}
