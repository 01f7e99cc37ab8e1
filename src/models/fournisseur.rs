use serde::{Deserialize, Serialize};

/// Supplier record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fournisseur {
    pub id: i64,
    pub nom: String,
    pub telephone: Option<String>,
    pub adresse: Option<String>,
}
