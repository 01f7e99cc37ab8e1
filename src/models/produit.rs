use serde::{Deserialize, Serialize};

/// Product catalogue entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Produit {
    pub id: i64,
    pub designation: String,
}

/// Service catalogue entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub designation: String,
    pub incineration: Option<bool>,
}
