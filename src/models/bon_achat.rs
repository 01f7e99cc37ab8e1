use serde::{Deserialize, Serialize};

use super::client::format_date_fr;

/// Purchase order header
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonAchat {
    pub id: i64,
    pub date: Option<String>,
    pub fournisseur: String,
    pub montant_total: f64,
    #[serde(default)]
    pub montant_verse: f64,
}

impl BonAchat {
    /// Amount still owed to the supplier
    pub fn reste(&self) -> f64 {
        self.montant_total - self.montant_verse
    }

    /// Whether the order is fully paid
    pub fn solde(&self) -> bool {
        self.reste() <= 0.0
    }

    /// Order date formatted for display
    pub fn date_display(&self) -> String {
        self.date.as_deref().map(format_date_fr).unwrap_or_default()
    }
}

/// Format an amount in dinars for display
pub fn format_montant(montant: f64) -> String {
    format!("{:.2} DA", montant)
}

/// Product line of a purchase order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProduitBonAchat {
    pub id: i64,
    pub produit: String,
    pub qte: f64,
    pub prix: f64,
    pub bon_achat_id: i64,
}

/// Payment recorded against a purchase order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersementBonAchat {
    pub id: i64,
    pub montant: f64,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub bon_achat_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bon_achat_deserializes_and_computes_reste() {
        let json = r#"{
            "id": 12,
            "date": "2025-06-02",
            "fournisseur": "SARL MediStock",
            "montant_total": 145000.0,
            "montant_verse": 90000.0
        }"#;

        let bon: BonAchat = serde_json::from_str(json).unwrap();
        assert_eq!(bon.reste(), 55000.0);
        assert!(!bon.solde());
        assert_eq!(bon.date_display(), "02/06/2025");
    }

    #[test]
    fn missing_montant_verse_defaults_to_zero() {
        let json = r#"{
            "id": 13,
            "date": null,
            "fournisseur": "EURL HygiPlus",
            "montant_total": 30000.0
        }"#;

        let bon: BonAchat = serde_json::from_str(json).unwrap();
        assert_eq!(bon.montant_verse, 0.0);
        assert_eq!(bon.reste(), 30000.0);
        assert_eq!(bon.date_display(), "");
    }

    #[test]
    fn montants_display_with_two_decimals() {
        assert_eq!(format_montant(145000.0), "145000.00 DA");
        assert_eq!(format_montant(0.5), "0.50 DA");
    }

    #[test]
    fn versement_maps_type_column() {
        let json = r#"{
            "id": 4,
            "montant": 20000.0,
            "type": "Espèces",
            "bon_achat_id": 12
        }"#;

        let versement: VersementBonAchat = serde_json::from_str(json).unwrap();
        assert_eq!(versement.kind.as_deref(), Some("Espèces"));
        assert_eq!(versement.bon_achat_id, 12);
    }
}
