use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Regime;

/// Client record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub nom: String,
    pub specialite: Option<String>,
    pub tel: Option<String>,
    pub mode: Option<String>,
    pub agent: Option<String>,
    pub etat_contrat: Option<String>,
    pub debut_contrat: Option<String>,
    pub fin_contrat: Option<String>,
}

impl Client {
    /// Interpret the raw `mode` column as a taxation regime
    pub fn regime(&self) -> Option<Regime> {
        self.mode.as_deref().and_then(Regime::parse)
    }

    /// Contract start formatted for display
    pub fn debut_contrat_display(&self) -> Option<String> {
        self.debut_contrat.as_deref().map(format_date_fr)
    }

    /// Contract end formatted for display
    pub fn fin_contrat_display(&self) -> Option<String> {
        self.fin_contrat.as_deref().map(format_date_fr)
    }
}

/// Format an ISO date from the backend as jj/mm/aaaa.
/// Values that do not parse are displayed as received.
pub fn format_date_fr(raw: &str) -> String {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_deserializes_from_backend_row() {
        let json = r#"{
            "id": 42,
            "nom": "Cabinet Benali",
            "specialite": "Dentiste",
            "tel": "023 45 67 89",
            "mode": "Forfait",
            "agent": "Karim B.",
            "etat_contrat": "Actif",
            "debut_contrat": "2025-01-15",
            "fin_contrat": "2026-01-14"
        }"#;

        let client: Client = serde_json::from_str(json).unwrap();
        assert_eq!(client.id, 42);
        assert_eq!(client.regime(), Some(Regime::Forfait));
        assert_eq!(client.debut_contrat_display().unwrap(), "15/01/2025");
        assert_eq!(client.fin_contrat_display().unwrap(), "14/01/2026");
    }

    #[test]
    fn unparseable_dates_are_shown_verbatim() {
        assert_eq!(format_date_fr("2025-02-30"), "2025-02-30");
        assert_eq!(format_date_fr("bientôt"), "bientôt");
    }

    #[test]
    fn null_fields_are_tolerated() {
        let json = r#"{
            "id": 7,
            "nom": "Pharmacie du Centre",
            "specialite": null,
            "tel": null,
            "mode": null,
            "agent": null,
            "etat_contrat": null,
            "debut_contrat": null,
            "fin_contrat": null
        }"#;

        let client: Client = serde_json::from_str(json).unwrap();
        assert!(client.regime().is_none());
        assert!(client.debut_contrat_display().is_none());
    }
}
