use serde::{Deserialize, Serialize};

/// Collection agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: i64,
    pub nom: String,
    pub telephone: Option<String>,
    pub whatsapp: Option<String>,
    pub gps: Option<String>,
    pub regime: Option<String>,
    pub notification: Option<String>,
}

impl Agent {
    /// Interpret the raw `regime` column
    pub fn regime(&self) -> Option<Regime> {
        self.regime.as_deref().and_then(Regime::parse)
    }
}

/// Taxation regime an agent or client is managed under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    Forfait,
    Reel,
}

impl Regime {
    /// Parse the value stored by the backend
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Forfait" => Some(Self::Forfait),
            "Réel" | "Reel" => Some(Self::Reel),
            _ => None,
        }
    }

    /// Get display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Forfait => "Forfait",
            Self::Reel => "Réel",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regime_parses_backend_values() {
        assert_eq!(Regime::parse("Forfait"), Some(Regime::Forfait));
        assert_eq!(Regime::parse("Réel"), Some(Regime::Reel));
        assert_eq!(Regime::parse("Reel"), Some(Regime::Reel));
        assert_eq!(Regime::parse("forfait"), None);
        assert_eq!(Regime::parse(""), None);
    }

    #[test]
    fn agent_deserializes_from_backend_row() {
        let json = r#"{
            "id": 3,
            "nom": "Karim B.",
            "telephone": "0551 23 45 67",
            "whatsapp": "0551 23 45 67",
            "gps": "36.7538,3.0588",
            "regime": "Forfait",
            "notification": null
        }"#;

        let agent: Agent = serde_json::from_str(json).unwrap();
        assert_eq!(agent.id, 3);
        assert_eq!(agent.nom, "Karim B.");
        assert_eq!(agent.regime(), Some(Regime::Forfait));
        assert!(agent.notification.is_none());
    }
}
