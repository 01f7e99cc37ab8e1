use super::client::{ApiClient, ApiError};
use crate::models::{BonAchat, ProduitBonAchat, VersementBonAchat};

impl ApiClient {
    /// Get all purchase orders, newest first
    pub async fn get_bon_achats(&self) -> Result<Vec<BonAchat>, ApiError> {
        self.get("/api/bon-achats").await
    }

    /// Get the product lines of a purchase order
    pub async fn get_bon_achat_produits(
        &self,
        bon_id: i64,
    ) -> Result<Vec<ProduitBonAchat>, ApiError> {
        self.get(&format!("/api/bon-achats/{}/produits", bon_id))
            .await
    }

    /// Get the payments recorded against a purchase order
    pub async fn get_bon_achat_versements(
        &self,
        bon_id: i64,
    ) -> Result<Vec<VersementBonAchat>, ApiError> {
        self.get(&format!("/api/bon-achats/{}/versements", bon_id))
            .await
    }
}
