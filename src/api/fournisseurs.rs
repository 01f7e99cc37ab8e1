use super::client::{ApiClient, ApiError};
use crate::models::Fournisseur;

impl ApiClient {
    /// Get all suppliers
    pub async fn get_fournisseurs(&self) -> Result<Vec<Fournisseur>, ApiError> {
        self.get("/api/fournisseurs").await
    }
}
