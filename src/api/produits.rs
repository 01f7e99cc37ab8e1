use super::client::{ApiClient, ApiError};
use crate::models::{Produit, Service};

impl ApiClient {
    /// Get all products
    pub async fn get_produits(&self) -> Result<Vec<Produit>, ApiError> {
        self.get("/api/produits").await
    }

    /// Get all services
    pub async fn get_services(&self) -> Result<Vec<Service>, ApiError> {
        self.get("/api/services").await
    }
}
