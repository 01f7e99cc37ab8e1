use super::client::{ApiClient, ApiError};
use crate::models::InventaireItem;

impl ApiClient {
    /// Get the current stock levels
    pub async fn get_inventaire(&self) -> Result<Vec<InventaireItem>, ApiError> {
        self.get("/api/inventaire").await
    }
}
