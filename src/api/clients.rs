use super::client::{ApiClient, ApiError};
use crate::models::Client;

impl ApiClient {
    /// Get all clients
    pub async fn get_clients(&self) -> Result<Vec<Client>, ApiError> {
        self.get("/api/clients").await
    }

    /// Get a single client by id
    pub async fn get_client(&self, client_id: i64) -> Result<Client, ApiError> {
        self.get(&format!("/api/clients/{}", client_id)).await
    }
}
