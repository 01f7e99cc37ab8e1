use super::client::{ApiClient, ApiError};
use crate::models::Agent;

impl ApiClient {
    /// Get all agents
    pub async fn get_agents(&self) -> Result<Vec<Agent>, ApiError> {
        self.get("/api/agents").await
    }
}
