use crate::{errors::GatewayError, shapes::player::PlayerEntry};
use async_trait::async_trait;

/// Write side of the remote data service. Response bodies of successful
/// writes carry nothing the client needs.
#[async_trait]
pub trait PlayerWriter {
    async fn create(&self, player: &PlayerEntry) -> Result<(), GatewayError>;
    async fn update(&self, id: &str, player: &PlayerEntry) -> Result<(), GatewayError>;
    async fn delete(&self, id: &str) -> Result<(), GatewayError>;
}
