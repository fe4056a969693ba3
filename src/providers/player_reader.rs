use crate::{
    errors::GatewayError,
    shapes::{filter::FilterSelection, player::PlayerEntry},
};
use async_trait::async_trait;

/// Read side of the remote data service.
#[async_trait]
pub trait PlayerReader {
    async fn read_all(&self) -> Result<Vec<PlayerEntry>, GatewayError>;
    async fn read_filtered(
        &self,
        selection: &FilterSelection,
    ) -> Result<Vec<PlayerEntry>, GatewayError>;
    async fn positions(&self) -> Result<Vec<String>, GatewayError>;
    async fn teams(&self) -> Result<Vec<String>, GatewayError>;
    async fn sports(&self) -> Result<Vec<String>, GatewayError>;
}
