use crate::{
    errors::GatewayError,
    logging::logger::log_info,
    providers::{http::client::ApiClient, player_writer::PlayerWriter},
    shapes::player::PlayerEntry,
};
use async_trait::async_trait;
use reqwest::Method;

pub struct HttpPlayerWriter(ApiClient);

impl HttpPlayerWriter {
    pub fn new(client: ApiClient) -> Self {
        Self(client)
    }
}

#[async_trait]
impl PlayerWriter for HttpPlayerWriter {
    async fn create(&self, player: &PlayerEntry) -> Result<(), GatewayError> {
        self.0
            .execute(Method::POST, &["players"], Some(player))
            .await?;
        log_info(&format!("created player '{}'", player.id));
        Ok(())
    }

    async fn update(&self, id: &str, player: &PlayerEntry) -> Result<(), GatewayError> {
        self.0
            .execute(Method::PUT, &["players", id], Some(player))
            .await?;
        log_info(&format!("updated player '{}'", id));
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), GatewayError> {
        self.0
            .execute(Method::DELETE, &["players", id], None::<&()>)
            .await?;
        log_info(&format!("deleted player '{}'", id));
        Ok(())
    }
}
