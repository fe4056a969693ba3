use crate::{
    errors::GatewayError,
    logging::logger::log_info,
    providers::{http::client::ApiClient, player_reader::PlayerReader},
    shapes::{filter::FilterSelection, player::PlayerEntry},
};
use async_trait::async_trait;

pub struct HttpPlayerReader(ApiClient);

impl HttpPlayerReader {
    pub fn new(client: ApiClient) -> Self {
        Self(client)
    }

    async fn vocabulary(&self, name: &str) -> Result<Vec<String>, GatewayError> {
        let values: Vec<String> = self.0.get_json(&[name]).await?;
        log_info(&format!("retrieved {} unique {}", values.len(), name));
        Ok(values)
    }
}

#[async_trait]
impl PlayerReader for HttpPlayerReader {
    async fn read_all(&self) -> Result<Vec<PlayerEntry>, GatewayError> {
        let players: Vec<PlayerEntry> = self.0.get_json(&["players"]).await?;
        log_info(&format!("retrieved {} players", players.len()));
        Ok(players)
    }

    async fn read_filtered(
        &self,
        selection: &FilterSelection,
    ) -> Result<Vec<PlayerEntry>, GatewayError> {
        let players: Vec<PlayerEntry> = self.0.post_json(&["players", "filter"], selection).await?;
        if selection.is_unconstrained() {
            log_info(&format!("retrieved {} players through an unconstrained filter", players.len()));
        } else {
            log_info(&format!(
                "retrieved {} filtered players (sport={}, position={}, team={})",
                players.len(),
                selection.sport,
                selection.position,
                selection.team
            ));
        }
        Ok(players)
    }

    async fn positions(&self) -> Result<Vec<String>, GatewayError> {
        self.vocabulary("positions").await
    }

    async fn teams(&self) -> Result<Vec<String>, GatewayError> {
        self.vocabulary("teams").await
    }

    async fn sports(&self) -> Result<Vec<String>, GatewayError> {
        self.vocabulary("sports").await
    }
}
