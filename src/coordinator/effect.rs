use crate::{
    coordinator::action::Action,
    providers::{player_reader::PlayerReader, player_writer::PlayerWriter},
    shapes::{filter::FilterSelection, player::PlayerEntry},
};

/// A request the coordinator wants issued. Each effect maps to exactly one
/// gateway call and produces exactly one completion [`Action`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchPlayers,
    FetchPositions,
    FetchTeams,
    FetchSports,
    FilterPlayers(FilterSelection),
    CreatePlayer(PlayerEntry),
    UpdatePlayer { id: String, player: PlayerEntry },
    DeletePlayer(String),
}

impl Effect {
    /// Invalidate and reload: every slice fetched again from scratch.
    /// Writes never patch the local collections.
    pub fn reload() -> Vec<Effect> {
        vec![
            Effect::FetchPlayers,
            Effect::FetchPositions,
            Effect::FetchTeams,
            Effect::FetchSports,
        ]
    }
}

pub async fn perform<R, W>(effect: Effect, reader: &R, writer: &W) -> Action
where
    R: PlayerReader + Send + Sync + ?Sized,
    W: PlayerWriter + Send + Sync + ?Sized,
{
    match effect {
        Effect::FetchPlayers => Action::PlayersLoaded(reader.read_all().await),
        Effect::FetchPositions => Action::PositionsLoaded(reader.positions().await),
        Effect::FetchTeams => Action::TeamsLoaded(reader.teams().await),
        Effect::FetchSports => Action::SportsLoaded(reader.sports().await),
        Effect::FilterPlayers(selection) => {
            Action::FilterApplied(reader.read_filtered(&selection).await)
        }
        Effect::CreatePlayer(player) => {
            let result = writer.create(&player).await;
            Action::PlayerCreated {
                id: player.id,
                result,
            }
        }
        Effect::UpdatePlayer { id, player } => {
            let result = writer.update(&id, &player).await;
            Action::PlayerUpdated { id, result }
        }
        Effect::DeletePlayer(id) => {
            let result = writer.delete(&id).await;
            Action::PlayerDeleted { id, result }
        }
    }
}
