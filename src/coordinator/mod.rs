pub mod action;
pub mod effect;
pub mod runner;
pub mod state;

use crate::{
    coordinator::{
        action::Action,
        effect::Effect,
        state::{Notice, RosterState},
    },
    errors::GatewayError,
    localization::current_labels,
    logging::logger::log_warning,
    shapes::{
        draft::{DraftField, PlayerDraft},
        filter::FilterSelection,
    },
};

/// Single owner of the roster view state.
///
/// [`Coordinator::dispatch`] applies one action and returns the requests to
/// issue. It never performs I/O itself, so a sequence of actions can be
/// replayed deterministically.
#[derive(Debug, Default)]
pub struct Coordinator {
    state: RosterState,
}

impl Coordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RosterState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::LoadAll => Effect::reload(),
            Action::Select(dimension, value) => {
                self.state.selection.set(dimension, value);
                vec![]
            }
            Action::ApplyFilter => vec![Effect::FilterPlayers(self.state.selection.clone())],
            Action::ResetFilter => {
                self.reset_filter();
                vec![]
            }
            Action::OpenCreateForm => {
                self.state.edit_target = None;
                self.state.draft = PlayerDraft::default();
                self.state.form_open = true;
                vec![]
            }
            Action::BeginEdit(player) => {
                self.state.draft = PlayerDraft::from_player(&player);
                self.state.edit_target = Some(player.id);
                self.state.form_open = true;
                vec![]
            }
            Action::EditDraft(field, value) => {
                // identity is fixed once the player exists
                if !(field == DraftField::Id && self.state.is_editing()) {
                    self.state.draft.set(field, value);
                }
                vec![]
            }
            Action::Submit => self.submit(),
            Action::CancelForm => {
                self.close_form();
                vec![]
            }
            Action::RequestDelete(id) => {
                self.state.pending_delete = Some(id);
                vec![]
            }
            Action::ConfirmDelete => match self.state.pending_delete.take() {
                Some(id) => vec![Effect::DeletePlayer(id)],
                None => vec![],
            },
            Action::CancelDelete => {
                self.state.pending_delete = None;
                vec![]
            }
            Action::DismissNotice => {
                self.state.notice = None;
                vec![]
            }
            Action::PlayersLoaded(result) => {
                match result {
                    Ok(players) => {
                        self.state.players = players;
                        self.reset_filter();
                    }
                    Err(e) => self.fail(current_labels().could_not_load_players, &e),
                }
                vec![]
            }
            Action::PositionsLoaded(result) => {
                match result {
                    Ok(positions) => self.state.positions = positions,
                    Err(e) => self.fail(current_labels().could_not_load_positions, &e),
                }
                vec![]
            }
            Action::TeamsLoaded(result) => {
                match result {
                    Ok(teams) => self.state.teams = teams,
                    Err(e) => self.fail(current_labels().could_not_load_teams, &e),
                }
                vec![]
            }
            Action::SportsLoaded(result) => {
                match result {
                    Ok(sports) => self.state.sports = sports,
                    Err(e) => self.fail(current_labels().could_not_load_sports, &e),
                }
                vec![]
            }
            Action::FilterApplied(result) => {
                match result {
                    Ok(players) => self.state.filtered = players,
                    Err(e) => self.fail(current_labels().could_not_filter_players, &e),
                }
                vec![]
            }
            Action::PlayerCreated { id, result } => match result {
                Ok(()) => {
                    let still_drafting = self.state.form_open
                        && !self.state.is_editing()
                        && self.state.draft.id.trim() == id;
                    if still_drafting {
                        self.close_form();
                    }
                    self.state.notice = Some(Notice::Info(current_labels().player_created.into()));
                    Effect::reload()
                }
                Err(e) => {
                    self.fail(current_labels().could_not_create_player, &e);
                    vec![]
                }
            },
            Action::PlayerUpdated { id, result } => match result {
                Ok(()) => {
                    if self.state.edit_target.as_deref() == Some(id.as_str()) {
                        self.close_form();
                    }
                    self.state.notice = Some(Notice::Info(current_labels().player_updated.into()));
                    Effect::reload()
                }
                Err(e) => {
                    self.fail(current_labels().could_not_update_player, &e);
                    vec![]
                }
            },
            Action::PlayerDeleted { id: _, result } => match result {
                Ok(()) => {
                    self.state.notice = Some(Notice::Info(current_labels().player_deleted.into()));
                    Effect::reload()
                }
                Err(e) => {
                    self.fail(current_labels().could_not_delete_player, &e);
                    vec![]
                }
            },
        }
    }

    fn submit(&mut self) -> Vec<Effect> {
        if !self.state.form_open {
            return vec![];
        }
        let mut player = self.state.draft.to_player();
        match self.state.edit_target.clone() {
            // the body carries exactly the identity being updated
            Some(id) => {
                player.id = id.clone();
                vec![Effect::UpdatePlayer { id, player }]
            }
            None => {
                player.id = player.id.trim().to_string();
                if player.id.is_empty() {
                    self.state.notice =
                        Some(Notice::Error(current_labels().player_id_is_required.into()));
                    return vec![];
                }
                vec![Effect::CreatePlayer(player)]
            }
        }
    }

    fn reset_filter(&mut self) {
        self.state.selection = FilterSelection::default();
        self.state.filtered = self.state.players.clone();
    }

    fn close_form(&mut self) {
        self.state.form_open = false;
        self.state.edit_target = None;
        self.state.draft = PlayerDraft::default();
    }

    // the slice the failed request would have replaced is left untouched
    fn fail(&mut self, context: &str, error: &GatewayError) {
        let message = format!("{}: {}", context, error);
        log_warning(&message);
        self.state.notice = Some(Notice::Error(message));
    }
}
