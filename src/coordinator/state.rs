use crate::shapes::{
    draft::PlayerDraft,
    filter::{FilterDimension, FilterSelection},
    player::PlayerEntry,
};

/// Feedback for the user about the last completed operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

/// Everything the front end renders.
///
/// `filtered` is what the table shows. It mirrors `players` after every full
/// fetch and after a reset; after a filter request it holds exactly what the
/// service returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterState {
    pub players: Vec<PlayerEntry>,
    pub filtered: Vec<PlayerEntry>,
    pub positions: Vec<String>,
    pub teams: Vec<String>,
    pub sports: Vec<String>,
    pub selection: FilterSelection,
    pub form_open: bool,
    pub draft: PlayerDraft,
    pub edit_target: Option<String>,
    pub pending_delete: Option<String>,
    pub notice: Option<Notice>,
}

impl RosterState {
    pub fn vocabulary(&self, dimension: FilterDimension) -> &[String] {
        match dimension {
            FilterDimension::Sport => &self.sports,
            FilterDimension::Position => &self.positions,
            FilterDimension::Team => &self.teams,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.edit_target.is_some()
    }
}
