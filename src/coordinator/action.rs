use crate::{
    errors::GatewayError,
    shapes::{
        draft::DraftField,
        filter::{FilterDimension, FilterValue},
        player::PlayerEntry,
    },
};

/// Input to the coordinator: either something the user did or the
/// completion of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    LoadAll,
    Select(FilterDimension, FilterValue),
    ApplyFilter,
    ResetFilter,
    OpenCreateForm,
    BeginEdit(PlayerEntry),
    EditDraft(DraftField, String),
    Submit,
    CancelForm,
    RequestDelete(String),
    ConfirmDelete,
    CancelDelete,
    DismissNotice,

    PlayersLoaded(Result<Vec<PlayerEntry>, GatewayError>),
    PositionsLoaded(Result<Vec<String>, GatewayError>),
    TeamsLoaded(Result<Vec<String>, GatewayError>),
    SportsLoaded(Result<Vec<String>, GatewayError>),
    FilterApplied(Result<Vec<PlayerEntry>, GatewayError>),
    PlayerCreated {
        id: String,
        result: Result<(), GatewayError>,
    },
    PlayerUpdated {
        id: String,
        result: Result<(), GatewayError>,
    },
    PlayerDeleted {
        id: String,
        result: Result<(), GatewayError>,
    },
}
