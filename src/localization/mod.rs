/// User-facing strings.
#[derive(Debug)]
pub struct Labels {
    pub app_title: &'static str,
    pub quit: &'static str,
    pub back: &'static str,
    pub confirm: &'static str,
    pub up: &'static str,
    pub down: &'static str,
    pub next: &'static str,
    pub previous: &'static str,
    pub next_value: &'static str,
    pub previous_value: &'static str,
    pub apply_filter: &'static str,
    pub reset_filter: &'static str,
    pub new_player: &'static str,
    pub edit_player: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub reload: &'static str,
    pub sport: &'static str,
    pub position: &'static str,
    pub team: &'static str,
    pub all_sports: &'static str,
    pub all_positions: &'static str,
    pub all_teams: &'static str,
    pub showing_players: &'static str,
    pub player_report: &'static str,
    pub no_players_found: &'static str,
    pub id: &'static str,
    pub name: &'static str,
    pub player_id: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub sport_league: &'static str,
    pub team_id: &'static str,
    pub position_id: &'static str,
    pub position_display_name: &'static str,
    pub create_player: &'static str,
    pub update_player: &'static str,
    pub delete_player_confirmation: &'static str,
    pub player_id_is_required: &'static str,
    pub player_created: &'static str,
    pub player_updated: &'static str,
    pub player_deleted: &'static str,
    pub could_not_load_players: &'static str,
    pub could_not_load_positions: &'static str,
    pub could_not_load_teams: &'static str,
    pub could_not_load_sports: &'static str,
    pub could_not_filter_players: &'static str,
    pub could_not_create_player: &'static str,
    pub could_not_update_player: &'static str,
    pub could_not_delete_player: &'static str,
    pub could_not_recognize_home_directory: &'static str,
    pub could_not_create_app_directory: &'static str,
    pub info: &'static str,
    pub error: &'static str,
}

static EN: Labels = Labels {
    app_title: "Player Database Manager",
    quit: "quit",
    back: "back",
    confirm: "confirm",
    up: "up",
    down: "down",
    next: "next",
    previous: "previous",
    next_value: "next value",
    previous_value: "previous value",
    apply_filter: "apply filter",
    reset_filter: "reset",
    new_player: "new player",
    edit_player: "edit player",
    edit: "edit",
    delete: "delete",
    reload: "reload",
    sport: "sport/league",
    position: "position",
    team: "team",
    all_sports: "All Sports",
    all_positions: "All Positions",
    all_teams: "All Teams",
    showing_players: "Showing {} of {} players",
    player_report: "player report",
    no_players_found: "No players found",
    id: "ID",
    name: "Name",
    player_id: "player id",
    first_name: "first name",
    last_name: "last name",
    sport_league: "sport/league (NFL, NBA, etc)",
    team_id: "team id",
    position_id: "position id",
    position_display_name: "position display name",
    create_player: "create player",
    update_player: "update player",
    delete_player_confirmation: "Delete this player?",
    player_id_is_required: "player id is required",
    player_created: "player created",
    player_updated: "player updated",
    player_deleted: "player deleted",
    could_not_load_players: "could not load players",
    could_not_load_positions: "could not load positions",
    could_not_load_teams: "could not load teams",
    could_not_load_sports: "could not load sports",
    could_not_filter_players: "could not filter players",
    could_not_create_player: "could not create player",
    could_not_update_player: "could not update player",
    could_not_delete_player: "could not delete player",
    could_not_recognize_home_directory: "could not recognize home directory",
    could_not_create_app_directory: "could not create app directory",
    info: "info",
    error: "error",
};

pub fn current_labels() -> &'static Labels {
    &EN
}
