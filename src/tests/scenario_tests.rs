#[cfg(test)]
mod tests {
    use crate::{
        coordinator::{action::Action, effect::Effect, state::Notice, Coordinator},
        errors::GatewayError,
        shapes::{
            draft::DraftField,
            filter::{FilterDimension, FilterValue},
            player::PlayerEntry,
        },
        tests::fake_gateway::fake::{player, settle, FakeGateway},
    };

    fn jo_do() -> PlayerEntry {
        PlayerEntry {
            id: "1".into(),
            first_name: "Jo".into(),
            last_name: "Do".into(),
            team_id: Some("NYX".into()),
            position_id: Some("QB".into()),
            position_display_name: Some("Quarterback".into()),
            sport_id: Some("NFL".into()),
        }
    }

    fn league() -> Vec<PlayerEntry> {
        vec![
            jo_do(),
            player("2", "Al", "Bo", "NBA", "LAL", "Center"),
            player("3", "Cy", "Ro", "NBA", "BOS", "Center"),
            player("4", "Di", "Fa", "NFL", "NYX", "Kicker"),
        ]
    }

    async fn started(gateway: &FakeGateway) -> Coordinator {
        let mut coordinator = Coordinator::new();
        settle(&mut coordinator, Action::LoadAll, gateway).await;
        coordinator
    }

    async fn create(coordinator: &mut Coordinator, gateway: &FakeGateway, draft: PlayerEntry) -> Vec<Effect> {
        coordinator.dispatch(Action::OpenCreateForm);
        coordinator.dispatch(Action::EditDraft(DraftField::Id, draft.id.clone()));
        coordinator.dispatch(Action::EditDraft(DraftField::FirstName, draft.first_name.clone()));
        coordinator.dispatch(Action::EditDraft(DraftField::LastName, draft.last_name.clone()));
        if let Some(sport) = &draft.sport_id {
            coordinator.dispatch(Action::EditDraft(DraftField::Sport, sport.clone()));
        }
        settle(coordinator, Action::Submit, gateway).await
    }

    #[tokio::test]
    async fn load_populates_players_and_vocabularies() {
        let gateway = FakeGateway::with_players(league());
        let coordinator = started(&gateway).await;
        let state = coordinator.state();
        assert_eq!(state.players.len(), 4);
        assert_eq!(state.filtered, state.players);
        assert_eq!(state.sports, vec!["NFL".to_string(), "NBA".to_string()]);
        assert_eq!(
            state.positions,
            vec!["Quarterback".to_string(), "Center".to_string(), "Kicker".to_string()]
        );
        assert_eq!(state.teams.len(), 3);
    }

    #[tokio::test]
    async fn unconstrained_filter_returns_the_full_collection() {
        let gateway = FakeGateway::with_players(league());
        let mut coordinator = started(&gateway).await;
        let issued = settle(&mut coordinator, Action::ApplyFilter, &gateway).await;
        assert_eq!(issued.len(), 1);
        assert_eq!(coordinator.state().filtered, coordinator.state().players);
    }

    #[tokio::test]
    async fn dimensions_are_combined() {
        let gateway = FakeGateway::with_players(league());
        let mut coordinator = started(&gateway).await;
        coordinator.dispatch(Action::Select(
            FilterDimension::Sport,
            FilterValue::Exact("NBA".into()),
        ));
        coordinator.dispatch(Action::Select(
            FilterDimension::Team,
            FilterValue::Exact("BOS".into()),
        ));
        settle(&mut coordinator, Action::ApplyFilter, &gateway).await;
        let ids: Vec<&str> = coordinator
            .state()
            .filtered
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["3"]);
    }

    #[tokio::test]
    async fn created_player_appears_exactly_once_after_refetch() {
        let gateway = FakeGateway::with_players(league());
        let mut coordinator = started(&gateway).await;
        let draft = PlayerEntry {
            id: "p1".into(),
            first_name: "A".into(),
            last_name: "B".into(),
            sport_id: Some("MLS".into()),
            ..PlayerEntry::default()
        };
        let issued = create(&mut coordinator, &gateway, draft).await;
        assert_eq!(issued[0], Effect::CreatePlayer(PlayerEntry {
            id: "p1".into(),
            first_name: "A".into(),
            last_name: "B".into(),
            sport_id: Some("MLS".into()),
            ..PlayerEntry::default()
        }));
        assert_eq!(&issued[1..], Effect::reload().as_slice());
        let state = coordinator.state();
        assert_eq!(state.players.iter().filter(|p| p.id == "p1").count(), 1);
        assert_eq!(state.filtered.len(), 5);
        assert!(state.sports.contains(&"MLS".to_string()));
        assert!(!state.form_open);
        assert_eq!(state.notice, Some(Notice::Info("player created".into())));
    }

    #[tokio::test]
    async fn delete_after_confirmation_removes_only_that_player() {
        let gateway = FakeGateway::with_players(league());
        let mut coordinator = started(&gateway).await;
        coordinator.dispatch(Action::RequestDelete("3".into()));
        settle(&mut coordinator, Action::ConfirmDelete, &gateway).await;
        let ids: Vec<&str> = coordinator
            .state()
            .players
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2", "4"]);
    }

    #[tokio::test]
    async fn cancelled_delete_issues_no_request() {
        let gateway = FakeGateway::with_players(league());
        let mut coordinator = started(&gateway).await;
        let calls_before = gateway.calls().len();
        coordinator.dispatch(Action::RequestDelete("3".into()));
        let issued = settle(&mut coordinator, Action::CancelDelete, &gateway).await;
        assert!(issued.is_empty());
        assert_eq!(gateway.calls().len(), calls_before);
        assert_eq!(gateway.snapshot().len(), 4);
    }

    #[tokio::test]
    async fn edit_then_cancel_never_touches_the_network() {
        let gateway = FakeGateway::with_players(league());
        let mut coordinator = started(&gateway).await;
        let calls_before = gateway.calls().len();
        let before = coordinator.state().clone();
        settle(&mut coordinator, Action::BeginEdit(jo_do()), &gateway).await;
        settle(&mut coordinator, Action::CancelForm, &gateway).await;
        assert_eq!(gateway.calls().len(), calls_before);
        assert_eq!(coordinator.state().players, before.players);
        assert_eq!(coordinator.state().filtered, before.filtered);
    }

    #[tokio::test]
    async fn update_round_trip_replaces_the_record() {
        let gateway = FakeGateway::with_players(league());
        let mut coordinator = started(&gateway).await;
        coordinator.dispatch(Action::BeginEdit(jo_do()));
        coordinator.dispatch(Action::EditDraft(DraftField::Team, "BUF".into()));
        settle(&mut coordinator, Action::Submit, &gateway).await;
        let state = coordinator.state();
        let updated = state
            .players
            .iter()
            .find(|p| p.id == "1")
            .expect("expected player 1");
        assert_eq!(updated.team_label(), "BUF");
        assert_eq!(updated.position_label(), "Quarterback");
        assert!(!state.form_open);
    }

    #[tokio::test]
    async fn update_of_a_vanished_player_reports_not_found() {
        let gateway = FakeGateway::with_players(league());
        let mut coordinator = started(&gateway).await;
        gateway.players.lock().unwrap().retain(|p| p.id != "1");
        coordinator.dispatch(Action::BeginEdit(jo_do()));
        let issued = settle(&mut coordinator, Action::Submit, &gateway).await;
        assert_eq!(issued.len(), 1);
        let state = coordinator.state();
        assert!(state.form_open);
        assert!(matches!(&state.notice, Some(Notice::Error(m)) if m.contains("Player not found")));
    }

    #[tokio::test]
    async fn outage_during_create_is_surfaced_and_recoverable() {
        let gateway = FakeGateway::with_players(league());
        let mut coordinator = started(&gateway).await;
        gateway.fail_with(GatewayError::Transport("connection reset".into()));
        let draft = PlayerEntry {
            id: "p9".into(),
            ..PlayerEntry::default()
        };
        let issued = create(&mut coordinator, &gateway, draft).await;
        assert_eq!(issued.len(), 1);
        assert!(coordinator.state().form_open);
        assert!(matches!(coordinator.state().notice, Some(Notice::Error(_))));

        gateway.recover();
        coordinator.dispatch(Action::DismissNotice);
        settle(&mut coordinator, Action::Submit, &gateway).await;
        assert!(coordinator.state().players.iter().any(|p| p.id == "p9"));
        assert!(!coordinator.state().form_open);
    }

    #[tokio::test]
    async fn end_to_end_empty_filter_result() {
        let gateway = FakeGateway::with_players(vec![jo_do()]);
        let mut coordinator = Coordinator::new();
        assert!(coordinator.state().players.is_empty());
        settle(&mut coordinator, Action::LoadAll, &gateway).await;
        assert_eq!(coordinator.state().filtered, vec![jo_do()]);
        coordinator.dispatch(Action::Select(
            FilterDimension::Sport,
            FilterValue::Exact("NBA".into()),
        ));
        *gateway.filtered_override.lock().unwrap() = Some(vec![]);
        settle(&mut coordinator, Action::ApplyFilter, &gateway).await;
        assert!(coordinator.state().filtered.is_empty());
        assert_eq!(coordinator.state().players, vec![jo_do()]);
    }
}
