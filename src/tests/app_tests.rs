#[cfg(test)]
mod tests {
    use crate::{
        app::App,
        coordinator::{action::Action, runner::EffectRunner, state::Notice},
        errors::GatewayError,
        shapes::{draft::DraftField, settings::Settings},
        tests::fake_gateway::fake::{player, FakeGateway},
    };
    use crokey::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::{sync::Arc, time::Duration};
    use tokio::{
        sync::mpsc::{unbounded_channel, UnboundedReceiver},
        time::timeout,
    };

    type TestApp = App<FakeGateway, FakeGateway>;

    fn started() -> (TestApp, UnboundedReceiver<Action>, Arc<FakeGateway>) {
        let gateway = Arc::new(FakeGateway::with_players(vec![
            player("1", "Jo", "Do", "NFL", "NYX", "Quarterback"),
            player("2", "Al", "Bo", "NBA", "LAL", "Center"),
        ]));
        let (tx, rx) = unbounded_channel();
        let runner = EffectRunner::new(Arc::clone(&gateway), Arc::clone(&gateway), tx);
        let mut app = App::new(Settings::default(), runner);
        app.dispatch(Action::LoadAll);
        (app, rx, gateway)
    }

    // applies completions until the runner goes quiet
    async fn pump(app: &mut TestApp, rx: &mut UnboundedReceiver<Action>) {
        while let Ok(Some(action)) = timeout(Duration::from_millis(200), rx.recv()).await {
            app.dispatch(action);
        }
    }

    fn press(app: &mut TestApp, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut TestApp, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[tokio::test]
    async fn startup_loads_everything() {
        let (mut app, mut rx, gateway) = started();
        pump(&mut app, &mut rx).await;
        assert_eq!(app.state().players.len(), 2);
        assert_eq!(app.state().filtered.len(), 2);
        assert_eq!(app.state().teams.len(), 2);
        assert_eq!(gateway.calls().len(), 4);
    }

    #[tokio::test]
    async fn create_from_the_keyboard() {
        let (mut app, mut rx, gateway) = started();
        pump(&mut app, &mut rx).await;

        press(&mut app, KeyCode::Char('n'));
        assert!(app.state().form_open);
        type_text(&mut app, "p 1/");
        assert_eq!(app.state().draft.get(DraftField::Id), "p1");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "ann");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.state().draft.get(DraftField::FirstName), "an");

        press(&mut app, KeyCode::Enter);
        pump(&mut app, &mut rx).await;
        assert!(!app.state().form_open);
        assert!(matches!(app.state().notice, Some(Notice::Info(_))));
        assert!(gateway.snapshot().iter().any(|p| p.id == "p1" && p.first_name == "an"));
        assert_eq!(app.state().players.len(), 3);

        // the next key dismisses the banner and still does its job
        press(&mut app, KeyCode::Char('n'));
        assert!(app.state().notice.is_none());
        assert!(app.state().form_open);
    }

    #[tokio::test]
    async fn a_notice_landing_mid_typing_keeps_every_character() {
        let (mut app, mut rx, _) = started();
        pump(&mut app, &mut rx).await;

        press(&mut app, KeyCode::Char('n'));
        app.dispatch(Action::TeamsLoaded(Err(GatewayError::Transport(
            "connection reset".into(),
        ))));
        assert!(matches!(app.state().notice, Some(Notice::Error(_))));
        type_text(&mut app, "p7");
        assert!(app.state().notice.is_none());
        assert_eq!(app.state().draft.get(DraftField::Id), "p7");
    }

    #[tokio::test]
    async fn delete_requires_confirmation() {
        let (mut app, mut rx, gateway) = started();
        pump(&mut app, &mut rx).await;

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.state().pending_delete.as_deref(), Some("1"));
        press(&mut app, KeyCode::Esc);
        assert!(app.state().pending_delete.is_none());
        pump(&mut app, &mut rx).await;
        assert_eq!(gateway.snapshot().len(), 2);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Enter);
        pump(&mut app, &mut rx).await;
        let ids: Vec<String> = app.state().players.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids, vec!["2".to_string()]);
    }

    #[tokio::test]
    async fn edit_keeps_the_id_and_cancel_is_local() {
        let (mut app, mut rx, gateway) = started();
        pump(&mut app, &mut rx).await;
        let calls = gateway.calls().len();

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.state().edit_target.as_deref(), Some("1"));
        type_text(&mut app, "x");
        assert_eq!(app.state().draft.get(DraftField::Id), "1");
        assert_eq!(app.state().draft.get(DraftField::FirstName), "Jox");

        press(&mut app, KeyCode::Esc);
        pump(&mut app, &mut rx).await;
        assert!(!app.state().form_open);
        assert_eq!(gateway.calls().len(), calls);
        assert_eq!(app.state().players[0].first_name, "Jo");
    }

    #[tokio::test]
    async fn filter_keys_drive_a_filtered_read() {
        let (mut app, mut rx, _) = started();
        pump(&mut app, &mut rx).await;

        // sport is focused first; right moves from "all" to the first sport
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('f'));
        pump(&mut app, &mut rx).await;
        let ids: Vec<&str> = app.state().filtered.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.state().filtered.len(), 2);
        assert!(app.state().selection.is_unconstrained());
    }

    #[tokio::test]
    async fn q_quits() {
        let (mut app, mut rx, _) = started();
        pump(&mut app, &mut rx).await;
        assert!(press(&mut app, KeyCode::Char('q')));
    }
}
