use crate::{
    coordinator::{
        action::Action, effect::Effect, runner::EffectRunner, state::RosterState, Coordinator,
    },
    localization::current_labels,
    providers::{player_reader::PlayerReader, player_writer::PlayerWriter},
    screens::{
        components::{
            confirm_dialog::ConfirmDialog, navigation_footer::NavigationFooter,
            notify_banner::NotifyBanner,
        },
        player_form_screen::PlayerFormScreen,
        roster_screen::RosterScreen,
        screen::{get_keybinding_actions, AppAction, Renderable, Screen},
    },
    shapes::{enums::ScreenActionEnum, settings::Settings},
};
use crokey::{crossterm::event::KeyEvent, Combiner};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

const DIALOG_ACTIONS: [ScreenActionEnum; 2] = [ScreenActionEnum::Confirm, ScreenActionEnum::Back];

pub struct App<
    R: PlayerReader + Send + Sync + 'static,
    W: PlayerWriter + Send + Sync + 'static,
> {
    coordinator: Coordinator,
    runner: EffectRunner<R, W>,
    settings: Settings,
    combiner: Combiner,
    roster: RosterScreen,
    form: PlayerFormScreen,
    dialog: ConfirmDialog,
    banner: NotifyBanner,
    footer: NavigationFooter,
}

impl<R: PlayerReader + Send + Sync + 'static, W: PlayerWriter + Send + Sync + 'static> App<R, W> {
    pub fn new(settings: Settings, runner: EffectRunner<R, W>) -> Self {
        Self {
            coordinator: Coordinator::new(),
            runner,
            roster: RosterScreen::new(settings.keybindings.clone()),
            form: PlayerFormScreen::new(settings.keybindings.clone()),
            settings,
            combiner: Combiner::default(),
            dialog: ConfirmDialog::new(),
            banner: NotifyBanner::new(),
            footer: NavigationFooter::new(),
        }
    }

    pub fn state(&self) -> &RosterState {
        self.coordinator.state()
    }

    pub fn dispatch(&mut self, action: Action) {
        let opens_form = matches!(action, Action::OpenCreateForm | Action::BeginEdit(_));
        let effects: Vec<Effect> = self.coordinator.dispatch(action);
        if opens_form {
            self.form.reset(self.coordinator.state());
        }
        self.runner.spawn_all(effects);
    }

    /// Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let Some(combination) = self.combiner.transform(key) else {
            return false;
        };
        // any key acknowledges the banner, then goes on to the screen
        if self.coordinator.state().notice.is_some() {
            self.dispatch(Action::DismissNotice);
        }
        let state = self.coordinator.state();
        if state.pending_delete.is_some() {
            let action = self.settings.keybindings.slice(&DIALOG_ACTIONS).get(combination).copied();
            match action {
                Some(ScreenActionEnum::Confirm) => self.dispatch(Action::ConfirmDelete),
                Some(ScreenActionEnum::Back) => self.dispatch(Action::CancelDelete),
                _ => {}
            }
            return false;
        }
        let screen: &mut dyn Screen = if state.form_open {
            &mut self.form
        } else {
            &mut self.roster
        };
        let action = self
            .settings
            .keybindings
            .slice(&screen.screen_actions(state))
            .get(combination)
            .copied();
        match screen.handle_key(action, key, state) {
            AppAction::None => false,
            AppAction::Dispatch(action) => {
                self.dispatch(action);
                false
            }
            AppAction::Quit => true,
        }
    }

    /// The main structure is the following one:
    ///
    /// |----------------------------|
    /// |          header            |
    /// |----------------------------|
    /// |                            |
    /// |           body             |
    /// |                            |
    /// |----------------------------|
    /// | footer_left | footer_right |
    /// |----------------------------|
    pub fn render(&mut self, f: &mut Frame) {
        let container = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(3),
            ])
            .split(f.area());
        let footer = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(container[2]);
        let header = Paragraph::new(format!("🏟 {}", current_labels().app_title))
            .style(Style::default().add_modifier(Modifier::BOLD));
        f.render_widget(header, container[0]);
        let state = self.coordinator.state();
        let (body, footer_left, footer_right) = (container[1], footer[0], footer[1]);
        if state.form_open {
            self.form.render(f, state, body, footer_left, footer_right);
        } else {
            self.roster.render(f, state, body, footer_left, footer_right);
        }
        if let Some(id) = &state.pending_delete {
            self.render_dialog(f, id, body, footer_left);
        }
        self.banner.render(f, footer_right, state.notice.as_ref());
    }

    fn render_dialog(&self, f: &mut Frame, id: &str, body: Rect, footer_left: Rect) {
        let state = self.coordinator.state();
        let subject = state
            .players
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.to_string())
            .unwrap_or_else(|| id.to_string());
        self.dialog.render(
            f,
            body,
            current_labels().delete_player_confirmation,
            &subject,
        );
        f.render_widget(ratatui::widgets::Clear, footer_left);
        let entries = get_keybinding_actions(&self.settings.keybindings, &DIALOG_ACTIONS);
        self.footer.render(f, footer_left, entries);
    }
}
