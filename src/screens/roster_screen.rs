use crate::{
    coordinator::{action::Action, state::RosterState},
    localization::current_labels,
    screens::{
        components::{navigation_footer::NavigationFooter, select::Select},
        screen::{get_keybinding_actions, AppAction, Renderable, Screen},
    },
    shapes::{
        enums::ScreenActionEnum, filter::FilterDimension, keybinding::KeyBindings,
        player::PlayerEntry,
    },
};
use crokey::crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

/// One table row: id, name, sport, team, position.
pub fn player_row(player: &PlayerEntry) -> [String; 5] {
    [
        player.id.clone(),
        player.full_name(),
        player.sport_label().to_string(),
        player.team_label().to_string(),
        player.position_label().to_string(),
    ]
}

pub fn showing_summary(state: &RosterState) -> String {
    current_labels()
        .showing_players
        .replacen("{}", &state.filtered.len().to_string(), 1)
        .replacen("{}", &state.players.len().to_string(), 1)
}

#[derive(Debug)]
pub struct RosterScreen {
    table_state: TableState,
    focused: usize,
    selects: [Select; 3],
    footer: NavigationFooter,
    keybindings: KeyBindings,
}

impl Renderable for RosterScreen {
    fn render(
        &mut self,
        f: &mut Frame,
        state: &RosterState,
        body: Rect,
        footer_left: Rect,
        _footer_right: Rect,
    ) {
        let container = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // filters
                Constraint::Length(1), // summary
                Constraint::Min(1),    // players
            ])
            .split(body);
        self.render_filters(f, state, container[0]);
        f.render_widget(
            Paragraph::new(showing_summary(state)).style(Style::default().add_modifier(Modifier::DIM)),
            container[1],
        );
        if state.filtered.is_empty() {
            self.render_no_players(f, container[2]);
        } else {
            self.render_table(f, state, container[2]);
        }
        let footer_entries = get_keybinding_actions(&self.keybindings, &self.screen_actions(state));
        self.footer.render(f, footer_left, footer_entries);
    }
}

impl Screen for RosterScreen {
    fn screen_actions(&self, state: &RosterState) -> Vec<ScreenActionEnum> {
        let mut actions = vec![
            ScreenActionEnum::Next,
            ScreenActionEnum::Previous,
            ScreenActionEnum::NextValue,
            ScreenActionEnum::PreviousValue,
            ScreenActionEnum::ApplyFilter,
            ScreenActionEnum::ResetFilter,
            ScreenActionEnum::New,
        ];
        if !state.filtered.is_empty() {
            actions.extend([
                ScreenActionEnum::Up,
                ScreenActionEnum::Down,
                ScreenActionEnum::Edit,
                ScreenActionEnum::Delete,
            ]);
        }
        actions.extend([ScreenActionEnum::Reload, ScreenActionEnum::Quit]);
        actions
    }

    fn handle_key(
        &mut self,
        action: Option<ScreenActionEnum>,
        _key: KeyEvent,
        state: &RosterState,
    ) -> AppAction {
        match action {
            Some(ScreenActionEnum::Down) => {
                self.next_player(state);
                AppAction::None
            }
            Some(ScreenActionEnum::Up) => {
                self.previous_player();
                AppAction::None
            }
            Some(ScreenActionEnum::Next) => {
                self.focus((self.focused + 1) % FilterDimension::ALL.len());
                AppAction::None
            }
            Some(ScreenActionEnum::Previous) => {
                let count = FilterDimension::ALL.len();
                self.focus((self.focused + count - 1) % count);
                AppAction::None
            }
            Some(ScreenActionEnum::NextValue) => self.cycle_value(state, true),
            Some(ScreenActionEnum::PreviousValue) => self.cycle_value(state, false),
            Some(ScreenActionEnum::ApplyFilter) => AppAction::Dispatch(Action::ApplyFilter),
            Some(ScreenActionEnum::ResetFilter) => AppAction::Dispatch(Action::ResetFilter),
            Some(ScreenActionEnum::New) => AppAction::Dispatch(Action::OpenCreateForm),
            Some(ScreenActionEnum::Edit) => match self.selected_player(state) {
                Some(player) => AppAction::Dispatch(Action::BeginEdit(player.clone())),
                None => AppAction::None,
            },
            Some(ScreenActionEnum::Delete) => match self.selected_player(state) {
                Some(player) => AppAction::Dispatch(Action::RequestDelete(player.id.clone())),
                None => AppAction::None,
            },
            Some(ScreenActionEnum::Reload) => AppAction::Dispatch(Action::LoadAll),
            Some(ScreenActionEnum::Quit) => AppAction::Quit,
            _ => AppAction::None,
        }
    }
}

impl RosterScreen {
    pub fn new(keybindings: KeyBindings) -> Self {
        let labels = current_labels();
        RosterScreen {
            table_state: TableState::default(),
            focused: 0,
            selects: [
                Select::new(labels.sport.to_string(), labels.all_sports.to_string(), true),
                Select::new(labels.position.to_string(), labels.all_positions.to_string(), false),
                Select::new(labels.team.to_string(), labels.all_teams.to_string(), false),
            ],
            footer: NavigationFooter::new(),
            keybindings,
        }
    }

    pub fn selected_player<'a>(&self, state: &'a RosterState) -> Option<&'a PlayerEntry> {
        self.table_state
            .selected()
            .and_then(|i| state.filtered.get(i))
    }

    fn focus(&mut self, index: usize) {
        self.focused = index;
        for (i, select) in self.selects.iter_mut().enumerate() {
            select.writing_mode = i == index;
        }
    }

    fn cycle_value(&self, state: &RosterState, forward: bool) -> AppAction {
        let dimension = FilterDimension::ALL[self.focused];
        let select = &self.selects[self.focused];
        let current = state.selection.get(dimension);
        let values = state.vocabulary(dimension);
        let value = if forward {
            select.next(current, values)
        } else {
            select.previous(current, values)
        };
        AppAction::Dispatch(Action::Select(dimension, value))
    }

    fn next_player(&mut self, state: &RosterState) {
        if state.filtered.is_empty() {
            return;
        }
        let new_selected = match self.table_state.selected() {
            Some(selected) => (selected + 1).min(state.filtered.len() - 1),
            None => 0,
        };
        self.table_state.select(Some(new_selected));
    }

    fn previous_player(&mut self) {
        if let Some(selected) = self.table_state.selected() {
            self.table_state.select(Some(selected.saturating_sub(1)));
        }
    }

    // keeps the selection inside the rows currently shown
    fn clamp_selection(&mut self, len: usize) {
        match (self.table_state.selected(), len) {
            (_, 0) => self.table_state.select(None),
            (None, _) => self.table_state.select(Some(0)),
            (Some(selected), len) if selected >= len => self.table_state.select(Some(len - 1)),
            _ => {}
        }
    }

    fn render_filters(&self, f: &mut Frame, state: &RosterState, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);
        for (i, dimension) in FilterDimension::ALL.iter().enumerate() {
            self.selects[i].render(f, columns[i], state.selection.get(*dimension));
        }
    }

    fn render_no_players(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(current_labels().player_report);
        let inner = block.inner(area);
        f.render_widget(block, area);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Length(1),
                Constraint::Percentage(40),
            ])
            .split(inner);
        let paragraph = Paragraph::new(current_labels().no_players_found).alignment(Alignment::Center);
        f.render_widget(paragraph, chunks[1]);
    }

    fn render_table(&mut self, f: &mut Frame, state: &RosterState, area: Rect) {
        self.clamp_selection(state.filtered.len());
        let labels = current_labels();
        let rows: Vec<Row> = state
            .filtered
            .iter()
            .map(|p| Row::new(player_row(p).into_iter().map(Cell::from)))
            .collect();
        let widths = [
            Constraint::Length(10),
            Constraint::Min(20),
            Constraint::Length(14),
            Constraint::Length(14),
            Constraint::Length(22),
        ];
        let table = Table::new(rows, widths)
            .header(
                Row::new(vec![labels.id, labels.name, labels.sport, labels.team, labels.position])
                    .style(Style::default().add_modifier(Modifier::BOLD)),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(labels.player_report),
            )
            .row_highlight_style(
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .add_modifier(Modifier::REVERSED),
            )
            .highlight_symbol(">> ");
        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{coordinator::Coordinator, tests::fake_gateway::fake::player};
    use crokey::crossterm::event::{KeyCode, KeyModifiers};

    fn move_rows(screen: &mut RosterScreen, state: &RosterState, action: ScreenActionEnum) {
        let key = KeyEvent::new(KeyCode::Null, KeyModifiers::NONE);
        screen.handle_key(Some(action), key, state);
    }

    #[test]
    fn row_selection_stays_inside_the_view() {
        let mut coordinator = Coordinator::new();
        coordinator.dispatch(Action::PlayersLoaded(Ok(vec![
            player("1", "Jo", "Do", "NFL", "NYX", "Quarterback"),
            player("2", "Al", "Bo", "NBA", "LAL", "Center"),
        ])));
        let state = coordinator.state();
        let mut screen = RosterScreen::new(KeyBindings::default());
        move_rows(&mut screen, state, ScreenActionEnum::Up);
        assert!(screen.selected_player(state).is_none());
        for _ in 0..3 {
            move_rows(&mut screen, state, ScreenActionEnum::Down);
        }
        assert_eq!(screen.selected_player(state).map(|p| p.id.as_str()), Some("2"));
        for _ in 0..3 {
            move_rows(&mut screen, state, ScreenActionEnum::Up);
        }
        assert_eq!(screen.selected_player(state).map(|p| p.id.as_str()), Some("1"));
    }
}
