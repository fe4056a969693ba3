use crate::{
    coordinator::{action::Action, state::RosterState},
    localization::current_labels,
    screens::{
        components::{navigation_footer::NavigationFooter, text_box::TextBox},
        screen::{get_keybinding_actions, AppAction, Renderable, Screen},
    },
    shapes::{draft::DraftField, enums::ScreenActionEnum, keybinding::KeyBindings},
};
use crokey::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders},
    Frame,
};

fn validate_player_id(_current: &str, c: char) -> bool {
    !c.is_whitespace() && c != '/'
}

#[derive(Debug)]
pub struct PlayerFormScreen {
    fields: Vec<(DraftField, TextBox)>,
    field: usize,
    footer: NavigationFooter,
    keybindings: KeyBindings,
}

impl Renderable for PlayerFormScreen {
    fn render(
        &mut self,
        f: &mut Frame,
        state: &RosterState,
        body: Rect,
        footer_left: Rect,
        _footer_right: Rect,
    ) {
        self.sync_disabled(state);
        let mut constraints = vec![Constraint::Length(2); self.fields.len()];
        constraints.push(Constraint::Min(0));
        let area = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints(constraints)
            .split(body);
        self.render_header(f, state, body);
        for (i, (field, text_box)) in self.fields.iter().enumerate() {
            text_box.render(f, area[i], state.draft.get(*field));
        }
        let footer_entries = get_keybinding_actions(&self.keybindings, &self.screen_actions(state));
        self.footer.render(f, footer_left, footer_entries);
    }
}

impl Screen for PlayerFormScreen {
    fn screen_actions(&self, _state: &RosterState) -> Vec<ScreenActionEnum> {
        vec![
            ScreenActionEnum::Next,
            ScreenActionEnum::Previous,
            ScreenActionEnum::Confirm,
            ScreenActionEnum::Back,
        ]
    }

    fn handle_key(
        &mut self,
        action: Option<ScreenActionEnum>,
        key: KeyEvent,
        state: &RosterState,
    ) -> AppAction {
        self.sync_disabled(state);
        match (action, key.code) {
            (Some(ScreenActionEnum::Next), _) => {
                self.move_focus(state, true);
                AppAction::None
            }
            (Some(ScreenActionEnum::Previous), _) => {
                self.move_focus(state, false);
                AppAction::None
            }
            (Some(ScreenActionEnum::Confirm), _) => AppAction::Dispatch(Action::Submit),
            (Some(ScreenActionEnum::Back), _) => AppAction::Dispatch(Action::CancelForm),
            (None, KeyCode::Char(c)) => {
                let field = self.focused_field();
                match self.fields[self.field].1.handle_char(state.draft.get(field), c) {
                    Some(value) => AppAction::Dispatch(Action::EditDraft(field, value)),
                    None => AppAction::None,
                }
            }
            (None, KeyCode::Backspace) => {
                let field = self.focused_field();
                match self.fields[self.field].1.handle_backspace(state.draft.get(field)) {
                    Some(value) => AppAction::Dispatch(Action::EditDraft(field, value)),
                    None => AppAction::None,
                }
            }
            _ => AppAction::None,
        }
    }
}

impl PlayerFormScreen {
    pub fn new(keybindings: KeyBindings) -> Self {
        let labels = current_labels();
        let fields = DraftField::ALL
            .iter()
            .map(|field| {
                let text_box = match field {
                    DraftField::Id => TextBox::with_validator(
                        labels.player_id.to_string(),
                        true,
                        validate_player_id,
                    ),
                    DraftField::FirstName => TextBox::new(labels.first_name.to_string(), false),
                    DraftField::LastName => TextBox::new(labels.last_name.to_string(), false),
                    DraftField::Sport => TextBox::new(labels.sport_league.to_string(), false),
                    DraftField::Team => TextBox::new(labels.team_id.to_string(), false),
                    DraftField::PositionId => TextBox::new(labels.position_id.to_string(), false),
                    DraftField::PositionDisplayName => {
                        TextBox::new(labels.position_display_name.to_string(), false)
                    }
                };
                (*field, text_box)
            })
            .collect();
        PlayerFormScreen {
            fields,
            field: 0,
            footer: NavigationFooter::new(),
            keybindings,
        }
    }

    /// Focus the first editable box; called whenever the form is opened.
    pub fn reset(&mut self, state: &RosterState) {
        self.sync_disabled(state);
        let first = self
            .fields
            .iter()
            .position(|(_, tb)| !tb.disabled)
            .unwrap_or(0);
        self.set_focus(first);
    }

    pub fn focused_field(&self) -> DraftField {
        self.fields[self.field].0
    }

    // the id box is read-only while editing an existing player
    fn sync_disabled(&mut self, state: &RosterState) {
        let editing = state.is_editing();
        for (field, text_box) in self.fields.iter_mut() {
            text_box.disabled = *field == DraftField::Id && editing;
        }
    }

    fn move_focus(&mut self, state: &RosterState, forward: bool) {
        self.sync_disabled(state);
        let count = self.fields.len();
        let mut next = self.field;
        for _ in 0..count {
            next = if forward {
                (next + 1) % count
            } else {
                (next + count - 1) % count
            };
            if !self.fields[next].1.disabled {
                break;
            }
        }
        self.set_focus(next);
    }

    fn set_focus(&mut self, index: usize) {
        self.field = index;
        for (i, (_, text_box)) in self.fields.iter_mut().enumerate() {
            text_box.writing_mode = i == index;
        }
    }

    fn render_header(&self, f: &mut Frame, state: &RosterState, area: Rect) {
        let labels = current_labels();
        let title = if state.is_editing() {
            format!("{} ({} = {})", labels.edit_player, labels.confirm, labels.update_player)
        } else {
            format!("{} ({} = {})", labels.new_player, labels.confirm, labels.create_player)
        };
        let block = Block::default().borders(Borders::ALL).title(title);
        f.render_widget(block, area);
    }
}
