use crate::{
    coordinator::{action::Action, state::RosterState},
    shapes::{enums::ScreenActionEnum, keybinding::KeyBindings},
};
use crokey::crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

pub enum AppAction {
    None,
    Dispatch(Action),
    Quit,
}

pub trait Renderable {
    fn render(
        &mut self,
        f: &mut Frame,
        state: &RosterState,
        body: Rect,
        footer_left: Rect,
        footer_right: Rect,
    );
}

/// A view over the roster state. Screens never mutate the state directly;
/// they translate keys into coordinator actions.
pub trait Screen: Renderable {
    /// Actions whose key bindings are live on this screen.
    fn screen_actions(&self, state: &RosterState) -> Vec<ScreenActionEnum>;

    /// `action` is the bound action for `key`, if any.
    fn handle_key(
        &mut self,
        action: Option<ScreenActionEnum>,
        key: KeyEvent,
        state: &RosterState,
    ) -> AppAction;
}

pub fn get_keybinding_actions(
    kb: &KeyBindings,
    actions: &[ScreenActionEnum],
) -> Vec<(String, String)> {
    actions
        .iter()
        .filter_map(|action| kb.shortest_key_for(action))
        .map(|(ck, desc)| (ck.to_string(), desc))
        .collect()
}
