pub mod components;
pub mod player_form_screen;
pub mod roster_screen;
pub mod screen;
