pub mod draft;
pub mod enums;
pub mod filter;
pub mod keybinding;
pub mod player;
pub mod settings;
