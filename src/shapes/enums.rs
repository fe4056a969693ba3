use crate::localization::current_labels;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every action a key combination can be bound to.
///
/// Serialized in snake case, which is also the key used in the
/// `keybindings` section of the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenActionEnum {
    Quit,
    Back,
    Confirm,
    Up,
    Down,
    Next,
    Previous,
    NextValue,
    PreviousValue,
    ApplyFilter,
    ResetFilter,
    New,
    Edit,
    Delete,
    Reload,
}

impl ScreenActionEnum {
    pub fn with_desc(&self) -> (ScreenActionEnum, String) {
        let labels = current_labels();
        let desc = match self {
            ScreenActionEnum::Quit => labels.quit,
            ScreenActionEnum::Back => labels.back,
            ScreenActionEnum::Confirm => labels.confirm,
            ScreenActionEnum::Up => labels.up,
            ScreenActionEnum::Down => labels.down,
            ScreenActionEnum::Next => labels.next,
            ScreenActionEnum::Previous => labels.previous,
            ScreenActionEnum::NextValue => labels.next_value,
            ScreenActionEnum::PreviousValue => labels.previous_value,
            ScreenActionEnum::ApplyFilter => labels.apply_filter,
            ScreenActionEnum::ResetFilter => labels.reset_filter,
            ScreenActionEnum::New => labels.new_player,
            ScreenActionEnum::Edit => labels.edit,
            ScreenActionEnum::Delete => labels.delete,
            ScreenActionEnum::Reload => labels.reload,
        };
        (*self, desc.to_string())
    }
}

impl fmt::Display for ScreenActionEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.with_desc().1)
    }
}
