use crate::shapes::player::PlayerEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Id,
    FirstName,
    LastName,
    Sport,
    Team,
    PositionId,
    PositionDisplayName,
}

impl DraftField {
    /// Form order.
    pub const ALL: [DraftField; 7] = [
        DraftField::Id,
        DraftField::FirstName,
        DraftField::LastName,
        DraftField::Sport,
        DraftField::Team,
        DraftField::PositionId,
        DraftField::PositionDisplayName,
    ];
}

/// Staging copy of a player while the form is open.
///
/// Every field is owned, so editing a draft never touches the record it was
/// copied from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerDraft {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub team_id: String,
    pub position_id: String,
    pub position_display_name: String,
    pub sport_id: String,
}

impl PlayerDraft {
    pub fn from_player(player: &PlayerEntry) -> Self {
        Self {
            id: player.id.clone(),
            first_name: player.first_name.clone(),
            last_name: player.last_name.clone(),
            team_id: player.team_id.clone().unwrap_or_default(),
            position_id: player.position_id.clone().unwrap_or_default(),
            position_display_name: player.position_display_name.clone().unwrap_or_default(),
            sport_id: player.sport_id.clone().unwrap_or_default(),
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Id => &self.id,
            DraftField::FirstName => &self.first_name,
            DraftField::LastName => &self.last_name,
            DraftField::Sport => &self.sport_id,
            DraftField::Team => &self.team_id,
            DraftField::PositionId => &self.position_id,
            DraftField::PositionDisplayName => &self.position_display_name,
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Id => self.id = value,
            DraftField::FirstName => self.first_name = value,
            DraftField::LastName => self.last_name = value,
            DraftField::Sport => self.sport_id = value,
            DraftField::Team => self.team_id = value,
            DraftField::PositionId => self.position_id = value,
            DraftField::PositionDisplayName => self.position_display_name = value,
        }
    }

    /// Full payload for create and update. The id is copied as typed;
    /// blank optional fields become `None` so the service stores them as
    /// missing.
    pub fn to_player(&self) -> PlayerEntry {
        PlayerEntry {
            id: self.id.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            team_id: non_blank(&self.team_id),
            position_id: non_blank(&self.position_id),
            position_display_name: non_blank(&self.position_display_name),
            sport_id: non_blank(&self.sport_id),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
