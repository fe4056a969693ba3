use crate::constants::ALL_SENTINEL;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One dimension of a filter: either unconstrained or an exact match.
///
/// On the wire the unconstrained case is the string `"all"`, so a vocabulary
/// value that is literally `"all"` cannot be selected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FilterValue {
    #[default]
    All,
    Exact(String),
}

impl FilterValue {
    pub fn is_all(&self) -> bool {
        matches!(self, FilterValue::All)
    }

    pub fn as_wire(&self) -> &str {
        match self {
            FilterValue::All => ALL_SENTINEL,
            FilterValue::Exact(v) => v,
        }
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        if s == ALL_SENTINEL {
            FilterValue::All
        } else {
            FilterValue::Exact(s.to_string())
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_wire())
    }
}

impl Serialize for FilterValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for FilterValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(FilterValue::from(s.as_str()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterDimension {
    Sport,
    Position,
    Team,
}

impl FilterDimension {
    pub const ALL: [FilterDimension; 3] = [
        FilterDimension::Sport,
        FilterDimension::Position,
        FilterDimension::Team,
    ];
}

/// The (sport, position, team) triple sent to the filtered-read operation.
/// Dimensions are AND-ed by the service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterSelection {
    pub position: FilterValue,
    pub team: FilterValue,
    pub sport: FilterValue,
}

impl FilterSelection {
    pub fn get(&self, dimension: FilterDimension) -> &FilterValue {
        match dimension {
            FilterDimension::Sport => &self.sport,
            FilterDimension::Position => &self.position,
            FilterDimension::Team => &self.team,
        }
    }

    pub fn set(&mut self, dimension: FilterDimension, value: FilterValue) {
        match dimension {
            FilterDimension::Sport => self.sport = value,
            FilterDimension::Position => self.position = value,
            FilterDimension::Team => self.team = value,
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.sport.is_all() && self.position.is_all() && self.team.is_all()
    }
}
