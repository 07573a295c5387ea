//! Pick/ban phase records.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use super::{MatchId, Role, RoleSlots, Side};

/// Position within the five bans or five picks of a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Turn {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
}

impl Turn {
    pub const ALL: [Turn; 5] = [Turn::First, Turn::Second, Turn::Third, Turn::Fourth, Turn::Fifth];

    pub fn index(self) -> usize {
        match self {
            Turn::First => 0,
            Turn::Second => 1,
            Turn::Third => 2,
            Turn::Fourth => 3,
            Turn::Fifth => 4,
        }
    }

    /// 1-based number, as shown in slot names.
    pub fn number(self) -> usize {
        self.index() + 1
    }
}

/// A champion slot in a side's draft.
///
/// Serializes as `ban1`..`ban5`, `pick1`..`pick5`, or the role code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DraftSlot {
    Ban(Turn),
    Pick(Turn),
    Role(Role),
}

impl DraftSlot {
    /// Every slot of a draft, bans first.
    pub fn all() -> impl Iterator<Item = DraftSlot> {
        Turn::ALL
            .into_iter()
            .map(DraftSlot::Ban)
            .chain(Turn::ALL.into_iter().map(DraftSlot::Pick))
            .chain(Role::ALL.into_iter().map(DraftSlot::Role))
    }
}

impl fmt::Display for DraftSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftSlot::Ban(turn) => write!(f, "ban{}", turn.number()),
            DraftSlot::Pick(turn) => write!(f, "pick{}", turn.number()),
            DraftSlot::Role(role) => write!(f, "{}", role),
        }
    }
}

impl Serialize for DraftSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One side's draft in one match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftRecord {
    pub match_id: MatchId,
    pub side: Side,

    /// Team code of the drafting team
    pub team: String,

    /// Bans in order
    pub bans: [String; 5],

    /// Picks in order
    pub picks: [String; 5],

    /// Champion played in each role
    pub roles: RoleSlots<String>,
}

impl DraftRecord {
    pub fn champion(&self, slot: DraftSlot) -> &str {
        match slot {
            DraftSlot::Ban(turn) => &self.bans[turn.index()],
            DraftSlot::Pick(turn) => &self.picks[turn.index()],
            DraftSlot::Role(role) => self.roles.get(role),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_names() {
        assert_eq!(DraftSlot::Ban(Turn::First).to_string(), "ban1");
        assert_eq!(DraftSlot::Pick(Turn::Fifth).to_string(), "pick5");
        assert_eq!(DraftSlot::Role(Role::Support).to_string(), "sup");
    }

    #[test]
    fn test_all_slots_count_and_order() {
        let slots: Vec<_> = DraftSlot::all().collect();
        assert_eq!(slots.len(), 15);
        assert_eq!(slots[0], DraftSlot::Ban(Turn::First));
        assert_eq!(slots[5], DraftSlot::Pick(Turn::First));
        assert_eq!(slots[14], DraftSlot::Role(Role::Support));
    }

    #[test]
    fn test_slot_as_json_map_key() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(DraftSlot::Ban(Turn::Third), 2u32);
        assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"ban3":2}"#);
    }
}
