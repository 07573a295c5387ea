//! Map sides, player roles and lanes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error for a side, role or lane name that matches no variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownName {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownName {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// One of the two teams in a match.
///
/// Stored and reported as `B`/`R`; parsing also takes `blue`/`red` in any
/// case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Side {
    #[serde(rename = "B")]
    Blue,
    #[serde(rename = "R")]
    Red,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Blue, Side::Red];
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Blue => write!(f, "B"),
            Side::Red => write!(f, "R"),
        }
    }
}

impl FromStr for Side {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "b" | "blue" => Ok(Side::Blue),
            "r" | "red" => Ok(Side::Red),
            _ => Err(UnknownName::new("side", s)),
        }
    }
}

/// Player position.
///
/// Serialized as the short codes `top|jgl|mid|bot|sup`. Deserialization
/// goes through [`FromStr`], so stored data may use any case or alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Role {
    #[serde(rename = "top")]
    Top,
    #[serde(rename = "jgl")]
    Jungle,
    #[serde(rename = "mid")]
    Mid,
    #[serde(rename = "bot")]
    Bot,
    #[serde(rename = "sup")]
    Support,
}

impl Role {
    pub const ALL: [Role; 5] = [Role::Top, Role::Jungle, Role::Mid, Role::Bot, Role::Support];

    /// Short code used in stored data and report keys.
    pub fn code(self) -> &'static str {
        match self {
            Role::Top => "top",
            Role::Jungle => "jgl",
            Role::Mid => "mid",
            Role::Bot => "bot",
            Role::Support => "sup",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Role {
    type Err = UnknownName;

    /// Case-insensitive, accepts both long and short names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Role::Top),
            "jgl" | "jungle" => Ok(Role::Jungle),
            "mid" => Ok(Role::Mid),
            "bot" | "bottom" | "adc" => Ok(Role::Bot),
            "sup" | "support" => Ok(Role::Support),
            _ => Err(UnknownName::new("role", s)),
        }
    }
}

/// Lane where towers and plates stand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", rename_all = "lowercase")]
pub enum Lane {
    Top,
    Mid,
    Bot,
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lane::Top => write!(f, "top"),
            Lane::Mid => write!(f, "mid"),
            Lane::Bot => write!(f, "bot"),
        }
    }
}

impl FromStr for Lane {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Lane::Top),
            "mid" | "middle" => Ok(Lane::Mid),
            "bot" | "bottom" => Ok(Lane::Bot),
            _ => Err(UnknownName::new("lane", s)),
        }
    }
}

macro_rules! try_from_string {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TryFrom<String> for $ty {
                type Error = UnknownName;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    value.parse()
                }
            }
        )*
    };
}

try_from_string!(Side, Role, Lane);

/// One value per role.
///
/// Used for match lineups and draft role assignments, so a (side, role)
/// slot can never be empty or doubly occupied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSlots<T> {
    pub top: T,
    #[serde(alias = "jungle")]
    pub jgl: T,
    pub mid: T,
    pub bot: T,
    #[serde(alias = "support")]
    pub sup: T,
}

impl<T> RoleSlots<T> {
    pub fn get(&self, role: Role) -> &T {
        match role {
            Role::Top => &self.top,
            Role::Jungle => &self.jgl,
            Role::Mid => &self.mid,
            Role::Bot => &self.bot,
            Role::Support => &self.sup,
        }
    }

    /// Iterate in role order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &T)> {
        Role::ALL.into_iter().map(move |role| (role, self.get(role)))
    }
}

impl<T: PartialEq> RoleSlots<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|(_, v)| v == value)
    }
}
