//! Core data models. All records are read-only facts about completed matches.

mod draft;
mod game;
mod ids;
mod objective;
mod performance;
mod position;

pub use draft::*;
pub use game::*;
pub use ids::*;
pub use objective::*;
pub use performance::*;
pub use position::*;

/// A record that belongs to one match.
pub trait MatchScoped {
    fn match_id(&self) -> &MatchId;
}

macro_rules! impl_match_scoped {
    ($($ty:ty),* $(,)?) => {
        $(
            impl MatchScoped for $ty {
                fn match_id(&self) -> &MatchId {
                    &self.match_id
                }
            }
        )*
    };
}

impl_match_scoped!(
    DraftRecord,
    EndGameStat,
    TimeSnapshot,
    DrakeEvent,
    HeraldEvent,
    BaronEvent,
    FirstBloodEvent,
    TowerEvent,
    PlateEvent,
);

impl MatchScoped for Match {
    fn match_id(&self) -> &MatchId {
        &self.id
    }
}
