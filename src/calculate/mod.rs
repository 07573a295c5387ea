//! Statistics calculation engine.
//!
//! Aggregates the records of a match selection, grouped by team and side:
//! - Draft pick/ban frequencies per slot
//! - End-game per-player averages and per-minute rates
//! - Timeline averages per minute mark, with lane differentials
//! - Neutral objectives (drakes, heralds, barons)
//! - First blood, towers and turret plates
//!
//! [`report::assemble`] runs them all and packs the results into a
//! [`Report`].

pub mod draft;
pub mod end_game;
pub mod first_blood;
pub mod grouping;
pub mod neutral;
pub mod plates;
pub mod report;
pub mod time_series;
pub mod towers;

pub use draft::{draft_stats, DraftStats};
pub use end_game::{end_game_stats, EndGameStats, PlayerAverages};
pub use first_blood::{first_blood_stats, FirstBloodSummary};
pub use grouping::TeamSideMap;
pub use neutral::{baron_stats, drake_stats, herald_stats, DrakeSummary, ObjectiveSummary};
pub use plates::{plate_stats, LanePlates, PlateSummary};
pub use report::{assemble, run_search, Report};
pub use time_series::{time_series_stats, BucketAverages, TimeSeriesStats};
pub use towers::{tower_stats, TowerSummary};
