//! In-memory match dataset and the query boundary the aggregators use.

use std::collections::{HashMap, HashSet};

use thiserror::Error;
use tracing::{info, warn};

use super::{EntityType, JsonlReader, JsonlWriter, StorageConfig, StorageError};
use crate::models::{
    BaronEvent, DraftRecord, DrakeEvent, EndGameStat, FirstBloodEvent, HeraldEvent, Lane, Match,
    MatchId, MatchScoped, PlateEvent, Player, Side, SnapshotId, Team, TimeSnapshot, TowerEvent,
};

/// Read-only access to match records.
///
/// Aggregators only need per-entity record slices plus two lookups;
/// filtering by match and grouping happen on their side.
pub trait MatchStore {
    fn matches(&self) -> &[Match];
    fn find_match(&self, id: &MatchId) -> Option<&Match>;
    fn drafts(&self) -> &[DraftRecord];
    fn end_game_stats(&self) -> &[EndGameStat];
    fn snapshots(&self) -> &[TimeSnapshot];
    fn snapshot(&self, id: &SnapshotId) -> Option<&TimeSnapshot>;
    fn drakes(&self) -> &[DrakeEvent];
    fn heralds(&self) -> &[HeraldEvent];
    fn barons(&self) -> &[BaronEvent];
    fn first_bloods(&self) -> &[FirstBloodEvent];
    fn towers(&self) -> &[TowerEvent];
    fn plates(&self) -> &[PlateEvent];

    /// Resolve a snapshot's lane opponent.
    ///
    /// A reference to a snapshot of another match or minute counts as absent.
    fn opponent_of(&self, snapshot: &TimeSnapshot) -> Option<&TimeSnapshot> {
        let opponent = self.snapshot(snapshot.opponent.as_ref()?)?;
        (opponent.match_id == snapshot.match_id && opponent.minute == snapshot.minute)
            .then_some(opponent)
    }
}

/// Raw record tables, one per entity type.
#[derive(Debug, Clone, Default)]
pub struct DatasetTables {
    pub teams: Vec<Team>,
    pub players: Vec<Player>,
    pub matches: Vec<Match>,
    pub drafts: Vec<DraftRecord>,
    pub end_game_stats: Vec<EndGameStat>,
    pub snapshots: Vec<TimeSnapshot>,
    pub drakes: Vec<DrakeEvent>,
    pub heralds: Vec<HeraldEvent>,
    pub barons: Vec<BaronEvent>,
    pub first_bloods: Vec<FirstBloodEvent>,
    pub towers: Vec<TowerEvent>,
    pub plates: Vec<PlateEvent>,
}

/// A violated dataset invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityIssue {
    #[error("duplicate match id {0}")]
    DuplicateMatch(MatchId),

    #[error("{0} record references unknown match {1}")]
    UnknownMatch(&'static str, MatchId),

    #[error("match {0}: more than one draft for side {1}")]
    DuplicateDraft(MatchId, Side),

    #[error("match {0}: more than one end-game row for player {1}")]
    DuplicateEndGame(MatchId, String),

    #[error("match {0}: more than one snapshot for player {1} at minute {2}")]
    DuplicateSnapshot(MatchId, String, u32),

    #[error("snapshot {0}: opponent does not resolve to a snapshot of the same match and minute")]
    BadOpponent(SnapshotId),

    #[error("match {0}: more than one event flagged as first {1}")]
    MultipleFirst(MatchId, String),
}

/// All match records of a data directory, indexed for lookup.
#[derive(Debug, Clone, Default)]
pub struct MatchDataset {
    tables: DatasetTables,
    match_index: HashMap<MatchId, usize>,
    snapshot_index: HashMap<SnapshotId, usize>,
}

impl MatchDataset {
    /// Build a dataset from in-memory tables.
    pub fn from_tables(tables: DatasetTables) -> Self {
        let mut match_index = HashMap::with_capacity(tables.matches.len());
        for (idx, m) in tables.matches.iter().enumerate() {
            match_index.entry(m.id.clone()).or_insert(idx);
        }

        let mut snapshot_index = HashMap::with_capacity(tables.snapshots.len());
        for (idx, s) in tables.snapshots.iter().enumerate() {
            snapshot_index.entry(s.id.clone()).or_insert(idx);
        }

        Self {
            tables,
            match_index,
            snapshot_index,
        }
    }

    /// Load every entity file from the data directory.
    ///
    /// The match file must exist; the others read as empty when missing.
    pub fn load(config: &StorageConfig) -> Result<Self, StorageError> {
        let tables = DatasetTables {
            teams: JsonlReader::for_entity(config, EntityType::Team).read_all()?,
            players: JsonlReader::for_entity(config, EntityType::Player).read_all()?,
            matches: JsonlReader::for_entity(config, EntityType::Match).read_required()?,
            drafts: JsonlReader::for_entity(config, EntityType::Draft).read_all()?,
            end_game_stats: JsonlReader::for_entity(config, EntityType::EndGameStat).read_all()?,
            snapshots: JsonlReader::for_entity(config, EntityType::TimeSnapshot).read_all()?,
            drakes: JsonlReader::for_entity(config, EntityType::Drake).read_all()?,
            heralds: JsonlReader::for_entity(config, EntityType::Herald).read_all()?,
            barons: JsonlReader::for_entity(config, EntityType::Baron).read_all()?,
            first_bloods: JsonlReader::for_entity(config, EntityType::FirstBlood).read_all()?,
            towers: JsonlReader::for_entity(config, EntityType::Tower).read_all()?,
            plates: JsonlReader::for_entity(config, EntityType::Plate).read_all()?,
        };

        let dataset = Self::from_tables(tables);
        info!(
            "Loaded {} matches ({} teams, {} players) from {:?}",
            dataset.tables.matches.len(),
            dataset.tables.teams.len(),
            dataset.tables.players.len(),
            config.normalized_dir()
        );

        for issue in dataset.integrity_issues() {
            warn!("Dataset integrity: {}", issue);
        }

        Ok(dataset)
    }

    /// Write every table back to the data directory.
    pub fn save(&self, config: &StorageConfig) -> Result<usize, StorageError> {
        let t = &self.tables;
        let mut total = 0;
        total += JsonlWriter::for_entity(config, EntityType::Team).write_all(&t.teams[..])?;
        total += JsonlWriter::for_entity(config, EntityType::Player).write_all(&t.players[..])?;
        total += JsonlWriter::for_entity(config, EntityType::Match).write_all(&t.matches[..])?;
        total += JsonlWriter::for_entity(config, EntityType::Draft).write_all(&t.drafts[..])?;
        total +=
            JsonlWriter::for_entity(config, EntityType::EndGameStat).write_all(&t.end_game_stats[..])?;
        total +=
            JsonlWriter::for_entity(config, EntityType::TimeSnapshot).write_all(&t.snapshots[..])?;
        total += JsonlWriter::for_entity(config, EntityType::Drake).write_all(&t.drakes[..])?;
        total += JsonlWriter::for_entity(config, EntityType::Herald).write_all(&t.heralds[..])?;
        total += JsonlWriter::for_entity(config, EntityType::Baron).write_all(&t.barons[..])?;
        total +=
            JsonlWriter::for_entity(config, EntityType::FirstBlood).write_all(&t.first_bloods[..])?;
        total += JsonlWriter::for_entity(config, EntityType::Tower).write_all(&t.towers[..])?;
        total += JsonlWriter::for_entity(config, EntityType::Plate).write_all(&t.plates[..])?;
        Ok(total)
    }

    pub fn teams(&self) -> &[Team] {
        &self.tables.teams
    }

    pub fn players(&self) -> &[Player] {
        &self.tables.players
    }

    /// Check the uniqueness and reference invariants of the stored records.
    pub fn integrity_issues(&self) -> Vec<IntegrityIssue> {
        let t = &self.tables;
        let mut issues = Vec::new();

        let mut seen = HashSet::new();
        for m in &t.matches {
            if !seen.insert(&m.id) {
                issues.push(IntegrityIssue::DuplicateMatch(m.id.clone()));
            }
        }

        self.check_known_matches("draft", &t.drafts, &mut issues);
        self.check_known_matches("end-game", &t.end_game_stats, &mut issues);
        self.check_known_matches("snapshot", &t.snapshots, &mut issues);
        self.check_known_matches("drake", &t.drakes, &mut issues);
        self.check_known_matches("herald", &t.heralds, &mut issues);
        self.check_known_matches("baron", &t.barons, &mut issues);
        self.check_known_matches("first-blood", &t.first_bloods, &mut issues);
        self.check_known_matches("tower", &t.towers, &mut issues);
        self.check_known_matches("plate", &t.plates, &mut issues);

        let mut seen = HashSet::new();
        for d in &t.drafts {
            if !seen.insert((&d.match_id, d.side)) {
                issues.push(IntegrityIssue::DuplicateDraft(d.match_id.clone(), d.side));
            }
        }

        let mut seen = HashSet::new();
        for s in &t.end_game_stats {
            if !seen.insert((&s.match_id, &s.player)) {
                issues.push(IntegrityIssue::DuplicateEndGame(
                    s.match_id.clone(),
                    s.player.clone(),
                ));
            }
        }

        let mut seen = HashSet::new();
        for s in &t.snapshots {
            if !seen.insert((&s.match_id, &s.player, s.minute)) {
                issues.push(IntegrityIssue::DuplicateSnapshot(
                    s.match_id.clone(),
                    s.player.clone(),
                    s.minute,
                ));
            }
            if s.opponent.is_some() && self.opponent_of(s).is_none() {
                issues.push(IntegrityIssue::BadOpponent(s.id.clone()));
            }
        }

        check_single_first(
            "drake",
            t.drakes.iter().filter(|e| e.first).map(|e| (&e.match_id, None)),
            &mut issues,
        );
        check_single_first(
            "herald",
            t.heralds.iter().filter(|e| e.first).map(|e| (&e.match_id, None)),
            &mut issues,
        );
        check_single_first(
            "baron",
            t.barons.iter().filter(|e| e.first).map(|e| (&e.match_id, None)),
            &mut issues,
        );
        check_single_first(
            "tower",
            t.towers
                .iter()
                .filter(|e| e.first)
                .map(|e| (&e.match_id, Some(e.lane))),
            &mut issues,
        );

        issues
    }

    fn check_known_matches<T: MatchScoped>(
        &self,
        kind: &'static str,
        records: &[T],
        issues: &mut Vec<IntegrityIssue>,
    ) {
        let mut reported = HashSet::new();
        for record in records {
            let id = record.match_id();
            if !self.match_index.contains_key(id) && reported.insert(id) {
                issues.push(IntegrityIssue::UnknownMatch(kind, id.clone()));
            }
        }
    }
}

fn check_single_first<'a>(
    kind: &str,
    firsts: impl Iterator<Item = (&'a MatchId, Option<Lane>)>,
    issues: &mut Vec<IntegrityIssue>,
) {
    let mut seen = HashSet::new();
    for (match_id, lane) in firsts {
        if !seen.insert((match_id, lane)) {
            let label = match lane {
                Some(lane) => format!("{} ({} lane)", kind, lane),
                None => kind.to_string(),
            };
            issues.push(IntegrityIssue::MultipleFirst(match_id.clone(), label));
        }
    }
}

impl MatchStore for MatchDataset {
    fn matches(&self) -> &[Match] {
        &self.tables.matches
    }

    fn find_match(&self, id: &MatchId) -> Option<&Match> {
        self.match_index.get(id).map(|&idx| &self.tables.matches[idx])
    }

    fn drafts(&self) -> &[DraftRecord] {
        &self.tables.drafts
    }

    fn end_game_stats(&self) -> &[EndGameStat] {
        &self.tables.end_game_stats
    }

    fn snapshots(&self) -> &[TimeSnapshot] {
        &self.tables.snapshots
    }

    fn snapshot(&self, id: &SnapshotId) -> Option<&TimeSnapshot> {
        self.snapshot_index
            .get(id)
            .map(|&idx| &self.tables.snapshots[idx])
    }

    fn drakes(&self) -> &[DrakeEvent] {
        &self.tables.drakes
    }

    fn heralds(&self) -> &[HeraldEvent] {
        &self.tables.heralds
    }

    fn barons(&self) -> &[BaronEvent] {
        &self.tables.barons
    }

    fn first_bloods(&self) -> &[FirstBloodEvent] {
        &self.tables.first_bloods
    }

    fn towers(&self) -> &[TowerEvent] {
        &self.tables.towers
    }

    fn plates(&self) -> &[PlateEvent] {
        &self.tables.plates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::models::{DrakeKind, Role};
    use tempfile::TempDir;

    #[test]
    fn test_find_match_and_snapshot() {
        let dataset = fixtures::dataset();
        let id = MatchId::from("G1");
        assert_eq!(dataset.find_match(&id).unwrap().blue_team, "T1");
        assert!(dataset.find_match(&MatchId::from("missing")).is_none());

        let snap = &dataset.snapshots()[0];
        assert_eq!(dataset.snapshot(&snap.id).unwrap().player, snap.player);
    }

    #[test]
    fn test_fixture_dataset_is_consistent() {
        let dataset = fixtures::dataset();
        assert_eq!(dataset.integrity_issues(), Vec::new());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let config = StorageConfig::new(temp_dir.path().to_path_buf());
        let dataset = fixtures::dataset();

        dataset.save(&config).unwrap();
        let loaded = MatchDataset::load(&config).unwrap();

        assert_eq!(loaded.matches().len(), dataset.matches().len());
        assert_eq!(loaded.drafts().len(), dataset.drafts().len());
        assert_eq!(loaded.snapshots().len(), dataset.snapshots().len());
        assert_eq!(loaded.teams().len(), dataset.teams().len());
        assert_eq!(loaded.integrity_issues(), Vec::new());
    }

    #[test]
    fn test_load_requires_match_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = StorageConfig::new(temp_dir.path().to_path_buf());
        assert!(matches!(
            MatchDataset::load(&config),
            Err(StorageError::PathNotFound(_))
        ));
    }

    #[test]
    fn test_integrity_detects_duplicates_and_unknown_match() {
        let mut tables = fixtures::tables();
        tables.drafts.push(tables.drafts[0].clone());
        let mut stray = tables.drakes[0].clone();
        stray.match_id = MatchId::from("ghost");
        tables.drakes.push(stray);
        let mut second_first = tables.drakes[0].clone();
        second_first.kind = DrakeKind::Cloud;
        tables.drakes.push(second_first);

        let issues = MatchDataset::from_tables(tables).integrity_issues();

        assert!(issues.contains(&IntegrityIssue::DuplicateDraft(
            MatchId::from("G1"),
            Side::Blue
        )));
        assert!(issues.contains(&IntegrityIssue::UnknownMatch("drake", MatchId::from("ghost"))));
        assert!(issues
            .iter()
            .any(|i| matches!(i, IntegrityIssue::MultipleFirst(id, _) if id.as_str() == "G1")));
    }

    #[test]
    fn test_opponent_in_other_minute_is_rejected() {
        let mut tables = fixtures::tables();
        let other = TimeSnapshot::new(
            MatchId::from("G1"),
            "gen-mid".to_string(),
            "GEN".to_string(),
            Side::Red,
            Role::Mid,
            "Orianna".to_string(),
            99,
        );
        let linked = TimeSnapshot::new(
            MatchId::from("G1"),
            "t1-mid".to_string(),
            "T1".to_string(),
            Side::Blue,
            Role::Mid,
            "Azir".to_string(),
            20,
        )
        .with_opponent(other.id.clone());
        let linked_id = linked.id.clone();
        tables.snapshots.push(other);
        tables.snapshots.push(linked);

        let dataset = MatchDataset::from_tables(tables);
        let linked = dataset.snapshot(&linked_id).unwrap();

        assert!(dataset.opponent_of(linked).is_none());
        assert!(dataset
            .integrity_issues()
            .contains(&IntegrityIssue::BadOpponent(linked_id)));
    }

    #[test]
    fn test_load_accepts_mixed_case_roles() {
        let temp_dir = TempDir::new().unwrap();
        let config = StorageConfig::new(temp_dir.path().to_path_buf());
        let mut tables = fixtures::tables();
        tables.snapshots.clear();
        MatchDataset::from_tables(tables).save(&config).unwrap();

        let row = r#"{"id":"s-top-10","match_id":"G1","player":"t1-top","team":"T1",
            "side":"Blue","role":"TOP","champion":"Ksante","minute":10,"kills":0,"deaths":0,
            "assists":1,"gold":3100.0,"minions":80,"exp":5000.0}"#;
        std::fs::write(config.entity_path(EntityType::TimeSnapshot), row.replace('\n', "") + "\n")
            .unwrap();

        let dataset = MatchDataset::load(&config).unwrap();
        assert_eq!(dataset.snapshots().len(), 1);
        assert_eq!(dataset.snapshots()[0].role, Role::Top);

        let selection = crate::search::MatchSelection::new([MatchId::from("G1")]);
        let stats = crate::calculate::time_series_stats(
            &dataset,
            &selection,
            crate::search::RoleFilter::Only(Role::Top),
        );
        assert_eq!(stats["T1"][&Side::Blue][&Role::Top]["t1-top"]["Ksante"][&10].samples, 1);
    }
}
