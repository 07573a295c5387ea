//! Small hand-built dataset shared by unit tests.
//!
//! G1  14.3  LCK 2024 Spring  T1 (B) vs GEN (R)  30:00  GEN wins
//! G2  14.4  LCK 2024 Spring  GEN (B) vs T1 (R)  40:00  T1 wins
//! G3  14.4  LCK 2024 Summer  DK (B) vs KT (R)   25:00  DK wins
//!
//! Players are named `<team>-<role>` in lowercase, e.g. `t1-mid`.

use chrono::NaiveDate;

use crate::models::{
    BaronEvent, DraftRecord, DrakeEvent, DrakeKind, EndGameStat, FirstBloodEvent, HeraldEvent,
    Lane, Lineup, Match, MatchId, PlateEvent, Player, Role, RoleSlots, Side, Team, TimeSnapshot,
    TowerEvent,
};
use crate::storage::{DatasetTables, MatchDataset};

pub fn roster(team: &str) -> RoleSlots<String> {
    let prefix = team.to_lowercase();
    RoleSlots {
        top: format!("{prefix}-top"),
        jgl: format!("{prefix}-jgl"),
        mid: format!("{prefix}-mid"),
        bot: format!("{prefix}-bot"),
        sup: format!("{prefix}-sup"),
    }
}

pub fn game(id: &str, patch: &str, competition: &str, blue: &str, red: &str, secs: u32) -> Match {
    Match {
        id: MatchId::from(id),
        patch: patch.to_string(),
        competition: competition.to_string(),
        date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        duration_secs: secs,
        blue_team: blue.to_string(),
        red_team: red.to_string(),
        winner: blue.to_string(),
        lineup: Lineup {
            blue: roster(blue),
            red: roster(red),
        },
    }
}

fn champions(names: [&str; 5]) -> [String; 5] {
    names.map(str::to_string)
}

pub fn draft(match_id: &str, side: Side, team: &str, bans: [&str; 5], picks: [&str; 5]) -> DraftRecord {
    DraftRecord {
        match_id: MatchId::from(match_id),
        side,
        team: team.to_string(),
        bans: champions(bans),
        picks: champions(picks),
        roles: RoleSlots {
            top: picks[0].to_string(),
            jgl: picks[1].to_string(),
            mid: picks[2].to_string(),
            bot: picks[3].to_string(),
            sup: picks[4].to_string(),
        },
    }
}

#[allow(clippy::too_many_arguments)]
pub fn end_game(
    match_id: &str,
    team: &str,
    side: Side,
    role: Role,
    kda: (u32, u32, u32),
    gold: f64,
    minions: u32,
    vision_score: u32,
    damage: f64,
) -> EndGameStat {
    EndGameStat {
        match_id: MatchId::from(match_id),
        player: format!("{}-{}", team.to_lowercase(), role.code()),
        team: team.to_string(),
        role,
        side,
        kills: kda.0,
        deaths: kda.1,
        assists: kda.2,
        gold,
        minions,
        wards_placed: 10,
        wards_killed: 4,
        vision_score,
        damage_to_champions: damage,
        damage_to_towers: 1000.0,
    }
}

#[allow(clippy::too_many_arguments)]
pub fn snapshot(
    match_id: &str,
    team: &str,
    side: Side,
    role: Role,
    champion: &str,
    minute: u32,
    gold: f64,
    exp: f64,
) -> TimeSnapshot {
    TimeSnapshot::new(
        MatchId::from(match_id),
        format!("{}-{}", team.to_lowercase(), role.code()),
        team.to_string(),
        side,
        role,
        champion.to_string(),
        minute,
    )
    .with_resources(gold, exp)
    .with_score(1, 0, 1, minute * 8)
}

/// Link two snapshots as lane opponents of each other.
pub fn link(a: TimeSnapshot, b: TimeSnapshot) -> (TimeSnapshot, TimeSnapshot) {
    let a_id = a.id.clone();
    let b_id = b.id.clone();
    (a.with_opponent(b_id), b.with_opponent(a_id))
}

pub fn drake(match_id: &str, team: &str, side: Side, kind: DrakeKind, first: bool, secs: u32) -> DrakeEvent {
    DrakeEvent {
        match_id: MatchId::from(match_id),
        team: team.to_string(),
        side,
        kind,
        first,
        time_secs: secs,
    }
}

pub fn herald(match_id: &str, team: &str, side: Side, first: bool, secs: u32) -> HeraldEvent {
    HeraldEvent {
        match_id: MatchId::from(match_id),
        team: team.to_string(),
        side,
        first,
        time_secs: secs,
    }
}

pub fn baron(match_id: &str, team: &str, side: Side, first: bool, secs: u32) -> BaronEvent {
    BaronEvent {
        match_id: MatchId::from(match_id),
        team: team.to_string(),
        side,
        first,
        time_secs: secs,
    }
}

pub fn first_blood(match_id: &str, team: &str, side: Side, secs: u32) -> FirstBloodEvent {
    FirstBloodEvent {
        match_id: MatchId::from(match_id),
        team: team.to_string(),
        side,
        killer: format!("{}-jgl", team.to_lowercase()),
        assistants: vec![format!("{}-mid", team.to_lowercase())],
        time_secs: secs,
    }
}

pub fn tower(match_id: &str, team: &str, side: Side, lane: Lane, first: bool, secs: u32) -> TowerEvent {
    TowerEvent {
        match_id: MatchId::from(match_id),
        team: team.to_string(),
        side,
        lane,
        killer: format!("{}-{}", team.to_lowercase(), lane),
        assistants: Vec::new(),
        first,
        time_secs: secs,
    }
}

pub fn plate(match_id: &str, team: &str, side: Side, lane: Lane, secs: u32) -> PlateEvent {
    PlateEvent {
        match_id: MatchId::from(match_id),
        team: team.to_string(),
        side,
        lane,
        killer: format!("{}-{}", team.to_lowercase(), lane),
        assistants: Vec::new(),
        time_secs: secs,
    }
}

pub fn tables() -> DatasetTables {
    use Side::{Blue, Red};

    let teams = ["T1", "GEN", "DK", "KT"]
        .iter()
        .map(|code| Team {
            code: code.to_string(),
            competition: "LCK 2024".to_string(),
        })
        .collect();

    let players = ["T1", "GEN"]
        .iter()
        .flat_map(|team| {
            roster(team).iter().map(|(role, name)| Player {
                name: name.clone(),
                code: format!("code-{name}"),
                role: Some(role),
                team: team.to_string(),
            })
            .collect::<Vec<_>>()
        })
        .collect();

    let mut g2 = game("G2", "14.4", "LCK 2024 Spring", "GEN", "T1", 2400);
    g2.winner = "T1".to_string();
    let mut g1 = game("G1", "14.3", "LCK 2024 Spring", "T1", "GEN", 1800);
    g1.winner = "GEN".to_string();
    let matches = vec![g1, g2, game("G3", "14.4", "LCK 2024 Summer", "DK", "KT", 1500)];

    let drafts = vec![
        draft(
            "G1",
            Blue,
            "T1",
            ["Ashe", "Vi", "Taliyah", "Kalista", "Rell"],
            ["Ksante", "Sejuani", "Azir", "Varus", "Rakan"],
        ),
        draft(
            "G1",
            Red,
            "GEN",
            ["Maokai", "Rumble", "Nautilus", "Jax", "Renekton"],
            ["Aatrox", "Wukong", "Orianna", "Xayah", "Alistar"],
        ),
        draft(
            "G2",
            Blue,
            "GEN",
            ["Ashe", "Vi", "Azir", "Lucian", "Nami"],
            ["Ksante", "Maokai", "Taliyah", "Kalista", "Rell"],
        ),
        draft(
            "G2",
            Red,
            "T1",
            ["Ashe", "Rumble", "Nautilus", "Jax", "Renekton"],
            ["Aatrox", "Sejuani", "Orianna", "Varus", "Rakan"],
        ),
        draft(
            "G3",
            Blue,
            "DK",
            ["Vi", "Ashe", "Azir", "Lucian", "Nami"],
            ["Gnar", "Lee Sin", "Ahri", "Ezreal", "Karma"],
        ),
        draft(
            "G3",
            Red,
            "KT",
            ["Ashe", "Rumble", "Nautilus", "Jax", "Renekton"],
            ["Jayce", "Viego", "Syndra", "Aphelios", "Thresh"],
        ),
    ];

    let end_game_stats = vec![
        end_game("G1", "T1", Blue, Role::Mid, (4, 2, 6), 12000.0, 270, 30, 24000.0),
        end_game("G1", "GEN", Red, Role::Mid, (2, 3, 5), 11000.0, 260, 25, 18000.0),
        end_game("G1", "T1", Blue, Role::Top, (1, 4, 2), 10500.0, 250, 20, 15000.0),
        end_game("G2", "T1", Red, Role::Mid, (6, 0, 8), 16000.0, 360, 40, 32000.0),
        end_game("G2", "GEN", Blue, Role::Mid, (1, 5, 2), 13000.0, 320, 36, 20000.0),
    ];

    let (t1_mid_10, gen_mid_10) = link(
        snapshot("G1", "T1", Blue, Role::Mid, "Azir", 10, 3600.0, 4800.0),
        snapshot("G1", "GEN", Red, Role::Mid, "Orianna", 10, 3200.0, 4500.0),
    );
    let snapshots = vec![
        t1_mid_10,
        gen_mid_10,
        snapshot("G1", "T1", Blue, Role::Mid, "Azir", 15, 5600.0, 7600.0),
        snapshot("G1", "T1", Blue, Role::Top, "Ksante", 10, 3100.0, 5000.0),
        snapshot("G2", "T1", Red, Role::Mid, "Orianna", 10, 3900.0, 5000.0),
    ];

    let drakes = vec![
        drake("G1", "T1", Blue, DrakeKind::Infernal, true, 360),
        drake("G1", "T1", Blue, DrakeKind::Ocean, false, 900),
        drake("G1", "GEN", Red, DrakeKind::Cloud, false, 1300),
        drake("G2", "T1", Red, DrakeKind::Mountain, true, 420),
    ];

    let heralds = vec![
        herald("G1", "T1", Blue, true, 840),
        herald("G2", "GEN", Blue, true, 860),
        herald("G2", "T1", Red, false, 1400),
    ];

    let barons = vec![
        baron("G1", "GEN", Red, true, 1500),
        baron("G2", "T1", Red, true, 1560),
        baron("G2", "T1", Red, false, 1980),
    ];

    let first_bloods = vec![
        first_blood("G1", "T1", Blue, 300),
        first_blood("G2", "T1", Red, 500),
        first_blood("G3", "DK", Blue, 200),
    ];

    let towers = vec![
        tower("G1", "T1", Blue, Lane::Top, true, 840),
        tower("G1", "T1", Blue, Lane::Top, false, 1300),
        tower("G1", "GEN", Red, Lane::Bot, true, 900),
        tower("G2", "T1", Red, Lane::Mid, true, 1000),
    ];

    let plates = vec![
        plate("G1", "T1", Blue, Lane::Top, 600),
        plate("G1", "T1", Blue, Lane::Top, 650),
        plate("G1", "T1", Blue, Lane::Top, 700),
        plate("G1", "T1", Blue, Lane::Mid, 720),
        plate("G2", "T1", Red, Lane::Bot, 610),
        plate("G2", "T1", Red, Lane::Bot, 800),
        plate("G2", "GEN", Blue, Lane::Top, 780),
    ];

    DatasetTables {
        teams,
        players,
        matches,
        drafts,
        end_game_stats,
        snapshots,
        drakes,
        heralds,
        barons,
        first_bloods,
        towers,
        plates,
    }
}

pub fn dataset() -> MatchDataset {
    MatchDataset::from_tables(tables())
}
