//! Player roster accumulated from matched team responses

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::{debug, info};

use crate::data_fetcher::models::{FetchEnvelope, PlayerRecord};

pub mod render;
pub mod watch_list;

pub use render::{render_report, write_report};
pub use watch_list::{WatchList, find_and_remove, remove_element};

/// Age and team memberships collected for one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerInfo {
    /// Age from the first sighting; later values are ignored.
    pub age: String,
    /// Teams in the order the player was seen on them.
    pub teams: Vec<String>,
}

/// Distinct player names in sighting order plus their collected info.
///
/// Every name in the index has exactly one info entry and vice versa.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    names: Vec<String>,
    infos: HashMap<String, PlayerInfo>,
}

/// Why a decoded envelope left the roster untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The API status was something other than `ok`.
    StatusNotOk(String),
    /// The team is not (or no longer) on the watch-list.
    NotWatched(String),
}

/// Result of folding one envelope into the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AggregateOutcome {
    Ignored(IgnoreReason),
    Merged {
        team: String,
        new_players: usize,
        updated_players: usize,
    },
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Player names in first-sighting order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn info(&self, name: &str) -> Option<&PlayerInfo> {
        self.infos.get(name)
    }

    /// Inserts a new player or appends `team` to a known one.
    /// Returns `true` when the player was seen for the first time.
    pub fn record_player(&mut self, player: &PlayerRecord, team: &str) -> bool {
        match self.infos.entry(player.name.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(PlayerInfo {
                    age: player.age.clone(),
                    teams: vec![team.to_string()],
                });
                self.names.push(player.name.clone());
                true
            }
            Entry::Occupied(mut slot) => {
                slot.get_mut().teams.push(team.to_string());
                false
            }
        }
    }

    /// Entries ordered by exact byte-wise comparison of player names.
    pub fn sorted_entries(&self) -> Vec<(&str, &PlayerInfo)> {
        let mut names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
            .into_iter()
            .filter_map(|name| self.infos.get(name).map(|info| (name, info)))
            .collect()
    }
}

/// Folds one decoded envelope into the roster.
///
/// Nothing changes unless the status is `ok` and the team is still on the
/// watch-list. A matched team is removed from the watch-list before its
/// players are merged, so a repeated response for it is ignored.
pub fn aggregate(
    envelope: &FetchEnvelope,
    watch_list: &mut WatchList,
    roster: &mut Roster,
) -> AggregateOutcome {
    if !envelope.is_ok() {
        debug!("Ignoring response with status '{}'", envelope.status);
        return AggregateOutcome::Ignored(IgnoreReason::StatusNotOk(envelope.status.clone()));
    }

    let team = envelope.team();
    if !watch_list.take(&team.name) {
        debug!("Team '{}' is not on the watch-list", team.name);
        return AggregateOutcome::Ignored(IgnoreReason::NotWatched(team.name.clone()));
    }

    let mut new_players = 0;
    let mut updated_players = 0;
    for player in &team.players {
        if roster.record_player(player, &team.name) {
            new_players += 1;
        } else {
            updated_players += 1;
        }
    }

    info!(
        "Collected team '{}': {} new players, {} already known, {} teams pending",
        team.name,
        new_players,
        updated_players,
        watch_list.len()
    );

    AggregateOutcome::Merged {
        team: team.name.clone(),
        new_players,
        updated_players,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::{EnvelopeData, TeamRecord};

    fn envelope(status: &str, team: &str, players: &[(&str, &str)]) -> FetchEnvelope {
        FetchEnvelope {
            status: status.to_string(),
            data: EnvelopeData {
                team: TeamRecord {
                    is_national: false,
                    name: team.to_string(),
                    players: players
                        .iter()
                        .map(|(name, age)| PlayerRecord::new(*name, *age))
                        .collect(),
                },
            },
        }
    }

    #[test]
    fn test_matched_team_is_merged_and_removed() {
        let mut watch_list = WatchList::new(["Chelsea"]);
        let mut roster = Roster::new();

        let outcome = aggregate(
            &envelope("ok", "Chelsea", &[("A", "20")]),
            &mut watch_list,
            &mut roster,
        );

        assert_eq!(
            outcome,
            AggregateOutcome::Merged {
                team: "Chelsea".to_string(),
                new_players: 1,
                updated_players: 0,
            }
        );
        assert!(watch_list.is_empty());
        assert_eq!(roster.names(), &["A".to_string()]);
        assert_eq!(
            roster.info("A"),
            Some(&PlayerInfo {
                age: "20".to_string(),
                teams: vec!["Chelsea".to_string()],
            })
        );
    }

    #[test]
    fn test_player_on_two_teams_keeps_first_age() {
        let mut watch_list = WatchList::new(["Chelsea", "Arsenal"]);
        let mut roster = Roster::new();

        aggregate(
            &envelope("ok", "Chelsea", &[("A", "20")]),
            &mut watch_list,
            &mut roster,
        );
        let outcome = aggregate(
            &envelope("ok", "Arsenal", &[("A", "21"), ("B", "30")]),
            &mut watch_list,
            &mut roster,
        );

        assert_eq!(
            outcome,
            AggregateOutcome::Merged {
                team: "Arsenal".to_string(),
                new_players: 1,
                updated_players: 1,
            }
        );
        let info = roster.info("A").unwrap();
        assert_eq!(info.age, "20");
        assert_eq!(info.teams, vec!["Chelsea", "Arsenal"]);
        assert_eq!(roster.names(), &["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_status_not_ok_is_ignored() {
        let mut watch_list = WatchList::new(["Chelsea"]);
        let mut roster = Roster::new();

        let outcome = aggregate(
            &envelope("error", "Chelsea", &[("A", "20")]),
            &mut watch_list,
            &mut roster,
        );

        assert_eq!(
            outcome,
            AggregateOutcome::Ignored(IgnoreReason::StatusNotOk("error".to_string()))
        );
        assert_eq!(watch_list, WatchList::new(["Chelsea"]));
        assert!(roster.is_empty());
    }

    #[test]
    fn test_unwatched_team_is_ignored() {
        let mut watch_list = WatchList::new(["Chelsea"]);
        let mut roster = Roster::new();

        let outcome = aggregate(
            &envelope("ok", "chelsea", &[("A", "20")]),
            &mut watch_list,
            &mut roster,
        );

        assert_eq!(
            outcome,
            AggregateOutcome::Ignored(IgnoreReason::NotWatched("chelsea".to_string()))
        );
        assert_eq!(watch_list.len(), 1);
        assert!(roster.is_empty());
        assert!(roster.info("A").is_none());
    }

    #[test]
    fn test_repeated_team_is_merged_once() {
        let mut watch_list = WatchList::new(["Chelsea", "Spain"]);
        let mut roster = Roster::new();
        let chelsea = envelope("ok", "Chelsea", &[("A", "20")]);

        aggregate(&chelsea, &mut watch_list, &mut roster);
        let outcome = aggregate(&chelsea, &mut watch_list, &mut roster);

        assert!(matches!(
            outcome,
            AggregateOutcome::Ignored(IgnoreReason::NotWatched(_))
        ));
        assert_eq!(roster.info("A").unwrap().teams, vec!["Chelsea"]);
        assert_eq!(watch_list.teams(), &["Spain".to_string()]);
    }

    #[test]
    fn test_names_and_infos_stay_in_step() {
        let mut watch_list = WatchList::new(["X", "Y", "Z"]);
        let mut roster = Roster::new();
        aggregate(&envelope("ok", "X", &[("p1", "1"), ("p2", "2")]), &mut watch_list, &mut roster);
        aggregate(&envelope("ok", "Y", &[("p2", "2"), ("p3", "3")]), &mut watch_list, &mut roster);
        aggregate(&envelope("ok", "Z", &[("p1", "1")]), &mut watch_list, &mut roster);

        assert_eq!(roster.len(), 3);
        for name in roster.names() {
            assert!(roster.info(name).is_some(), "missing info for {name}");
        }
        assert_eq!(roster.info("p1").unwrap().teams, vec!["X", "Z"]);
        assert_eq!(roster.info("p2").unwrap().teams, vec!["X", "Y"]);
    }

    #[test]
    fn test_sorted_entries_are_byte_ordered() {
        let mut roster = Roster::new();
        for name in ["bob", "Zed", "alice", "Émile", "Bob"] {
            roster.record_player(&PlayerRecord::new(name, "1"), "T");
        }
        let names: Vec<&str> = roster.sorted_entries().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Bob", "Zed", "alice", "bob", "Émile"]);
    }
}
