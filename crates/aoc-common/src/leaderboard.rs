//! Advent of Code private leaderboard data model.
//!
//! These types mirror the JSON served by
//! `/{year}/leaderboard/private/view/{id}.json`. The API has sent ids and
//! timestamps both as JSON numbers and as strings over the years, so those
//! fields accept either form.

use serde::{Deserialize, Deserializer};
use std::cmp::Reverse;
use std::collections::HashMap;

/// A private leaderboard for a single Advent of Code edition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LeaderboardResponse {
    /// Edition year, e.g. `"2021"`.
    pub event: String,
    /// Member id of the leaderboard owner.
    #[serde(deserialize_with = "string_or_number")]
    pub owner_id: String,
    /// Members keyed by their member id.
    #[serde(default)]
    pub members: HashMap<String, Member>,
}

/// Raw member record as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Member {
    /// Member id.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Display name; `null` for anonymous accounts.
    #[serde(default)]
    pub name: Option<String>,
    /// Total stars collected this edition.
    #[serde(default)]
    pub stars: u32,
    /// Score on this private leaderboard.
    #[serde(default)]
    pub local_score: u32,
    /// Score on the global leaderboard.
    #[serde(default)]
    pub global_score: u32,
    /// Unix timestamp of the most recent star, `0` if none.
    #[serde(default, deserialize_with = "timestamp")]
    pub last_star_ts: i64,
    /// Day number -> part number -> completion.
    #[serde(default)]
    pub completion_day_level: HashMap<String, HashMap<String, StarCompletion>>,
}

/// Completion of one part of one day's puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StarCompletion {
    /// Unix timestamp at which the star was earned.
    #[serde(deserialize_with = "timestamp")]
    pub get_star_ts: i64,
}

/// One ranked row of a rendered leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    /// Name shown for the member.
    pub name: String,
    /// Stars collected.
    pub stars: u32,
    /// Local leaderboard score.
    pub local_score: u32,
}

impl Member {
    /// Name to display, labelling anonymous accounts the way the AoC site does.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => format!("(anonymous user #{})", self.id),
        }
    }

    fn numeric_id(&self) -> u64 {
        self.id.parse().unwrap_or(u64::MAX)
    }
}

impl From<&Member> for LeaderboardEntry {
    fn from(member: &Member) -> Self {
        Self {
            name: member.display_name(),
            stars: member.stars,
            local_score: member.local_score,
        }
    }
}

impl LeaderboardResponse {
    /// Members ordered by descending local score.
    ///
    /// Ties keep ascending member id order so the ranking is deterministic.
    pub fn ranked_entries(&self) -> Vec<LeaderboardEntry> {
        let mut members: Vec<&Member> = self.members.values().collect();
        members.sort_by(|a, b| a.numeric_id().cmp(&b.numeric_id()).then_with(|| a.id.cmp(&b.id)));
        members.sort_by_key(|m| Reverse(m.local_score));
        members.into_iter().map(LeaderboardEntry::from).collect()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Number(i64),
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Text(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}

fn timestamp<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Number(n) => Ok(n),
        StringOrNumber::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIVE_SHAPE: &str = r#"{
        "event": "2023",
        "owner_id": 490120,
        "members": {
            "490120": {
                "id": 490120,
                "name": "Lambo",
                "stars": 3,
                "local_score": 26,
                "global_score": 0,
                "last_star_ts": 1606899444,
                "completion_day_level": {
                    "1": { "1": { "get_star_ts": 1606816563, "star_index": 0 } }
                }
            },
            "77": {
                "id": 77,
                "name": null,
                "stars": 0,
                "local_score": 0,
                "global_score": 0,
                "last_star_ts": 0,
                "completion_day_level": {}
            }
        }
    }"#;

    const STRING_SHAPE: &str = r#"{
        "event": "2021",
        "owner_id": "490120",
        "members": {
            "490120": {
                "id": "490120",
                "name": "Lambo",
                "stars": 3,
                "local_score": 26,
                "global_score": 0,
                "last_star_ts": "1606899444",
                "completion_day_level": { "1": { "1": { "get_star_ts": "1606816563" } } }
            }
        }
    }"#;

    fn member(id: &str, name: &str, score: u32) -> Member {
        Member {
            id: id.to_string(),
            name: Some(name.to_string()),
            stars: 0,
            local_score: score,
            global_score: 0,
            last_star_ts: 0,
            completion_day_level: HashMap::new(),
        }
    }

    #[test]
    fn test_deserialize_numeric_ids() {
        let board: LeaderboardResponse = serde_json::from_str(LIVE_SHAPE).unwrap();
        assert_eq!(board.owner_id, "490120");
        assert_eq!(board.members.len(), 2);

        let lambo = &board.members["490120"];
        assert_eq!(lambo.id, "490120");
        assert_eq!(lambo.local_score, 26);
        assert_eq!(lambo.completion_day_level["1"]["1"].get_star_ts, 1606816563);
    }

    #[test]
    fn test_deserialize_string_ids_and_timestamps() {
        let board: LeaderboardResponse = serde_json::from_str(STRING_SHAPE).unwrap();
        let lambo = &board.members["490120"];
        assert_eq!(lambo.last_star_ts, 1606899444);
        assert_eq!(lambo.stars, 3);
    }

    #[test]
    fn test_anonymous_member_display_name() {
        let board: LeaderboardResponse = serde_json::from_str(LIVE_SHAPE).unwrap();
        assert_eq!(board.members["77"].display_name(), "(anonymous user #77)");
        assert_eq!(board.members["490120"].display_name(), "Lambo");
    }

    #[test]
    fn test_ranked_entries_orders_by_score_then_id() {
        let mut members = HashMap::new();
        for m in [
            member("300", "Carol", 10),
            member("25", "Bob", 40),
            member("1000", "Dave", 10),
            member("9", "Alice", 10),
        ] {
            members.insert(m.id.clone(), m);
        }
        let board = LeaderboardResponse {
            event: "2022".to_string(),
            owner_id: "25".to_string(),
            members,
        };

        let names: Vec<String> = board.ranked_entries().into_iter().map(|e| e.name).collect();
        assert_eq!(names, ["Bob", "Alice", "Carol", "Dave"]);
    }

    #[test]
    fn test_ranked_entries_empty_board() {
        let board: LeaderboardResponse =
            serde_json::from_str(r#"{"event":"2018","owner_id":"12345","members":{}}"#).unwrap();
        assert!(board.ranked_entries().is_empty());
    }
}
