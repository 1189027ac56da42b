//! Test utilities and shared fixtures for the AoC bot workspace.
//!
//! Enabled for other crates through the `testing` feature.

use chrono::NaiveDate;
use std::sync::Once;

#[cfg(feature = "tracing-subscriber")]
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
#[cfg(feature = "tracing-subscriber")]
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        fmt().with_test_writer().with_env_filter(filter).init();
    });
}

/// No-op version when tracing-subscriber is not available
#[cfg(not(feature = "tracing-subscriber"))]
pub fn init_test_logging() {
    INIT.call_once(|| {});
}

/// Test fixture for a fixed calendar date.
pub fn mock_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Leaderboard payloads for tests.
pub mod leaderboard_fixtures {
    use crate::{LeaderboardResponse, Member, StarCompletion};
    use std::collections::HashMap;

    /// A member with the given score and star count and no completion detail.
    pub fn member(id: &str, name: Option<&str>, stars: u32, local_score: u32) -> Member {
        Member {
            id: id.to_string(),
            name: name.map(str::to_string),
            stars,
            local_score,
            global_score: 0,
            last_star_ts: 0,
            completion_day_level: HashMap::new(),
        }
    }

    /// A leaderboard for `event` containing `members`.
    pub fn leaderboard(event: &str, owner_id: &str, members: Vec<Member>) -> LeaderboardResponse {
        LeaderboardResponse {
            event: event.to_string(),
            owner_id: owner_id.to_string(),
            members: members.into_iter().map(|m| (m.id.clone(), m)).collect(),
        }
    }

    /// Single-member 2021 leaderboard: Lambo with 3 stars and 26 points.
    pub fn lambo_leaderboard() -> LeaderboardResponse {
        let mut lambo = member("490120", Some("Lambo"), 3, 26);
        lambo.last_star_ts = 1_606_899_444;
        lambo.completion_day_level.insert(
            "1".to_string(),
            HashMap::from([(
                "1".to_string(),
                StarCompletion {
                    get_star_ts: 1_606_816_563,
                },
            )]),
        );
        leaderboard("2021", "490120", vec![lambo])
    }

    /// The same leaderboard as [`lambo_leaderboard`], as served by the API.
    pub fn lambo_leaderboard_json() -> &'static str {
        r#"{
  "event": "2021",
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
    }
  }
}"#
    }

    /// A leaderboard with no members.
    pub fn empty_leaderboard(event: &str) -> LeaderboardResponse {
        leaderboard(event, "12345", Vec::new())
    }
}
