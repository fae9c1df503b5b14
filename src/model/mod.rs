use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reported fault/event condition from network monitoring.
///
/// Read-only once constructed; every field comes straight from the input
/// dump, nothing is derived or cached here. Fields absent from the input
/// record take the values from [`Alarm::default`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Alarm {
    pub id: String,
    pub node_id: String,
    /// Severity label, matched against the configured severity-weight table.
    /// Any key present in the table is valid; unknown labels carry weight 0.
    pub severity: String,
    pub first_seen: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    pub occurrences_per_hour: f64,
    /// Topological blast radius.
    pub affected_links: u32,
    /// Estimated traffic impact, nominally 0..100 but not enforced.
    pub traffic_impact_pct: f64,
    pub service_affecting: bool,
    pub description: String,
}

impl Default for Alarm {
    fn default() -> Self {
        Alarm {
            id: String::new(),
            node_id: String::new(),
            severity: "Info".to_string(),
            first_seen: DateTime::UNIX_EPOCH,
            last_seen: DateTime::UNIX_EPOCH,
            occurrences_per_hour: 0.0,
            affected_links: 0,
            traffic_impact_pct: 0.0,
            service_affecting: false,
            description: String::new(),
        }
    }
}

/// A scored alarm as produced by the prioritizer.
///
/// Owns its copy of the source [`Alarm`]. `rank` is 0 until the batch
/// sort assigns dense 1-based positions.
#[derive(Debug, Clone)]
pub struct RankedAlarm {
    pub alarm: Alarm,
    /// Composite urgency. Unbounded above, negative if coefficients are.
    pub score: f64,
    pub rank: u32,
    /// One line explaining the score, built from the same inputs.
    pub reason: String,
}
