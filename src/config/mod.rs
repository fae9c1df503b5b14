use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::LoadError;

/// Ceilings used to scale raw alarm magnitudes into the 0..1 range.
/// A raw value at or above its ceiling normalizes to exactly 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NormCeilings {
    pub max_occurrences_per_hour: f64,
    pub max_affected_links: u32,
    pub max_traffic_impact_pct: f64,
}

impl Default for NormCeilings {
    fn default() -> Self {
        NormCeilings {
            max_occurrences_per_hour: 20.0,
            max_affected_links: 10,
            max_traffic_impact_pct: 100.0,
        }
    }
}

/// Tunable scoring parameters, immutable for the lifetime of one run.
///
/// No field is validated here; degenerate values (zero ceilings,
/// non-positive half-life, negative coefficients) are absorbed by the
/// prioritizer's fallback behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringConfig {
    /// Severity label -> additive weight. Labels absent from the table
    /// contribute weight 0.
    pub severity_weights: HashMap<String, f64>,
    pub alpha_frequency: f64,
    pub beta_impact: f64,
    pub gamma_service_affecting_bonus: f64,
    pub recency_half_life_hours: f64,
    pub norm: NormCeilings,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            severity_weights: default_severity_weights(),
            alpha_frequency: 10.0,
            beta_impact: 1.0,
            gamma_service_affecting_bonus: 10.0,
            recency_half_life_hours: 6.0,
            norm: NormCeilings::default(),
        }
    }
}

fn default_severity_weights() -> HashMap<String, f64> {
    [
        ("Critical", 100.0),
        ("Major", 70.0),
        ("Minor", 40.0),
        ("Warning", 20.0),
        ("Info", 0.0),
    ]
    .into_iter()
    .map(|(label, weight)| (label.to_string(), weight))
    .collect()
}

impl ScoringConfig {
    /// Weight for a severity label; 0 for labels not in the table.
    pub fn severity_weight(&self, severity: &str) -> f64 {
        self.severity_weights.get(severity).copied().unwrap_or(0.0)
    }

    /// Load a scoring config from a JSON file. Missing fields fall back
    /// to the built-in defaults.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| LoadError::ConfigUnreadable {
                path: path.to_path_buf(),
                source,
            })?;

        let config: ScoringConfig =
            serde_json::from_str(&contents).map_err(|source| LoadError::ConfigMalformed {
                path: path.to_path_buf(),
                source,
            })?;

        log::info!(
            "Loaded scoring config from {} ({} severity weights)",
            path.display(),
            config.severity_weights.len()
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_documented_values() {
        let config = ScoringConfig::default();

        assert_eq!(config.alpha_frequency, 10.0);
        assert_eq!(config.beta_impact, 1.0);
        assert_eq!(config.gamma_service_affecting_bonus, 10.0);
        assert_eq!(config.recency_half_life_hours, 6.0);
        assert_eq!(config.norm.max_occurrences_per_hour, 20.0);
        assert_eq!(config.norm.max_affected_links, 10);
        assert_eq!(config.norm.max_traffic_impact_pct, 100.0);
        assert_eq!(config.severity_weight("Critical"), 100.0);
        assert_eq!(config.severity_weight("Info"), 0.0);
    }

    #[test]
    fn unknown_severity_has_zero_weight() {
        let config = ScoringConfig::default();
        assert_eq!(config.severity_weight("Catastrophic"), 0.0);
    }

    #[test]
    fn empty_json_object_yields_defaults() {
        let config: ScoringConfig = serde_json::from_str("{}").expect("valid json");
        assert_eq!(config.alpha_frequency, 10.0);
        assert_eq!(config.severity_weight("Major"), 70.0);
    }

    #[test]
    fn partial_config_overrides_only_named_fields() {
        let config: ScoringConfig =
            serde_json::from_str(r#"{"alphaFrequency": 5.0, "norm": {"maxAffectedLinks": 50}}"#)
                .expect("valid json");

        assert_eq!(config.alpha_frequency, 5.0);
        assert_eq!(config.norm.max_affected_links, 50);
        // untouched fields keep their defaults
        assert_eq!(config.beta_impact, 1.0);
        assert_eq!(config.norm.max_traffic_impact_pct, 100.0);
    }

    #[test]
    fn custom_severity_table_replaces_the_default_one() {
        let config: ScoringConfig =
            serde_json::from_str(r#"{"severityWeights": {"Oddball": 12.5}}"#).expect("valid json");

        assert_eq!(config.severity_weight("Oddball"), 12.5);
        assert_eq!(config.severity_weight("Critical"), 0.0);
    }

    #[test]
    fn load_reads_a_config_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"recencyHalfLifeHours": 2.0}}"#).expect("write");

        let config = ScoringConfig::load(file.path()).expect("load");
        assert_eq!(config.recency_half_life_hours, 2.0);
    }

    #[test]
    fn load_distinguishes_unreadable_from_malformed() {
        let missing = ScoringConfig::load(Path::new("/nonexistent/scoring.json"));
        assert!(matches!(
            missing,
            Err(LoadError::ConfigUnreadable { .. })
        ));

        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "not json at all").expect("write");
        let malformed = ScoringConfig::load(file.path());
        assert!(matches!(malformed, Err(LoadError::ConfigMalformed { .. })));
    }
}
