use anyhow::Context;
use clap::ValueEnum;
use serde_json::json;

use crate::model::RankedAlarm;

/// Renderings of the ranked sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width columns for terminal reading
    Table,
    /// Pretty-printed JSON array
    Json,
}

/// Render the ranked sequence in the requested format.
pub fn render(ranked: &[RankedAlarm], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(ranked)),
        OutputFormat::Json => render_json(ranked),
    }
}

fn render_table(ranked: &[RankedAlarm]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<5} {:<9} {:<12} {:<16} {:<9} REASON\n",
        "RANK", "SCORE", "ID", "NODE", "SEV"
    ));
    for entry in ranked {
        out.push_str(&format!(
            "{:<5} {:<9.2} {:<12} {:<16} {:<9} {}\n",
            entry.rank,
            entry.score,
            entry.alarm.id,
            entry.alarm.node_id,
            entry.alarm.severity,
            entry.reason
        ));
    }
    out
}

fn render_json(ranked: &[RankedAlarm]) -> anyhow::Result<String> {
    let records: Vec<serde_json::Value> = ranked
        .iter()
        .map(|entry| {
            json!({
                "id": entry.alarm.id,
                "nodeId": entry.alarm.node_id,
                "severity": entry.alarm.severity,
                "score": entry.score,
                "rank": entry.rank,
                "reason": entry.reason,
            })
        })
        .collect();

    let mut rendered = serde_json::to_string_pretty(&records)
        .context("failed to serialize ranked alarms")?;
    rendered.push('\n');
    Ok(rendered)
}
