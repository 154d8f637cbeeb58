// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use roster_core::{AgentRecord, Lifespan};
use serde::Serialize;
use std::collections::BTreeMap;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print `value` as pretty JSON, or `text()` otherwise.
pub fn emit<T: Serialize>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce() -> String,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => println!("{}", text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}

/// Format elapsed time between two instants as "5s", "2m", "1h", "3d".
pub fn format_elapsed(from: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - from).num_seconds().max(0);
    match secs {
        s if s < 60 => format!("{s}s"),
        s if s < 3600 => format!("{}m", s / 60),
        s if s < 86_400 => format!("{}h", s / 3600),
        s => format!("{}d", s / 86_400),
    }
}

/// Multi-line detail view of one record.
pub fn record_detail(record: &AgentRecord) -> String {
    let mut out = format!(
        "{}\n  id:        {}\n  lifespan:  {}\n  scope:     {}\n  model:     {}\n  turns:     {}\n  created:   {}\n  last used: {}",
        record.name,
        record.id,
        record.lifespan,
        record.scope,
        record.model,
        record.turn_count,
        record.created_at.to_rfc3339(),
        record.last_used_at.to_rfc3339(),
    );
    for (key, value) in &record.metadata {
        out.push_str(&format!("\n  {key}: {value}"));
    }
    out
}

/// Column-aligned table of records, sorted by lifespan then name.
pub fn record_table(records: &[AgentRecord], now: DateTime<Utc>) -> String {
    if records.is_empty() {
        return "No agents".to_string();
    }
    let mut rows: Vec<&AgentRecord> = records.iter().collect();
    rows.sort_by(|a, b| (a.lifespan, &a.scope, &a.name).cmp(&(b.lifespan, &b.scope, &b.name)));

    let name_w = rows.iter().map(|r| r.name.len()).max().unwrap_or(0).max("NAME".len());
    let life_w = rows.iter().map(|r| r.lifespan.as_str().len()).max().unwrap_or(0).max("LIFESPAN".len());
    let scope_w = rows.iter().map(|r| r.scope.len()).max().unwrap_or(0).max("SCOPE".len());

    let mut out = format!(
        "{:<name_w$} {:<life_w$} {:<scope_w$} {:<6} {:>5} {:>5}  ID",
        "NAME", "LIFESPAN", "SCOPE", "MODEL", "TURNS", "USED"
    );
    for r in rows {
        out.push_str(&format!(
            "\n{:<name_w$} {:<life_w$} {:<scope_w$} {:<6} {:>5} {:>5}  {}",
            r.name,
            r.lifespan.as_str(),
            r.scope,
            r.model.to_string(),
            r.turn_count,
            format_elapsed(r.last_used_at, now),
            r.id,
        ));
    }
    out
}

/// One line per lifespan with its record count.
pub fn stats_table(stats: &BTreeMap<Lifespan, usize>) -> String {
    let width = Lifespan::ALL.iter().map(|l| l.as_str().len()).max().unwrap_or(0);
    let total: usize = stats.values().sum();
    let mut out = String::new();
    for (lifespan, count) in stats {
        out.push_str(&format!("{:<width$} {count}\n", lifespan.as_str()));
    }
    out.push_str(&format!("{:<width$} {total}", "total"));
    out
}

/// "1 agent" / "3 agents"
pub fn agents(count: usize) -> String {
    match count {
        1 => "1 agent".to_string(),
        n => format!("{n} agents"),
    }
}
