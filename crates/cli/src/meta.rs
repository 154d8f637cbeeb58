// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `--meta key=value` and `--meta key:=json` parsing.

use roster_core::Metadata;
use serde_json::Value;

use crate::exit_error::ExitError;

/// Fold pairs into metadata, later keys overriding earlier ones.
///
/// `key=value` stores `value` verbatim as a string. `key:=value` parses
/// `value` as JSON (`n:=3`, `tags:=["a"]`) and rejects it if it is not.
pub fn parse_pairs(pairs: &[String]) -> Result<Metadata, ExitError> {
    let mut metadata = Metadata::new();
    for pair in pairs {
        let Some((key, raw)) = pair.split_once('=') else {
            return Err(ExitError::invalid(format!("metadata '{pair}' must be key=value")));
        };
        let (key, value) = match key.strip_suffix(':') {
            Some(key) => (key, parse_json(pair, raw)?),
            None => (key, Value::String(raw.to_string())),
        };
        if key.is_empty() {
            return Err(ExitError::invalid(format!("metadata '{pair}' has an empty key")));
        }
        metadata.insert(key.to_string(), value);
    }
    Ok(metadata)
}

fn parse_json(pair: &str, raw: &str) -> Result<Value, ExitError> {
    serde_json::from_str(raw)
        .map_err(|e| ExitError::invalid(format!("metadata '{pair}' is not valid JSON: {e}")))
}

#[cfg(test)]
#[path = "meta_tests.rs"]
mod tests;
