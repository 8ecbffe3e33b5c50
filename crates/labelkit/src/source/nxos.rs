//! Decoder for NX-OS structured (`| json`) command output.
//!
//! NX-OS nests tables as `TABLE_<name>` objects holding a single `ROW_<name>`
//! key. A table with one row carries a bare object under `ROW_<name>`, a
//! table with several rows carries an array, and an empty table is usually
//! omitted entirely (or the whole body is empty). All of these come out of
//! [`decode`] as a plain `Vec<Record>`.

use super::{Record, commands};
use crate::error::{Error, Result};
use serde_json::{Map, Value};

const TABLE_PREFIX: &str = "TABLE_";
const ROW_PREFIX: &str = "ROW_";

/// Decode the JSON body returned for `command`.
///
/// `show version` is a flat object and decodes to one record. Every other
/// command is a table and decodes through [`decode_table`].
pub fn decode(command: &str, body: &str) -> Result<Vec<Record>> {
    let Some(value) = parse(command, body)? else {
        return Ok(Vec::new());
    };
    if commands::is_table(command) {
        decode_table(command, &value)
    } else {
        decode_record(command, &value)
    }
}

fn parse(command: &str, body: &str) -> Result<Option<Value>> {
    if body.trim().is_empty() {
        log::debug!("'{command}' returned no output");
        return Ok(None);
    }

    serde_json::from_str(body)
        .map(Some)
        .map_err(|e| Error::source_unavailable(command, format!("invalid JSON output: {e}")))
}

/// Decode a table command's output into its rows.
///
/// A top-level object holding one `TABLE_*` key yields that table's rows,
/// dropping sibling scalars such as `neigh_count`. An object with no
/// `TABLE_*` key is an empty table. Several `TABLE_*` keys come back as one
/// record carrying each table as children.
pub fn decode_table(command: &str, value: &Value) -> Result<Vec<Record>> {
    let map = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Object(map) => map,
        other => return Err(not_an_object(command, other)),
    };

    let mut tables = map.iter().filter(|(key, _)| key.starts_with(TABLE_PREFIX));
    match (tables.next(), tables.next()) {
        (None, _) => {
            log::debug!("'{command}' returned an empty table");
            Ok(Vec::new())
        }
        (Some((_, table)), None) => Ok(table_rows(table)),
        (Some(_), Some(_)) => Ok(vec![record_from(map)]),
    }
}

/// Decode a flat command's output into a single record.
pub fn decode_record(command: &str, value: &Value) -> Result<Vec<Record>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Object(map) if map.is_empty() => Ok(Vec::new()),
        Value::Object(map) => Ok(vec![record_from(map)]),
        other => Err(not_an_object(command, other)),
    }
}

fn not_an_object(command: &str, value: &Value) -> Error {
    Error::source_unavailable(
        command,
        format!("expected a JSON object, got {}", kind(value)),
    )
}

/// Rows of a `TABLE_*` value, whether the `ROW_*` entry is one object or many.
fn table_rows(table: &Value) -> Vec<Record> {
    let Value::Object(table) = table else {
        return Vec::new();
    };

    table
        .iter()
        .filter(|(key, _)| key.starts_with(ROW_PREFIX))
        .flat_map(|(_, rows)| match rows {
            Value::Array(items) => items.iter().filter_map(Value::as_object).collect::<Vec<_>>(),
            Value::Object(row) => vec![row],
            _ => Vec::new(),
        })
        .map(record_from)
        .collect()
}

fn record_from(row: &Map<String, Value>) -> Record {
    let mut record = Record::new();
    for (key, value) in row {
        if let Some(table) = key.strip_prefix(TABLE_PREFIX) {
            record.set_children(table, table_rows(value));
            continue;
        }
        match value {
            Value::String(s) => record.set_field(key.as_str(), s.as_str()),
            Value::Number(n) => record.set_field(key.as_str(), n.to_string()),
            Value::Bool(b) => record.set_field(key.as_str(), b.to_string()),
            Value::Null => {}
            Value::Array(_) | Value::Object(_) => {
                log::trace!("skipping non-table nested value '{key}'");
            }
        }
    }
    record
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
