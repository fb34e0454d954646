// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Streaming inserts.
//!
//! Each row in a streaming insert carries an `insertId`. The service uses it
//! to discard duplicate rows, which makes retrying a failed insert safe. The
//! id is derived from the row contents: identical rows, in any key order,
//! get the same id.

use crate::model::{InsertRow, TableDataInsertAllRequest};
use base64::Engine as _;
use base64::prelude::BASE64_STANDARD;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

/// A row in a streaming insert, as a JSON object.
pub type Row = Map<String, Value>;

/// Options for a streaming insert.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InsertOptions {
    /// Insert the valid rows even if some rows are invalid.
    pub skip_invalid: Option<bool>,
    /// Accept values that do not match the table schema, ignoring them.
    pub ignore_unknown: Option<bool>,
}

/// Returns the idempotency token for `row`.
///
/// The token is the base64 encoded SHA-256 digest of the row rendered as JSON
/// with the object keys sorted.
///
/// # Example
/// ```
/// # use google_cloud_bigquery::rows::{insert_id, Row};
/// let a: Row = serde_json::from_str(r#"{"name": "Alice", "age": 30}"#)?;
/// let b: Row = serde_json::from_str(r#"{"age": 30, "name": "Alice"}"#)?;
/// assert_eq!(insert_id(&a), insert_id(&b));
/// # Ok::<(), serde_json::Error>(())
/// ```
pub fn insert_id(row: &Row) -> String {
    let mut rendered = String::new();
    write_object(row, &mut rendered);
    let digest = Sha256::digest(rendered.as_bytes());
    BASE64_STANDARD.encode(digest)
}

/// Creates the body of a streaming insert.
pub fn insert_all_body<I>(rows: I, options: &InsertOptions) -> TableDataInsertAllRequest
where
    I: IntoIterator<Item = Row>,
{
    let rows = rows
        .into_iter()
        .map(|json| InsertRow {
            insert_id: insert_id(&json),
            json,
        })
        .collect();
    TableDataInsertAllRequest {
        kind: "bigquery#tableDataInsertAllRequest".to_string(),
        skip_invalid_rows: options.skip_invalid,
        ignore_unknown_values: options.ignore_unknown,
        rows,
    }
}

fn write_object(object: &Map<String, Value>, out: &mut String) {
    let mut keys = object.keys().collect::<Vec<_>>();
    keys.sort();
    out.push('{');
    for (i, key) in keys.into_iter().enumerate() {
        if i != 0 {
            out.push(',');
        }
        write_string(key, out);
        out.push(':');
        if let Some(v) = object.get(key) {
            write_value(v, out);
        }
    }
    out.push('}');
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Object(o) => write_object(o, out),
        Value::Array(a) => {
            out.push('[');
            for (i, v) in a.iter().enumerate() {
                if i != 0 {
                    out.push(',');
                }
                write_value(v, out);
            }
            out.push(']');
        }
        Value::String(s) => write_string(s, out),
        // Null, booleans, and numbers have a single rendering.
        v => out.push_str(&v.to_string()),
    }
}

fn write_string(s: &str, out: &mut String) {
    out.push_str(&Value::String(s.to_string()).to_string());
}
