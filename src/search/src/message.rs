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

use crate::Result;
use crate::model::{FieldType, FieldValue, Value};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// The JSON representation of a field value in the Cloud Search API.
///
/// Exactly one of the `*_value` fields is set. `string_format` and `lang`
/// only apply to string values.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FieldValueMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_value: Option<f64>,
    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp_value: Option<OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_value: Option<String>,
}

impl FieldValue {
    /// Converts the value to its wire message.
    pub fn to_message(&self) -> FieldValueMessage {
        let mut message = FieldValueMessage::default();
        match (self.field_type(), self.value()) {
            (FieldType::Geo, Value::String(s)) => message.geo_value = Some(s.clone()),
            (t, Value::String(s)) => {
                message.string_format = Some(t.name().to_ascii_uppercase());
                message.lang = self.lang().map(str::to_string);
                message.string_value = Some(s.clone());
            }
            (_, Value::Number(n)) => message.number_value = Some(*n),
            (_, Value::Timestamp(t)) => message.timestamp_value = Some(*t),
        }
        message
    }

    /// Creates a field value from its wire message.
    ///
    /// The message does not carry the field name, the caller provides it.
    /// A string value without a format uses the `default` type.
    pub fn from_message<N: Into<String>>(message: &FieldValueMessage, name: N) -> Result<Self> {
        let builder = match message {
            FieldValueMessage {
                geo_value: Some(g), ..
            } => FieldValue::builder(name, g.as_str()).with_type(FieldType::Geo.name()),
            FieldValueMessage {
                number_value: Some(n),
                ..
            } => FieldValue::builder(name, *n),
            FieldValueMessage {
                timestamp_value: Some(t),
                ..
            } => FieldValue::builder(name, *t),
            FieldValueMessage {
                string_value: Some(s),
                string_format,
                lang,
                ..
            } => {
                let builder = FieldValue::builder(name, s.as_str())
                    .with_type(string_format.as_deref().unwrap_or(FieldType::Default.name()));
                match lang {
                    Some(l) => builder.with_lang(l.as_str()),
                    None => builder,
                }
            }
            // An empty message is an empty default string.
            _ => FieldValue::builder(name, ""),
        };
        builder.build()
    }
}

impl From<&FieldValue> for FieldValueMessage {
    fn from(value: &FieldValue) -> Self {
        value.to_message()
    }
}
