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

use crate::{Error, Result};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// The type of a document field value.
///
/// A field can have several values with the same or different types, but at
/// most one `number` and one `timestamp` value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum FieldType {
    /// A string matched only as a whole.
    Atom,
    /// A string with no particular format.
    Default,
    /// A string containing HTML markup.
    Html,
    /// A string tokenized into words.
    Text,
    /// A finite floating point number.
    Number,
    /// A point in time.
    Timestamp,
    /// A geographic point, formatted as `"latitude, longitude"`.
    Geo,
}

impl FieldType {
    /// The lowercase name of the type.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Atom => "atom",
            Self::Default => "default",
            Self::Html => "html",
            Self::Text => "text",
            Self::Number => "number",
            Self::Timestamp => "timestamp",
            Self::Geo => "geo",
        }
    }

    /// Returns `true` for the string types: `atom`, `default`, `html`, and
    /// `text`.
    pub fn is_string(&self) -> bool {
        matches!(self, Self::Atom | Self::Default | Self::Html | Self::Text)
    }

    const ALL: [FieldType; 7] = [
        Self::Atom,
        Self::Default,
        Self::Html,
        Self::Text,
        Self::Number,
        Self::Timestamp,
        Self::Geo,
    ];
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for FieldType {
    type Err = Error;

    /// Parses a type name, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::validation(format!("unknown field value type {s:?}")))
    }
}

/// The value held by a [FieldValue].
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    String(String),
    Number(f64),
    Timestamp(OffsetDateTime),
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<OffsetDateTime> for Value {
    fn from(value: OffsetDateTime) -> Self {
        Self::Timestamp(value)
    }
}

/// A single value of a named document field.
///
/// Field values are immutable. The type is either given explicitly, or
/// inferred from the value: timestamps become `timestamp`, numbers become
/// `number`, and anything else becomes `default`. The language is only kept
/// for the string types.
///
/// # Example
/// ```
/// # use google_cloud_search::model::{FieldType, FieldValue};
/// let price = FieldValue::new("price", 24.95)?;
/// assert_eq!(price.field_type(), FieldType::Number);
///
/// let body = FieldValue::builder("body", "<p>hello</p>")
///     .with_type("html")
///     .with_lang("en")
///     .build()?;
/// assert_eq!(body.field_type(), FieldType::Html);
/// assert_eq!(body.lang(), Some("en"));
/// # google_cloud_search::Result::<()>::Ok(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FieldValue {
    name: String,
    value: Value,
    field_type: FieldType,
    lang: Option<String>,
}

impl FieldValue {
    /// Creates a field value with an inferred type and no language.
    pub fn new<N: Into<String>, V: Into<Value>>(name: N, value: V) -> Result<Self> {
        Self::builder(name, value).build()
    }

    /// Starts building a field value with an explicit type or language.
    pub fn builder<N: Into<String>, V: Into<Value>>(name: N, value: V) -> FieldValueBuilder {
        FieldValueBuilder {
            name: name.into(),
            value: value.into(),
            field_type: None,
            lang: None,
        }
    }

    /// The field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// The language of a string value, if any.
    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    /// Returns `true` if the value has one of the string types.
    pub fn is_string_type(&self) -> bool {
        self.field_type.is_string()
    }
}

/// Builds a [FieldValue].
#[derive(Clone, Debug)]
pub struct FieldValueBuilder {
    name: String,
    value: Value,
    field_type: Option<String>,
    lang: Option<String>,
}

impl FieldValueBuilder {
    /// Sets the type by name, for example `"atom"` or `"timestamp"`.
    pub fn with_type<T: Into<String>>(mut self, v: T) -> Self {
        self.field_type = Some(v.into());
        self
    }

    /// Sets the language, ignored unless the type is a string type.
    pub fn with_lang<T: Into<String>>(mut self, v: T) -> Self {
        self.lang = Some(v.into());
        self
    }

    /// Validates the type and converts the value to it.
    ///
    /// Fails with a validation error if the type is unknown, or if the value
    /// cannot be represented with the type.
    pub fn build(self) -> Result<FieldValue> {
        let field_type = match self.field_type.as_deref() {
            Some(name) => name.parse()?,
            None => infer_type(&self.value),
        };
        let value = normalize(&self.name, self.value, field_type)?;
        let lang = self.lang.filter(|_| field_type.is_string());
        Ok(FieldValue {
            name: self.name,
            value,
            field_type,
            lang,
        })
    }
}

fn infer_type(value: &Value) -> FieldType {
    match value {
        Value::Timestamp(_) => FieldType::Timestamp,
        Value::Number(_) => FieldType::Number,
        Value::String(_) => FieldType::Default,
    }
}

fn normalize(name: &str, value: Value, field_type: FieldType) -> Result<Value> {
    let mismatch = |value: &Value| {
        Error::validation(format!(
            "field {name:?}: cannot use {value:?} as a {field_type} value"
        ))
    };
    match (field_type, value) {
        (FieldType::Number, Value::Number(n)) if n.is_finite() => Ok(Value::Number(n)),
        (FieldType::Number, Value::String(s)) => match s.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(Value::Number(n)),
            _ => Err(mismatch(&Value::String(s))),
        },
        (FieldType::Timestamp, Value::Timestamp(t)) => Ok(Value::Timestamp(t)),
        (FieldType::Timestamp, Value::String(s)) => OffsetDateTime::parse(&s, &Rfc3339)
            .map(Value::Timestamp)
            .map_err(|_| mismatch(&Value::String(s))),
        (t, Value::String(s)) if t.is_string() || t == FieldType::Geo => Ok(Value::String(s)),
        (t, Value::Number(n)) if t.is_string() && n.is_finite() => {
            Ok(Value::String(n.to_string()))
        }
        (t, Value::Timestamp(ts)) if t.is_string() => {
            ts.format(&Rfc3339).map(Value::String).map_err(Error::ser)
        }
        (_, value) => Err(mismatch(&value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn timestamp() -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp(1_436_434_800).unwrap()
    }

    #[test]
    fn inferred_types() -> anyhow::Result<()> {
        let v = FieldValue::new("title", "hello")?;
        assert_eq!(v.field_type(), FieldType::Default);
        assert!(v.is_string_type());

        let v = FieldValue::new("rating", 4)?;
        assert_eq!(v.field_type(), FieldType::Number);
        assert_eq!(v.value(), &Value::Number(4.0));

        let v = FieldValue::new("published", timestamp())?;
        assert_eq!(v.field_type(), FieldType::Timestamp);
        assert!(!v.is_string_type());
        Ok(())
    }

    #[test_case("atom", FieldType::Atom)]
    #[test_case("default", FieldType::Default)]
    #[test_case("HTML", FieldType::Html)]
    #[test_case("Text", FieldType::Text)]
    #[test_case("geo", FieldType::Geo)]
    fn explicit_string_types(name: &str, want: FieldType) -> anyhow::Result<()> {
        let v = FieldValue::builder("f", "47.6, -122.3")
            .with_type(name)
            .build()?;
        assert_eq!(v.field_type(), want);
        assert_eq!(v.value(), &Value::from("47.6, -122.3"));
        Ok(())
    }

    #[test]
    fn unknown_type() {
        let got = FieldValue::builder("f", "v").with_type("blob").build();
        assert!(matches!(&got, Err(e) if e.is_validation()), "{got:?}");
    }

    #[test]
    fn lang_only_for_strings() -> anyhow::Result<()> {
        let v = FieldValue::builder("body", "bonjour")
            .with_type("text")
            .with_lang("fr")
            .build()?;
        assert_eq!(v.lang(), Some("fr"));

        let v = FieldValue::builder("rating", 4).with_lang("fr").build()?;
        assert_eq!(v.lang(), None);

        let v = FieldValue::builder("where", "0, 0")
            .with_type("geo")
            .with_lang("fr")
            .build()?;
        assert_eq!(v.lang(), None);
        Ok(())
    }

    #[test]
    fn normalizes_values() -> anyhow::Result<()> {
        let v = FieldValue::builder("rating", " 4.5 ")
            .with_type("number")
            .build()?;
        assert_eq!(v.value(), &Value::Number(4.5));

        let v = FieldValue::builder("when", "2015-07-09T09:40:00Z")
            .with_type("timestamp")
            .build()?;
        assert_eq!(v.value(), &Value::Timestamp(timestamp()));

        let v = FieldValue::builder("sku", 42).with_type("atom").build()?;
        assert_eq!(v.value(), &Value::from("42"));

        let v = FieldValue::builder("when", timestamp())
            .with_type("default")
            .build()?;
        assert_eq!(v.value(), &Value::from("2015-07-09T09:40:00Z"));
        Ok(())
    }

    #[test_case(Value::from("abc"), "number")]
    #[test_case(Value::Number(f64::NAN), "number")]
    #[test_case(Value::Number(f64::INFINITY), "default")]
    #[test_case(Value::Number(1.0), "timestamp")]
    #[test_case(Value::from("yesterday"), "timestamp")]
    #[test_case(Value::Number(1.0), "geo")]
    fn rejects_mismatched_values(value: Value, field_type: &str) {
        let got = FieldValue::builder("f", value)
            .with_type(field_type)
            .build();
        assert!(matches!(&got, Err(e) if e.is_validation()), "{got:?}");
    }

    #[test]
    fn type_names() -> anyhow::Result<()> {
        for t in FieldType::ALL {
            assert_eq!(t.name().parse::<FieldType>()?, t);
            assert_eq!(t.to_string(), t.name());
        }
        Ok(())
    }
}
