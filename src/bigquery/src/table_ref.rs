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

//! Parse table names in the `[[project:]dataset.]table` notation.

use crate::model::TableReference;
use crate::{Error, Result};

/// Parses `value` into a [TableReference].
///
/// The accepted formats are `table`, `dataset.table`, and
/// `project:dataset.table`. The table id is whatever follows the last `.`,
/// and the project id is whatever precedes the last `:` before that. Missing
/// or empty project and dataset ids are copied from `default`.
///
/// # Example
/// ```
/// # use google_cloud_bigquery::model::TableReference;
/// # use google_cloud_bigquery::table_ref::table_ref_from_str;
/// let default = TableReference::new()
///     .set_project_id("my-project")
///     .set_dataset_id("my_dataset");
/// let got = table_ref_from_str("other_dataset.my_table", &default)?;
/// assert_eq!(got.project_id, "my-project");
/// assert_eq!(got.dataset_id, "other_dataset");
/// assert_eq!(got.table_id, "my_table");
/// # google_cloud_bigquery::Result::<()>::Ok(())
/// ```
pub fn table_ref_from_str(value: &str, default: &TableReference) -> Result<TableReference> {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return Err(Error::validation(format!(
            "unable to identify table from {value:?}"
        )));
    }
    let (prefix, table_id) = match value.rsplit_once('.') {
        Some((prefix, table_id)) => (Some(prefix), table_id),
        None => (None, value),
    };
    if table_id.is_empty() {
        return Err(Error::validation(format!(
            "missing table id in {value:?}"
        )));
    }
    let (project_id, dataset_id) = match prefix {
        None => ("", ""),
        Some(p) => p.rsplit_once(':').unwrap_or(("", p)),
    };
    let or_default = |v: &str, d: &str| {
        if v.is_empty() { d.to_string() } else { v.to_string() }
    };
    Ok(TableReference {
        project_id: or_default(project_id, &default.project_id),
        dataset_id: or_default(dataset_id, &default.dataset_id),
        table_id: table_id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn default() -> TableReference {
        TableReference::new()
            .set_project_id("default-project")
            .set_dataset_id("default_dataset")
            .set_table_id("default_table")
    }

    #[test_case("my_table", "default-project", "default_dataset", "my_table")]
    #[test_case("ds.my_table", "default-project", "ds", "my_table")]
    #[test_case("prj:ds.my_table", "prj", "ds", "my_table")]
    #[test_case("domain.com:prj:ds.my_table", "domain.com:prj", "ds", "my_table")]
    #[test_case(".my_table", "default-project", "default_dataset", "my_table")]
    #[test_case(":.my_table", "default-project", "default_dataset", "my_table")]
    #[test_case("prj:.my_table", "prj", "default_dataset", "my_table")]
    #[test_case("ds.part.my_table", "default-project", "ds.part", "my_table")]
    fn parse(input: &str, project: &str, dataset: &str, table: &str) -> anyhow::Result<()> {
        let got = table_ref_from_str(input, &default())?;
        let want = TableReference::new()
            .set_project_id(project)
            .set_dataset_id(dataset)
            .set_table_id(table);
        assert_eq!(got, want);
        Ok(())
    }

    #[test_case(""; "empty")]
    #[test_case("ds."; "empty table")]
    #[test_case("my table"; "whitespace")]
    #[test_case("prj:ds.tbl\n"; "trailing newline")]
    fn errors(input: &str) {
        let got = table_ref_from_str(input, &default());
        assert!(matches!(&got, Err(e) if e.is_validation()), "{got:?}");
    }
}
