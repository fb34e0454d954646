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

//! Compose job resources from loosely-typed options.
//!
//! The option structs accept several spellings for enumerated values, for
//! example `"truncate"`, `"write_truncate"`, and `"WriteTruncate"` all select
//! `WRITE_TRUNCATE`. Unknown spellings are sent unchanged and the service
//! rejects them if they are invalid.

use crate::model::{
    DatasetReference, Job, JobConfiguration, JobConfigurationExtract, JobConfigurationLoad,
    JobConfigurationQuery, JobConfigurationTableCopy, QueryRequest, TableReference, TableSchema,
};
use crate::{Error, Result};
use gax::alias::AliasTable;

/// Spellings for `createDisposition`.
pub const CREATE_DISPOSITION: AliasTable = AliasTable::new(&[
    ("create_if_needed", "CREATE_IF_NEEDED"),
    ("createifneeded", "CREATE_IF_NEEDED"),
    ("if_needed", "CREATE_IF_NEEDED"),
    ("needed", "CREATE_IF_NEEDED"),
    ("create_never", "CREATE_NEVER"),
    ("createnever", "CREATE_NEVER"),
    ("never", "CREATE_NEVER"),
]);

/// Spellings for `writeDisposition`.
pub const WRITE_DISPOSITION: AliasTable = AliasTable::new(&[
    ("write_truncate", "WRITE_TRUNCATE"),
    ("writetruncate", "WRITE_TRUNCATE"),
    ("truncate", "WRITE_TRUNCATE"),
    ("write_append", "WRITE_APPEND"),
    ("writeappend", "WRITE_APPEND"),
    ("append", "WRITE_APPEND"),
    ("write_empty", "WRITE_EMPTY"),
    ("writeempty", "WRITE_EMPTY"),
    ("empty", "WRITE_EMPTY"),
]);

/// Spellings for the query `priority`.
pub const PRIORITY: AliasTable =
    AliasTable::new(&[("batch", "BATCH"), ("interactive", "INTERACTIVE")]);

/// Spellings for `sourceFormat` and `destinationFormat`.
pub const SOURCE_FORMAT: AliasTable = AliasTable::new(&[
    ("csv", "CSV"),
    ("json", "NEWLINE_DELIMITED_JSON"),
    ("newline_delimited_json", "NEWLINE_DELIMITED_JSON"),
    ("avro", "AVRO"),
    ("datastore", "DATASTORE_BACKUP"),
    ("datastore_backup", "DATASTORE_BACKUP"),
]);

const FORMAT_BY_EXTENSION: [(&str, &str); 4] = [
    (".csv", "CSV"),
    (".json", "NEWLINE_DELIMITED_JSON"),
    (".avro", "AVRO"),
    (".backup_info", "DATASTORE_BACKUP"),
];

/// Returns the data format for a load or extract job.
///
/// An explicit `format` wins. Otherwise the format is inferred from the
/// extension of `path`, if any.
///
/// # Example
/// ```
/// # use google_cloud_bigquery::jobs::source_format;
/// assert_eq!(source_format(None, Some("json")).as_deref(), Some("NEWLINE_DELIMITED_JSON"));
/// assert_eq!(source_format(Some("gs://bucket/data.avro"), None).as_deref(), Some("AVRO"));
/// assert_eq!(source_format(Some("gs://bucket/data"), None), None);
/// ```
pub fn source_format(path: Option<&str>, format: Option<&str>) -> Option<String> {
    if let Some(f) = format.map(str::trim).filter(|f| !f.is_empty()) {
        return Some(SOURCE_FORMAT.canonicalize(f));
    }
    let path = path?;
    FORMAT_BY_EXTENSION
        .iter()
        .find(|(ext, _)| path.ends_with(ext))
        .map(|(_, f)| f.to_string())
}

fn canonical(table: &AliasTable, value: &Option<String>) -> Option<String> {
    value.as_deref().map(|v| table.canonicalize(v))
}

fn require_table(name: &str, table: &TableReference) -> Result<()> {
    if table.table_id.is_empty() || table.dataset_id.is_empty() {
        return Err(Error::validation(format!(
            "the {name} table requires a dataset id and a table id, got {table:?}"
        )));
    }
    Ok(())
}

fn require_uris(uris: &[String]) -> Result<()> {
    if uris.is_empty() {
        return Err(Error::validation("at least one Cloud Storage URI is required"));
    }
    Ok(())
}

/// Options for [query_job].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryJobOptions {
    /// `batch` or `interactive`.
    pub priority: Option<String>,
    pub cache: Option<bool>,
    /// The table receiving the results.
    pub table: Option<TableReference>,
    pub create: Option<String>,
    pub write: Option<String>,
    pub large_results: Option<bool>,
    pub flatten: Option<bool>,
    /// The dataset for unqualified table names in the query.
    pub dataset: Option<DatasetReference>,
}

/// Creates an asynchronous query job.
pub fn query_job(query: &str, options: &QueryJobOptions) -> Result<Job> {
    if query.trim().is_empty() {
        return Err(Error::validation("the query text is empty"));
    }
    let query = JobConfigurationQuery {
        query: query.to_string(),
        destination_table: options.table.clone(),
        create_disposition: canonical(&CREATE_DISPOSITION, &options.create),
        write_disposition: canonical(&WRITE_DISPOSITION, &options.write),
        priority: canonical(&PRIORITY, &options.priority),
        use_query_cache: options.cache,
        allow_large_results: options.large_results,
        flatten_results: options.flatten,
        default_dataset: options.dataset.clone(),
    };
    Ok(with_configuration(JobConfiguration {
        query: Some(query),
        ..Default::default()
    }))
}

/// Options for [query_request].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryOptions {
    /// The maximum number of rows in the first page of results.
    pub max: Option<u32>,
    /// The dataset for unqualified table names in the query.
    pub dataset: Option<String>,
    /// The project of `dataset`, defaults to the client project.
    pub project: Option<String>,
    /// How long to wait for the query to complete, in milliseconds.
    pub timeout_ms: Option<u32>,
    pub dryrun: Option<bool>,
    pub cache: Option<bool>,
}

/// Creates the body of a synchronous query for `project`.
pub fn query_request(project: &str, query: &str, options: &QueryOptions) -> Result<QueryRequest> {
    if query.trim().is_empty() {
        return Err(Error::validation("the query text is empty"));
    }
    let default_dataset = options.dataset.as_ref().map(|d| DatasetReference {
        project_id: options
            .project
            .clone()
            .unwrap_or_else(|| project.to_string()),
        dataset_id: d.clone(),
    });
    Ok(QueryRequest {
        kind: "bigquery#queryRequest".to_string(),
        query: query.to_string(),
        max_results: options.max,
        default_dataset,
        timeout_ms: options.timeout_ms,
        dry_run: options.dryrun,
        use_query_cache: options.cache,
    })
}

/// Options for [copy_job].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CopyOptions {
    pub create: Option<String>,
    pub write: Option<String>,
    pub dryrun: Option<bool>,
}

/// Creates a job copying `source` into `target`.
pub fn copy_job(source: &TableReference, target: &TableReference, options: &CopyOptions) -> Result<Job> {
    require_table("source", source)?;
    require_table("destination", target)?;
    let copy = JobConfigurationTableCopy {
        source_table: source.clone(),
        destination_table: target.clone(),
        create_disposition: canonical(&CREATE_DISPOSITION, &options.create),
        write_disposition: canonical(&WRITE_DISPOSITION, &options.write),
    };
    Ok(with_configuration(JobConfiguration {
        copy: Some(copy),
        dry_run: options.dryrun,
        ..Default::default()
    }))
}

/// Options for [extract_job].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExtractOptions {
    /// `csv`, `json`, or `avro`. Inferred from the first URI when absent.
    pub format: Option<String>,
    /// `GZIP` or `NONE`.
    pub compression: Option<String>,
    pub delimiter: Option<String>,
    pub header: Option<bool>,
    pub dryrun: Option<bool>,
}

/// Creates a job exporting `table` to Cloud Storage.
pub fn extract_job<I, V>(table: &TableReference, uris: I, options: &ExtractOptions) -> Result<Job>
where
    I: IntoIterator<Item = V>,
    V: Into<String>,
{
    require_table("source", table)?;
    let destination_uris = uris.into_iter().map(Into::into).collect::<Vec<String>>();
    require_uris(&destination_uris)?;
    let destination_format = source_format(
        destination_uris.first().map(String::as_str),
        options.format.as_deref(),
    );
    let extract = JobConfigurationExtract {
        destination_uris,
        source_table: table.clone(),
        destination_format,
        compression: options.compression.clone(),
        field_delimiter: options.delimiter.clone(),
        print_header: options.header,
    };
    Ok(with_configuration(JobConfiguration {
        extract: Some(extract),
        dry_run: options.dryrun,
        ..Default::default()
    }))
}

/// Options for [load_job].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadOptions {
    pub create: Option<String>,
    pub write: Option<String>,
    /// `csv`, `json`, `avro`, or `datastore_backup`. Inferred from the first
    /// URI when absent.
    pub format: Option<String>,
    pub projection_fields: Vec<String>,
    pub jagged_rows: Option<bool>,
    pub quoted_newlines: Option<bool>,
    pub encoding: Option<String>,
    pub delimiter: Option<String>,
    pub ignore_unknown: Option<bool>,
    pub max_bad_records: Option<i32>,
    pub quote: Option<String>,
    pub schema: Option<TableSchema>,
    pub skip_leading: Option<i32>,
    pub dryrun: Option<bool>,
}

/// Creates a job loading Cloud Storage objects into `table`.
pub fn load_job<I, V>(table: &TableReference, uris: I, options: &LoadOptions) -> Result<Job>
where
    I: IntoIterator<Item = V>,
    V: Into<String>,
{
    require_table("destination", table)?;
    let source_uris = uris.into_iter().map(Into::into).collect::<Vec<String>>();
    require_uris(&source_uris)?;
    let format = source_format(
        source_uris.first().map(String::as_str),
        options.format.as_deref(),
    );
    let load = JobConfigurationLoad {
        source_uris,
        destination_table: table.clone(),
        create_disposition: canonical(&CREATE_DISPOSITION, &options.create),
        write_disposition: canonical(&WRITE_DISPOSITION, &options.write),
        source_format: format,
        projection_fields: options.projection_fields.clone(),
        allow_jagged_rows: options.jagged_rows,
        allow_quoted_newlines: options.quoted_newlines,
        encoding: options.encoding.clone(),
        field_delimiter: options.delimiter.clone(),
        ignore_unknown_values: options.ignore_unknown,
        max_bad_records: options.max_bad_records,
        quote: options.quote.clone(),
        schema: options.schema.clone(),
        skip_leading_rows: options.skip_leading,
    };
    Ok(with_configuration(JobConfiguration {
        load: Some(load),
        dry_run: options.dryrun,
        ..Default::default()
    }))
}

fn with_configuration(configuration: JobConfiguration) -> Job {
    Job {
        configuration: Some(configuration),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn table(id: &str) -> TableReference {
        TableReference::new()
            .set_project_id("p")
            .set_dataset_id("d")
            .set_table_id(id)
    }

    #[test_case("write_truncate", "WRITE_TRUNCATE")]
    #[test_case("writetruncate", "WRITE_TRUNCATE")]
    #[test_case("truncate", "WRITE_TRUNCATE")]
    #[test_case("Truncate", "WRITE_TRUNCATE")]
    #[test_case("append", "WRITE_APPEND")]
    #[test_case("writeempty", "WRITE_EMPTY")]
    #[test_case("WRITE_FUTURE_VALUE", "WRITE_FUTURE_VALUE")]
    fn write_aliases(input: &str, want: &str) -> anyhow::Result<()> {
        let options = CopyOptions {
            write: Some(input.to_string()),
            ..Default::default()
        };
        let job = copy_job(&table("src"), &table("dst"), &options)?;
        let copy = job.configuration.and_then(|c| c.copy);
        assert_eq!(copy.and_then(|c| c.write_disposition).as_deref(), Some(want));
        Ok(())
    }

    #[test_case("needed", "CREATE_IF_NEEDED")]
    #[test_case("createifneeded", "CREATE_IF_NEEDED")]
    #[test_case("never", "CREATE_NEVER")]
    fn create_aliases(input: &str, want: &str) {
        assert_eq!(CREATE_DISPOSITION.canonicalize(input), want);
    }

    #[test_case(None, Some("csv"), Some("CSV"))]
    #[test_case(None, Some("JSON"), Some("NEWLINE_DELIMITED_JSON"))]
    #[test_case(None, Some("datastore"), Some("DATASTORE_BACKUP"))]
    #[test_case(Some("gs://b/o.json"), Some("avro"), Some("AVRO"))]
    #[test_case(Some("gs://b/o.csv"), None, Some("CSV"))]
    #[test_case(Some("gs://b/o.json"), None, Some("NEWLINE_DELIMITED_JSON"))]
    #[test_case(Some("gs://b/o.backup_info"), None, Some("DATASTORE_BACKUP"))]
    #[test_case(Some("gs://b/o.parquet"), None, None)]
    #[test_case(None, None, None)]
    #[test_case(Some("gs://b/o.avro"), Some(""), Some("AVRO"))]
    #[test_case(Some("gs://b/o.csv"), Some("  "), Some("CSV"))]
    #[test_case(None, Some(""), None)]
    fn formats(path: Option<&str>, format: Option<&str>, want: Option<&str>) {
        assert_eq!(source_format(path, format).as_deref(), want);
    }

    #[test]
    fn query_job_config() -> anyhow::Result<()> {
        let options = QueryJobOptions {
            priority: Some("batch".into()),
            cache: Some(false),
            table: Some(table("results")),
            create: Some("never".into()),
            write: Some("append".into()),
            ..Default::default()
        };
        let job = query_job("SELECT 1", &options)?;
        let got = serde_json::to_value(&job)?;
        let want = serde_json::json!({"configuration": {"query": {
            "query": "SELECT 1",
            "destinationTable": {"projectId": "p", "datasetId": "d", "tableId": "results"},
            "createDisposition": "CREATE_NEVER",
            "writeDisposition": "WRITE_APPEND",
            "priority": "BATCH",
            "useQueryCache": false
        }}});
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn query_job_empty() {
        let got = query_job("  ", &QueryJobOptions::default());
        assert!(matches!(&got, Err(e) if e.is_validation()), "{got:?}");
    }

    #[test]
    fn query_request_defaults() -> anyhow::Result<()> {
        let options = QueryOptions {
            dataset: Some("d".into()),
            timeout_ms: Some(10_000),
            ..Default::default()
        };
        let got = query_request("p", "SELECT 1", &options)?;
        assert_eq!(got.kind, "bigquery#queryRequest");
        assert_eq!(
            got.default_dataset,
            Some(DatasetReference::new().set_project_id("p").set_dataset_id("d"))
        );
        assert_eq!(got.timeout_ms, Some(10_000));

        let options = QueryOptions {
            dataset: Some("d".into()),
            project: Some("other".into()),
            ..Default::default()
        };
        let got = query_request("p", "SELECT 1", &options)?;
        assert_eq!(
            got.default_dataset.map(|d| d.project_id).as_deref(),
            Some("other")
        );
        Ok(())
    }

    #[test]
    fn load_job_infers_format() -> anyhow::Result<()> {
        let options = LoadOptions {
            skip_leading: Some(1),
            projection_fields: vec!["name".into()],
            dryrun: Some(true),
            ..Default::default()
        };
        let job = load_job(&table("t"), ["gs://b/a.csv", "gs://b/b.json"], &options)?;
        let config = job.configuration.unwrap_or_default();
        assert_eq!(config.dry_run, Some(true));
        let load = config.load.unwrap_or_default();
        assert_eq!(load.source_format.as_deref(), Some("CSV"));
        assert_eq!(load.source_uris.len(), 2);
        assert_eq!(load.skip_leading_rows, Some(1));
        assert_eq!(load.projection_fields, vec!["name"]);
        Ok(())
    }

    #[test]
    fn load_job_requires_uris() {
        let got = load_job(&table("t"), Vec::<String>::new(), &LoadOptions::default());
        assert!(matches!(&got, Err(e) if e.is_validation()), "{got:?}");
    }

    #[test]
    fn extract_job_format() -> anyhow::Result<()> {
        let options = ExtractOptions {
            compression: Some("GZIP".into()),
            header: Some(false),
            ..Default::default()
        };
        let job = extract_job(&table("t"), ["gs://b/out.json"], &options)?;
        let extract = job.configuration.and_then(|c| c.extract).unwrap_or_default();
        assert_eq!(extract.destination_format.as_deref(), Some("NEWLINE_DELIMITED_JSON"));
        assert_eq!(extract.compression.as_deref(), Some("GZIP"));
        assert_eq!(extract.print_header, Some(false));
        Ok(())
    }

    #[test]
    fn copy_job_requires_tables() {
        let got = copy_job(&TableReference::new(), &table("dst"), &CopyOptions::default());
        assert!(matches!(&got, Err(e) if e.is_validation()), "{got:?}");
    }
}
