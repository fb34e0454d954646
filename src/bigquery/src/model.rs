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

//! The BigQuery v2 resources and the requests sent by [BigQuery][crate::client::BigQuery].
//!
//! The resources use the JSON representation of the BigQuery REST API. Absent
//! fields are omitted from the payload. 64-bit integers are encoded as
//! strings.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

/// Identifies a dataset.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DatasetReference {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub project_id: String,
    pub dataset_id: String,
}

impl DatasetReference {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    pub fn set_dataset_id<T: Into<String>>(mut self, v: T) -> Self {
        self.dataset_id = v.into();
        self
    }
}

/// Identifies a table.
///
/// Use [table_ref_from_str][crate::table_ref::table_ref_from_str] to parse the
/// `project:dataset.table` notation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableReference {
    pub project_id: String,
    pub dataset_id: String,
    pub table_id: String,
}

impl TableReference {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    pub fn set_dataset_id<T: Into<String>>(mut self, v: T) -> Self {
        self.dataset_id = v.into();
        self
    }

    pub fn set_table_id<T: Into<String>>(mut self, v: T) -> Self {
        self.table_id = v.into();
        self
    }
}

/// Identifies a job.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobReference {
    pub project_id: String,
    pub job_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// One access control rule for a dataset.
///
/// Exactly one of the grantee fields should be set.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Access {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_by_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_by_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<TableReference>,
}

impl Access {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_role<T: Into<String>>(mut self, v: T) -> Self {
        self.role = Some(v.into());
        self
    }

    pub fn set_special_group<T: Into<String>>(mut self, v: T) -> Self {
        self.special_group = Some(v.into());
        self
    }

    pub fn set_user_by_email<T: Into<String>>(mut self, v: T) -> Self {
        self.user_by_email = Some(v.into());
        self
    }

    pub fn set_group_by_email<T: Into<String>>(mut self, v: T) -> Self {
        self.group_by_email = Some(v.into());
        self
    }

    pub fn set_domain<T: Into<String>>(mut self, v: T) -> Self {
        self.domain = Some(v.into());
        self
    }

    pub fn set_view<T: Into<TableReference>>(mut self, v: T) -> Self {
        self.view = Some(v.into());
        self
    }
}

/// A dataset, a container of tables and views.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_reference: Option<DatasetReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_table_expiration_ms: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub access: Vec<Access>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<i64>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_time: Option<i64>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_friendly_name<T: Into<String>>(mut self, v: T) -> Self {
        self.friendly_name = Some(v.into());
        self
    }

    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    pub fn set_default_table_expiration_ms(mut self, v: i64) -> Self {
        self.default_table_expiration_ms = Some(v);
        self
    }

    pub fn set_access<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Access>,
    {
        self.access = v.into_iter().map(|v| v.into()).collect();
        self
    }

    pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }
}

/// A page of datasets.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DatasetList {
    pub kind: String,
    pub etag: String,
    pub next_page_token: String,
    pub datasets: Vec<Dataset>,
}

impl gax::paginator::PageableResponse for DatasetList {
    type PageItem = Dataset;

    fn items(self) -> Vec<Self::PageItem> {
        self.datasets
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

/// A column in a table schema.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableFieldSchema {
    pub name: String,
    /// The column type, for example `STRING`, `INTEGER`, or `RECORD`.
    pub r#type: String,
    /// One of `NULLABLE`, `REQUIRED`, or `REPEATED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The nested columns of a `RECORD`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<TableFieldSchema>,
}

impl TableFieldSchema {
    pub fn new<N: Into<String>, T: Into<String>>(name: N, r#type: T) -> Self {
        Self {
            name: name.into(),
            r#type: r#type.into(),
            ..Default::default()
        }
    }

    pub fn set_mode<T: Into<String>>(mut self, v: T) -> Self {
        self.mode = Some(v.into());
        self
    }

    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    pub fn set_fields<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<TableFieldSchema>,
    {
        self.fields = v.into_iter().map(|v| v.into()).collect();
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableSchema {
    pub fields: Vec<TableFieldSchema>,
}

impl TableSchema {
    pub fn new<T, V>(fields: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<TableFieldSchema>,
    {
        Self {
            fields: fields.into_iter().map(|v| v.into()).collect(),
        }
    }
}

/// The definition of a logical view.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewDefinition {
    pub query: String,
}

/// A table or view.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Table {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_reference: Option<TableReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<TableSchema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewDefinition>,
    /// `TABLE`, `VIEW`, or `EXTERNAL`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_rows: Option<u64>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_bytes: Option<i64>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<i64>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_time: Option<i64>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_friendly_name<T: Into<String>>(mut self, v: T) -> Self {
        self.friendly_name = Some(v.into());
        self
    }

    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    pub fn set_schema<T: Into<TableSchema>>(mut self, v: T) -> Self {
        self.schema = Some(v.into());
        self
    }

    /// Makes this table a view defined by `query`.
    pub fn set_view_query<T: Into<String>>(mut self, v: T) -> Self {
        self.view = Some(ViewDefinition { query: v.into() });
        self
    }
}

/// A page of tables.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableList {
    pub kind: String,
    pub etag: String,
    pub next_page_token: String,
    pub tables: Vec<Table>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_items: Option<i32>,
}

impl gax::paginator::PageableResponse for TableList {
    type PageItem = Table;

    fn items(self) -> Vec<Self::PageItem> {
        self.tables
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

/// A cell in a [TableRow].
///
/// The value is a string, a nested row, an array of cells, or null.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TableCell {
    pub v: serde_json::Value,
}

/// One row of table data.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TableRow {
    pub f: Vec<TableCell>,
}

/// A page of table data.
///
/// Unlike other list responses the continuation token is in `pageToken`.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableDataList {
    pub kind: String,
    pub etag: String,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_rows: Option<u64>,
    pub page_token: String,
    pub rows: Vec<TableRow>,
}

impl gax::paginator::PageableResponse for TableDataList {
    type PageItem = TableRow;

    fn items(self) -> Vec<Self::PageItem> {
        self.rows
    }

    fn next_page_token(&self) -> String {
        self.page_token.clone()
    }
}

/// One row in a streaming insert.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InsertRow {
    /// The idempotency token for this row.
    pub insert_id: String,
    pub json: serde_json::Map<String, serde_json::Value>,
}

/// The body of a streaming insert.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableDataInsertAllRequest {
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_invalid_rows: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_unknown_values: Option<bool>,
    pub rows: Vec<InsertRow>,
}

/// An error reported by the service inside a successful response.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ErrorProto {
    pub reason: String,
    pub location: String,
    pub debug_info: String,
    pub message: String,
}

/// The errors for one row of a streaming insert.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InsertErrors {
    /// The position of the row in the request.
    pub index: u32,
    pub errors: Vec<ErrorProto>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableDataInsertAllResponse {
    pub kind: String,
    pub insert_errors: Vec<InsertErrors>,
}

/// The configuration of a query job.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobConfigurationQuery {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_table: Option<TableReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_disposition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_disposition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_query_cache: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_large_results: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flatten_results: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_dataset: Option<DatasetReference>,
}

/// The configuration of a load job.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobConfigurationLoad {
    pub source_uris: Vec<String>,
    pub destination_table: TableReference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_disposition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_disposition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_format: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub projection_fields: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_jagged_rows: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_quoted_newlines: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_delimiter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_unknown_values: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_bad_records: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<TableSchema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_leading_rows: Option<i32>,
}

/// The configuration of a copy job.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobConfigurationTableCopy {
    pub source_table: TableReference,
    pub destination_table: TableReference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_disposition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_disposition: Option<String>,
}

/// The configuration of an extract job.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobConfigurationExtract {
    pub destination_uris: Vec<String>,
    pub source_table: TableReference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_delimiter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_header: Option<bool>,
}

/// The configuration of a job. Exactly one of the job kinds should be set.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<JobConfigurationQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load: Option<JobConfigurationLoad>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy: Option<JobConfigurationTableCopy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extract: Option<JobConfigurationExtract>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobStatus {
    /// `PENDING`, `RUNNING`, or `DONE`.
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_result: Option<ErrorProto>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorProto>,
}

#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobStatistics {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<i64>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_bytes_processed: Option<i64>,
}

/// A job: a query, load, copy, or extract operation.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Job {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_reference: Option<JobReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<JobConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<JobStatistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
}

/// A page of jobs.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobList {
    pub kind: String,
    pub etag: String,
    pub next_page_token: String,
    pub jobs: Vec<Job>,
}

impl gax::paginator::PageableResponse for JobList {
    type PageItem = Job;

    fn items(self) -> Vec<Self::PageItem> {
        self.jobs
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

/// The body of a synchronous query.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryRequest {
    pub kind: String,
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_dataset: Option<DatasetReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_query_cache: Option<bool>,
}

/// The results of a synchronous query.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryResponse {
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<TableSchema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_reference: Option<JobReference>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_rows: Option<u64>,
    pub page_token: String,
    pub rows: Vec<TableRow>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_bytes_processed: Option<i64>,
    pub job_complete: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorProto>,
    pub cache_hit: bool,
}

/// The results of a query job.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetQueryResultsResponse {
    pub kind: String,
    pub etag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<TableSchema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_reference: Option<JobReference>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_rows: Option<u64>,
    pub page_token: String,
    pub rows: Vec<TableRow>,
    pub job_complete: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorProto>,
    pub cache_hit: bool,
}

impl gax::paginator::PageableResponse for GetQueryResultsResponse {
    type PageItem = TableRow;

    fn items(self) -> Vec<Self::PageItem> {
        self.rows
    }

    fn next_page_token(&self) -> String {
        self.page_token.clone()
    }
}

// Requests sent through the stub. Path parameters and query parameters are
// fields, the body, if any, is a resource.

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListDatasetsRequest {
    pub project_id: String,
    pub all: Option<bool>,
    pub max_results: Option<u32>,
    pub page_token: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetDatasetRequest {
    pub project_id: String,
    pub dataset_id: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InsertDatasetRequest {
    pub project_id: String,
    pub dataset: Dataset,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PatchDatasetRequest {
    pub project_id: String,
    pub dataset_id: String,
    pub dataset: Dataset,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeleteDatasetRequest {
    pub project_id: String,
    pub dataset_id: String,
    /// Delete all the tables in the dataset.
    pub delete_contents: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListTablesRequest {
    pub project_id: String,
    pub dataset_id: String,
    pub max_results: Option<u32>,
    pub page_token: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetTableRequest {
    pub project_id: String,
    pub dataset_id: String,
    pub table_id: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InsertTableRequest {
    pub project_id: String,
    pub dataset_id: String,
    pub table: Table,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PatchTableRequest {
    pub project_id: String,
    pub dataset_id: String,
    pub table_id: String,
    pub table: Table,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeleteTableRequest {
    pub project_id: String,
    pub dataset_id: String,
    pub table_id: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListTableDataRequest {
    pub project_id: String,
    pub dataset_id: String,
    pub table_id: String,
    pub max_results: Option<u32>,
    pub page_token: String,
    pub start_index: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InsertAllRequest {
    pub project_id: String,
    pub dataset_id: String,
    pub table_id: String,
    pub body: TableDataInsertAllRequest,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListJobsRequest {
    pub project_id: String,
    pub all_users: Option<bool>,
    pub max_results: Option<u32>,
    pub page_token: String,
    /// `minimal` or `full`.
    pub projection: Option<String>,
    pub state_filter: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetJobRequest {
    pub project_id: String,
    pub job_id: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InsertJobRequest {
    pub project_id: String,
    pub job: Job,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PostQueryRequest {
    pub project_id: String,
    pub query_request: QueryRequest,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetQueryResultsRequest {
    pub project_id: String,
    pub job_id: String,
    pub max_results: Option<u32>,
    pub page_token: String,
    pub start_index: Option<u64>,
    pub timeout_ms: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn dataset_omits_absent_fields() -> anyhow::Result<()> {
        let dataset = Dataset::new()
            .set_friendly_name("Sales")
            .set_default_table_expiration_ms(3_600_000);
        let got = serde_json::to_value(&dataset)?;
        assert_eq!(
            got,
            json!({"friendlyName": "Sales", "defaultTableExpirationMs": "3600000"})
        );
        Ok(())
    }

    #[test]
    fn table_from_service() -> anyhow::Result<()> {
        let input = json!({
            "kind": "bigquery#table",
            "tableReference": {"projectId": "p", "datasetId": "d", "tableId": "t"},
            "schema": {"fields": [
                {"name": "name", "type": "STRING", "mode": "REQUIRED"},
                {"name": "address", "type": "RECORD", "fields": [
                    {"name": "city", "type": "STRING"}
                ]}
            ]},
            "numRows": "1234",
            "type": "TABLE",
            "unknownField": 42
        });
        let got = serde_json::from_value::<Table>(input)?;
        assert_eq!(
            got.table_reference,
            Some(TableReference::new().set_project_id("p").set_dataset_id("d").set_table_id("t"))
        );
        assert_eq!(got.num_rows, Some(1234));
        assert_eq!(got.r#type.as_deref(), Some("TABLE"));
        let schema = got.schema.unwrap_or_default();
        assert_eq!(schema.fields.len(), 2);
        assert_eq!(schema.fields[1].fields, vec![TableFieldSchema::new("city", "STRING")]);
        Ok(())
    }

    #[test]
    fn view_query() -> anyhow::Result<()> {
        let table = Table::new().set_view_query("SELECT 1");
        let got = serde_json::to_value(&table)?;
        assert_eq!(got, json!({"view": {"query": "SELECT 1"}}));
        Ok(())
    }

    #[test]
    fn table_data_tokens() -> anyhow::Result<()> {
        use gax::paginator::PageableResponse;
        let input = json!({
            "totalRows": "3",
            "pageToken": "next",
            "rows": [{"f": [{"v": "a"}, {"v": null}]}]
        });
        let got = serde_json::from_value::<TableDataList>(input)?;
        assert_eq!(got.total_rows, Some(3));
        assert_eq!(got.next_page_token(), "next");
        let rows = got.items();
        assert_eq!(rows[0].f[0].v, json!("a"));
        assert_eq!(rows[0].f[1].v, serde_json::Value::Null);
        Ok(())
    }

    #[test]
    fn job_configuration() -> anyhow::Result<()> {
        let config = JobConfiguration {
            copy: Some(JobConfigurationTableCopy {
                source_table: TableReference::new()
                    .set_project_id("p")
                    .set_dataset_id("d")
                    .set_table_id("src"),
                destination_table: TableReference::new()
                    .set_project_id("p")
                    .set_dataset_id("d")
                    .set_table_id("dst"),
                write_disposition: Some("WRITE_TRUNCATE".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let got = serde_json::to_value(&config)?;
        assert_eq!(
            got,
            json!({"copy": {
                "sourceTable": {"projectId": "p", "datasetId": "d", "tableId": "src"},
                "destinationTable": {"projectId": "p", "datasetId": "d", "tableId": "dst"},
                "writeDisposition": "WRITE_TRUNCATE"
            }})
        );
        Ok(())
    }
}
