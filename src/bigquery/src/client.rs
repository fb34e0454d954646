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

use crate::builder::big_query as builders;
use crate::jobs::{CopyOptions, ExtractOptions, LoadOptions, QueryJobOptions, QueryOptions};
use crate::model;
use crate::rows::{InsertOptions, Row};
use crate::{Result, table_ref::table_ref_from_str};
use std::sync::Arc;

/// Implements a client for the BigQuery API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use google_cloud_bigquery::client::BigQuery;
/// let client = BigQuery::builder("my-project").build().await?;
/// // use `client` to make requests to BigQuery.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Configuration
///
/// To configure `BigQuery` use the `with_*` methods in the type returned
/// by [builder()][BigQuery::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://bigquery.googleapis.com`).
/// * [with_credentials()]: by default this client uses
///   [Application Default Credentials]. Applications using custom
///   authentication may need to override this default.
///
/// # Pooling and Cloning
///
/// `BigQuery` holds a connection pool internally, it is advised to
/// create one and then reuse it.  You do not need to wrap `BigQuery` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
///
/// [with_endpoint()]: super::builder::big_query::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::big_query::ClientBuilder::with_credentials
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
#[derive(Clone, Debug)]
pub struct BigQuery {
    inner: Arc<dyn super::stub::dynamic::BigQuery>,
    project: String,
    issuer: Option<String>,
}

impl BigQuery {
    /// Returns a builder for [BigQuery] bound to `project`.
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_cloud_bigquery::client::BigQuery;
    /// let client = BigQuery::builder("my-project").build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder<P: Into<String>>(project: P) -> super::builder::big_query::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::big_query::client::Factory {
            project: project.into(),
        })
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<P, T>(project: P, stub: T) -> Self
    where
        P: Into<String>,
        T: super::stub::BigQuery + 'static,
    {
        Self {
            inner: Arc::new(stub),
            project: project.into(),
            issuer: None,
        }
    }

    pub(crate) async fn new(
        project: String,
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let service = gax::config::ServiceDefaults::new(crate::DEFAULT_HOST);
        let transport = super::transport::BigQuery::new(config, service).await?;
        let issuer = transport.credentials().issuer();
        tracing::debug!(project = %project, "created BigQuery client");
        Ok(Self {
            inner: Arc::new(transport),
            project,
            issuer,
        })
    }

    /// The project used by default in all requests.
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Parses a table name in the `[[project:]dataset.]table` notation.
    ///
    /// A missing project defaults to the client project, a missing dataset
    /// defaults to `dataset_id`.
    pub fn table_ref(&self, value: &str, dataset_id: &str) -> Result<model::TableReference> {
        let default = model::TableReference::new()
            .set_project_id(&self.project)
            .set_dataset_id(dataset_id);
        table_ref_from_str(value, &default)
    }

    /// The access rules for a new dataset, mirroring the defaults assigned by
    /// the service.
    ///
    /// Project owners, writers, and readers get the matching role. The
    /// principal for the client credentials, if known, is also an owner.
    pub fn default_access_rules(&self) -> Vec<model::Access> {
        let mut rules = vec![
            model::Access::new()
                .set_role("OWNER")
                .set_special_group("projectOwners"),
            model::Access::new()
                .set_role("WRITER")
                .set_special_group("projectWriters"),
            model::Access::new()
                .set_role("READER")
                .set_special_group("projectReaders"),
        ];
        if let Some(issuer) = &self.issuer {
            rules.push(
                model::Access::new()
                    .set_role("OWNER")
                    .set_user_by_email(issuer.clone()),
            );
        }
        rules
    }

    /// Lists the datasets in the client project.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_bigquery::client::BigQuery;
    /// async fn sample(client: &BigQuery) -> google_cloud_bigquery::Result<()> {
    ///     let mut items = client.list_datasets().set_max_results(50).by_item();
    ///     while let Some(dataset) = items.next().await {
    ///         let dataset = dataset?;
    ///         println!("{:?}", dataset.dataset_reference);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn list_datasets(&self) -> builders::ListDatasets {
        builders::ListDatasets::new(self.inner.clone()).with_request(model::ListDatasetsRequest {
            project_id: self.project.clone(),
            ..Default::default()
        })
    }

    /// Gets a dataset in the client project.
    pub fn get_dataset<D: Into<String>>(&self, dataset_id: D) -> builders::GetDataset {
        builders::GetDataset::new(self.inner.clone()).with_request(model::GetDatasetRequest {
            project_id: self.project.clone(),
            dataset_id: dataset_id.into(),
        })
    }

    /// Creates a dataset in the client project.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_bigquery::client::BigQuery;
    /// async fn sample(client: &BigQuery) -> google_cloud_bigquery::Result<()> {
    ///     let dataset = client
    ///         .insert_dataset("my_dataset")
    ///         .set_friendly_name("My Dataset")
    ///         .set_access(client.default_access_rules())
    ///         .send()
    ///         .await?;
    ///     println!("{dataset:?}");
    ///     Ok(())
    /// }
    /// ```
    pub fn insert_dataset<D: Into<String>>(&self, dataset_id: D) -> builders::InsertDataset {
        let dataset = model::Dataset {
            kind: Some("bigquery#dataset".to_string()),
            dataset_reference: Some(
                model::DatasetReference::new()
                    .set_project_id(&self.project)
                    .set_dataset_id(dataset_id),
            ),
            ..Default::default()
        };
        builders::InsertDataset::new(self.inner.clone()).with_request(model::InsertDatasetRequest {
            project_id: self.project.clone(),
            dataset,
        })
    }

    /// Updates a dataset, only the fields set in the builder change.
    pub fn patch_dataset<D: Into<String>>(&self, dataset_id: D) -> builders::PatchDataset {
        builders::PatchDataset::new(self.inner.clone()).with_request(model::PatchDatasetRequest {
            project_id: self.project.clone(),
            dataset_id: dataset_id.into(),
            dataset: model::Dataset::default(),
        })
    }

    /// Deletes a dataset.
    ///
    /// Use [set_delete_contents()][builders::DeleteDataset::set_delete_contents]
    /// to delete a dataset with tables.
    pub fn delete_dataset<D: Into<String>>(&self, dataset_id: D) -> builders::DeleteDataset {
        builders::DeleteDataset::new(self.inner.clone()).with_request(model::DeleteDatasetRequest {
            project_id: self.project.clone(),
            dataset_id: dataset_id.into(),
            delete_contents: None,
        })
    }

    /// Lists the tables in a dataset.
    pub fn list_tables<D: Into<String>>(&self, dataset_id: D) -> builders::ListTables {
        builders::ListTables::new(self.inner.clone()).with_request(model::ListTablesRequest {
            project_id: self.project.clone(),
            dataset_id: dataset_id.into(),
            ..Default::default()
        })
    }

    /// Gets a table in the client project.
    pub fn get_table<D, T>(&self, dataset_id: D, table_id: T) -> builders::GetTable
    where
        D: Into<String>,
        T: Into<String>,
    {
        self.get_project_table(self.project.clone(), dataset_id, table_id)
    }

    /// Gets a table in any project.
    pub fn get_project_table<P, D, T>(&self, project_id: P, dataset_id: D, table_id: T) -> builders::GetTable
    where
        P: Into<String>,
        D: Into<String>,
        T: Into<String>,
    {
        builders::GetTable::new(self.inner.clone()).with_request(model::GetTableRequest {
            project_id: project_id.into(),
            dataset_id: dataset_id.into(),
            table_id: table_id.into(),
        })
    }

    /// Creates a table, or a view if the builder sets a query.
    pub fn insert_table<D, T>(&self, dataset_id: D, table_id: T) -> builders::InsertTable
    where
        D: Into<String>,
        T: Into<String>,
    {
        let dataset_id = dataset_id.into();
        let table = model::Table {
            table_reference: Some(
                model::TableReference::new()
                    .set_project_id(&self.project)
                    .set_dataset_id(&dataset_id)
                    .set_table_id(table_id),
            ),
            ..Default::default()
        };
        builders::InsertTable::new(self.inner.clone()).with_request(model::InsertTableRequest {
            project_id: self.project.clone(),
            dataset_id,
            table,
        })
    }

    /// Updates a table, only the fields set in the builder change.
    pub fn patch_table<D, T>(&self, dataset_id: D, table_id: T) -> builders::PatchTable
    where
        D: Into<String>,
        T: Into<String>,
    {
        builders::PatchTable::new(self.inner.clone()).with_request(model::PatchTableRequest {
            project_id: self.project.clone(),
            dataset_id: dataset_id.into(),
            table_id: table_id.into(),
            table: model::Table::default(),
        })
    }

    /// Deletes a table or view.
    pub fn delete_table<D, T>(&self, dataset_id: D, table_id: T) -> builders::DeleteTable
    where
        D: Into<String>,
        T: Into<String>,
    {
        builders::DeleteTable::new(self.inner.clone()).with_request(model::DeleteTableRequest {
            project_id: self.project.clone(),
            dataset_id: dataset_id.into(),
            table_id: table_id.into(),
        })
    }

    /// Reads the rows in a table.
    pub fn list_tabledata<D, T>(&self, dataset_id: D, table_id: T) -> builders::ListTableData
    where
        D: Into<String>,
        T: Into<String>,
    {
        builders::ListTableData::new(self.inner.clone()).with_request(model::ListTableDataRequest {
            project_id: self.project.clone(),
            dataset_id: dataset_id.into(),
            table_id: table_id.into(),
            ..Default::default()
        })
    }

    /// Streams rows into a table.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_bigquery::client::BigQuery;
    /// async fn sample(client: &BigQuery) -> google_cloud_bigquery::Result<()> {
    ///     let row = serde_json::json!({"name": "Alice", "age": 30});
    ///     let row = row.as_object().cloned().unwrap_or_default();
    ///     let response = client
    ///         .insert_tabledata("my_dataset", "my_table", [row])
    ///         .set_skip_invalid_rows(true)
    ///         .send()
    ///         .await?;
    ///     for e in response.insert_errors {
    ///         println!("row {} failed: {:?}", e.index, e.errors);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn insert_tabledata<D, T, I>(&self, dataset_id: D, table_id: T, rows: I) -> builders::InsertTableData
    where
        D: Into<String>,
        T: Into<String>,
        I: IntoIterator<Item = Row>,
    {
        let body = crate::rows::insert_all_body(rows, &InsertOptions::default());
        builders::InsertTableData::new(self.inner.clone()).with_request(model::InsertAllRequest {
            project_id: self.project.clone(),
            dataset_id: dataset_id.into(),
            table_id: table_id.into(),
            body,
        })
    }

    /// Lists the jobs in the client project, with their full configuration.
    pub fn list_jobs(&self) -> builders::ListJobs {
        builders::ListJobs::new(self.inner.clone()).with_request(model::ListJobsRequest {
            project_id: self.project.clone(),
            projection: Some("full".to_string()),
            ..Default::default()
        })
    }

    /// Gets a job.
    pub fn get_job<J: Into<String>>(&self, job_id: J) -> builders::GetJob {
        builders::GetJob::new(self.inner.clone()).with_request(model::GetJobRequest {
            project_id: self.project.clone(),
            job_id: job_id.into(),
        })
    }

    /// Starts a job with the given configuration.
    pub fn insert_job(&self, configuration: model::JobConfiguration) -> builders::InsertJob {
        let job = model::Job {
            configuration: Some(configuration),
            ..Default::default()
        };
        self.job_builder(job)
    }

    /// Starts a query job, the results are read with [job_query_results()][Self::job_query_results].
    ///
    /// # Example
    /// ```
    /// # use google_cloud_bigquery::client::BigQuery;
    /// # use google_cloud_bigquery::jobs::QueryJobOptions;
    /// async fn sample(client: &BigQuery) -> google_cloud_bigquery::Result<()> {
    ///     let options = QueryJobOptions {
    ///         priority: Some("batch".into()),
    ///         ..Default::default()
    ///     };
    ///     let job = client
    ///         .query_job("SELECT name FROM my_dataset.my_table", &options)?
    ///         .send()
    ///         .await?;
    ///     println!("{:?}", job.job_reference);
    ///     Ok(())
    /// }
    /// ```
    pub fn query_job(&self, query: &str, options: &QueryJobOptions) -> Result<builders::InsertJob> {
        let job = crate::jobs::query_job(query, options)?;
        Ok(self.job_builder(job))
    }

    /// Runs a query and waits, up to a timeout, for the results.
    pub fn query(&self, query: &str, options: &QueryOptions) -> Result<builders::Query> {
        let query_request = crate::jobs::query_request(&self.project, query, options)?;
        Ok(builders::Query::new(self.inner.clone()).with_request(model::PostQueryRequest {
            project_id: self.project.clone(),
            query_request,
        }))
    }

    /// Reads the results of a query job.
    pub fn job_query_results<J: Into<String>>(&self, job_id: J) -> builders::GetQueryResults {
        builders::GetQueryResults::new(self.inner.clone()).with_request(
            model::GetQueryResultsRequest {
                project_id: self.project.clone(),
                job_id: job_id.into(),
                ..Default::default()
            },
        )
    }

    /// Starts a job copying `source` into `target`.
    pub fn copy_table(
        &self,
        source: &model::TableReference,
        target: &model::TableReference,
        options: &CopyOptions,
    ) -> Result<builders::InsertJob> {
        let job = crate::jobs::copy_job(source, target, options)?;
        Ok(self.job_builder(job))
    }

    /// Starts a job exporting `table` to Cloud Storage.
    pub fn extract_table<I, V>(
        &self,
        table: &model::TableReference,
        uris: I,
        options: &ExtractOptions,
    ) -> Result<builders::InsertJob>
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let job = crate::jobs::extract_job(table, uris, options)?;
        Ok(self.job_builder(job))
    }

    /// Starts a job loading Cloud Storage objects into `table`.
    pub fn load_table<I, V>(
        &self,
        table: &model::TableReference,
        uris: I,
        options: &LoadOptions,
    ) -> Result<builders::InsertJob>
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let job = crate::jobs::load_job(table, uris, options)?;
        Ok(self.job_builder(job))
    }

    fn job_builder(&self, job: model::Job) -> builders::InsertJob {
        builders::InsertJob::new(self.inner.clone()).with_request(model::InsertJobRequest {
            project_id: self.project.clone(),
            job,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::Error;
    use gax::error::rpc::{Code, Status};
    use gax::options::RequestOptions;
    use pretty_assertions::assert_eq;

    mockall::mock! {
        #[derive(Debug)]
        BigQuery {}
        impl crate::stub::BigQuery for BigQuery {
            async fn list_datasets(&self, req: model::ListDatasetsRequest, options: RequestOptions) -> Result<model::DatasetList>;
            async fn insert_dataset(&self, req: model::InsertDatasetRequest, options: RequestOptions) -> Result<model::Dataset>;
            async fn delete_dataset(&self, req: model::DeleteDatasetRequest, options: RequestOptions) -> Result<()>;
            async fn get_table(&self, req: model::GetTableRequest, options: RequestOptions) -> Result<model::Table>;
            async fn list_tabledata(&self, req: model::ListTableDataRequest, options: RequestOptions) -> Result<model::TableDataList>;
            async fn insert_tabledata(&self, req: model::InsertAllRequest, options: RequestOptions) -> Result<model::TableDataInsertAllResponse>;
            async fn list_jobs(&self, req: model::ListJobsRequest, options: RequestOptions) -> Result<model::JobList>;
            async fn insert_job(&self, req: model::InsertJobRequest, options: RequestOptions) -> Result<model::Job>;
        }
    }

    fn dataset(id: &str) -> model::Dataset {
        model::Dataset {
            dataset_reference: Some(model::DatasetReference::new().set_project_id("p").set_dataset_id(id)),
            ..Default::default()
        }
    }

    fn names(datasets: &[model::Dataset]) -> Vec<String> {
        datasets
            .iter()
            .filter_map(|d| d.dataset_reference.as_ref())
            .map(|r| r.dataset_id.clone())
            .collect()
    }

    #[tokio::test]
    async fn list_datasets_by_item() -> anyhow::Result<()> {
        let mut mock = MockBigQuery::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_list_datasets()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, o| r.project_id == "p" && r.page_token.is_empty() && o.idempotent().is_none())
            .returning(|_, _| {
                Ok(model::DatasetList {
                    datasets: vec![dataset("a"), dataset("b")],
                    next_page_token: "t1".to_string(),
                    ..Default::default()
                })
            });
        mock.expect_list_datasets()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.page_token == "t1")
            .returning(|_, _| {
                Ok(model::DatasetList {
                    datasets: vec![dataset("c")],
                    ..Default::default()
                })
            });

        let client = BigQuery::from_stub("p", mock);
        let mut items = client.list_datasets().by_item();
        let mut got = Vec::new();
        while let Some(item) = items.next().await {
            got.push(item?);
        }
        assert_eq!(names(&got), vec!["a", "b", "c"]);
        Ok(())
    }

    #[tokio::test]
    async fn list_datasets_error_after_items() -> anyhow::Result<()> {
        let mut mock = MockBigQuery::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_list_datasets()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Ok(model::DatasetList {
                    datasets: vec![dataset("a")],
                    next_page_token: "t1".to_string(),
                    ..Default::default()
                })
            });
        mock.expect_list_datasets()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Err(Error::service(
                    Status::default().set_code(Code::PermissionDenied).set_message("denied"),
                ))
            });

        let client = BigQuery::from_stub("p", mock);
        let mut items = client.list_datasets().by_item();
        let first = items.next().await.transpose()?;
        assert_eq!(first.map(|d| names(&[d])), Some(vec!["a".to_string()]));
        let second = items.next().await;
        assert!(
            matches!(&second, Some(Err(e)) if e.code() == Some(Code::PermissionDenied)),
            "{second:?}"
        );
        assert!(items.next().await.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn list_tabledata_pages() -> anyhow::Result<()> {
        let mut mock = MockBigQuery::new();
        mock.expect_list_tabledata()
            .times(2)
            .returning(|r, _| {
                let (rows, token) = match r.page_token.as_str() {
                    "" => (2, "t1"),
                    _ => (1, ""),
                };
                Ok(model::TableDataList {
                    rows: vec![model::TableRow::default(); rows],
                    page_token: token.to_string(),
                    ..Default::default()
                })
            });

        let client = BigQuery::from_stub("p", mock);
        let mut pages = client
            .list_tabledata("d", "t")
            .set_start_index(10)
            .by_page();
        let mut counts = Vec::new();
        while let Some(page) = pages.next().await {
            counts.push(page?.rows.len());
        }
        assert_eq!(counts, vec![2, 1]);
        Ok(())
    }

    #[tokio::test]
    async fn insert_dataset() -> anyhow::Result<()> {
        let mut mock = MockBigQuery::new();
        mock.expect_insert_dataset()
            .withf(|r, o| {
                r.project_id == "p"
                    && r.dataset.kind.as_deref() == Some("bigquery#dataset")
                    && r.dataset.friendly_name.as_deref() == Some("Sales")
                    && r.dataset.access.len() == 4
                    && o.idempotent().is_none()
            })
            .returning(|r, _| Ok(r.dataset));

        let client = BigQuery::from_stub("p", mock);
        let got = client
            .insert_dataset("sales")
            .set_friendly_name("Sales")
            .set_access(client.default_access_rules())
            .send()
            .await?;
        assert_eq!(
            got.dataset_reference,
            Some(model::DatasetReference::new().set_project_id("p").set_dataset_id("sales"))
        );
        Ok(())
    }

    #[tokio::test]
    async fn delete_dataset_force() -> anyhow::Result<()> {
        let mut mock = MockBigQuery::new();
        mock.expect_delete_dataset()
            .withf(|r, _| r.dataset_id == "d" && r.delete_contents == Some(true))
            .returning(|_, _| Ok(()));
        let client = BigQuery::from_stub("p", mock);
        client.delete_dataset("d").set_delete_contents(true).send().await?;
        Ok(())
    }

    #[tokio::test]
    async fn get_project_table() -> anyhow::Result<()> {
        let mut mock = MockBigQuery::new();
        mock.expect_get_table()
            .withf(|r, _| r.project_id == "other" && r.dataset_id == "d" && r.table_id == "t")
            .returning(|_, _| Ok(model::Table::default()));
        let client = BigQuery::from_stub("p", mock);
        client.get_project_table("other", "d", "t").send().await?;
        Ok(())
    }

    #[tokio::test]
    async fn insert_tabledata() -> anyhow::Result<()> {
        let mut mock = MockBigQuery::new();
        mock.expect_insert_tabledata()
            .withf(|r, o| {
                r.body.kind == "bigquery#tableDataInsertAllRequest"
                    && r.body.rows.len() == 2
                    && r.body.ignore_unknown_values == Some(true)
                    && o.idempotent().is_none()
            })
            .returning(|_, _| Ok(model::TableDataInsertAllResponse::default()));
        let client = BigQuery::from_stub("p", mock);
        let rows = [
            serde_json::json!({"name": "a"}),
            serde_json::json!({"name": "b"}),
        ]
        .into_iter()
        .filter_map(|v| v.as_object().cloned());
        let got = client
            .insert_tabledata("d", "t", rows)
            .set_ignore_unknown_values(true)
            .send()
            .await?;
        assert!(got.insert_errors.is_empty(), "{got:?}");
        Ok(())
    }

    #[tokio::test]
    async fn list_jobs_full_projection() -> anyhow::Result<()> {
        let mut mock = MockBigQuery::new();
        mock.expect_list_jobs()
            .withf(|r, _| {
                r.projection.as_deref() == Some("full")
                    && r.state_filter == vec!["done".to_string()]
                    && r.all_users == Some(true)
            })
            .returning(|_, _| Ok(model::JobList::default()));
        let client = BigQuery::from_stub("p", mock);
        let got = client
            .list_jobs()
            .set_all_users(true)
            .set_state_filter(["done"])
            .send()
            .await?;
        assert!(got.jobs.is_empty(), "{got:?}");
        Ok(())
    }

    #[tokio::test]
    async fn copy_table_aliases() -> anyhow::Result<()> {
        let mut mock = MockBigQuery::new();
        mock.expect_insert_job()
            .withf(|r, o| {
                let copy = r.job.configuration.as_ref().and_then(|c| c.copy.as_ref());
                copy.and_then(|c| c.write_disposition.as_deref()) == Some("WRITE_TRUNCATE")
                    && copy.and_then(|c| c.create_disposition.as_deref()) == Some("CREATE_NEVER")
                    && o.idempotent().is_none()
            })
            .returning(|r, _| Ok(r.job));
        let client = BigQuery::from_stub("p", mock);
        let source = client.table_ref("src", "d")?;
        let target = client.table_ref("other:d2.dst", "d")?;
        let options = CopyOptions {
            write: Some("truncate".into()),
            create: Some("never".into()),
            ..Default::default()
        };
        let job = client.copy_table(&source, &target, &options)?.send().await?;
        let copy = job.configuration.and_then(|c| c.copy).unwrap_or_default();
        assert_eq!(copy.destination_table.project_id, "other");
        assert_eq!(copy.source_table.project_id, "p");
        Ok(())
    }

    #[test]
    fn load_table_validation() {
        let client = BigQuery::from_stub("p", MockBigQuery::new());
        let table = model::TableReference::new().set_table_id("t");
        let got = client.load_table(&table, ["gs://b/o.csv"], &LoadOptions::default());
        assert!(matches!(&got, Err(e) if e.is_validation()), "{got:?}");
    }

    #[test]
    fn default_access_rules() {
        let client = BigQuery::from_stub("p", MockBigQuery::new());
        let got = client.default_access_rules();
        let groups = got
            .iter()
            .map(|a| (a.role.as_deref(), a.special_group.as_deref()))
            .collect::<Vec<_>>();
        assert_eq!(
            groups,
            vec![
                (Some("OWNER"), Some("projectOwners")),
                (Some("WRITER"), Some("projectWriters")),
                (Some("READER"), Some("projectReaders")),
            ]
        );
        assert!(got.iter().all(|a| a.user_by_email.is_none()), "{got:?}");
    }

    #[test]
    fn default_access_rules_with_issuer() {
        let mut client = BigQuery::from_stub("p", MockBigQuery::new());
        client.issuer = Some("sa@p.iam.gserviceaccount.com".to_string());
        let got = client.default_access_rules();
        assert_eq!(got.len(), 4, "{got:?}");
        assert_eq!(got[3].role.as_deref(), Some("OWNER"));
        assert_eq!(
            got[3].user_by_email.as_deref(),
            Some("sa@p.iam.gserviceaccount.com")
        );
    }

    #[tokio::test]
    async fn unimplemented_stub_methods_panic() {
        let client = BigQuery::from_stub("p", MockBigQuery::new());
        let got = tokio::spawn(async move { client.get_job("j").send().await }).await;
        assert!(matches!(&got, Err(e) if e.is_panic()), "{got:?}");
    }
}
