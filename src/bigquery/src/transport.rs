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
use crate::model;
use gax::error::Error;
use gax::options::RequestOptions;
use gaxi::http::{NoBody, ReqwestClient};
use reqwest::Method;

const PATH_PREFIX: &str = "/bigquery/v2";

/// Implements [BigQuery](super::stub::BigQuery) using a [gaxi::http::ReqwestClient].
#[derive(Clone, Debug)]
pub struct BigQuery {
    inner: ReqwestClient,
}

impl BigQuery {
    pub async fn new(
        config: gaxi::options::ClientConfig,
        service: gax::config::ServiceDefaults,
    ) -> gax::client_builder::Result<Self> {
        let inner = ReqwestClient::new(config, service).await?;
        Ok(Self { inner })
    }

    /// The credentials used by this client.
    pub fn credentials(&self) -> &gaxi::options::Credentials {
        self.inner.credentials()
    }

    async fn call<I, O>(
        &self,
        rpc: &str,
        method: Method,
        path: String,
        query: Vec<(&'static str, String)>,
        body: Option<I>,
        options: RequestOptions,
    ) -> Result<O>
    where
        I: serde::Serialize,
        O: serde::de::DeserializeOwned + Default + Send + 'static,
    {
        let builder = self
            .inner
            .builder(method, format!("{PATH_PREFIX}{path}"))
            .query(&query);
        self.inner
            .execute(
                rpc,
                builder,
                body,
                options,
                &crate::info::X_GOOG_API_CLIENT_HEADER,
            )
            .await
    }
}

/// Returns `value`, or a validation error naming `field` if it is empty.
fn required<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    if value.is_empty() {
        return Err(Error::validation(format!("missing required parameter {field}")));
    }
    Ok(value)
}

fn dataset_path(project_id: &str, dataset_id: &str) -> Result<String> {
    Ok(format!(
        "/projects/{}/datasets/{}",
        required("project_id", project_id)?,
        required("dataset_id", dataset_id)?
    ))
}

fn table_path(project_id: &str, dataset_id: &str, table_id: &str) -> Result<String> {
    Ok(format!(
        "{}/tables/{}",
        dataset_path(project_id, dataset_id)?,
        required("table_id", table_id)?
    ))
}

#[derive(Default)]
struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    fn add<T: ToString>(mut self, name: &'static str, value: Option<T>) -> Self {
        if let Some(v) = value {
            self.0.push((name, v.to_string()));
        }
        self
    }

    fn add_token(self, token: &str) -> Self {
        let token = (!token.is_empty()).then_some(token);
        self.add("pageToken", token)
    }

    fn add_all<T: ToString>(mut self, name: &'static str, values: &[T]) -> Self {
        self.0
            .extend(values.iter().map(|v| (name, v.to_string())));
        self
    }
}

impl super::stub::BigQuery for BigQuery {
    async fn list_datasets(
        &self,
        req: model::ListDatasetsRequest,
        options: RequestOptions,
    ) -> Result<model::DatasetList> {
        let path = format!("/projects/{}/datasets", required("project_id", &req.project_id)?);
        let query = QueryParams::default()
            .add("all", req.all)
            .add("maxResults", req.max_results)
            .add_token(&req.page_token);
        self.call("list_datasets", Method::GET, path, query.0, None::<NoBody>, options)
            .await
    }

    async fn get_dataset(
        &self,
        req: model::GetDatasetRequest,
        options: RequestOptions,
    ) -> Result<model::Dataset> {
        let path = dataset_path(&req.project_id, &req.dataset_id)?;
        self.call("get_dataset", Method::GET, path, Vec::new(), None::<NoBody>, options)
            .await
    }

    async fn insert_dataset(
        &self,
        req: model::InsertDatasetRequest,
        options: RequestOptions,
    ) -> Result<model::Dataset> {
        let path = format!("/projects/{}/datasets", required("project_id", &req.project_id)?);
        self.call("insert_dataset", Method::POST, path, Vec::new(), Some(req.dataset), options)
            .await
    }

    async fn patch_dataset(
        &self,
        req: model::PatchDatasetRequest,
        options: RequestOptions,
    ) -> Result<model::Dataset> {
        let path = dataset_path(&req.project_id, &req.dataset_id)?;
        self.call("patch_dataset", Method::PATCH, path, Vec::new(), Some(req.dataset), options)
            .await
    }

    async fn delete_dataset(
        &self,
        req: model::DeleteDatasetRequest,
        options: RequestOptions,
    ) -> Result<()> {
        let path = dataset_path(&req.project_id, &req.dataset_id)?;
        let query = QueryParams::default().add("deleteContents", req.delete_contents);
        self.call("delete_dataset", Method::DELETE, path, query.0, None::<NoBody>, options)
            .await
    }

    async fn list_tables(
        &self,
        req: model::ListTablesRequest,
        options: RequestOptions,
    ) -> Result<model::TableList> {
        let path = format!("{}/tables", dataset_path(&req.project_id, &req.dataset_id)?);
        let query = QueryParams::default()
            .add("maxResults", req.max_results)
            .add_token(&req.page_token);
        self.call("list_tables", Method::GET, path, query.0, None::<NoBody>, options)
            .await
    }

    async fn get_table(
        &self,
        req: model::GetTableRequest,
        options: RequestOptions,
    ) -> Result<model::Table> {
        let path = table_path(&req.project_id, &req.dataset_id, &req.table_id)?;
        self.call("get_table", Method::GET, path, Vec::new(), None::<NoBody>, options)
            .await
    }

    async fn insert_table(
        &self,
        req: model::InsertTableRequest,
        options: RequestOptions,
    ) -> Result<model::Table> {
        let path = format!("{}/tables", dataset_path(&req.project_id, &req.dataset_id)?);
        self.call("insert_table", Method::POST, path, Vec::new(), Some(req.table), options)
            .await
    }

    async fn patch_table(
        &self,
        req: model::PatchTableRequest,
        options: RequestOptions,
    ) -> Result<model::Table> {
        let path = table_path(&req.project_id, &req.dataset_id, &req.table_id)?;
        self.call("patch_table", Method::PATCH, path, Vec::new(), Some(req.table), options)
            .await
    }

    async fn delete_table(
        &self,
        req: model::DeleteTableRequest,
        options: RequestOptions,
    ) -> Result<()> {
        let path = table_path(&req.project_id, &req.dataset_id, &req.table_id)?;
        self.call("delete_table", Method::DELETE, path, Vec::new(), None::<NoBody>, options)
            .await
    }

    async fn list_tabledata(
        &self,
        req: model::ListTableDataRequest,
        options: RequestOptions,
    ) -> Result<model::TableDataList> {
        let path = format!(
            "{}/data",
            table_path(&req.project_id, &req.dataset_id, &req.table_id)?
        );
        let query = QueryParams::default()
            .add("maxResults", req.max_results)
            .add_token(&req.page_token)
            .add("startIndex", req.start_index);
        self.call("list_tabledata", Method::GET, path, query.0, None::<NoBody>, options)
            .await
    }

    async fn insert_tabledata(
        &self,
        req: model::InsertAllRequest,
        options: RequestOptions,
    ) -> Result<model::TableDataInsertAllResponse> {
        let path = format!(
            "{}/insertAll",
            table_path(&req.project_id, &req.dataset_id, &req.table_id)?
        );
        self.call("insert_tabledata", Method::POST, path, Vec::new(), Some(req.body), options)
            .await
    }

    async fn list_jobs(
        &self,
        req: model::ListJobsRequest,
        options: RequestOptions,
    ) -> Result<model::JobList> {
        let path = format!("/projects/{}/jobs", required("project_id", &req.project_id)?);
        let query = QueryParams::default()
            .add("allUsers", req.all_users)
            .add("maxResults", req.max_results)
            .add_token(&req.page_token)
            .add("projection", req.projection)
            .add_all("stateFilter", &req.state_filter);
        self.call("list_jobs", Method::GET, path, query.0, None::<NoBody>, options)
            .await
    }

    async fn get_job(
        &self,
        req: model::GetJobRequest,
        options: RequestOptions,
    ) -> Result<model::Job> {
        let path = format!(
            "/projects/{}/jobs/{}",
            required("project_id", &req.project_id)?,
            required("job_id", &req.job_id)?
        );
        self.call("get_job", Method::GET, path, Vec::new(), None::<NoBody>, options)
            .await
    }

    async fn insert_job(
        &self,
        req: model::InsertJobRequest,
        options: RequestOptions,
    ) -> Result<model::Job> {
        let path = format!("/projects/{}/jobs", required("project_id", &req.project_id)?);
        if req.job.configuration.is_none() {
            return Err(Error::validation("missing required parameter job.configuration"));
        }
        self.call("insert_job", Method::POST, path, Vec::new(), Some(req.job), options)
            .await
    }

    async fn query(
        &self,
        req: model::PostQueryRequest,
        options: RequestOptions,
    ) -> Result<model::QueryResponse> {
        let path = format!("/projects/{}/queries", required("project_id", &req.project_id)?);
        self.call("query", Method::POST, path, Vec::new(), Some(req.query_request), options)
            .await
    }

    async fn get_query_results(
        &self,
        req: model::GetQueryResultsRequest,
        options: RequestOptions,
    ) -> Result<model::GetQueryResultsResponse> {
        let path = format!(
            "/projects/{}/queries/{}",
            required("project_id", &req.project_id)?,
            required("job_id", &req.job_id)?
        );
        let query = QueryParams::default()
            .add("maxResults", req.max_results)
            .add_token(&req.page_token)
            .add("startIndex", req.start_index)
            .add("timeoutMs", req.timeout_ms);
        self.call("get_query_results", Method::GET, path, query.0, None::<NoBody>, options)
            .await
    }
}
