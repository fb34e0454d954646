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

/// A dyn-compatible, crate-private version of [super::BigQuery].
#[async_trait::async_trait]
pub trait BigQuery: std::fmt::Debug + Send + Sync {
    async fn list_datasets(
        &self,
        req: crate::model::ListDatasetsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::DatasetList>;

    async fn get_dataset(
        &self,
        req: crate::model::GetDatasetRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::Dataset>;

    async fn insert_dataset(
        &self,
        req: crate::model::InsertDatasetRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::Dataset>;

    async fn patch_dataset(
        &self,
        req: crate::model::PatchDatasetRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::Dataset>;

    async fn delete_dataset(
        &self,
        req: crate::model::DeleteDatasetRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<()>;

    async fn list_tables(
        &self,
        req: crate::model::ListTablesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::TableList>;

    async fn get_table(
        &self,
        req: crate::model::GetTableRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::Table>;

    async fn insert_table(
        &self,
        req: crate::model::InsertTableRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::Table>;

    async fn patch_table(
        &self,
        req: crate::model::PatchTableRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::Table>;

    async fn delete_table(
        &self,
        req: crate::model::DeleteTableRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<()>;

    async fn list_tabledata(
        &self,
        req: crate::model::ListTableDataRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::TableDataList>;

    async fn insert_tabledata(
        &self,
        req: crate::model::InsertAllRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::TableDataInsertAllResponse>;

    async fn list_jobs(
        &self,
        req: crate::model::ListJobsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::JobList>;

    async fn get_job(
        &self,
        req: crate::model::GetJobRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::Job>;

    async fn insert_job(
        &self,
        req: crate::model::InsertJobRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::Job>;

    async fn query(
        &self,
        req: crate::model::PostQueryRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::QueryResponse>;

    async fn get_query_results(
        &self,
        req: crate::model::GetQueryResultsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::GetQueryResultsResponse>;
}

/// All implementations of [super::BigQuery] also implement [BigQuery].
#[async_trait::async_trait]
impl<T: super::BigQuery> BigQuery for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn list_datasets(
        &self,
        req: crate::model::ListDatasetsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::DatasetList> {
        T::list_datasets(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_dataset(
        &self,
        req: crate::model::GetDatasetRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::Dataset> {
        T::get_dataset(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn insert_dataset(
        &self,
        req: crate::model::InsertDatasetRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::Dataset> {
        T::insert_dataset(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn patch_dataset(
        &self,
        req: crate::model::PatchDatasetRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::Dataset> {
        T::patch_dataset(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_dataset(
        &self,
        req: crate::model::DeleteDatasetRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<()> {
        T::delete_dataset(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_tables(
        &self,
        req: crate::model::ListTablesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::TableList> {
        T::list_tables(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_table(
        &self,
        req: crate::model::GetTableRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::Table> {
        T::get_table(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn insert_table(
        &self,
        req: crate::model::InsertTableRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::Table> {
        T::insert_table(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn patch_table(
        &self,
        req: crate::model::PatchTableRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::Table> {
        T::patch_table(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_table(
        &self,
        req: crate::model::DeleteTableRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<()> {
        T::delete_table(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_tabledata(
        &self,
        req: crate::model::ListTableDataRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::TableDataList> {
        T::list_tabledata(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn insert_tabledata(
        &self,
        req: crate::model::InsertAllRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::TableDataInsertAllResponse> {
        T::insert_tabledata(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_jobs(
        &self,
        req: crate::model::ListJobsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::JobList> {
        T::list_jobs(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_job(
        &self,
        req: crate::model::GetJobRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::Job> {
        T::get_job(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn insert_job(
        &self,
        req: crate::model::InsertJobRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::Job> {
        T::insert_job(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn query(
        &self,
        req: crate::model::PostQueryRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::QueryResponse> {
        T::query(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_query_results(
        &self,
        req: crate::model::GetQueryResultsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::GetQueryResultsResponse> {
        T::get_query_results(self, req, options).await
    }
}
