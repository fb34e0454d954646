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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

use crate::Result;
use crate::model;
use gax::options::RequestOptions;

pub(crate) mod dynamic;

/// Defines the trait used to implement [crate::client::BigQuery].
///
/// Application developers may need to implement this trait to mock
/// `client::BigQuery`. In other use-cases, application developers only
/// use `client::BigQuery` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
pub trait BigQuery: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::BigQuery::list_datasets].
    fn list_datasets(
        &self,
        _req: model::ListDatasetsRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<model::DatasetList>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BigQuery::get_dataset].
    fn get_dataset(
        &self,
        _req: model::GetDatasetRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<model::Dataset>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BigQuery::insert_dataset].
    fn insert_dataset(
        &self,
        _req: model::InsertDatasetRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<model::Dataset>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BigQuery::patch_dataset].
    fn patch_dataset(
        &self,
        _req: model::PatchDatasetRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<model::Dataset>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BigQuery::delete_dataset].
    fn delete_dataset(
        &self,
        _req: model::DeleteDatasetRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<()>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BigQuery::list_tables].
    fn list_tables(
        &self,
        _req: model::ListTablesRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<model::TableList>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BigQuery::get_table].
    fn get_table(
        &self,
        _req: model::GetTableRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<model::Table>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BigQuery::insert_table].
    fn insert_table(
        &self,
        _req: model::InsertTableRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<model::Table>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BigQuery::patch_table].
    fn patch_table(
        &self,
        _req: model::PatchTableRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<model::Table>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BigQuery::delete_table].
    fn delete_table(
        &self,
        _req: model::DeleteTableRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<()>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BigQuery::list_tabledata].
    fn list_tabledata(
        &self,
        _req: model::ListTableDataRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<model::TableDataList>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BigQuery::insert_tabledata].
    fn insert_tabledata(
        &self,
        _req: model::InsertAllRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<model::TableDataInsertAllResponse>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BigQuery::list_jobs].
    fn list_jobs(
        &self,
        _req: model::ListJobsRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<model::JobList>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BigQuery::get_job].
    fn get_job(
        &self,
        _req: model::GetJobRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<model::Job>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BigQuery::insert_job].
    fn insert_job(
        &self,
        _req: model::InsertJobRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<model::Job>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BigQuery::query].
    fn query(
        &self,
        _req: model::PostQueryRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<model::QueryResponse>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BigQuery::job_query_results].
    fn get_query_results(
        &self,
        _req: model::GetQueryResultsRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<model::GetQueryResultsResponse>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }
}
