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

//! Request builders for the clients in this library.

pub mod big_query {
    use crate::Result;
    use std::sync::Arc;

    /// A builder for [BigQuery][crate::client::BigQuery].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_cloud_bigquery::*;
    /// # use builder::big_query::ClientBuilder;
    /// # use client::BigQuery;
    /// let builder : ClientBuilder = BigQuery::builder("my-project");
    /// let client = builder
    ///     .with_endpoint("https://bigquery.googleapis.com")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::BigQuery;

        pub struct Factory {
            pub(crate) project: String,
        }

        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = BigQuery;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(self.project, config).await
            }
        }
    }

    /// Common implementation for [crate::client::BigQuery] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: Arc<dyn super::super::stub::dynamic::BigQuery>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::BigQuery>) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// Lists the datasets in a project.
    #[derive(Clone, Debug)]
    pub struct ListDatasets(RequestBuilder<crate::model::ListDatasetsRequest>);

    impl ListDatasets {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::BigQuery>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListDatasetsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<gax::options::RequestOptions>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DatasetList> {
            let options = self.0.options;
            (*self.0.stub).list_datasets(self.0.request, options).await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::DatasetList, gax::error::Error> {
            let token = self.0.request.page_token.clone();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page_token = token;
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<crate::model::DatasetList, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [project_id][crate::model::ListDatasetsRequest::project_id].
        pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// List hidden datasets too.
        pub fn set_all(mut self, v: bool) -> Self {
            self.0.request.all = Some(v);
            self
        }

        /// Sets the value of [max_results][crate::model::ListDatasetsRequest::max_results].
        pub fn set_max_results(mut self, v: u32) -> Self {
            self.0.request.max_results = Some(v);
            self
        }

        /// Sets the value of [page_token][crate::model::ListDatasetsRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListDatasets {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// Gets a dataset.
    #[derive(Clone, Debug)]
    pub struct GetDataset(RequestBuilder<crate::model::GetDatasetRequest>);

    impl GetDataset {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::BigQuery>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetDatasetRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<gax::options::RequestOptions>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Dataset> {
            let options = self.0.options;
            (*self.0.stub).get_dataset(self.0.request, options).await
        }

        /// Sets the value of [project_id][crate::model::GetDatasetRequest::project_id].
        pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [dataset_id][crate::model::GetDatasetRequest::dataset_id].
        pub fn set_dataset_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.dataset_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetDataset {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// Creates a dataset.
    #[derive(Clone, Debug)]
    pub struct InsertDataset(RequestBuilder<crate::model::InsertDatasetRequest>);

    impl InsertDataset {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::BigQuery>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::InsertDatasetRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<gax::options::RequestOptions>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Dataset> {
            let options = self.0.options;
            (*self.0.stub).insert_dataset(self.0.request, options).await
        }

        /// Sets the value of [friendly_name][crate::model::Dataset::friendly_name].
        pub fn set_friendly_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.dataset.friendly_name = Some(v.into());
            self
        }

        /// Sets the value of [description][crate::model::Dataset::description].
        pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.dataset.description = Some(v.into());
            self
        }

        /// The default lifetime of new tables, in milliseconds.
        pub fn set_default_table_expiration_ms(mut self, v: i64) -> Self {
            self.0.request.dataset.default_table_expiration_ms = Some(v);
            self
        }

        /// Sets the value of [access][crate::model::Dataset::access].
        pub fn set_access<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<crate::model::Access>,
        {
            self.0.request.dataset.access = v.into_iter().map(|v| v.into()).collect();
            self
        }

        /// Sets the value of [location][crate::model::Dataset::location].
        pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.dataset.location = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for InsertDataset {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// Updates the fields set in the request, leaving other fields unchanged.
    #[derive(Clone, Debug)]
    pub struct PatchDataset(RequestBuilder<crate::model::PatchDatasetRequest>);

    impl PatchDataset {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::BigQuery>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::PatchDatasetRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<gax::options::RequestOptions>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Dataset> {
            let options = self.0.options;
            (*self.0.stub).patch_dataset(self.0.request, options).await
        }

        /// Sets the value of [project_id][crate::model::PatchDatasetRequest::project_id].
        pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [friendly_name][crate::model::Dataset::friendly_name].
        pub fn set_friendly_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.dataset.friendly_name = Some(v.into());
            self
        }

        /// Sets the value of [description][crate::model::Dataset::description].
        pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.dataset.description = Some(v.into());
            self
        }

        /// Sets the value of [default_table_expiration_ms][crate::model::Dataset::default_table_expiration_ms].
        pub fn set_default_table_expiration_ms(mut self, v: i64) -> Self {
            self.0.request.dataset.default_table_expiration_ms = Some(v);
            self
        }

        /// Sets the value of [access][crate::model::Dataset::access].
        pub fn set_access<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<crate::model::Access>,
        {
            self.0.request.dataset.access = v.into_iter().map(|v| v.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for PatchDataset {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// Deletes a dataset.
    #[derive(Clone, Debug)]
    pub struct DeleteDataset(RequestBuilder<crate::model::DeleteDatasetRequest>);

    impl DeleteDataset {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::BigQuery>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteDatasetRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<gax::options::RequestOptions>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            let options = self.0.options;
            (*self.0.stub).delete_dataset(self.0.request, options).await
        }

        /// Sets the value of [project_id][crate::model::DeleteDatasetRequest::project_id].
        pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Delete the tables in the dataset. Without this option deleting a non-empty dataset fails.
        pub fn set_delete_contents(mut self, v: bool) -> Self {
            self.0.request.delete_contents = Some(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteDataset {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// Lists the tables in a dataset.
    #[derive(Clone, Debug)]
    pub struct ListTables(RequestBuilder<crate::model::ListTablesRequest>);

    impl ListTables {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::BigQuery>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListTablesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<gax::options::RequestOptions>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::TableList> {
            let options = self.0.options;
            (*self.0.stub).list_tables(self.0.request, options).await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::TableList, gax::error::Error> {
            let token = self.0.request.page_token.clone();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page_token = token;
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<crate::model::TableList, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [project_id][crate::model::ListTablesRequest::project_id].
        pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [max_results][crate::model::ListTablesRequest::max_results].
        pub fn set_max_results(mut self, v: u32) -> Self {
            self.0.request.max_results = Some(v);
            self
        }

        /// Sets the value of [page_token][crate::model::ListTablesRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListTables {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// Gets a table or view.
    #[derive(Clone, Debug)]
    pub struct GetTable(RequestBuilder<crate::model::GetTableRequest>);

    impl GetTable {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::BigQuery>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetTableRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<gax::options::RequestOptions>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Table> {
            let options = self.0.options;
            (*self.0.stub).get_table(self.0.request, options).await
        }

        /// Sets the value of [project_id][crate::model::GetTableRequest::project_id].
        pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetTable {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// Creates a table or view.
    #[derive(Clone, Debug)]
    pub struct InsertTable(RequestBuilder<crate::model::InsertTableRequest>);

    impl InsertTable {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::BigQuery>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::InsertTableRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<gax::options::RequestOptions>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Table> {
            let options = self.0.options;
            (*self.0.stub).insert_table(self.0.request, options).await
        }

        /// Sets the value of [friendly_name][crate::model::Table::friendly_name].
        pub fn set_friendly_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.table.friendly_name = Some(v.into());
            self
        }

        /// Sets the value of [description][crate::model::Table::description].
        pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.table.description = Some(v.into());
            self
        }

        /// Sets the value of [schema][crate::model::Table::schema].
        pub fn set_schema<T: Into<crate::model::TableSchema>>(mut self, v: T) -> Self {
            self.0.request.table.schema = Some(v.into());
            self
        }

        /// Makes the new table a view defined by this query.
        pub fn set_view_query<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.table.view = Some(crate::model::ViewDefinition { query: v.into() });
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for InsertTable {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// Updates the fields set in the request, leaving other fields unchanged.
    #[derive(Clone, Debug)]
    pub struct PatchTable(RequestBuilder<crate::model::PatchTableRequest>);

    impl PatchTable {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::BigQuery>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::PatchTableRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<gax::options::RequestOptions>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Table> {
            let options = self.0.options;
            (*self.0.stub).patch_table(self.0.request, options).await
        }

        /// Sets the value of [project_id][crate::model::PatchTableRequest::project_id].
        pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [friendly_name][crate::model::Table::friendly_name].
        pub fn set_friendly_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.table.friendly_name = Some(v.into());
            self
        }

        /// Sets the value of [description][crate::model::Table::description].
        pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.table.description = Some(v.into());
            self
        }

        /// Sets the value of [schema][crate::model::Table::schema].
        pub fn set_schema<T: Into<crate::model::TableSchema>>(mut self, v: T) -> Self {
            self.0.request.table.schema = Some(v.into());
            self
        }

        /// Sets the value of [view][crate::model::Table::view].
        pub fn set_view_query<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.table.view = Some(crate::model::ViewDefinition { query: v.into() });
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for PatchTable {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// Deletes a table or view.
    #[derive(Clone, Debug)]
    pub struct DeleteTable(RequestBuilder<crate::model::DeleteTableRequest>);

    impl DeleteTable {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::BigQuery>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteTableRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<gax::options::RequestOptions>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            let options = self.0.options;
            (*self.0.stub).delete_table(self.0.request, options).await
        }

        /// Sets the value of [project_id][crate::model::DeleteTableRequest::project_id].
        pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteTable {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// Reads the rows of a table.
    #[derive(Clone, Debug)]
    pub struct ListTableData(RequestBuilder<crate::model::ListTableDataRequest>);

    impl ListTableData {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::BigQuery>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListTableDataRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<gax::options::RequestOptions>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::TableDataList> {
            let options = self.0.options;
            (*self.0.stub).list_tabledata(self.0.request, options).await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::TableDataList, gax::error::Error> {
            let token = self.0.request.page_token.clone();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page_token = token;
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<crate::model::TableDataList, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [project_id][crate::model::ListTableDataRequest::project_id].
        pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [max_results][crate::model::ListTableDataRequest::max_results].
        pub fn set_max_results(mut self, v: u32) -> Self {
            self.0.request.max_results = Some(v);
            self
        }

        /// Sets the value of [page_token][crate::model::ListTableDataRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }

        /// The zero-based index of the first row to read.
        pub fn set_start_index(mut self, v: u64) -> Self {
            self.0.request.start_index = Some(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListTableData {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// Streams rows into a table.
    ///
    /// Each row carries an `insertId` derived from its contents, so retrying
    /// the request does not insert duplicates.
    #[derive(Clone, Debug)]
    pub struct InsertTableData(RequestBuilder<crate::model::InsertAllRequest>);

    impl InsertTableData {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::BigQuery>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::InsertAllRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<gax::options::RequestOptions>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::TableDataInsertAllResponse> {
            let options = self.0.options;
            (*self.0.stub).insert_tabledata(self.0.request, options).await
        }

        /// Sets the value of [project_id][crate::model::InsertAllRequest::project_id].
        pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [skip_invalid_rows][crate::model::TableDataInsertAllRequest::skip_invalid_rows].
        pub fn set_skip_invalid_rows(mut self, v: bool) -> Self {
            self.0.request.body.skip_invalid_rows = Some(v);
            self
        }

        /// Sets the value of [ignore_unknown_values][crate::model::TableDataInsertAllRequest::ignore_unknown_values].
        pub fn set_ignore_unknown_values(mut self, v: bool) -> Self {
            self.0.request.body.ignore_unknown_values = Some(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for InsertTableData {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// Lists the jobs in a project.
    #[derive(Clone, Debug)]
    pub struct ListJobs(RequestBuilder<crate::model::ListJobsRequest>);

    impl ListJobs {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::BigQuery>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListJobsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<gax::options::RequestOptions>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::JobList> {
            let options = self.0.options;
            (*self.0.stub).list_jobs(self.0.request, options).await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::JobList, gax::error::Error> {
            let token = self.0.request.page_token.clone();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page_token = token;
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<crate::model::JobList, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [project_id][crate::model::ListJobsRequest::project_id].
        pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// List the jobs of all users, requires the project owner role.
        pub fn set_all_users(mut self, v: bool) -> Self {
            self.0.request.all_users = Some(v);
            self
        }

        /// Sets the value of [max_results][crate::model::ListJobsRequest::max_results].
        pub fn set_max_results(mut self, v: u32) -> Self {
            self.0.request.max_results = Some(v);
            self
        }

        /// Sets the value of [page_token][crate::model::ListJobsRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }

        /// Only list jobs in these states: `done`, `pending`, or `running`.
        pub fn set_state_filter<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<String>,
        {
            self.0.request.state_filter = v.into_iter().map(|v| v.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListJobs {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// Gets a job.
    #[derive(Clone, Debug)]
    pub struct GetJob(RequestBuilder<crate::model::GetJobRequest>);

    impl GetJob {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::BigQuery>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetJobRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<gax::options::RequestOptions>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Job> {
            let options = self.0.options;
            (*self.0.stub).get_job(self.0.request, options).await
        }

        /// Sets the value of [project_id][crate::model::GetJobRequest::project_id].
        pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// Starts a job.
    #[derive(Clone, Debug)]
    pub struct InsertJob(RequestBuilder<crate::model::InsertJobRequest>);

    impl InsertJob {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::BigQuery>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::InsertJobRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<gax::options::RequestOptions>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Job> {
            let options = self.0.options;
            (*self.0.stub).insert_job(self.0.request, options).await
        }

        /// Sets the value of [project_id][crate::model::InsertJobRequest::project_id].
        pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [job][crate::model::InsertJobRequest::job].
        pub fn set_job<T: Into<crate::model::Job>>(mut self, v: T) -> Self {
            self.0.request.job = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for InsertJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// Runs a query and waits, up to a timeout, for the results.
    #[derive(Clone, Debug)]
    pub struct Query(RequestBuilder<crate::model::PostQueryRequest>);

    impl Query {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::BigQuery>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::PostQueryRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<gax::options::RequestOptions>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::QueryResponse> {
            let options = self.0.options;
            (*self.0.stub).query(self.0.request, options).await
        }

        /// Sets the value of [project_id][crate::model::PostQueryRequest::project_id].
        pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for Query {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// Reads the results of a query job.
    #[derive(Clone, Debug)]
    pub struct GetQueryResults(RequestBuilder<crate::model::GetQueryResultsRequest>);

    impl GetQueryResults {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::BigQuery>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetQueryResultsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<gax::options::RequestOptions>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::GetQueryResultsResponse> {
            let options = self.0.options;
            (*self.0.stub).get_query_results(self.0.request, options).await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::GetQueryResultsResponse, gax::error::Error> {
            let token = self.0.request.page_token.clone();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page_token = token;
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<crate::model::GetQueryResultsResponse, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [project_id][crate::model::GetQueryResultsRequest::project_id].
        pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [max_results][crate::model::GetQueryResultsRequest::max_results].
        pub fn set_max_results(mut self, v: u32) -> Self {
            self.0.request.max_results = Some(v);
            self
        }

        /// Sets the value of [page_token][crate::model::GetQueryResultsRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }

        /// Sets the value of [start_index][crate::model::GetQueryResultsRequest::start_index].
        pub fn set_start_index(mut self, v: u64) -> Self {
            self.0.request.start_index = Some(v);
            self
        }

        /// How long to wait for the query to complete, in milliseconds.
        pub fn set_timeout_ms(mut self, v: u32) -> Self {
            self.0.request.timeout_ms = Some(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetQueryResults {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
