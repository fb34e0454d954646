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

/// Implements a [CloudCatalog](super::stub::CloudCatalog) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct CloudCatalog<T>
where
    T: super::stub::CloudCatalog + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> CloudCatalog<T>
where
    T: super::stub::CloudCatalog + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::CloudCatalog for CloudCatalog<T>
where
    T: super::stub::CloudCatalog + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn list_services(
        &self,
        req: crate::model::ListServicesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::ListServicesResponse> {
        self.inner.list_services(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_skus(
        &self,
        req: crate::model::ListSkusRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::ListSkusResponse> {
        self.inner.list_skus(req, options).await
    }
}
