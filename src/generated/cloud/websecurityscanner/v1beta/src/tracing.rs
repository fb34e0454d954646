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

/// Implements a [WebSecurityScanner](super::stub::WebSecurityScanner) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct WebSecurityScanner<T>
where
    T: super::stub::WebSecurityScanner + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> WebSecurityScanner<T>
where
    T: super::stub::WebSecurityScanner + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::WebSecurityScanner for WebSecurityScanner<T>
where
    T: super::stub::WebSecurityScanner + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn get_scan_run(
        &self,
        req: crate::model::GetScanRunRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::ScanRun> {
        self.inner.get_scan_run(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_scan_runs(
        &self,
        req: crate::model::ListScanRunsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::ListScanRunsResponse> {
        self.inner.list_scan_runs(req, options).await
    }
}
