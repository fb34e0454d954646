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

/// A dyn-compatible, crate-private version of [super::WebSecurityScanner].
#[async_trait::async_trait]
pub trait WebSecurityScanner: std::fmt::Debug + Send + Sync {
    async fn get_scan_run(
        &self,
        req: crate::model::GetScanRunRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::ScanRun>;

    async fn list_scan_runs(
        &self,
        req: crate::model::ListScanRunsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::ListScanRunsResponse>;
}

/// All implementations of [super::WebSecurityScanner] also implement [WebSecurityScanner].
#[async_trait::async_trait]
impl<T: super::WebSecurityScanner> WebSecurityScanner for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn get_scan_run(
        &self,
        req: crate::model::GetScanRunRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::ScanRun> {
        T::get_scan_run(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_scan_runs(
        &self,
        req: crate::model::ListScanRunsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::ListScanRunsResponse> {
        T::list_scan_runs(self, req, options).await
    }
}
