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
use gax::options::RequestOptions;

const SERVICE: &str = "google.cloud.websecurityscanner.v1beta.WebSecurityScanner";

/// The defaults for every [WebSecurityScanner] call.
pub(crate) fn service_defaults() -> gax::config::ServiceDefaults {
    gax::config::ServiceDefaults::new(crate::DEFAULT_HOST)
}

/// Implements [WebSecurityScanner](super::stub::WebSecurityScanner) using a [gaxi::grpc::Client].
#[derive(Clone, Debug)]
pub struct WebSecurityScanner {
    inner: gaxi::grpc::Client,
}

impl WebSecurityScanner {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::grpc::Client::new(config, service_defaults()).await?;
        Ok(Self { inner })
    }
}

impl super::stub::WebSecurityScanner for WebSecurityScanner {
    async fn get_scan_run(
        &self,
        req: crate::model::GetScanRunRequest,
        options: RequestOptions,
    ) -> Result<crate::model::ScanRun> {
        self.inner
            .execute(
                tonic::GrpcMethod::new(SERVICE, "GetScanRun"),
                http::uri::PathAndQuery::from_static("/google.cloud.websecurityscanner.v1beta.WebSecurityScanner/GetScanRun"),
                req,
                options,
                &crate::info::X_GOOG_API_CLIENT_HEADER,
            )
            .await
    }

    async fn list_scan_runs(
        &self,
        req: crate::model::ListScanRunsRequest,
        options: RequestOptions,
    ) -> Result<crate::model::ListScanRunsResponse> {
        self.inner
            .execute(
                tonic::GrpcMethod::new(SERVICE, "ListScanRuns"),
                http::uri::PathAndQuery::from_static("/google.cloud.websecurityscanner.v1beta.WebSecurityScanner/ListScanRuns"),
                req,
                options,
                &crate::info::X_GOOG_API_CLIENT_HEADER,
            )
            .await
    }
}
