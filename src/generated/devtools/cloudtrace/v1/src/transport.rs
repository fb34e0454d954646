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

const SERVICE: &str = "google.devtools.cloudtrace.v1.TraceService";

/// The defaults for every [TraceService] call.
pub(crate) fn service_defaults() -> gax::config::ServiceDefaults {
    gax::config::ServiceDefaults::new(crate::DEFAULT_HOST)
}

/// Implements [TraceService](super::stub::TraceService) using a [gaxi::grpc::Client].
#[derive(Clone, Debug)]
pub struct TraceService {
    inner: gaxi::grpc::Client,
}

impl TraceService {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::grpc::Client::new(config, service_defaults()).await?;
        Ok(Self { inner })
    }
}

impl super::stub::TraceService for TraceService {
    async fn list_traces(
        &self,
        req: crate::model::ListTracesRequest,
        options: RequestOptions,
    ) -> Result<crate::model::ListTracesResponse> {
        self.inner
            .execute(
                tonic::GrpcMethod::new(SERVICE, "ListTraces"),
                http::uri::PathAndQuery::from_static("/google.devtools.cloudtrace.v1.TraceService/ListTraces"),
                req,
                options,
                &crate::info::X_GOOG_API_CLIENT_HEADER,
            )
            .await
    }

    async fn get_trace(
        &self,
        req: crate::model::GetTraceRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Trace> {
        self.inner
            .execute(
                tonic::GrpcMethod::new(SERVICE, "GetTrace"),
                http::uri::PathAndQuery::from_static("/google.devtools.cloudtrace.v1.TraceService/GetTrace"),
                req,
                options,
                &crate::info::X_GOOG_API_CLIENT_HEADER,
            )
            .await
    }

    async fn patch_traces(
        &self,
        req: crate::model::PatchTracesRequest,
        options: RequestOptions,
    ) -> Result<()> {
        self.inner
            .execute(
                tonic::GrpcMethod::new(SERVICE, "PatchTraces"),
                http::uri::PathAndQuery::from_static("/google.devtools.cloudtrace.v1.TraceService/PatchTraces"),
                req,
                options,
                &crate::info::X_GOOG_API_CLIENT_HEADER,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let defaults = service_defaults();
        assert_eq!(defaults.endpoint(), Some(crate::DEFAULT_HOST));
        assert_eq!(defaults.settings().timeout(), None);
    }
}
