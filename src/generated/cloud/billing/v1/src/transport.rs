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

const SERVICE: &str = "google.cloud.billing.v1.CloudCatalog";

/// The defaults for every [CloudCatalog] call.
pub(crate) fn service_defaults() -> gax::config::ServiceDefaults {
    gax::config::ServiceDefaults::new(crate::DEFAULT_HOST)
}

/// Implements [CloudCatalog](super::stub::CloudCatalog) using a [gaxi::grpc::Client].
#[derive(Clone, Debug)]
pub struct CloudCatalog {
    inner: gaxi::grpc::Client,
}

impl CloudCatalog {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::grpc::Client::new(config, service_defaults()).await?;
        Ok(Self { inner })
    }
}

impl super::stub::CloudCatalog for CloudCatalog {
    async fn list_services(
        &self,
        req: crate::model::ListServicesRequest,
        options: RequestOptions,
    ) -> Result<crate::model::ListServicesResponse> {
        self.inner
            .execute(
                tonic::GrpcMethod::new(SERVICE, "ListServices"),
                http::uri::PathAndQuery::from_static("/google.cloud.billing.v1.CloudCatalog/ListServices"),
                req,
                options,
                &crate::info::X_GOOG_API_CLIENT_HEADER,
            )
            .await
    }

    async fn list_skus(
        &self,
        req: crate::model::ListSkusRequest,
        options: RequestOptions,
    ) -> Result<crate::model::ListSkusResponse> {
        self.inner
            .execute(
                tonic::GrpcMethod::new(SERVICE, "ListSkus"),
                http::uri::PathAndQuery::from_static("/google.cloud.billing.v1.CloudCatalog/ListSkus"),
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
