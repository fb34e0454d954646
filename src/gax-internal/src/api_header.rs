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

//! Telemetry header helpers.

/// Each client library creates one static instance of this struct and uses
/// it to lazy initialize (via `lazy_static`) the `x-goog-api-client`
/// header value.
#[derive(Debug, PartialEq)]
pub struct XGoogApiClient {
    pub name: &'static str,
    pub library_type: &'static str,
    pub version: &'static str,
}

/// Generated client libraries.
pub const GAPIC: &str = "gapic";
/// Hand-written client libraries.
pub const GCCL: &str = "gccl";

mod build_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/build_env.rs"));

    pub(crate) const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
}

impl XGoogApiClient {
    /// The header value for REST transports.
    pub fn rest_header_value(&self) -> String {
        self.header_value("rest", "reqwest")
    }

    /// The header value for gRPC transports.
    pub fn grpc_header_value(&self) -> String {
        self.header_value("grpc", "tonic")
    }

    fn header_value(&self, transport: &str, implementation: &str) -> String {
        // RUSTC_VERSION may start with "rustc ".
        let rustc_version = build_info::RUSTC_VERSION;
        let rustc_version = rustc_version
            .strip_prefix("rustc ")
            .unwrap_or(rustc_version);
        let gax_version = build_info::PKG_VERSION;
        format!(
            "gl-rust/{rustc_version} gax/{gax_version} {transport}/{gax_version}-{implementation} {}/{}",
            self.library_type, self.version
        )
    }
}
