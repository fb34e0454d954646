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

//! Google Cloud Client Libraries for Rust - BigQuery
//!
//! **WARNING:** this crate is under active development. We expect multiple
//! breaking changes in the upcoming releases. Testing is also incomplete, we do
//! **not** recommend that you use this crate in production. We welcome feedback
//! about the APIs, documentation, missing features, bugs, etc.
//!
//! This crate contains traits, types, and functions to interact with
//! [BigQuery]. Most applications will use the structs defined in the
//! [client] module.
//!
//! A [BigQuery][client::BigQuery] client is bound to one project. Requests
//! for datasets, tables, and jobs default to that project.
//!
//! [BigQuery]: https://cloud.google.com/bigquery

pub use gax::Result;
pub use gax::error::Error;

pub mod builder;
pub mod client;
pub mod jobs;
pub mod model;
pub mod rows;
pub mod stub;
pub mod table_ref;

pub(crate) mod transport;

const DEFAULT_HOST: &str = "https://bigquery.googleapis.com";

mod info {
    const NAME: &str = env!("CARGO_PKG_NAME");
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    lazy_static::lazy_static! {
        pub(crate) static ref X_GOOG_API_CLIENT_HEADER: String = {
            let ac = gaxi::api_header::XGoogApiClient{
                name:          NAME,
                version:       VERSION,
                library_type:  gaxi::api_header::GCCL,
            };
            ac.rest_header_value()
        };
    }
}
