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

//! Google Cloud Client Libraries for Rust - Authentication Components
//!
//! This crate contains types and functions used to authenticate applications
//! on Google Cloud. The client libraries consume a
//! [credentials::Credentials] and use it to authenticate each RPC issued by
//! the application.
//!
//! Most applications use [Application Default Credentials]: create a
//! [credentials::Builder] with the default source and let the library find
//! the credentials in the environment.
//!
//! ```no_run
//! # use google_cloud_auth::credentials::Builder;
//! # tokio_test::block_on(async {
//! let credentials = Builder::default().build()?;
//! let headers = credentials.headers().await?;
//! println!("{} headers", headers.len());
//! # Ok::<(), anyhow::Error>(())
//! # });
//! ```
//!
//! [Application Default Credentials]: https://cloud.google.com/docs/authentication/application-default-credentials

pub mod build_errors;
pub mod credentials;
pub mod errors;
pub mod token;

pub(crate) mod constants;
pub(crate) mod headers_util;
pub(crate) mod token_cache;

/// A `Result` alias where the `Err` case is
/// [CredentialsError][errors::CredentialsError].
pub type Result<T> = std::result::Result<T, errors::CredentialsError>;
