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

//! Google APIs helpers.
//!
//! This crate contains the types and functions shared by all the Google Cloud
//! client libraries for Rust: the error types, the retry policies and retry
//! loop, the configuration cascade, the request options, and the paginators.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping RPCs.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by generated clients.
pub mod error;

/// Canonicalization tables for option aliases.
pub mod alias;

pub mod client_builder;
pub mod config;
pub mod exponential_backoff;
pub mod options;
pub mod paginator;
pub mod retry_policy;
pub mod retry_result;

/// The retry loop used by the transports.
#[doc(hidden)]
pub mod retry_loop_internal;
