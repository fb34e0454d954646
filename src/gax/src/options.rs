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

//! Per request options.
//!
//! The client library defaults are intended to work for most applications.
//! Some calls need a different timeout, a different retry policy, or
//! additional metadata. The `*Builder` returned by each client method
//! implements the [RequestOptionsBuilder] trait where applications can
//! override these settings for a single call.
//!
//! Per-call options have the highest precedence in the configuration cascade,
//! see [crate::config::resolve].

use crate::config::Settings;
use crate::retry_policy::RetryPolicy;
use std::collections::BTreeMap;
use std::time::Duration;

/// A set of options configuring a single request.
///
/// Applications only use this type directly in mocks, where they may want to
/// verify their application has configured all the right request parameters
/// and options.
///
/// All other code uses this type indirectly, via the per-request builders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    idempotent: Option<bool>,
    settings: Settings,
}

impl RequestOptions {
    /// Gets the idempotency.
    pub fn idempotent(&self) -> Option<bool> {
        self.idempotent
    }

    /// Treat the RPC underlying this method as idempotent.
    ///
    /// Requests are retried according to the retry policy unless they are
    /// explicitly marked as not idempotent. Set this to `false` for requests
    /// that must not be repeated.
    pub fn set_idempotency(&mut self, value: bool) {
        self.idempotent = Some(value);
    }

    /// Sets the overall timeout for the request, including any retries.
    pub fn set_timeout<T: Into<Duration>>(&mut self, v: T) {
        self.settings.set_timeout(v);
    }

    /// Gets the current timeout override.
    pub fn timeout(&self) -> Option<Duration> {
        self.settings.timeout()
    }

    /// Sets the retry policy for this request.
    pub fn set_retry_policy<V: Into<RetryPolicy>>(&mut self, v: V) {
        self.settings.set_retry_policy(v);
    }

    /// Gets the current retry policy override.
    pub fn retry_policy(&self) -> Option<&RetryPolicy> {
        self.settings.retry_policy()
    }

    /// Adds a metadata entry, sent as a request header.
    pub fn insert_metadata<K: Into<String>, V: Into<String>>(&mut self, k: K, v: V) {
        self.settings.insert_metadata(k, v);
    }

    /// Gets the current metadata overrides.
    pub fn metadata(&self) -> &BTreeMap<String, String> {
        self.settings.metadata()
    }

    /// Sets the project billed for this request.
    pub fn set_quota_project<V: Into<String>>(&mut self, v: V) {
        self.settings.set_quota_project(v);
    }

    /// Gets the current quota project override.
    pub fn quota_project(&self) -> Option<&str> {
        self.settings.quota_project()
    }

    /// The overrides as a configuration scope.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

/// Implementations of this trait provide setters to configure request options.
///
/// The client libraries provide a builder for each RPC. These builders can be
/// used to set the request parameters, e.g., the name of the resource
/// targeted by the RPC, as well as any options affecting the request, such as
/// additional headers or timeouts.
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// If `v` is `true`, treat the RPC underlying this method as idempotent.
    fn with_idempotency(self, v: bool) -> Self;

    /// Sets the overall timeout, including retries.
    fn with_timeout<V: Into<Duration>>(self, v: V) -> Self;

    /// Sets the retry policy configuration.
    fn with_retry_policy<V: Into<RetryPolicy>>(self, v: V) -> Self;

    /// Adds a metadata entry.
    fn with_metadata<K: Into<String>, V: Into<String>>(self, k: K, v: V) -> Self;

    /// Sets the quota project.
    fn with_quota_project<V: Into<String>>(self, v: V) -> Self;
}

#[doc(hidden)]
pub mod internal {
    //! This module contains implementation details. It is not part of the
    //! public API. Types and functions in this module may be changed or removed
    //! without warnings. Applications should not use any types contained
    //! within.
    use super::RequestOptions;

    /// Simplify implementation of the [super::RequestOptionsBuilder] trait in
    /// generated code.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }
}

/// Implements the sealed [RequestOptionsBuilder] trait.
impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_idempotency(mut self, v: bool) -> Self {
        self.request_options().set_idempotency(v);
        self
    }

    fn with_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.request_options().set_timeout(v);
        self
    }

    fn with_retry_policy<V: Into<RetryPolicy>>(mut self, v: V) -> Self {
        self.request_options().set_retry_policy(v);
        self
    }

    fn with_metadata<K: Into<String>, V: Into<String>>(mut self, k: K, v: V) -> Self {
        self.request_options().insert_metadata(k, v);
        self
    }

    fn with_quota_project<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_quota_project(v);
        self
    }
}
