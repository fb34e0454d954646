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

//! Retry policies.
//!
//! A [RetryPolicy] decides whether a failed attempt is retried, and how long
//! the client waits before the next attempt. The decision is based only on the
//! canonical [Code] of the error: an error is retryable when its code is in
//! the configured set of retryable codes. Requests explicitly marked as not
//! idempotent are never retried.
//!
//! Retry policies do not limit the number of attempts. The retry loop stops
//! when the overall timeout for the request expires.

use crate::error::Error;
use crate::error::rpc::Code;
use crate::exponential_backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use crate::retry_result::RetryResult;
use std::collections::BTreeSet;
use std::time::Duration;

/// Decides if a failed attempt is retried and with what backoff.
///
/// The default policy waits one second before the first retry, grows the
/// delay by a factor of 1.3 on each attempt up to fifteen seconds, and does
/// not retry any status code.
///
/// # Example
/// ```
/// # use google_cloud_gax::error::rpc::Code;
/// # use google_cloud_gax::retry_policy::RetryPolicy;
/// use std::time::Duration;
/// let policy = RetryPolicy::builder()
///     .with_initial_delay(Duration::from_millis(100))
///     .with_max_delay(Duration::from_secs(60))
///     .with_multiplier(2.0)
///     .with_retry_codes([Code::Unavailable, Code::DeadlineExceeded])
///     .build()?;
/// assert_eq!(policy.delay(2), Duration::from_millis(200));
/// # Ok::<(), google_cloud_gax::error::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RetryPolicy {
    backoff: ExponentialBackoff,
    retry_codes: BTreeSet<Code>,
}

impl RetryPolicy {
    /// Returns a builder with the default parameters.
    pub fn builder() -> RetryPolicyBuilder {
        RetryPolicyBuilder::default()
    }

    /// The delay before the first retry.
    pub fn initial_delay(&self) -> Duration {
        self.backoff.initial_delay()
    }

    /// The maximum delay between two attempts.
    pub fn max_delay(&self) -> Duration {
        self.backoff.maximum_delay()
    }

    /// The growth factor for the delay.
    pub fn multiplier(&self) -> f64 {
        self.backoff.scaling()
    }

    /// The status codes considered retryable.
    pub fn retry_codes(&self) -> &BTreeSet<Code> {
        &self.retry_codes
    }

    /// Returns true if `error` has a code in the retryable set.
    ///
    /// Timeouts, and errors raised before the request is sent, are never
    /// retryable.
    pub fn is_retryable(&self, error: &Error) -> bool {
        if error.is_timeout()
            || error.is_configuration()
            || error.is_validation()
            || error.is_serialization()
        {
            return false;
        }
        error
            .code()
            .is_some_and(|code| self.retry_codes.contains(&code))
    }

    /// Query the policy after an error.
    ///
    /// `idempotent` is false only for requests that opted out of retries.
    pub fn on_error(&self, idempotent: bool, error: Error) -> RetryResult {
        if idempotent && self.is_retryable(&error) {
            RetryResult::Continue(error)
        } else {
            RetryResult::Permanent(error)
        }
    }

    /// The backoff delay after `attempt_count` failed attempts.
    pub fn delay(&self, attempt_count: u32) -> Duration {
        self.backoff.delay(attempt_count)
    }
}

/// Builds a [RetryPolicy], validating its parameters.
#[derive(Clone, Debug, Default)]
pub struct RetryPolicyBuilder {
    backoff: ExponentialBackoffBuilder,
    retry_codes: BTreeSet<Code>,
}

impl RetryPolicyBuilder {
    /// Sets the delay before the first retry. Must be greater than zero.
    pub fn with_initial_delay<V: Into<Duration>>(mut self, v: V) -> Self {
        self.backoff = self.backoff.with_initial_delay(v);
        self
    }

    /// Sets the maximum delay. Must be at least the initial delay.
    pub fn with_max_delay<V: Into<Duration>>(mut self, v: V) -> Self {
        self.backoff = self.backoff.with_maximum_delay(v);
        self
    }

    /// Sets the delay multiplier. Must be at least 1.0.
    pub fn with_multiplier<V: Into<f64>>(mut self, v: V) -> Self {
        self.backoff = self.backoff.with_scaling(v);
        self
    }

    /// Replaces the set of retryable status codes.
    pub fn with_retry_codes<I>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = Code>,
    {
        self.retry_codes = codes.into_iter().collect();
        self
    }

    /// Creates the policy.
    ///
    /// Invalid backoff parameters are reported as a validation error.
    pub fn build(self) -> crate::Result<RetryPolicy> {
        let backoff = self.backoff.build().map_err(Error::validation)?;
        Ok(RetryPolicy {
            backoff,
            retry_codes: self.retry_codes,
        })
    }
}
