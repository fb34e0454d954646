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

//! Retry loop control types.

use crate::error::Error;

/// The result of a retry decision.
///
/// # Example
///
/// ```
/// # use google_cloud_gax::error::Error;
/// # use google_cloud_gax::error::rpc::{Code, Status};
/// # use google_cloud_gax::retry_policy::RetryPolicy;
/// # use google_cloud_gax::retry_result::RetryResult;
/// let policy = RetryPolicy::builder()
///     .with_retry_codes([Code::Unavailable])
///     .build()?;
/// let error = Error::service(Status::default().set_code(Code::Unavailable));
/// assert!(policy.on_error(true, error).is_continue());
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug)]
pub enum RetryResult {
    /// The error is non-retryable, stop the loop.
    Permanent(Error),

    /// The error is retryable, continue the loop.
    Continue(Error),
}

impl RetryResult {
    pub fn is_permanent(&self) -> bool {
        matches!(self, Self::Permanent(_))
    }

    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }

    /// Consumes the result and returns the underlying error.
    pub fn into_error(self) -> Error {
        match self {
            Self::Permanent(e) | Self::Continue(e) => e,
        }
    }
}
