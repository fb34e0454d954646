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

//! Errors raised while using credentials.
//!
//! Creating the credentials can fail with a [build error][crate::build_errors].
//! Once created, credentials may still fail to produce headers, for example if
//! the token endpoint is unreachable. Those failures are reported as a
//! [CredentialsError], which the client libraries wrap in
//! [gax::error::Error::authentication].

use http::StatusCode;
use std::error::Error;

pub use gax::error::CredentialsError;

/// A transient problem, future attempts may succeed.
pub(crate) fn retryable<T: Error + Send + Sync + 'static>(source: T) -> CredentialsError {
    CredentialsError::new(true, source)
}

/// A permanent problem, retrying will not help.
pub(crate) fn non_retryable<T: Error + Send + Sync + 'static>(source: T) -> CredentialsError {
    CredentialsError::new(false, source)
}

pub(crate) fn non_retryable_from_str<T: Into<String>>(message: T) -> CredentialsError {
    CredentialsError::from_msg(false, message)
}

/// Token endpoints return these codes for problems that may go away.
pub(crate) fn is_retryable(c: StatusCode) -> bool {
    match c {
        StatusCode::INTERNAL_SERVER_ERROR
        | StatusCode::SERVICE_UNAVAILABLE
        | StatusCode::REQUEST_TIMEOUT
        | StatusCode::TOO_MANY_REQUESTS => true,
        c => c.is_server_error(),
    }
}

/// Converts an unsuccessful token endpoint response into an error.
pub(crate) async fn from_http_response(response: reqwest::Response, what: &str) -> CredentialsError {
    let status = response.status();
    let retryable = is_retryable(status);
    match response.text().await {
        Ok(body) => CredentialsError::from_msg(
            retryable,
            format!("failed to fetch {what}, status={status}, body={body}"),
        ),
        Err(e) => CredentialsError::from_source(
            retryable,
            format!("failed to fetch {what}, status={status}"),
            e,
        ),
    }
}
