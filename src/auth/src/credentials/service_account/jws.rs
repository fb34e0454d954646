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
use crate::errors;
use base64::prelude::{BASE64_URL_SAFE_NO_PAD, Engine as _};
use serde::Serialize;
use std::time::Duration;
use time::OffsetDateTime;

// Services reject assertions issued in the future. Backdate the assertion to
// tolerate clock skew between this machine and the service.
pub(crate) const CLOCK_SKEW_FUDGE: Duration = Duration::from_secs(10);
pub(crate) const DEFAULT_TOKEN_TIMEOUT: Duration = Duration::from_secs(3600);

/// Who the self-signed JWT is for.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Target {
    /// The `aud` claim, as in `https://bigquery.googleapis.com/`.
    Audience(String),
    /// The `scope` claim, space separated.
    Scopes(String),
}

/// The claims of a self-signed JWT.
#[derive(Serialize)]
pub(crate) struct JwsClaims<'a> {
    pub iss: &'a str,
    pub sub: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<&'a str>,
    pub iat: i64,
    pub exp: i64,
}

impl<'a> JwsClaims<'a> {
    pub fn new(email: &'a str, target: &'a Target, now: OffsetDateTime) -> Self {
        let (aud, scope) = match target {
            Target::Audience(a) => (Some(a.as_str()), None),
            Target::Scopes(s) => (None, Some(s.as_str())),
        };
        let iat = now - CLOCK_SKEW_FUDGE;
        Self {
            iss: email,
            sub: email,
            aud,
            scope,
            iat: iat.unix_timestamp(),
            exp: (iat + DEFAULT_TOKEN_TIMEOUT).unix_timestamp(),
        }
    }

    pub fn encode(&self) -> Result<String> {
        if self.exp < self.iat {
            return Err(errors::non_retryable_from_str(format!(
                "expiration time {} must be later than issued time {}",
                self.exp, self.iat
            )));
        }
        let json = serde_json::to_string(&self).map_err(errors::non_retryable)?;
        Ok(BASE64_URL_SAFE_NO_PAD.encode(json.as_bytes()))
    }
}

/// The JOSE header of a self-signed JWT.
#[derive(Serialize)]
pub(crate) struct JwsHeader<'a> {
    pub alg: &'a str,
    pub typ: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kid: Option<&'a str>,
}

impl JwsHeader<'_> {
    pub fn encode(&self) -> Result<String> {
        let json = serde_json::to_string(&self).map_err(errors::non_retryable)?;
        Ok(BASE64_URL_SAFE_NO_PAD.encode(json.as_bytes()))
    }
}
