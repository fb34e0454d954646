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

use super::CredentialsError;
use super::rpc::{Code, Status};
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The error type for all the client libraries.
///
/// A request can fail before it is sent: the configuration is incomplete,
/// an input is malformed, or the credentials cannot produce headers. It can
/// fail on the wire, or the service may reject it with a [Status]. Finally it
/// can run out of time.
///
/// Each case has a predicate (`is_*()`). The underlying cause, when there is
/// one, is available as the [source][std::error::Error::source].
///
/// # Example
/// ```
/// use google_cloud_gax::error::Error;
/// use google_cloud_gax::error::rpc::{Code, Status};
///
/// fn describe(result: Result<String, Error>) -> String {
///     match result {
///         Ok(v) => v,
///         Err(e) if e.is_timeout() => "too slow".to_string(),
///         Err(e) if e.code() == Some(Code::NotFound) => "missing".to_string(),
///         Err(e) => format!("failed: {e}"),
///     }
/// }
///
/// let status = Status::default().set_code(Code::NotFound).set_message("no such table");
/// assert_eq!(describe(Err(Error::service(status))), "missing");
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    response: Option<Box<HttpResponse>>,
    source: Option<BoxError>,
}

#[derive(Debug)]
enum ErrorKind {
    Configuration,
    Validation,
    Serialization,
    Deserialization,
    Authentication,
    Timeout,
    Connect,
    Transport,
    Service(Box<Status>),
}

impl ErrorKind {
    fn describe(&self) -> &'static str {
        match self {
            Self::Configuration => "incomplete client configuration",
            Self::Validation => "invalid request",
            Self::Serialization => "cannot serialize the request",
            Self::Deserialization => "cannot deserialize the response",
            Self::Authentication => "cannot create the authentication headers",
            Self::Timeout => "the request deadline expired",
            Self::Connect => "cannot connect to the service",
            Self::Transport => "transport error",
            Self::Service(_) => "service error",
        }
    }
}

/// What is known about the HTTP response of a failed request.
#[derive(Debug, Default)]
struct HttpResponse {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    payload: Option<bytes::Bytes>,
}

impl Error {
    fn new(kind: ErrorKind, source: Option<BoxError>) -> Self {
        Self {
            kind,
            response: None,
            source,
        }
    }

    fn with_response(mut self, response: HttpResponse) -> Self {
        self.response = Some(Box::new(response));
        self
    }

    /// A required setting was not resolved by any configuration scope.
    ///
    /// # Example
    /// ```
    /// use google_cloud_gax::error::Error;
    /// let error = Error::configuration("missing endpoint");
    /// assert!(error.is_configuration());
    /// ```
    pub fn configuration<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Configuration, Some(source.into()))
    }

    /// The client configuration is incomplete. Raised before any network
    /// activity, never retried.
    pub fn is_configuration(&self) -> bool {
        matches!(self.kind, ErrorKind::Configuration)
    }

    /// A request field supplied by the application is missing or malformed.
    pub fn validation<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Validation, Some(source.into()))
    }

    /// The request was rejected locally, before it was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind, ErrorKind::Validation)
    }

    /// The service rejected the request with `status`.
    ///
    /// # Example
    /// ```
    /// use google_cloud_gax::error::Error;
    /// use google_cloud_gax::error::rpc::{Code, Status};
    /// let status = Status::default().set_code(Code::NotFound).set_message("NOT FOUND");
    /// let error = Error::service(status.clone());
    /// assert_eq!(error.status(), Some(&status));
    /// ```
    pub fn service(status: Status) -> Self {
        Self::new(ErrorKind::Service(Box::new(status)), None)
    }

    /// A service error received over HTTP, keeping the status code and
    /// headers of the response.
    pub fn service_with_http_metadata(
        status: Status,
        status_code: Option<u16>,
        headers: Option<HeaderMap>,
    ) -> Self {
        Self::service(status).with_response(HttpResponse {
            status_code,
            headers,
            payload: None,
        })
    }

    /// The request did not complete before its deadline.
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Timeout, Some(source.into()))
    }

    /// The request could not be completed before its deadline.
    ///
    /// Always raised on the client side. The request may still complete in
    /// the service. The retry loop never retries this error.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Deserialization, Some(source.into()))
    }

    /// The response did not match the expected schema.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Serialization, Some(source.into()))
    }

    /// The request, or one of its headers, could not be encoded.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    pub fn authentication(source: CredentialsError) -> Self {
        Self::new(ErrorKind::Authentication, Some(source.into()))
    }

    /// The credentials could not produce the authentication headers.
    ///
    /// The [source][std::error::Error::source] is a [CredentialsError].
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// An HTTP error response without a parseable [Status] payload.
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        Self::new(ErrorKind::Transport, None).with_response(HttpResponse {
            status_code: Some(status_code),
            headers: Some(headers),
            payload: Some(payload),
        })
    }

    /// The connection failed, or the response body could not be read.
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Transport, Some(source.into()))
    }

    /// The connection to the service could not be established.
    ///
    /// These errors report [Code::Unavailable] as their [code][Error::code],
    /// so retry policies treat them like an unavailable service.
    ///
    /// # Example
    /// ```
    /// use google_cloud_gax::error::Error;
    /// use google_cloud_gax::error::rpc::Code;
    /// let error = Error::connect("connection refused");
    /// assert!(error.is_connect());
    /// assert!(error.is_transport());
    /// assert_eq!(error.code(), Some(Code::Unavailable));
    /// ```
    pub fn connect<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Connect, Some(source.into()))
    }

    /// The request was never sent because the connection failed.
    pub fn is_connect(&self) -> bool {
        matches!(self.kind, ErrorKind::Connect)
    }

    /// A transport failure after the response headers arrived.
    pub fn transport<T: Into<BoxError>>(headers: HeaderMap, source: T) -> Self {
        Self::io(source).with_response(HttpResponse {
            headers: Some(headers),
            ..HttpResponse::default()
        })
    }

    /// The request failed below the service, in the HTTP or gRPC layer.
    ///
    /// Well-formed service errors are reported with [status()][Error::status]
    /// instead.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, ErrorKind::Transport | ErrorKind::Connect)
    }

    /// The [Status] returned by the service, if any.
    pub fn status(&self) -> Option<&Status> {
        match &self.kind {
            ErrorKind::Service(s) => Some(s),
            _ => None,
        }
    }

    /// The canonical code for this error.
    ///
    /// Service errors carry the code in their [Status]. HTTP errors without
    /// a status payload map the HTTP status code. Connection failures are
    /// [Code::Unavailable].
    pub fn code(&self) -> Option<Code> {
        match &self.kind {
            ErrorKind::Service(s) => Some(s.code),
            ErrorKind::Connect => Some(Code::Unavailable),
            ErrorKind::Transport => self.http_status_code().map(Code::from_http_status),
            _ => None,
        }
    }

    pub fn http_status_code(&self) -> Option<u16> {
        self.response.as_ref().and_then(|r| r.status_code)
    }

    pub fn http_headers(&self) -> Option<&HeaderMap> {
        self.response.as_ref().and_then(|r| r.headers.as_ref())
    }

    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        self.response.as_ref().and_then(|r| r.payload.as_ref())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.kind.describe())?;
        if let ErrorKind::Service(s) = &self.kind {
            write!(f, " [{}]: {}", s.code, s.message)?;
        }
        if let Some(code) = self.http_status_code() {
            write!(f, ", HTTP status {code}")?;
        }
        if let Some(payload) = self.http_payload() {
            match std::str::from_utf8(payload) {
                Ok(text) => write!(f, ": {text}")?,
                Err(_) => write!(f, ": {payload:?}")?,
            }
        }
        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn StdError))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn configuration() {
        let error = Error::configuration("missing endpoint");
        assert!(error.is_configuration(), "{error:?}");
        assert!(!error.is_validation(), "{error:?}");
        assert!(error.to_string().contains("missing endpoint"), "{error}");
        assert!(error.code().is_none(), "{error:?}");
    }

    #[test]
    fn validation() {
        let error = Error::validation("empty table id");
        assert!(error.is_validation(), "{error:?}");
        assert!(!error.is_configuration(), "{error:?}");
        assert!(error.to_string().contains("empty table id"), "{error}");
    }

    #[test]
    fn service() {
        let status = Status::default()
            .set_code(Code::NotFound)
            .set_message("NOT FOUND");
        let error = Error::service(status.clone());
        assert!(error.source().is_none(), "{error:?}");
        assert_eq!(error.status(), Some(&status));
        assert_eq!(error.code(), Some(Code::NotFound));
        assert!(error.to_string().contains("NOT FOUND"), "{error}");
        assert!(error.to_string().contains(Code::NotFound.name()), "{error}");
        assert!(error.http_status_code().is_none(), "{error:?}");
    }

    #[test]
    fn service_with_http_metadata() {
        let status = Status::default()
            .set_code(Code::Unavailable)
            .set_message("try again");
        let mut headers = HeaderMap::new();
        headers.insert("content-type", http::HeaderValue::from_static("application/json"));
        let error = Error::service_with_http_metadata(status, Some(503), Some(headers.clone()));
        assert_eq!(error.http_status_code(), Some(503));
        assert_eq!(error.http_headers(), Some(&headers));
        assert_eq!(error.code(), Some(Code::Unavailable));
    }

    #[test]
    fn timeout() {
        let error = Error::timeout("deadline elapsed");
        assert!(error.is_timeout(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(error.code().is_none(), "{error:?}");
        assert!(error.status().is_none(), "{error:?}");
    }

    #[test]
    fn http() {
        let error = Error::http(429, HeaderMap::new(), bytes::Bytes::from_static(b"slow down"));
        assert!(error.is_transport(), "{error:?}");
        assert_eq!(error.http_status_code(), Some(429));
        assert_eq!(error.code(), Some(Code::ResourceExhausted));
        assert_eq!(
            error.http_payload(),
            Some(&bytes::Bytes::from_static(b"slow down"))
        );
        assert!(error.to_string().contains("slow down"), "{error}");
    }

    #[test]
    fn io() {
        let error = Error::io("connection reset");
        assert!(error.is_transport(), "{error:?}");
        assert!(error.code().is_none(), "{error:?}");
        assert!(error.to_string().contains("connection reset"), "{error}");
        assert!(!error.is_connect(), "{error:?}");
    }

    #[test]
    fn connect() {
        let error = Error::connect("connection refused");
        assert!(error.is_connect(), "{error:?}");
        assert!(error.is_transport(), "{error:?}");
        assert_eq!(error.code(), Some(Code::Unavailable));
        assert!(error.status().is_none(), "{error:?}");
        assert!(error.to_string().contains("connection refused"), "{error}");
    }

    #[test]
    fn authentication() {
        let error = Error::authentication(CredentialsError::from_msg(false, "bad key"));
        assert!(error.is_authentication(), "{error:?}");
        let source = error
            .source()
            .and_then(|e| e.downcast_ref::<CredentialsError>());
        assert!(matches!(source, Some(e) if !e.is_transient()), "{error:?}");
    }

    #[test]
    fn serialization() {
        let error = Error::ser("bad header");
        assert!(error.is_serialization(), "{error:?}");
        let error = Error::deser("bad payload");
        assert!(error.is_deserialization(), "{error:?}");
    }
}
