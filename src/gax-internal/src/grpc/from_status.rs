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

use gax::error::Error;
use gax::error::rpc::Status;
use std::error::Error as _;

/// Where a failed gRPC call broke down.
#[derive(Debug, PartialEq)]
enum Failure {
    /// The client-side deadline expired.
    Deadline,
    /// No connection, or the connection dropped.
    Connection,
    /// The peer answered, but not with gRPC.
    NotGrpc,
    /// The service returned a status.
    Service,
}

/// Searches the `source()` chain of `status` for an error of type `T`.
fn caused_by<T>(status: &tonic::Status) -> bool
where
    T: std::error::Error + 'static,
{
    std::iter::successors(status.source(), |e| (*e).source())
        .take(32)
        .any(|e| e.is::<T>())
}

fn classify(status: &tonic::Status) -> Failure {
    if caused_by::<tonic::TimeoutExpired>(status) {
        return Failure::Deadline;
    }
    if caused_by::<tonic::ConnectError>(status) || caused_by::<tonic::transport::Error>(status) {
        return Failure::Connection;
    }
    let grpc = status
        .metadata()
        .get("content-type")
        .is_none_or(|v| v.as_bytes().starts_with(b"application/grpc"));
    if grpc { Failure::Service } else { Failure::NotGrpc }
}

/// Converts a gRPC status into the client library error.
///
/// The status details are not decoded.
pub fn to_gax_error(status: tonic::Status) -> Error {
    match classify(&status) {
        Failure::Deadline => Error::timeout(status),
        Failure::Connection => Error::connect(status),
        Failure::NotGrpc => {
            let headers = status.metadata().clone().into_headers();
            Error::transport(headers, GrpcError::BadContentType(status))
        }
        Failure::Service => {
            let converted = Status::default()
                .set_code(status.code() as i32)
                .set_message(status.message());
            let headers = status.metadata().clone().into_headers();
            Error::service_with_http_metadata(converted, None, Some(headers))
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum GrpcError {
    #[error("the response content-type is not application/grpc, the endpoint may not support gRPC")]
    BadContentType(#[source] tonic::Status),
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::rpc::Code;
    use std::error::Error as _;
    use test_case::test_case;

    #[test_case(tonic::Code::Ok, Code::Ok)]
    #[test_case(tonic::Code::Cancelled, Code::Cancelled)]
    #[test_case(tonic::Code::Unknown, Code::Unknown)]
    #[test_case(tonic::Code::InvalidArgument, Code::InvalidArgument)]
    #[test_case(tonic::Code::DeadlineExceeded, Code::DeadlineExceeded)]
    #[test_case(tonic::Code::NotFound, Code::NotFound)]
    #[test_case(tonic::Code::AlreadyExists, Code::AlreadyExists)]
    #[test_case(tonic::Code::PermissionDenied, Code::PermissionDenied)]
    #[test_case(tonic::Code::ResourceExhausted, Code::ResourceExhausted)]
    #[test_case(tonic::Code::FailedPrecondition, Code::FailedPrecondition)]
    #[test_case(tonic::Code::Aborted, Code::Aborted)]
    #[test_case(tonic::Code::OutOfRange, Code::OutOfRange)]
    #[test_case(tonic::Code::Unimplemented, Code::Unimplemented)]
    #[test_case(tonic::Code::Internal, Code::Internal)]
    #[test_case(tonic::Code::Unavailable, Code::Unavailable)]
    #[test_case(tonic::Code::DataLoss, Code::DataLoss)]
    #[test_case(tonic::Code::Unauthenticated, Code::Unauthenticated)]
    fn status_codes(input: tonic::Code, want: Code) {
        let status = tonic::Status::new(input, "test-only-message");
        let got = to_gax_error(status);
        assert_eq!(got.code(), Some(want), "{got:?}");
        assert_eq!(
            got.status().map(|s| s.message.as_str()),
            Some("test-only-message")
        );
    }

    #[test]
    fn keeps_headers() {
        let mut metadata = tonic::metadata::MetadataMap::new();
        metadata.insert("content-type", "application/grpc".parse().expect("valid value"));
        metadata.insert("x-test-only", "value".parse().expect("valid value"));
        let status = tonic::Status::with_metadata(tonic::Code::NotFound, "missing", metadata);
        let got = to_gax_error(status);
        assert_eq!(got.code(), Some(Code::NotFound));
        let value = got
            .http_headers()
            .and_then(|h| h.get("x-test-only"))
            .and_then(|v| v.to_str().ok());
        assert_eq!(value, Some("value"));
    }

    #[test]
    fn bad_content_type() {
        let mut metadata = tonic::metadata::MetadataMap::new();
        metadata.insert("content-type", "text/html".parse().expect("valid value"));
        let status = tonic::Status::with_metadata(tonic::Code::Unknown, "html", metadata);
        let got = to_gax_error(status);
        assert!(got.is_transport(), "{got:?}");
        assert!(got.status().is_none(), "{got:?}");
        let source = got.source().and_then(|e| e.downcast_ref::<GrpcError>());
        assert!(
            matches!(source, Some(GrpcError::BadContentType(_))),
            "{got:?}"
        );
    }

    #[test]
    fn classify_without_content_type() {
        let status = tonic::Status::new(tonic::Code::Unavailable, "try again");
        assert_eq!(classify(&status), Failure::Service);
    }
}
