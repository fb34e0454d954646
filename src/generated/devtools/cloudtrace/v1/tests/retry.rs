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

#[cfg(test)]
mod retry {
    use auth::credentials::anonymous;
    use gax::error::rpc::Code;
    use gax::options::RequestOptionsBuilder;
    use gax::retry_policy::RetryPolicy;
    use google_cloud_trace_v1::client::TraceService;
    use google_cloud_trace_v1::model;
    use pretty_assertions::assert_eq;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};
    use std::task::{Context, Poll};
    use std::time::Duration;
    use tonic::body::Body;
    use tonic::codegen::BoxFuture;

    const GET_TRACE: &str = "/google.devtools.cloudtrace.v1.TraceService/GetTrace";
    const PATCH_TRACES: &str = "/google.devtools.cloudtrace.v1.TraceService/PatchTraces";

    /// A Cloud Trace server that fails with the queued statuses before
    /// answering successfully.
    #[derive(Clone, Default)]
    struct FakeTraceService {
        failures: Arc<Mutex<VecDeque<tonic::Status>>>,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl FakeTraceService {
        fn failing_with<I: IntoIterator<Item = tonic::Status>>(failures: I) -> Self {
            Self {
                failures: Arc::new(Mutex::new(failures.into_iter().collect())),
                ..Default::default()
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().expect("calls are never poisoned").clone()
        }
    }

    impl tonic::server::NamedService for FakeTraceService {
        const NAME: &'static str = "google.devtools.cloudtrace.v1.TraceService";
    }

    impl tonic::codegen::Service<http::Request<Body>> for FakeTraceService {
        type Response = http::Response<Body>;
        type Error = std::convert::Infallible;
        type Future = BoxFuture<Self::Response, Self::Error>;

        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, req: http::Request<Body>) -> Self::Future {
            let path = req.uri().path().to_string();
            self.calls
                .lock()
                .expect("calls are never poisoned")
                .push(path.clone());
            let failure = self
                .failures
                .lock()
                .expect("failures are never poisoned")
                .pop_front();
            Box::pin(async move {
                if let Some(status) = failure {
                    return Ok(status.into_http());
                }
                let response = match path.as_str() {
                    GET_TRACE => {
                        let codec =
                            tonic_prost::ProstCodec::<model::Trace, model::GetTraceRequest>::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        grpc.unary(Reply(trace("t-1")), req).await
                    }
                    PATCH_TRACES => {
                        let codec =
                            tonic_prost::ProstCodec::<(), model::PatchTracesRequest>::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        grpc.unary(Reply(()), req).await
                    }
                    _ => tonic::Status::unimplemented(path.clone()).into_http(),
                };
                Ok(response)
            })
        }
    }

    /// Answers every request with the same message.
    #[derive(Clone)]
    struct Reply<T>(T);

    impl<R, T> tonic::server::UnaryService<R> for Reply<T>
    where
        T: Clone + Send + 'static,
    {
        type Response = T;
        type Future = std::future::Ready<tonic::Result<tonic::Response<T>>>;

        fn call(&mut self, _request: tonic::Request<R>) -> Self::Future {
            std::future::ready(Ok(tonic::Response::new(self.0.clone())))
        }
    }

    fn trace(id: &str) -> model::Trace {
        model::Trace {
            project_id: "my-project".into(),
            trace_id: id.into(),
            ..Default::default()
        }
    }

    fn unavailable() -> tonic::Status {
        tonic::Status::unavailable("try again")
    }

    async fn start(
        service: FakeTraceService,
    ) -> anyhow::Result<(String, tokio::task::JoinHandle<()>)> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let server = tokio::spawn(async move {
            let _ = tonic::transport::Server::builder()
                .add_service(service)
                .serve_with_incoming(tokio_stream::wrappers::TcpListenerStream::new(listener))
                .await;
        });
        Ok((format!("http://{addr}"), server))
    }

    async fn client(endpoint: String) -> anyhow::Result<TraceService> {
        let policy = RetryPolicy::builder()
            .with_initial_delay(Duration::from_millis(1))
            .with_max_delay(Duration::from_millis(10))
            .with_retry_codes([Code::Unavailable])
            .build()?;
        let client = TraceService::builder()
            .with_endpoint(endpoint)
            .with_credentials(anonymous::Builder::new().build())
            .with_retry_policy(policy)
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test]
    async fn get_trace_fails_twice_then_succeeds() -> anyhow::Result<()> {
        let service = FakeTraceService::failing_with([unavailable(), unavailable()]);
        let (endpoint, server) = start(service.clone()).await?;
        let client = client(endpoint).await?;

        let response = client
            .get_trace()
            .set_project_id("my-project")
            .set_trace_id("t-1")
            .send()
            .await?;
        assert_eq!(response, trace("t-1"));
        assert_eq!(service.calls(), vec![GET_TRACE.to_string(); 3]);

        server.abort();
        Ok(())
    }

    #[tokio::test]
    async fn patch_traces_is_retried() -> anyhow::Result<()> {
        let service = FakeTraceService::failing_with([unavailable(), unavailable()]);
        let (endpoint, server) = start(service.clone()).await?;
        let client = client(endpoint).await?;

        client
            .patch_traces()
            .set_project_id("my-project")
            .set_traces(model::Traces {
                traces: vec![trace("t-1")],
            })
            .send()
            .await?;
        assert_eq!(service.calls(), vec![PATCH_TRACES.to_string(); 3]);

        server.abort();
        Ok(())
    }

    #[tokio::test]
    async fn opt_out_returns_first_failure() -> anyhow::Result<()> {
        let service = FakeTraceService::failing_with([unavailable(), unavailable()]);
        let (endpoint, server) = start(service.clone()).await?;
        let client = client(endpoint).await?;

        let err = client
            .patch_traces()
            .set_project_id("my-project")
            .with_idempotency(false)
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.code(), Some(Code::Unavailable), "{err:?}");
        assert_eq!(service.calls(), vec![PATCH_TRACES.to_string()]);

        server.abort();
        Ok(())
    }

    #[tokio::test]
    async fn non_retryable_code_is_not_retried() -> anyhow::Result<()> {
        let service = FakeTraceService::failing_with([tonic::Status::not_found("no trace")]);
        let (endpoint, server) = start(service.clone()).await?;
        let client = client(endpoint).await?;

        let err = client
            .get_trace()
            .set_project_id("my-project")
            .set_trace_id("t-404")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.code(), Some(Code::NotFound), "{err:?}");
        assert_eq!(service.calls(), vec![GET_TRACE.to_string()]);

        server.abort();
        Ok(())
    }
}
