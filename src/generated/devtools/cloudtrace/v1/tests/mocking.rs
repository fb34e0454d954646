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
mod mocking {
    use gax::error::Error;
    use gax::error::rpc::{Code, Status};
    use gax::options::RequestOptions;
    use gax::options::RequestOptionsBuilder;
    use google_cloud_trace_v1::client::TraceService;
    use google_cloud_trace_v1::model;
    use model::list_traces_request::ViewType;
    use model::trace_span::SpanKind;
    use pretty_assertions::assert_eq;

    mockall::mock! {
        #[derive(Debug)]
        TraceService {}
        impl google_cloud_trace_v1::stub::TraceService for TraceService {
            async fn list_traces(&self, req: model::ListTracesRequest, options: RequestOptions) -> gax::Result<model::ListTracesResponse>;
            async fn get_trace(&self, req: model::GetTraceRequest, options: RequestOptions) -> gax::Result<model::Trace>;
            async fn patch_traces(&self, req: model::PatchTracesRequest, options: RequestOptions) -> gax::Result<()>;
        }
    }

    fn trace(id: &str) -> model::Trace {
        model::Trace {
            project_id: "my-project".into(),
            trace_id: id.into(),
            spans: vec![model::TraceSpan {
                span_id: 2205310701640571284,
                kind: SpanKind::RpcServer as i32,
                name: "/api/v1/items".into(),
                labels: [("/http/method".to_string(), "GET".to_string())].into(),
                ..Default::default()
            }],
        }
    }

    #[tokio::test]
    async fn list_traces() -> anyhow::Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockTraceService::new();
        mock.expect_list_traces()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|r, _| {
                r.project_id == "my-project"
                    && r.view() == ViewType::Complete
                    && r.filter == "+root:/api"
                    && r.order_by == "duration desc"
                    && r.page_token.is_empty()
            })
            .returning(|_, _| {
                Ok(model::ListTracesResponse {
                    traces: vec![trace("t-1"), trace("t-2")],
                    next_page_token: "p2".into(),
                })
            });
        mock.expect_list_traces()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|r, _| r.page_token == "p2")
            .returning(|_, _| {
                Ok(model::ListTracesResponse {
                    traces: vec![trace("t-3")],
                    next_page_token: String::new(),
                })
            });

        let client = TraceService::from_stub(mock);
        let mut items = client
            .list_traces()
            .set_project_id("my-project")
            .set_view(ViewType::Complete)
            .set_filter("+root:/api")
            .set_order_by("duration desc")
            .by_item();
        let mut got = Vec::new();
        while let Some(item) = items.next().await {
            got.push(item?.trace_id);
        }
        assert_eq!(got, vec!["t-1", "t-2", "t-3"]);
        Ok(())
    }

    #[tokio::test]
    async fn get_trace() -> anyhow::Result<()> {
        let mut mock = MockTraceService::new();
        mock.expect_get_trace()
            .times(1)
            .withf(|r, o| r.project_id == "my-project" && r.trace_id == "t-1" && o.idempotent().is_none())
            .returning(|r, _| Ok(trace(&r.trace_id)));

        let client = TraceService::from_stub(mock);
        let got = client
            .get_trace()
            .set_project_id("my-project")
            .set_trace_id("t-1")
            .send()
            .await?;
        assert_eq!(got, trace("t-1"));
        assert_eq!(got.spans[0].kind(), SpanKind::RpcServer);
        Ok(())
    }

    #[tokio::test]
    async fn patch_traces_idempotency_override() -> anyhow::Result<()> {
        let mut mock = MockTraceService::new();
        mock.expect_patch_traces()
            .times(1)
            .withf(|r, o| {
                r.traces.as_ref().map(|t| t.traces.len()) == Some(1)
                    && o.idempotent().is_none()
            })
            .returning(|_, _| Ok(()));
        mock.expect_patch_traces()
            .times(1)
            .withf(|_, o| o.idempotent() == Some(false))
            .returning(|_, _| {
                Err(Error::service(
                    Status::default()
                        .set_code(Code::InvalidArgument)
                        .set_message("missing project"),
                ))
            });

        let client = TraceService::from_stub(mock);
        let traces = model::Traces {
            traces: vec![trace("t-1")],
        };
        client
            .patch_traces()
            .set_project_id("my-project")
            .set_traces(traces.clone())
            .send()
            .await?;

        // Applications may opt out of retries for a single call.
        let got = client
            .patch_traces()
            .set_traces(traces)
            .with_idempotency(false)
            .send()
            .await;
        assert!(
            matches!(&got, Err(e) if e.code() == Some(Code::InvalidArgument)),
            "{got:?}"
        );
        Ok(())
    }

    #[test]
    fn span_wire_format() -> anyhow::Result<()> {
        use prost::Message;
        let span = model::TraceSpan {
            span_id: 1,
            parent_span_id: 0,
            ..Default::default()
        };
        // `span_id` is a fixed64, and unset fields are not sent.
        assert_eq!(span.encode_to_vec(), vec![0x09, 1, 0, 0, 0, 0, 0, 0, 0]);
        let span = trace("t-1").spans.remove(0);
        assert_eq!(model::TraceSpan::decode(span.encode_to_vec().as_slice())?, span);
        Ok(())
    }
}
