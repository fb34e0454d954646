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
    use gax::options::RequestOptions;
    use google_cloud_websecurityscanner_v1beta::client::WebSecurityScanner;
    use google_cloud_websecurityscanner_v1beta::model;
    use model::scan_run::{ExecutionState, ResultState};
    use model::scan_run_error_trace::Code;
    use pretty_assertions::assert_eq;

    const PARENT: &str = "projects/my-project/scanConfigs/my-config";

    mockall::mock! {
        #[derive(Debug)]
        Scanner {}
        impl google_cloud_websecurityscanner_v1beta::stub::WebSecurityScanner for Scanner {
            async fn get_scan_run(&self, req: model::GetScanRunRequest, options: RequestOptions) -> gax::Result<model::ScanRun>;
            async fn list_scan_runs(&self, req: model::ListScanRunsRequest, options: RequestOptions) -> gax::Result<model::ListScanRunsResponse>;
        }
    }

    fn failed_run(name: &str) -> model::ScanRun {
        model::ScanRun {
            name: name.to_string(),
            execution_state: ExecutionState::Finished as i32,
            result_state: ResultState::Error as i32,
            error_trace: Some(model::ScanRunErrorTrace {
                code: Code::TooManyHttpErrors as i32,
                scan_config_error: None,
                most_common_http_error_code: 404,
            }),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn get_scan_run() -> anyhow::Result<()> {
        let name = format!("{PARENT}/scanRuns/run-1");
        let mut mock = MockScanner::new();
        mock.expect_get_scan_run()
            .times(1)
            .withf(|r, o| r.name.ends_with("/scanRuns/run-1") && o.idempotent().is_none())
            .returning(|r, _| Ok(failed_run(&r.name)));

        let client = WebSecurityScanner::from_stub(mock);
        let run = client.get_scan_run().set_name(&name).send().await?;
        assert_eq!(run.name, name);
        assert_eq!(run.execution_state(), ExecutionState::Finished);
        assert_eq!(run.result_state(), ResultState::Error);
        let trace = run.error_trace.unwrap_or_default();
        assert_eq!(trace.code(), Code::TooManyHttpErrors);
        assert_eq!(trace.most_common_http_error_code, 404);
        Ok(())
    }

    #[tokio::test]
    async fn list_scan_runs() -> anyhow::Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockScanner::new();
        mock.expect_list_scan_runs()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|r, _| r.parent == PARENT && r.page_size == 10 && r.page_token.is_empty())
            .returning(|r, _| {
                Ok(model::ListScanRunsResponse {
                    scan_runs: vec![
                        failed_run(&format!("{}/scanRuns/run-2", r.parent)),
                        failed_run(&format!("{}/scanRuns/run-1", r.parent)),
                    ],
                    next_page_token: "next".into(),
                })
            });
        mock.expect_list_scan_runs()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|r, _| r.page_token == "next")
            .returning(|_, _| Ok(model::ListScanRunsResponse::default()));

        let client = WebSecurityScanner::from_stub(mock);
        let mut items = client
            .list_scan_runs()
            .set_parent(PARENT)
            .set_page_size(10)
            .by_item();
        let mut got = Vec::new();
        while let Some(item) = items.next().await {
            got.push(item?.name);
        }
        assert_eq!(
            got,
            vec![
                format!("{PARENT}/scanRuns/run-2"),
                format!("{PARENT}/scanRuns/run-1"),
            ]
        );
        Ok(())
    }

    #[test]
    fn error_trace_wire_format() -> anyhow::Result<()> {
        use prost::Message;
        let trace = model::ScanRunErrorTrace {
            code: Code::ScanConfigIssue as i32,
            scan_config_error: Some(model::ScanConfigError {
                code: 1,
                field_name: "x".into(),
            }),
            most_common_http_error_code: 0,
        };
        let bytes = trace.encode_to_vec();
        assert_eq!(
            bytes,
            vec![0x08, 0x02, 0x12, 0x05, 0x08, 0x01, 0x12, 0x01, b'x']
        );
        assert_eq!(model::ScanRunErrorTrace::decode(bytes.as_slice())?, trace);
        Ok(())
    }

    #[test]
    fn error_codes() {
        for (code, name) in [
            (Code::Unspecified, "CODE_UNSPECIFIED"),
            (Code::InternalError, "INTERNAL_ERROR"),
            (Code::ScanConfigIssue, "SCAN_CONFIG_ISSUE"),
            (Code::AuthenticationConfigIssue, "AUTHENTICATION_CONFIG_ISSUE"),
            (Code::TimedOutWhileScanning, "TIMED_OUT_WHILE_SCANNING"),
            (Code::TooManyRedirects, "TOO_MANY_REDIRECTS"),
            (Code::TooManyHttpErrors, "TOO_MANY_HTTP_ERRORS"),
        ] {
            assert_eq!(code.as_str_name(), name);
            assert_eq!(Code::from_str_name(name), Some(code));
        }
        assert_eq!(Code::TooManyHttpErrors as i32, 6);
    }
}
