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

use super::Result;
use super::error::Error;
use super::retry_policy::RetryPolicy;
use super::retry_result::RetryResult;
use std::time::Duration;
use tokio::time::Instant;

enum RetryLoopAttempt {
    // The first attempt
    Initial,
    // (Attempt count, backoff delay, previous error)
    Retry(u32, Duration, Error),
}

/// Runs the retry loop for a given function.
///
/// The loop calls `inner` until it succeeds, returns an error the retry
/// policy rejects, or the overall `timeout` expires. There is no limit on the
/// number of attempts; only the deadline bounds the loop.
///
/// Each attempt receives the remaining time and is abandoned when the
/// deadline expires. Between attempts the loop waits for the delay prescribed
/// by the retry policy, using `sleep`. If that delay would cross the deadline
/// the loop stops with a timeout error, with the last error as its source.
///
/// Without a retry policy the loop makes a single attempt.
pub async fn retry_loop<F, S, Response>(
    mut inner: F,
    sleep: S,
    timeout: Option<Duration>,
    idempotent: bool,
    retry_policy: Option<RetryPolicy>,
) -> Result<Response>
where
    F: AsyncFnMut(Option<Duration>) -> Result<Response> + Send,
    S: AsyncFn(Duration) -> () + Send,
{
    let deadline = timeout.map(|t| Instant::now() + t);
    let mut attempt_state = RetryLoopAttempt::Initial;
    let mut attempt_count = 0_u32;
    loop {
        if let RetryLoopAttempt::Retry(count, delay, prev_error) = attempt_state {
            if remaining_time(deadline).is_some_and(|remaining| remaining <= delay) {
                return Err(Error::timeout(prev_error));
            }
            tracing::debug!(
                attempt = count,
                delay_ms = delay.as_millis() as u64,
                error = %prev_error,
                "retrying request"
            );
            sleep(delay).await;
        }
        attempt_count += 1;
        let remaining = remaining_time(deadline);
        let result = match remaining {
            None => inner(None).await,
            Some(r) if r.is_zero() => Err(Error::timeout("the request deadline expired")),
            Some(r) => match tokio::time::timeout(r, inner(Some(r))).await {
                Ok(result) => result,
                Err(elapsed) => Err(Error::timeout(elapsed)),
            },
        };
        let error = match result {
            Ok(response) => return Ok(response),
            Err(e) => e,
        };
        let Some(policy) = &retry_policy else {
            return Err(error);
        };
        match policy.on_error(idempotent, error) {
            RetryResult::Permanent(e) => return Err(e),
            RetryResult::Continue(e) => {
                let delay = policy.delay(attempt_count);
                attempt_state = RetryLoopAttempt::Retry(attempt_count, delay, e);
            }
        }
    }
}

fn remaining_time(deadline: Option<Instant>) -> Option<Duration> {
    deadline.map(|d| d.saturating_duration_since(Instant::now()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::rpc::{Code, Status};
    use std::error::Error as _;
    use std::sync::{Arc, Mutex};

    type Delays = Arc<Mutex<Vec<Duration>>>;

    fn recording_sleep(delays: Delays) -> impl AsyncFn(Duration) -> () + Send {
        async move |d| {
            delays.lock().expect("delays lock is poisoned").push(d);
            tokio::time::sleep(d).await;
        }
    }

    fn test_policy() -> RetryPolicy {
        RetryPolicy::builder()
            .with_initial_delay(Duration::from_secs(1))
            .with_max_delay(Duration::from_secs(3))
            .with_multiplier(2.0)
            .with_retry_codes([Code::Unavailable])
            .build()
            .expect("test policy is valid")
    }

    #[tokio::test(start_paused = true)]
    async fn immediate_success() -> anyhow::Result<()> {
        let mut call = MockCall::new();
        call.expect_call().once().returning(|_| success());
        let inner = async move |d| call.call(d);

        let delays = Delays::default();
        let policy = test_policy();
        let response = retry_loop(
            inner,
            recording_sleep(delays.clone()),
            None,
            true,
            Some(policy),
        )
        .await?;
        assert_eq!(response, "success");
        assert!(delays.lock().expect("lock").is_empty());
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn immediate_failure() -> anyhow::Result<()> {
        let mut call = MockCall::new();
        call.expect_call().once().returning(|_| permanent());
        let inner = async move |d| call.call(d);

        let policy = test_policy();
        let delays = Delays::default();
        let response = retry_loop(
            inner,
            recording_sleep(delays.clone()),
            None,
            true,
            Some(policy),
        )
        .await;
        assert!(
            matches!(&response, Err(e) if e.code() == Some(Code::PermissionDenied)),
            "{response:?}"
        );
        assert!(delays.lock().expect("lock").is_empty());
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn retry_success() -> anyhow::Result<()> {
        let mut call_seq = mockall::Sequence::new();
        let mut call = MockCall::new();
        call.expect_call()
            .times(2)
            .in_sequence(&mut call_seq)
            .returning(|_| transient());
        call.expect_call()
            .once()
            .in_sequence(&mut call_seq)
            .returning(|_| success());
        let inner = async move |d| call.call(d);

        let policy = test_policy();
        let delays = Delays::default();
        let response = retry_loop(
            inner,
            recording_sleep(delays.clone()),
            Some(Duration::from_secs(60)),
            true,
            Some(policy),
        )
        .await?;
        assert_eq!(response, "success");
        let got = delays.lock().expect("lock").clone();
        assert_eq!(got, vec![Duration::from_secs(1), Duration::from_secs(2)]);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn attempts_receive_remaining_time() -> anyhow::Result<()> {
        let mut call_seq = mockall::Sequence::new();
        let mut call = MockCall::new();
        call.expect_call()
            .once()
            .in_sequence(&mut call_seq)
            .withf(|d| d == &Some(Duration::from_secs(10)))
            .returning(|_| transient());
        call.expect_call()
            .once()
            .in_sequence(&mut call_seq)
            .withf(|d| d == &Some(Duration::from_secs(9)))
            .returning(|_| success());
        let inner = async move |d| call.call(d);

        let policy = test_policy();
        let response = retry_loop(
            inner,
            async |d| tokio::time::sleep(d).await,
            Some(Duration::from_secs(10)),
            true,
            Some(policy),
        )
        .await?;
        assert_eq!(response, "success");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn retry_until_deadline() -> anyhow::Result<()> {
        // Delays are 1s, 2s, 3s. With a 5s deadline the third delay does not
        // fit and the loop stops after three attempts.
        let mut call = MockCall::new();
        call.expect_call().times(3).returning(|_| transient());
        let inner = async move |d| call.call(d);

        let policy = test_policy();
        let delays = Delays::default();
        let response = retry_loop(
            inner,
            recording_sleep(delays.clone()),
            Some(Duration::from_secs(5)),
            true,
            Some(policy),
        )
        .await;
        let err = response.expect_err("the loop should stop at the deadline");
        assert!(err.is_timeout(), "{err:?}");
        let source = err.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(
            matches!(source, Some(e) if e.code() == Some(Code::Unavailable)),
            "{err:?}"
        );
        let got = delays.lock().expect("lock").clone();
        assert_eq!(got, vec![Duration::from_secs(1), Duration::from_secs(2)]);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn hung_attempt_times_out() -> anyhow::Result<()> {
        let inner = async |_d: Option<Duration>| -> Result<String> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            success()
        };
        let policy = test_policy();
        let response = retry_loop(
            inner,
            async |d| tokio::time::sleep(d).await,
            Some(Duration::from_secs(2)),
            true,
            Some(policy),
        )
        .await;
        assert!(matches!(&response, Err(e) if e.is_timeout()), "{response:?}");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn no_policy_single_attempt() -> anyhow::Result<()> {
        let mut call = MockCall::new();
        call.expect_call().once().returning(|_| transient());
        let inner = async move |d| call.call(d);

        let response = retry_loop(
            inner,
            async |d| tokio::time::sleep(d).await,
            None,
            true,
            None,
        )
        .await;
        assert!(
            matches!(&response, Err(e) if e.code() == Some(Code::Unavailable)),
            "{response:?}"
        );
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn non_idempotent_single_attempt() -> anyhow::Result<()> {
        let mut call = MockCall::new();
        call.expect_call().once().returning(|_| transient());
        let inner = async move |d| call.call(d);

        let policy = test_policy();
        let response = retry_loop(
            inner,
            async |d| tokio::time::sleep(d).await,
            None,
            false,
            Some(policy),
        )
        .await;
        assert!(
            matches!(&response, Err(e) if e.code() == Some(Code::Unavailable)),
            "{response:?}"
        );
        Ok(())
    }

    fn success() -> Result<String> {
        Ok("success".into())
    }

    fn transient() -> Result<String> {
        let status = Status::default()
            .set_code(Code::Unavailable)
            .set_message("try-again");
        Err(Error::service(status))
    }

    fn permanent() -> Result<String> {
        let status = Status::default()
            .set_code(Code::PermissionDenied)
            .set_message("uh-oh");
        Err(Error::service(status))
    }

    trait Call {
        fn call(&self, d: Option<Duration>) -> Result<String>;
    }

    mockall::mock! {
        Call {}
        impl Call for Call {
            fn call(&self, d: Option<Duration>) -> Result<String>;
        }
    }
}
