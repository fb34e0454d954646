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

//! Presents list RPCs as streams of pages or items.
//!
//! A list RPC returns one page of results and a continuation token. The
//! [Paginator] reissues the RPC with the token of the previous page until a
//! page has an empty token. The [ItemPaginator] flattens the pages into a
//! stream of items.
//!
//! Both streams are lazy: a new page is requested only once the previous page
//! is consumed. If a request fails the error is returned after any items
//! already received, and the stream ends.

use futures::stream::unfold;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;

/// Describes a response returned by a paginated list RPC.
pub trait PageableResponse {
    type PageItem;

    /// The items in this page.
    fn items(self) -> Vec<Self::PageItem>;

    /// The token to request the next page. Empty on the last page.
    fn next_page_token(&self) -> String;
}

/// An adapter that converts list RPCs as defined by [AIP-4233](https://google.aip.dev/client-libraries/4233)
/// into a [futures::Stream] of pages.
#[pin_project]
pub struct Paginator<T, E> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T, E>>>>,
}

type ControlFlow = std::ops::ControlFlow<(), String>;

impl<T, E> Paginator<T, E>
where
    T: PageableResponse + 'static,
    E: 'static,
{
    /// Creates a new [Paginator] given the initial page token and a function
    /// to fetch the next [PageableResponse].
    pub fn new<F>(seed_token: String, execute: impl Fn(String) -> F + Clone + 'static) -> Self
    where
        F: Future<Output = Result<T, E>> + 'static,
    {
        let stream = unfold(ControlFlow::Continue(seed_token), move |state| {
            let execute = execute.clone();
            async move {
                let token = match state {
                    ControlFlow::Continue(token) => token,
                    ControlFlow::Break(_) => return None,
                };
                match execute(token).await {
                    Ok(page) => {
                        let tok = page.next_page_token();
                        let next_state = if tok.is_empty() {
                            ControlFlow::Break(())
                        } else {
                            ControlFlow::Continue(tok)
                        };
                        Some((Ok(page), next_state))
                    }
                    Err(e) => Some((Err(e), ControlFlow::Break(()))),
                }
            }
        });
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Converts the stream of pages into a stream of items.
    pub fn items(self) -> ItemPaginator<T, E> {
        ItemPaginator::from_pages(self)
    }

    /// Returns the next page.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }
}

impl<T, E> Stream for Paginator<T, E> {
    type Item = Result<T, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

/// A [futures::Stream] over the items of a paginated list RPC.
#[pin_project]
pub struct ItemPaginator<T, E>
where
    T: PageableResponse,
{
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T::PageItem, E>>>>,
}

impl<T, E> ItemPaginator<T, E>
where
    T: PageableResponse + 'static,
    E: 'static,
{
    /// Creates a new [ItemPaginator] given the initial page token and a
    /// function to fetch the next [PageableResponse].
    pub fn new<F>(seed_token: String, execute: impl Fn(String) -> F + Clone + 'static) -> Self
    where
        F: Future<Output = Result<T, E>> + 'static,
    {
        Self::from_pages(Paginator::new(seed_token, execute))
    }

    fn from_pages(pages: Paginator<T, E>) -> Self {
        let stream = pages.flat_map(|page| {
            let items = match page {
                Ok(p) => p.items().into_iter().map(Ok).collect::<Vec<_>>(),
                Err(e) => vec![Err(e)],
            };
            futures::stream::iter(items)
        });
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next item.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }
}

impl<T, E> Stream for ItemPaginator<T, E>
where
    T: PageableResponse,
{
    type Item = Result<T::PageItem, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    type TestError = Box<dyn std::error::Error>;

    struct TestResponse {
        items: Vec<String>,
        next_page_token: String,
    }

    impl PageableResponse for TestResponse {
        type PageItem = String;
        fn items(self) -> Vec<String> {
            self.items
        }
        fn next_page_token(&self) -> String {
            self.next_page_token.clone()
        }
    }

    fn page(items: &[&str], token: &str) -> Result<TestResponse, TestError> {
        Ok(TestResponse {
            items: items.iter().map(|s| s.to_string()).collect(),
            next_page_token: token.to_string(),
        })
    }

    type Responses = Arc<Mutex<VecDeque<Result<TestResponse, TestError>>>>;
    type Tokens = Arc<Mutex<Vec<String>>>;

    fn fake_rpc(
        responses: Responses,
        tokens: Tokens,
    ) -> impl Fn(String) -> std::future::Ready<Result<TestResponse, TestError>> + Clone {
        move |token: String| {
            tokens.lock().expect("tokens lock").push(token);
            let resp = responses
                .lock()
                .expect("responses lock")
                .pop_front()
                .unwrap_or_else(|| Err("unexpected call".into()));
            std::future::ready(resp)
        }
    }

    #[tokio::test]
    async fn pages() {
        let responses = Responses::new(Mutex::new(VecDeque::from([
            page(&["a", "b"], "t1"),
            page(&["c"], ""),
        ])));
        let tokens = Tokens::default();
        let mut stream = Paginator::new("seed".to_string(), fake_rpc(responses, tokens.clone()));
        let mut got = Vec::new();
        while let Some(p) = stream.next().await {
            got.push(p.map(|p| p.items).unwrap_or_default());
        }
        assert_eq!(got, vec![vec!["a", "b"], vec!["c"]]);
        assert_eq!(*tokens.lock().expect("tokens lock"), vec!["seed", "t1"]);
    }

    #[tokio::test]
    async fn items_terminate_on_empty_token() {
        let responses = Responses::new(Mutex::new(VecDeque::from([
            page(&["a", "b"], "t1"),
            page(&["c"], ""),
            page(&["never"], ""),
        ])));
        let tokens = Tokens::default();
        let mut stream = ItemPaginator::new(String::new(), fake_rpc(responses, tokens.clone()));
        let mut got = Vec::new();
        while let Some(item) = stream.next().await {
            got.push(item.expect("no errors in this test"));
        }
        assert_eq!(got, vec!["a", "b", "c"]);
        assert_eq!(tokens.lock().expect("tokens lock").len(), 2);
    }

    #[tokio::test]
    async fn items_error_after_buffered_items() {
        let responses = Responses::new(Mutex::new(VecDeque::from([
            page(&["a", "b"], "t1"),
            Err("backend failure".into()),
            page(&["never"], ""),
        ])));
        let tokens = Tokens::default();
        let mut stream =
            Paginator::new(String::new(), fake_rpc(responses, tokens.clone())).items();
        assert_eq!(stream.next().await.map(|r| r.ok()), Some(Some("a".into())));
        assert_eq!(stream.next().await.map(|r| r.ok()), Some(Some("b".into())));
        let err = stream.next().await;
        assert!(
            matches!(&err, Some(Err(e)) if e.to_string() == "backend failure"),
            "{err:?}"
        );
        assert!(stream.next().await.is_none());
        assert_eq!(tokens.lock().expect("tokens lock").len(), 2);
    }

    #[tokio::test]
    async fn empty_pages_are_skipped() {
        let responses = Responses::new(Mutex::new(VecDeque::from([
            page(&[], "t1"),
            page(&["a"], ""),
        ])));
        let mut stream = ItemPaginator::new(String::new(), fake_rpc(responses, Tokens::default()));
        let mut got = Vec::new();
        while let Some(item) = stream.next().await {
            got.push(item.expect("no errors in this test"));
        }
        assert_eq!(got, vec!["a"]);
    }
}
