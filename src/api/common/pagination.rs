//
//  project-sdk
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Cursor-based pagination
//!
//! Listing endpoints return one page at a time together with an optional
//! `next` link whose `start` field is an opaque cursor. [`Pager`] hides that
//! bookkeeping: it feeds each page's cursor into the next request until the
//! server stops returning one.
//!
//! # Overview
//!
//! | Type | Role |
//! |------|------|
//! | [`Page`] | One fetched page: items, total count and the next cursor |
//! | [`PageSource`] | Something that can fetch a page for a given cursor |
//! | [`Pager`] | Sequential iterator over the pages of a [`PageSource`] |
//!
//! # Example
//!
//! ```rust,no_run
//! use project_sdk::api::projects::ListProjectsOptions;
//! use project_sdk::api::ProjectClient;
//!
//! # async fn run(client: ProjectClient) -> project_sdk::api::common::ApiResult<()> {
//! let mut pager = client.projects_pager(ListProjectsOptions::new().with_limit(10))?;
//! while pager.has_next() {
//!     for project in pager.get_next().await? {
//!         println!("{}", project.id.unwrap_or_default());
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Notes
//!
//! - Pages are fetched strictly one after another; each request needs the
//!   cursor from the previous response.
//! - A pager is single-owner. `get_next` takes `&mut self`, so concurrent
//!   use of one pager does not compile.
//! - Retries, timeouts and cancellation belong to the underlying client.
//!   The pager never retries and never logs.

use async_trait::async_trait;

use super::ApiResult;

/// One page of a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,

    pub total_count: Option<i64>,

    /// Cursor for the following page. `None` on the last page.
    pub next: Option<String>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_count: Option<i64>, next: Option<String>) -> Self {
        Self {
            items,
            total_count,
            next,
        }
    }
}

/// Fetches single pages of a listing.
///
/// Implementations hold every list parameter except the cursor fixed for
/// their lifetime; [`Pager`] supplies the cursor.
#[async_trait]
pub trait PageSource {
    type Item: Send;

    /// Fetches the page starting at `start`, or the first page when `None`.
    async fn fetch_page(&self, start: Option<&str>) -> ApiResult<Page<Self::Item>>;
}

#[derive(Debug, Clone, PartialEq)]
enum PagerState {
    /// Another page can be fetched. `next` is `None` before the first call.
    HasMore { next: Option<String> },
    Exhausted,
    Failed,
}

/// Sequential iterator over the pages of a [`PageSource`].
///
/// Once exhausted or failed, a pager stays that way; build a new one to
/// list again.
#[derive(Debug)]
pub struct Pager<S> {
    source: S,
    state: PagerState,
}

impl<S: PageSource> Pager<S> {
    /// Creates a pager positioned before the first page.
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: PagerState::HasMore { next: None },
        }
    }

    /// Returns `true` while another page can be fetched.
    ///
    /// # Notes
    ///
    /// `false` does not mean every page was retrieved; it is also `false`
    /// after a failed fetch. Inspect the error returned by [`get_next`]
    /// to tell the two apart.
    ///
    /// [`get_next`]: Pager::get_next
    pub fn has_next(&self) -> bool {
        matches!(self.state, PagerState::HasMore { .. })
    }

    /// Fetches the next page and returns its items in server order.
    ///
    /// # Returns
    ///
    /// The items of the fetched page. An empty vector once the pager is
    /// exhausted or failed; no request is sent in that case.
    ///
    /// # Errors
    ///
    /// The error of the underlying request, unchanged. The pager is then
    /// failed and [`has_next`](Pager::has_next) reports `false`.
    pub async fn get_next(&mut self) -> ApiResult<Vec<S::Item>> {
        let start = match &self.state {
            PagerState::HasMore { next } => next.clone(),
            PagerState::Exhausted | PagerState::Failed => return Ok(Vec::new()),
        };

        match self.source.fetch_page(start.as_deref()).await {
            Ok(page) => {
                // An empty cursor means the same as no `next` link at all.
                self.state = match page.next.filter(|cursor| !cursor.is_empty()) {
                    Some(cursor) => PagerState::HasMore { next: Some(cursor) },
                    None => PagerState::Exhausted,
                };
                Ok(page.items)
            }
            Err(err) => {
                self.state = PagerState::Failed;
                Err(err)
            }
        }
    }

    /// Fetches every remaining page and concatenates the items.
    ///
    /// # Errors
    ///
    /// The first error encountered. Items gathered before the failure are
    /// discarded.
    pub async fn get_all(&mut self) -> ApiResult<Vec<S::Item>> {
        let mut items = Vec::new();
        while self.has_next() {
            items.extend(self.get_next().await?);
        }
        Ok(items)
    }
}
