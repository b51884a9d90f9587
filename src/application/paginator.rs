/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Multi-page collection
//!
//! Two strategies are available:
//! - [`Paginator::fetch_all`] reads the page count from the first page and
//!   fetches the remaining pages concurrently. A failed page is logged and
//!   skipped, the rest of the result is still returned.
//! - [`Paginator::fetch_sequential`] walks pages one by one until an empty
//!   page, for endpoints that do not report a page count.
//!
//! Records are always returned in page order.

use crate::constants::MAX_PAGES;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::RequestDescriptor;
use crate::model::responses::ApiResponse;
use futures_util::future::join_all;
use serde_json::Value;
use tracing::{debug, error, warn};

/// Collects paginated result sets on top of an [`HttpClient`]
#[derive(Debug, Clone, Copy)]
pub struct Paginator<'a> {
    http: &'a HttpClient,
}

impl<'a> Paginator<'a> {
    /// Creates a paginator that issues its requests through `http`
    #[must_use]
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Fetches every page of `template`, pages 2 and up concurrently
    ///
    /// The first page is fetched on its own. Without paging metadata, or with
    /// a single page, its records are the result. Otherwise the remaining
    /// pages are requested at once and merged in page order once all of them
    /// completed.
    ///
    /// # Errors
    /// Returns the error of the first page. Errors of later pages are logged
    /// and their records left out.
    pub async fn fetch_all(&self, template: &RequestDescriptor) -> Result<Vec<Value>, AppError> {
        let first = self.http.execute(&template.with_page(1)).await?;
        Ok(self.fetch_remaining(template, first).await)
    }

    /// Fetches pages 1, 2, 3, ... one at a time until a page has no records
    ///
    /// # Errors
    /// Returns the first error encountered; nothing collected so far is returned
    pub async fn fetch_sequential(
        &self,
        template: &RequestDescriptor,
    ) -> Result<Vec<Value>, AppError> {
        let mut records = Vec::new();
        for page in 1..=MAX_PAGES {
            let response = self.http.execute(&template.with_page(page)).await?;
            let page_records = response.into_records();
            if page_records.is_empty() {
                debug!("Page {page} of {} is empty, stopping", template.target);
                return Ok(records);
            }
            records.extend(page_records);
        }

        warn!(
            "Stopped reading {} after {MAX_PAGES} pages",
            template.target
        );
        Ok(records)
    }

    async fn fetch_remaining(&self, template: &RequestDescriptor, first: ApiResponse) -> Vec<Value> {
        let mut total_pages = first.total_pages();
        let mut records = first.into_records();
        if total_pages <= 1 {
            return records;
        }
        if total_pages > MAX_PAGES {
            warn!(
                "{} reports {total_pages} pages, reading the first {MAX_PAGES}",
                template.target
            );
            total_pages = MAX_PAGES;
        }

        debug!(
            "Fetching pages 2..={total_pages} of {} concurrently",
            template.target
        );
        let pages: Vec<u32> = (2..=total_pages).collect();
        let results = join_all(pages.iter().map(|&page| {
            let descriptor = template.with_page(page);
            async move { self.http.execute(&descriptor).await }
        }))
        .await;

        for (page, result) in pages.into_iter().zip(results) {
            match result {
                Ok(response) => records.extend(response.into_records()),
                Err(e) => error!("Failed to fetch page {page} of {}: {e}", template.target),
            }
        }
        records
    }
}
