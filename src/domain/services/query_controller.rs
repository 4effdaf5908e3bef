#[cfg(test)]
#[path = "query_controller_test.rs"]
mod tests;

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;

use crate::domain::models::Gateway;
use crate::domain::models::GatewayError;
use crate::domain::models::Page;
use crate::domain::services::remote;

/// The full parameter set identifying one list request. Responses carry the
/// signature they were issued under so the controller can discard the ones
/// that no longer match current intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySignature {
    pub search: String,
    pub filters: BTreeMap<String, String>,
    pub page: u32,
    pub page_size: u32,
}

/// One issued list request, tagged with the signature current at issue time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    signature: QuerySignature,
}

impl QueryRequest {
    /// Wire query parameters for the gateway call.
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("page".to_string(), self.signature.page.to_string()),
            ("page_size".to_string(), self.signature.page_size.to_string()),
        ];

        if !self.signature.search.is_empty() {
            params.push(("search".to_string(), self.signature.search.clone()));
        }

        for (key, value) in &self.signature.filters {
            params.push((key.clone(), value.clone()));
        }

        return params;
    }
}

/// Owns the search/filter/page state of one list screen and turns it into
/// exactly one authoritative in-flight request at a time. Screens only
/// supply their endpoint path and entity-specific filter keys.
pub struct QueryController<T> {
    search: String,
    filters: BTreeMap<String, String>,
    page: u32,
    page_size: u32,
    total_pages: u32,
    items: Vec<T>,
    loading: bool,
    error: Option<GatewayError>,
}

impl<T> QueryController<T> {
    pub fn new(page_size: u32) -> QueryController<T> {
        return QueryController {
            search: "".to_string(),
            filters: BTreeMap::new(),
            page: 1,
            page_size,
            total_pages: 0,
            items: vec![],
            loading: false,
            error: None,
        };
    }

    pub fn items(&self) -> &[T] {
        return &self.items;
    }

    pub fn search(&self) -> &str {
        return &self.search;
    }

    pub fn filter(&self, key: &str) -> Option<&str> {
        return self.filters.get(key).map(|value| return value.as_str());
    }

    pub fn page(&self) -> u32 {
        return self.page;
    }

    pub fn page_size(&self) -> u32 {
        return self.page_size;
    }

    pub fn total_pages(&self) -> u32 {
        return self.total_pages;
    }

    pub fn loading(&self) -> bool {
        return self.loading;
    }

    pub fn error(&self) -> Option<&GatewayError> {
        return self.error.as_ref();
    }

    fn signature(&self) -> QuerySignature {
        return QuerySignature {
            search: self.search.clone(),
            filters: self.filters.clone(),
            page: self.page,
            page_size: self.page_size,
        };
    }

    fn issue(&mut self) -> QueryRequest {
        self.loading = true;

        return QueryRequest {
            signature: self.signature(),
        };
    }

    /// Re-issues the current query, e.g. on view mount.
    pub fn refresh(&mut self) -> QueryRequest {
        return self.issue();
    }

    /// A search change invalidates the meaning of the current page, so the
    /// query starts back at page 1.
    pub fn set_search(&mut self, text: &str) -> QueryRequest {
        self.search = text.to_string();
        self.page = 1;

        return self.issue();
    }

    /// Sets or, when `value` is empty, removes a filter. Resets to page 1
    /// like a search change.
    pub fn set_filter(&mut self, key: &str, value: &str) -> QueryRequest {
        if value.is_empty() {
            self.filters.remove(key);
        } else {
            self.filters.insert(key.to_string(), value.to_string());
        }
        self.page = 1;

        return self.issue();
    }

    /// No-op outside of `1..=total_pages` once the page count is known.
    pub fn set_page(&mut self, page: u32) -> Option<QueryRequest> {
        if page < 1 {
            return None;
        }
        if self.total_pages > 0 && page > self.total_pages {
            return None;
        }

        self.page = page;

        return Some(self.issue());
    }

    /// Applies a resolved request. Returns false when the response signature
    /// no longer matches current intent; stale responses are dropped without
    /// touching items, total pages, or the loading flag.
    pub fn apply(&mut self, request: &QueryRequest, result: Result<Page<T>, GatewayError>) -> bool {
        if request.signature != self.signature() {
            tracing::debug!(
                page = request.signature.page,
                search = request.signature.search,
                "Discarding stale list response"
            );
            return false;
        }

        match result {
            Ok(page) => {
                self.items = page.content;
                self.total_pages = page.total_pages;
                self.error = None;
                self.loading = false;
            }
            Err(err) => {
                // Previous items stay visible on a failed refresh.
                self.error = Some(err);
                self.loading = false;
            }
        }

        return true;
    }

    /// Drives one full round trip for screens with no concurrent input.
    pub async fn load<G>(&mut self, gateway: &G, path: &str) -> bool
    where
        G: Gateway + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.refresh();
        let result = remote::fetch_page::<T, G>(gateway, path, &request.params()).await;

        return self.apply(&request, result);
    }
}
