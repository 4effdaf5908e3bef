use serde::Deserialize;
use serde::Serialize;

/// One page of a list endpoint response.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub current_page: u32,
    pub page_size: u32,
    pub total_rows: u64,
    pub total_pages: u32,
}
