use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const PAGE_SIZE_OPTIONS: [u32; 3] = [10, 25, 50];

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u64,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn first_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl<T> Page<T> {
    #[must_use]
    pub fn empty(page: u32, limit: u32) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page,
            limit,
        }
    }

    /// Number of pages implied by `total` and `limit`; never zero.
    #[must_use]
    pub fn page_count(&self) -> u32 {
        if self.limit == 0 {
            return 1;
        }
        let pages = self.total.div_ceil(u64::from(self.limit)).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub column: String,
    pub direction: SortDirection,
}

/// Paging, search, sort and filter state of a table view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub search: String,
    pub sort: Option<Sort>,
    pub filters: BTreeMap<String, String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ListQuery {
    #[must_use]
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            search: String::new(),
            sort: None,
            filters: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.set_search(search);
        self
    }

    #[must_use]
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_filter(key, value);
        self
    }

    /// Changing the search term goes back to the first page.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// Blank values remove the filter. Changing a filter goes back to page 1.
    pub fn set_filter(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if value.trim().is_empty() {
            self.filters.remove(&key);
        } else {
            self.filters.insert(key, value);
        }
        self.page = 1;
    }

    pub fn set_limit(&mut self, limit: u32) {
        self.limit = limit.max(1);
        self.page = 1;
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Sort by `column`; asking for the current column flips the direction.
    pub fn sort_by(&mut self, column: &str) {
        self.sort = match self.sort.take() {
            Some(sort) if sort.column == column => Some(Sort {
                column: sort.column,
                direction: sort.direction.toggle(),
            }),
            _ => Some(Sort {
                column: column.to_owned(),
                direction: SortDirection::Asc,
            }),
        };
    }

    /// Query-string pairs understood by the list endpoints.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_owned(), self.page.to_string()),
            ("limit".to_owned(), self.limit.to_string()),
        ];
        let search = self.search.trim();
        if !search.is_empty() {
            pairs.push(("search".to_owned(), search.to_owned()));
        }
        if let Some(sort) = &self.sort {
            pairs.push(("sort_by".to_owned(), sort.column.clone()));
            pairs.push(("sort_dir".to_owned(), sort.direction.as_str().to_owned()));
        }
        for (key, value) in &self.filters {
            pairs.push((key.clone(), value.clone()));
        }
        pairs
    }

    /// Slice an in-memory collection the way the backend pages it.
    #[must_use]
    pub fn paginate<T: Clone>(&self, items: &[T]) -> Page<T> {
        let limit = self.limit as usize;
        let start = (self.page as usize).saturating_sub(1).saturating_mul(limit);
        let slice = items.iter().skip(start).take(limit).cloned().collect();
        Page {
            items: slice,
            total: items.len() as u64,
            page: self.page,
            limit: self.limit,
        }
    }
}
