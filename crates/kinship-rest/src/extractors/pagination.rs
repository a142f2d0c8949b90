//! List query extraction: search term plus pagination.

use crate::responses::AppError;
use kinship_core::{KinshipError, PageRequest};
use serde::Deserialize;

/// Query parameters shared by the listing endpoints:
/// `?search=&limit=&page=`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub page: Option<usize>,
}

impl ListQuery {
    /// Builds a page request, filling the resource's default size.
    ///
    /// `limit` and `page` must be positive; `page` is 1-indexed.
    pub fn page_request(&self, default_size: usize) -> Result<PageRequest, AppError> {
        if self.limit == Some(0) {
            return Err(AppError(KinshipError::validation(
                "limit must be a positive integer",
            )));
        }
        if self.page == Some(0) {
            return Err(AppError(KinshipError::validation(
                "page must be a positive integer",
            )));
        }

        Ok(PageRequest::new(
            self.page.unwrap_or(1),
            self.limit.unwrap_or(default_size),
        ))
    }

    /// The search term, if present and non-empty.
    #[must_use]
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_in() {
        let query = ListQuery::default();
        let page = query.page_request(25).unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.size, 25);
    }

    #[test]
    fn test_explicit_values_win() {
        let query = ListQuery {
            search: None,
            limit: Some(10),
            page: Some(3),
        };
        let page = query.page_request(25).unwrap();
        assert_eq!(page.page, 3);
        assert_eq!(page.size, 10);
        assert_eq!(page.offset(), 20);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let query = ListQuery {
            search: None,
            limit: Some(0),
            page: None,
        };
        assert!(query.page_request(25).is_err());
    }

    #[test]
    fn test_zero_page_rejected() {
        let query = ListQuery {
            search: None,
            limit: None,
            page: Some(0),
        };
        assert!(query.page_request(25).is_err());
    }

    #[test]
    fn test_empty_search_is_none() {
        let query = ListQuery {
            search: Some(String::new()),
            limit: None,
            page: None,
        };
        assert!(query.search_term().is_none());
    }
}
