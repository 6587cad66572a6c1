//! Offset/limit pagination shared by the list views

use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// `?page=N` query parameter of the list views
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    /// Requested page, 1 when absent or empty
    pub fn page(&self) -> AppResult<i64> {
        match self.page.as_deref().map(str::trim) {
            None | Some("") => Ok(1),
            Some(raw) => raw
                .parse()
                .map_err(|_| AppError::BadRequest(format!("Invalid page number: {}", raw))),
        }
    }
}

/// Link to one page of a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub url: String,
    pub page_number: i64,
}

/// Number of pages needed to show `total` rows, `limit` rows at a time
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if total <= 0 || limit <= 0 {
        return 0;
    }
    (total + limit - 1) / limit
}

/// Row offset of a 1-indexed page. Pages below 1 start at the first row.
pub fn offset(page: i64, limit: i64) -> i64 {
    if page > 0 {
        limit * (page - 1)
    } else {
        0
    }
}

fn page_url(base_path: &str, page: i64) -> String {
    format!("{}?page={}", base_path, page)
}

/// Everything a list page needs to query its rows and draw page controls
#[derive(Debug, Clone)]
pub struct Pagination {
    pub current_page: i64,
    pub offset: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
    pub pages: Vec<PageLink>,
    pub previous_url: Option<String>,
    pub next_url: Option<String>,
}

impl Pagination {
    pub fn new(base_path: &str, page: i64, limit: i64, total: i64) -> Self {
        let total_pages = total_pages(total, limit);

        let pages = (1..=total_pages)
            .map(|n| PageLink {
                url: page_url(base_path, n),
                page_number: n,
            })
            .collect();

        // Neighbour links only exist while the current page is one of the listed pages
        let in_range = page >= 1 && page <= total_pages;
        let previous_url = (in_range && page > 1).then(|| page_url(base_path, page - 1));
        let next_url = (in_range && page < total_pages).then(|| page_url(base_path, page + 1));

        Self {
            current_page: page,
            offset: offset(page, limit),
            limit,
            total,
            total_pages,
            pages,
            previous_url,
            next_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_is_ceiling() {
        for limit in 1..=7 {
            for total in 0..=40 {
                let expected = (total as f64 / limit as f64).ceil() as i64;
                assert_eq!(total_pages(total, limit), expected, "T={} L={}", total, limit);
            }
        }
    }

    #[test]
    fn test_offset() {
        assert_eq!(offset(1, 3), 0);
        assert_eq!(offset(2, 3), 3);
        assert_eq!(offset(5, 4), 16);
        assert_eq!(offset(0, 3), 0);
        assert_eq!(offset(-2, 3), 0);
    }

    #[test]
    fn test_first_page_has_no_previous() {
        let p = Pagination::new("/book/list", 1, 3, 7);
        assert_eq!(p.total_pages, 3);
        assert_eq!(p.previous_url, None);
        assert_eq!(p.next_url.as_deref(), Some("/book/list?page=2"));
    }

    #[test]
    fn test_last_page_has_no_next() {
        let p = Pagination::new("/category/list", 3, 3, 7);
        assert_eq!(p.offset, 6);
        assert_eq!(p.previous_url.as_deref(), Some("/category/list?page=2"));
        assert_eq!(p.next_url, None);
    }

    #[test]
    fn test_page_descriptors_cover_every_page() {
        let p = Pagination::new("/mybookings", 2, 4, 9);
        let numbers: Vec<i64> = p.pages.iter().map(|l| l.page_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(p.pages[2].url, "/mybookings?page=3");
    }

    #[test]
    fn test_page_beyond_total_has_no_neighbours() {
        let p = Pagination::new("/book/list", 9, 3, 7);
        assert_eq!(p.offset, 24);
        assert_eq!(p.previous_url, None);
        assert_eq!(p.next_url, None);
    }

    #[test]
    fn test_non_positive_page() {
        let p = Pagination::new("/book/list", 0, 3, 7);
        assert_eq!(p.offset, 0);
        assert_eq!(p.current_page, 0);
        assert_eq!(p.previous_url, None);
        assert_eq!(p.next_url, None);
    }

    #[test]
    fn test_empty_listing() {
        let p = Pagination::new("/book/list", 1, 3, 0);
        assert_eq!(p.total_pages, 0);
        assert!(p.pages.is_empty());
        assert_eq!(p.next_url, None);
    }

    #[test]
    fn test_page_query_parsing() {
        assert_eq!(PageQuery { page: None }.page().unwrap(), 1);
        assert_eq!(PageQuery { page: Some("".into()) }.page().unwrap(), 1);
        assert_eq!(PageQuery { page: Some("4".into()) }.page().unwrap(), 4);
        assert!(PageQuery { page: Some("four".into()) }.page().is_err());
    }
}
