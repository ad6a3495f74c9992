use crate::PageQuery;

use sm_core::{DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};

#[test]
fn test_empty_query_uses_defaults() {
    let page = PageQuery::default().page().unwrap();

    assert_eq!(page.limit, DEFAULT_PAGE_LIMIT);
    assert_eq!(page.offset, 0);
}

#[test]
fn test_zero_and_oversized_limits_are_rejected() {
    let zero = PageQuery {
        limit: Some(0),
        offset: None,
    };
    let oversized = PageQuery {
        limit: Some(MAX_PAGE_LIMIT + 1),
        offset: None,
    };

    assert!(zero.page().is_err());
    assert!(oversized.page().is_err());
}
