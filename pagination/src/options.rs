use serde::Deserialize;

/// Rows per page when the caller does not ask for a size.
pub const DEFAULT_PER_PAGE: u64 = 10;

/// Page request as supplied by a caller. Both fields are optional and
/// out-of-range values are normalized by [`Options::resolve`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Options {
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default, alias = "perPage")]
    pub per_page: Option<i64>,
}

/// Largest offset or limit a database accepts for a bound.
pub const MAX_BOUND: u64 = i64::MAX as u64;

/// Concrete window derived from [`Options`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedPaging {
    pub page: u64,
    pub per_page: u64,
    pub offset: u64,
    pub limit: u64,
}

impl Options {
    pub fn new(page: i64, per_page: i64) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
        }
    }

    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_per_page(mut self, per_page: i64) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn resolve(&self) -> ResolvedPaging {
        self.resolve_with(DEFAULT_PER_PAGE)
    }

    /// Resolves against a caller-chosen default page size. The default is
    /// floored at 1 so `per_page` can never be zero.
    ///
    /// Offsets past [`MAX_BOUND`] are clamped to it: such a page lies past
    /// the end of any table and resolves to an empty window.
    pub fn resolve_with(&self, default_per_page: u64) -> ResolvedPaging {
        let page = positive(self.page).unwrap_or(1);
        let per_page = positive(self.per_page)
            .unwrap_or_else(|| default_per_page.clamp(1, MAX_BOUND));

        ResolvedPaging {
            page,
            per_page,
            offset: (page - 1).saturating_mul(per_page).min(MAX_BOUND),
            limit: per_page,
        }
    }
}

fn positive(value: Option<i64>) -> Option<u64> {
    value.filter(|value| *value >= 1).map(|value| value as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let paging = Options::default().resolve();

        assert_eq!(
            paging,
            ResolvedPaging {
                page: 1,
                per_page: DEFAULT_PER_PAGE,
                offset: 0,
                limit: DEFAULT_PER_PAGE,
            }
        );
    }

    #[test]
    fn test_resolve_floors_page() {
        let paging = Options::default().with_page(0).resolve();
        assert_eq!(paging.page, 1);
        assert_eq!(paging.offset, 0);

        let paging = Options::default().with_page(-3).resolve();
        assert_eq!(paging.page, 1);
    }

    #[test]
    fn test_resolve_negative_per_page_uses_default() {
        let paging = Options::default().with_per_page(-5).resolve();
        assert_eq!(paging.per_page, DEFAULT_PER_PAGE);
        assert_eq!(paging.limit, DEFAULT_PER_PAGE);
    }

    #[test]
    fn test_resolve_offset() {
        let paging = Options::new(3, 25).resolve();

        assert_eq!(paging.page, 3);
        assert_eq!(paging.per_page, 25);
        assert_eq!(paging.offset, 50);
        assert_eq!(paging.limit, 25);
    }

    #[test]
    fn test_resolve_with_zero_default() {
        let paging = Options::default().resolve_with(0);
        assert_eq!(paging.per_page, 1);
    }

    #[test]
    fn test_resolve_has_no_upper_bound() {
        let paging = Options::new(1, 100_000).resolve();
        assert_eq!(paging.per_page, 100_000);
    }

    #[test]
    fn test_resolve_clamps_offset() {
        let paging = Options::new(i64::MAX, i64::MAX).resolve();
        assert_eq!(paging.offset, MAX_BOUND);

        let paging = Options::new(i64::MAX, 10).resolve();
        assert_eq!(paging.page, i64::MAX as u64);
        assert_eq!(paging.offset, MAX_BOUND);
        assert_eq!(paging.limit, 10);

        let paging = Options::new(1_000_000_000_000_000_000, 10).resolve();
        assert_eq!(paging.offset, MAX_BOUND);
    }

    #[test]
    fn test_resolve_clamps_default_per_page() {
        let paging = Options::default().resolve_with(u64::MAX);
        assert_eq!(paging.per_page, MAX_BOUND);
    }

    #[test]
    fn test_deserialize_accepts_camel_case_per_page() {
        let options: Options =
            serde_json::from_str(r#"{"page": 2, "perPage": 15}"#).unwrap();
        assert_eq!(options, Options::new(2, 15));

        let options: Options = serde_json::from_str("{}").unwrap();
        assert_eq!(options, Options::default());
    }
}
