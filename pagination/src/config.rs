use crate::options::DEFAULT_PER_PAGE;

#[derive(clap::Parser, Clone, Debug)]
pub struct PaginationConfig {
    #[clap(
        long,
        env,
        default_value_t = DEFAULT_PER_PAGE,
        help = "Rows per page when the request does not specify one"
    )]
    pub default_per_page: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_per_page: DEFAULT_PER_PAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_parse_default_per_page() {
        let config =
            PaginationConfig::parse_from(["pager", "--default-per-page", "25"]);
        assert_eq!(config.default_per_page, 25);
    }
}
