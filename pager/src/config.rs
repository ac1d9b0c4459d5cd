use pagination::config::PaginationConfig;
use pagination::Options;
use shared::log_config::LogConfig;

use crate::repository::entries::EntryFilter;

#[derive(clap::Parser)]
pub struct AppConfig {
    #[clap(long, env)]
    pub database_url: String,

    #[clap(long, help = "Page to fetch, starting at 1")]
    pub page: Option<i64>,

    #[clap(long, help = "Rows per page")]
    pub per_page: Option<i64>,

    #[clap(long, help = "Only list entries in this category")]
    pub category: Option<String>,

    #[clap(long, help = "Only list entries scoring at least this much")]
    pub min_score: Option<i32>,

    #[clap(long, default_value_t = false)]
    pub include_archived: bool,

    #[clap(long, default_value_t = 0, help = "Fake entries to insert first")]
    pub seed: u64,

    #[command(flatten)]
    pub pagination: PaginationConfig,

    #[command(flatten)]
    pub log: LogConfig,
}

impl AppConfig {
    pub fn options(&self) -> Options {
        Options {
            page: self.page,
            per_page: self.per_page,
        }
    }

    pub fn filter(&self) -> EntryFilter {
        EntryFilter {
            category: self.category.clone(),
            min_score: self.min_score,
            include_archived: self.include_archived,
        }
    }
}
