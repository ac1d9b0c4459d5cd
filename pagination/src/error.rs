use core::fmt;
use std::fmt::Display;

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryStage {
    Fetch,
    Count,
}

impl Display for QueryStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_lowercase())
    }
}

#[derive(Error, Debug)]
pub enum PaginationError {
    #[error("Model should be a struct, got {0}")]
    InvalidModelType(String),
    #[error("Failed to execute {stage} query")]
    QueryExecution {
        stage: QueryStage,
        #[source]
        source: diesel::result::Error,
    },
}

impl PaginationError {
    pub(crate) fn fetch(source: diesel::result::Error) -> Self {
        Self::QueryExecution {
            stage: QueryStage::Fetch,
            source,
        }
    }

    pub(crate) fn count(source: diesel::result::Error) -> Self {
        Self::QueryExecution {
            stage: QueryStage::Count,
            source,
        }
    }
}
