use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MainError {
    #[error("Database error")]
    Database,
    #[error("Can't paginate the requested rows")]
    Pagination,
    #[error("Failed to write output")]
    Output,
}

pub trait AsDbError<T> {
    fn into_db_error(self) -> Result<T, MainError>;
}

impl<T> AsDbError<T> for anyhow::Result<T> {
    #[inline]
    fn into_db_error(self) -> Result<T, MainError> {
        self.map_err(|reason| {
            tracing::error!(?reason, "Database error");
            MainError::Database
        })
    }
}

pub trait AsPaginationError<T> {
    fn into_pagination_error(self) -> Result<T, MainError>;
}

impl<T, E> AsPaginationError<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    #[inline]
    fn into_pagination_error(self) -> Result<T, MainError> {
        self.map_err(|reason| {
            let reason = anyhow::Error::new(reason);
            tracing::error!(?reason, "{}", MainError::Pagination);
            MainError::Pagination
        })
    }
}

pub trait AsOutputError<T> {
    fn into_output_error(self) -> Result<T, MainError>;
}

impl<T> AsOutputError<T> for anyhow::Result<T> {
    #[inline]
    fn into_output_error(self) -> Result<T, MainError> {
        self.map_err(|reason| {
            tracing::error!(?reason, "{}", MainError::Output);
            MainError::Output
        })
    }
}

pub trait ContextDbInteractError<T> {
    fn context_db_interact_error(self) -> anyhow::Result<T>;
}

impl<T, E> ContextDbInteractError<T> for Result<T, E> {
    fn context_db_interact_error(self) -> anyhow::Result<T> {
        self.map_err(|_| anyhow::anyhow!("Failed to interact with db"))
    }
}
