use orm::entries::EntryDb;
use pagination::config::PaginationConfig;
use pagination::{Options, Page};
use shared::entry::Entry;
use shared::error::{
    AsDbError, AsPaginationError, ContextDbInteractError, MainError,
};

use crate::appstate::AppState;
use crate::repository::entries::{
    self as entries_repo, EntryEngine, EntryFilter,
};
use crate::response::EntryResponse;

#[derive(Clone)]
pub struct EntryService {
    app_state: AppState,
    engine: EntryEngine,
}

impl EntryService {
    pub fn new(app_state: AppState, config: &PaginationConfig) -> Self {
        Self {
            app_state,
            engine: EntryEngine::with_config(config),
        }
    }

    pub async fn list(
        &self,
        filter: EntryFilter,
        options: Options,
    ) -> Result<Page<EntryResponse>, MainError> {
        let conn = self.app_state.get_db_connection().await.into_db_error()?;
        let engine = self.engine.clone();

        let page: Page<EntryDb> = conn
            .interact(move |conn| {
                entries_repo::paginate_entries(conn, &engine, &filter, options)
            })
            .await
            .context_db_interact_error()
            .into_db_error()?
            .into_pagination_error()?;

        Ok(page.map(EntryResponse::from))
    }

    pub async fn seed(&self, total: u64) -> Result<usize, MainError> {
        let conn = self.app_state.get_db_connection().await.into_db_error()?;

        let entries = (0..total).map(|_| Entry::fake()).collect::<Vec<_>>();

        conn.interact(move |conn| entries_repo::insert_entries(conn, entries))
            .await
            .context_db_interact_error()
            .and_then(std::convert::identity)
            .into_db_error()
    }
}
