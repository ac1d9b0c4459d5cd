use anyhow::Context;
use clap::Parser;
use orm::migrations::run_migrations;
use pager::appstate::AppState;
use pager::config::AppConfig;
use pager::service::entries::EntryService;
use shared::error::{AsDbError, AsOutputError, MainError};

#[tokio::main]
async fn main() -> anyhow::Result<(), MainError> {
    let config = AppConfig::parse();

    config.log.init();

    let app_state = AppState::new(config.database_url.clone()).into_db_error()?;

    let conn = app_state.get_db_connection().await.into_db_error()?;
    run_migrations(&conn).await.into_db_error()?;
    drop(conn);

    let service = EntryService::new(app_state, &config.pagination);

    if config.seed > 0 {
        let inserted = service.seed(config.seed).await?;
        tracing::info!(inserted, "Seeded entries");
    }

    let page = service.list(config.filter(), config.options()).await?;

    tracing::info!(
        current_page = page.current_page,
        last_page = page.last_page,
        total = page.total,
        "Fetched page"
    );

    let output = serde_json::to_string_pretty(&page)
        .context("Failed to serialize page")
        .into_output_error()?;

    println!("{}", output);

    Ok(())
}
