use deadpool_diesel::sqlite::Object;
use diesel_migrations::{
    embed_migrations, EmbeddedMigrations, MigrationHarness,
};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub async fn run_migrations(conn: &Object) -> anyhow::Result<()> {
    let applied = conn
        .interact(|transaction_conn| {
            transaction_conn
                .run_pending_migrations(MIGRATIONS)
                .map(|versions| versions.len())
                .map_err(|e| anyhow::anyhow!(e))
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to interact with db: {}", e))??;

    tracing::info!(applied, "Migrations up to date");

    Ok(())
}
