use anyhow::Context;
use diesel::sqlite::Sqlite;
use diesel::{ExpressionMethods, QueryDsl, RunQueryDsl, SqliteConnection};
use orm::entries::{EntryDb, EntryInsertDb};
use orm::schema::entries;
use pagination::{Engine, Options, Page, Paginate, PaginationError};
use shared::entry::Entry;

pub type EntryEngine = Engine<Page<EntryDb>, EntryDb>;

pub type EntryQuery = entries::BoxedQuery<'static, Sqlite>;

#[derive(Clone, Debug, Default)]
pub struct EntryFilter {
    pub category: Option<String>,
    pub min_score: Option<i32>,
    pub include_archived: bool,
}

/// Entries matching `filter`, oldest first.
pub fn entries_query(filter: &EntryFilter) -> EntryQuery {
    let mut query = entries::table.into_boxed();

    if let Some(category) = &filter.category {
        query = query.filter(entries::category.eq(category.clone()));
    }
    if let Some(min_score) = filter.min_score {
        query = query.filter(entries::score.ge(min_score));
    }
    if !filter.include_archived {
        query = query.filter(entries::archived.eq(false));
    }

    query.order(entries::id.asc())
}

pub fn paginate_entries(
    transaction_conn: &mut SqliteConnection,
    engine: &EntryEngine,
    filter: &EntryFilter,
    options: Options,
) -> Result<Page<EntryDb>, PaginationError> {
    entries_query(filter)
        .paginate(options)
        .load_with(engine, transaction_conn)
}

pub fn insert_entries(
    transaction_conn: &mut SqliteConnection,
    entries: Vec<Entry>,
) -> anyhow::Result<usize> {
    diesel::insert_into(entries::table)
        .values::<&Vec<EntryInsertDb>>(
            &entries
                .into_iter()
                .map(EntryInsertDb::from_entry)
                .collect::<Vec<_>>(),
        )
        .execute(transaction_conn)
        .context("Failed to insert entries in db")
}
