use diesel::{Insertable, Queryable, Selectable};
use serde::Serialize;
use shared::entry::Entry;

use crate::schema::entries;

#[derive(Serialize, Queryable, Selectable, Clone, Debug, PartialEq)]
#[diesel(table_name = entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EntryDb {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub score: i32,
    pub archived: bool,
}

pagination::model!(EntryDb => "entries", "id");

#[derive(Serialize, Insertable, Clone)]
#[diesel(table_name = entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EntryInsertDb {
    pub name: String,
    pub category: String,
    pub score: i32,
    pub archived: bool,
}

impl EntryInsertDb {
    pub fn from_entry(entry: Entry) -> Self {
        Self {
            name: entry.name,
            category: entry.category,
            score: entry.score,
            archived: entry.archived,
        }
    }
}
