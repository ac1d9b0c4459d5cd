use orm::entries::EntryDb;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EntryResponse {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub score: i32,
    pub archived: bool,
}

impl From<EntryDb> for EntryResponse {
    fn from(value: EntryDb) -> Self {
        Self {
            id: value.id as u64,
            name: value.name,
            category: value.category,
            score: value.score,
            archived: value.archived,
        }
    }
}
