use fake::faker::company::en::{Buzzword, CatchPhrase};
use fake::Fake;
use rand::seq::SliceRandom;

pub const CATEGORIES: [&str; 4] = ["books", "music", "games", "films"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub category: String,
    pub score: i32,
    pub archived: bool,
}

impl Entry {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            score: 0,
            archived: false,
        }
    }

    pub fn fake() -> Self {
        let category = CATEGORIES
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(CATEGORIES[0]);

        Self {
            name: format!(
                "{} {}",
                Buzzword().fake::<String>(),
                CatchPhrase().fake::<String>()
            ),
            category: category.to_string(),
            score: (0..100).fake::<i32>(),
            archived: (0..10).fake::<u8>() == 0,
        }
    }
}
