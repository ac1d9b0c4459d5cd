pub mod entries;
pub mod migrations;
pub mod schema;
