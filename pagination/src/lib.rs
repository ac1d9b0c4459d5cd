pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod options;
pub mod page;
pub mod query;

pub use engine::Engine;
pub use error::{PaginationError, QueryStage};
pub use model::{Model, Shape, TableBinding};
pub use options::{Options, ResolvedPaging, DEFAULT_PER_PAGE};
pub use page::{Page, PageSetter};
pub use query::{CountRows, Paginate, Paginated};
