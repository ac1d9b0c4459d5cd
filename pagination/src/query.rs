//! Diesel adapters the engine builds around a caller's query.

use diesel::backend::Backend;
use diesel::dsl::{Limit, Offset};
use diesel::query_builder::{
    AstPass, BoxedSelectStatement, Query, QueryFragment, QueryId,
};
use diesel::query_dsl::methods::{LimitDsl, OffsetDsl};
use diesel::query_dsl::LoadQuery;
use diesel::sql_types::BigInt;
use diesel::{QueryResult, RunQueryDsl};

use crate::engine::Engine;
use crate::error::PaginationError;
use crate::model::Model;
use crate::options::Options;
use crate::page::{Page, PageSetter};

const ALIAS: &str = "paginated_rows";

/// Replaces whatever bounds `query` carries with `offset` and `limit`.
///
/// Boxed select statements swap their existing clauses; plain select
/// statements only accept bounds they do not have yet.
pub fn bounded<Q>(query: Q, offset: u64, limit: u64) -> Limit<Offset<Q>>
where
    Q: OffsetDsl,
    Offset<Q>: LimitDsl,
{
    LimitDsl::limit(OffsetDsl::offset(query, to_sql(offset)), to_sql(limit))
}

/// `query` with its bounds widened to every row.
pub fn unbounded<Q>(query: Q) -> Limit<Offset<Q>>
where
    Q: OffsetDsl,
    Offset<Q>: LimitDsl,
{
    bounded(query, 0, u64::MAX)
}

fn to_sql(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// `SELECT COUNT(alias.column) FROM (query) AS alias`.
///
/// Counting over a subquery keeps the caller's filters and ordering intact
/// on every backend.
#[derive(Clone, Debug)]
pub struct CountRows<Q> {
    query: Q,
    column: &'static str,
}

impl<Q> CountRows<Q> {
    pub fn new(query: Q, column: &'static str) -> Self {
        Self { query, column }
    }
}

impl<Q> QueryId for CountRows<Q> {
    type QueryId = ();

    const HAS_STATIC_QUERY_ID: bool = false;
}

impl<Q> Query for CountRows<Q> {
    type SqlType = BigInt;
}

impl<Q, Conn> RunQueryDsl<Conn> for CountRows<Q> {}

impl<Q, DB> QueryFragment<DB> for CountRows<Q>
where
    DB: Backend,
    Q: QueryFragment<DB>,
{
    fn walk_ast<'b>(&'b self, mut out: AstPass<'_, 'b, DB>) -> QueryResult<()> {
        out.push_sql("SELECT COUNT(");
        out.push_identifier(ALIAS)?;
        out.push_sql(".");
        out.push_identifier(self.column)?;
        out.push_sql(") FROM (");
        self.query.walk_ast(out.reborrow())?;
        out.push_sql(") AS ");
        out.push_identifier(ALIAS)?;
        Ok(())
    }
}

/// `.paginate(options)` on boxed select statements, whose bounds can be
/// replaced by the engine.
pub trait Paginate: Sized {
    fn paginate(self, options: Options) -> Paginated<Self> {
        Paginated {
            query: self,
            options,
        }
    }
}

impl<'a, ST, QS, DB, GB> Paginate
    for BoxedSelectStatement<'a, ST, QS, DB, GB>
{
}

/// A diesel query paired with the page to load from it.
#[derive(Clone, Debug)]
pub struct Paginated<Q> {
    query: Q,
    options: Options,
}

impl<Q> Paginated<Q> {
    pub fn options(&self) -> Options {
        self.options
    }

    pub fn load_page<'query, D, Conn>(
        self,
        conn: &mut Conn,
    ) -> Result<Page<D>, PaginationError>
    where
        D: Model,
        Q: Clone + OffsetDsl,
        Offset<Q>: LimitDsl,
        Limit<Offset<Q>>: RunQueryDsl<Conn> + LoadQuery<'query, Conn, D::Record>,
        CountRows<Limit<Offset<Q>>>: LoadQuery<'query, Conn, i64>,
    {
        self.load_with(&Engine::<Page<D>, D>::new(), conn)
    }

    pub fn load_with<'query, T, D, Conn>(
        self,
        engine: &Engine<T, D>,
        conn: &mut Conn,
    ) -> Result<T, PaginationError>
    where
        T: PageSetter<D> + Default,
        D: Model,
        Q: Clone + OffsetDsl,
        Offset<Q>: LimitDsl,
        Limit<Offset<Q>>: RunQueryDsl<Conn> + LoadQuery<'query, Conn, D::Record>,
        CountRows<Limit<Offset<Q>>>: LoadQuery<'query, Conn, i64>,
    {
        engine.paginate(conn, &self.query, Some(self.options))
    }
}
