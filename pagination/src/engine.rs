use std::marker::PhantomData;

use diesel::dsl::{Limit, Offset};
use diesel::query_dsl::methods::{LimitDsl, OffsetDsl};
use diesel::query_dsl::LoadQuery;
use diesel::RunQueryDsl;

use crate::config::PaginationConfig;
use crate::error::PaginationError;
use crate::model::{self, Model};
use crate::options::{Options, DEFAULT_PER_PAGE};
use crate::page::{self, PageSetter};
use crate::query::{bounded, unbounded, CountRows};

/// Pages through a query, producing envelopes of type `T` holding rows of
/// type `D`.
pub struct Engine<T, D> {
    default_per_page: u64,
    _marker: PhantomData<fn() -> (T, D)>,
}

impl<T, D> Default for Engine<T, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, D> Clone for Engine<T, D> {
    fn clone(&self) -> Self {
        Self {
            default_per_page: self.default_per_page,
            _marker: PhantomData,
        }
    }
}

impl<T, D> Engine<T, D> {
    pub fn new() -> Self {
        Self {
            default_per_page: DEFAULT_PER_PAGE,
            _marker: PhantomData,
        }
    }

    pub fn with_config(config: &PaginationConfig) -> Self {
        Self {
            default_per_page: config.default_per_page.max(1),
            _marker: PhantomData,
        }
    }
}

impl<T, D> Engine<T, D>
where
    T: PageSetter<D> + Default,
    D: Model,
{
    /// Fetches one page of `query` and counts every row matching its
    /// filters. Either both queries succeed and a complete page is returned,
    /// or the first failure is.
    ///
    /// `query` is left untouched: bounds and the count are applied to
    /// clones. Bounds already on a boxed query are replaced.
    pub fn paginate<'query, Q, Conn>(
        &self,
        conn: &mut Conn,
        query: &Q,
        options: Option<Options>,
    ) -> Result<T, PaginationError>
    where
        Q: Clone + OffsetDsl,
        Offset<Q>: LimitDsl,
        Limit<Offset<Q>>: RunQueryDsl<Conn> + LoadQuery<'query, Conn, D::Record>,
        CountRows<Limit<Offset<Q>>>: LoadQuery<'query, Conn, i64>,
    {
        let paging = options
            .unwrap_or_default()
            .resolve_with(self.default_per_page);

        let binding = model::resolve::<D>()?;

        let mut value = T::default();
        value.set_current_page(paging.page);
        value.set_per_page(paging.per_page);
        value.set_from(paging.offset);

        let records = bounded(query.clone(), paging.offset, paging.limit)
            .load::<D::Record>(conn)
            .map_err(PaginationError::fetch)?;

        value.set_data(records.into_iter().map(D::from_record).collect());

        let fetched = value.data().len() as u64;
        value.set_from(if fetched == 0 {
            0
        } else {
            paging.offset.saturating_add(1)
        });
        value.set_to(paging.offset.saturating_add(fetched));

        let total = CountRows::new(unbounded(query.clone()), binding.primary_key)
            .get_result::<i64>(conn)
            .map_err(PaginationError::count)?;
        let total = u64::try_from(total).map_err(|e| {
            PaginationError::count(diesel::result::Error::DeserializationError(
                Box::new(e),
            ))
        })?;

        value.set_total(total);
        value.set_last_page(page::last_page(total, paging.per_page));

        Ok(value)
    }
}
