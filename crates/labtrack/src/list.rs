//! List service: fetch from a store, filter, sort.

use labtrack_query::{FilterSpec, Filterable, QueryError, SortSpec};
use thiserror::Error;
use tracing::debug;

use crate::store::RecordStore;

/// Errors from a list operation.
#[derive(Debug, Error)]
pub enum ListError {
    /// The filter named a field the entity does not expose.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// The store could not produce its records.
    #[error("failed to fetch records: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Fetches every record from `store` and returns the ones matching
/// `filters`, ordered by `sort`.
///
/// The query is compiled before the store is touched, so an unknown filter
/// field fails without a fetch.
pub fn list<S>(
    store: &S,
    filters: &FilterSpec,
    sort: &SortSpec,
) -> Result<Vec<S::Item>, ListError>
where
    S: RecordStore + ?Sized,
    S::Item: Filterable,
{
    let query = <S::Item as Filterable>::query(filters, sort)?;
    let records = store
        .fetch_all()
        .map_err(|e| ListError::Store(Box::new(e)))?;
    let total = records.len();
    let hits = query.execute_owned(records);
    debug!(
        entity = query.entity(),
        total,
        matched = hits.len(),
        "listed records"
    );
    Ok(hits)
}

/// Positional list parameters for one entity kind.
///
/// Implementors hold up to six optional filter strings, an optional sort
/// key and an ascending flag, and map them onto the entity's logical
/// field names.
pub trait ListParams {
    type Record: Filterable;

    fn filter_spec(&self) -> FilterSpec;

    fn sort_spec(&self) -> SortSpec;

    /// Runs the list operation against `store`.
    fn list<S>(&self, store: &S) -> Result<Vec<Self::Record>, ListError>
    where
        S: RecordStore<Item = Self::Record> + ?Sized,
    {
        list(store, &self.filter_spec(), &self.sort_spec())
    }
}
