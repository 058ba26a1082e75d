//! Query compilation and execution.
//!
//! [`Query::compile`] turns a [`FilterSpec`] and a [`SortSpec`] into a typed
//! query against one entity's [`FieldTable`]. Executing it filters, then
//! orders, then materializes; it never reads from storage itself.

use tracing::{debug, trace};

use crate::compose::Conjunction;
use crate::error::{QueryError, Result};
use crate::field::FieldTable;
use crate::ordering::Order;
use crate::predicate::Predicate;
use crate::request::{FilterSpec, SortSpec};

/// A compiled filter-and-sort query.
///
/// # Example
///
/// ```
/// use labtrack_query::{
///     Field, FieldPath, FieldTable, FilterSpec, MatchMode, Query, SortSpec, Value,
/// };
///
/// struct Machine {
///     name: String,
///     active: bool,
/// }
///
/// let table = FieldTable::new("machine")
///     .with(
///         Field::new("name", FieldPath::column(|m: &Machine| Value::String(&m.name)))
///             .matching(MatchMode::Contains)
///             .sortable(),
///     )
///     .with(
///         Field::new("active", FieldPath::column(|m: &Machine| Value::Bool(m.active)))
///             .matching(MatchMode::BoolEquality),
///     );
///
/// let machines = vec![
///     Machine { name: "HPLC-2".into(), active: true },
///     Machine { name: "GC-1".into(), active: true },
///     Machine { name: "HPLC-1".into(), active: false },
/// ];
///
/// let filters = FilterSpec::new().set("active", "true");
/// let query = Query::compile(&table, &filters, &SortSpec::asc("name")).unwrap();
///
/// let names: Vec<_> = query.execute(&machines).iter().map(|m| m.name.as_str()).collect();
/// assert_eq!(names, vec!["GC-1", "HPLC-2"]);
/// ```
#[derive(Debug)]
pub struct Query<'t, T> {
    entity: &'static str,
    filter: Conjunction<'t, T>,
    order: Order<'t, T>,
}

impl<'t, T> Query<'t, T> {
    /// Compiles filter and sort parameters against `table`.
    ///
    /// Fails only when a filter names a field the table does not have, or a
    /// field that cannot be filtered. Filter values never fail: blank values
    /// are skipped and unparseable ones match nothing.
    pub fn compile(
        table: &'t FieldTable<T>,
        filters: &FilterSpec,
        sort: &SortSpec,
    ) -> Result<Self> {
        let mut filter = Conjunction::all();
        for (name, raw) in filters.iter() {
            let field = table.get(name).ok_or_else(|| QueryError::UnknownField {
                entity: table.entity(),
                field: name.to_string(),
            })?;
            let mode = field.mode().ok_or_else(|| QueryError::NotFilterable {
                entity: table.entity(),
                field: name.to_string(),
            })?;
            if let Some(predicate) = Predicate::compile(field, mode, raw) {
                filter.push(predicate);
            }
        }

        let order = Order::resolve(table, sort.key(), sort.dir());

        debug!(
            entity = table.entity(),
            predicates = filter.len(),
            unsatisfiable = filter.is_unsatisfiable(),
            sorted = !order.is_natural(),
            "compiled query"
        );

        Ok(Query {
            entity: table.entity(),
            filter,
            order,
        })
    }

    /// A query that matches every record in natural order.
    pub fn all(table: &'t FieldTable<T>) -> Self {
        Query {
            entity: table.entity(),
            filter: Conjunction::all(),
            order: Order::Natural,
        }
    }

    pub fn entity(&self) -> &'static str {
        self.entity
    }

    pub fn filter(&self) -> &Conjunction<'t, T> {
        &self.filter
    }

    pub fn order(&self) -> &Order<'t, T> {
        &self.order
    }

    /// Tests if a single record passes the filter.
    pub fn matches(&self, record: &T) -> bool {
        self.filter.matches(record)
    }

    /// Filters, then orders, returning references to matching records.
    ///
    /// Navigation references must already be populated on the records.
    /// The result is empty, never absent, when nothing matches.
    pub fn execute<'r, I>(&self, records: I) -> Vec<&'r T>
    where
        I: IntoIterator<Item = &'r T>,
        T: 'r,
    {
        let mut results: Vec<&'r T> = records
            .into_iter()
            .filter(|record| self.filter.matches(record))
            .collect();
        self.order.sort(&mut results);
        trace!(entity = self.entity, matched = results.len(), "executed query");
        results
    }

    /// Filters and orders owned records, consuming the input.
    pub fn execute_owned(&self, records: Vec<T>) -> Vec<T> {
        let mut results: Vec<T> = records
            .into_iter()
            .filter(|record| self.filter.matches(record))
            .collect();
        if !self.order.is_natural() {
            results.sort_by(|a, b| self.order.compare(a, b));
        }
        trace!(entity = self.entity, matched = results.len(), "executed query");
        results
    }

    /// Filters, orders and clones matching records.
    pub fn execute_cloned<'r, I>(&self, records: I) -> Vec<T>
    where
        I: IntoIterator<Item = &'r T>,
        T: Clone + 'r,
    {
        self.execute(records).into_iter().cloned().collect()
    }

    /// Counts the number of matching records.
    pub fn count<'r, I>(&self, records: I) -> usize
    where
        I: IntoIterator<Item = &'r T>,
        T: 'r,
    {
        records
            .into_iter()
            .filter(|record| self.filter.matches(record))
            .count()
    }
}
