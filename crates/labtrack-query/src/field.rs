//! Field tables and navigation paths.
//!
//! Every entity kind declares a [`FieldTable`]: a fixed list of logical
//! field names, each bound to a [`FieldPath`] that knows how to read the
//! value from a record, an optional [`MatchMode`] and a sortable flag.
//!
//! Paths are plain function pointers. A [`FieldPath::via`] path hops across
//! one navigation reference and yields [`Value::None`] when that reference
//! is not set, so predicates and comparators see a null instead of a panic.
//!
//! ```
//! use labtrack_query::{Field, FieldPath, FieldTable, MatchMode, Value};
//!
//! struct Product {
//!     name: String,
//! }
//!
//! struct Batch {
//!     name: String,
//!     product: Option<Product>,
//! }
//!
//! let table = FieldTable::new("batch")
//!     .with(
//!         Field::new("name", FieldPath::column(|b: &Batch| Value::String(&b.name)))
//!             .matching(MatchMode::Exact)
//!             .sortable(),
//!     )
//!     .with(
//!         Field::new(
//!             "productName",
//!             FieldPath::via(
//!                 |b: &Batch| b.product.as_ref(),
//!                 |p: &Product| Value::String(&p.name),
//!             ),
//!         )
//!         .matching(MatchMode::Exact)
//!         .sortable(),
//!     );
//!
//! let orphan = Batch { name: "B-1".into(), product: None };
//! let field = table.get("PRODUCTNAME").unwrap();
//! assert_eq!(field.resolve(&orphan), Value::None);
//! ```

use crate::mode::MatchMode;
use crate::value::Value;

/// Reads one field directly off a record.
pub type Accessor<T> = for<'a> fn(&'a T) -> Value<'a>;

/// Follows a navigation reference, which may be unset.
pub type Relation<T, R> = for<'a> fn(&'a T) -> Option<&'a R>;

/// Resolves a value from a record, possibly through a navigation hop.
pub trait Resolve<T>: Send + Sync {
    fn resolve<'a>(&self, record: &'a T) -> Value<'a>;
}

/// One navigation hop followed by a column read on the related record.
pub struct Hop<T, R> {
    relation: Relation<T, R>,
    field: Accessor<R>,
}

impl<T, R: 'static> Resolve<T> for Hop<T, R> {
    fn resolve<'a>(&self, record: &'a T) -> Value<'a> {
        match (self.relation)(record) {
            Some(related) => (self.field)(related),
            None => Value::None,
        }
    }
}

/// How a logical field name reaches its value.
pub enum FieldPath<T> {
    /// A column on the record itself.
    Column(Accessor<T>),
    /// A column on a related record, one hop away.
    Via(Box<dyn Resolve<T>>),
}

impl<T: 'static> FieldPath<T> {
    /// A column on the record itself.
    pub fn column(accessor: Accessor<T>) -> Self {
        FieldPath::Column(accessor)
    }

    /// A column on a related record.
    ///
    /// `relation` returns `None` when the reference is unset; the path then
    /// resolves to [`Value::None`].
    pub fn via<R: 'static>(relation: Relation<T, R>, field: Accessor<R>) -> Self {
        FieldPath::Via(Box::new(Hop { relation, field }))
    }
}

impl<T> FieldPath<T> {
    /// Reads the value for `record`.
    pub fn resolve<'a>(&self, record: &'a T) -> Value<'a> {
        match self {
            FieldPath::Column(accessor) => accessor(record),
            FieldPath::Via(hop) => hop.resolve(record),
        }
    }

    /// Returns `true` if this path crosses a navigation reference.
    pub fn is_navigation(&self) -> bool {
        matches!(self, FieldPath::Via(_))
    }
}

impl<T> std::fmt::Debug for FieldPath<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldPath::Column(_) => f.write_str("Column"),
            FieldPath::Via(_) => f.write_str("Via"),
        }
    }
}

/// A logical field in an entity's table.
#[derive(Debug)]
pub struct Field<T> {
    name: &'static str,
    path: FieldPath<T>,
    mode: Option<MatchMode>,
    sortable: bool,
}

impl<T> Field<T> {
    /// Creates a field that is neither filterable nor sortable yet.
    pub fn new(name: &'static str, path: FieldPath<T>) -> Self {
        Field {
            name,
            path,
            mode: None,
            sortable: false,
        }
    }

    /// Makes the field filterable with the given match mode.
    pub fn matching(mut self, mode: MatchMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Makes the field usable as a sort key.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn mode(&self) -> Option<MatchMode> {
        self.mode
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    pub fn path(&self) -> &FieldPath<T> {
        &self.path
    }

    /// Reads this field's value from `record`.
    pub fn resolve<'a>(&self, record: &'a T) -> Value<'a> {
        self.path.resolve(record)
    }
}

/// The fixed set of filterable and sortable fields of one entity kind.
#[derive(Debug)]
pub struct FieldTable<T> {
    entity: &'static str,
    fields: Vec<Field<T>>,
}

impl<T> FieldTable<T> {
    /// Creates an empty table for the named entity kind.
    pub fn new(entity: &'static str) -> Self {
        FieldTable {
            entity,
            fields: Vec::new(),
        }
    }

    /// Adds a field.
    ///
    /// Names are matched case-insensitively, so adding a name that differs
    /// only in case from an existing one shadows nothing: the first wins.
    pub fn with(mut self, field: Field<T>) -> Self {
        self.fields.push(field);
        self
    }

    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// Looks up a field by name, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&Field<T>> {
        self.fields
            .iter()
            .find(|field| field.name.eq_ignore_ascii_case(name))
    }

    /// Looks up a field that can be used as a sort key.
    pub fn sort_key(&self, name: &str) -> Option<&Field<T>> {
        self.get(name).filter(|field| field.sortable)
    }

    /// Iterates the fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &Field<T>> {
        self.fields.iter()
    }

    /// Names of all filterable fields.
    pub fn filterable(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields
            .iter()
            .filter(|field| field.mode.is_some())
            .map(|field| field.name)
    }

    /// Names of all sortable fields.
    pub fn sortable(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields
            .iter()
            .filter(|field| field.sortable)
            .map(|field| field.name)
    }
}
