//! labtrack-query - typed filter-and-sort engine over in-memory entity graphs.
//!
//! The engine turns loosely-typed request parameters (optional strings for
//! filters, a sort key, an ascending flag) into a typed query over records
//! whose related entities are already loaded. It supports:
//!
//! - Per-entity field tables: logical name → accessor, match mode, sortable
//! - One-hop navigation (`productName` → `record.product?.name`)
//! - Match modes: exact, contains, date equality, boolean, integer
//! - AND composition, with "no filters" meaning "match everything"
//! - Case-insensitive sort keys with a stable natural-order fallback
//!
//! # Quick Start
//!
//! ```rust
//! use labtrack_query::{
//!     Field, FieldPath, FieldTable, FilterSpec, MatchMode, Query, SortSpec, Value,
//! };
//!
//! struct Product {
//!     name: String,
//! }
//!
//! struct TestResult {
//!     id: i64,
//!     passed: bool,
//!     product: Option<Product>,
//! }
//!
//! let table = FieldTable::new("test_result")
//!     .with(Field::new("id", FieldPath::column(|r: &TestResult| Value::from(r.id))).sortable())
//!     .with(
//!         Field::new("passed", FieldPath::column(|r: &TestResult| Value::Bool(r.passed)))
//!             .matching(MatchMode::BoolEquality),
//!     )
//!     .with(
//!         Field::new(
//!             "productName",
//!             FieldPath::via(
//!                 |r: &TestResult| r.product.as_ref(),
//!                 |p: &Product| Value::String(&p.name),
//!             ),
//!         )
//!         .matching(MatchMode::Exact)
//!         .sortable(),
//!     );
//!
//! let results = vec![
//!     TestResult { id: 1, passed: true, product: Some(Product { name: "Resin".into() }) },
//!     TestResult { id: 2, passed: true, product: None },
//!     TestResult { id: 3, passed: false, product: Some(Product { name: "Resin".into() }) },
//! ];
//!
//! let filters = FilterSpec::new()
//!     .set("productName", "Resin")
//!     .set("passed", "true");
//! let query = Query::compile(&table, &filters, &SortSpec::default()).unwrap();
//!
//! let hits = query.execute(&results);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].id, 1);
//! ```
//!
//! # Failure Semantics
//!
//! ```text
//! absent / blank value       → no constraint
//! unparseable date/bool/int  → matches nothing
//! null field or relation     → filter: no match; sort: smallest value
//! unknown / blank sort key   → natural order
//! unknown filter field       → QueryError at compile time
//! ```

mod compose;
mod error;
mod field;
mod mode;
mod ordering;
mod predicate;
mod query;
mod request;
mod traits;
mod value;

pub use compose::Conjunction;
pub use error::{QueryError, Result, ValueParseError};
pub use field::{Accessor, Field, FieldPath, FieldTable, Hop, Relation, Resolve};
pub use mode::{parse_date, MatchMode};
pub use ordering::{compare_values, Dir, Order};
pub use predicate::{Criterion, Predicate};
pub use query::Query;
pub use request::{FilterSpec, SortSpec};
pub use traits::Filterable;
pub use value::{Number, Value};
