//! labtrack - laboratory test-tracking model with typed list queries.
//!
//! Ten entity kinds (products, machines, batches, test results, …) each
//! expose a declarative field table to the [`labtrack_query`] engine, plus
//! a `…ListParams` struct holding the positional parameters of a list
//! request: up to six optional filter strings, a sort key and a direction.
//!
//! # Example
//!
//! ```rust
//! use labtrack::{ListParams, MemoryStore, QcLabel, QcLabelListParams};
//!
//! let mut printed = QcLabel::new(1, "L-1");
//! printed.printed = true;
//! let store = MemoryStore::with_records(vec![printed, QcLabel::new(2, "L-2")]);
//!
//! let params = QcLabelListParams {
//!     printed: Some("true".into()),
//!     ..Default::default()
//! };
//! let labels = params.list(&store).unwrap();
//! assert_eq!(labels.len(), 1);
//!
//! // Unparseable values match nothing rather than everything.
//! let params = QcLabelListParams {
//!     printed: Some("invalid".into()),
//!     ..Default::default()
//! };
//! assert!(params.list(&store).unwrap().is_empty());
//! ```

mod dataset;
mod list;
mod model;
mod store;

pub use dataset::{Dataset, DatasetError};
pub use list::{list, ListError, ListParams};
pub use model::*;
pub use store::{MemoryStore, RecordStore, StoreError};

pub use labtrack_query as query;
