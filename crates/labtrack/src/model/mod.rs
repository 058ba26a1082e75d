//! Domain entities and their field tables.
//!
//! Each entity implements [`Filterable`](labtrack_query::Filterable) with a
//! static table naming the fields a list request may filter or sort on,
//! and comes with a `…ListParams` struct carrying the positional request
//! parameters for that entity.
//!
//! Navigation references (`product`, `machine`, `batch`) are plain
//! `Option` values that the store fills in before a query runs.

/// Declares a list-parameter struct and its mapping onto logical field
/// names.
///
/// Every filter is an `Option<String>`; `sort_by` is optional and
/// `ascending` defaults to `true`.
macro_rules! list_params {
    (
        $(#[$meta:meta])*
        $name:ident for $record:ty {
            $($field:ident => $key:literal),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[serde(default, rename_all = "camelCase")]
        pub struct $name {
            $(pub $field: Option<String>,)*
            pub sort_by: Option<String>,
            pub ascending: bool,
        }

        impl Default for $name {
            fn default() -> Self {
                $name {
                    $($field: None,)*
                    sort_by: None,
                    ascending: true,
                }
            }
        }

        impl $crate::list::ListParams for $name {
            type Record = $record;

            fn filter_spec(&self) -> labtrack_query::FilterSpec {
                labtrack_query::FilterSpec::new()
                    $(.field($key, self.$field.as_deref()))*
            }

            fn sort_spec(&self) -> labtrack_query::SortSpec {
                labtrack_query::SortSpec::new(self.sort_by.as_deref(), self.ascending)
            }
        }
    };
}

fn default_active() -> bool {
    true
}

mod batch;
mod evaluation;
mod kpi;
mod machine;
mod measurement;
mod operator;
mod product;
mod qc_label;
mod test_method;
mod test_result;

pub use batch::{Batch, BatchListParams};
pub use evaluation::{Evaluation, EvaluationListParams};
pub use kpi::{KpiListParams, KpiRollup};
pub use machine::{Machine, MachineListParams};
pub use measurement::{Measurement, MeasurementListParams};
pub use operator::{Operator, OperatorListParams};
pub use product::{Product, ProductListParams};
pub use qc_label::{QcLabel, QcLabelListParams};
pub use test_method::{TestMethod, TestMethodListParams};
pub use test_result::{TestResult, TestResultListParams};
