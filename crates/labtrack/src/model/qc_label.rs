use chrono::NaiveDateTime;
use labtrack_query::{Field, FieldPath, FieldTable, Filterable, MatchMode, Value};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::Batch;

/// A quality-control label issued for a batch.
///
/// `printed_at` stays empty until the label is printed; a date filter on
/// it never matches an unprinted label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QcLabel {
    pub id: i64,
    pub label_code: String,
    #[serde(default)]
    pub printed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub printed_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub copies: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch: Option<Batch>,
}

impl QcLabel {
    pub fn new(id: i64, label_code: impl Into<String>) -> Self {
        QcLabel {
            id,
            label_code: label_code.into(),
            printed: false,
            printed_at: None,
            copies: 0,
            batch: None,
        }
    }
}

static TABLE: Lazy<FieldTable<QcLabel>> = Lazy::new(|| {
    FieldTable::new("qc_label")
        .with(Field::new("id", FieldPath::column(|l: &QcLabel| Value::from(l.id))).sortable())
        .with(
            Field::new(
                "batchName",
                FieldPath::via(|l: &QcLabel| l.batch.as_ref(), |b: &Batch| Value::String(&b.name)),
            )
            .matching(MatchMode::Exact)
            .sortable(),
        )
        .with(
            Field::new("labelCode", FieldPath::column(|l: &QcLabel| Value::String(&l.label_code)))
                .matching(MatchMode::Exact)
                .sortable(),
        )
        .with(
            Field::new("printed", FieldPath::column(|l: &QcLabel| Value::Bool(l.printed)))
                .matching(MatchMode::BoolEquality)
                .sortable(),
        )
        .with(
            Field::new("printedAt", FieldPath::column(|l: &QcLabel| Value::from(l.printed_at)))
                .matching(MatchMode::DateEquality)
                .sortable(),
        )
        .with(
            Field::new("copies", FieldPath::column(|l: &QcLabel| Value::from(l.copies)))
                .matching(MatchMode::IntEquality)
                .sortable(),
        )
});

impl Filterable for QcLabel {
    fn field_table() -> &'static FieldTable<Self> {
        &TABLE
    }
}

list_params! {
    /// List parameters for QC labels.
    QcLabelListParams for QcLabel {
        batch_name => "batchName",
        label_code => "labelCode",
        printed => "printed",
        printed_at => "printedAt",
        copies => "copies",
    }
}
