use chrono::NaiveDateTime;
use labtrack_query::{Field, FieldPath, FieldTable, Filterable, MatchMode, Value};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::Product;

/// A production lot of one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub produced_at: NaiveDateTime,
    #[serde(default)]
    pub released: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
}

impl Batch {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Batch {
            id,
            name: name.into(),
            quantity: 0,
            produced_at: NaiveDateTime::default(),
            released: false,
            product: None,
        }
    }
}

static TABLE: Lazy<FieldTable<Batch>> = Lazy::new(|| {
    FieldTable::new("batch")
        .with(Field::new("id", FieldPath::column(|b: &Batch| Value::from(b.id))).sortable())
        .with(
            Field::new("name", FieldPath::column(|b: &Batch| Value::String(&b.name)))
                .matching(MatchMode::Exact)
                .sortable(),
        )
        .with(
            Field::new(
                "productName",
                FieldPath::via(
                    |b: &Batch| b.product.as_ref(),
                    |p: &Product| Value::String(&p.name),
                ),
            )
            .matching(MatchMode::Exact)
            .sortable(),
        )
        .with(
            Field::new(
                "productId",
                FieldPath::via(|b: &Batch| b.product.as_ref(), |p: &Product| Value::from(p.id)),
            )
            .matching(MatchMode::IntEquality),
        )
        .with(
            Field::new("quantity", FieldPath::column(|b: &Batch| Value::from(b.quantity)))
                .matching(MatchMode::IntEquality)
                .sortable(),
        )
        .with(
            Field::new("producedAt", FieldPath::column(|b: &Batch| Value::DateTime(b.produced_at)))
                .matching(MatchMode::DateEquality)
                .sortable(),
        )
        .with(
            Field::new("released", FieldPath::column(|b: &Batch| Value::Bool(b.released)))
                .matching(MatchMode::BoolEquality)
                .sortable(),
        )
});

impl Filterable for Batch {
    fn field_table() -> &'static FieldTable<Self> {
        &TABLE
    }
}

list_params! {
    /// List parameters for batches.
    BatchListParams for Batch {
        product_name => "productName",
        product_id => "productId",
        name => "name",
        quantity => "quantity",
        produced_at => "producedAt",
        released => "released",
    }
}
