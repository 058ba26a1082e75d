use labtrack_query::{Field, FieldPath, FieldTable, Filterable, MatchMode, Value};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::Product;

/// A documented test procedure, optionally tied to one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestMethod {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub standard: String,
    #[serde(default)]
    pub revision: i32,
    #[serde(default = "crate::model::default_active")]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
}

static TABLE: Lazy<FieldTable<TestMethod>> = Lazy::new(|| {
    FieldTable::new("test_method")
        .with(Field::new("id", FieldPath::column(|t: &TestMethod| Value::from(t.id))).sortable())
        .with(
            Field::new("name", FieldPath::column(|t: &TestMethod| Value::String(&t.name)))
                .matching(MatchMode::Exact)
                .sortable(),
        )
        .with(
            Field::new("standard", FieldPath::column(|t: &TestMethod| Value::String(&t.standard)))
                .matching(MatchMode::Contains)
                .sortable(),
        )
        .with(
            Field::new("revision", FieldPath::column(|t: &TestMethod| Value::from(t.revision)))
                .matching(MatchMode::IntEquality)
                .sortable(),
        )
        .with(
            Field::new("active", FieldPath::column(|t: &TestMethod| Value::Bool(t.active)))
                .matching(MatchMode::BoolEquality),
        )
        .with(
            Field::new(
                "productName",
                FieldPath::via(
                    |t: &TestMethod| t.product.as_ref(),
                    |p: &Product| Value::String(&p.name),
                ),
            )
            .matching(MatchMode::Exact)
            .sortable(),
        )
});

impl Filterable for TestMethod {
    fn field_table() -> &'static FieldTable<Self> {
        &TABLE
    }
}

list_params! {
    /// List parameters for test methods.
    TestMethodListParams for TestMethod {
        product_name => "productName",
        name => "name",
        standard => "standard",
        revision => "revision",
        active => "active",
    }
}
