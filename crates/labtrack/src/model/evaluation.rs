use chrono::NaiveDateTime;
use labtrack_query::{Field, FieldPath, FieldTable, Filterable, MatchMode, Value};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::Product;

/// A reviewer's verdict on a test result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub id: i64,
    pub test_result_id: i64,
    pub evaluator: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub approved: bool,
    pub evaluated_at: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
}

static TABLE: Lazy<FieldTable<Evaluation>> = Lazy::new(|| {
    FieldTable::new("evaluation")
        .with(Field::new("id", FieldPath::column(|e: &Evaluation| Value::from(e.id))).sortable())
        .with(
            Field::new(
                "testResultId",
                FieldPath::column(|e: &Evaluation| Value::from(e.test_result_id)),
            )
            .matching(MatchMode::IntEquality)
            .sortable(),
        )
        .with(
            Field::new(
                "productName",
                FieldPath::via(
                    |e: &Evaluation| e.product.as_ref(),
                    |p: &Product| Value::String(&p.name),
                ),
            )
            .matching(MatchMode::Exact)
            .sortable(),
        )
        .with(
            Field::new("evaluator", FieldPath::column(|e: &Evaluation| Value::String(&e.evaluator)))
                .matching(MatchMode::Contains)
                .sortable(),
        )
        .with(
            Field::new("score", FieldPath::column(|e: &Evaluation| Value::from(e.score)))
                .sortable(),
        )
        .with(
            Field::new("approved", FieldPath::column(|e: &Evaluation| Value::Bool(e.approved)))
                .matching(MatchMode::BoolEquality)
                .sortable(),
        )
        .with(
            Field::new(
                "evaluatedAt",
                FieldPath::column(|e: &Evaluation| Value::DateTime(e.evaluated_at)),
            )
            .matching(MatchMode::DateEquality)
            .sortable(),
        )
});

impl Filterable for Evaluation {
    fn field_table() -> &'static FieldTable<Self> {
        &TABLE
    }
}

list_params! {
    /// List parameters for evaluations.
    EvaluationListParams for Evaluation {
        test_result_id => "testResultId",
        product_name => "productName",
        evaluator => "evaluator",
        approved => "approved",
        evaluated_at => "evaluatedAt",
    }
}
