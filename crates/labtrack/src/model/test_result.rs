use chrono::NaiveDateTime;
use labtrack_query::{Field, FieldPath, FieldTable, Filterable, MatchMode, Value};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{Batch, Machine, Product};

/// One executed test: which product, on which machine, from which batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub id: i64,
    pub test_type: String,
    pub passed: bool,
    pub tested_at: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machine: Option<Machine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch: Option<Batch>,
}

impl TestResult {
    pub fn new(
        id: i64,
        test_type: impl Into<String>,
        passed: bool,
        tested_at: NaiveDateTime,
    ) -> Self {
        TestResult {
            id,
            test_type: test_type.into(),
            passed,
            tested_at,
            notes: None,
            product: None,
            machine: None,
            batch: None,
        }
    }
}

static TABLE: Lazy<FieldTable<TestResult>> = Lazy::new(|| {
    FieldTable::new("test_result")
        .with(Field::new("id", FieldPath::column(|r: &TestResult| Value::from(r.id))).sortable())
        .with(
            Field::new(
                "productName",
                FieldPath::via(
                    |r: &TestResult| r.product.as_ref(),
                    |p: &Product| Value::String(&p.name),
                ),
            )
            .matching(MatchMode::Exact)
            .sortable(),
        )
        .with(
            Field::new(
                "machineName",
                FieldPath::via(
                    |r: &TestResult| r.machine.as_ref(),
                    |m: &Machine| Value::String(&m.name),
                ),
            )
            .matching(MatchMode::Exact)
            .sortable(),
        )
        .with(
            Field::new(
                "batchName",
                FieldPath::via(
                    |r: &TestResult| r.batch.as_ref(),
                    |b: &Batch| Value::String(&b.name),
                ),
            )
            .matching(MatchMode::Exact)
            .sortable(),
        )
        .with(
            Field::new("testType", FieldPath::column(|r: &TestResult| Value::String(&r.test_type)))
                .matching(MatchMode::Exact)
                .sortable(),
        )
        .with(
            Field::new("passed", FieldPath::column(|r: &TestResult| Value::Bool(r.passed)))
                .matching(MatchMode::BoolEquality)
                .sortable(),
        )
        .with(
            Field::new("testedAt", FieldPath::column(|r: &TestResult| Value::DateTime(r.tested_at)))
                .matching(MatchMode::DateEquality)
                .sortable(),
        )
        .with(
            Field::new(
                "notes",
                FieldPath::column(|r: &TestResult| {
                    r.notes.as_deref().map_or(Value::None, Value::String)
                }),
            )
            .matching(MatchMode::Contains),
        )
});

impl Filterable for TestResult {
    fn field_table() -> &'static FieldTable<Self> {
        &TABLE
    }
}

list_params! {
    /// List parameters for test results.
    TestResultListParams for TestResult {
        product_name => "productName",
        machine_name => "machineName",
        batch_name => "batchName",
        test_type => "testType",
        passed => "passed",
        tested_at => "testedAt",
    }
}
