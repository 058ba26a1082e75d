use chrono::NaiveDateTime;
use labtrack_query::{Field, FieldPath, FieldTable, Filterable, MatchMode, Value};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::Machine;

/// A single reading taken during a test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    pub id: i64,
    pub test_result_id: i64,
    pub parameter: String,
    pub value: f64,
    #[serde(default)]
    pub unit: String,
    pub measured_at: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machine: Option<Machine>,
}

static TABLE: Lazy<FieldTable<Measurement>> = Lazy::new(|| {
    FieldTable::new("measurement")
        .with(Field::new("id", FieldPath::column(|m: &Measurement| Value::from(m.id))).sortable())
        .with(
            Field::new(
                "testResultId",
                FieldPath::column(|m: &Measurement| Value::from(m.test_result_id)),
            )
            .matching(MatchMode::IntEquality)
            .sortable(),
        )
        .with(
            Field::new(
                "machineName",
                FieldPath::via(
                    |m: &Measurement| m.machine.as_ref(),
                    |machine: &Machine| Value::String(&machine.name),
                ),
            )
            .matching(MatchMode::Exact)
            .sortable(),
        )
        .with(
            Field::new(
                "parameter",
                FieldPath::column(|m: &Measurement| Value::String(&m.parameter)),
            )
            .matching(MatchMode::Exact)
            .sortable(),
        )
        .with(
            Field::new("value", FieldPath::column(|m: &Measurement| Value::from(m.value)))
                .sortable(),
        )
        .with(
            Field::new("unit", FieldPath::column(|m: &Measurement| Value::String(&m.unit)))
                .matching(MatchMode::Exact),
        )
        .with(
            Field::new(
                "measuredAt",
                FieldPath::column(|m: &Measurement| Value::DateTime(m.measured_at)),
            )
            .matching(MatchMode::DateEquality)
            .sortable(),
        )
});

impl Filterable for Measurement {
    fn field_table() -> &'static FieldTable<Self> {
        &TABLE
    }
}

list_params! {
    /// List parameters for measurements.
    MeasurementListParams for Measurement {
        test_result_id => "testResultId",
        machine_name => "machineName",
        parameter => "parameter",
        unit => "unit",
        measured_at => "measuredAt",
    }
}
