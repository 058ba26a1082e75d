use chrono::NaiveDate;
use labtrack_query::{Field, FieldPath, FieldTable, Filterable, MatchMode, Value};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{Machine, Product};

/// An aggregated metric for one period, scoped to a product and/or machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiRollup {
    pub id: i64,
    pub metric: String,
    pub period_start: NaiveDate,
    pub value: f64,
    #[serde(default)]
    pub sample_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machine: Option<Machine>,
}

static TABLE: Lazy<FieldTable<KpiRollup>> = Lazy::new(|| {
    FieldTable::new("kpi")
        .with(Field::new("id", FieldPath::column(|k: &KpiRollup| Value::from(k.id))).sortable())
        .with(
            Field::new(
                "productName",
                FieldPath::via(
                    |k: &KpiRollup| k.product.as_ref(),
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
                    |k: &KpiRollup| k.machine.as_ref(),
                    |m: &Machine| Value::String(&m.name),
                ),
            )
            .matching(MatchMode::Exact)
            .sortable(),
        )
        .with(
            Field::new("metric", FieldPath::column(|k: &KpiRollup| Value::String(&k.metric)))
                .matching(MatchMode::Exact)
                .sortable(),
        )
        .with(
            Field::new(
                "periodStart",
                FieldPath::column(|k: &KpiRollup| Value::Date(k.period_start)),
            )
            .matching(MatchMode::DateEquality)
            .sortable(),
        )
        .with(
            Field::new("value", FieldPath::column(|k: &KpiRollup| Value::from(k.value)))
                .sortable(),
        )
        .with(
            Field::new(
                "sampleCount",
                FieldPath::column(|k: &KpiRollup| Value::from(k.sample_count)),
            )
            .matching(MatchMode::IntEquality)
            .sortable(),
        )
});

impl Filterable for KpiRollup {
    fn field_table() -> &'static FieldTable<Self> {
        &TABLE
    }
}

list_params! {
    /// List parameters for KPI rollups.
    KpiListParams for KpiRollup {
        product_name => "productName",
        machine_name => "machineName",
        metric => "metric",
        period_start => "periodStart",
        sample_count => "sampleCount",
    }
}
