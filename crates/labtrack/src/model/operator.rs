use chrono::NaiveDate;
use labtrack_query::{Field, FieldPath, FieldTable, Filterable, MatchMode, Value};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A lab technician.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operator {
    pub id: i64,
    pub name: String,
    pub badge_number: String,
    #[serde(default)]
    pub shift: String,
    #[serde(default = "crate::model::default_active")]
    pub active: bool,
    #[serde(default)]
    pub hired_at: NaiveDate,
}

static TABLE: Lazy<FieldTable<Operator>> = Lazy::new(|| {
    FieldTable::new("operator")
        .with(Field::new("id", FieldPath::column(|o: &Operator| Value::from(o.id))).sortable())
        .with(
            Field::new("name", FieldPath::column(|o: &Operator| Value::String(&o.name)))
                .matching(MatchMode::Contains)
                .sortable(),
        )
        .with(
            Field::new(
                "badgeNumber",
                FieldPath::column(|o: &Operator| Value::String(&o.badge_number)),
            )
            .matching(MatchMode::Exact)
            .sortable(),
        )
        .with(
            Field::new("shift", FieldPath::column(|o: &Operator| Value::String(&o.shift)))
                .matching(MatchMode::Exact)
                .sortable(),
        )
        .with(
            Field::new("active", FieldPath::column(|o: &Operator| Value::Bool(o.active)))
                .matching(MatchMode::BoolEquality),
        )
        .with(
            Field::new("hiredAt", FieldPath::column(|o: &Operator| Value::Date(o.hired_at)))
                .matching(MatchMode::DateEquality)
                .sortable(),
        )
});

impl Filterable for Operator {
    fn field_table() -> &'static FieldTable<Self> {
        &TABLE
    }
}

list_params! {
    /// List parameters for operators.
    OperatorListParams for Operator {
        name => "name",
        badge_number => "badgeNumber",
        shift => "shift",
        active => "active",
        hired_at => "hiredAt",
    }
}
