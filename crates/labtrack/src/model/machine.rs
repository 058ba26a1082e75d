use chrono::NaiveDateTime;
use labtrack_query::{Field, FieldPath, FieldTable, Filterable, MatchMode, Value};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A test rig or instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Machine {
    pub id: i64,
    pub name: String,
    pub serial_number: String,
    #[serde(default)]
    pub location: String,
    #[serde(default = "crate::model::default_active")]
    pub active: bool,
    #[serde(default)]
    pub installed_at: NaiveDateTime,
}

impl Machine {
    pub fn new(id: i64, name: impl Into<String>, serial_number: impl Into<String>) -> Self {
        Machine {
            id,
            name: name.into(),
            serial_number: serial_number.into(),
            location: String::new(),
            active: true,
            installed_at: NaiveDateTime::default(),
        }
    }
}

static TABLE: Lazy<FieldTable<Machine>> = Lazy::new(|| {
    FieldTable::new("machine")
        .with(Field::new("id", FieldPath::column(|m: &Machine| Value::from(m.id))).sortable())
        .with(
            Field::new("name", FieldPath::column(|m: &Machine| Value::String(&m.name)))
                .matching(MatchMode::Exact)
                .sortable(),
        )
        .with(
            Field::new(
                "serialNumber",
                FieldPath::column(|m: &Machine| Value::String(&m.serial_number)),
            )
            .matching(MatchMode::Exact)
            .sortable(),
        )
        .with(
            Field::new("location", FieldPath::column(|m: &Machine| Value::String(&m.location)))
                .matching(MatchMode::Contains)
                .sortable(),
        )
        .with(
            Field::new("active", FieldPath::column(|m: &Machine| Value::Bool(m.active)))
                .matching(MatchMode::BoolEquality),
        )
        .with(
            Field::new(
                "installedAt",
                FieldPath::column(|m: &Machine| Value::DateTime(m.installed_at)),
            )
            .matching(MatchMode::DateEquality)
            .sortable(),
        )
});

impl Filterable for Machine {
    fn field_table() -> &'static FieldTable<Self> {
        &TABLE
    }
}

list_params! {
    /// List parameters for machines.
    MachineListParams for Machine {
        name => "name",
        serial_number => "serialNumber",
        location => "location",
        active => "active",
        installed_at => "installedAt",
    }
}
