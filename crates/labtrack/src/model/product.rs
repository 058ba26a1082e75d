use chrono::NaiveDateTime;
use labtrack_query::{Field, FieldPath, FieldTable, Filterable, MatchMode, Value};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A product under test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "crate::model::default_active")]
    pub active: bool,
    #[serde(default)]
    pub created_at: NaiveDateTime,
}

impl Product {
    /// Creates an active product with no description.
    pub fn new(id: i64, name: impl Into<String>, code: impl Into<String>) -> Self {
        Product {
            id,
            name: name.into(),
            code: code.into(),
            description: None,
            active: true,
            created_at: NaiveDateTime::default(),
        }
    }
}

static TABLE: Lazy<FieldTable<Product>> = Lazy::new(|| {
    FieldTable::new("product")
        .with(Field::new("id", FieldPath::column(|p: &Product| Value::from(p.id))).sortable())
        .with(
            Field::new("name", FieldPath::column(|p: &Product| Value::String(&p.name)))
                .matching(MatchMode::Exact)
                .sortable(),
        )
        .with(
            Field::new("code", FieldPath::column(|p: &Product| Value::String(&p.code)))
                .matching(MatchMode::Exact)
                .sortable(),
        )
        .with(
            Field::new(
                "description",
                FieldPath::column(|p: &Product| {
                    p.description.as_deref().map_or(Value::None, Value::String)
                }),
            )
            .matching(MatchMode::Contains),
        )
        .with(
            Field::new("active", FieldPath::column(|p: &Product| Value::Bool(p.active)))
                .matching(MatchMode::BoolEquality)
                .sortable(),
        )
        .with(
            Field::new("createdAt", FieldPath::column(|p: &Product| Value::DateTime(p.created_at)))
                .matching(MatchMode::DateEquality)
                .sortable(),
        )
});

impl Filterable for Product {
    fn field_table() -> &'static FieldTable<Self> {
        &TABLE
    }
}

list_params! {
    /// List parameters for products.
    ProductListParams for Product {
        name => "name",
        code => "code",
        description => "description",
        active => "active",
        created_at => "createdAt",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::ListParams;
    use crate::store::MemoryStore;

    fn store() -> MemoryStore<Product> {
        let mut inactive = Product::new(2, "Resin B", "RB-1");
        inactive.active = false;
        let mut described = Product::new(3, "Resin C", "RC-1");
        described.description = Some("High-temperature grade".into());
        MemoryStore::with_records(vec![Product::new(1, "Resin A", "RA-1"), inactive, described])
    }

    #[test]
    fn filters_on_active() {
        let params = ProductListParams {
            active: Some("false".into()),
            ..Default::default()
        };
        let ids: Vec<i64> = params.list(&store()).unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn missing_description_never_matches() {
        let params = ProductListParams {
            description: Some("grade".into()),
            ..Default::default()
        };
        let ids: Vec<i64> = params.list(&store()).unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn default_params_are_ascending_and_empty() {
        let params = ProductListParams::default();
        assert!(params.ascending);
        assert!(params.filter_spec().is_blank());
        assert_eq!(params.sort_spec(), labtrack_query::SortSpec::default());
    }
}
