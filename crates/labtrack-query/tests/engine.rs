//! End-to-end behavior of the filter-and-sort engine.

use chrono::{NaiveDate, NaiveDateTime};
use labtrack_query::{
    Field, FieldPath, FieldTable, FilterSpec, MatchMode, Query, QueryError, SortSpec, Value,
};

// ============================================================================
// Fixtures
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Product {
    id: i64,
    name: String,
}

#[derive(Debug, Clone, PartialEq)]
struct Run {
    id: i64,
    product: Option<Product>,
    operator: String,
    printed: bool,
    cycles: i64,
    started_at: NaiveDateTime,
}

fn at(date: &str, time: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(&format!("{date} {time}"), "%Y-%m-%d %H:%M:%S").unwrap()
}

fn product(id: i64, name: &str) -> Option<Product> {
    Some(Product {
        id,
        name: name.to_string(),
    })
}

fn table() -> FieldTable<Run> {
    FieldTable::new("run")
        .with(Field::new("id", FieldPath::column(|r: &Run| Value::from(r.id))).sortable())
        .with(
            Field::new(
                "productName",
                FieldPath::via(
                    |r: &Run| r.product.as_ref(),
                    |p: &Product| Value::String(&p.name),
                ),
            )
            .matching(MatchMode::Exact)
            .sortable(),
        )
        .with(
            Field::new(
                "productId",
                FieldPath::via(|r: &Run| r.product.as_ref(), |p: &Product| Value::from(p.id)),
            )
            .matching(MatchMode::IntEquality),
        )
        .with(
            Field::new("operator", FieldPath::column(|r: &Run| Value::String(&r.operator)))
                .matching(MatchMode::Contains)
                .sortable(),
        )
        .with(
            Field::new("printed", FieldPath::column(|r: &Run| Value::Bool(r.printed)))
                .matching(MatchMode::BoolEquality)
                .sortable(),
        )
        .with(
            Field::new("cycles", FieldPath::column(|r: &Run| Value::from(r.cycles)))
                .matching(MatchMode::IntEquality)
                .sortable(),
        )
        .with(
            Field::new("startedAt", FieldPath::column(|r: &Run| Value::DateTime(r.started_at)))
                .matching(MatchMode::DateEquality)
                .sortable(),
        )
}

fn runs() -> Vec<Run> {
    vec![
        Run {
            id: 1,
            product: product(10, "Product2"),
            operator: "Dana Reyes".into(),
            printed: true,
            cycles: 3,
            started_at: at("2024-01-15", "08:00:00"),
        },
        Run {
            id: 2,
            product: product(11, "Product1"),
            operator: "Sam Okafor".into(),
            printed: false,
            cycles: 5,
            started_at: at("2024-01-16", "23:59:59"),
        },
        Run {
            id: 3,
            product: None,
            operator: "Dana Reyes".into(),
            printed: true,
            cycles: 5,
            started_at: at("2024-01-17", "00:00:00"),
        },
        Run {
            id: 4,
            product: product(12, "Product3"),
            operator: "Lee Park".into(),
            printed: false,
            cycles: 1,
            started_at: at("2024-01-15", "18:45:10"),
        },
        Run {
            id: 5,
            product: product(13, "Product0"),
            operator: "Sam Okafor".into(),
            printed: true,
            cycles: 8,
            started_at: at("2024-01-18", "12:00:00"),
        },
        Run {
            id: 6,
            product: product(11, "Product1"),
            operator: "Lee Park".into(),
            printed: true,
            cycles: 2,
            started_at: at("2024-01-19", "07:30:00"),
        },
    ]
}

fn run(filters: FilterSpec, sort: SortSpec) -> Vec<i64> {
    let table = table();
    let data = runs();
    Query::compile(&table, &filters, &sort)
        .unwrap()
        .execute(&data)
        .iter()
        .map(|r| r.id)
        .collect()
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn no_filters_returns_everything_in_natural_order() {
    assert_eq!(run(FilterSpec::new(), SortSpec::default()), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn date_filter_ignores_time_of_day() {
    let ids = run(FilterSpec::new().set("startedAt", "2024-01-15"), SortSpec::default());
    assert_eq!(ids, vec![1, 4]);
}

#[test]
fn date_filter_accepts_datetime_input() {
    let ids = run(
        FilterSpec::new().set("startedAt", "2024-01-16T09:00:00"),
        SortSpec::default(),
    );
    assert_eq!(ids, vec![2]);
}

#[test]
fn three_consecutive_days_first_only() {
    let table = table();
    let data: Vec<Run> = runs()
        .into_iter()
        .filter(|r| [1, 2, 3].contains(&r.id))
        .map(|mut r| {
            let day = 14 + r.id as u32;
            r.started_at = NaiveDate::from_ymd_opt(2024, 1, day)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap();
            r
        })
        .collect();

    let query = Query::compile(
        &table,
        &FilterSpec::new().set("startedAt", "2024-01-15"),
        &SortSpec::default(),
    )
    .unwrap();
    let hits = query.execute(&data);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 1);
}

#[test]
fn malformed_values_return_empty_not_everything() {
    for (field, raw) in [
        ("printed", "invalid"),
        ("cycles", "five"),
        ("startedAt", "15th of January"),
        ("productId", "eleven"),
    ] {
        let ids = run(FilterSpec::new().set(field, raw), SortSpec::default());
        assert!(ids.is_empty(), "{field}={raw} should match nothing, got {ids:?}");
    }
}

#[test]
fn null_navigation_does_not_match_and_does_not_panic() {
    let ids = run(FilterSpec::new().set("productName", "Product1"), SortSpec::default());
    assert_eq!(ids, vec![2, 6]);

    let table = table();
    let data = runs();
    let orphan = &data[2];
    let query = Query::compile(
        &table,
        &FilterSpec::new().set("productName", "Product1"),
        &SortSpec::default(),
    )
    .unwrap();
    assert!(!query.matches(orphan));
}

#[test]
fn navigation_int_filter() {
    let ids = run(FilterSpec::new().set("productId", "11"), SortSpec::default());
    assert_eq!(ids, vec![2, 6]);
}

#[test]
fn contains_is_case_sensitive() {
    assert_eq!(
        run(FilterSpec::new().set("operator", "Okafor"), SortSpec::default()),
        vec![2, 5]
    );
    assert!(run(FilterSpec::new().set("operator", "okafor"), SortSpec::default()).is_empty());
}

#[test]
fn combined_filters_intersect() {
    let both = run(
        FilterSpec::new().set("printed", "true").set("cycles", "5"),
        SortSpec::default(),
    );
    assert_eq!(both, vec![3]);
}

#[test]
fn filter_names_ignore_case() {
    assert_eq!(
        run(FilterSpec::new().set("PRODUCTNAME", "Product3"), SortSpec::default()),
        vec![4]
    );
}

#[test]
fn unknown_filter_field_is_rejected() {
    let table = table();
    let err = Query::compile(&table, &FilterSpec::new().set("colour", "red"), &SortSpec::default())
        .unwrap_err();
    assert!(matches!(err, QueryError::UnknownField { entity: "run", .. }));
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn bogus_sort_key_is_natural_order() {
    assert_eq!(
        run(FilterSpec::new(), SortSpec::asc("bogus")),
        run(FilterSpec::new(), SortSpec::default())
    );
    assert_eq!(
        run(FilterSpec::new(), SortSpec::desc("bogus")),
        vec![1, 2, 3, 4, 5, 6]
    );
}

#[test]
fn navigation_sort_puts_missing_relation_first() {
    let asc = run(FilterSpec::new(), SortSpec::asc("productName"));
    // 3 has no product; 2 and 6 tie on Product1 and keep input order
    assert_eq!(asc, vec![3, 5, 2, 6, 1, 4]);

    let desc = run(FilterSpec::new(), SortSpec::desc("productName"));
    assert_eq!(desc, vec![4, 1, 2, 6, 5, 3]);
}

#[test]
fn five_records_reverse_cleanly() {
    let table = table();
    let data: Vec<Run> = runs().into_iter().filter(|r| r.id != 6).collect();

    let asc: Vec<i64> = Query::compile(&table, &FilterSpec::new(), &SortSpec::asc("productName"))
        .unwrap()
        .execute(&data)
        .iter()
        .map(|r| r.id)
        .collect();
    let mut desc: Vec<i64> =
        Query::compile(&table, &FilterSpec::new(), &SortSpec::desc("productName"))
            .unwrap()
            .execute(&data)
            .iter()
            .map(|r| r.id)
            .collect();
    desc.reverse();
    assert_eq!(asc, desc);
}

#[test]
fn sort_key_ignores_case() {
    assert_eq!(
        run(FilterSpec::new(), SortSpec::asc("STARTEDAT")),
        vec![1, 4, 2, 3, 5, 6]
    );
}

#[test]
fn sort_then_filter_compose() {
    let ids = run(
        FilterSpec::new().set("printed", "true"),
        SortSpec::desc("cycles"),
    );
    assert_eq!(ids, vec![5, 3, 1, 6]);
}
