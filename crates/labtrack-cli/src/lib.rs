//! Argument parsing and execution for the `labtrack` binary.
//!
//! ```text
//! labtrack --data lab.json test-results --filter productName=Product1 --sort testedAt --desc
//! labtrack qc-labels --fields
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use labtrack::query::{FilterSpec, Filterable, SortSpec};
use labtrack::{Dataset, MemoryStore};
use serde::Serialize;
use tracing::debug;

/// List laboratory records with typed filters and sorting.
#[derive(Debug, Parser)]
#[command(name = "labtrack")]
#[command(about = "Filter and sort records from a labtrack dataset")]
pub struct Cli {
    /// JSON dataset to read.
    #[arg(long, env = "LABTRACK_DATA")]
    pub data: Option<PathBuf>,

    /// Entity kind to list.
    #[arg(value_enum)]
    pub entity: Entity,

    /// Filter as NAME=VALUE; repeat to combine with AND.
    #[arg(short, long = "filter", value_name = "NAME=VALUE", value_parser = parse_filter)]
    pub filters: Vec<(String, String)>,

    /// Sort key (case-insensitive). Unknown keys keep dataset order.
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Sort descending.
    #[arg(long)]
    pub desc: bool,

    /// Print the entity's filterable and sortable fields instead of listing.
    #[arg(long)]
    pub fields: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Entity {
    Products,
    Machines,
    Operators,
    Batches,
    TestMethods,
    TestResults,
    Measurements,
    Evaluations,
    QcLabels,
    Kpis,
}

fn parse_filter(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        Some(_) => Err("filter name is empty".to_string()),
        None => Err(format!("expected NAME=VALUE, got '{raw}'")),
    }
}

impl Cli {
    pub fn filter_spec(&self) -> FilterSpec {
        self.filters
            .iter()
            .map(|(name, value)| (name.as_str(), Some(value.as_str())))
            .collect()
    }

    pub fn sort_spec(&self) -> SortSpec {
        SortSpec::new(self.sort.as_deref(), !self.desc)
    }
}

/// One row of `--fields` output.
#[derive(Debug, Serialize)]
struct FieldInfo {
    name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<&'static str>,
    sortable: bool,
    navigation: bool,
}

fn describe<T: Filterable>() -> Vec<FieldInfo> {
    T::field_table()
        .fields()
        .map(|field| FieldInfo {
            name: field.name(),
            mode: field.mode().map(|mode| mode.as_str()),
            sortable: field.is_sortable(),
            navigation: field.path().is_navigation(),
        })
        .collect()
}

fn list_json<T>(records: Vec<T>, filters: &FilterSpec, sort: &SortSpec) -> anyhow::Result<String>
where
    T: Filterable + Serialize + Clone + Send + Sync,
{
    let store = MemoryStore::with_records(records);
    let hits = labtrack::list(&store, filters, sort)?;
    Ok(serde_json::to_string_pretty(&hits)?)
}

macro_rules! per_entity {
    ($entity:expr, |$ty:ident, $collection:ident| $body:expr) => {
        match $entity {
            Entity::Products => {
                type $ty = labtrack::Product;
                let $collection = |d: Dataset| d.products;
                $body
            }
            Entity::Machines => {
                type $ty = labtrack::Machine;
                let $collection = |d: Dataset| d.machines;
                $body
            }
            Entity::Operators => {
                type $ty = labtrack::Operator;
                let $collection = |d: Dataset| d.operators;
                $body
            }
            Entity::Batches => {
                type $ty = labtrack::Batch;
                let $collection = |d: Dataset| d.batches;
                $body
            }
            Entity::TestMethods => {
                type $ty = labtrack::TestMethod;
                let $collection = |d: Dataset| d.test_methods;
                $body
            }
            Entity::TestResults => {
                type $ty = labtrack::TestResult;
                let $collection = |d: Dataset| d.test_results;
                $body
            }
            Entity::Measurements => {
                type $ty = labtrack::Measurement;
                let $collection = |d: Dataset| d.measurements;
                $body
            }
            Entity::Evaluations => {
                type $ty = labtrack::Evaluation;
                let $collection = |d: Dataset| d.evaluations;
                $body
            }
            Entity::QcLabels => {
                type $ty = labtrack::QcLabel;
                let $collection = |d: Dataset| d.qc_labels;
                $body
            }
            Entity::Kpis => {
                type $ty = labtrack::KpiRollup;
                let $collection = |d: Dataset| d.kpis;
                $body
            }
        }
    };
}

/// Runs one invocation, writing JSON to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<()> {
    let json = if cli.fields {
        per_entity!(cli.entity, |Record, _collection| {
            serde_json::to_string_pretty(&describe::<Record>())?
        })
    } else {
        let Some(path) = cli.data.as_ref() else {
            bail!("no dataset given; pass --data or set LABTRACK_DATA");
        };
        let dataset = Dataset::from_path(path)
            .with_context(|| format!("failed to load dataset from {}", path.display()))?;
        let filters = cli.filter_spec();
        let sort = cli.sort_spec();
        debug!(entity = ?cli.entity, filters = filters.len(), "running list");

        per_entity!(cli.entity, |Record, collection| {
            list_json::<Record>(collection(dataset), &filters, &sort)
                .with_context(|| format!("failed to list {:?}", cli.entity))?
        })
    };

    writeln!(out, "{json}")?;
    Ok(())
}
