//! Frequency aggregation over (health, deprivation).
//!
//! Proportions are always relative to the number of records passed in.
//! An empty input yields an empty table; nothing is ever divided by zero.

use crate::{
    error::{DataError, DataResult},
    generator::Record,
    types::{Deprivation, Group, Health, Level, DEPRIVATION_LEVELS, HEALTH_LEVELS},
};
use serde::{Deserialize, Serialize};

/// Whether unobserved (health, deprivation) pairs appear in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillMode {
    /// Only pairs with count > 0.
    #[default]
    Observed,
    /// The full 5x5 cross-product, zeros included.
    Dense,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateRow {
    pub health: Health,
    pub deprivation: Deprivation,
    pub count: u64,
    pub proportion: f64,
}

/// Rows are ordered by (health, deprivation).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FrequencyTable {
    pub total: u64,
    pub rows: Vec<AggregateRow>,
}

impl FrequencyTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, health: Health, deprivation: Deprivation) -> Option<&AggregateRow> {
        self.rows
            .iter()
            .find(|r| r.health == health && r.deprivation == deprivation)
    }

    pub fn count(&self, health: Health, deprivation: Deprivation) -> u64 {
        self.row(health, deprivation).map(|r| r.count).unwrap_or(0)
    }

    pub fn proportion(&self, health: Health, deprivation: Deprivation) -> f64 {
        self.row(health, deprivation)
            .map(|r| r.proportion)
            .unwrap_or(0.0)
    }

    /// Sum of row counts. Equals `total` for any table built here.
    pub fn total_count(&self) -> u64 {
        self.rows.iter().map(|r| r.count).sum()
    }

    pub fn proportion_sum(&self) -> f64 {
        self.rows.iter().map(|r| r.proportion).sum()
    }
}

/// One facet of a grouped aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupTable {
    pub group: Group,
    pub table: FrequencyTable,
}

/// Health x deprivation count grid, indexed `[health][deprivation]`.
pub type CountGrid = [[u64; DEPRIVATION_LEVELS]; HEALTH_LEVELS];

pub(crate) fn count_grid<'a>(records: impl IntoIterator<Item = &'a Record>) -> CountGrid {
    let mut grid = [[0u64; DEPRIVATION_LEVELS]; HEALTH_LEVELS];
    for r in records {
        grid[r.health.index()][r.deprivation.index()] += 1;
    }
    grid
}

pub fn aggregate(records: &[Record], mode: FillMode) -> FrequencyTable {
    if records.is_empty() {
        log::debug!("aggregate: empty input, returning empty table");
        return FrequencyTable::default();
    }

    let grid = count_grid(records);
    let total = records.len() as u64;
    let mut rows = Vec::new();
    for health in Health::ALL {
        for deprivation in Deprivation::ALL {
            let count = grid[health.index()][deprivation.index()];
            if count == 0 && mode == FillMode::Observed {
                continue;
            }
            rows.push(AggregateRow {
                health: *health,
                deprivation: *deprivation,
                count,
                proportion: count as f64 / total as f64,
            });
        }
    }

    log::info!(
        "aggregate: {total} records -> {} cells ({mode:?})",
        rows.len()
    );
    FrequencyTable { total, rows }
}

/// Like `aggregate`, but an empty record set is an error.
pub fn aggregate_strict(records: &[Record], mode: FillMode) -> DataResult<FrequencyTable> {
    if records.is_empty() {
        return Err(DataError::EmptyInput);
    }
    Ok(aggregate(records, mode))
}

/// One table per group that has at least one record, in group order.
/// Proportions are within-group.
pub fn aggregate_by_group(records: &[Record], mode: FillMode) -> Vec<GroupTable> {
    Group::ALL
        .iter()
        .filter_map(|group| {
            let subset: Vec<Record> = records
                .iter()
                .filter(|r| r.group == *group)
                .copied()
                .collect();
            if subset.is_empty() {
                return None;
            }
            Some(GroupTable {
                group: *group,
                table: aggregate(&subset, mode),
            })
        })
        .collect()
}
