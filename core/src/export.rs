//! JSON bundle handed to the external renderer.
//!
//! A bundle carries every table derived from one dataset. It holds no
//! wall-clock data unless the caller stamps it, so two bundles built
//! from the same seed serialize identically.

use crate::{
    aggregate::{aggregate, aggregate_by_group, FillMode, FrequencyTable, GroupTable},
    chart::{alluvial, heatmap, mosaic, stacked_bars, AlluvialFlow, HeatmapGrid, MosaicTile, StackedBar},
    error::DataResult,
    generator::Dataset,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableBundle {
    pub seed: u64,
    pub record_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
    pub fill_mode: FillMode,
    pub frequency: FrequencyTable,
    pub by_group: Vec<GroupTable>,
    pub heatmap: HeatmapGrid,
    pub stacked_bars: Vec<StackedBar>,
    pub mosaic: Vec<MosaicTile>,
    pub alluvial: Vec<AlluvialFlow>,
}

impl TableBundle {
    pub fn build(dataset: &Dataset, fill_mode: FillMode) -> Self {
        let records = dataset.records();
        Self {
            seed: dataset.seed,
            record_count: dataset.len(),
            generated_at: None,
            fill_mode,
            frequency: aggregate(records, fill_mode),
            by_group: aggregate_by_group(records, fill_mode),
            heatmap: heatmap(records),
            stacked_bars: stacked_bars(records),
            mosaic: mosaic(records),
            alluvial: alluvial(records),
        }
    }

    pub fn with_timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = Some(at);
        self
    }

    pub fn to_json(&self) -> DataResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> DataResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
