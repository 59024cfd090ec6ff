//! Chart-ready tables for the four ordinal-by-ordinal chart types.
//!
//! Heatmap, proportional stacked bar, mosaic, and alluvial plots all read
//! from the same health x deprivation counts; each function here reshapes
//! those counts into the coordinates a renderer needs. Drawing is not done
//! in this crate.

use crate::{
    aggregate::{count_grid, CountGrid},
    generator::Record,
    types::{Deprivation, Group, Health, Level},
};
use serde::{Deserialize, Serialize};

// ── Heatmap ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapGrid {
    /// `counts[health.index()][deprivation.index()]`, zeros included.
    pub counts: CountGrid,
    pub max_count: u64,
    pub total: u64,
}

impl HeatmapGrid {
    pub fn get(&self, health: Health, deprivation: Deprivation) -> u64 {
        self.counts[health.index()][deprivation.index()]
    }
}

pub fn heatmap(records: &[Record]) -> HeatmapGrid {
    let counts = count_grid(records);
    let max_count = counts.iter().flatten().copied().max().unwrap_or(0);
    HeatmapGrid {
        counts,
        max_count,
        total: records.len() as u64,
    }
}

// ── Proportional stacked bar ─────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSegment {
    pub health: Health,
    pub count: u64,
    /// P(health | deprivation).
    pub share: f64,
    pub start: f64,
    pub end: f64,
}

/// One bar per observed deprivation level, stacked to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedBar {
    pub deprivation: Deprivation,
    pub total: u64,
    pub segments: Vec<BarSegment>,
}

pub fn stacked_bars(records: &[Record]) -> Vec<StackedBar> {
    let grid = count_grid(records);
    let mut bars = Vec::new();
    for deprivation in Deprivation::ALL {
        let column = column_total(&grid, *deprivation);
        if column == 0 {
            continue;
        }
        let mut below = 0u64;
        let mut segments = Vec::new();
        for health in Health::ALL {
            let count = grid[health.index()][deprivation.index()];
            if count == 0 {
                continue;
            }
            // Bounds come from integer running totals so the top edge is exactly 1.0.
            let start = below as f64 / column as f64;
            below += count;
            let end = below as f64 / column as f64;
            segments.push(BarSegment {
                health: *health,
                count,
                share: count as f64 / column as f64,
                start,
                end,
            });
        }
        bars.push(StackedBar {
            deprivation: *deprivation,
            total: column,
            segments,
        });
    }
    bars
}

// ── Mosaic ───────────────────────────────────────────────────────────

/// A rectangle in the unit square. Width is the deprivation level's
/// marginal share, height is P(health | deprivation), so the area is the
/// joint proportion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MosaicTile {
    pub deprivation: Deprivation,
    pub health: Health,
    pub count: u64,
    pub proportion: f64,
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
}

impl MosaicTile {
    pub fn area(&self) -> f64 {
        (self.x1 - self.x0) * (self.y1 - self.y0)
    }
}

pub fn mosaic(records: &[Record]) -> Vec<MosaicTile> {
    let total = records.len() as u64;
    if total == 0 {
        return Vec::new();
    }
    let grid = count_grid(records);
    let mut tiles = Vec::new();
    let mut left = 0u64;
    for deprivation in Deprivation::ALL {
        let column = column_total(&grid, *deprivation);
        if column == 0 {
            continue;
        }
        let x0 = left as f64 / total as f64;
        left += column;
        let x1 = left as f64 / total as f64;

        let mut below = 0u64;
        for health in Health::ALL {
            let count = grid[health.index()][deprivation.index()];
            if count == 0 {
                continue;
            }
            let y0 = below as f64 / column as f64;
            below += count;
            let y1 = below as f64 / column as f64;
            tiles.push(MosaicTile {
                deprivation: *deprivation,
                health: *health,
                count,
                proportion: count as f64 / total as f64,
                x0,
                x1,
                y0,
                y1,
            });
        }
    }
    tiles
}

// ── Alluvial ─────────────────────────────────────────────────────────

/// Records flowing from a deprivation stratum to a health stratum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlluvialFlow {
    pub group: Group,
    pub deprivation: Deprivation,
    pub health: Health,
    pub count: u64,
}

/// Non-zero flows ordered by (group, deprivation, health).
pub fn alluvial(records: &[Record]) -> Vec<AlluvialFlow> {
    let mut flows = Vec::new();
    for group in Group::ALL {
        let grid = count_grid(records.iter().filter(|r| r.group == *group));
        for deprivation in Deprivation::ALL {
            for health in Health::ALL {
                let count = grid[health.index()][deprivation.index()];
                if count > 0 {
                    flows.push(AlluvialFlow {
                        group: *group,
                        deprivation: *deprivation,
                        health: *health,
                        count,
                    });
                }
            }
        }
    }
    flows
}

fn column_total(grid: &CountGrid, deprivation: Deprivation) -> u64 {
    grid.iter().map(|row| row[deprivation.index()]).sum()
}
