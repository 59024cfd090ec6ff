//! Synthetic dataset generation.
//!
//! Each record's three attributes are drawn independently, each from its
//! own RNG stream (see `rng`). Ids are assigned 1..=n in draw order.

use crate::{
    config::GeneratorConfig,
    distribution::Distribution,
    error::DataResult,
    rng::{AttributeSlot, RngBank},
    types::{Deprivation, Group, Health, Level, RecordId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub group: Group,
    pub health: Health,
    pub deprivation: Deprivation,
}

/// A generated table plus the seed that reproduces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub seed: u64,
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Records belonging to one group, in id order.
    pub fn filter_group(&self, group: Group) -> Vec<Record> {
        self.records
            .iter()
            .filter(|r| r.group == group)
            .copied()
            .collect()
    }
}

pub struct Generator {
    seed: u64,
    group: Distribution<Group>,
    health: Distribution<Health>,
    deprivation: Distribution<Deprivation>,
}

impl Generator {
    /// Validate the config's three probability vectors.
    pub fn new(config: &GeneratorConfig) -> DataResult<Self> {
        let generator = Self::from_distributions(
            config.seed,
            Distribution::new(&config.group_weights)?,
            Distribution::new(&config.health_weights)?,
            Distribution::new(&config.deprivation_weights)?,
        );
        generator.log_distributions();
        Ok(generator)
    }

    pub fn from_distributions(
        seed: u64,
        group: Distribution<Group>,
        health: Distribution<Health>,
        deprivation: Distribution<Deprivation>,
    ) -> Self {
        Self {
            seed,
            group,
            health,
            deprivation,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Produce `count` records. Same seed and distributions, same dataset.
    pub fn generate(&self, count: usize) -> Dataset {
        let bank = RngBank::new(self.seed);
        let mut group_rng = bank.for_attribute(AttributeSlot::Group);
        let mut health_rng = bank.for_attribute(AttributeSlot::Health);
        let mut deprivation_rng = bank.for_attribute(AttributeSlot::Deprivation);

        let records: Vec<Record> = (1..=count as RecordId)
            .map(|id| Record {
                id,
                group: self.group.sample(&mut group_rng),
                health: self.health.sample(&mut health_rng),
                deprivation: self.deprivation.sample(&mut deprivation_rng),
            })
            .collect();

        log::info!("generator: produced {count} records (seed={})", self.seed);
        Dataset {
            seed: self.seed,
            records,
        }
    }

    fn log_distributions(&self) {
        log::debug!("generator: group p={:?}", self.group.probabilities());
        log::debug!("generator: health p={:?}", self.health.probabilities());
        log::debug!(
            "generator: deprivation p={:?}",
            self.deprivation.probabilities()
        );
        warn_zero_levels(&self.group);
        warn_zero_levels(&self.health);
        warn_zero_levels(&self.deprivation);
    }
}

fn warn_zero_levels<L: Level>(dist: &Distribution<L>) {
    let zero = dist.zero_weight_levels();
    if !zero.is_empty() {
        let labels: Vec<&str> = zero.iter().map(|l| l.label()).collect();
        log::warn!("generator: {} levels never drawn: {labels:?}", L::ATTRIBUTE);
    }
}

/// Generate `config.record_count` records with `config.seed`.
pub fn generate(config: &GeneratorConfig) -> DataResult<Dataset> {
    Ok(Generator::new(config)?.generate(config.record_count))
}
