use crate::aggregate::FillMode;
use serde::{Deserialize, Serialize};

/// Published dataset size.
pub const DEFAULT_RECORD_COUNT: usize = 5000;
pub const DEFAULT_SEED: u64 = 42;

/// P(group = 0), P(group = 1).
pub const DEFAULT_GROUP_WEIGHTS: [f64; 2] = [0.7, 0.3];
/// Very Good .. Very Poor. Sums to 0.64; normalized on use.
pub const DEFAULT_HEALTH_WEIGHTS: [f64; 5] = [0.25, 0.21, 0.10, 0.05, 0.03];
/// Least .. Most Deprived. Sums to 0.77; normalized on use.
pub const DEFAULT_DEPRIVATION_WEIGHTS: [f64; 5] = [0.22, 0.17, 0.14, 0.14, 0.10];

/// Everything needed to reproduce one dataset and its tables.
/// Missing fields in a config file fall back to the published defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub record_count: usize,
    pub seed: u64,
    pub group_weights: Vec<f64>,
    pub health_weights: Vec<f64>,
    pub deprivation_weights: Vec<f64>,
    pub fill_mode: FillMode,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            record_count: DEFAULT_RECORD_COUNT,
            seed: DEFAULT_SEED,
            group_weights: DEFAULT_GROUP_WEIGHTS.to_vec(),
            health_weights: DEFAULT_HEALTH_WEIGHTS.to_vec(),
            deprivation_weights: DEFAULT_DEPRIVATION_WEIGHTS.to_vec(),
            fill_mode: FillMode::Observed,
        }
    }
}

impl GeneratorConfig {
    /// Load from a JSON file.
    /// In tests, use GeneratorConfig::default_test().
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: GeneratorConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        log::debug!(
            "config: loaded {path} (records={}, seed={})",
            config.record_count,
            config.seed
        );
        Ok(config)
    }

    /// Published weights with a small record count for unit tests.
    pub fn default_test() -> Self {
        Self {
            record_count: 200,
            seed: 7,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_record_count(mut self, record_count: usize) -> Self {
        self.record_count = record_count;
        self
    }

    pub fn with_fill_mode(mut self, fill_mode: FillMode) -> Self {
        self.fill_mode = fill_mode;
        self
    }
}
