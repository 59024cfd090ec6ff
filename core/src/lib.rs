pub mod aggregate;
pub mod chart;
pub mod config;
pub mod distribution;
pub mod error;
pub mod export;
pub mod generator;
pub mod rng;
pub mod types;
