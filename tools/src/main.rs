//! table-runner: headless dataset generator for the ordinal chart tables.
//!
//! Usage:
//!   table-runner --seed 12345 --records 5000
//!   table-runner --config params.json --dense --json > tables.json

use anyhow::Result;
use ordinal_core::{
    aggregate::FillMode,
    config::GeneratorConfig,
    export::TableBundle,
    generator::{Dataset, Generator},
    types::{Deprivation, Health, Level},
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config_path = args
        .windows(2)
        .find(|w| w[0] == "--config")
        .map(|w| w[1].as_str());
    let json_mode = args.iter().any(|a| a == "--json");
    let dense = args.iter().any(|a| a == "--dense");

    let base = match config_path {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    let seed = parse_arg(&args, "--seed", base.seed);
    let records = parse_arg(&args, "--records", base.record_count);
    let fill_mode = if dense { FillMode::Dense } else { base.fill_mode };
    let config = base
        .with_seed(seed)
        .with_record_count(records)
        .with_fill_mode(fill_mode);

    if !json_mode {
        println!("Ordinal tables: table-runner");
        println!("  seed:      {seed}");
        println!("  records:   {records}");
        println!("  config:    {}", config_path.unwrap_or("(defaults)"));
        println!("  fill mode: {fill_mode:?}");
        println!();
    }

    let generator = Generator::new(&config)?;
    let dataset = generator.generate(config.record_count);
    let bundle = TableBundle::build(&dataset, config.fill_mode);
    log::info!(
        "runner: built tables for {} records ({} cells)",
        dataset.len(),
        bundle.frequency.rows.len()
    );

    if json_mode {
        let stamped = bundle.with_timestamp(chrono::Utc::now());
        println!("{}", stamped.to_json()?);
    } else {
        print_summary(&dataset, &bundle);
    }

    Ok(())
}

fn print_summary(dataset: &Dataset, bundle: &TableBundle) {
    println!("=== DATASET SUMMARY ===");
    println!("  records:        {}", dataset.len());
    for g in &bundle.by_group {
        println!("  {:<14}  {}", format!("{}:", g.group.label()), g.table.total);
    }
    println!("  cells:          {}", bundle.frequency.rows.len());

    println!();
    println!("=== HEALTH x DEPRIVATION (counts) ===");
    print!("  {:<10}", "");
    for d in Deprivation::ALL {
        print!(" {:>15}", d.label());
    }
    println!();
    for h in Health::ALL {
        print!("  {:<10}", h.label());
        for d in Deprivation::ALL {
            print!(" {:>15}", bundle.heatmap.get(*h, *d));
        }
        println!();
    }

    if bundle.frequency.is_empty() {
        println!();
        println!("  (No records generated)");
        return;
    }

    println!();
    println!("=== HEALTH WITHIN DEPRIVATION (row %) ===");
    for bar in &bundle.stacked_bars {
        let shares: Vec<String> = bar
            .segments
            .iter()
            .map(|s| format!("{} {:.1}%", s.health.label(), s.share * 100.0))
            .collect();
        println!("  {:<15} | {}", bar.deprivation.label(), shares.join(" | "));
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
