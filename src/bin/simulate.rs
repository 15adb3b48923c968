//! Pack-opening simulator CLI.
//!
//! Runs Monte Carlo pack-opening simulations over the built-in sample
//! catalog and prints completion estimates.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                 # Default: 1000 runs
//!   cargo run --bin simulate -- -n 100      # 100 runs
//!   cargo run --bin simulate -- --seed 42   # Reproducible batch

use packsim::sim::{
    audit_offering_totals, collection_status, rank_boosters, run_simulations, SimConfig,
    SimSummary,
};
use packsim::{build_info, sample};
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    let (config, save_json) = parse_args(&args);

    println!("packsim simulator ({}, {})", build_info::BUILD_COMMIT, build_info::BUILD_DATE);
    println!();
    println!("Configuration:");
    println!("  Runs:  {}", config.num_runs);
    match config.seed {
        Some(seed) => println!("  Seed:  {}", seed),
        None => println!("  Seed:  (from entropy)"),
    }
    println!();

    let catalog = sample::sample_catalog();
    let collection = sample::fresh_collection(&catalog);

    if collection.first_incomplete_expansion(&catalog).is_none() {
        println!("Collection already complete - nothing to simulate.");
        return;
    }

    println!("=== Collection status ===");
    for status in collection_status(&catalog, &collection) {
        println!(
            "  {:<18} {:>3}/{:<3} collected ({} secret missing), {} pack points",
            status.expansion_name,
            status.collected(),
            status.total_cards,
            status.missing_secret,
            status.pack_points
        );
    }
    println!();

    println!("=== Booster data audit ===");
    for audit in audit_offering_totals(&catalog) {
        let flag = if audit.is_short() { "  (short of 100%)" } else { "" };
        println!(
            "  {} / {}: slots 1-3 {:.3}%, slot 4 {:.3}%, slot 5 {:.3}%, rare {:.3}%{}",
            audit.expansion_name,
            audit.booster_name,
            audit.totals.first_three,
            audit.totals.fourth,
            audit.totals.fifth,
            audit.totals.rare_pack,
            flag
        );
    }
    println!();

    println!("=== Booster probabilities for missing cards ===");
    for row in rank_boosters(&catalog, &collection, None) {
        println!(
            "  {:>8.3}  {} / {}",
            row.probability, row.expansion_name, row.booster_name
        );
    }
    println!();

    let wishlist = sample::sample_wishlist();
    println!(
        "=== Booster probabilities with wishlist '{}' ===",
        wishlist.name()
    );
    for row in rank_boosters(&catalog, &collection, Some(&wishlist)) {
        println!(
            "  {:>8.3}  {} / {}",
            row.probability, row.expansion_name, row.booster_name
        );
    }
    println!();

    let whole = run_report(
        "Whole collection",
        &catalog,
        &collection,
        &packsim::sim::complete::fully,
        &config,
    );
    run_report(
        "Non-secret cards",
        &catalog,
        &collection,
        &packsim::sim::complete::non_secret,
        &config,
    );

    if save_json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, whole.to_json()).expect("Failed to write JSON report");
        println!("JSON report saved to: {}", filename);
    }
}

fn run_report<F>(
    title: &str,
    catalog: &[packsim::Expansion],
    collection: &packsim::UserCollection,
    is_complete: &F,
    config: &SimConfig,
) -> SimSummary
where
    F: Fn(&packsim::Expansion, &[packsim::CardNumber]) -> bool + Sync,
{
    println!("=== {} ===", title);
    match run_simulations(catalog, collection, is_complete, config) {
        Ok(summary) => {
            println!("{}", summary.to_text());
            summary
        }
        Err(err) => {
            eprintln!("simulation failed: {}", err);
            process::exit(1);
        }
    }
}

fn parse_args(args: &[String]) -> (SimConfig, bool) {
    let mut config = SimConfig::default();
    let mut save_json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--json" => {
                save_json = true;
            }
            "--quick" => {
                config = SimConfig::quick();
            }
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    (config, save_json)
}

fn print_help() {
    println!("packsim Pack-Opening Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of simulation runs (default: 1000)");
    println!("    -s, --seed <S>      Root random seed for reproducibility");
    println!("    --json              Save JSON report");
    println!("    --quick             Quick check (100 runs)");
    println!("    -h, --help          Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                # Default run");
    println!("    cargo run --bin simulate -- -n 100     # 100 runs");
    println!("    cargo run --bin simulate -- --seed 42  # Reproducible");
}
