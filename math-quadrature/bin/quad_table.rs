//! Print triangle quadrature rules
//!
//! Usage:
//!     cargo run --bin quad-table -- --rule Gauss3
//!     cargo run --bin quad-table -- --order 21 --format json
//!     cargo run --bin quad-table -- --config quadrature.json
//!     cargo run --bin quad-table -- --list

use clap::{Parser, ValueEnum};
use math_audio_quadrature::{
    CATALOG, QuadratureConfig, QuadratureRule, RuleName, RuleSelection, catalog,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quad-table")]
#[command(about = "Print quadrature weights and points of the triangle rule catalog")]
struct Args {
    /// Select the rule by order code (first catalog match)
    #[arg(short, long, conflicts_with_all = ["rule", "config"])]
    order: Option<i64>,

    /// Select the rule by name, e.g. Gauss3 or Gauss_Degree8
    #[arg(short, long, conflicts_with = "config")]
    rule: Option<String>,

    /// Path to JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "table")]
    format: OutputFormat,

    /// List the catalog instead of printing a rule
    #[arg(short, long)]
    list: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Serialize)]
struct RuleOutput<'a> {
    name: RuleName,
    order_code: i64,
    num_points: usize,
    weight_sum: f64,
    weights: &'a [f64],
    xi: &'a [f64],
    eta: &'a [f64],
}

#[derive(Debug, Serialize)]
struct CatalogEntry {
    order_code: i64,
    name: RuleName,
    num_points: usize,
    reachable_by_order: bool,
}

fn print_catalog(format: OutputFormat) -> anyhow::Result<()> {
    let entries: Vec<CatalogEntry> = CATALOG
        .iter()
        .map(|&(order_code, name)| CatalogEntry {
            order_code,
            name,
            num_points: name.num_points(),
            reachable_by_order: catalog::is_reachable_by_order(name),
        })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Table => {
            println!("{:>6}  {:<14} {:>7}  note", "order", "rule", "points");
            for entry in &entries {
                let note = if entry.reachable_by_order {
                    ""
                } else {
                    "name only"
                };
                println!(
                    "{:>6}  {:<14} {:>7}  {}",
                    entry.order_code,
                    entry.name.as_str(),
                    entry.num_points,
                    note
                );
            }
        }
    }

    Ok(())
}

fn print_rule(rule: &QuadratureRule, format: OutputFormat) -> anyhow::Result<()> {
    let (weights, xi, eta) = rule.quad_values();

    match format {
        OutputFormat::Json => {
            let output = RuleOutput {
                name: rule.name(),
                order_code: rule.order_code(),
                num_points: rule.num_points(),
                weight_sum: rule.weight_sum(),
                weights,
                xi,
                eta,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Table => {
            println!(
                "{} (order {}, {} points, weight sum {:.17})",
                rule.name(),
                rule.order_code(),
                rule.num_points(),
                rule.weight_sum()
            );
            println!("{:>4}  {:>24} {:>24} {:>24}", "#", "weight", "xi", "eta");
            for (i, p) in rule.points().enumerate() {
                println!(
                    "{:>4}  {:>24.17e} {:>24.17e} {:>24.17e}",
                    i,
                    p.weight,
                    p.xi(),
                    p.eta()
                );
            }

            let outside = rule.points_outside_reference(1e-12);
            if !outside.is_empty() {
                println!("points outside the reference triangle: {:?}", outside);
            }
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    if args.list {
        return print_catalog(args.format);
    }

    let config = if let Some(path) = &args.config {
        log::info!("Loading quadrature configuration from {}", path.display());
        QuadratureConfig::from_file(path)?
    } else if let Some(order) = args.order {
        QuadratureConfig::new(RuleSelection::Order(order))
    } else if let Some(rule) = &args.rule {
        QuadratureConfig::new(rule.parse::<RuleName>()?)
    } else {
        anyhow::bail!("select a rule with --order, --rule or --config, or use --list");
    };

    let rule = match config.build() {
        Ok(rule) => rule,
        Err(e) => {
            log::error!("Rule selection failed: {}", e);
            return Err(e.into());
        }
    };

    print_rule(&rule, args.format)
}
