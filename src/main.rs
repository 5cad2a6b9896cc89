mod config;
mod error;
mod estimator;
mod export;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tabled::{settings::Style, Table, Tabled};

use crate::config::{config_dir, load_estimate, Currency, EstimateConfig, ESTIMATE_TEMPLATE};
use crate::error::{EstimateError, Result};
use crate::estimator::{derive_hours, derive_price, HoursBreakdown, PriceBreakdown};
use crate::export::{export_filename, write_export};

#[derive(Parser)]
#[command(name = "sitequote")]
#[command(version, about = "Website project pricing estimator", long_about = None)]
struct Cli {
    /// Path to config directory (default: ~/.sitequote or XDG config)
    #[arg(short = 'C', long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize config directory with an estimate template
    Init,

    /// Compute and display the hour and price breakdown
    Show,

    /// List supported currencies and conversion factors
    Currencies,

    /// Export the estimate as a timestamped JSON document
    Export {
        /// Custom output file path (default: output_dir/ESTIMATE-<timestamp>.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Determine config directory
    let cfg_dir = match cli.config_dir {
        Some(p) => p,
        None => config_dir()?,
    };

    match cli.command {
        Commands::Init => cmd_init(&cfg_dir),
        Commands::Show => cmd_show(&cfg_dir),
        Commands::Currencies => cmd_currencies(),
        Commands::Export { output } => cmd_export(&cfg_dir, output),
    }
}

/// Initialize config directory with the estimate template
fn cmd_init(cfg_dir: &PathBuf) -> Result<()> {
    use std::fs;

    if cfg_dir.exists() {
        return Err(EstimateError::AlreadyInitialized(cfg_dir.clone()));
    }

    fs::create_dir_all(cfg_dir)?;
    fs::create_dir_all(cfg_dir.join("output"))?;

    fs::write(cfg_dir.join("estimate.toml"), ESTIMATE_TEMPLATE)?;

    println!("Initialized sitequote config at: {}", cfg_dir.display());
    println!();
    println!("Next steps:");
    println!(
        "  1. Describe your project:  $EDITOR {}/estimate.toml",
        cfg_dir.display()
    );
    println!("  2. View the breakdown:     sitequote show");
    println!("  3. Export the estimate:    sitequote export");

    Ok(())
}

// Table row structs for tabled
#[derive(Tabled)]
struct HourRow {
    #[tabled(rename = "WORK")]
    component: &'static str,
    #[tabled(rename = "HOURS")]
    hours: String,
}

#[derive(Tabled)]
struct PriceRow {
    #[tabled(rename = "LINE")]
    line: String,
    #[tabled(rename = "AMOUNT")]
    amount: String,
}

#[derive(Tabled)]
struct CurrencyRow {
    #[tabled(rename = "CODE")]
    code: &'static str,
    #[tabled(rename = "SYMBOL")]
    symbol: &'static str,
    #[tabled(rename = "FACTOR")]
    factor: String,
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}

/// Format a money amount with thousands separators and the currency's
/// conventional decimal places and symbol placement.
fn format_money(value: f64, currency: Currency) -> String {
    let decimals = currency.decimals();
    let rounded = format!("{value:.decimals$}");

    // Sign comes from the rounded text so "-0.50" keeps its minus
    let (negative, unsigned) = match rounded.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, rounded.as_str()),
    };

    let (whole, frac) = match unsigned.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (unsigned, None),
    };

    let grouped = group_digits(whole);
    let mut amount = match frac {
        Some(f) => format!("{grouped}.{f}"),
        None => grouped,
    };
    if negative {
        amount.insert(0, '-');
    }

    match currency {
        Currency::Czk | Currency::Pln => format!("{amount} {}", currency.symbol()),
        _ => format!("{}{amount}", currency.symbol()),
    }
}

fn hour_rows(hours: &HoursBreakdown) -> Vec<HourRow> {
    let lines = [
        ("Base build", hours.base),
        ("Extra pages", hours.pages),
        ("Design", hours.design),
        ("CMS", hours.cms),
        ("E-shop", hours.eshop),
        ("SEO", hours.seo),
        ("Languages", hours.languages),
        ("Accessibility", hours.accessibility),
        ("Performance", hours.performance),
        ("Custom features", hours.custom),
        ("TOTAL", hours.total),
    ];

    lines
        .into_iter()
        .map(|(component, value)| HourRow {
            component,
            hours: format!("{value:.1}"),
        })
        .collect()
}

fn price_rows(price: &PriceBreakdown, currency: Currency) -> Vec<PriceRow> {
    let mut rows = vec![
        PriceRow {
            line: format!("Hourly rate ({})", currency.code()),
            amount: format_money(price.rate, currency),
        },
        PriceRow {
            line: "Subtotal".to_string(),
            amount: format_money(price.subtotal, currency),
        },
    ];

    if price.rush_amount > 0.0 {
        rows.push(PriceRow {
            line: "Rush surcharge".to_string(),
            amount: format_money(price.rush_amount, currency),
        });
    }

    if price.discount_amount > 0.0 {
        // Discount is the one negative display line
        rows.push(PriceRow {
            line: "Discount".to_string(),
            amount: format_money(-price.discount_amount, currency),
        });
    }

    rows.push(PriceRow {
        line: "One-off (before VAT)".to_string(),
        amount: format_money(price.one_off, currency),
    });

    if price.vat_amount > 0.0 {
        rows.push(PriceRow {
            line: "VAT".to_string(),
            amount: format_money(price.vat_amount, currency),
        });
    }

    rows.push(PriceRow {
        line: "TOTAL".to_string(),
        amount: format_money(price.total, currency),
    });

    if price.monthly > 0.0 {
        rows.push(PriceRow {
            line: "Monthly (maintenance + hosting)".to_string(),
            amount: format_money(price.monthly, currency),
        });
    }

    rows
}

fn load_checked(cfg_dir: &PathBuf) -> Result<EstimateConfig> {
    if !cfg_dir.exists() {
        return Err(EstimateError::ConfigNotFound(cfg_dir.clone()));
    }
    load_estimate(cfg_dir)
}

/// Compute and display the full breakdown
fn cmd_show(cfg_dir: &PathBuf) -> Result<()> {
    let estimate = load_checked(cfg_dir)?;
    let hours = derive_hours(&estimate);
    let price = derive_price(&hours, &estimate);
    let currency = estimate.rates.currency;

    let hours_table = Table::new(hour_rows(&hours)).with(Style::rounded()).to_string();
    let price_table = Table::new(price_rows(&price, currency))
        .with(Style::rounded())
        .to_string();

    println!("Hours");
    println!("{hours_table}");
    println!();
    println!("Price");
    println!("{price_table}");
    println!();

    // ~8 working hours per day
    let days = hours.total / 8.0;
    let mut summary = format!(
        "Estimated {:.1} hours (~{:.1} working days) at {} per hour, one-off {}",
        hours.total,
        days,
        format_money(price.rate, currency),
        format_money(price.total, currency),
    );
    if price.vat_amount > 0.0 {
        summary.push_str(" incl. VAT");
    }
    if price.monthly > 0.0 {
        summary.push_str(&format!(
            ", plus {} per month",
            format_money(price.monthly, currency)
        ));
    }
    summary.push('.');
    println!("{summary}");

    Ok(())
}

/// List supported currencies
fn cmd_currencies() -> Result<()> {
    let rows: Vec<CurrencyRow> = Currency::ALL
        .iter()
        .map(|c| CurrencyRow {
            code: c.code(),
            symbol: c.symbol(),
            factor: format!("{:.2}", c.factor()),
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");
    println!();
    println!("Factors are fixed conversions from the EUR base, not live rates.");

    Ok(())
}

/// Export the estimate as a JSON document
fn cmd_export(cfg_dir: &PathBuf, output: Option<PathBuf>) -> Result<()> {
    let estimate = load_checked(cfg_dir)?;

    let path = match output {
        Some(p) => p,
        None => {
            let output_dir = cfg_dir.join("output");
            std::fs::create_dir_all(&output_dir)?;
            output_dir.join(export_filename())
        }
    };

    let written = write_export(&estimate, &path)?;

    let hours = derive_hours(&estimate);
    let price = derive_price(&hours, &estimate);
    let currency = estimate.rates.currency;

    println!("Exported estimate");
    println!("  Hours: {:.1}", hours.total);
    println!("  Total: {}", format_money(price.total, currency));
    println!("  Saved: {}", written.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_formatting_groups_and_rounds() {
        assert_eq!(format_money(1824.9, Currency::Eur), "€1,824.90");
        assert_eq!(format_money(1234567.891, Currency::Usd), "$1,234,567.89");
        assert_eq!(format_money(45258.3, Currency::Czk), "45,258 Kč");
        assert_eq!(format_money(-182.49, Currency::Eur), "€-182.49");
    }

    #[test]
    fn money_formatting_keeps_sign_below_one_unit() {
        // A sub-unit discount must still render as a negative line
        assert_eq!(format_money(-0.5, Currency::Eur), "€-0.50");
        assert_eq!(format_money(-0.6, Currency::Czk), "-1 Kč");
        assert_eq!(format_money(0.5, Currency::Eur), "€0.50");
    }

    #[test]
    fn money_formatting_handles_large_magnitudes() {
        assert_eq!(
            format_money(10_000_000_000_000_000_000.0, Currency::Eur),
            "€10,000,000,000,000,000,000.00"
        );
    }
}
