//! LoveMatch demo harness
//!
//! Standalone binary standing in for the presentation layer: takes two
//! birth dates from the command line and prints the engine's report.

use chrono::NaiveDate;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn parse_date(arg: Option<String>, fallback: &str) -> anyhow::Result<NaiveDate> {
    let raw = arg.unwrap_or_else(|| fallback.to_string());
    Ok(NaiveDate::parse_from_str(&raw, "%Y-%m-%d")?)
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut args = std::env::args().skip(1);
    let date_a = parse_date(args.next(), "1990-01-01")?;
    let date_b = parse_date(args.next(), "1992-01-01")?;

    info!("Analyzing compatibility for {} and {}", date_a, date_b);
    let report = engine::analyze(date_a, date_b)?;

    info!(
        "Partner A: {} ({}, {} / {})",
        report.partner_a.zodiac,
        report.partner_a.pillar,
        report.partner_a.nayin.name,
        report.partner_a.element()
    );
    info!(
        "Partner B: {} ({}, {} / {})",
        report.partner_b.zodiac,
        report.partner_b.pillar,
        report.partner_b.nayin.name,
        report.partner_b.element()
    );
    info!(
        "Relations: {}, elements: {}, score: {}/100",
        report
            .relations
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(", "),
        report.element_relation,
        report.score
    );
    info!("Recommended wedding years: {}", report.wedding_years);
    info!("Child forecast: {}", report.child_forecast);

    println!("{}", report.to_json()?);

    Ok(())
}
