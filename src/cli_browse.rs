use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use inditravel_server::air_quality::{AirQualitySource, OpenMeteoClient, OPEN_METEO_BASE_URL};
use inditravel_server::catalog::{load_catalog, ProfileRecord};
use inditravel_server::enrichment::enrich_profiles;
use inditravel_server::query::{filter_and_sort, SortKey};
use inditravel_server::selection::{SelectionController, ToggleOutcome};
use inditravel_server::views::{ComparisonView, MetricCell};

fn parse_catalog_path(s: &str) -> Result<PathBuf> {
    PathBuf::from(s)
        .canonicalize()
        .with_context(|| format!("Error resolving path: {}", s))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the JSON catalog of state profiles.
    #[clap(value_parser = parse_catalog_path)]
    pub path: PathBuf,

    /// Only list profiles whose name or tagline contains this text.
    #[clap(short, long, default_value = "")]
    pub query: String,

    #[clap(short, long, value_enum, default_value_t = SortKey::Name)]
    pub sort: SortKey,

    /// Compare these profile ids instead of listing (at most 3).
    #[clap(short, long, num_args = 1..)]
    pub compare: Vec<String>,

    /// Refresh AQI values from Open-Meteo before printing.
    #[clap(long)]
    pub live: bool,
}

fn print_profile(profile: &ProfileRecord) {
    println!(
        "{:<4} {:<20} AQI {:>3} {:<10}{} safety {:>4} culture {:>4} infra {:>4}  \"{}\"",
        profile.id,
        profile.name,
        profile.aqi.value,
        profile.aqi.label().to_string(),
        if profile.aqi.is_realtime { "*" } else { " " },
        profile.women_safety_score,
        profile.cultural_richness_score,
        profile.infrastructure_score,
        profile.tagline,
    );
}

fn format_cell(cell: &MetricCell) -> String {
    match cell {
        MetricCell::Text { text } => text.clone(),
        MetricCell::Aqi {
            value,
            label,
            is_realtime,
        } => format!("{} {}{}", value, label, if *is_realtime { " (live)" } else { "" }),
        MetricCell::Score { value, max, .. } => format!("{}/{}", value, max),
        MetricCell::Crime { status } => status.to_string(),
    }
}

fn print_comparison(view: &ComparisonView) {
    print!("{:<20}", "");
    for column in &view.columns {
        print!(" | {:<28}", column.name);
    }
    println!();
    for row in &view.rows {
        print!("{:<20}", row.title);
        for cell in &row.cells {
            print!(" | {:<28}", format_cell(cell));
        }
        println!();
    }
    println!();
    for series in &view.radar.series {
        println!("{} ({}): {:?}", series.name, series.color, series.values);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();
    println!("Cli Browse loading catalog at {}...", cli_args.path.display());

    let mut profiles = load_catalog(&cli_args.path)
        .with_context(|| format!("Failed to load catalog {:?}", cli_args.path))?;

    if cli_args.live {
        println!("Fetching live AQI...");
        let source: Arc<dyn AirQualitySource> = Arc::new(OpenMeteoClient::new(OPEN_METEO_BASE_URL, 10)?);
        let (enriched, summary) = enrich_profiles(source, profiles).await;
        println!(
            "{} live, {} failed, {} without coordinates",
            summary.live, summary.failed, summary.skipped
        );
        profiles = enriched;
    }
    println!("Done!\n");

    if cli_args.compare.is_empty() {
        let results = filter_and_sort(&profiles, &cli_args.query, cli_args.sort);
        if results.is_empty() {
            println!("No matches found for \"{}\".", cli_args.query);
        }
        for profile in results {
            print_profile(profile);
        }
        return Ok(());
    }

    let mut selection = SelectionController::new();
    for id in &cli_args.compare {
        if !profiles.iter().any(|p| &p.id == id) {
            bail!("Unknown profile id \"{}\"", id);
        }
        if selection.contains(id) {
            continue;
        }
        if selection.toggle(id) == ToggleOutcome::Rejected {
            bail!("Can compare at most {} profiles", selection.len());
        }
    }
    let selected: Vec<ProfileRecord> = selection
        .ids()
        .iter()
        .filter_map(|id| profiles.iter().find(|p| &p.id == id).cloned())
        .collect();
    print_comparison(&ComparisonView::assemble(&selected, false));

    Ok(())
}
