use clap::Parser;
use listing_engine::config::{AppConfig, ExportConfig};
use listing_engine::export::{ListingSink, SqliteSink, TextFileSink, XlsxSink};
use listing_engine::{ListingAnalyzer, ListingRepository, ListingResult, ListingStatus, Snapshot};
use std::path::PathBuf;
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(name = "listing_engine", about = "Run a scripted listing session")]
struct Cli {
    /// Session config file; missing means the built-in demo session.
    #[arg(long, default_value = "listings.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1️⃣ Load config and start logging
    let config = AppConfig::load(&cli.config)?;
    config.init_logging()?;
    info!(config = %cli.config.display(), "listing session starting");

    // 2️⃣ Seed the repository
    let mut repo = ListingRepository::new();
    for listing in config.seed_listings()? {
        report("add", repo.add(listing));
    }

    // 3️⃣ Scripted lookups and mutations
    list_all(&repo);
    run_queries(&repo, &config);
    run_mutations(&mut repo);

    // 4️⃣ Analysis over a frozen copy
    let analyzer = ListingAnalyzer::from_repository(&repo);
    run_analysis(&analyzer, &config).await;

    // 5️⃣ Exports
    write_exports(&config.export, analyzer.snapshot());

    info!("listing session finished");
    Ok(())
}

/// Logs a failed step and carries on; empty-result signals are not failures.
fn report<T>(step: &str, result: ListingResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) if e.is_empty_signal() => {
            info!(step, "{e}");
            None
        }
        Err(e) => {
            warn!(step, error = %e, "operation rejected");
            None
        }
    }
}

fn list_all(repo: &ListingRepository) {
    if let Some(lines) = report("list", repo.list_all()) {
        for line in lines {
            info!("{line}");
        }
    }
}

fn run_queries(repo: &ListingRepository, config: &AppConfig) {
    if let Some(found) = report("find by address", repo.find_by_address("123 main st")) {
        info!(summary = %found.summary(), "found listing");
    }

    let [min, max] = config.analysis.price_range;
    for (min, max) in [(min, max), (-500_000, max)] {
        let hits = report("find by price range", repo.find_by_price_range(min, max))
            .unwrap_or_default();
        info!(min, max, hits = hits.len(), "price range search");
        for listing in hits {
            info!("{}", listing.describe());
        }
    }
}

fn run_mutations(repo: &mut ListingRepository) {
    report("update price", repo.update_price("123 Main St", 275_000));
    report("update price", repo.update_price("123 Main St", -1));
    report("update status", repo.update_status("123 Main St", ListingStatus::Sold));

    if let Some(removed) = report("remove", repo.remove("456 Market Rd")) {
        info!(address = removed.address(), "removed listing");
    }
    report("remove", repo.remove("456 Market Rd"));

    list_all(repo);
}

async fn run_analysis(analyzer: &ListingAnalyzer, config: &AppConfig) {
    analyzer.log_listings();
    for line in analyzer.formatted_lines() {
        info!("{line}");
    }

    let first = analyzer.first_or_default();
    info!(
        count = analyzer.count(),
        first = %first.describe(),
        all_sold = analyzer.all_sold(),
        any_available = analyzer.any_available(),
        none_below_floor = analyzer.none_below_price(config.analysis.price_floor),
        "snapshot overview"
    );

    let (residential, commercial) = analyzer.partition_by_variant();
    info!(residential = residential.len(), commercial = commercial.len(), "partitioned");

    info!(
        addresses = ?analyzer.distinct_addresses_by_price(config.analysis.distinct_limit),
        "cheapest distinct addresses"
    );

    if let (Some(low), Some(high)) = (analyzer.cheapest(), analyzer.most_expensive()) {
        info!(cheapest = low.address(), most_expensive = high.address(), "price extremes");
    }

    for (status, listings) in analyzer.group_by_status() {
        info!(%status, listings = listings.len(), "status group");
    }

    let by_address = analyzer.group_by_address();
    info!(addresses = by_address.len(), "grouped by address");

    let available_over_floor =
        analyzer.filter_by_condition(config.analysis.price_floor, ListingStatus::Available);
    info!(listings = available_over_floor.len(), "available above floor");

    match analyzer.total_price_concurrent().await {
        Ok(total) => info!(total, "total listed value"),
        Err(e) => error!(error = %e, "total listed value unavailable"),
    }
}

fn write_exports(export: &ExportConfig, snapshot: &Snapshot) {
    let mut sinks: Vec<(&str, Box<dyn ListingSink>)> = Vec::new();

    if let Some(path) = &export.text_path {
        sinks.push(("text", Box::new(TextFileSink::new(path))));
    }
    if let Some(path) = &export.xlsx_path {
        sinks.push(("xlsx", Box::new(XlsxSink::new(path))));
    }
    if let Some(path) = &export.sqlite_path {
        match SqliteSink::open(path) {
            Ok(sink) => sinks.push(("sqlite", Box::new(sink))),
            Err(e) => error!(error = %e, "could not open sqlite export"),
        }
    }

    for (name, mut sink) in sinks {
        if let Err(e) = sink.write_snapshot(snapshot) {
            error!(sink = name, error = %e, "export failed");
        }
    }
}
