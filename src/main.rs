//! Catalyst Charts - Main binary
//!
//! Command-line front-end over the catalyst event table, the synthetic
//! series generator and the dashboard analytics.
//!
//! ```text
//! catalyst-charts series --ticker VKTX --seed 42       # chart data with inflections
//! catalyst-charts market                               # statistics and top movers
//! catalyst-charts pipeline --route oral --mechanism dual
//! catalyst-charts feed --limit 5
//! catalyst-charts catalysts --today 2026-01-12
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `info`).

mod config;

use std::path::PathBuf;

use anyhow::{Context, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dashboard::{
    PipelineFilter, PipelineStrength, SentimentLabel, at_least, classify_priority, days_until,
    extract_company, latest, sentiment_score, top_movers, unique_stages,
};
use series::SeriesGenerator;
use tracing::info;
use tracing_subscriber::EnvFilter;
use types::{Mechanism, Priority, Route};

use config::AppConfig;

/// Catalyst Charts - synthetic catalyst-annotated price series and market analytics
#[derive(Parser, Debug)]
#[command(name = "catalyst-charts")]
#[command(about = "Synthetic catalyst-annotated price series and market dashboard analytics")]
#[command(version)]
struct Cli {
    /// Event table file (.json or .toml); built-in table when omitted
    #[arg(long, global = true, env = "CATALYST_EVENTS")]
    events: Option<PathBuf>,

    /// Dashboard dataset file (.json); built-in snapshot when omitted
    #[arg(long, global = true, env = "CATALYST_DATA")]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a synthetic price series for one ticker
    Series {
        /// Ticker symbol, e.g. VKTX
        #[arg(short, long)]
        ticker: String,

        /// End price (defaults to the ticker's current quote)
        #[arg(short, long)]
        price: Option<f64>,

        /// Daily noise as a fraction of price
        #[arg(short, long)]
        volatility: Option<f64>,

        /// RNG seed for reproducible output
        #[arg(long, env = "CATALYST_SEED")]
        seed: Option<u64>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Market statistics, top movers and sentiment
    Market {
        /// Number of top movers to show
        #[arg(short = 'n', long, default_value_t = 5)]
        movers: usize,
    },
    /// Filter the drug pipeline
    Pipeline {
        /// oral | injection
        #[arg(long)]
        route: Option<Route>,

        /// mono | dual | triple | novel
        #[arg(long)]
        mechanism: Option<Mechanism>,

        /// Exact stage label, e.g. "Phase 3"
        #[arg(long)]
        stage: Option<String>,
    },
    /// Latest intelligence items
    Feed {
        /// Number of items to show
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,

        /// Only items at or above this priority (medium | high | critical)
        #[arg(long)]
        min_priority: Option<Priority>,
    },
    /// Classify a raw headline into a priority and ticker
    Classify {
        /// Headline and summary text
        text: String,
    },
    /// FDA countdown and the catalyst calendar
    Catalysts {
        /// Reference date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::new()
        .events_path(cli.events)
        .data_path(cli.data);

    match cli.command {
        Commands::Series {
            ticker,
            price,
            volatility,
            seed,
            json,
        } => {
            let mut config = config.seed(seed);
            if let Some(v) = volatility {
                config = config.volatility(v);
            }
            run_series(&config, &ticker, price, json)
        }
        Commands::Market { movers } => run_market(&config.movers(movers)),
        Commands::Pipeline {
            route,
            mechanism,
            stage,
        } => run_pipeline(
            &config,
            PipelineFilter {
                route,
                mechanism,
                stage,
            },
        ),
        Commands::Feed {
            limit,
            min_priority,
        } => run_feed(&config.feed_limit(limit), min_priority),
        Commands::Classify { text } => {
            println!("{}\t{}", classify_priority(&text), extract_company(&text));
            Ok(())
        }
        Commands::Catalysts { today } => run_catalysts(&config, today),
    }
}

// ============================================================================
// Series
// ============================================================================

fn run_series(
    config: &AppConfig,
    ticker: &str,
    price: Option<f64>,
    json: bool,
) -> anyhow::Result<()> {
    let events = config.load_events().context("loading event table")?;

    let end_price = match price {
        Some(p) => p,
        None => {
            let data = config.load_data().context("loading dashboard data")?;
            match data.quote(ticker) {
                Some(quote) => quote.price,
                None => bail!("no quote for {ticker}; pass --price"),
            }
        }
    };

    let seed = config.seed.unwrap_or_else(rand::random);
    info!(ticker, end_price, volatility = config.volatility, seed, "generating series");

    let generator = SeriesGenerator::new(config.series.clone(), &events)?;
    let points = generator.generate_seeded(ticker, end_price, config.volatility, seed)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&points)?);
        return Ok(());
    }

    println!("{ticker}  end={end_price:.2}  vol={}  seed={seed}", config.volatility);
    for point in &points {
        match &point.attached_event {
            Some(event) => println!(
                "{:>7}  {:>10.2}  * {} [{}] {}",
                point.fine_label, point.price, event.description, event.polarity, event.impact_note
            ),
            None => println!("{:>7}  {:>10.2}", point.fine_label, point.price),
        }
    }
    Ok(())
}

// ============================================================================
// Market
// ============================================================================

fn run_market(config: &AppConfig) -> anyhow::Result<()> {
    let data = config.load_data().context("loading dashboard data")?;
    let strength = PipelineStrength::default();

    let Some(stats) = data.statistics() else {
        println!("No market data.");
        return Ok(());
    };

    println!("Market Data");
    println!("  Total stocks:   {}", stats.total_stocks);
    println!("  Average change: {:+.2}%", stats.avg_change);
    println!(
        "  Gainers: {} | Losers: {} | Unchanged: {}",
        stats.gainers, stats.losers, stats.unchanged
    );

    println!("\nTop Movers");
    for (i, quote) in top_movers(&data.market_data, config.movers).iter().enumerate() {
        let score = sentiment_score(&quote.ticker, quote.change_percent, &strength);
        println!(
            "{}. {:6} ${:>8.2}  {:>+7.2}%  {:>7}  {} ({:.2})  {}",
            i + 1,
            quote.ticker,
            quote.price,
            quote.change_percent,
            quote.market_cap,
            SentimentLabel::from_score(score),
            score,
            quote.company
        );
    }
    Ok(())
}

// ============================================================================
// Pipeline
// ============================================================================

fn run_pipeline(config: &AppConfig, filter: PipelineFilter) -> anyhow::Result<()> {
    let data = config.load_data().context("loading dashboard data")?;

    if let Some(stage) = &filter.stage {
        let stages = unique_stages(&data.pipeline);
        if !stages.contains(&stage.as_str()) {
            bail!("unknown stage '{stage}'; known stages: {}", stages.join(", "));
        }
    }

    let hits = filter.apply(&data.pipeline);
    info!(matched = hits.len(), total = data.pipeline.len(), "pipeline filtered");

    for entry in hits {
        let weight_loss = entry
            .weight_loss_pct
            .map(|w| format!("{w:.1}%"))
            .unwrap_or_else(|| "TBD".to_string());
        println!(
            "{:14} {:18} {:9} {:14} {:>6}  {:16} {}",
            entry.company,
            entry.drug,
            entry.route,
            entry.mechanism,
            weight_loss,
            entry.stage,
            entry.status
        );
    }
    Ok(())
}

// ============================================================================
// Feed
// ============================================================================

fn run_feed(config: &AppConfig, min_priority: Option<Priority>) -> anyhow::Result<()> {
    let data = config.load_data().context("loading dashboard data")?;
    let items: Vec<_> = match min_priority {
        Some(min) => at_least(&data.intelligence_feed, min).into_iter().cloned().collect(),
        None => data.intelligence_feed.clone(),
    };

    for item in latest(&items, config.feed_limit) {
        println!(
            "[{}] {:8} {:6} {}",
            item.date, item.priority, item.company, item.headline
        );
        println!("    {}", item.summary);
        if let Some(impact) = &item.impact {
            println!("    Impact: {impact}");
        }
    }
    Ok(())
}

// ============================================================================
// Catalysts
// ============================================================================

fn run_catalysts(config: &AppConfig, today: Option<NaiveDate>) -> anyhow::Result<()> {
    let data = config.load_data().context("loading dashboard data")?;
    let today = today.unwrap_or_else(|| chrono::Local::now().date_naive());

    if let Some(fda) = data.fda_decision_date {
        println!("FDA decision in {} days ({fda})", days_until(fda, today));
    }

    for milestone in &data.milestones {
        let marker = if milestone.critical { "!" } else { " " };
        println!(
            "{marker} {:>9}  {}  {}",
            milestone.when, milestone.event, milestone.description
        );
    }
    Ok(())
}
