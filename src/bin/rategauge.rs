use std::path::PathBuf;
use std::time::Duration;
use clap::Parser;
use tracing::{error, info};
use rategauge::config::{parse_tag, RateUnit};
use rategauge::metrics::{AttributeValue, Attributes};
use rategauge::schedule::run_until;
use rategauge::snapshot::{export_gauges, load_snapshots};
use rategauge::MeteredTransformer;

const ENV_LOG: &str = "RATEGAUGE_LOG";

#[derive(Parser, Debug)]
#[command(author, version, about = "Convert metered rate snapshots into gauges", long_about = None)]
struct Args {
    /// JSON file mapping metric names to their captured rates
    #[arg(short, long)]
    snapshots: PathBuf,

    /// Unit rates are reported in (seconds, minutes, hours, days)
    #[arg(short, long, default_value_t = RateUnit::Seconds)]
    rate_unit: RateUnit,

    /// Base attribute attached to every gauge, as key=value
    #[arg(short, long = "tag", value_parser = parse_tag)]
    tags: Vec<(String, AttributeValue)>,

    /// Re-export every N seconds until interrupted
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    interval: Option<u64>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging();

    let transformer = MeteredTransformer::for_unit(args.rate_unit);
    let base: Attributes = args.tags.iter().cloned().collect();

    info!(rate_unit = %args.rate_unit, tags = base.len(), "rategauge starting");

    let Some(secs) = args.interval else {
        return export_once(&args, &transformer, &base);
    };

    let shutdown = tokio::signal::ctrl_c();
    run_until(Duration::from_secs(secs), shutdown, || {
        // The snapshot file may be rewritten between cycles.
        if let Err(e) = export_once(&args, &transformer, &base) {
            error!("export cycle failed: {}", e);
        }
    })
    .await;

    Ok(())
}

fn export_once(
    args: &Args,
    transformer: &MeteredTransformer,
    base: &Attributes,
) -> Result<(), Box<dyn std::error::Error>> {
    let snapshots = load_snapshots(&args.snapshots)?;
    let gauges = export_gauges(transformer, &snapshots, base);

    let json = if args.pretty {
        serde_json::to_string_pretty(&gauges)?
    } else {
        serde_json::to_string(&gauges)?
    };
    println!("{}", json);

    info!(metrics = snapshots.len(), gauges = gauges.len(), "exported");
    Ok(())
}

fn init_logging() {
    let filter = std::env::var(ENV_LOG)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_env_filter(filter)
        .init();
}
