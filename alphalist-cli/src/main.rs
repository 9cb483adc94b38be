mod config;
mod record;
mod report;

use std::path::PathBuf;

use alphalist_core::{AlphabetList, Heights, alphalist_state::Sectioner};
use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use config::Config;
use report::Report;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file containing an array of records
    input: PathBuf,

    /// Record field to group by (overrides the config file)
    #[arg(short, long)]
    field: Option<String>,

    /// Don't start sections with a header entry
    #[arg(long)]
    no_header: bool,

    /// Always show A-Z in the jump bar, disabling letters without rows
    #[arg(long)]
    all_letters: bool,

    /// Height of a row entry
    #[arg(long)]
    item_height: Option<f32>,

    /// Height of a header entry
    #[arg(long)]
    header_height: Option<f32>,

    /// Resolve a press on this jump-bar letter
    #[arg(long)]
    jump: Option<char>,

    /// Config file to read defaults from
    #[arg(long, default_value = Config::FILENAME)]
    config: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("alphalist=info")),
        )
        .init();

    let args = Args::parse();
    let config = Config::load(&args.config)?;

    let field = args
        .field
        .or(config.field)
        .context("No field to group by; pass --field or set `field` in the config")?;

    let mut options = config.list;
    if args.no_header {
        options.show_header = false;
    }
    if args.all_letters {
        options.show_all_letters = true;
    }
    let heights = Heights {
        header: args.header_height.unwrap_or(options.header_height),
        row: args.item_height.unwrap_or(options.item_height),
    };
    anyhow::ensure!(
        heights.header > 0.0 && heights.row > 0.0,
        "Entry heights must be positive, got header {} and row {}",
        heights.header,
        heights.row
    );
    options.header_height = heights.header;
    options.item_height = heights.row;

    let records = record::load(&args.input)?;
    tracing::info!(
        "loaded {} records from {}",
        records.len(),
        args.input.display()
    );

    let list = AlphabetList::new(
        records,
        move |record: &serde_json::Value| record::field_key(record, &field),
        options,
    );

    // Presses use the same letter derivation as keys, so `m` jumps to `M`.
    let jump = args
        .jump
        .map(|c| Sectioner::new().letter_for(c.encode_utf8(&mut [0; 4])));
    let report = Report::new(&list, jump);

    match args.format {
        Format::Text => print!("{}", report.to_text()),
        Format::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        ),
    }

    Ok(())
}
