use clap::Parser;
use speak_time::utils::logger;
use speak_time::{build_drill_rows, write_drill_table};
use std::fs::File;
use std::io::BufWriter;

#[derive(Parser)]
#[command(name = "drill-table")]
#[command(about = "Export every minute of an hour in all three phrasings")]
struct Args {
    /// Hour to export (0-23)
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(u32).range(0..=23))]
    hour: u32,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    output: Option<String>,

    /// Write tab-separated values instead of CSV
    #[arg(long)]
    tsv: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let rows = build_drill_rows(args.hour);
    let delimiter = if args.tsv { b'\t' } else { b',' };

    match &args.output {
        Some(path) => {
            let file = File::create(path)?;
            write_drill_table(&rows, BufWriter::new(file), delimiter)?;
            tracing::info!("📁 Drill table saved to: {}", path);
        }
        None => write_drill_table(&rows, std::io::stdout().lock(), delimiter)?,
    }

    Ok(())
}
