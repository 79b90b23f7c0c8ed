// wallet-core/src/main.rs

use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wif_wallet_core::{BatchProcessor, BatchRecord, BatchSummary, NetworkParams};

/// Derive WIF export keys + P2PKH addresses từ private key hex
#[derive(Debug, Parser)]
#[command(name = "wif-derive", version, about)]
struct Cli {
    /// Private keys (64 hex chars). Bỏ trống để đọc từng dòng từ stdin.
    keys: Vec<String>,

    /// Preset network: mainnet | testnet
    #[arg(long, default_value = "mainnet")]
    network: String,

    /// JSON file chứa NetworkParams (override --network)
    #[arg(long, value_name = "FILE")]
    params: Option<PathBuf>,

    /// Dùng compressed public key + WIF marker
    #[arg(long, conflicts_with = "uncompressed")]
    compressed: bool,

    /// Dùng uncompressed public key (mặc định của preset)
    #[arg(long)]
    uncompressed: bool,

    /// Xử lý song song (rayon)
    #[arg(long)]
    parallel: bool,
}

fn main() -> anyhow::Result<()> {
    // Log ra stderr, stdout chỉ chứa JSON records
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wif_wallet_core=info,wif_derive=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let params = load_params(&cli)?;
    params.validate()?;
    info!(network = %params.name, "Network parameters loaded");

    let keys = if cli.keys.is_empty() {
        read_stdin_keys()?
    } else {
        cli.keys.clone()
    };

    let mut processor = BatchProcessor::new(params);
    if cli.compressed {
        processor = processor.with_compressed(true);
    } else if cli.uncompressed {
        processor = processor.with_compressed(false);
    }

    let records = run(&processor, &keys, cli.parallel);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for record in &records {
        serde_json::to_writer(&mut out, record)?;
        writeln!(out)?;
    }
    out.flush()?;

    let summary = BatchSummary::from_records(&records);
    if summary.failed > 0 {
        warn!(failed = summary.failed, total = summary.total, "Some keys were rejected");
    }

    Ok(())
}

fn load_params(cli: &Cli) -> anyhow::Result<NetworkParams> {
    match &cli.params {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read params file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Invalid params file {}", path.display()))
        }
        None => Ok(NetworkParams::by_name(&cli.network)?),
    }
}

fn read_stdin_keys() -> anyhow::Result<Vec<String>> {
    let mut keys = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            keys.push(trimmed.to_string());
        }
    }
    Ok(keys)
}

#[cfg(feature = "parallel")]
fn run(processor: &BatchProcessor, keys: &[String], parallel: bool) -> Vec<BatchRecord> {
    if parallel {
        processor.process_parallel(keys)
    } else {
        processor.process(keys)
    }
}

#[cfg(not(feature = "parallel"))]
fn run(processor: &BatchProcessor, keys: &[String], parallel: bool) -> Vec<BatchRecord> {
    if parallel {
        warn!("Built without the `parallel` feature, processing sequentially");
    }
    processor.process(keys)
}
