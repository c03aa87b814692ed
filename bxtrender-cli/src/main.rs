//! B-Xtrender CLI — run a backtest or scan a set of CSV histories.
//!
//! Commands:
//! - `run` — one candle history (CSV file or synthetic), one mode; prints a
//!   summary, optionally exports trades CSV and a result JSON artifact
//! - `scan` — TOML config listing histories and modes; evaluates every
//!   (history, mode) pair in parallel and prints a classification table

use anyhow::{bail, Context, Result};
use chrono::DateTime;
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use bxtrender_core::{
    compute_metrics, simulate, Candle, Metrics, Mode, ModeConfig, SignalAdvice, Simulation, Trade,
};

#[derive(Parser)]
#[command(name = "bxtrender", about = "B-Xtrender backtesting engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Backtest one candle history under one mode.
    Run {
        /// CSV file with `time,open,high,low,close` rows (unix seconds).
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Use a seeded synthetic history instead of a CSV file.
        #[arg(long, default_value_t = false)]
        synthetic: bool,

        /// Synthetic history length in bars.
        #[arg(long, default_value_t = 300)]
        bars: usize,

        /// Mode: defensive, aggressive, quant, ditz, trader.
        #[arg(long, default_value = "quant")]
        mode: String,

        /// Optional TOML file overriding the default engine config.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write the full result (trades, metrics, advice) as JSON.
        #[arg(long)]
        json: Option<PathBuf>,

        /// Export the trade ledger as CSV.
        #[arg(long)]
        trades_csv: Option<PathBuf>,
    },
    /// Evaluate many histories across modes from a TOML scan config.
    Scan {
        /// Scan config path.
        #[arg(long)]
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            csv,
            synthetic,
            bars,
            mode,
            config,
            json,
            trades_csv,
        } => run_cmd(csv, synthetic, bars, &mode, config, json, trades_csv),
        Commands::Scan { config } => scan_cmd(&config),
    }
}

// ── run ──────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct RunResult {
    source: String,
    mode: Mode,
    config: ModeConfig,
    bar_count: usize,
    advice: SignalAdvice,
    metrics: Metrics,
    trades: Vec<Trade>,
}

fn run_cmd(
    csv: Option<PathBuf>,
    synthetic: bool,
    bars: usize,
    mode: &str,
    config_path: Option<PathBuf>,
    json: Option<PathBuf>,
    trades_csv: Option<PathBuf>,
) -> Result<()> {
    if csv.is_some() && synthetic {
        bail!("--csv and --synthetic are mutually exclusive");
    }

    let mode: Mode = mode.parse()?;
    let config = load_engine_config(config_path.as_deref())?;

    let (source, candles) = match csv {
        Some(path) => (
            path.display().to_string(),
            load_candles(&path).with_context(|| format!("loading {}", path.display()))?,
        ),
        None if synthetic => (
            format!("synthetic({bars})"),
            bxtrender_core::synthetic::random_walk_candles(bars, 7),
        ),
        None => bail!("one of --csv or --synthetic is required"),
    };

    let sim = simulate(&candles, &config, mode)?;
    if sim.is_empty() {
        bail!(
            "not enough history: {} candles, need at least {}",
            candles.len(),
            config.min_bars()
        );
    }

    let metrics = compute_metrics(&sim.trades);
    let advice = sim.classify(mode);
    print_summary(&source, mode, candles.len(), &sim, &metrics, &advice);

    if let Some(path) = trades_csv {
        export_trades(&path, &sim.trades)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Trades saved to: {}", path.display());
    }

    if let Some(path) = json {
        let result = RunResult {
            source,
            mode,
            config,
            bar_count: candles.len(),
            advice,
            metrics,
            trades: sim.trades,
        };
        std::fs::write(&path, serde_json::to_string_pretty(&result)?)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Result saved to: {}", path.display());
    }

    Ok(())
}

fn print_summary(
    source: &str,
    mode: Mode,
    bar_count: usize,
    sim: &Simulation,
    metrics: &Metrics,
    advice: &SignalAdvice,
) {
    println!();
    println!("=== B-Xtrender Result ===");
    println!("Source:         {source}");
    println!("Mode:           {}", mode.name());
    println!("Bars:           {bar_count}");
    println!("Signal:         {:?} ({} bars)", advice.signal, advice.bars);
    println!();
    println!("--- Performance ---");
    println!("Trades:         {}", metrics.total_trades);
    println!("Win Rate:       {:.1}%", metrics.win_rate);
    println!("Risk/Reward:    {:.2}", metrics.risk_reward);
    println!("Total Return:   {:.2}%", metrics.total_return);
    println!("Avg Return:     {:.2}%", metrics.avg_return);
    if let Some(open) = sim.trades.iter().find(|t| t.is_open) {
        println!(
            "Open Position:  entered {} at {:.2} ({:+.2}% unrealized)",
            format_time(open.entry_time),
            open.entry_price,
            open.return_pct
        );
    }
    println!();
}

// ── scan ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ScanConfig {
    /// Modes to evaluate; defaults to all five.
    #[serde(default)]
    modes: Vec<String>,
    #[serde(default)]
    engine: ModeConfig,
    targets: Vec<ScanTarget>,
}

#[derive(Debug, Deserialize)]
struct ScanTarget {
    symbol: String,
    csv: PathBuf,
}

struct ScanRow {
    symbol: String,
    mode: Mode,
    outcome: Result<(SignalAdvice, Metrics)>,
}

fn scan_cmd(config_path: &Path) -> Result<()> {
    let raw = std::fs::read_to_string(config_path)
        .with_context(|| format!("reading {}", config_path.display()))?;
    let scan: ScanConfig = toml::from_str(&raw)
        .with_context(|| format!("parsing {}", config_path.display()))?;
    if scan.targets.is_empty() {
        bail!("scan config has no targets");
    }

    let modes: Vec<Mode> = if scan.modes.is_empty() {
        Mode::ALL.to_vec()
    } else {
        scan.modes
            .iter()
            .map(|m| m.parse::<Mode>().map_err(Into::into))
            .collect::<Result<_>>()?
    };

    // One (target, mode) pair per task; the engine itself is single-threaded
    // and referentially transparent, so the scan parallelizes trivially.
    let engine = &scan.engine;
    let modes = &modes;
    let mut rows: Vec<ScanRow> = scan
        .targets
        .par_iter()
        .flat_map(|target| {
            let candles = load_candles(&target.csv);
            modes
                .par_iter()
                .map(move |&mode| ScanRow {
                    symbol: target.symbol.clone(),
                    mode,
                    outcome: match &candles {
                        Ok(candles) => evaluate(candles, engine, mode),
                        Err(e) => Err(anyhow::anyhow!("{e}")),
                    },
                })
                .collect::<Vec<_>>()
        })
        .collect();

    rows.sort_by(|a, b| {
        a.symbol
            .cmp(&b.symbol)
            .then_with(|| a.mode.name().cmp(b.mode.name()))
    });

    println!(
        "{:<10} {:<11} {:<8} {:>6} {:>9} {:>12}",
        "Symbol", "Mode", "Signal", "Bars", "Win Rate", "Total Ret"
    );
    println!("{}", "-".repeat(60));
    for row in &rows {
        match &row.outcome {
            Ok((advice, metrics)) => println!(
                "{:<10} {:<11} {:<8} {:>6} {:>8.1}% {:>11.2}%",
                row.symbol,
                row.mode.name(),
                format!("{:?}", advice.signal),
                advice.bars,
                metrics.win_rate,
                metrics.total_return
            ),
            Err(e) => println!("{:<10} {:<11} error: {e}", row.symbol, row.mode.name()),
        }
    }
    Ok(())
}

fn evaluate(candles: &[Candle], config: &ModeConfig, mode: Mode) -> Result<(SignalAdvice, Metrics)> {
    let sim = simulate(candles, config, mode)?;
    if sim.is_empty() {
        bail!("not enough history ({} candles)", candles.len());
    }
    let metrics = compute_metrics(&sim.trades);
    let advice = sim.classify(mode);
    Ok((advice, metrics))
}

// ── I/O helpers ──────────────────────────────────────────────────────

fn load_engine_config(path: Option<&Path>) -> Result<ModeConfig> {
    let config = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            toml::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?
        }
        None => ModeConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

#[derive(Debug, Deserialize)]
struct CandleRow {
    time: i64,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
}

fn load_candles(path: &Path) -> Result<Vec<Candle>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut candles = Vec::new();
    for row in reader.deserialize() {
        let row: CandleRow = row?;
        candles.push(Candle {
            time: row.time,
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
        });
    }
    if !candles.windows(2).all(|w| w[0].time < w[1].time) {
        bail!("candles are not strictly increasing in time");
    }
    Ok(candles)
}

fn export_trades(path: &Path, trades: &[Trade]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "entry_date",
        "entry_price",
        "exit_date",
        "exit_price",
        "return_pct",
        "is_open",
    ])?;
    for t in trades {
        writer.write_record([
            format_time(t.entry_time),
            format!("{:.4}", t.entry_price),
            t.exit_time.map(format_time).unwrap_or_default(),
            t.exit_price.map(|p| format!("{p:.4}")).unwrap_or_default(),
            format!("{:.4}", t.return_pct),
            t.is_open.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn format_time(time: i64) -> String {
    DateTime::from_timestamp(time, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| time.to_string())
}
