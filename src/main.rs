//! Demo CLI for the node performance toolkit.
//!
//! Thin wrapper only: seeds sample metrics, runs the analysis and
//! optimization surface, and prints the report strings verbatim.

use std::sync::Arc;

use clap::{Parser, Subcommand};

use nodeperf_rs::config::MonitorConfig;
use nodeperf_rs::logging::{init_logging, LogConfig};
use nodeperf_rs::{MetricsStore, OptimizationEngine, PerformanceAnalyzer};

#[derive(Parser)]
#[command(name = "nodeperf", about = "Node performance monitoring demo", version)]
struct Cli {
    /// Log level (overrides configuration)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the sample workload and print analysis and optimization reports
    Demo {
        /// CPU usage percentage above which a node is high-load
        #[arg(long)]
        cpu_high: Option<f64>,
        /// CPU usage percentage below which a node is underutilized
        #[arg(long)]
        cpu_low: Option<f64>,
    },
    /// Write a sample configuration file
    SampleConfig {
        /// Output path
        #[arg(long, default_value = "nodeperf.toml")]
        path: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = MonitorConfig::load()?;

    let level = cli
        .log_level
        .or_else(|| config.log_level.clone())
        .unwrap_or_else(|| "info".to_string());
    init_logging(&LogConfig::default().with_level(level))?;

    match cli.command {
        Command::Demo { cpu_high, cpu_low } => {
            let cpu_high = cpu_high.unwrap_or(config.thresholds.cpu_high);
            let cpu_low = cpu_low.unwrap_or(config.thresholds.cpu_low);
            run_demo(cpu_high, cpu_low);
        }
        Command::SampleConfig { path } => {
            MonitorConfig::generate_sample_config(&path)?;
            tracing::info!(path = %path, "sample configuration written");
        }
    }

    Ok(())
}

fn run_demo(cpu_high: f64, cpu_low: f64) {
    let store = Arc::new(MetricsStore::new());
    store.update("Node1", 90.0, 70.0, 150.0);
    store.update("Node2", 45.0, 60.0, 100.0);
    store.update("Node3", 30.0, 50.0, 80.0);

    println!("Node Performance Metrics:");
    for metrics in store.list_all() {
        println!("{}", metrics);
    }

    let analyzer = PerformanceAnalyzer::new(Arc::clone(&store));
    let averages = analyzer.calculate_average_metrics();
    println!(
        "Averages: CPU {:.2}%, Memory {:.2}%, Bandwidth {:.2} Mbps",
        averages.average_cpu_usage, averages.average_memory_usage, averages.average_bandwidth
    );

    println!("{}", analyzer.suggest_task_redistribution(cpu_high));

    let engine = OptimizationEngine::new(store);
    println!("{}", engine.optimize_network(cpu_high, cpu_low));
}
