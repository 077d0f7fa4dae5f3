//! Inertia sensor agent simulator
//!
//! Integrates random accelerometer readings into a position once per second
//! and prints each tick until interrupted (Ctrl-C / SIGTERM).

use anyhow::Context;
use clap::Parser;
use inertia_core::{ReportFormat, RuntimeConfig, SensorAgent, StopReason};
use inertia_env::{shutdown_channel, AgentContext, SignalListener, TokioContext};
use inertia_sim::UniformSensors;
use tracing::{debug, error, info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Printed once when a termination signal ends the run.
const SHUTDOWN_NOTICE: &str = "\nSimulation stopped by user.";

/// Simulated inertial sensor agent
#[derive(Parser, Debug)]
#[command(name = "inertia-sim")]
#[command(about = "Simulate a moving sensor agent, printing its state every second", long_about = None)]
struct Args {
    /// Seed for sensor sampling (0 = random from OS entropy)
    #[arg(short, long, default_value = "0")]
    seed: u64,
    
    /// Stop after this many ticks instead of running until interrupted
    #[arg(long)]
    max_ticks: Option<u64>,
    
    /// Print one JSON object per tick instead of text blocks
    #[arg(long)]
    json: bool,
    
    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { LevelFilter::DEBUG } else { LevelFilter::INFO };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    // Reports own stdout
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;
    
    let context = TokioContext::shared(args.seed);
    let sensors = UniformSensors::from_context(context.as_ref());
    let config = RuntimeConfig {
        max_ticks: args.max_ticks,
        format: if args.json { ReportFormat::Json } else { ReportFormat::Text },
        ..Default::default()
    };
    
    let (handle, listener) = shutdown_channel();
    let mut signals = SignalListener::install().context("failed to listen for termination signals")?;
    context.spawn("signal-listener", async move {
        let mut requested = false;
        loop {
            match signals.recv().await {
                Ok(signal) if requested => {
                    warn!(%signal, "second termination request, exiting immediately");
                    std::process::exit(0);
                }
                Ok(signal) => {
                    info!(%signal, "termination requested");
                    handle.trigger();
                    requested = true;
                }
                Err(e) => {
                    error!("signal listener failed: {}", e);
                    // Keep the handle alive; dropping it would stop the run
                    std::future::pending::<()>().await;
                }
            }
        }
    });
    
    let mut agent = SensorAgent::new(context, sensors, config);
    let mut stdout = std::io::stdout();
    let summary = agent
        .run(listener, &mut stdout)
        .await
        .context("sensor agent failed")?;
    
    debug!(ticks = summary.ticks, elapsed_ms = summary.elapsed.as_millis() as u64, "run finished");
    
    if summary.stop_reason == StopReason::Cancelled {
        println!("{}", SHUTDOWN_NOTICE);
    }
    
    Ok(())
}
